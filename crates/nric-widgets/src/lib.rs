//! Shared UI widgets for NRIC entry
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: owned by `nric_core::EntryController`; widgets never mutate it
//! - **View functions**: take state + callbacks, return `Element<Message>`
//! - **Ids**: static widget ids so the application can scroll and focus
//!
//! ## View Functions
//!
//! - `wheel_row` / `wheel_column`: looping wheel selectors with overlay fields
//! - `manual_row`: plain manual entry fields
//! - `status_line` / `barcode_panel`: validation outcome
//! - `mode_tabs` / `submit_button`: controls

pub mod button_styles;
pub mod controls;
pub mod ids;
pub mod manual;
pub mod result;
pub mod theme;
pub mod wheel;

pub use controls::{mode_tabs, submit_button};
pub use ids::{field_for_id, field_id, wheel_scroll_id};
pub use manual::manual_row;
pub use result::{barcode_panel, status_line};
pub use wheel::{wheel_column, wheel_row};
