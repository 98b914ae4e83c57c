//! NRIC Core - Entry logic shared by the widgets and the application

pub mod config;
pub mod controller;
pub mod effects;
pub mod mode;
pub mod selector;
pub mod sync;
pub mod timer;
pub mod types;
pub mod validation;
pub mod wheel;

pub use controller::{EntryController, EntrySettings};
pub use effects::{Effect, Effects};
pub use mode::Mode;
pub use types::*;
