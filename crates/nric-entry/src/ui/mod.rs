//! UI module for NRIC entry
//!
//! Built with iced. The core controller decides; this module renders its
//! state and executes the effects it asks for.

pub mod app;
mod effects;
pub mod handlers;
pub mod message;

pub use app::EntryApp;
pub use message::Message;
