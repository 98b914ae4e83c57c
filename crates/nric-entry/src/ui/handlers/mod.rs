//! Message handlers for EntryApp
//!
//! Each handler module is responsible for a specific category of messages.
//! Handlers receive `&mut EntryApp`, forward to the core controller and
//! return the resulting `Task<Message>`.

pub mod fields;
pub mod keyboard;
pub mod mode;
pub mod validation;
pub mod wheel;
