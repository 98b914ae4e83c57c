//! NRIC Entry - identifier entry with looping wheel selectors
//!
//! The window offers two ways to enter a 9-character NRIC
//! (letter, 7 digits, letter):
//!
//! 1. **Wheel mode**: one looping wheel per slot, each with a transparent
//!    text field on top for typing directly into the wheel.
//!
//! 2. **Manual mode**: nine plain text fields.
//!
//! The assembled identifier is POSTed to a validation endpoint; a valid answer
//! may carry a barcode image which replaces the input surface.

pub mod config;
pub mod ui;
