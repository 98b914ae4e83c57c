//! Wheel selector columns
//!
//! - [`buffer`]: five-copy loop buffer with re-centring
//! - [`state`]: per-column offset, settle timer and echo suppression

pub mod buffer;
pub mod state;

pub use buffer::{min_loop_symbols, LoopBuffer, COPIES};
pub use state::{ScrollObservation, WheelMove, WheelState};
