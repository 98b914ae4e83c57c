//! Per-column wheel state
//!
//! Tracks the last known scroll offset, the settle timer that fires once the
//! user stops scrolling, and the suppression window that hides the scroll
//! echo of programmatic moves from the settle logic.

use crate::timer::{SingleShot, TimerToken};

use super::buffer::LoopBuffer;

/// What the column wants done after a scroll report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollObservation {
    /// Jump the column to this offset (loop re-centre)
    pub recenter_to: Option<f32>,
    /// Settle timer armed by this scroll
    pub settle: Option<TimerToken>,
}

/// A programmatic move of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMove {
    pub offset: f32,
    /// Token releasing the suppression window opened by this move
    pub release: TimerToken,
}

#[derive(Debug, Clone)]
pub struct WheelState {
    buffer: LoopBuffer,
    offset: f32,
    settle: SingleShot,
    suppression: SingleShot,
}

impl WheelState {
    pub fn new(buffer: LoopBuffer) -> Self {
        let offset = buffer.initial_offset();
        Self {
            buffer,
            offset,
            settle: SingleShot::default(),
            suppression: SingleShot::default(),
        }
    }

    pub fn buffer(&self) -> &LoopBuffer {
        &self.buffer
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn selected_symbol(&self) -> Option<char> {
        self.buffer.selected_symbol(self.offset)
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppression.is_armed()
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_armed()
    }

    /// Record a scroll report from the rendered column
    ///
    /// While suppressed the offset is recorded but no settle is armed.
    pub fn observe_scroll(&mut self, offset: f32) -> ScrollObservation {
        self.offset = offset;

        if self.is_suppressed() {
            return ScrollObservation {
                recenter_to: None,
                settle: None,
            };
        }

        let recenter_to = self.buffer.recenter(offset);
        if let Some(shifted) = recenter_to {
            self.offset = shifted;
        }

        ScrollObservation {
            recenter_to,
            settle: Some(self.settle.arm()),
        }
    }

    /// Consume a settle wake-up; true when the column has come to rest
    pub fn settle(&mut self, token: TimerToken) -> bool {
        self.settle.fire(token)
    }

    /// Move the column so that `symbol` is selected
    pub fn move_to_symbol(&mut self, symbol: char) -> Option<WheelMove> {
        let offset = self.buffer.offset_for_symbol(symbol)?;
        Some(self.move_to_offset(offset))
    }

    /// Move the column to an exact offset and open a suppression window
    pub fn move_to_offset(&mut self, offset: f32) -> WheelMove {
        self.offset = offset;
        self.settle.cancel();
        WheelMove {
            offset,
            release: self.suppression.arm(),
        }
    }

    /// Re-apply the current offset, e.g. after the column was re-created
    pub fn restore(&mut self) -> WheelMove {
        self.move_to_offset(self.offset)
    }

    /// Close the suppression window if `token` is the newest one
    pub fn release_suppression(&mut self, token: TimerToken) -> bool {
        self.suppression.fire(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{Geometry, Selector};
    use crate::types::SymbolSet;

    fn digit_wheel() -> WheelState {
        WheelState::new(LoopBuffer::new(Selector::new(
            SymbolSet::digits(),
            Geometry::default(),
        )))
    }

    #[test]
    fn test_starts_on_first_symbol() {
        let wheel = digit_wheel();
        assert_eq!(wheel.selected_symbol(), Some('0'));
        assert!(!wheel.is_suppressed());
    }

    #[test]
    fn test_user_scroll_arms_settle() {
        let mut wheel = digit_wheel();
        let observed = wheel.observe_scroll(wheel.offset() + 40.0);
        assert!(observed.recenter_to.is_none());
        let token = observed.settle.unwrap();
        assert!(wheel.settle(token));
        assert_eq!(wheel.selected_symbol(), Some('1'));
    }

    #[test]
    fn test_later_scroll_supersedes_settle() {
        let mut wheel = digit_wheel();
        let first = wheel.observe_scroll(wheel.offset() + 10.0).settle.unwrap();
        let second = wheel.observe_scroll(wheel.offset() + 10.0).settle.unwrap();
        assert!(!wheel.settle(first));
        assert!(wheel.settle(second));
    }

    #[test]
    fn test_programmatic_echo_is_ignored() {
        let mut wheel = digit_wheel();
        let moved = wheel.move_to_symbol('8').unwrap();
        assert!(wheel.is_suppressed());

        let echo = wheel.observe_scroll(moved.offset);
        assert!(echo.settle.is_none());
        assert_eq!(wheel.selected_symbol(), Some('8'));

        assert!(wheel.release_suppression(moved.release));
        assert!(!wheel.is_suppressed());
        assert!(wheel.observe_scroll(moved.offset + 40.0).settle.is_some());
    }

    #[test]
    fn test_newer_move_keeps_suppression() {
        let mut wheel = digit_wheel();
        let first = wheel.move_to_symbol('1').unwrap();
        let second = wheel.move_to_symbol('2').unwrap();
        assert!(!wheel.release_suppression(first.release));
        assert!(wheel.is_suppressed());
        assert!(wheel.release_suppression(second.release));
    }

    #[test]
    fn test_move_cancels_pending_settle() {
        let mut wheel = digit_wheel();
        let token = wheel.observe_scroll(wheel.offset() + 40.0).settle.unwrap();
        wheel.move_to_symbol('5').unwrap();
        assert!(!wheel.settle(token));
        assert_eq!(wheel.selected_symbol(), Some('5'));
    }

    #[test]
    fn test_scroll_into_outer_copy_recenters() {
        let mut wheel = digit_wheel();
        let set_height = wheel.buffer().set_height();
        let near_top = set_height - 45.0;
        let before = wheel.buffer().selected_symbol(near_top);

        let observed = wheel.observe_scroll(near_top);
        assert_eq!(observed.recenter_to, Some(near_top + 2.0 * set_height));
        assert_eq!(wheel.offset(), near_top + 2.0 * set_height);
        assert_eq!(wheel.selected_symbol(), before);
        assert!(observed.settle.is_some());
    }

    #[test]
    fn test_unknown_symbol_does_not_move() {
        let mut wheel = digit_wheel();
        assert!(wheel.move_to_symbol('Q').is_none());
        assert!(!wheel.is_suppressed());
    }
}
