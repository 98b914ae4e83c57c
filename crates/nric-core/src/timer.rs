//! Single-shot timer bookkeeping
//!
//! The core never sleeps. Arming a [`SingleShot`] hands out a token; the UI
//! layer schedules a wake-up carrying that token and reports back with
//! [`SingleShot::fire`]. Re-arming invalidates every earlier token, so only
//! the newest wake-up has an effect.

/// Identifies one arming of a [`SingleShot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Re-armable single-shot timer state
#[derive(Debug, Clone, Default)]
pub struct SingleShot {
    generation: u64,
    armed: bool,
}

impl SingleShot {
    /// Arm the timer, cancelling any earlier arming
    pub fn arm(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        TimerToken(self.generation)
    }

    /// Cancel without firing
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consume a wake-up. Returns true only for the newest armed token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed && token.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}
