//! Input mode controller
//!
//! Two modes decide which representation is authoritative: the wheels (with
//! their overlays) or the manual fields. Only an explicit tab selection
//! changes the mode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Wheel,
    Manual,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Wheel, Mode::Manual];

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Wheel => "Wheel",
            Mode::Manual => "Manual",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSwitch {
    pub from: Mode,
    pub to: Mode,
}

#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new(initial: Mode) -> Self {
        Self { mode: initial }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Select a tab; returns the switch if the mode actually changed
    pub fn select(&mut self, target: Mode) -> Option<ModeSwitch> {
        if target == self.mode {
            return None;
        }
        let switch = ModeSwitch {
            from: self.mode,
            to: target,
        };
        self.mode = target;
        log::info!("select: Mode {} -> {}", switch.from, switch.to);
        Some(switch)
    }
}
