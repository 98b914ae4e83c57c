//! Side effects requested by the core
//!
//! Core operations never touch the GUI, the clock or the network. They return
//! an [`Effects`] list which the application turns into framework tasks.

use crate::timer::TimerToken;
use crate::types::FieldRef;
use crate::validation::{LocalInputError, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Programmatically scroll a column; its scroll echo is ignored until
    /// `release` is reported back after the suppression window
    ScrollWheel {
        slot: usize,
        offset: f32,
        release: TimerToken,
    },
    /// Jump a column by whole copies of its alphabet (selection unchanged)
    Recenter { slot: usize, offset: f32 },
    /// (Re)start the settle timer of a column
    ArmSettle { slot: usize, token: TimerToken },
    /// Move keyboard focus to a field
    Focus(FieldRef),
    /// A typed symbol was refused
    Rejected(LocalInputError),
    /// Send an identifier to the validation endpoint
    Submit { request: RequestId, nric: String },
    /// Barcode bytes decoded locally, ready to display
    ShowBarcode { request: RequestId, bytes: Vec<u8> },
    /// Barcode must be downloaded first
    FetchBarcode { request: RequestId, url: String },
}

/// Ordered list of effects from one operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects(Vec<Effect>);

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.0.push(effect);
    }

    pub fn extend(&mut self, other: Effects) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.0.iter()
    }

    /// Last focus move, if any
    pub fn focus(&self) -> Option<FieldRef> {
        self.0.iter().rev().find_map(|effect| match effect {
            Effect::Focus(field) => Some(*field),
            _ => None,
        })
    }

    /// Pending submission, if any
    pub fn submission(&self) -> Option<(RequestId, &str)> {
        self.0.iter().find_map(|effect| match effect {
            Effect::Submit { request, nric } => Some((*request, nric.as_str())),
            _ => None,
        })
    }

    /// Slots that receive a programmatic scroll
    pub fn scrolled_slots(&self) -> Vec<usize> {
        self.0
            .iter()
            .filter_map(|effect| match effect {
                Effect::ScrollWheel { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect()
    }
}

impl IntoIterator for Effects {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Effect> for Effects {
    fn from(effect: Effect) -> Self {
        Self(vec![effect])
    }
}
