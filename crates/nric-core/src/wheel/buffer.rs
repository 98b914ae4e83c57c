//! Infinite-loop buffer
//!
//! A column renders five consecutive copies of its symbols. Scrolling starts
//! in the middle copy; whenever the offset drifts into the first or the last
//! copy it is shifted by two copies towards the middle. The shift is a whole
//! number of copies, so the selected symbol never changes and the column
//! appears to wrap endlessly.

use crate::selector::{Geometry, Selector};

/// Number of rendered copies of the symbol set
pub const COPIES: usize = 5;

/// Copy that programmatic moves and the initial position target
const CANONICAL_COPY: usize = 2;

/// Copy count that a re-centre shifts by
const SHIFT_COPIES: usize = 2;

/// Smallest symbol set whose five copies still reach both re-centre regions
///
/// The last copy must start above the deepest reachable offset, which takes
/// one copy taller than the window. One extra item keeps a full step of room.
pub fn min_loop_symbols(geometry: Geometry) -> usize {
    (geometry.window_height / geometry.item_height).ceil() as usize + 1
}

#[derive(Debug, Clone)]
pub struct LoopBuffer {
    selector: Selector,
}

impl LoopBuffer {
    pub fn new(selector: Selector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn geometry(&self) -> Geometry {
        self.selector.geometry()
    }

    /// Symbols in one copy
    pub fn alphabet_len(&self) -> usize {
        self.selector.symbols().len()
    }

    /// Items across all copies
    pub fn len(&self) -> usize {
        self.alphabet_len() * COPIES
    }

    pub fn is_empty(&self) -> bool {
        self.alphabet_len() == 0
    }

    /// Height of one copy in pixels
    pub fn set_height(&self) -> f32 {
        self.alphabet_len() as f32 * self.geometry().item_height
    }

    /// Largest reachable scroll offset
    pub fn max_offset(&self) -> f32 {
        let geometry = self.geometry();
        (self.len() as f32 * geometry.item_height - geometry.window_height).max(0.0)
    }

    /// Scrolling to the end of the column triggers the downward re-centre
    pub fn wraps(&self) -> bool {
        self.max_offset() > (COPIES - 1) as f32 * self.set_height()
    }

    /// Offset selecting the first symbol of the middle copy
    pub fn initial_offset(&self) -> f32 {
        self.offset_for_buffered(CANONICAL_COPY * self.alphabet_len())
    }

    /// All rendered items, copy after copy
    pub fn items(&self) -> impl Iterator<Item = char> + '_ {
        (0..COPIES).flat_map(move |_| self.selector.symbols().iter())
    }

    /// Reduce a buffered index to its index in the symbol set
    pub fn true_index(&self, buffered: usize) -> usize {
        match self.alphabet_len() {
            0 => 0,
            n => buffered % n,
        }
    }

    /// Buffered index under the selection point
    pub fn selected_buffered_index(&self, offset: f32) -> usize {
        self.geometry().selected_index(offset, self.len())
    }

    /// Index in the symbol set under the selection point
    pub fn selected_true_index(&self, offset: f32) -> usize {
        self.true_index(self.selected_buffered_index(offset))
    }

    pub fn selected_symbol(&self, offset: f32) -> Option<char> {
        self.selector
            .symbols()
            .get(self.selected_true_index(offset))
    }

    /// Shifted offset when `offset` lies in an outer copy, `None` otherwise
    pub fn recenter(&self, offset: f32) -> Option<f32> {
        let set_height = self.set_height();
        if set_height <= 0.0 {
            return None;
        }
        let shift = SHIFT_COPIES as f32 * set_height;
        if offset < set_height {
            Some(offset + shift)
        } else if offset > (COPIES - 1) as f32 * set_height {
            Some(offset - shift)
        } else {
            None
        }
    }

    /// Offset selecting `symbol` in the middle copy
    pub fn offset_for_symbol(&self, symbol: char) -> Option<f32> {
        self.selector
            .symbols()
            .position(symbol)
            .map(|index| self.offset_for_buffered(CANONICAL_COPY * self.alphabet_len() + index))
    }

    /// Offset that puts the currently selected item exactly on the selection point
    pub fn snap_offset(&self, offset: f32) -> f32 {
        self.offset_for_buffered(self.selected_buffered_index(offset))
    }

    fn offset_for_buffered(&self, buffered: usize) -> f32 {
        self.geometry().offset_for_index(buffered)
    }
}
