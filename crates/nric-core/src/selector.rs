//! Selector model for one wheel column
//!
//! Maps a continuous scroll offset (pixels) to the selected item of a column
//! and back. Two anchors exist:
//!
//! - **Center**: the item under the visual centre of the window is selected,
//!   `round((offset + (w - h) / 2) / h)`. This matches the highlight band.
//! - **Top**: the item at the top edge is selected, `round(offset / h)`.
//!
//! The inverse subtracts the same bias, so `selected_index(offset_for_index(i)) == i`
//! for either anchor.

use serde::{Deserialize, Serialize};

use crate::types::SymbolSet;

/// Height of one wheel item in pixels
pub const ITEM_HEIGHT: f32 = 40.0;

/// Height of the visible wheel window in pixels
pub const WINDOW_HEIGHT: f32 = 150.0;

/// Which point of the window defines the selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAnchor {
    /// Item under the centre of the window
    #[default]
    Center,
    /// Item at the top edge of the window
    Top,
}

/// Wheel geometry shared by every column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub item_height: f32,
    pub window_height: f32,
    pub anchor: SelectionAnchor,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            item_height: ITEM_HEIGHT,
            window_height: WINDOW_HEIGHT,
            anchor: SelectionAnchor::Center,
        }
    }
}

impl Geometry {
    pub fn with_anchor(anchor: SelectionAnchor) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    /// Distance between the window top and the selection point's item top
    pub fn bias(&self) -> f32 {
        match self.anchor {
            SelectionAnchor::Center => (self.window_height - self.item_height) / 2.0,
            SelectionAnchor::Top => 0.0,
        }
    }

    /// Unclamped index under the selection point (rounded, never truncated)
    pub fn raw_index(&self, offset: f32) -> i64 {
        ((offset + self.bias()) / self.item_height).round() as i64
    }

    /// Selected index among `item_count` items
    ///
    /// Out-of-range positions fall back to index 0.
    pub fn selected_index(&self, offset: f32, item_count: usize) -> usize {
        let raw = self.raw_index(offset);
        if raw < 0 || raw as usize >= item_count {
            0
        } else {
            raw as usize
        }
    }

    /// Offset at which `index` sits exactly on the selection point
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.item_height - self.bias()
    }
}

/// Selection logic for a single column over one copy of its symbols
#[derive(Debug, Clone)]
pub struct Selector {
    symbols: SymbolSet,
    geometry: Geometry,
}

impl Selector {
    pub fn new(symbols: SymbolSet, geometry: Geometry) -> Self {
        Self { symbols, geometry }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Selected index for a scroll offset
    pub fn selected_index(&self, offset: f32) -> usize {
        self.geometry.selected_index(offset, self.symbols.len())
    }

    /// Selected symbol for a scroll offset
    pub fn selected_symbol(&self, offset: f32) -> Option<char> {
        self.symbols.get(self.selected_index(offset))
    }

    /// Offset that selects `symbol`, if the column has it
    pub fn offset_for_symbol(&self, symbol: char) -> Option<f32> {
        self.symbols
            .position(symbol)
            .map(|index| self.geometry.offset_for_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digits(anchor: SelectionAnchor) -> Selector {
        Selector::new(SymbolSet::digits(), Geometry::with_anchor(anchor))
    }

    #[test]
    fn test_center_formula() {
        let geometry = Geometry::default();
        assert_eq!(geometry.bias(), 55.0);
        // (80 + 55) / 40 = 3.375 -> 3
        assert_eq!(geometry.raw_index(80.0), 3);
        // (90 + 55) / 40 = 3.625 -> 4
        assert_eq!(geometry.raw_index(90.0), 4);
    }

    #[test]
    fn test_top_formula() {
        let geometry = Geometry::with_anchor(SelectionAnchor::Top);
        assert_eq!(geometry.raw_index(79.0), 2);
        assert_eq!(geometry.raw_index(81.0), 2);
        assert_eq!(geometry.raw_index(101.0), 3);
        assert_eq!(geometry.offset_for_index(7), 280.0);
    }

    #[test]
    fn test_out_of_range_falls_back_to_zero() {
        let selector = digits(SelectionAnchor::Top);
        assert_eq!(selector.selected_index(-200.0), 0);
        assert_eq!(selector.selected_index(10_000.0), 0);
        assert_eq!(selector.selected_symbol(10_000.0), Some('0'));
    }

    #[test]
    fn test_inverse_roundtrip_both_anchors() {
        for anchor in [SelectionAnchor::Center, SelectionAnchor::Top] {
            let selector = digits(anchor);
            for symbol in SymbolSet::digits().iter().skip(2) {
                let offset = selector.offset_for_symbol(symbol).unwrap();
                assert_eq!(selector.selected_symbol(offset), Some(symbol));
            }
        }
    }

    #[test]
    fn test_unknown_symbol_has_no_offset() {
        assert_eq!(digits(SelectionAnchor::Center).offset_for_symbol('A'), None);
    }

    #[test]
    fn test_sub_item_scroll_selects_nearest() {
        let selector = digits(SelectionAnchor::Top);
        let start = selector.offset_for_symbol('5').unwrap();
        // Less than half an item either way stays on the same item
        assert_eq!(selector.selected_symbol(start + 19.0), Some('5'));
        assert_eq!(selector.selected_symbol(start - 19.0), Some('5'));
        // Past the half-way point moves by exactly one
        assert_eq!(selector.selected_symbol(start + 21.0), Some('6'));
        assert_eq!(selector.selected_symbol(start - 39.0), Some('4'));
    }

    proptest! {
        #[test]
        fn prop_drift_under_half_item_keeps_selection(
            index in 0usize..10,
            drift in -19.9f32..19.9,
            top in prop::bool::ANY,
        ) {
            let anchor = if top { SelectionAnchor::Top } else { SelectionAnchor::Center };
            let geometry = Geometry::with_anchor(anchor);
            let offset = geometry.offset_for_index(index) + drift;
            prop_assert_eq!(geometry.selected_index(offset, 10), index);
        }
    }
}
