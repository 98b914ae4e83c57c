//! View synchronizer
//!
//! Keeps the three representations of the 9-slot value consistent:
//!
//! - wheel columns ([`WheelState`], value = selected symbol)
//! - overlay fields layered on the wheels
//! - manual fields
//!
//! Every change enters through exactly one representation and is tagged with
//! its [`Origin`]. Propagation writes the other two and never the origin, so
//! an update cannot loop back into the representation that started it. Wheel
//! moves made here open a per-column suppression window; the scroll echo of
//! that move is recorded but does not arm a settle.

use crate::effects::{Effect, Effects};
use crate::selector::{Geometry, Selector};
use crate::timer::TimerToken;
use crate::types::{normalize_input, Alphabet, FieldKind, FieldRef, SLOT_COUNT};
use crate::validation::LocalInputError;
use crate::wheel::{LoopBuffer, WheelMove, WheelState};

/// Settled offsets closer than this to the exact item are left alone
const SNAP_TOLERANCE: f32 = 0.5;

/// Representation a change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Wheel,
    Overlay,
    Manual,
}

#[derive(Debug, Clone)]
pub struct Synchronizer {
    alphabet: Alphabet,
    wheels: Vec<WheelState>,
    overlay: [Option<char>; SLOT_COUNT],
    manual: [Option<char>; SLOT_COUNT],
    focus: Option<FieldRef>,
    /// Field emptied by the most recent edit; the Backspace that did it must not
    /// also jump to the previous slot
    just_cleared: Option<FieldRef>,
}

impl Synchronizer {
    pub fn new(alphabet: Alphabet, geometry: Geometry) -> Self {
        let wheels = (0..SLOT_COUNT)
            .map(|slot| {
                let selector = Selector::new(alphabet.for_slot(slot).clone(), geometry);
                WheelState::new(LoopBuffer::new(selector))
            })
            .collect();

        Self {
            alphabet,
            wheels,
            overlay: [None; SLOT_COUNT],
            manual: [None; SLOT_COUNT],
            focus: None,
            just_cleared: None,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn wheel(&self, slot: usize) -> Option<&WheelState> {
        self.wheels.get(slot)
    }

    pub fn wheel_symbol(&self, slot: usize) -> Option<char> {
        self.wheels.get(slot).and_then(WheelState::selected_symbol)
    }

    pub fn overlay_value(&self, slot: usize) -> Option<char> {
        self.overlay.get(slot).copied().flatten()
    }

    pub fn manual_value(&self, slot: usize) -> Option<char> {
        self.manual.get(slot).copied().flatten()
    }

    /// Value held by a field
    pub fn field_value(&self, field: FieldRef) -> Option<char> {
        match field.kind {
            FieldKind::Overlay => self.overlay_value(field.slot),
            FieldKind::Manual => self.manual_value(field.slot),
        }
    }

    pub fn wheel_symbols(&self) -> [Option<char>; SLOT_COUNT] {
        std::array::from_fn(|slot| self.wheel_symbol(slot))
    }

    pub fn manual_symbols(&self) -> [Option<char>; SLOT_COUNT] {
        self.manual
    }

    /// Every overlay field holds a symbol, i.e. each wheel was set by the user
    pub fn overlay_complete(&self) -> bool {
        self.overlay.iter().all(Option::is_some)
    }

    pub fn focus(&self) -> Option<FieldRef> {
        self.focus
    }

    /// Record that a field gained focus through a click or tab
    pub fn focus_field(&mut self, field: FieldRef) {
        if field.slot < SLOT_COUNT {
            self.focus = Some(field);
        }
    }

    /// Write `symbol` to every representation of `slot` except the wheel when
    /// the wheel is the origin
    fn propagate(&mut self, slot: usize, symbol: Option<char>, origin: Origin, effects: &mut Effects) {
        if origin != Origin::Wheel {
            if let Some(symbol) = symbol {
                if let Some(moved) = self.wheels[slot].move_to_symbol(symbol) {
                    push_move(slot, moved, effects);
                }
            }
        }
        // The overlay only shows what its wheel can hold
        self.overlay[slot] = symbol.filter(|&symbol| self.alphabet.allows(slot, symbol));
        self.manual[slot] = symbol;
        log::debug!("propagate: slot {} <- {:?} from {:?}", slot, symbol, origin);
    }

    fn advance_focus(&mut self, field: FieldRef, effects: &mut Effects) {
        match field.next() {
            Some(next) => {
                self.focus = Some(next);
                effects.push(Effect::Focus(next));
            }
            None => self.focus = Some(field),
        }
    }

    /// A column reported a new scroll offset
    pub fn wheel_scrolled(&mut self, slot: usize, offset: f32) -> Effects {
        let mut effects = Effects::new();
        let Some(wheel) = self.wheels.get_mut(slot) else {
            return effects;
        };

        let observed = wheel.observe_scroll(offset);
        if let Some(offset) = observed.recenter_to {
            log::debug!("wheel_scrolled: slot {} re-centred to {}", slot, offset);
            effects.push(Effect::Recenter { slot, offset });
        }
        match observed.settle {
            Some(token) => effects.push(Effect::ArmSettle { slot, token }),
            None => log::debug!("wheel_scrolled: slot {} echo ignored", slot),
        }
        effects
    }

    /// A column's settle timer fired
    ///
    /// Returns `None` for stale tokens, i.e. when the column has not come to rest.
    pub fn wheel_settled(&mut self, slot: usize, token: TimerToken) -> Option<Effects> {
        let wheel = self.wheels.get_mut(slot)?;
        if !wheel.settle(token) {
            return None;
        }

        let symbol = wheel.selected_symbol()?;
        let mut effects = Effects::new();

        let snapped = wheel.buffer().snap_offset(wheel.offset());
        if (snapped - wheel.offset()).abs() > SNAP_TOLERANCE {
            let moved = wheel.move_to_offset(snapped);
            push_move(slot, moved, &mut effects);
        }

        self.propagate(slot, Some(symbol), Origin::Wheel, &mut effects);
        Some(effects)
    }

    /// A column's suppression window elapsed
    pub fn suppression_elapsed(&mut self, slot: usize, token: TimerToken) {
        if let Some(wheel) = self.wheels.get_mut(slot) {
            wheel.release_suppression(token);
        }
    }

    /// Text typed into an overlay field
    pub fn overlay_input(&mut self, slot: usize, text: &str) -> Effects {
        let mut effects = Effects::new();
        if slot >= SLOT_COUNT {
            return effects;
        }
        let field = FieldRef::overlay(slot);
        self.focus = Some(field);
        self.note_clear(field, text);

        match normalize_input(text) {
            None => self.propagate(slot, None, Origin::Overlay, &mut effects),
            Some(symbol) => {
                if self.accept_overlay(slot, symbol, &mut effects) {
                    self.advance_focus(field, &mut effects);
                }
            }
        }
        effects
    }

    /// Validate and store one overlay symbol
    ///
    /// A refused symbol is dropped and the field falls back to the value the
    /// other representations still hold, or blank when there is none.
    fn accept_overlay(&mut self, slot: usize, symbol: char, effects: &mut Effects) -> bool {
        if self.alphabet.allows(slot, symbol) {
            self.propagate(slot, Some(symbol), Origin::Overlay, effects);
            true
        } else {
            log::debug!("overlay_input: '{}' refused for slot {}", symbol, slot);
            let kept = self.manual[slot].filter(|&kept| self.alphabet.allows(slot, kept));
            self.overlay[slot] = kept;
            effects.push(Effect::Rejected(LocalInputError::IllegalSymbol { slot, symbol }));
            false
        }
    }

    /// Text typed into a manual field
    ///
    /// Any character is stored; the wheel only follows when it has the symbol.
    pub fn manual_input(&mut self, slot: usize, text: &str) -> Effects {
        let mut effects = Effects::new();
        if slot >= SLOT_COUNT {
            return effects;
        }
        let field = FieldRef::manual(slot);
        self.focus = Some(field);
        self.note_clear(field, text);

        let symbol = normalize_input(text);
        self.propagate(slot, symbol, Origin::Manual, &mut effects);
        if symbol.is_some() {
            self.advance_focus(field, &mut effects);
        }
        effects
    }

    fn note_clear(&mut self, field: FieldRef, text: &str) {
        let emptied = self.field_value(field).is_some() && normalize_input(text).is_none();
        self.just_cleared = emptied.then_some(field);
    }

    /// Backspace pressed in `field`, the field that holds keyboard focus
    pub fn backspace(&mut self, field: FieldRef) -> Effects {
        let mut effects = Effects::new();
        if field.slot >= SLOT_COUNT {
            return effects;
        }
        if self.focus != Some(field) {
            log::debug!("backspace: Focus moved to {:?} outside the synchronizer", field);
            self.focus = Some(field);
            self.just_cleared = None;
        }

        if self.just_cleared.take() == Some(field) || self.field_value(field).is_some() {
            return effects;
        }

        if let Some(previous) = field.previous() {
            self.focus = Some(previous);
            effects.push(Effect::Focus(previous));
        }
        effects
    }

    /// Distribute pasted text over consecutive slots of one representation
    ///
    /// Returns the effects and the last slot that received a symbol.
    pub fn paste(&mut self, field: FieldRef, text: &str) -> (Effects, Option<usize>) {
        let mut effects = Effects::new();
        let symbols: Vec<char> = text
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if symbols.is_empty() || field.slot >= SLOT_COUNT {
            return (effects, None);
        }

        let (start, symbols) = if symbols.len() >= SLOT_COUNT {
            (0, &symbols[symbols.len() - SLOT_COUNT..])
        } else {
            (field.slot, &symbols[..])
        };

        let mut last = None;
        for (slot, &symbol) in (start..SLOT_COUNT).zip(symbols) {
            let stored = match field.kind {
                FieldKind::Overlay => self.accept_overlay(slot, symbol, &mut effects),
                FieldKind::Manual => {
                    self.propagate(slot, Some(symbol), Origin::Manual, &mut effects);
                    true
                }
            };
            if stored {
                last = Some(slot);
            }
        }

        let filled_to = last.unwrap_or(start);
        let target = FieldRef {
            kind: field.kind,
            slot: filled_to,
        };
        self.just_cleared = None;
        self.advance_focus(target, &mut effects);
        log::info!("paste: {} symbols from slot {} into {:?}", symbols.len(), start, field.kind);
        (effects, last)
    }

    /// Bulk sync into Wheel mode: every non-empty manual slot drives its wheel and overlay
    pub fn pull_wheels_from_manual(&mut self) -> Effects {
        let mut effects = Effects::new();
        for slot in 0..SLOT_COUNT {
            if let Some(symbol) = self.manual[slot] {
                self.propagate(slot, Some(symbol), Origin::Manual, &mut effects);
            }
        }
        effects
    }

    /// Bulk sync into Manual mode: non-empty manual slots take the wheel value,
    /// empty ones stay blank
    pub fn refresh_manual_from_wheels(&mut self) {
        for slot in 0..SLOT_COUNT {
            if self.manual[slot].is_some() {
                let symbol = self.wheels[slot].selected_symbol();
                self.overlay[slot] = symbol;
                self.manual[slot] = symbol;
            }
        }
    }

    /// Re-apply every column's offset to freshly rendered scrollables
    ///
    /// Columns that already received a move in `effects` are skipped.
    pub fn restore_wheels(&mut self, effects: &mut Effects) {
        let already = effects.scrolled_slots();
        for (slot, wheel) in self.wheels.iter_mut().enumerate() {
            if !already.contains(&slot) {
                push_move(slot, wheel.restore(), effects);
            }
        }
    }
}

fn push_move(slot: usize, moved: WheelMove, effects: &mut Effects) {
    effects.push(Effect::ScrollWheel {
        slot,
        offset: moved.offset,
        release: moved.release,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolSet;

    fn sync() -> Synchronizer {
        Synchronizer::new(Alphabet::default(), Geometry::default())
    }

    fn release(sync: &mut Synchronizer, effects: &Effects) {
        for effect in effects.iter() {
            if let Effect::ScrollWheel { slot, release, .. } = effect {
                sync.suppression_elapsed(*slot, *release);
            }
        }
    }

    fn settle_at(sync: &mut Synchronizer, slot: usize, symbol: char) -> Effects {
        let target = sync.wheel(slot).unwrap().buffer().offset_for_symbol(symbol).unwrap();
        let scrolled = sync.wheel_scrolled(slot, target + 7.0);
        let token = scrolled
            .iter()
            .find_map(|effect| match effect {
                Effect::ArmSettle { token, .. } => Some(*token),
                _ => None,
            })
            .unwrap();
        sync.wheel_settled(slot, token).unwrap()
    }

    #[test]
    fn test_overlay_edit_moves_wheel_and_mirrors() {
        let mut sync = sync();
        let effects = sync.overlay_input(0, "s");

        assert_eq!(sync.overlay_value(0), Some('S'));
        assert_eq!(sync.manual_value(0), Some('S'));
        assert_eq!(sync.wheel_symbol(0), Some('S'));
        assert_eq!(effects.scrolled_slots(), vec![0]);
        assert_eq!(effects.focus(), Some(FieldRef::overlay(1)));
    }

    #[test]
    fn test_overlay_rejects_wrong_set() {
        let mut sync = sync();
        let effects = sync.overlay_input(3, "x");

        assert_eq!(sync.overlay_value(3), None);
        assert_eq!(sync.manual_value(3), None);
        assert_eq!(sync.wheel_symbol(3), Some('0'));
        assert!(effects.focus().is_none());
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::Rejected(LocalInputError::IllegalSymbol { slot: 3, symbol: 'X' })
        )));
    }

    #[test]
    fn test_overlay_rejection_keeps_agreed_value() {
        let mut sync = sync();
        let typed = sync.overlay_input(0, "S");
        release(&mut sync, &typed);

        let effects = sync.overlay_input(0, "5");
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, Effect::Rejected(_))));
        assert_eq!(sync.overlay_value(0), Some('S'));
        assert_eq!(sync.manual_value(0), Some('S'));
        assert_eq!(sync.wheel_symbol(0), Some('S'));
    }

    #[test]
    fn test_overlay_never_shows_symbol_outside_column() {
        let mut sync = sync();
        let typed = sync.manual_input(0, "S");
        release(&mut sync, &typed);
        sync.manual_input(0, "7");

        assert_eq!(sync.manual_value(0), Some('7'));
        assert_eq!(sync.overlay_value(0), None);
        assert_eq!(sync.wheel_symbol(0), Some('S'));

        // Pasting into the manual row follows the same rule
        sync.paste(FieldRef::manual(3), "X");
        assert_eq!(sync.manual_value(3), Some('X'));
        assert_eq!(sync.overlay_value(3), None);
    }

    #[test]
    fn test_overlay_complete_only_after_every_slot_set() {
        let mut sync = sync();
        assert!(!sync.overlay_complete());
        for (slot, symbol) in "S1234567".chars().enumerate() {
            let typed = sync.overlay_input(slot, &symbol.to_string());
            release(&mut sync, &typed);
        }
        assert!(!sync.overlay_complete());
        sync.overlay_input(8, "D");
        assert!(sync.overlay_complete());
    }

    #[test]
    fn test_overlay_on_last_slot_does_not_advance() {
        let mut sync = sync();
        let effects = sync.overlay_input(8, "d");
        assert_eq!(sync.overlay_value(8), Some('D'));
        assert!(effects.focus().is_none());
        assert_eq!(sync.focus(), Some(FieldRef::overlay(8)));
    }

    #[test]
    fn test_manual_edit_uppercases_and_moves_wheel() {
        let mut sync = sync();
        let effects = sync.manual_input(5, "7");
        assert_eq!(sync.manual_value(5), Some('7'));
        assert_eq!(sync.overlay_value(5), Some('7'));
        assert_eq!(sync.wheel_symbol(5), Some('7'));
        assert_eq!(effects.focus(), Some(FieldRef::manual(6)));

        sync.manual_input(0, "t");
        assert_eq!(sync.manual_value(0), Some('T'));
    }

    #[test]
    fn test_manual_edit_with_unknown_symbol_keeps_wheel() {
        let mut sync = sync();
        let effects = sync.manual_input(2, "q");
        assert_eq!(sync.manual_value(2), Some('Q'));
        // The overlay stays blank rather than show a letter in a digit column
        assert_eq!(sync.overlay_value(2), None);
        assert_eq!(sync.wheel_symbol(2), Some('0'));
        assert!(effects.scrolled_slots().is_empty());
        assert_eq!(effects.focus(), Some(FieldRef::manual(3)));
    }

    #[test]
    fn test_wheel_settle_writes_fields() {
        let mut sync = sync();
        let effects = settle_at(&mut sync, 4, '9');

        assert_eq!(sync.overlay_value(4), Some('9'));
        assert_eq!(sync.manual_value(4), Some('9'));
        // Settled 7px off the item, so the column snaps back
        assert_eq!(effects.scrolled_slots(), vec![4]);
        assert!(effects.focus().is_none());
    }

    #[test]
    fn test_programmatic_move_does_not_echo() {
        let mut sync = sync();
        let effects = sync.overlay_input(1, "4");
        let offset = match effects.iter().next() {
            Some(Effect::ScrollWheel { offset, .. }) => *offset,
            other => panic!("unexpected effect {:?}", other),
        };

        let echo = sync.wheel_scrolled(1, offset);
        assert!(echo.is_empty());
    }

    #[test]
    fn test_suppression_is_per_column() {
        let mut sync = sync();
        sync.overlay_input(1, "4");
        let offset = sync.wheel(2).unwrap().offset() + 40.0;
        let effects = sync.wheel_scrolled(2, offset);
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, Effect::ArmSettle { slot: 2, .. })));
    }

    #[test]
    fn test_backspace_on_empty_moves_back_same_representation() {
        let mut sync = sync();
        let effects = sync.backspace(FieldRef::manual(4));
        assert_eq!(effects.focus(), Some(FieldRef::manual(3)));

        assert!(sync.backspace(FieldRef::overlay(0)).is_empty());
    }

    #[test]
    fn test_backspace_that_cleared_field_stays() {
        let mut sync = sync();
        sync.manual_input(4, "5");
        sync.focus_field(FieldRef::manual(4));

        sync.manual_input(4, "");
        assert!(sync.backspace(FieldRef::manual(4)).is_empty());
        // A second press on the now-empty field moves back
        assert_eq!(
            sync.backspace(FieldRef::manual(4)).focus(),
            Some(FieldRef::manual(3))
        );
    }

    #[test]
    fn test_backspace_on_filled_field_stays() {
        let mut sync = sync();
        sync.manual_input(4, "5");
        assert!(sync.backspace(FieldRef::manual(4)).is_empty());
    }

    #[test]
    fn test_backspace_uses_field_focused_by_click() {
        let mut sync = sync();
        for (slot, symbol) in "S12".chars().enumerate() {
            let typed = sync.manual_input(slot, &symbol.to_string());
            release(&mut sync, &typed);
        }
        // Typing left focus on manual(3); the user then clicked the empty manual(7)
        assert_eq!(sync.focus(), Some(FieldRef::manual(3)));

        let effects = sync.backspace(FieldRef::manual(7));
        assert_eq!(effects.focus(), Some(FieldRef::manual(6)));
        assert_eq!(sync.focus(), Some(FieldRef::manual(6)));
    }

    #[test]
    fn test_paste_full_identifier() {
        let mut sync = sync();
        let (effects, last) = sync.paste(FieldRef::manual(3), "s1234567d");
        assert_eq!(last, Some(8));
        assert_eq!(
            sync.manual_symbols().iter().flatten().collect::<String>(),
            "S1234567D"
        );
        assert_eq!(sync.wheel_symbol(8), Some('D'));
        assert_eq!(sync.focus(), Some(FieldRef::manual(8)));
        assert!(effects.focus().is_none());
    }

    #[test]
    fn test_paste_partial_from_current_slot() {
        let mut sync = sync();
        let (effects, last) = sync.paste(FieldRef::overlay(1), "12-3");
        assert_eq!(last, Some(3));
        assert_eq!(sync.overlay_value(1), Some('1'));
        assert_eq!(sync.overlay_value(3), Some('3'));
        assert_eq!(effects.focus(), Some(FieldRef::overlay(4)));
    }

    #[test]
    fn test_paste_overlay_skips_illegal() {
        let mut sync = sync();
        let (_, last) = sync.paste(FieldRef::overlay(7), "9Z");
        assert_eq!(sync.overlay_value(7), Some('9'));
        assert_eq!(sync.overlay_value(8), Some('Z'));
        assert_eq!(last, Some(8));

        let (_, last) = sync.paste(FieldRef::overlay(6), "AB");
        assert_eq!(last, None);
    }

    #[test]
    fn test_pull_wheels_from_manual() {
        let mut sync = sync();
        for (slot, symbol) in "S1234567D".chars().enumerate() {
            let typed = sync.manual_input(slot, &symbol.to_string());
            release(&mut sync, &typed);
        }

        let effects = sync.pull_wheels_from_manual();
        assert_eq!(effects.scrolled_slots().len(), 9);
        for (slot, symbol) in "S1234567D".chars().enumerate() {
            assert_eq!(sync.wheel_symbol(slot), Some(symbol));
            assert_eq!(sync.overlay_value(slot), Some(symbol));
        }
    }

    #[test]
    fn test_refresh_manual_keeps_blanks() {
        let mut sync = sync();
        let typed = sync.manual_input(0, "S");
        release(&mut sync, &typed);
        settle_at(&mut sync, 0, 'T');
        settle_at(&mut sync, 1, '5');
        sync.manual_input(1, "");

        sync.refresh_manual_from_wheels();
        assert_eq!(sync.manual_value(0), Some('T'));
        assert_eq!(sync.manual_value(1), None);
        assert_eq!(sync.manual_value(2), None);
    }

    #[test]
    fn test_restore_wheels_skips_moved_columns() {
        let mut sync = sync();
        let mut effects = sync.overlay_input(0, "S");
        sync.restore_wheels(&mut effects);
        let slots = effects.scrolled_slots();
        assert_eq!(slots.len(), SLOT_COUNT);
        assert_eq!(slots.iter().filter(|&&slot| slot == 0).count(), 1);
    }

    #[test]
    fn test_custom_prefix_letters() {
        let alphabet = Alphabet::new(SymbolSet::new("STFGM".chars()), SymbolSet::letters());
        let mut sync = Synchronizer::new(alphabet, Geometry::default());
        assert!(sync.overlay_input(0, "A").focus().is_none());
        assert_eq!(sync.overlay_input(0, "M").focus(), Some(FieldRef::overlay(1)));
        assert_eq!(sync.wheel_symbol(0), Some('M'));
    }

    #[test]
    fn test_convergence_every_slot_every_origin() {
        for slot in 0..SLOT_COUNT {
            let symbol = if slot == 0 || slot == 8 { 'G' } else { '6' };
            let text = symbol.to_string();

            let mut via_overlay = sync();
            via_overlay.overlay_input(slot, &text);
            let mut via_manual = sync();
            via_manual.manual_input(slot, &text);
            let mut via_wheel = sync();
            settle_at(&mut via_wheel, slot, symbol);

            for synced in [&via_overlay, &via_manual, &via_wheel] {
                assert_eq!(synced.wheel_symbol(slot), Some(symbol));
                assert_eq!(synced.overlay_value(slot), Some(symbol));
                assert_eq!(synced.manual_value(slot), Some(symbol));
            }
        }
    }
}
