//! Common types for NRIC entry
//!
//! This module contains the slot layout of the 9-character identifier
//! (letter, 7 digits, letter), the per-slot symbol sets and the addressing
//! used for the editable text fields.

/// Number of character slots in an identifier
pub const SLOT_COUNT: usize = 9;

/// Index of the final (suffix letter) slot
pub const LAST_SLOT: usize = SLOT_COUNT - 1;

/// Digits used by slots 1-7, in wheel order
pub const DIGITS: &str = "0123456789";

/// Default letters used by slots 0 and 8, in wheel order
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// What kind of symbol a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Leading letter (slot 0)
    Prefix,
    /// Body digit (slots 1-7)
    Digit,
    /// Trailing letter (slot 8)
    Suffix,
}

impl SlotKind {
    /// Get the kind of the slot at `slot`
    pub fn of(slot: usize) -> Self {
        match slot {
            0 => SlotKind::Prefix,
            LAST_SLOT => SlotKind::Suffix,
            _ => SlotKind::Digit,
        }
    }

    /// Placeholder glyph shown in empty manual fields
    pub fn placeholder(&self) -> &'static str {
        match self {
            SlotKind::Prefix => "@",
            SlotKind::Digit => "0",
            SlotKind::Suffix => "#",
        }
    }

    /// Human readable name used in inline error messages
    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::Prefix => "prefix letter",
            SlotKind::Digit => "digit",
            SlotKind::Suffix => "suffix letter",
        }
    }
}

/// Ordered set of symbols one wheel column can show
///
/// Order is the wheel order; duplicates are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Vec<char>,
}

impl SymbolSet {
    /// Build a set from symbols, keeping first occurrences only
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut unique = Vec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self { symbols: unique }
    }

    /// The ten decimal digits
    pub fn digits() -> Self {
        Self::new(DIGITS.chars())
    }

    /// The uppercase ASCII letters
    pub fn letters() -> Self {
        Self::new(LETTERS.chars())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, if in range
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Position of `symbol` in wheel order
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

/// Allowed symbols for every slot of the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    prefix: SymbolSet,
    digits: SymbolSet,
    suffix: SymbolSet,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(SymbolSet::letters(), SymbolSet::letters())
    }
}

impl Alphabet {
    /// Create an alphabet with custom letter sets for the first and last slot
    ///
    /// Empty letter sets fall back to A-Z so every column has something to show.
    pub fn new(prefix: SymbolSet, suffix: SymbolSet) -> Self {
        let prefix = if prefix.is_empty() { SymbolSet::letters() } else { prefix };
        let suffix = if suffix.is_empty() { SymbolSet::letters() } else { suffix };
        Self {
            prefix,
            digits: SymbolSet::digits(),
            suffix,
        }
    }

    /// Symbol set for a slot
    pub fn for_slot(&self, slot: usize) -> &SymbolSet {
        match SlotKind::of(slot) {
            SlotKind::Prefix => &self.prefix,
            SlotKind::Digit => &self.digits,
            SlotKind::Suffix => &self.suffix,
        }
    }

    /// Whether `symbol` may be stored in `slot`
    pub fn allows(&self, slot: usize, symbol: char) -> bool {
        slot < SLOT_COUNT && self.for_slot(slot).contains(symbol)
    }
}

/// Which editable text representation a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Transparent field layered on a wheel column
    Overlay,
    /// Standalone field of the manual form
    Manual,
}

/// Address of a single text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub kind: FieldKind,
    pub slot: usize,
}

impl FieldRef {
    pub fn overlay(slot: usize) -> Self {
        Self { kind: FieldKind::Overlay, slot }
    }

    pub fn manual(slot: usize) -> Self {
        Self { kind: FieldKind::Manual, slot }
    }

    /// Field of the same representation one slot to the right
    pub fn next(&self) -> Option<Self> {
        (self.slot < LAST_SLOT).then(|| Self { kind: self.kind, slot: self.slot + 1 })
    }

    /// Field of the same representation one slot to the left
    pub fn previous(&self) -> Option<Self> {
        (self.slot > 0).then(|| Self { kind: self.kind, slot: self.slot - 1 })
    }
}

/// Reduce the raw content of a one-character field to the symbol it holds
///
/// Fields only ever hold one symbol; when a second one is typed the newest
/// (last) character wins. Letters are upper-cased.
pub fn normalize_input(text: &str) -> Option<char> {
    text.trim()
        .chars()
        .last()
        .map(|c| c.to_ascii_uppercase())
}
