//! Widget ids for scroll and focus operations

use std::sync::LazyLock;

use iced::widget::Id;
use nric_core::{FieldKind, FieldRef, SLOT_COUNT};

/// Scrollable of each wheel column
pub static WHEEL_SCROLL_IDS: LazyLock<[Id; SLOT_COUNT]> =
    LazyLock::new(|| std::array::from_fn(|_| Id::unique()));

/// Overlay text field of each wheel column
pub static OVERLAY_INPUT_IDS: LazyLock<[Id; SLOT_COUNT]> =
    LazyLock::new(|| std::array::from_fn(|_| Id::unique()));

/// Manual text field of each slot
pub static MANUAL_INPUT_IDS: LazyLock<[Id; SLOT_COUNT]> =
    LazyLock::new(|| std::array::from_fn(|_| Id::unique()));

/// Scrollable id of a wheel column
pub fn wheel_scroll_id(slot: usize) -> Id {
    WHEEL_SCROLL_IDS[slot.min(SLOT_COUNT - 1)].clone()
}

/// Text input id of a field
pub fn field_id(field: FieldRef) -> Id {
    let slot = field.slot.min(SLOT_COUNT - 1);
    match field.kind {
        FieldKind::Overlay => OVERLAY_INPUT_IDS[slot].clone(),
        FieldKind::Manual => MANUAL_INPUT_IDS[slot].clone(),
    }
}

/// Field owning a text input id, if it is one of ours
pub fn field_for_id(id: &Id) -> Option<FieldRef> {
    let find = |ids: &[Id; SLOT_COUNT]| ids.iter().position(|candidate| candidate == id);
    find(&*OVERLAY_INPUT_IDS)
        .map(FieldRef::overlay)
        .or_else(|| find(&*MANUAL_INPUT_IDS).map(FieldRef::manual))
}
