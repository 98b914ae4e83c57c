//! Entry controller
//!
//! Single owner of all entry state: the synchronizer (wheels, overlays,
//! manual fields), the input mode and the validation flow. The UI forwards
//! every gesture here and executes the returned [`Effects`].

use crate::effects::{Effect, Effects};
use crate::mode::{Mode, ModeController};
use crate::selector::Geometry;
use crate::sync::Synchronizer;
use crate::timer::TimerToken;
use crate::types::{Alphabet, FieldKind, FieldRef, LAST_SLOT, SLOT_COUNT};
use crate::validation::{
    BarcodeRef, LocalInputError, Presentation, RequestId, StatusLine, ValidationFlow,
    ValidationResponse, ValidationResult,
};

/// Construction parameters for [`EntryController`]
#[derive(Debug, Clone)]
pub struct EntrySettings {
    pub alphabet: Alphabet,
    pub geometry: Geometry,
    pub start_mode: Mode,
    /// Submit when the last slot is filled and the identifier is complete
    pub auto_submit: bool,
    /// Endpoint URL, used to resolve relative barcode references
    pub endpoint: String,
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            geometry: Geometry::default(),
            start_mode: Mode::Wheel,
            auto_submit: true,
            endpoint: String::new(),
        }
    }
}

pub struct EntryController {
    sync: Synchronizer,
    modes: ModeController,
    flow: ValidationFlow,
    auto_submit: bool,
    endpoint: String,
}

impl EntryController {
    pub fn new(settings: EntrySettings) -> Self {
        log::info!(
            "EntryController::new: mode={} auto_submit={}",
            settings.start_mode,
            settings.auto_submit
        );
        Self {
            sync: Synchronizer::new(settings.alphabet, settings.geometry),
            modes: ModeController::new(settings.start_mode),
            flow: ValidationFlow::new(),
            auto_submit: settings.auto_submit,
            endpoint: settings.endpoint,
        }
    }

    /// Effects to run once the first frame exists: place every column and
    /// focus the first field of the active representation
    pub fn boot(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.sync.restore_wheels(&mut effects);
        let first = self.field_kind();
        let field = FieldRef { kind: first, slot: 0 };
        self.sync.focus_field(field);
        effects.push(Effect::Focus(field));
        effects
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn sync(&self) -> &Synchronizer {
        &self.sync
    }

    pub fn flow(&self) -> &ValidationFlow {
        &self.flow
    }

    pub fn presentation(&self) -> &Presentation {
        self.flow.presentation()
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.flow.status()
    }

    pub fn submit_label(&self) -> &'static str {
        self.flow.submit_label()
    }

    pub fn submit_enabled(&self) -> bool {
        self.flow.submit_enabled()
    }

    /// Valid/invalid accent for fields of the active representation
    pub fn field_accent(&self) -> Option<bool> {
        self.flow.field_accent()
    }

    fn field_kind(&self) -> FieldKind {
        match self.modes.mode() {
            Mode::Wheel => FieldKind::Overlay,
            Mode::Manual => FieldKind::Manual,
        }
    }

    // ---------------------------------------------------------------------
    // Wheel gestures
    // ---------------------------------------------------------------------

    pub fn wheel_scrolled(&mut self, slot: usize, offset: f32) -> Effects {
        self.sync.wheel_scrolled(slot, offset)
    }

    pub fn wheel_settled(&mut self, slot: usize, token: TimerToken) -> Effects {
        match self.sync.wheel_settled(slot, token) {
            Some(effects) => {
                self.flow.touch();
                effects
            }
            None => Effects::new(),
        }
    }

    pub fn suppression_elapsed(&mut self, slot: usize, token: TimerToken) {
        self.sync.suppression_elapsed(slot, token);
    }

    // ---------------------------------------------------------------------
    // Field edits
    // ---------------------------------------------------------------------

    pub fn overlay_input(&mut self, slot: usize, text: &str) -> Effects {
        let mut effects = self.sync.overlay_input(slot, text);
        self.after_edit(FieldRef::overlay(slot), &mut effects);
        effects
    }

    pub fn manual_input(&mut self, slot: usize, text: &str) -> Effects {
        let mut effects = self.sync.manual_input(slot, text);
        self.after_edit(FieldRef::manual(slot), &mut effects);
        effects
    }

    pub fn paste(&mut self, field: FieldRef, text: &str) -> Effects {
        let (mut effects, last) = self.sync.paste(field, text);
        let landed = FieldRef {
            kind: field.kind,
            slot: last.unwrap_or(field.slot),
        };
        self.after_edit(landed, &mut effects);
        effects
    }

    pub fn focus_field(&mut self, field: FieldRef) {
        self.sync.focus_field(field);
    }

    /// Backspace pressed in the focused `field`
    pub fn backspace(&mut self, field: FieldRef) -> Effects {
        self.sync.backspace(field)
    }

    fn after_edit(&mut self, field: FieldRef, effects: &mut Effects) {
        let rejection = effects.iter().find_map(|effect| match effect {
            Effect::Rejected(error) => Some(error.clone()),
            _ => None,
        });

        match rejection {
            Some(error) => self.flow.reject_locally(&error),
            None => self.flow.touch(),
        }

        let filled_last = field.slot == LAST_SLOT && self.sync.field_value(field).is_some();
        let authoritative = field.kind == self.field_kind();
        if self.auto_submit && filled_last && authoritative && self.entry_complete() {
            log::info!("after_edit: Last slot filled, submitting");
            effects.extend(self.submit());
        }
    }

    // ---------------------------------------------------------------------
    // Mode
    // ---------------------------------------------------------------------

    /// Tab selection
    pub fn select_mode(&mut self, target: Mode) -> Effects {
        let mut effects = Effects::new();
        let Some(switch) = self.modes.select(target) else {
            return effects;
        };

        self.flow.reset();

        match switch.to {
            Mode::Manual => self.sync.refresh_manual_from_wheels(),
            Mode::Wheel => {
                effects = self.sync.pull_wheels_from_manual();
                self.sync.restore_wheels(&mut effects);
            }
        }

        let field = FieldRef {
            kind: self.field_kind(),
            slot: 0,
        };
        self.sync.focus_field(field);
        effects.push(Effect::Focus(field));
        effects
    }

    // ---------------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------------

    /// Identifier read from the authoritative representation
    pub fn assemble_identifier(&self) -> Result<String, LocalInputError> {
        let symbols = match self.modes.mode() {
            Mode::Wheel => self.sync.wheel_symbols(),
            Mode::Manual => self.sync.manual_symbols(),
        };

        let present = symbols.iter().flatten().count();
        if present < SLOT_COUNT {
            return Err(LocalInputError::incomplete(present));
        }
        Ok(symbols.iter().flatten().collect())
    }

    /// Every slot was given a value by the user
    ///
    /// Wheels always select something, so in Wheel mode a slot only counts
    /// once its overlay was set by typing, pasting or a settled scroll.
    fn entry_complete(&self) -> bool {
        let wheels_set = match self.modes.mode() {
            Mode::Wheel => self.sync.overlay_complete(),
            Mode::Manual => true,
        };
        wheels_set && self.assemble_identifier().is_ok()
    }

    /// Submit control pressed: repeat after a valid result, submit otherwise
    pub fn press_submit(&mut self) -> Effects {
        if self.flow.valid_verdict().is_some() {
            self.repeat()
        } else {
            self.submit()
        }
    }

    pub fn submit(&mut self) -> Effects {
        if self.flow.is_pending() {
            log::debug!("submit: Request already pending, ignoring");
            return Effects::new();
        }

        match self.assemble_identifier() {
            Err(error) => {
                log::info!("submit: Rejected locally: {}", error);
                self.flow.reject_locally(&error);
                Effects::new()
            }
            Ok(nric) => match self.flow.begin() {
                Some(request) => {
                    log::info!("submit: Sending {} as {:?}", nric, request);
                    Effect::Submit { request, nric }.into()
                }
                None => Effects::new(),
            },
        }
    }

    /// Leave a valid result and start over with the previous values
    pub fn repeat(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.flow.repeat() {
            return effects;
        }
        log::info!("repeat: Back to collecting in {} mode", self.modes.mode());

        if self.modes.mode() == Mode::Wheel {
            effects = self.sync.pull_wheels_from_manual();
            self.sync.restore_wheels(&mut effects);
        }
        effects
    }

    /// Apply the answer to a submission
    pub fn validation_finished(
        &mut self,
        request: RequestId,
        result: ValidationResult<ValidationResponse>,
    ) -> Effects {
        let mut effects = Effects::new();
        let reference = match self.flow.complete(request, result) {
            Some(verdict) => {
                log::info!(
                    "validation_finished: valid={} message={:?}",
                    verdict.valid,
                    verdict.message
                );
                verdict.barcode.clone()
            }
            None => return effects,
        };

        if let Some(reference) = reference {
            match BarcodeRef::parse(&reference, &self.endpoint) {
                Ok(BarcodeRef::Inline { bytes, .. }) => {
                    effects.push(Effect::ShowBarcode { request, bytes })
                }
                Ok(BarcodeRef::Remote(url)) => effects.push(Effect::FetchBarcode { request, url }),
                Err(error) => self.flow.discard_artifact(request, &error),
            }
        }
        effects
    }

    /// Downloaded barcode bytes arrived; returns them if still wanted
    pub fn barcode_fetched(
        &mut self,
        request: RequestId,
        result: ValidationResult<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        if !self.barcode_ready(request) {
            log::debug!("barcode_fetched: Dropping stale image for {:?}", request);
            return None;
        }
        match result {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                self.flow.discard_artifact(request, &error);
                None
            }
        }
    }

    /// Whether the result of `request` is showing and waits for its image
    pub fn barcode_ready(&self, request: RequestId) -> bool {
        self.flow.shows_artifact()
            && self
                .flow
                .valid_verdict()
                .is_some_and(|(current, _)| current == request)
    }
}
