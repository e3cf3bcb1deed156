//! Ticket editing state machine
//!
//! Holds the ticket values together with the view/edit flag and the
//! in-flight export marker. The card renders purely from this state.

use crate::ticket::{TicketData, TicketField};

/// Whether the card shows read-only text or bound inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Edit)
    }
}

/// Which controls the card shows and which of them accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// "Edit Ticket" is rendered
    pub edit_visible: bool,
    /// "Save Changes" is rendered
    pub save_visible: bool,
    /// "Download Ticket" accepts clicks
    pub export_enabled: bool,
    /// Field inputs accept typing
    pub inputs_enabled: bool,
    /// A capture is in flight; every control is locked
    pub busy: bool,
}

/// State holder for one ticket card.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketEditor {
    data: TicketData,
    mode: Mode,
    export_pending: bool,
}

impl TicketEditor {
    /// Create an editor in view mode around the given seed values.
    pub fn new(seed: TicketData) -> Self {
        Self {
            data: seed,
            mode: Mode::View,
            export_pending: false,
        }
    }

    pub fn data(&self) -> &TicketData {
        &self.data
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn is_export_pending(&self) -> bool {
        self.export_pending
    }

    /// Current value of a field.
    pub fn field(&self, field: TicketField) -> &str {
        self.data.get(field)
    }

    /// Overwrite one field with no length limit.
    pub fn set_field(&mut self, field: TicketField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Apply a keystroke from the field's input.
    ///
    /// Only accepted while editing. The value is cut to the field's maximum
    /// length before it is stored. Returns whether the value was applied.
    pub fn apply_input(&mut self, field: TicketField, value: &str) -> bool {
        if !self.is_editing() || self.export_pending {
            return false;
        }
        let clamped = field.clamp(value);
        tracing::trace!(field = %field, len = clamped.chars().count(), "Field input");
        self.data.set(field, clamped);
        true
    }

    /// "Edit Ticket": View -> Edit. No-op from any other state.
    pub fn begin_edit(&mut self) -> bool {
        if self.mode != Mode::View || self.export_pending {
            return false;
        }
        self.mode = Mode::Edit;
        tracing::debug!("Ticket entered edit mode");
        true
    }

    /// "Save Changes": Edit -> View, committing whatever the inputs hold.
    pub fn save(&mut self) -> bool {
        if self.mode != Mode::Edit {
            return false;
        }
        self.mode = Mode::View;
        tracing::debug!("Ticket changes saved");
        true
    }

    /// Claim the export slot. Refused while editing or while another
    /// capture is already running.
    pub fn begin_export(&mut self) -> bool {
        if self.mode != Mode::View || self.export_pending {
            return false;
        }
        self.export_pending = true;
        true
    }

    /// Release the export slot, whatever the outcome.
    pub fn finish_export(&mut self) {
        self.export_pending = false;
    }

    pub fn controls(&self) -> Controls {
        let busy = self.export_pending;
        Controls {
            edit_visible: self.mode == Mode::View,
            save_visible: self.mode == Mode::Edit,
            export_enabled: self.mode == Mode::View && !busy,
            inputs_enabled: self.mode == Mode::Edit && !busy,
            busy,
        }
    }
}

impl Default for TicketEditor {
    fn default() -> Self {
        Self::new(TicketData::sample())
    }
}
