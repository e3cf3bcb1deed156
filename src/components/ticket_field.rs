//! Ticket Field Component
//!
//! One routine renders every field on the card: a caption plus either the
//! read-only value or a bound input, depending on the editor mode.

use dioxus::prelude::*;
use swiftride_core::FieldSpec;
use swiftride_ui::{FieldInput, FieldSize, FieldText};

use crate::context::use_ticket_editor;

/// Caption and value (or input) for a single ticket field
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     for spec in DETAIL_FIELDS {
///         TicketFieldView { spec }
///     }
/// }
/// ```
#[component]
pub fn TicketFieldView(
    /// Field identity, caption and input limit
    spec: FieldSpec,
    #[props(default)] size: FieldSize,
    /// Render the caption above the value
    #[props(default = true)]
    show_label: bool,
) -> Element {
    let mut editor = use_ticket_editor();

    let state = editor.read();
    let value = state.field(spec.field).to_string();
    let editing = state.is_editing();
    let inputs_enabled = state.controls().inputs_enabled;
    drop(state);

    rsx! {
        if show_label {
            p { class: "field-label", "{spec.label}" }
        }
        if editing {
            FieldInput {
                spec,
                value,
                size,
                disabled: !inputs_enabled,
                oninput: move |(field, value): (_, String)| {
                    editor.write().apply_input(field, &value);
                },
            }
        } else {
            FieldText { value, size }
        }
    }
}
