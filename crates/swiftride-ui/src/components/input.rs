//! Input Field Components
//!
//! Bound text inputs for ticket fields. Each input knows which field it
//! edits from its [`FieldSpec`], so change events carry the field identity
//! explicitly instead of relying on the element's name attribute.

use dioxus::prelude::*;
use swiftride_core::{FieldSpec, TicketField};

/// Text size of a field on the card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldSize {
    /// Passenger, date and detail boxes
    #[default]
    Regular,
    /// Origin and destination city names
    Large,
    /// Departure and arrival times (red)
    Time,
}

impl FieldSize {
    /// Returns the CSS modifier class shared by the text and input forms
    pub fn class(&self) -> &'static str {
        match self {
            FieldSize::Regular => "field--regular",
            FieldSize::Large => "field--large",
            FieldSize::Time => "field--time",
        }
    }
}

/// Properties for the FieldInput component
#[derive(Clone, PartialEq, Props)]
pub struct FieldInputProps {
    /// Which field this input edits, with its label and length limit
    pub spec: FieldSpec,
    /// Current field value
    pub value: String,
    /// Handler called on every keystroke with the field and the raw value
    pub oninput: EventHandler<(TicketField, String)>,
    #[props(default)]
    pub size: FieldSize,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Controlled text input with a `maxlength` taken from the field table
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FieldInput {
///         spec: TicketField::From.spec(),
///         value: editor.read().field(TicketField::From).to_string(),
///         size: FieldSize::Large,
///         oninput: move |(field, value)| {
///             editor.write().apply_input(field, &value);
///         },
///     }
/// }
/// ```
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let field = props.spec.field;
    let max_len = props.spec.max_len;
    let class = format!("field-input {}", props.size.class());

    rsx! {
        input {
            id: "{input_id(field)}",
            class: "{class}",
            r#type: "text",
            name: field.key(),
            value: "{props.value}",
            maxlength: "{max_len}",
            "aria-label": props.spec.label,
            disabled: props.disabled,
            oninput: move |e| props.oninput.call((field, e.value())),
        }
    }
}

/// Read-only rendering of a field value
#[component]
pub fn FieldText(value: String, #[props(default)] size: FieldSize) -> Element {
    let class = format!("field-text {}", size.class());

    rsx! {
        p { class: "{class}", "{value}" }
    }
}

/// Stable element id for a field's input
pub fn input_id(field: TicketField) -> String {
    format!("ticket-input-{}", field.key())
}
