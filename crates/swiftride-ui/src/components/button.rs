//! Button Components
//!
//! Action buttons under the ticket:
//! - Accent: red, "Edit Ticket"
//! - Confirm: green, "Save Changes"
//! - Dark: black, "Download Ticket"

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Brand red, used for entering edit mode
    #[default]
    Accent,
    /// Green, used for committing edits
    Confirm,
    /// Black, used for the download action
    Dark,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Confirm => "btn-confirm",
            ButtonVariant::Dark => "btn-dark",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (icon and label)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Ticket action button
///
/// Clicks are swallowed while `disabled` is set, so a disabled action can
/// never reach its handler.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Dark,
///         disabled: editing(),
///         onclick: move |_| download(),
///         DownloadIcon {}
///         "Download Ticket"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());
    let disabled = props.disabled;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("btn {} {}", variant.class(), extra),
        _ => format!("btn {}", variant.class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Accent.class(), "btn-accent");
        assert_eq!(ButtonVariant::Confirm.class(), "btn-confirm");
        assert_eq!(ButtonVariant::Dark.class(), "btn-dark");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Accent);
    }

    #[test]
    fn button_class_with_extra() {
        assert_eq!(button_class(ButtonVariant::Dark, None), "btn btn-dark");
        assert_eq!(button_class(ButtonVariant::Dark, Some("")), "btn btn-dark");
        assert_eq!(
            button_class(ButtonVariant::Confirm, Some("wide")),
            "btn btn-confirm wide"
        );
    }
}
