use dioxus::prelude::*;
use swiftride_core::TicketEditor;

use crate::components::{TicketActions, TicketCard};
use crate::context::get_app_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the editor state seeded from the configuration,
/// and lays out the card with its action row.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_app_config);
    let seed = config.seed.clone();

    let editor: Signal<TicketEditor> = use_signal(move || TicketEditor::new(seed));

    use_context_provider(|| editor);
    use_context_provider(move || config);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "ticket-page",
            TicketCard {}
            TicketActions {}
        }
    }
}
