//! Ticket Actions Component
//!
//! Edit/Save toggle and the download button under the card.

use dioxus::prelude::*;
use swiftride_core::export_surface;
use swiftride_ui::{Button, ButtonVariant, DownloadIcon, EditIcon};

use crate::context::{use_app_config, use_ticket_editor};
use crate::export::{download_sink, WebviewCapture};

/// Action row: "Edit Ticket" or "Save Changes", plus "Download Ticket"
///
/// Every control is disabled while a capture is in flight, so neither a
/// second export nor an edit can overlap the running one.
#[component]
pub fn TicketActions() -> Element {
    let mut editor = use_ticket_editor();
    let config = use_app_config();
    let controls = editor.read().controls();

    // Same steps as `swiftride_core::export_ticket`, with the signal released
    // while the capture is awaited.
    let download = move |_: ()| {
        if !editor.write().begin_export() {
            return;
        }
        let sink = download_sink(&config);

        spawn(async move {
            export_surface(&WebviewCapture, sink.as_ref()).await;
            editor.write().finish_export();
        });
    };

    rsx! {
        div { class: "ticket-actions",
            if controls.save_visible {
                Button {
                    variant: ButtonVariant::Confirm,
                    disabled: controls.busy,
                    onclick: move |_: ()| {
                        editor.write().save();
                    },
                    "Save Changes"
                }
            } else {
                Button {
                    variant: ButtonVariant::Accent,
                    disabled: controls.busy,
                    onclick: move |_: ()| {
                        editor.write().begin_edit();
                    },
                    EditIcon {}
                    "Edit Ticket"
                }
            }
            Button {
                variant: ButtonVariant::Dark,
                disabled: !controls.export_enabled,
                onclick: download,
                DownloadIcon {}
                if controls.busy { "Saving..." } else { "Download Ticket" }
            }
        }
    }
}
