//! Ticket Card Component
//!
//! The ticket surface: brand header, passenger row, route box, detail boxes
//! and footer. The outer element carries `SURFACE_ID`, which is what the
//! export captures.

use dioxus::prelude::*;
use swiftride_core::{Branding, DETAIL_FIELDS, PASSENGER_FIELDS, ROUTE_FIELDS, SURFACE_ID};
use swiftride_ui::{BusIcon, FieldSize};

use super::TicketFieldView;

#[component]
pub fn TicketCard() -> Element {
    let brand = Branding::default();
    let [(origin, departure), (destination, arrival)] = ROUTE_FIELDS;

    rsx! {
        div { id: SURFACE_ID, class: "ticket",
            // Header: logo, company, ticket number
            div { class: "ticket__header",
                div { class: "ticket__brand",
                    BusIcon { class: "icon icon--brand".to_string() }
                    div {
                        h1 { class: "ticket__company", "{brand.company}" }
                        p { class: "ticket__tagline", "{brand.tagline}" }
                    }
                }
                div { class: "ticket__number",
                    p { class: "field-label", "Ticket No." }
                    p { class: "ticket__number-value", "{brand.ticket_no}" }
                }
            }

            div { class: "ticket__passenger",
                for spec in PASSENGER_FIELDS {
                    div { key: "{spec.field.key()}",
                        TicketFieldView { spec }
                    }
                }
            }

            div { class: "ticket__route",
                div { class: "ticket__endpoint",
                    TicketFieldView { spec: origin, size: FieldSize::Large }
                    TicketFieldView { spec: departure, size: FieldSize::Time, show_label: false }
                }
                BusIcon { class: "icon icon--route".to_string() }
                div { class: "ticket__endpoint",
                    TicketFieldView { spec: destination, size: FieldSize::Large }
                    TicketFieldView { spec: arrival, size: FieldSize::Time, show_label: false }
                }
            }

            div { class: "ticket__details",
                for spec in DETAIL_FIELDS {
                    div { key: "{spec.field.key()}", class: "ticket__detail",
                        TicketFieldView { spec }
                    }
                }
            }

            div { class: "ticket__footer",
                p { "{brand.footer}" }
            }

            div { class: "ticket__barcode",
                p { "{brand.barcode}" }
            }
        }
    }
}
