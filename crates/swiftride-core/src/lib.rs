//! SwiftRide Ticket Core Library
//!
//! State and export logic behind the editable bus ticket card.
//!
//! ## Overview
//!
//! A ticket is a fixed set of nine display strings ([`TicketData`]) plus a
//! view/edit flag. The card renders either read-only text or bound inputs,
//! and the read-only surface can be exported as `bus-ticket.png`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use swiftride_core::{TicketEditor, TicketData, TicketField};
//!
//! let mut editor = TicketEditor::new(TicketData::sample());
//! editor.begin_edit();
//! editor.apply_input(TicketField::From, "Chicago");
//! editor.save();
//! assert_eq!(editor.field(TicketField::From), "Chicago");
//! ```

pub mod editor;
pub mod error;
pub mod export;
pub mod ticket;

// Re-exports
pub use editor::{Controls, Mode, TicketEditor};
pub use error::{CaptureError, ExportError, ExportResult, SeedError};
pub use export::{
    decode_data_url, encode_png, export_surface, export_ticket, Capture, DirectorySink,
    DownloadSink, ExportOutcome, EXPORT_FILE_NAME, SURFACE_ID,
};
pub use ticket::{
    Branding, FieldSpec, TicketData, TicketField, DETAIL_FIELDS, FIELD_SPECS, LONG_FIELD_MAX,
    PASSENGER_FIELDS, ROUTE_FIELDS, SHORT_FIELD_MAX,
};
