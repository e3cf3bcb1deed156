//! End-to-end ticket flows
//!
//! Drive the editor the way the card does (clicks and keystrokes) and run
//! the export pipeline against in-memory capture and download fakes.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use swiftride_core::{
    export_ticket, Capture, CaptureError, DirectorySink, DownloadSink, ExportOutcome,
    ExportResult, Mode, TicketData, TicketEditor, TicketField, EXPORT_FILE_NAME, SURFACE_ID,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

// ============================================================================
// Fakes
// ============================================================================

/// Returns a fixed bitmap and remembers which surface was asked for.
struct FixedCapture {
    bitmap: RgbaImage,
    calls: Cell<usize>,
    last_surface: RefCell<Option<String>>,
}

impl FixedCapture {
    fn new() -> Self {
        Self {
            bitmap: RgbaImage::from_pixel(4, 3, Rgba([255, 255, 255, 255])),
            calls: Cell::new(0),
            last_surface: RefCell::new(None),
        }
    }
}

#[async_trait(?Send)]
impl Capture for FixedCapture {
    async fn capture(&self, surface_id: &str) -> Result<RgbaImage, CaptureError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_surface.borrow_mut() = Some(surface_id.to_string());
        Ok(self.bitmap.clone())
    }
}

/// Always fails as if the surface were not mounted yet.
struct UnmountedCapture;

#[async_trait(?Send)]
impl Capture for UnmountedCapture {
    async fn capture(&self, surface_id: &str) -> Result<RgbaImage, CaptureError> {
        Err(CaptureError::SurfaceNotMounted(surface_id.to_string()))
    }
}

/// Records every download trigger instead of writing files.
#[derive(Default)]
struct RecordingSink {
    deliveries: RefCell<Vec<(String, Vec<u8>)>>,
}

#[async_trait(?Send)]
impl DownloadSink for RecordingSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> ExportResult<PathBuf> {
        self.deliveries
            .borrow_mut()
            .push((file_name.to_string(), bytes));
        Ok(PathBuf::from(file_name))
    }
}

/// Counts ERROR events seen while installed.
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Records every field of every event as `name=value`.
struct FieldRecorder(Arc<Mutex<Vec<String>>>);

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if let Ok(mut seen) = self.0.lock() {
            seen.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S: Subscriber> Layer<S> for FieldRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        event.record(&mut FieldRecorder(self.0.clone()));
    }
}

// ============================================================================
// Editing flows
// ============================================================================

#[test]
fn test_edit_from_city_and_save() {
    let mut editor = TicketEditor::new(TicketData::sample());
    assert_eq!(editor.field(TicketField::PassengerName), "Jane Smith");
    assert_eq!(editor.field(TicketField::From), "Boston");
    assert_eq!(editor.field(TicketField::To), "New York");

    assert!(editor.begin_edit());
    assert!(editor.apply_input(TicketField::From, "Chicago"));
    assert!(editor.save());

    assert_eq!(editor.field(TicketField::From), "Chicago");
    assert_eq!(editor.mode(), Mode::View);
    assert_eq!(editor.field(TicketField::To), "New York");
}

#[test]
fn test_save_commits_last_keystroke() {
    let mut editor = TicketEditor::default();
    editor.begin_edit();

    // Typing "Denver" one key at a time, then a backspace
    for partial in ["D", "De", "Den", "Denv", "Denve", "Denver", "Denve"] {
        editor.apply_input(TicketField::To, partial);
    }
    editor.apply_input(TicketField::Seat, "");
    editor.save();

    assert_eq!(editor.field(TicketField::To), "Denve");
    assert_eq!(editor.field(TicketField::Seat), "");
}

#[test]
fn test_edit_control_hidden_while_editing() {
    let mut editor = TicketEditor::default();
    assert!(editor.controls().edit_visible);

    editor.begin_edit();
    assert!(!editor.controls().edit_visible);
    assert!(editor.controls().save_visible);
}

#[test]
fn test_seeded_editor() {
    let seed = TicketData::from_json(r#"{"passengerName":"Ann Lee","from":"Austin"}"#).unwrap();
    let editor = TicketEditor::new(seed);
    assert_eq!(editor.field(TicketField::PassengerName), "Ann Lee");
    assert_eq!(editor.field(TicketField::From), "Austin");
    assert_eq!(editor.field(TicketField::Seat), "14B");
}

#[test]
fn test_long_seed_value_survives_backspace() {
    let seed = TicketData::from_json(r#"{"from":"San Francisco Bay"}"#).unwrap();
    let mut editor = TicketEditor::new(seed);

    // The input shows the stored value; one backspace removes one char
    let shown = editor.field(TicketField::From).to_string();
    assert_eq!(shown.chars().count(), TicketField::From.max_len());

    editor.begin_edit();
    let mut after_backspace = shown.clone();
    after_backspace.pop();
    editor.apply_input(TicketField::From, &after_backspace);
    editor.save();

    assert_eq!(editor.field(TicketField::From), after_backspace);
    assert_eq!(editor.field(TicketField::From), "San Franc");
}

#[test]
fn test_edit_cycle_keeps_field_values_out_of_logs() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(FieldRecorder(seen.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut editor = TicketEditor::default();
    editor.begin_edit();
    editor.apply_input(TicketField::PassengerName, "Ann Lee");
    editor.save();

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty(), "transitions are logged");
    for entry in seen.iter() {
        assert!(!entry.contains("Ann Lee"), "passenger name leaked: {entry}");
    }
}

// ============================================================================
// Export flows
// ============================================================================

#[tokio::test]
async fn test_export_in_view_downloads_once() {
    let mut editor = TicketEditor::default();
    let capture = FixedCapture::new();
    let sink = RecordingSink::default();

    let outcome = export_ticket(&mut editor, &capture, &sink).await;

    assert_eq!(outcome, ExportOutcome::Saved(PathBuf::from("bus-ticket.png")));
    assert_eq!(capture.calls.get(), 1);
    assert_eq!(capture.last_surface.borrow().as_deref(), Some(SURFACE_ID));

    let deliveries = sink.deliveries.borrow();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].0, EXPORT_FILE_NAME);

    let decoded = image::load_from_memory(&deliveries[0].1).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (4, 3));

    assert!(!editor.is_export_pending());
}

#[tokio::test]
async fn test_export_in_edit_is_noop() {
    let mut editor = TicketEditor::default();
    editor.begin_edit();
    let capture = FixedCapture::new();
    let sink = RecordingSink::default();

    let outcome = export_ticket(&mut editor, &capture, &sink).await;

    assert_eq!(outcome, ExportOutcome::Skipped);
    assert_eq!(capture.calls.get(), 0);
    assert!(sink.deliveries.borrow().is_empty());
    assert_eq!(editor.mode(), Mode::Edit);
}

#[tokio::test]
async fn test_export_failure_is_logged_once() {
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut editor = TicketEditor::default();
    let before = editor.clone();
    let sink = RecordingSink::default();

    let outcome = export_ticket(&mut editor, &UnmountedCapture, &sink).await;

    assert_eq!(outcome, ExportOutcome::Failed);
    assert!(sink.deliveries.borrow().is_empty());
    assert_eq!(errors.load(Ordering::SeqCst), 1);
    assert_eq!(editor, before);
    assert_eq!(editor.mode(), Mode::View);
}

#[tokio::test]
async fn test_export_while_pending_is_refused() {
    let mut editor = TicketEditor::default();
    assert!(editor.begin_export());

    let capture = FixedCapture::new();
    let sink = RecordingSink::default();
    let outcome = export_ticket(&mut editor, &capture, &sink).await;

    assert_eq!(outcome, ExportOutcome::Skipped);
    assert_eq!(capture.calls.get(), 0);
    assert!(editor.is_export_pending(), "slot still held by the first export");
}

#[tokio::test]
async fn test_export_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TicketEditor::default();
    let sink = DirectorySink::new(dir.path());

    let outcome = export_ticket(&mut editor, &FixedCapture::new(), &sink).await;

    let expected = dir.path().join("bus-ticket.png");
    assert_eq!(outcome, ExportOutcome::Saved(expected.clone()));
    let bytes = std::fs::read(expected).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
