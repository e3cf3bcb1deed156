//! Ticket export pipeline
//!
//! Rasterize the read-only ticket surface, encode it as PNG, and hand the
//! bytes to a download sink. Export is best effort: failures are logged and
//! swallowed, and never touch the ticket state.
//!
//! ```ignore
//! let mut editor = TicketEditor::default();
//! let outcome = export_ticket(&mut editor, &capture, &DirectorySink::new(dir)).await;
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::editor::TicketEditor;
use crate::error::{CaptureError, ExportError, ExportResult};

/// File name every export is delivered under.
pub const EXPORT_FILE_NAME: &str = "bus-ticket.png";

/// DOM id of the read-only ticket surface.
pub const SURFACE_ID: &str = "ticket-surface";

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Turns a rendered surface into a bitmap.
#[async_trait(?Send)]
pub trait Capture {
    async fn capture(&self, surface_id: &str) -> Result<RgbaImage, CaptureError>;
}

/// Receives the encoded PNG and makes it available to the user.
#[async_trait(?Send)]
pub trait DownloadSink {
    /// Store `bytes` as `file_name`; returns where the file ended up.
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> ExportResult<PathBuf>;
}

/// Writes downloads straight into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait(?Send)]
impl DownloadSink for DirectorySink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> ExportResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::info!(path = %path.display(), "Replacing previous export");
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

/// Decode a `data:image/png;base64,` URL into a bitmap.
pub fn decode_data_url(url: &str) -> Result<RgbaImage, CaptureError> {
    let payload = url.strip_prefix(PNG_DATA_URL_PREFIX).ok_or_else(|| {
        let head: String = url.chars().take(32).collect();
        CaptureError::InvalidDataUrl(head)
    })?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| CaptureError::InvalidDataUrl(e.to_string()))?;

    let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .map_err(|e| CaptureError::Decode(e.to_string()))?;

    Ok(image.to_rgba8())
}

/// Encode a bitmap as PNG (lossless).
pub fn encode_png(bitmap: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(bitmap.clone())
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// What happened to an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The PNG was delivered to this path
    Saved(PathBuf),
    /// The user dismissed the save location prompt
    Cancelled,
    /// Capture, encoding or delivery failed; already logged
    Failed,
    /// Export is not available in the current state
    Skipped,
}

/// Capture, encode and deliver the ticket surface.
///
/// Errors are reported to the log and folded into [`ExportOutcome::Failed`].
pub async fn export_surface(capture: &dyn Capture, sink: &dyn DownloadSink) -> ExportOutcome {
    match run_export(capture, sink).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Ticket image saved");
            ExportOutcome::Saved(path)
        }
        Err(ExportError::Cancelled) => {
            tracing::info!("Ticket download cancelled");
            ExportOutcome::Cancelled
        }
        Err(e) => {
            tracing::error!(error = %e, "Error generating ticket image");
            ExportOutcome::Failed
        }
    }
}

async fn run_export(capture: &dyn Capture, sink: &dyn DownloadSink) -> ExportResult<PathBuf> {
    let bitmap = capture.capture(SURFACE_ID).await?;
    tracing::debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "Ticket surface captured"
    );
    let bytes = encode_png(&bitmap)?;
    sink.deliver(EXPORT_FILE_NAME, bytes).await
}

/// Export gated on the editor state.
///
/// Skipped while editing or while another export holds the slot; the slot
/// is released again once the pipeline finishes.
///
/// The desktop download button runs the same three steps by hand, because
/// the editor lives in a signal that must not stay borrowed across the
/// capture await. Keep the two in step.
pub async fn export_ticket(
    editor: &mut TicketEditor,
    capture: &dyn Capture,
    sink: &dyn DownloadSink,
) -> ExportOutcome {
    if !editor.begin_export() {
        tracing::debug!(mode = ?editor.mode(), "Export unavailable");
        return ExportOutcome::Skipped;
    }
    let outcome = export_surface(capture, sink).await;
    editor.finish_export();
    outcome
}
