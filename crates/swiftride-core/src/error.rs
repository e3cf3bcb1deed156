//! Error types for the SwiftRide ticket card

use thiserror::Error;

/// Failure while rasterizing the ticket surface
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The surface element is not present in the rendered tree
    #[error("Ticket surface not mounted: {0}")]
    SurfaceNotMounted(String),

    /// The capture script threw or could not be run
    #[error("Capture script failed: {0}")]
    Script(String),

    /// The capture returned something other than a PNG data URL
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// The returned payload is not a decodable image
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Failure anywhere in the export pipeline
#[derive(Error, Debug)]
pub enum ExportError {
    /// Rasterization failed
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// PNG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user dismissed the save dialog
    #[error("Download cancelled")]
    Cancelled,
}

/// Failure loading seed ticket data
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ExportError
pub type ExportResult<T> = Result<T, ExportError>;
