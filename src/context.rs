//! Context providers for the ticket app.
//!
//! The App component provides the ticket editor signal and the resolved
//! configuration; every component below reads them via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut editor = use_ticket_editor();
//! editor.write().begin_edit();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use swiftride_core::{TicketData, TicketEditor};

/// Where exported tickets go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Write `bus-ticket.png` into the download directory
    #[default]
    Directory,
    /// Prompt for a location with a native save dialog
    Dialog,
}

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub download_dir: PathBuf,
    pub save_mode: SaveMode,
    /// Initial ticket values
    pub seed: TicketData,
}

impl AppConfig {
    /// The user's download directory, or the working directory.
    pub fn default_download_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            download_dir: Self::default_download_dir(),
            save_mode: SaveMode::default(),
            seed: TicketData::sample(),
        }
    }
}

/// Get the configuration resolved from the command line.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Hook to access the ticket editor state.
///
/// Reading through the signal subscribes the calling component, so it
/// re-renders after every mutation.
pub fn use_ticket_editor() -> Signal<TicketEditor> {
    use_context::<Signal<TicketEditor>>()
}

/// Hook to access the app configuration.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
