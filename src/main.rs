#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod export;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use swiftride_core::TicketData;
use tracing_subscriber::EnvFilter;

use crate::context::{AppConfig, SaveMode};

/// Global app configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// SwiftRide Express - Editable bus ticket
#[derive(Parser, Debug)]
#[command(name = "swiftride-desktop")]
#[command(about = "SwiftRide Express - Fill in a bus ticket and export it as PNG")]
struct Args {
    /// Directory the exported bus-ticket.png is written to
    #[arg(short, long)]
    download_dir: Option<PathBuf>,

    /// Ask for a save location on every export
    #[arg(long)]
    ask: bool,

    /// JSON file with initial ticket values (camelCase field keys)
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

impl Args {
    fn load_seed(&self) -> anyhow::Result<TicketData> {
        match &self.seed {
            Some(path) => TicketData::load(path)
                .with_context(|| format!("Failed to load seed file {}", path.display())),
            None => Ok(TicketData::sample()),
        }
    }

    /// Resolve the flags. A seed that cannot be loaded is logged and replaced
    /// by the sample ticket; the other flags still apply.
    fn into_config(self) -> AppConfig {
        let seed = self.load_seed().unwrap_or_else(|e| {
            tracing::error!("{:#}; using sample ticket", e);
            TicketData::sample()
        });

        AppConfig {
            download_dir: self
                .download_dir
                .unwrap_or_else(AppConfig::default_download_dir),
            save_mode: if self.ask {
                SaveMode::Dialog
            } else {
                SaveMode::Directory
            },
            seed,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = args.into_config();

    tracing::info!(
        "Starting with download dir {:?} ({:?})",
        config.download_dir,
        config.save_mode
    );

    let _ = APP_CONFIG.set(config);

    let window_width = 520.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SwiftRide Express - Ticket")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["swiftride-desktop"]).unwrap();
        let config = args.into_config();
        assert_eq!(config.save_mode, SaveMode::Directory);
        assert_eq!(config.seed, TicketData::sample());
        assert_eq!(config.download_dir, AppConfig::default_download_dir());
    }

    #[test]
    fn test_args_ask_and_dir() {
        let args =
            Args::try_parse_from(["swiftride-desktop", "--ask", "-d", "/tmp/tickets"]).unwrap();
        let config = args.into_config();
        assert_eq!(config.save_mode, SaveMode::Dialog);
        assert_eq!(config.download_dir, PathBuf::from("/tmp/tickets"));
    }

    #[test]
    fn test_args_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{"passengerName":"Ann Lee","seat":"2A"}"#).unwrap();

        let args = Args::try_parse_from([
            OsStr::new("swiftride-desktop"),
            OsStr::new("--seed"),
            path.as_os_str(),
        ])
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.seed.passenger_name, "Ann Lee");
        assert_eq!(config.seed.seat, "2A");
    }

    #[test]
    fn test_args_missing_seed_file() {
        let args =
            Args::try_parse_from(["swiftride-desktop", "--seed", "/nonexistent/seed.json"])
                .unwrap();
        let err = args.load_seed().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load seed file"));
    }

    #[test]
    fn test_bad_seed_keeps_other_flags() {
        let args = Args::try_parse_from([
            "swiftride-desktop",
            "--ask",
            "-d",
            "/tmp/tickets",
            "--seed",
            "/nonexistent/seed.json",
        ])
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.save_mode, SaveMode::Dialog);
        assert_eq!(config.download_dir, PathBuf::from("/tmp/tickets"));
        assert_eq!(config.seed, TicketData::sample());
    }
}
