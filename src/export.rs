//! Desktop capture and download sinks.
//!
//! The ticket is rasterized inside the webview: the surface subtree is
//! cloned with its computed styles inlined, wrapped in an SVG
//! `foreignObject`, drawn onto a canvas, and returned as a PNG data URL.

use std::path::PathBuf;

use async_trait::async_trait;
use dioxus::prelude::*;
use image::RgbaImage;
use rfd::FileDialog;
use swiftride_core::{
    decode_data_url, Capture, CaptureError, DirectorySink, DownloadSink, ExportError,
    ExportResult,
};

use crate::context::{AppConfig, SaveMode};

const SURFACE_ID_PLACEHOLDER: &str = "__SURFACE_ID__";

/// Runs in the webview; resolves to a PNG data URL, or `null` when the
/// surface element is missing.
const CAPTURE_SCRIPT: &str = r#"
const node = document.getElementById(__SURFACE_ID__);
if (!node) {
    return null;
}

const rect = node.getBoundingClientRect();
const width = Math.ceil(rect.width);
const height = Math.ceil(rect.height);

const clone = node.cloneNode(true);
const source = [node, ...node.querySelectorAll("*")];
const target = [clone, ...clone.querySelectorAll("*")];
source.forEach((el, i) => {
    const computed = window.getComputedStyle(el);
    let css = "";
    for (let j = 0; j < computed.length; j++) {
        const prop = computed[j];
        css += `${prop}:${computed.getPropertyValue(prop)};`;
    }
    target[i].setAttribute("style", css);
});
clone.setAttribute("xmlns", "http://www.w3.org/1999/xhtml");
clone.style.margin = "0";

const markup = new XMLSerializer().serializeToString(clone);
const svg = `<svg xmlns="http://www.w3.org/2000/svg" width="${width}" height="${height}">`
    + `<foreignObject x="0" y="0" width="100%" height="100%">${markup}</foreignObject></svg>`;

const image = new Image();
await new Promise((resolve, reject) => {
    image.onload = resolve;
    image.onerror = () => reject(new Error("ticket surface could not be rendered"));
    image.src = "data:image/svg+xml;charset=utf-8," + encodeURIComponent(svg);
});

const scale = window.devicePixelRatio || 1;
const canvas = document.createElement("canvas");
canvas.width = Math.ceil(width * scale);
canvas.height = Math.ceil(height * scale);
const ctx = canvas.getContext("2d");
ctx.scale(scale, scale);
ctx.drawImage(image, 0, 0, width, height);
return canvas.toDataURL("image/png");
"#;

/// Build the capture script for a surface id.
fn capture_script(surface_id: &str) -> String {
    // JSON string literals are valid JS string literals
    let quoted = serde_json::to_string(surface_id).unwrap_or_else(|_| "\"\"".to_string());
    CAPTURE_SCRIPT.replace(SURFACE_ID_PLACEHOLDER, &quoted)
}

/// Rasterizes the on-screen ticket through the webview.
pub struct WebviewCapture;

#[async_trait(?Send)]
impl Capture for WebviewCapture {
    async fn capture(&self, surface_id: &str) -> Result<RgbaImage, CaptureError> {
        let url = document::eval(&capture_script(surface_id))
            .join::<Option<String>>()
            .await
            .map_err(|e| CaptureError::Script(format!("{:?}", e)))?
            .ok_or_else(|| CaptureError::SurfaceNotMounted(surface_id.to_string()))?;

        decode_data_url(&url)
    }
}

/// Prompts for a save location, defaulting to the export file name.
pub struct SaveDialogSink {
    start_dir: PathBuf,
}

impl SaveDialogSink {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
        }
    }
}

#[async_trait(?Send)]
impl DownloadSink for SaveDialogSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> ExportResult<PathBuf> {
        let start_dir = self.start_dir.clone();
        let file_name = file_name.to_string();

        // Blocking dialog, run off the UI thread
        let picked = tokio::task::spawn_blocking(move || {
            FileDialog::new()
                .add_filter("PNG image", &["png"])
                .set_title("Save Ticket")
                .set_directory(&start_dir)
                .set_file_name(file_name)
                .save_file()
        })
        .await
        .map_err(|e| ExportError::Io(std::io::Error::other(e)))?;

        let path = picked.ok_or(ExportError::Cancelled)?;
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

/// Pick the download sink for the configured save mode.
pub fn download_sink(config: &AppConfig) -> Box<dyn DownloadSink> {
    match config.save_mode {
        SaveMode::Directory => Box::new(DirectorySink::new(config.download_dir.clone())),
        SaveMode::Dialog => Box::new(SaveDialogSink::new(config.download_dir.clone())),
    }
}
