mod app;
mod convert;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use texuv_core::config::PickerConfig;
use texuv_core::session::PickerSession;
use texuv_core::texture;
use tracing::info;

/// Room below the image for the status bar.
const STATUS_BAR_HEIGHT: f32 = 28.0;

#[derive(Parser)]
#[command(name = "texuv", about = "Pick points on an image and get UV coordinates.")]
struct Cli {
    /// Path to the image file.
    image_path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PickerConfig::from_env().context("Failed to load config")?;
    let texture = texture::load(&cli.image_path)?;
    let (w, h) = texture.dimensions();
    info!(path = %cli.image_path.display(), width = w, height = h, "image loaded");

    let title = texture
        .file_name()
        .map(|n| format!("texuv - {n}"))
        .unwrap_or_else(|| "texuv".to_string());
    let [max_w, max_h] = config.viewport.max_window;
    let inner_size = [
        (w as f32).min(max_w),
        (h as f32).min(max_h) + STATUS_BAR_HEIGHT,
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size([200.0, 150.0])
            .with_title(title),
        ..Default::default()
    };

    let session = PickerSession::new(texture);
    eframe::run_native(
        "texuv",
        options,
        Box::new(|cc| Ok(Box::new(app::PickerApp::new(&cc.egui_ctx, session, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))
}
