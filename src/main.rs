//! Audio Splicer — cut padded clips out of recordings for dataset building.
//!
//! Thin binary entry point. All logic lives in the `splicer-core`
//! and `splicer-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use splicer_core::config;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Audio Splicer starting");

    let config_path = config::default_config_path();
    let settings = config::load_config(&config_path);

    let icon = splicer_gui::icon::generate_icon(64);

    // Open the remembered folders before the window exists so the first
    // frame already shows the file list.
    let state = splicer_gui::SplicerState::build(settings, config_path);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Audio Splicer - Quran Dataset Tool")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1200.0, 800.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "Audio Splicer",
        options,
        Box::new(|cc| {
            Ok(Box::new(splicer_gui::SplicerApp::with_state(cc, state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
