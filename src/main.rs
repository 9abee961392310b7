// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Art Wall theme editor
//!
//! A desktop admin tool for the Digital Art Wall: pick a themed background,
//! place labelled markers on it and save the theme.

mod app;
mod config;
mod editor;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::ArtWallApp;
use config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::load().unwrap_or_else(|e| {
        log::error!("{:#}, using default settings", e);
        EditorConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Art Wall - Theme Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Art Wall Themes",
        options,
        Box::new(|_cc| Ok(Box::new(ArtWallApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
