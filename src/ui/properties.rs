// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Theme form panel.
//!
//! This module provides the side panel for naming the theme, reviewing the
//! placed markers and saving or reopening stored themes.

use crate::editor::EditorState;
use crate::ui::canvas::area_color;

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    Save,
    NewTheme,
    OpenStored(String),
}

/// Display the theme form.
pub fn show(
    ui: &mut egui::Ui,
    theme_name: &mut String,
    background: Option<&str>,
    state: &EditorState,
    stored_themes: &[String],
    status: Option<&Result<String, String>>,
) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Theme");
    ui.separator();

    ui.label("Name");
    ui.text_edit_singleline(theme_name);

    ui.add_space(6.0);
    ui.label("Background");
    match background {
        Some(bg) => ui.label(egui::RichText::new(bg).monospace().small()),
        None => ui.label(egui::RichText::new("none selected").weak()),
    };

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("💾 Save").clicked() {
            action = PropertiesAction::Save;
        }
        if ui.button("New").clicked() {
            action = PropertiesAction::NewTheme;
        }
    });

    if let Some(status) = status {
        match status {
            Ok(message) => ui.colored_label(egui::Color32::LIGHT_GREEN, message),
            Err(message) => ui.colored_label(egui::Color32::LIGHT_RED, message),
        };
    }

    ui.separator();
    ui.label(format!("Markers ({})", state.coordinates().len()));
    ui.label(
        egui::RichText::new(format!(
            "{} to undo, {} to redo",
            state.undo_stack().len(),
            state.redo_stack().len()
        ))
        .weak(),
    );

    egui::ScrollArea::vertical()
        .id_source("markers")
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui| {
            for (index, placed) in state.coordinates().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{}.", index + 1));
                    ui.colored_label(area_color(&placed.marker.area), placed.marker.area.as_str());
                    ui.label(
                        egui::RichText::new(format!("{:.1}%, {:.1}%", placed.marker.x, placed.marker.y))
                            .monospace(),
                    );
                });
            }
        });

    ui.separator();
    ui.label("Stored themes");
    if stored_themes.is_empty() {
        ui.label(egui::RichText::new("none yet").weak());
    }
    for name in stored_themes {
        if ui.link(name).clicked() {
            action = PropertiesAction::OpenStored(name.clone());
        }
    }

    action
}
