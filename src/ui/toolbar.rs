// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with background picker, area selection and undo/redo.

use crate::editor::EditorState;
use crate::models::marker::Area;
use crate::ui::canvas::area_color;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    PickBackground,
    SelectArea(Area),
    Undo,
    Redo,
}

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui, areas: &[Area], state: &EditorState) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("🖼 Background...").clicked() {
            action = ToolbarAction::PickBackground;
        }

        ui.separator();
        ui.label("Areas:");

        for area in areas {
            let selected = state.selected_area() == Some(area);
            let text = egui::RichText::new(format!("● {}", area)).color(area_color(area));
            if ui.selectable_label(selected, text).clicked() {
                action = ToolbarAction::SelectArea(area.clone());
            }
        }

        ui.separator();

        if ui
            .add_enabled(state.can_undo(), egui::Button::new("⟲ Undo"))
            .clicked()
        {
            action = ToolbarAction::Undo;
        }
        if ui
            .add_enabled(state.can_redo(), egui::Button::new("⟳ Redo"))
            .clicked()
        {
            action = ToolbarAction::Redo;
        }

        ui.separator();

        let hint = if state.selected_area().is_some() {
            "Click the image to place, drag a marker to move it, select the area again to stop"
        } else {
            "Select an area, then click the image to place markers"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    action
}
