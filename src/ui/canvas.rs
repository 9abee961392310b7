// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background canvas with the marker overlay.
//!
//! This module draws the background image, renders the current markers on
//! top of it and reports pointer interactions back to the app.

use crate::editor::EditorState;
use crate::models::marker::{Area, PlacedMarker};
use crate::util::geometry::{fit_size, ImageRect};

/// Result of canvas interaction. Positions are in screen units.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    None,
    Click { pos: egui::Pos2, image: ImageRect },
    BeginDrag { index: usize, pos: egui::Pos2 },
    DragTo { pos: egui::Pos2, image: ImageRect },
    EndDrag,
}

/// Display the canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    background: Option<&str>,
    state: &EditorState,
    dragging: Option<usize>,
    marker_radius: f32,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) = (image_texture, image_size) else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(empty_canvas_message(background))
                        .color(egui::Color32::from_gray(180)),
                );
            });
            return;
        };

        let available = ui.available_size();
        let display = fit_size(img_width, img_height, available);
        let offset = (available - display) / 2.0;
        let image_rect = egui::Rect::from_min_size(ui.min_rect().min + offset, display);

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        action = interact(ui, image_rect, state, dragging, marker_radius);

        let image = ImageRect::from(image_rect);
        let painter = ui.painter();
        for (index, placed) in state.coordinates().iter().enumerate() {
            draw_marker(painter, placed, image, marker_radius, dragging == Some(index));
        }
    });

    // Status line
    ui.separator();
    ui.horizontal(|ui| {
        match state.selected_area() {
            Some(area) => ui.label(format!("Click to place a \"{}\" marker", area)),
            None => ui.label("Select an area to place markers"),
        };
        ui.separator();
        ui.label(format!("{} markers", state.coordinates().len()));
    });

    action
}

/// Allocate the image area and translate this frame's pointer input.
///
/// egui only reports a drag once the pointer has travelled past its click
/// threshold, so the grabbed marker is found at the press origin rather than
/// at the current pointer position.
pub fn interact(
    ui: &mut egui::Ui,
    image_rect: egui::Rect,
    state: &EditorState,
    dragging: Option<usize>,
    marker_radius: f32,
) -> CanvasAction {
    let image = ImageRect::from(image_rect);
    let response = ui.allocate_rect(image_rect, egui::Sense::click_and_drag());

    if response.drag_started() {
        let press = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = press {
            if let Some(index) = marker_at(state.coordinates(), image, pos, marker_radius) {
                return CanvasAction::BeginDrag { index, pos };
            }
        }
    } else if response.drag_stopped() {
        return CanvasAction::EndDrag;
    } else if response.dragged() && dragging.is_some() {
        if let Some(pos) = response.interact_pointer_pos() {
            return CanvasAction::DragTo { pos, image };
        }
    } else if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return CanvasAction::Click { pos, image };
        }
    }
    CanvasAction::None
}

/// Placeholder shown when there is no preview texture.
pub fn empty_canvas_message(background: Option<&str>) -> String {
    match background {
        Some(bg) => format!("No local preview for {}", bg),
        None => "Choose a background image to start placing markers".to_string(),
    }
}

/// Index of the topmost marker within `radius` of `pos`.
pub fn marker_at(
    markers: &[PlacedMarker],
    image: ImageRect,
    pos: egui::Pos2,
    radius: f32,
) -> Option<usize> {
    markers.iter().rposition(|placed| {
        let (x, y) = image.to_screen(placed.marker.x, placed.marker.y);
        egui::pos2(x as f32, y as f32).distance(pos) <= radius
    })
}

/// Colour used for markers of the given area.
pub fn area_color(area: &Area) -> egui::Color32 {
    match area.as_str() {
        "top" => egui::Color32::from_rgb(240, 160, 40),
        "center" => egui::Color32::from_rgb(80, 200, 120),
        "bottom" => egui::Color32::from_rgb(70, 140, 240),
        _ => egui::Color32::from_rgb(200, 110, 220),
    }
}

fn draw_marker(
    painter: &egui::Painter,
    placed: &PlacedMarker,
    image: ImageRect,
    radius: f32,
    is_dragging: bool,
) {
    let (x, y) = image.to_screen(placed.marker.x, placed.marker.y);
    let center = egui::pos2(x as f32, y as f32);
    let color = area_color(&placed.marker.area);
    let outline = if is_dragging {
        egui::Color32::WHITE
    } else {
        egui::Color32::BLACK
    };

    painter.circle_filled(center, radius, color);
    painter.circle_stroke(center, radius, egui::Stroke::new(1.5, outline));
    painter.text(
        center + egui::vec2(radius + 3.0, 0.0),
        egui::Align2::LEFT_CENTER,
        placed.marker.area.as_str(),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}
