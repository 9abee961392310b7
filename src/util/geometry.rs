// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! screen positions and percentages of the rendered background image.

/// The rendered bounding box of the background image, in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the image has actually been laid out.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Convert a screen position to percentages of the image size.
    ///
    /// The result is not bounded: positions outside the image map to values
    /// below 0 or above 100.
    pub fn to_percent(&self, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
        (
            (pointer_x - self.left) / self.width * 100.0,
            (pointer_y - self.top) / self.height * 100.0,
        )
    }

    /// Convert percentages of the image size back to a screen position.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.left + x / 100.0 * self.width,
            self.top + y / 100.0 * self.height,
        )
    }
}

impl From<egui::Rect> for ImageRect {
    fn from(rect: egui::Rect) -> Self {
        Self::new(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.width() as f64,
            rect.height() as f64,
        )
    }
}

/// Fit an image of the given pixel size into `available`, keeping its aspect
/// ratio. Returns the displayed width and height.
pub fn fit_size(img_width: u32, img_height: u32, available: egui::Vec2) -> egui::Vec2 {
    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available.x / available.y;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        egui::vec2(available.x, available.x / img_aspect)
    } else {
        egui::vec2(available.y * img_aspect, available.y)
    }
}
