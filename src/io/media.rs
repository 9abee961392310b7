// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background image loading.
//!
//! This module decodes background images into RGBA pixels suitable for
//! display in egui. No other processing is done on the image.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A decoded image ready to upload as a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// File extensions offered in the background picker.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "webp", "gif"];

/// Decode the image at `path` into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Local file behind a `file://` preview URI.
pub fn preview_path(uri: &str) -> Option<PathBuf> {
    uri.strip_prefix("file://").map(PathBuf::from)
}
