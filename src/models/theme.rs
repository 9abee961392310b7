// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Theme data and form validation.
//!
//! A theme is a named background image plus the markers placed on it.

use super::marker::Marker;
use serde::{Deserialize, Serialize};

/// A required field missing from the theme form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("theme name is required")]
    MissingName,
    #[error("a background image is required")]
    MissingBackground,
    #[error("place at least one marker")]
    NoMarkers,
}

/// Complete theme data for serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<Marker>,
}

impl ThemeData {
    /// Check that all required fields are present.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.background_image.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(FormError::MissingBackground);
        }
        if self.coordinates.is_empty() {
            return Err(FormError::NoMarkers);
        }
        Ok(())
    }
}
