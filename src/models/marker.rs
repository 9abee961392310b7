// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Marker data structures.
//!
//! This module defines the labelled placement markers that make up a
//! theme's coordinate list, along with the area labels they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical zone of the background a marker belongs to.
///
/// The built-in zones are `top`, `center` and `bottom`, but admins may
/// configure their own synonyms, so any label is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Area(String);

impl Area {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn top() -> Self {
        Self::new("top")
    }

    pub fn center() -> Self {
        Self::new("center")
    }

    pub fn bottom() -> Self {
        Self::new("bottom")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labelled point with coordinates as percentages (0 to 100) of the
/// background image's width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub area: Area,
}

impl Marker {
    /// Create a new marker at the given percentage position.
    pub fn new(x: f64, y: f64, area: Area) -> Self {
        Self { x, y, area }
    }

    /// Check that both coordinates lie within the image.
    pub fn in_bounds(&self) -> bool {
        is_percent(self.x) && is_percent(self.y)
    }
}

/// Returns true when `value` is a finite percentage in `[0, 100]`.
pub fn is_percent(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

/// Identity of a marker within one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// A marker as stored in the coordinate list.
///
/// Two placed markers compare equal only when both the identity and the
/// value match, so coincidentally identical placements stay distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub marker: Marker,
}

impl PlacedMarker {
    pub fn new(id: MarkerId, marker: Marker) -> Self {
        Self { id, marker }
    }
}
