// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor settings.
//!
//! Settings are read from a YAML file named by `ARTWALL_CONFIG`, or
//! `artwall.yaml` in the working directory. Every field is optional and a
//! missing file yields the defaults.

use crate::models::marker::Area;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "ARTWALL_CONFIG";

/// Settings file looked up when `ARTWALL_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "artwall.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Area labels offered in the toolbar, in display order
    pub areas: Vec<Area>,
    /// Directory the theme store saves into
    pub store_dir: PathBuf,
    /// Radius of a marker dot on the canvas
    pub marker_radius: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            areas: vec![Area::top(), Area::center(), Area::bottom()],
            store_dir: PathBuf::from("themes"),
            marker_radius: 6.0,
        }
    }
}

impl EditorConfig {
    /// Load settings from the configured location.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse settings {}", path.display()))?;
        if config.areas.is_empty() {
            config.areas = Self::default().areas;
        }
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }
}
