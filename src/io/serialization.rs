// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Theme serialization and deserialization.
//!
//! This module handles exporting and importing theme data in YAML
//! and JSON formats.

use crate::models::theme::ThemeData;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Write a theme as YAML.
pub fn export_yaml(data: &ThemeData, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data).context("Failed to encode theme as YAML")?;
    write_document(path, yaml)
}

/// Write a theme as pretty-printed JSON.
pub fn export_json(data: &ThemeData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to encode theme as JSON")?;
    write_document(path, json)
}

/// Read a theme from a YAML document.
pub fn import_yaml(path: &Path) -> Result<ThemeData> {
    let yaml = read_document(path)?;
    serde_yaml::from_str(&yaml).with_context(|| format!("{} is not a valid YAML theme", path.display()))
}

/// Read a theme from a JSON document.
pub fn import_json(path: &Path) -> Result<ThemeData> {
    let json = read_document(path)?;
    serde_json::from_str(&json).with_context(|| format!("{} is not a valid JSON theme", path.display()))
}

fn write_document(path: &Path, contents: String) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Export using the format implied by the file extension.
pub fn export(data: &ThemeData, path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}

/// Import using the format implied by the file extension.
pub fn import(path: &Path) -> Result<ThemeData> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}
