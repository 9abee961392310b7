// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Theme persistence.
//!
//! The editor never talks to storage itself. On save the form hands the
//! validated theme and the selected background file to a [`ThemeStore`];
//! when editing, it loads a theme and seeds the editor with its markers.

use super::serialization;
use crate::models::theme::ThemeData;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Saves and loads themes along with their background files.
pub trait ThemeStore {
    /// Store `theme`, uploading `background` if one was selected.
    /// Returns the theme as stored, with `background_image` pointing at the
    /// uploaded copy.
    fn save(&self, theme: &ThemeData, background: Option<&Path>) -> Result<ThemeData>;

    /// Load the theme stored under `name`.
    fn load(&self, name: &str) -> Result<ThemeData>;

    /// Names of all stored themes, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Theme store backed by a local directory.
///
/// Each theme is written as `<slug>.json`; its background is copied to
/// `<slug>.<ext>` alongside it.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.json", slug))
    }
}

/// Turn a theme name into a file-safe identifier.
///
/// Letters and digits from any script are kept, lowercased; every other run
/// of characters becomes a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

impl ThemeStore for DirectoryStore {
    fn save(&self, theme: &ThemeData, background: Option<&Path>) -> Result<ThemeData> {
        let slug = slugify(&theme.name);
        if slug.is_empty() {
            bail!("Theme name {:?} has no usable characters", theme.name);
        }
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;

        let path = self.document_path(&slug);
        if path.exists() {
            let existing = serialization::import_json(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if existing.name != theme.name {
                bail!(
                    "Theme name {:?} clashes with stored theme {:?}",
                    theme.name,
                    existing.name
                );
            }
        }

        let mut stored = theme.clone();
        if let Some(source) = background {
            let ext = source.extension().and_then(|s| s.to_str()).unwrap_or("img");
            let target = self.root.join(format!("{}.{}", slug, ext.to_ascii_lowercase()));
            if source != target {
                std::fs::copy(source, &target).with_context(|| {
                    format!("Failed to upload background {}", source.display())
                })?;
            }
            stored.background_image = Some(target.to_string_lossy().into_owned());
        }

        serialization::export_json(&stored, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!(
            "Saved theme {:?} with {} markers to {}",
            stored.name,
            stored.coordinates.len(),
            path.display()
        );
        Ok(stored)
    }

    fn load(&self, name: &str) -> Result<ThemeData> {
        let path = self.document_path(&slugify(name));
        let theme = serialization::import_json(&path)
            .with_context(|| format!("Failed to load theme {:?}", name))?;
        if theme.name != name {
            bail!("No theme named {:?} (found {:?})", name, theme.name);
        }
        log::info!("Loaded theme {:?} with {} markers", theme.name, theme.coordinates.len());
        Ok(theme)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match serialization::import_json(&path) {
                Ok(theme) => names.push(theme.name),
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
        }
        names.sort();
        Ok(names)
    }
}
