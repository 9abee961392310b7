// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the theme form that owns the editing session. It
//! turns panel actions into editor intents, applies them to the session
//! state, and hands finished themes to the theme store.

use crate::config::EditorConfig;
use crate::editor::{EditIntent, EditorState, MarkerEditor};
use crate::io::media::{self, LoadedImage, IMAGE_EXTENSIONS};
use crate::io::serialization;
use crate::io::store::{DirectoryStore, ThemeStore};
use crate::models::theme::ThemeData;
use crate::ui::{canvas, properties, toolbar};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Main application state.
pub struct ArtWallApp {
    config: EditorConfig,

    /// External persistence for finished themes
    store: Box<dyn ThemeStore>,

    /// Pointer interaction state (drag session)
    editor: MarkerEditor,

    /// Markers, history and armed area for the current theme
    state: EditorState,

    theme_name: String,

    /// Background of the theme being edited, as stored
    stored_background: Option<String>,

    /// Preview texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Preview dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Receiver for background preview decoding
    image_loader: Option<Receiver<anyhow::Result<LoadedImage>>>,

    stored_themes: Vec<String>,

    /// Outcome of the last save/load, shown in the form
    status: Option<Result<String, String>>,
}

impl ArtWallApp {
    /// Create the app with a directory store at the configured location.
    pub fn new(config: EditorConfig) -> Self {
        let store = DirectoryStore::new(config.store_dir.clone());
        Self::with_store(config, Box::new(store))
    }

    pub fn with_store(config: EditorConfig, store: Box<dyn ThemeStore>) -> Self {
        let mut app = Self {
            config,
            store,
            editor: MarkerEditor::new(),
            state: EditorState::new(),
            theme_name: String::new(),
            stored_background: None,
            image_texture: None,
            image_size: None,
            image_loader: None,
            stored_themes: Vec::new(),
            status: None,
        };
        app.refresh_stored_themes();
        app
    }

    fn apply(&mut self, intent: EditIntent) {
        self.state.apply(intent);
    }

    fn refresh_stored_themes(&mut self) {
        match self.store.list() {
            Ok(names) => self.stored_themes = names,
            Err(e) => log::error!("Failed to list themes: {:#}", e),
        }
    }

    /// Background shown in the form: a newly selected file wins over the
    /// stored one.
    fn background_label(&self) -> Option<String> {
        self.state
            .background()
            .map(|b| b.file.display().to_string())
            .or_else(|| self.stored_background.clone())
    }

    /// Discard the current session and start an empty theme.
    fn new_theme(&mut self) {
        self.editor = MarkerEditor::new();
        self.state = EditorState::new();
        self.theme_name.clear();
        self.stored_background = None;
        self.image_texture = None;
        self.image_size = None;
        self.image_loader = None;
        self.status = None;
    }

    /// Start a fresh session seeded from an existing theme.
    fn edit_theme(&mut self, theme: ThemeData) {
        self.new_theme();
        self.theme_name = theme.name;
        if let Some(ref bg) = theme.background_image {
            let path = PathBuf::from(bg);
            if path.exists() {
                self.load_preview(path);
            } else {
                log::warn!("Background {} is not a local file, no preview", bg);
            }
        }
        self.stored_background = theme.background_image;
        let intent = self.editor.load_initial_markers(theme.coordinates);
        self.apply(intent);
    }

    /// Choose a new background file and decode a preview for it.
    fn select_background(&mut self, path: PathBuf) {
        let intent = self.editor.select_background_image(path);
        self.apply(intent);
        let preview = self
            .state
            .background()
            .and_then(|b| media::preview_path(&b.preview_uri));
        if let Some(preview) = preview {
            self.load_preview(preview);
        }
    }

    fn load_preview(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = media::load_image(&path);
            if let Ok(ref img) = result {
                log::info!("Loaded background: {} ({}x{})", path.display(), img.width, img.height);
            }
            let _ = sender.send(result);
        });
    }

    fn current_theme(&self) -> ThemeData {
        ThemeData {
            name: self.theme_name.trim().to_string(),
            background_image: self.background_label(),
            coordinates: self.state.markers(),
        }
    }

    fn save_theme(&mut self) {
        let theme = self.current_theme();
        if let Err(e) = theme.validate() {
            self.status = Some(Err(e.to_string()));
            return;
        }
        match self.store.save(&theme, self.state.background_file()) {
            Ok(stored) => {
                self.status = Some(Ok(format!("Saved \"{}\"", stored.name)));
                self.stored_background = stored.background_image;
                self.refresh_stored_themes();
            }
            Err(e) => {
                log::error!("Failed to save theme: {:#}", e);
                self.status = Some(Err(format!("Save failed: {}", e)));
            }
        }
    }

    fn open_stored(&mut self, name: &str) {
        match self.store.load(name) {
            Ok(theme) => self.edit_theme(theme),
            Err(e) => {
                log::error!("Failed to open theme: {:#}", e);
                self.status = Some(Err(format!("Could not open \"{}\"", name)));
            }
        }
    }

    /// Export the current theme to a file.
    fn export_theme(&self, path: &Path) {
        match serialization::export(&self.current_theme(), path) {
            Ok(()) => log::info!("Exported theme to {}", path.display()),
            Err(e) => log::error!("Failed to export theme: {}", e),
        }
    }

    /// Import a theme from a file and edit it.
    fn import_theme(&mut self, path: &Path) {
        match serialization::import(path) {
            Ok(theme) => {
                log::info!("Imported {} markers from {}", theme.coordinates.len(), path.display());
                self.edit_theme(theme);
            }
            Err(e) => {
                log::error!("Failed to import theme: {}", e);
                self.status = Some(Err(format!("Import failed: {}", e)));
            }
        }
    }

    fn pick_background(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.select_background(path);
        }
    }

    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                // Still decoding
                ctx.request_repaint();
                return;
            }
            Err(TryRecvError::Disconnected) => {
                log::error!("Background loader stopped without a result");
                self.image_loader = None;
                self.status = Some(Err("Background preview failed to load".to_string()));
                return;
            }
        };
        self.image_loader = None;

        match result {
            Ok(img) => {
                let size = [img.width as usize, img.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                let texture = ctx.load_texture("background", color_image, egui::TextureOptions::LINEAR);
                self.image_texture = Some(texture);
                self.image_size = Some((img.width, img.height));
            }
            Err(e) => {
                log::error!("Failed to load background: {:#}", e);
                self.status = Some(Err("Could not decode background image".to_string()));
            }
        }
    }

    fn handle_canvas_action(&mut self, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::Click { pos, image } => {
                let intent = self
                    .editor
                    .place_marker(&self.state, pos.x as f64, pos.y as f64, image);
                if let Some(intent) = intent {
                    self.apply(intent);
                }
            }
            canvas::CanvasAction::BeginDrag { index, pos } => {
                self.editor
                    .begin_drag(&self.state, index, pos.x as f64, pos.y as f64);
            }
            canvas::CanvasAction::DragTo { pos, image } => {
                if let Some(intent) = self.editor.update_drag(pos.x as f64, pos.y as f64, image) {
                    self.apply(intent);
                }
            }
            canvas::CanvasAction::EndDrag => self.editor.end_drag(),
            canvas::CanvasAction::None => {}
        }
    }
}

impl eframe::App for ArtWallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Theme").clicked() {
                        self.new_theme();
                        ui.close_menu();
                    }
                    if ui.button("Choose Background...").clicked() {
                        self.pick_background();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Import Theme...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Themes", &["json", "yaml", "yml"])
                            .pick_file()
                        {
                            self.import_theme(&path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Export Theme", |ui| {
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("theme.json")
                                .save_file()
                            {
                                self.export_theme(&path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("theme.yaml")
                                .save_file()
                            {
                                self.export_theme(&path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui
                        .add_enabled(self.state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                        .clicked()
                    {
                        let intent = self.editor.undo();
                        self.apply(intent);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.state.can_redo(), egui::Button::new("Redo (Ctrl+Shift+Z)"))
                        .clicked()
                    {
                        let intent = self.editor.redo();
                        self.apply(intent);
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &self.config.areas, &self.state))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::PickBackground => self.pick_background(),
            toolbar::ToolbarAction::SelectArea(area) => {
                let intent = self.editor.select_area(area);
                self.apply(intent);
            }
            toolbar::ToolbarAction::Undo => {
                let intent = self.editor.undo();
                self.apply(intent);
            }
            toolbar::ToolbarAction::Redo => {
                let intent = self.editor.redo();
                self.apply(intent);
            }
            toolbar::ToolbarAction::None => {}
        }

        // Theme form (right side)
        let background = self.background_label();
        let properties_action = egui::SidePanel::right("properties")
            .default_width(260.0)
            .show(ctx, |ui| {
                properties::show(
                    ui,
                    &mut self.theme_name,
                    background.as_deref(),
                    &self.state,
                    &self.stored_themes,
                    self.status.as_ref(),
                )
            })
            .inner;

        match properties_action {
            properties::PropertiesAction::Save => self.save_theme(),
            properties::PropertiesAction::NewTheme => self.new_theme(),
            properties::PropertiesAction::OpenStored(name) => self.open_stored(&name),
            properties::PropertiesAction::None => {}
        }

        // Keyboard shortcuts, unless a text field has focus
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift) {
                let intent = self.editor.undo();
                self.apply(intent);
            }
            if ctx.input(|i| {
                (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                    || (i.modifiers.command && i.key_pressed(egui::Key::Y))
            }) {
                let intent = self.editor.redo();
                self.apply(intent);
            }
        }

        // Main canvas (center)
        let background = self.background_label();
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.image_loader.is_some() {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        &self.image_texture,
                        self.image_size,
                        background.as_deref(),
                        &self.state,
                        self.editor.drag().map(|d| d.index),
                        self.config.marker_radius,
                    )
                }
            })
            .inner;

        self.handle_canvas_action(canvas_action);

        if self.editor.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
}
