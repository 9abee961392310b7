// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate marker editor.
//!
//! Translates pointer and file events into [`EditIntent`]s for the state
//! owner to apply. The editor itself only holds the transient drag session;
//! the coordinate list, history and armed area live in [`EditorState`].

pub mod state;

pub use state::EditorState;

use crate::models::marker::{is_percent, Area, Marker};
use crate::util::geometry::ImageRect;
use std::path::PathBuf;

/// A requested change to the editing session.
#[derive(Debug, Clone, PartialEq)]
pub enum EditIntent {
    /// Use this file as the theme background.
    SelectBackground { file: PathBuf, preview_uri: String },
    /// Arm the area, or disarm it if it is already armed.
    ToggleArea(Area),
    /// Append a marker and record it for undo.
    Place(Marker),
    /// Reposition an existing marker.
    Move { index: usize, x: f64, y: f64 },
    Undo,
    Redo,
    /// Replace the coordinate list with markers loaded for editing.
    Seed(Vec<Marker>),
}

/// An in-progress marker drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub index: usize,
    /// Pointer position when the drag started
    pub origin: (f64, f64),
}

/// Pointer interaction state for the marker overlay.
#[derive(Debug, Default)]
pub struct MarkerEditor {
    drag: Option<DragSession>,
}

impl MarkerEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a background image file.
    pub fn select_background_image(&self, file: impl Into<PathBuf>) -> EditIntent {
        let file = file.into();
        let preview_uri = format!("file://{}", file.display());
        EditIntent::SelectBackground { file, preview_uri }
    }

    /// Toggle the armed area.
    pub fn select_area(&self, area: Area) -> EditIntent {
        EditIntent::ToggleArea(area)
    }

    /// Place a marker for a click at the given screen position.
    ///
    /// Returns `None` when no area is armed or the image has not been laid
    /// out yet. Positions outside the image are not rejected.
    pub fn place_marker(
        &self,
        state: &EditorState,
        pointer_x: f64,
        pointer_y: f64,
        image: ImageRect,
    ) -> Option<EditIntent> {
        let Some(area) = state.selected_area() else {
            log::debug!("Click at ({}, {}) with no area armed", pointer_x, pointer_y);
            return None;
        };
        if !image.has_area() {
            return None;
        }
        let (x, y) = image.to_percent(pointer_x, pointer_y);
        Some(EditIntent::Place(Marker::new(x, y, area.clone())))
    }

    /// Start dragging the marker at `index`. Ignored if there is no such marker.
    pub fn begin_drag(&mut self, state: &EditorState, index: usize, pointer_x: f64, pointer_y: f64) {
        if index >= state.coordinates().len() {
            log::debug!("Ignored drag of missing marker {}", index);
            return;
        }
        log::debug!("Started dragging marker {}", index);
        self.drag = Some(DragSession {
            index,
            origin: (pointer_x, pointer_y),
        });
    }

    /// Move the dragged marker to the given screen position.
    ///
    /// Positions that map outside the image are dropped without ending the
    /// drag.
    pub fn update_drag(&self, pointer_x: f64, pointer_y: f64, image: ImageRect) -> Option<EditIntent> {
        let session = self.drag?;
        let (x, y) = image.to_percent(pointer_x, pointer_y);
        if !is_percent(x) || !is_percent(y) {
            return None;
        }
        Some(EditIntent::Move {
            index: session.index,
            x,
            y,
        })
    }

    /// Finish the current drag, if any.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            log::debug!(
                "Stopped dragging marker {} (pressed at {:?})",
                session.index,
                session.origin
            );
        }
    }

    pub fn undo(&self) -> EditIntent {
        EditIntent::Undo
    }

    pub fn redo(&self) -> EditIntent {
        EditIntent::Redo
    }

    /// Seed the coordinate list for editing an existing theme.
    pub fn load_initial_markers(&self, markers: Vec<Marker>) -> EditIntent {
        EditIntent::Seed(markers)
    }

    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 200x100 image at the origin: a click at (2x, y) lands at (x%, y%).
    fn image() -> ImageRect {
        ImageRect::new(0.0, 0.0, 200.0, 100.0)
    }

    struct Session {
        editor: MarkerEditor,
        state: EditorState,
    }

    impl Session {
        fn new() -> Self {
            Self {
                editor: MarkerEditor::new(),
                state: EditorState::new(),
            }
        }

        fn send(&mut self, intent: Option<EditIntent>) {
            if let Some(intent) = intent {
                self.state.apply(intent);
            }
        }

        fn select(&mut self, area: Area) {
            let intent = self.editor.select_area(area);
            self.state.apply(intent);
        }

        fn click(&mut self, px: f64, py: f64) {
            let intent = self.editor.place_marker(&self.state, px, py, image());
            self.send(intent);
        }

        fn drag_to(&mut self, px: f64, py: f64) {
            let intent = self.editor.update_drag(px, py, image());
            self.send(intent);
        }

        fn undo(&mut self) {
            let intent = self.editor.undo();
            self.state.apply(intent);
        }

        fn redo(&mut self) {
            let intent = self.editor.redo();
            self.state.apply(intent);
        }

        fn list(&self) -> Vec<Marker> {
            self.state.markers()
        }

        fn undo_values(&self) -> Vec<Marker> {
            self.state.undo_stack().iter().map(|p| p.marker.clone()).collect()
        }

        fn redo_values(&self) -> Vec<Marker> {
            self.state.redo_stack().iter().map(|p| p.marker.clone()).collect()
        }
    }

    fn top(x: f64, y: f64) -> Marker {
        Marker::new(x, y, Area::top())
    }

    #[test]
    fn test_place_undo_redo_scenario() {
        let mut s = Session::new();
        s.select(Area::top());
        s.click(60.0, 40.0);
        assert_eq!(s.list(), vec![top(30.0, 40.0)]);
        assert_eq!(s.undo_values(), vec![top(30.0, 40.0)]);
        assert!(s.redo_values().is_empty());

        s.undo();
        assert!(s.list().is_empty());
        assert!(s.undo_values().is_empty());
        assert_eq!(s.redo_values(), vec![top(30.0, 40.0)]);

        s.redo();
        assert_eq!(s.list(), vec![top(30.0, 40.0)]);
        assert_eq!(s.undo_values(), vec![top(30.0, 40.0)]);
        assert!(s.redo_values().is_empty());
    }

    #[test]
    fn test_click_without_armed_area_changes_nothing() {
        let mut s = Session::new();
        s.click(60.0, 40.0);
        assert!(s.list().is_empty());

        s.select(Area::top());
        s.click(10.0, 10.0);
        s.undo();
        s.select(Area::top()); // disarm
        s.click(60.0, 40.0);
        assert!(s.list().is_empty());
        assert!(s.undo_values().is_empty());
        assert_eq!(s.redo_values().len(), 1);
    }

    #[test]
    fn test_each_marker_takes_area_armed_at_click() {
        let mut s = Session::new();
        let areas = [Area::top(), Area::center(), Area::bottom(), Area::new("sky")];
        for (i, area) in areas.iter().enumerate() {
            s.select(area.clone());
            s.click(20.0 * i as f64, 50.0);
        }
        let list = s.list();
        assert_eq!(list.len(), areas.len());
        for (marker, area) in list.iter().zip(areas.iter()) {
            assert_eq!(&marker.area, area);
        }
    }

    #[test]
    fn test_placement_outside_image_is_recorded() {
        let mut s = Session::new();
        s.select(Area::bottom());
        s.click(300.0, -20.0);
        assert_eq!(s.list(), vec![Marker::new(150.0, -20.0, Area::bottom())]);
    }

    #[test]
    fn test_placement_without_layout_is_ignored() {
        let mut s = Session::new();
        s.select(Area::top());
        let intent = s
            .editor
            .place_marker(&s.state, 10.0, 10.0, ImageRect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(intent, None);
    }

    #[test]
    fn test_drag_out_of_bounds_then_in_bounds() {
        let mut s = Session::new();
        s.select(Area::top());
        s.click(60.0, 40.0);

        s.editor.begin_drag(&s.state, 0, 60.0, 40.0);
        s.drag_to(300.0, 50.0); // maps to (150, 50)
        assert_eq!(s.list(), vec![top(30.0, 40.0)]);
        assert!(s.editor.is_dragging());

        s.drag_to(120.0, 50.0); // maps to (60, 50)
        assert_eq!(s.list(), vec![top(60.0, 50.0)]);
        assert_eq!(s.undo_values(), vec![top(30.0, 40.0)]);

        s.editor.end_drag();
        assert!(!s.editor.is_dragging());
        s.editor.end_drag();
        s.drag_to(20.0, 20.0);
        assert_eq!(s.list(), vec![top(60.0, 50.0)]);
    }

    #[test]
    fn test_begin_drag_on_missing_marker_is_ignored() {
        let mut s = Session::new();
        s.editor.begin_drag(&s.state, 0, 1.0, 1.0);
        assert_eq!(s.editor.drag(), None);
    }

    #[test]
    fn test_new_drag_overwrites_previous() {
        let mut s = Session::new();
        s.select(Area::top());
        s.click(20.0, 20.0);
        s.click(40.0, 40.0);

        s.editor.begin_drag(&s.state, 0, 20.0, 20.0);
        s.editor.begin_drag(&s.state, 1, 40.0, 40.0);
        assert_eq!(
            s.editor.drag(),
            Some(DragSession {
                index: 1,
                origin: (40.0, 40.0)
            })
        );

        s.drag_to(100.0, 80.0);
        assert_eq!(s.list(), vec![top(10.0, 20.0), top(50.0, 80.0)]);
    }

    #[test]
    fn test_drag_of_marker_removed_by_undo_is_ignored() {
        let mut s = Session::new();
        s.select(Area::center());
        s.click(20.0, 20.0);
        s.editor.begin_drag(&s.state, 0, 20.0, 20.0);
        s.undo();
        s.drag_to(100.0, 50.0);
        assert!(s.list().is_empty());
    }

    #[test]
    fn test_select_background_builds_preview_uri() {
        let editor = MarkerEditor::new();
        let intent = editor.select_background_image("/srv/walls/forest.jpg");
        assert_eq!(
            intent,
            EditIntent::SelectBackground {
                file: PathBuf::from("/srv/walls/forest.jpg"),
                preview_uri: "file:///srv/walls/forest.jpg".to_string(),
            }
        );
    }
}
