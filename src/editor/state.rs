// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate list, undo/redo history and armed area for one editing session.
//!
//! `EditorState` is the single owner of the session's marker state. The
//! marker editor never mutates it directly; it emits [`EditIntent`]s which
//! are applied here.

use super::EditIntent;
use crate::models::marker::{is_percent, Area, Marker, MarkerId, PlacedMarker};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Background chosen in this session but not yet handed to the theme store.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedBackground {
    /// Raw file to be uploaded on save
    pub file: PathBuf,
    /// Locally renderable preview location
    pub preview_uri: String,
}

/// Marker state owned by the theme form.
#[derive(Debug, Default)]
pub struct EditorState {
    coordinates: Vec<PlacedMarker>,
    /// Placements available to undo, most recent last
    undo_stack: Vec<PlacedMarker>,
    /// Undone placements available to redo, most recent first
    redo_stack: VecDeque<PlacedMarker>,
    selected_area: Option<Area>,
    background: Option<SelectedBackground>,
    /// Sequence passed to the last seed, so repeated seeds are ignored
    last_seed: Option<Vec<Marker>>,
    next_id: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an intent. Returns whether anything changed.
    pub fn apply(&mut self, intent: EditIntent) -> bool {
        match intent {
            EditIntent::SelectBackground { file, preview_uri } => {
                log::info!("Selected background {}", file.display());
                self.background = Some(SelectedBackground { file, preview_uri });
                true
            }
            EditIntent::ToggleArea(area) => {
                self.toggle_area(area);
                true
            }
            EditIntent::Place(marker) => {
                self.place(marker);
                true
            }
            EditIntent::Move { index, x, y } => self.move_marker(index, x, y),
            EditIntent::Undo => self.undo(),
            EditIntent::Redo => self.redo(),
            EditIntent::Seed(markers) => self.seed(markers),
        }
    }

    fn toggle_area(&mut self, area: Area) {
        if self.selected_area.as_ref() == Some(&area) {
            log::debug!("Cleared area selection {}", area);
            self.selected_area = None;
        } else {
            log::debug!("Armed area {}", area);
            self.selected_area = Some(area);
        }
    }

    fn allocate_id(&mut self) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn place(&mut self, marker: Marker) {
        let placed = PlacedMarker::new(self.allocate_id(), marker);
        log::info!(
            "Placed {} marker at ({:.2}, {:.2}), total: {}",
            placed.marker.area,
            placed.marker.x,
            placed.marker.y,
            self.coordinates.len() + 1
        );
        self.coordinates.push(placed.clone());
        self.undo_stack.push(placed);
        // A new placement invalidates anything that was undone
        self.redo_stack.clear();
    }

    fn move_marker(&mut self, index: usize, x: f64, y: f64) -> bool {
        if !is_percent(x) || !is_percent(y) {
            log::trace!("Ignored move of marker {} to ({}, {})", index, x, y);
            return false;
        }
        match self.coordinates.get_mut(index) {
            Some(placed) => {
                placed.marker.x = x;
                placed.marker.y = y;
                true
            }
            None => {
                log::debug!("Ignored move of missing marker {}", index);
                false
            }
        }
    }

    fn undo(&mut self) -> bool {
        let Some(last) = self.undo_stack.pop() else {
            return false;
        };
        // Removes by equality, so a marker that was dragged since placement
        // no longer matches and stays in the list.
        if let Some(pos) = self.coordinates.iter().position(|c| *c == last) {
            self.coordinates.remove(pos);
        }
        log::info!("Undo marker #{}, total markers: {}", last.id.0, self.coordinates.len());
        self.redo_stack.push_front(last);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop_front() else {
            return false;
        };
        self.coordinates.push(next.clone());
        self.undo_stack.push(next);
        log::info!("Redo, total markers: {}", self.coordinates.len());
        true
    }

    fn seed(&mut self, markers: Vec<Marker>) -> bool {
        if self.last_seed.as_ref() == Some(&markers) {
            log::debug!("Ignored repeated seed of {} markers", markers.len());
            return false;
        }
        let outside = markers.iter().filter(|m| !m.in_bounds()).count();
        if outside > 0 {
            log::warn!("{} seeded markers lie outside the image", outside);
        }
        let mut seeded = Vec::with_capacity(markers.len());
        for marker in &markers {
            seeded.push(PlacedMarker::new(self.allocate_id(), marker.clone()));
        }
        self.coordinates = seeded;
        log::info!("Seeded {} markers", self.coordinates.len());
        self.last_seed = Some(markers);
        true
    }

    // --- Queries ---

    pub fn coordinates(&self) -> &[PlacedMarker] {
        &self.coordinates
    }

    /// Plain marker values in list order, as handed to a save operation.
    pub fn markers(&self) -> Vec<Marker> {
        self.coordinates.iter().map(|c| c.marker.clone()).collect()
    }

    pub fn undo_stack(&self) -> &[PlacedMarker] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &VecDeque<PlacedMarker> {
        &self.redo_stack
    }

    pub fn selected_area(&self) -> Option<&Area> {
        self.selected_area.as_ref()
    }

    pub fn background(&self) -> Option<&SelectedBackground> {
        self.background.as_ref()
    }

    pub fn background_file(&self) -> Option<&Path> {
        self.background.as_ref().map(|b| b.file.as_path())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &[PlacedMarker]) -> Vec<Marker> {
        list.iter().map(|p| p.marker.clone()).collect()
    }

    fn redo_values(state: &EditorState) -> Vec<Marker> {
        state.redo_stack().iter().map(|p| p.marker.clone()).collect()
    }

    #[test]
    fn test_toggle_area_twice_clears() {
        let mut state = EditorState::new();
        state.apply(EditIntent::ToggleArea(Area::top()));
        assert_eq!(state.selected_area(), Some(&Area::top()));

        state.apply(EditIntent::ToggleArea(Area::bottom()));
        assert_eq!(state.selected_area(), Some(&Area::bottom()));

        state.apply(EditIntent::ToggleArea(Area::bottom()));
        assert_eq!(state.selected_area(), None);
    }

    #[test]
    fn test_place_clears_redo() {
        let mut state = EditorState::new();
        state.apply(EditIntent::Place(Marker::new(1.0, 1.0, Area::top())));
        state.apply(EditIntent::Place(Marker::new(2.0, 2.0, Area::top())));
        state.apply(EditIntent::Undo);
        state.apply(EditIntent::Undo);
        assert_eq!(state.redo_stack().len(), 2);

        state.apply(EditIntent::Place(Marker::new(3.0, 3.0, Area::center())));
        assert!(state.redo_stack().is_empty());
        assert!(!state.can_redo());
        assert_eq!(values(state.coordinates()), vec![Marker::new(3.0, 3.0, Area::center())]);
    }

    #[test]
    fn test_redo_front_is_most_recently_undone() {
        let mut state = EditorState::new();
        let a = Marker::new(10.0, 10.0, Area::top());
        let b = Marker::new(20.0, 20.0, Area::bottom());
        state.apply(EditIntent::Place(a.clone()));
        state.apply(EditIntent::Place(b.clone()));

        state.apply(EditIntent::Undo);
        state.apply(EditIntent::Undo);
        assert_eq!(redo_values(&state), vec![a.clone(), b.clone()]);

        state.apply(EditIntent::Redo);
        assert_eq!(values(state.coordinates()), vec![a.clone()]);
        state.apply(EditIntent::Redo);
        assert_eq!(values(state.coordinates()), vec![a, b]);
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_is_noop() {
        let mut state = EditorState::new();
        assert!(!state.apply(EditIntent::Undo));
        assert!(!state.apply(EditIntent::Redo));
        assert!(state.coordinates().is_empty());
        assert!(state.undo_stack().is_empty());
        assert!(state.redo_stack().is_empty());
    }

    #[test]
    fn test_undo_distinguishes_identical_placements() {
        let mut state = EditorState::new();
        let twin = Marker::new(50.0, 50.0, Area::center());
        state.apply(EditIntent::Place(twin.clone()));
        state.apply(EditIntent::Place(twin.clone()));
        let second = state.coordinates()[1].id;

        state.apply(EditIntent::Undo);
        assert_eq!(state.coordinates().len(), 1);
        assert_ne!(state.coordinates()[0].id, second);
        assert_eq!(state.redo_stack()[0].id, second);
    }

    #[test]
    fn test_undo_after_drag_leaves_moved_marker() {
        let mut state = EditorState::new();
        state.apply(EditIntent::Place(Marker::new(10.0, 10.0, Area::top())));
        state.apply(EditIntent::Move { index: 0, x: 20.0, y: 20.0 });

        assert!(state.apply(EditIntent::Undo));
        assert_eq!(values(state.coordinates()), vec![Marker::new(20.0, 20.0, Area::top())]);
        assert_eq!(redo_values(&state), vec![Marker::new(10.0, 10.0, Area::top())]);
    }

    #[test]
    fn test_move_preserves_area_and_order() {
        let mut state = EditorState::new();
        state.apply(EditIntent::Place(Marker::new(10.0, 10.0, Area::top())));
        state.apply(EditIntent::Place(Marker::new(90.0, 90.0, Area::bottom())));

        assert!(state.apply(EditIntent::Move { index: 0, x: 60.0, y: 50.0 }));
        assert_eq!(
            values(state.coordinates()),
            vec![
                Marker::new(60.0, 50.0, Area::top()),
                Marker::new(90.0, 90.0, Area::bottom()),
            ]
        );
        assert_eq!(state.undo_stack().len(), 2);
        assert!(state.redo_stack().is_empty());
    }

    #[test]
    fn test_move_out_of_bounds_or_missing_is_ignored() {
        let mut state = EditorState::new();
        state.apply(EditIntent::Place(Marker::new(10.0, 10.0, Area::top())));

        assert!(!state.apply(EditIntent::Move { index: 0, x: 150.0, y: 50.0 }));
        assert!(!state.apply(EditIntent::Move { index: 0, x: 50.0, y: -1.0 }));
        assert!(!state.apply(EditIntent::Move { index: 3, x: 50.0, y: 50.0 }));
        assert_eq!(values(state.coordinates()), vec![Marker::new(10.0, 10.0, Area::top())]);
    }

    #[test]
    fn test_seed_fires_once_per_sequence() {
        let mut state = EditorState::new();
        let initial = vec![
            Marker::new(50.0, 10.0, Area::top()),
            Marker::new(50.0, 90.0, Area::bottom()),
        ];

        assert!(state.apply(EditIntent::Seed(initial.clone())));
        state.apply(EditIntent::Place(Marker::new(50.0, 50.0, Area::center())));

        // Same sequence again must not reset the session
        assert!(!state.apply(EditIntent::Seed(initial.clone())));
        assert_eq!(state.coordinates().len(), 3);

        let other = vec![Marker::new(1.0, 1.0, Area::top())];
        assert!(state.apply(EditIntent::Seed(other.clone())));
        assert_eq!(state.markers(), other);
    }

    #[test]
    fn test_seeded_markers_are_not_undoable() {
        let mut state = EditorState::new();
        state.apply(EditIntent::Seed(vec![Marker::new(5.0, 5.0, Area::top())]));
        assert!(!state.can_undo());
        assert!(!state.apply(EditIntent::Undo));
        assert_eq!(state.coordinates().len(), 1);
    }

    #[test]
    fn test_select_background_records_file_and_preview() {
        let mut state = EditorState::new();
        state.apply(EditIntent::SelectBackground {
            file: PathBuf::from("/tmp/wall.png"),
            preview_uri: "file:///tmp/wall.png".to_string(),
        });
        assert_eq!(state.background_file(), Some(Path::new("/tmp/wall.png")));
        assert_eq!(
            state.background().map(|b| b.preview_uri.as_str()),
            Some("file:///tmp/wall.png")
        );
    }
}
