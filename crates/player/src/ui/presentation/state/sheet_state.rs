//! Sheet view-model state
//!
//! Owns the page's private copy of the loaded character: the source of
//! truth for what the shell renders. Plain struct on purpose - the UI
//! wraps it in a `Signal`, and everything here stays unit-testable.
//!
//! Mutation rules:
//! - `resync` replaces the view model wholesale when a fresh snapshot
//!   arrives (navigation to a different id, full re-fetch).
//! - `merge_hit_points` folds in a hit-points payload that the update API
//!   already confirmed persisted. Nothing is ever merged speculatively,
//!   and nothing else may mutate the character.

use fichas_shared::{Character, UpdateHitPointsRequest};

pub struct SheetState {
    character: Option<Character>,
}

impl SheetState {
    pub fn new(snapshot: Option<Character>) -> Self {
        Self {
            character: snapshot,
        }
    }

    /// The live view model, absent when no character resolved.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Wholesale replacement with a new upstream snapshot. No field of a
    /// previous snapshot survives.
    pub fn resync(&mut self, snapshot: Option<Character>) {
        self.character = snapshot;
    }

    /// Merge a confirmed hit-points update into the view model. Exactly
    /// the two hit-point fields change; every other field - including the
    /// opaque detail fields - is untouched.
    pub fn merge_hit_points(&mut self, update: &UpdateHitPointsRequest) {
        if let Some(character) = self.character.as_mut() {
            character.current_hit_points = update.current_hit_points;
            character.max_hit_points = update.max_hit_points;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character(id: i64, name: &str, extra: &[(&str, serde_json::Value)]) -> Character {
        let mut details = serde_json::Map::new();
        for (key, value) in extra {
            details.insert((*key).to_string(), value.clone());
        }
        Character {
            id,
            name: name.to_string(),
            current_hit_points: 12,
            max_hit_points: 20,
            details,
        }
    }

    mod resync_tests {
        use super::*;

        #[test]
        fn initial_state_equals_the_loaded_snapshot() {
            let snapshot = character(7, "Mialee", &[("class", json!("Wizard"))]);
            let state = SheetState::new(Some(snapshot.clone()));

            assert_eq!(state.character(), Some(&snapshot));
        }

        #[test]
        fn new_snapshot_fully_replaces_the_view_model() {
            let first = character(1, "Mialee", &[("class", json!("Wizard"))]);
            let second = character(2, "Tordek", &[("deity", json!("Moradin"))]);

            let mut state = SheetState::new(Some(first));
            state.resync(Some(second.clone()));

            let current = state.character().expect("character present");
            assert_eq!(current, &second);
            // No leftover fields from the first snapshot's schema.
            assert!(!current.details.contains_key("class"));
        }

        #[test]
        fn resync_to_absent_clears_the_view_model() {
            let mut state = SheetState::new(Some(character(1, "Mialee", &[])));
            state.resync(None);

            assert!(state.character().is_none());
        }
    }

    mod merge_tests {
        use super::*;

        #[test]
        fn merge_changes_exactly_the_two_hit_point_fields() {
            let snapshot = character(7, "Mialee", &[("class", json!("Wizard"))]);
            let mut state = SheetState::new(Some(snapshot.clone()));

            state.merge_hit_points(&UpdateHitPointsRequest {
                current_hit_points: 5,
                max_hit_points: 10,
            });

            let merged = state.character().expect("character present");
            assert_eq!(merged.current_hit_points, 5);
            assert_eq!(merged.max_hit_points, 10);
            assert_eq!(merged.id, snapshot.id);
            assert_eq!(merged.name, snapshot.name);
            assert_eq!(merged.details, snapshot.details);
        }

        #[test]
        fn merge_without_a_loaded_character_is_a_no_op() {
            let mut state = SheetState::new(None);

            state.merge_hit_points(&UpdateHitPointsRequest {
                current_hit_points: 5,
                max_hit_points: 10,
            });

            assert!(state.character().is_none());
        }

        #[test]
        fn skipped_merge_leaves_the_view_model_untouched() {
            // A failed submit never reaches merge_hit_points; the view
            // model must compare equal to its pre-submit value.
            let snapshot = character(7, "Mialee", &[("class", json!("Wizard"))]);
            let state = SheetState::new(Some(snapshot.clone()));

            assert_eq!(state.character(), Some(&snapshot));
        }
    }
}
