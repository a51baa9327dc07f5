use std::sync::Arc;

use casebook_model::{Difficulty, UseCase};
use serde::{Deserialize, Serialize};

/// Interactive filter state: a set of selected tags plus an optional
/// difficulty.
///
/// A record matches when it carries at least one selected tag (or no tags
/// are selected) and its difficulty equals the selected one (or none is
/// selected). The empty selection is therefore the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    tags: Vec<String>,
    difficulty: Option<Difficulty>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a tag: select it if absent, deselect it if present
    pub fn toggle_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag);
        }
    }

    /// Check whether a tag is currently selected
    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Selected tags in selection order
    #[must_use]
    pub fn selected_tags(&self) -> &[String] {
        &self.tags
    }

    /// Set or clear the difficulty constraint
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// The current difficulty constraint
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Drop all constraints, restoring the identity filter
    pub fn clear(&mut self) {
        self.tags.clear();
        self.difficulty = None;
    }

    /// Check if no constraints are active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.difficulty.is_none()
    }

    /// Check a single record against the selection
    #[must_use]
    pub fn matches(&self, use_case: &UseCase) -> bool {
        let tag_match = self.tags.is_empty() || self.tags.iter().any(|t| use_case.has_tag(t));
        let difficulty_match =
            self.difficulty.is_none() || use_case.difficulty == self.difficulty;
        tag_match && difficulty_match
    }

    /// Filter a record list, preserving its order
    #[must_use]
    pub fn apply(&self, use_cases: &[Arc<UseCase>]) -> Vec<Arc<UseCase>> {
        use_cases
            .iter()
            .filter(|u| self.matches(u))
            .cloned()
            .collect()
    }
}
