use serde::Deserialize;

use crate::types::{Difficulty, UseCase};

/// Title substituted when a document authors none (or only whitespace)
pub const UNTITLED: &str = "Untitled";

/// Front-matter exactly as authored: every field optional, unknown keys ignored.
///
/// Defaults are applied in one place, [`RawFrontMatter::into_use_case`], so a
/// record constructed anywhere else in the pipeline is already normalized.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawFrontMatter {
    /// Display title
    pub title: Option<String>,

    /// Short summary shown on cards
    pub description: Option<String>,

    /// Filter labels
    pub tags: Option<Vec<String>>,

    /// Intended audience
    pub stakeholders: Option<Vec<String>>,

    /// Thematic cluster names
    pub clusters: Option<Vec<String>>,

    /// Development pillar names
    pub pillars: Option<Vec<String>>,

    /// Maturity level name, resolved against [`Difficulty::from_name`]
    pub difficulty: Option<String>,
}

impl RawFrontMatter {
    /// The authored difficulty string when it does not name a known level.
    ///
    /// An absent or empty value is not an anomaly, it simply means "unrated".
    #[must_use]
    pub fn unknown_difficulty(&self) -> Option<&str> {
        let raw = self.difficulty.as_deref()?.trim();
        if raw.is_empty() || Difficulty::from_name(raw).is_some() {
            None
        } else {
            Some(raw)
        }
    }

    /// Collapse the raw block into a normalized record at the given path.
    ///
    /// Missing title becomes [`UNTITLED`], missing description the empty
    /// string, missing list fields empty lists. An unrecognized difficulty
    /// name resolves to `None`; callers that want to report it should check
    /// [`Self::unknown_difficulty`] first.
    #[must_use]
    pub fn into_use_case(self, path: impl Into<String>) -> UseCase {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => UNTITLED.to_string(),
        };
        let difficulty = self.difficulty.as_deref().and_then(Difficulty::from_name);

        UseCase {
            title,
            path: path.into(),
            description: self.description.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            stakeholders: self.stakeholders.unwrap_or_default(),
            clusters: self.clusters.unwrap_or_default(),
            pillars: self.pillars.unwrap_or_default(),
            difficulty,
        }
    }
}
