use serde::{Deserialize, Serialize};

/// A documented AI application scenario with its descriptive metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UseCase {
    /// Display title, never empty after normalization
    pub title: String,

    /// Site-relative path the record is reachable under (route base + slug)
    pub path: String,

    /// Short summary shown on cards, may be empty
    pub description: String,

    /// Free-text labels used for filtering, authored order preserved
    pub tags: Vec<String>,

    /// Audience the scenario is written for, authored order preserved
    pub stakeholders: Vec<String>,

    /// Names of the thematic clusters this use case belongs to
    pub clusters: Vec<String>,

    /// Development pillars referenced by this use case
    pub pillars: Vec<String>,

    /// Optional maturity level
    pub difficulty: Option<Difficulty>,
}

impl UseCase {
    /// Check whether a tag is present (exact, case-sensitive match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check membership in a cluster by name
    #[must_use]
    pub fn in_cluster(&self, name: &str) -> bool {
        self.clusters.iter().any(|c| c == name)
    }
}

/// Ordinal maturity level of a use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// First ideas, little implementation experience required
    Beginner,
    /// Working prototypes with some integration work
    Intermediate,
    /// Production-grade systems with operational constraints
    Advanced,
}

impl Difficulty {
    /// All levels in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Parse a level from its authored name (case-insensitive, trimmed)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Badge color used when rendering the level
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Beginner => "#4caf50",
            Self::Intermediate => "#ff9800",
            Self::Advanced => "#f44336",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_name() {
        assert_eq!(Difficulty::from_name("beginner"), Some(Difficulty::Beginner));
        assert_eq!(
            Difficulty::from_name("Intermediate"),
            Some(Difficulty::Intermediate)
        );
        assert_eq!(
            Difficulty::from_name("  ADVANCED  "),
            Some(Difficulty::Advanced)
        );
        assert_eq!(Difficulty::from_name("expert"), None);
        assert_eq!(Difficulty::from_name(""), None);
    }

    #[test]
    fn test_difficulty_round_trip() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_difficulty_colors_distinct() {
        assert_ne!(Difficulty::Beginner.color(), Difficulty::Advanced.color());
        assert_ne!(
            Difficulty::Beginner.color(),
            Difficulty::Intermediate.color()
        );
    }

    #[test]
    fn test_has_tag_is_exact() {
        let use_case = UseCase {
            title: "Demo".to_string(),
            path: "/use-cases/demo".to_string(),
            description: String::new(),
            tags: vec!["nlp".to_string(), "rag".to_string()],
            stakeholders: Vec::new(),
            clusters: Vec::new(),
            pillars: Vec::new(),
            difficulty: None,
        };
        assert!(use_case.has_tag("nlp"));
        assert!(!use_case.has_tag("NLP"));
        assert!(!use_case.has_tag("chatbot"));
    }
}
