use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Visual identity of a thematic cluster card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterStyle {
    /// Cluster name, the key use cases reference in their front matter
    pub name: String,

    /// One-line description shown under the cluster heading
    pub description: String,

    /// Emoji shown next to the name
    pub icon: String,

    /// Card background color
    pub color: String,

    /// Card border color
    pub border_color: String,
}

/// Hand-authored table of cluster display metadata.
///
/// Authored order is display order, so entries are kept in a `Vec` rather
/// than a map. Lookups are linear; the table is a handful of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterTable {
    entries: Vec<ClusterStyle>,
}

impl ClusterTable {
    /// Create a table from authored entries, preserving their order
    #[must_use]
    pub fn new(entries: Vec<ClusterStyle>) -> Self {
        Self { entries }
    }

    /// The built-in table used when no configuration overrides it
    #[must_use]
    pub fn builtin() -> &'static Self {
        static TABLE: Lazy<ClusterTable> = Lazy::new(|| {
            ClusterTable::new(vec![
                ClusterStyle {
                    name: "Report Generation & Analysis".to_string(),
                    description:
                        "AI-powered solutions for automated report creation and data analysis"
                            .to_string(),
                    icon: "📊".to_string(),
                    color: "#e3f2fd".to_string(),
                    border_color: "#1976d2".to_string(),
                },
                ClusterStyle {
                    name: "Data Processing & Extraction".to_string(),
                    description:
                        "Intelligent document analysis and information extraction systems"
                            .to_string(),
                    icon: "📄".to_string(),
                    color: "#f3e5f5".to_string(),
                    border_color: "#7b1fa2".to_string(),
                },
                ClusterStyle {
                    name: "User-Facing Applications".to_string(),
                    description:
                        "Interactive AI solutions for enhanced user experience and accessibility"
                            .to_string(),
                    icon: "🤖".to_string(),
                    color: "#e8f5e8".to_string(),
                    border_color: "#388e3c".to_string(),
                },
            ])
        });
        &TABLE
    }

    /// Look up a cluster's style by name (exact match)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClusterStyle> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check whether a cluster name is known
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in authored order
    #[must_use]
    pub fn entries(&self) -> &[ClusterStyle] {
        &self.entries
    }

    /// Number of clusters in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in authored order
    pub fn iter(&self) -> impl Iterator<Item = &ClusterStyle> {
        self.entries.iter()
    }
}

impl Default for ClusterTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Badge metadata for a development pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarBadge {
    /// Pillar name, the key use cases reference in their front matter
    pub name: &'static str,

    /// Emoji shown inside the badge
    pub emoji: &'static str,

    /// Badge background color
    pub color: &'static str,

    /// Hover text explaining what the pillar stands for
    pub tooltip: &'static str,
}

/// The five development pillar badges, in canonical display order
pub const PILLAR_BADGES: &[PillarBadge] = &[
    PillarBadge {
        name: "People",
        emoji: "👥",
        color: "#e74c3c",
        tooltip: "People: Human well-being, rights, and equity in AI development",
    },
    PillarBadge {
        name: "Prosperity",
        emoji: "💰",
        color: "#f39c12",
        tooltip: "Prosperity: Inclusive economic development and fair opportunities",
    },
    PillarBadge {
        name: "Planet",
        emoji: "🌍",
        color: "#27ae60",
        tooltip: "Planet: Environmental sustainability and climate action",
    },
    PillarBadge {
        name: "Peace",
        emoji: "☮️",
        color: "#3498db",
        tooltip: "Peace: Security, inclusion, and reliable digital systems",
    },
    PillarBadge {
        name: "Partnership",
        emoji: "🤝",
        color: "#9b59b6",
        tooltip: "Partnership: Collaborative approaches and knowledge sharing",
    },
];

/// Look up a pillar badge by name (exact match)
#[must_use]
pub fn pillar_badge(name: &str) -> Option<&'static PillarBadge> {
    PILLAR_BADGES.iter().find(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_order() {
        let table = ClusterTable::builtin();
        let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Report Generation & Analysis",
                "Data Processing & Extraction",
                "User-Facing Applications",
            ]
        );
    }

    #[test]
    fn test_table_lookup() {
        let table = ClusterTable::builtin();
        let style = table.get("Data Processing & Extraction");
        assert!(style.is_some());
        assert_eq!(style.map(|s| s.icon.as_str()), Some("📄"));
        assert!(table.get("Nonexistent").is_none());
        assert!(!table.contains("report generation & analysis"));
    }

    #[test]
    fn test_pillar_badges() {
        assert_eq!(PILLAR_BADGES.len(), 5);
        let planet = pillar_badge("Planet");
        assert!(planet.is_some());
        assert_eq!(planet.map(|b| b.emoji), Some("🌍"));
        assert!(pillar_badge("planet").is_none());
    }
}
