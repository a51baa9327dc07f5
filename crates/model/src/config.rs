use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::display::{ClusterStyle, ClusterTable};
use crate::error::{ConfigError, Result};

const DEFAULT_TITLE: &str = "AI Use Cases in Financial Cooperation";
const DEFAULT_TAGLINE: &str = "From first ideas to proof-of-concepts";
const DEFAULT_CONTENT_DIR: &str = "docs/use-cases";
const DEFAULT_ROUTE_BASE: &str = "/use-cases";

const DEFAULT_CARD_COLOR: &str = "#f5f5f5";
const DEFAULT_CARD_BORDER: &str = "#9e9e9e";

/// Site-level configuration, read from `casebook.toml` in the project root.
///
/// Every field has a default, so a project without a config file works out
/// of the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title shown at the top of the overview
    pub title: String,

    /// One-line tagline shown under the title
    pub tagline: String,

    /// Directory holding the use-case documents, relative to the project root
    pub content_dir: PathBuf,

    /// Route prefix use-case paths are published under, no trailing slash
    pub route_base: String,

    /// Cluster display-metadata table, authored order is display order
    pub clusters: ClusterTable,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            route_base: DEFAULT_ROUTE_BASE.to_string(),
            clusters: ClusterTable::builtin().clone(),
        }
    }
}

impl SiteConfig {
    /// Config file name looked up in the project root
    pub const FILE_NAME: &'static str = "casebook.toml";

    /// Load the config from `<root>/casebook.toml`, falling back to the
    /// defaults when the file does not exist
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    /// Load the config from an explicit file, which must exist
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let raw: RawSiteConfig = toml::from_str(raw)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSiteConfig) -> Result<Self> {
        let clusters = if raw.clusters.is_empty() {
            ClusterTable::builtin().clone()
        } else {
            ClusterTable::new(raw.clusters.into_iter().map(RawCluster::into_style).collect())
        };

        let config = Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            tagline: raw.tagline.unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
            content_dir: raw
                .content_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
            route_base: normalize_route_base(
                raw.route_base.as_deref().unwrap_or(DEFAULT_ROUTE_BASE),
            ),
            clusters,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the cluster table: names must be non-empty and distinct
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for style in self.clusters.entries() {
            if style.name.trim().is_empty() {
                return Err(ConfigError::InvalidClusterTable(
                    "cluster name must not be empty".to_string(),
                ));
            }
            if !seen.insert(style.name.as_str()) {
                return Err(ConfigError::InvalidClusterTable(format!(
                    "duplicate cluster name \"{}\"",
                    style.name
                )));
            }
        }
        Ok(())
    }
}

/// Route bases never keep a trailing slash, so joining a slug always yields
/// exactly one separator. A bare "/" collapses to the empty string.
fn normalize_route_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Config file exactly as authored: every field optional
#[derive(Debug, Default, Deserialize)]
struct RawSiteConfig {
    title: Option<String>,
    tagline: Option<String>,
    content_dir: Option<PathBuf>,
    route_base: Option<String>,
    #[serde(default)]
    clusters: Vec<RawCluster>,
}

/// One `[[clusters]]` entry; only the name is required
#[derive(Debug, Deserialize)]
struct RawCluster {
    name: String,
    description: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    border_color: Option<String>,
}

impl RawCluster {
    fn into_style(self) -> ClusterStyle {
        ClusterStyle {
            name: self.name,
            description: self.description.unwrap_or_default(),
            icon: self.icon.unwrap_or_default(),
            color: self.color.unwrap_or_else(|| DEFAULT_CARD_COLOR.to_string()),
            border_color: self
                .border_color
                .unwrap_or_else(|| DEFAULT_CARD_BORDER.to_string()),
        }
    }
}
