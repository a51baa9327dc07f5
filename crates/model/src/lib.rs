//! # Casebook Model
//!
//! Core data model for use-case catalogs: the normalized [`UseCase`] record,
//! the raw front-matter schema it is built from, the hand-authored display
//! tables (clusters and pillar badges), and site configuration.
//!
//! Everything downstream of this crate works with normalized records only.
//! Raw, all-optional structures ([`RawFrontMatter`], the `casebook.toml`
//! schema) exist at the input boundary and collapse into defaults in exactly
//! one place each.

mod config;
mod display;
mod error;
mod frontmatter;
mod types;

pub use config::SiteConfig;
pub use display::{pillar_badge, ClusterStyle, ClusterTable, PillarBadge, PILLAR_BADGES};
pub use error::{ConfigError, Result};
pub use frontmatter::{RawFrontMatter, UNTITLED};
pub use types::{Difficulty, UseCase};
