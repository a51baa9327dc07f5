//! # Casebook Catalog
//!
//! Aggregation and filtering over normalized use-case records: clusters
//! driven by the hand-authored display table, the distinct tag set, and the
//! interactive tag/difficulty filter.
//!
//! Records are shared via `Arc`, so a use case appearing in three clusters
//! is still a single allocation.
//!
//! ## Example
//!
//! ```
//! use casebook_catalog::{Catalog, FilterSelection};
//! use casebook_model::ClusterTable;
//!
//! let catalog = Catalog::build(Vec::new(), ClusterTable::builtin());
//! assert!(catalog.all_tags().is_empty());
//!
//! let selection = FilterSelection::new();
//! assert!(selection.is_empty());
//! ```

mod catalog;
mod filter;

pub use catalog::{Catalog, CatalogWarning, Cluster};
pub use filter::FilterSelection;
