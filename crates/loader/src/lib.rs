//! # Casebook Loader
//!
//! Turns a tree of markdown documents into normalized use-case records.
//!
//! ## Pipeline
//!
//! ```text
//! Content Source (directory tree or in-memory fixture)
//!     │
//!     ├──> Discovery (sorted relative ids, .gitignore aware)
//!     │
//!     ├──> Per-document read
//!     │
//!     ├──> Front-matter split (--- fences)
//!     │
//!     ├──> YAML parse → raw schema (all fields optional)
//!     │
//!     └──> Normalization → UseCase[] + LoadReport
//! ```
//!
//! Unreadable or malformed documents are skipped with a warning, never
//! fatal: one broken file must not take down the whole catalog.
//!
//! ## Example
//!
//! ```no_run
//! use casebook_loader::{ContentLoader, DirScanner};
//!
//! fn main() -> Result<(), casebook_loader::LoaderError> {
//!     let loader = ContentLoader::new(DirScanner::new("docs/use-cases"), "/use-cases");
//!     let loaded = loader.load()?;
//!     println!("{} use cases loaded", loaded.use_cases.len());
//!     Ok(())
//! }
//! ```

mod error;
mod frontmatter;
mod loader;
mod report;
mod source;

pub use error::{LoaderError, Result};
pub use loader::{ContentLoader, Loaded};
pub use report::LoadReport;
pub use source::{ContentSource, DirScanner, MemorySource};
