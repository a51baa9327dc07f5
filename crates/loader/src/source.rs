use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{LoaderError, Result};

/// Extensions recognized as content documents
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// A source of content documents.
///
/// Enumeration and reading are separate steps: a document that cannot be
/// read still appears in the listing, and the loader decides what to do
/// with the failure. The loader only ever sees this trait, so tests (and
/// embedders) can feed it an in-memory corpus instead of a directory tree.
pub trait ContentSource {
    /// Enumerate document ids in discovery order.
    ///
    /// An id is the path relative to the content root, with `/` separators
    /// on every platform, and is what slugs and diagnostics are derived
    /// from.
    fn list_documents(&self) -> Result<Vec<String>>;

    /// Read the full text of one document, front matter included
    fn read_document(&self, id: &str) -> Result<String>;
}

/// Directory-tree source for content documents (.gitignore aware)
pub struct DirScanner {
    root: PathBuf,
}

impl DirScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The content root this scanner walks
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if a path names a content document
    fn is_content_file(path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            let ext = ext.to_lowercase();
            return CONTENT_EXTENSIONS.iter().any(|candidate| candidate == &ext);
        }
        false
    }

    /// Root-relative id with `/` separators, `None` for paths outside root
    fn relative_id(path: &Path, root: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
                _ => return None,
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }
}

impl ContentSource for DirScanner {
    /// Walk the content root for documents, sorted by relative path.
    ///
    /// Sorting makes discovery order independent of filesystem enumeration
    /// order, which is what keeps downstream output deterministic.
    fn list_documents(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(LoaderError::InvalidRoot(format!(
                "Not a directory: {}",
                self.root.display()
            )));
        }

        let mut ids = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !Self::is_content_file(path) {
                        continue;
                    }

                    if let Some(id) = Self::relative_id(path, &self.root) {
                        ids.push(id);
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        ids.sort();
        log::info!("Found {} content documents", ids.len());
        Ok(ids)
    }

    fn read_document(&self, id: &str) -> Result<String> {
        Ok(fs::read_to_string(self.root.join(id))?)
    }
}

/// In-memory source, mainly for tests and embedding scenarios
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(String, Option<String>)>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a document, keeping insertion order
    #[must_use]
    pub fn with_document(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push((id.into(), Some(text.into())));
        self
    }

    /// Builder: append a document whose text cannot be read
    #[must_use]
    pub fn with_unreadable(mut self, id: impl Into<String>) -> Self {
        self.documents.push((id.into(), None));
        self
    }
}

impl ContentSource for MemorySource {
    fn list_documents(&self) -> Result<Vec<String>> {
        Ok(self.documents.iter().map(|(id, _)| id.clone()).collect())
    }

    fn read_document(&self, id: &str) -> Result<String> {
        match self.documents.iter().find(|(candidate, _)| candidate == id) {
            Some((_, Some(text))) => Ok(text.clone()),
            Some((_, None)) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unreadable document {id}"),
            )
            .into()),
            None => {
                Err(io::Error::new(io::ErrorKind::NotFound, format!("no document {id}")).into())
            }
        }
    }
}
