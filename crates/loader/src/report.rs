use serde::{Deserialize, Serialize};

/// Statistics and diagnostics from a load pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Number of documents discovered in the content source
    pub documents: usize,

    /// Number of use-case records produced
    pub loaded: usize,

    /// Number of malformed documents skipped
    pub skipped: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,

    /// Non-fatal diagnostics: skips, duplicate paths, unknown difficulties
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self {
            documents: 0,
            loaded: 0,
            skipped: 0,
            time_ms: 0,
            warnings: Vec::new(),
        }
    }

    pub fn add_document(&mut self) {
        self.documents += 1;
    }

    pub fn add_loaded(&mut self) {
        self.loaded += 1;
    }

    pub fn add_skipped(&mut self, warning: String) {
        self.skipped += 1;
        self.warnings.push(warning);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Default for LoadReport {
    fn default() -> Self {
        Self::new()
    }
}
