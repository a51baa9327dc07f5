use std::collections::HashMap;
use std::time::Instant;

use casebook_model::UseCase;

use crate::error::Result;
use crate::frontmatter::parse_front_matter;
use crate::report::LoadReport;
use crate::source::ContentSource;

/// Outcome of a load pass: records in discovery order plus the report
#[derive(Debug, Clone)]
pub struct Loaded {
    /// Normalized records, one per well-formed document
    pub use_cases: Vec<UseCase>,

    /// Counters and non-fatal diagnostics
    pub report: LoadReport,
}

/// Loads use-case records from a content source.
///
/// A document that cannot be read or whose front matter does not parse
/// never aborts the pass: it is counted, skipped with a warning, and every
/// other document still produces a record.
pub struct ContentLoader<S> {
    source: S,
    route_base: String,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S, route_base: impl Into<String>) -> Self {
        Self {
            source,
            route_base: route_base.into(),
        }
    }

    /// Load every document the source yields, in source order
    pub fn load(&self) -> Result<Loaded> {
        let start = Instant::now();
        let ids = self.source.list_documents()?;

        let mut report = LoadReport::new();
        let mut use_cases = Vec::with_capacity(ids.len());
        let mut seen_paths: HashMap<String, String> = HashMap::new();

        for id in ids {
            report.add_document();
            let parsed = self
                .source
                .read_document(&id)
                .and_then(|text| parse_front_matter(&text));
            match parsed {
                Ok(raw) => {
                    if let Some(unknown) = raw.unknown_difficulty() {
                        let warning = format!("Unrecognized difficulty \"{unknown}\" in {id}");
                        log::debug!("{warning}");
                        report.add_warning(warning);
                    }

                    let path = derive_path(&self.route_base, &id);
                    if let Some(previous) = seen_paths.insert(path.clone(), id.clone()) {
                        let warning = format!("Duplicate path {path}: {previous} and {id}");
                        log::debug!("{warning}");
                        report.add_warning(warning);
                    }

                    log::debug!("Loaded {id} at {path}");
                    use_cases.push(raw.into_use_case(path));
                    report.add_loaded();
                }
                Err(e) => {
                    let warning = format!("Failed to load use case from {id}: {e}");
                    log::debug!("{warning}");
                    report.add_skipped(warning);
                }
            }
        }

        report.time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Loaded {} use cases from {} documents ({} skipped)",
            report.loaded,
            report.documents,
            report.skipped
        );

        Ok(Loaded { use_cases, report })
    }
}

/// Site path for a document id: route base plus the extension-less slug
fn derive_path(route_base: &str, id: &str) -> String {
    format!("{route_base}/{}", strip_extension(id))
}

fn strip_extension(id: &str) -> &str {
    match id.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("mdx") => {
            stem
        }
        _ => id,
    }
}

#[cfg(test)]
mod tests {
    use casebook_model::{Difficulty, UNTITLED};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::MemorySource;

    fn loader(source: MemorySource) -> ContentLoader<MemorySource> {
        ContentLoader::new(source, "/use-cases")
    }

    #[test]
    fn well_formed_documents_all_load() {
        let source = MemorySource::new()
            .with_document("a.md", "---\ntitle: Alpha\n---\n")
            .with_document("b.md", "---\ntitle: Beta\n---\n")
            .with_document("c.md", "no front matter at all");
        let loaded = loader(source).load().unwrap();

        assert_eq!(loaded.use_cases.len(), 3);
        assert_eq!(loaded.report.documents, 3);
        assert_eq!(loaded.report.loaded, 3);
        assert_eq!(loaded.report.skipped, 0);
        assert!(!loaded.report.has_warnings());
    }

    #[test]
    fn source_order_is_record_order() {
        let source = MemorySource::new()
            .with_document("z.md", "---\ntitle: Last\n---\n")
            .with_document("a.md", "---\ntitle: First\n---\n");
        let loaded = loader(source).load().unwrap();

        let titles: Vec<&str> = loaded.use_cases.iter().map(|u| u.title.as_str()).collect();
        assert_eq!(titles, vec!["Last", "First"]);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let source = MemorySource::new().with_document("bare.md", "Just a body.\n");
        let loaded = loader(source).load().unwrap();

        let record = &loaded.use_cases[0];
        assert_eq!(record.title, UNTITLED);
        assert_eq!(record.description, "");
        assert!(record.tags.is_empty());
        assert_eq!(record.difficulty, None);
    }

    #[test]
    fn malformed_document_is_skipped_not_fatal() {
        let source = MemorySource::new()
            .with_document("good.md", "---\ntitle: Good\n---\n")
            .with_document("bad.md", "---\ntitle: [broken\n---\n")
            .with_document("unterminated.md", "---\ntitle: Oops\n");
        let loaded = loader(source).load().unwrap();

        assert_eq!(loaded.use_cases.len(), 1);
        assert_eq!(loaded.use_cases[0].title, "Good");
        assert_eq!(loaded.report.documents, 3);
        assert_eq!(loaded.report.skipped, 2);
        assert!(loaded
            .report
            .warnings
            .iter()
            .any(|w| w.contains("bad.md")));
        assert!(loaded
            .report
            .warnings
            .iter()
            .any(|w| w.contains("unterminated.md")));
    }

    #[test]
    fn unreadable_document_is_counted_and_skipped() {
        let source = MemorySource::new()
            .with_document("good.md", "---\ntitle: Good\n---\n")
            .with_unreadable("binary.md");
        let loaded = loader(source).load().unwrap();

        assert_eq!(loaded.use_cases.len(), 1);
        assert_eq!(loaded.use_cases[0].title, "Good");
        assert_eq!(loaded.report.documents, 2);
        assert_eq!(loaded.report.loaded, 1);
        assert_eq!(loaded.report.skipped, 1);
        assert!(loaded
            .report
            .warnings
            .iter()
            .any(|w| w.contains("binary.md")));
    }

    #[test]
    fn paths_are_route_base_plus_slug() {
        let source = MemorySource::new()
            .with_document("ministry-reporting.mdx", "---\ntitle: A\n---\n")
            .with_document("guides/intro.md", "---\ntitle: B\n---\n");
        let loaded = loader(source).load().unwrap();

        let paths: Vec<&str> = loaded.use_cases.iter().map(|u| u.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/use-cases/ministry-reporting", "/use-cases/guides/intro"]
        );
    }

    #[test]
    fn duplicate_paths_keep_both_records() {
        let source = MemorySource::new()
            .with_document("pilot.md", "---\ntitle: One\n---\n")
            .with_document("pilot.mdx", "---\ntitle: Two\n---\n");
        let loaded = loader(source).load().unwrap();

        assert_eq!(loaded.use_cases.len(), 2);
        assert_eq!(loaded.use_cases[0].path, loaded.use_cases[1].path);
        assert!(loaded
            .report
            .warnings
            .iter()
            .any(|w| w.contains("Duplicate path /use-cases/pilot")));
    }

    #[test]
    fn unknown_difficulty_loads_with_warning() {
        let source =
            MemorySource::new().with_document("a.md", "---\ntitle: A\ndifficulty: expert\n---\n");
        let loaded = loader(source).load().unwrap();

        assert_eq!(loaded.use_cases.len(), 1);
        assert_eq!(loaded.use_cases[0].difficulty, None);
        assert_eq!(loaded.report.skipped, 0);
        assert!(loaded
            .report
            .warnings
            .iter()
            .any(|w| w.contains("Unrecognized difficulty \"expert\"")));
    }

    #[test]
    fn known_difficulty_is_parsed() {
        let source = MemorySource::new()
            .with_document("a.md", "---\ntitle: A\ndifficulty: Advanced\n---\n");
        let loaded = loader(source).load().unwrap();
        assert_eq!(loaded.use_cases[0].difficulty, Some(Difficulty::Advanced));
    }

    #[test]
    fn empty_source_yields_empty_catalog_input() {
        let loaded = loader(MemorySource::new()).load().unwrap();
        assert!(loaded.use_cases.is_empty());
        assert_eq!(loaded.report.documents, 0);
    }

    #[test]
    fn strip_extension_handles_dotted_slugs() {
        assert_eq!(strip_extension("a.md"), "a");
        assert_eq!(strip_extension("a.MDX"), "a");
        assert_eq!(strip_extension("v1.2-notes.md"), "v1.2-notes");
        assert_eq!(strip_extension("no-extension"), "no-extension");
    }
}
