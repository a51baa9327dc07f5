use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use casebook_model::{pillar_badge, ClusterStyle, ClusterTable, UseCase};
use serde::Serialize;

/// A thematic cluster: its display style plus member records.
///
/// Members are shared, not owned, so a use case that belongs to several
/// clusters is one record seen from each of them.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    /// Display metadata from the cluster table
    pub style: ClusterStyle,

    /// Member records in discovery order; memberships are not deduplicated
    pub use_cases: Vec<Arc<UseCase>>,
}

impl Cluster {
    /// The cluster name, as referenced by use-case front matter
    #[must_use]
    pub fn name(&self) -> &str {
        &self.style.name
    }

    /// Number of memberships (a record listed twice counts twice)
    #[must_use]
    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    /// Check if the cluster has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }
}

/// Non-fatal finding produced while building the catalog
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// A use case references a cluster the table does not know
    UnknownCluster { use_case: String, cluster: String },

    /// A use case references a pillar outside the canonical five
    UnknownPillar { use_case: String, pillar: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCluster { use_case, cluster } => {
                write!(f, "Unknown cluster \"{cluster}\" found in use case \"{use_case}\"")
            }
            Self::UnknownPillar { use_case, pillar } => {
                write!(f, "Unknown pillar \"{pillar}\" referenced by use case \"{use_case}\"")
            }
        }
    }
}

/// Aggregated view over the loaded use cases: clusters in authored table
/// order, the flat record list in discovery order, and the sorted set of
/// distinct tags.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    clusters: Vec<Cluster>,
    use_cases: Vec<Arc<UseCase>>,
    all_tags: Vec<String>,
    warnings: Vec<CatalogWarning>,
}

impl Catalog {
    /// Group records into clusters and derive the tag set.
    ///
    /// Every table entry becomes a cluster, members or not. A membership
    /// referencing an unknown cluster is dropped with a warning; the record
    /// itself stays in the flat list.
    #[must_use]
    pub fn build(use_cases: Vec<UseCase>, table: &ClusterTable) -> Self {
        let use_cases: Vec<Arc<UseCase>> = use_cases.into_iter().map(Arc::new).collect();

        let mut clusters: Vec<Cluster> = table
            .iter()
            .map(|style| Cluster {
                style: style.clone(),
                use_cases: Vec::new(),
            })
            .collect();

        let mut warnings = Vec::new();
        for use_case in &use_cases {
            for name in &use_case.clusters {
                match clusters.iter_mut().find(|c| c.name() == name) {
                    Some(cluster) => cluster.use_cases.push(Arc::clone(use_case)),
                    None => {
                        let warning = CatalogWarning::UnknownCluster {
                            use_case: use_case.title.clone(),
                            cluster: name.clone(),
                        };
                        log::debug!("{warning}");
                        warnings.push(warning);
                    }
                }
            }

            for pillar in &use_case.pillars {
                if pillar_badge(pillar).is_none() {
                    let warning = CatalogWarning::UnknownPillar {
                        use_case: use_case.title.clone(),
                        pillar: pillar.clone(),
                    };
                    log::debug!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        let tag_set: BTreeSet<String> = use_cases
            .iter()
            .flat_map(|u| u.tags.iter().cloned())
            .collect();

        Self {
            clusters,
            use_cases,
            all_tags: tag_set.into_iter().collect(),
            warnings,
        }
    }

    /// Clusters in table order, empty ones included
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Look up a cluster by name
    #[must_use]
    pub fn cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.name() == name)
    }

    /// All records in discovery order
    #[must_use]
    pub fn use_cases(&self) -> &[Arc<UseCase>] {
        &self.use_cases
    }

    /// Distinct tags across all records, sorted, no duplicates
    #[must_use]
    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    /// Findings collected during the build
    #[must_use]
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    /// Check if the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }
}
