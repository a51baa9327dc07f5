use casebook_catalog::{Catalog, Cluster};
use casebook_model::{pillar_badge, SiteConfig, UseCase};

/// Number of tags shown on a card before the remainder is folded away
const CARD_TAG_LIMIT: usize = 3;

const DISCLAIMER: &str = "This overview describes proof-of-concept AI solutions. Specific \
    implementation details, technical configurations, and organizational references have been \
    generalized for public use.";

/// Render the full overview page as markdown
pub fn render_overview(config: &SiteConfig, catalog: &Catalog) -> String {
    let mut md = String::new();
    md.push_str(&format!("# {}\n\n", config.title));
    md.push_str(&format!("_{}_\n\n", config.tagline));
    md.push_str(&format!("> **Note:** {DISCLAIMER}\n\n"));

    for cluster in catalog.clusters() {
        md.push_str(&render_cluster(cluster));
    }

    md.push_str("## All Tags\n\n");
    if catalog.all_tags().is_empty() {
        md.push_str("_none_\n");
    } else {
        let tags: Vec<String> = catalog
            .all_tags()
            .iter()
            .map(|t| format!("`{t}`"))
            .collect();
        md.push_str(&tags.join(" "));
        md.push('\n');
    }
    md
}

/// Render one cluster section: heading, description, member cards
pub fn render_cluster(cluster: &Cluster) -> String {
    let mut md = String::new();
    md.push_str(&format!("## {} {}\n\n", cluster.style.icon, cluster.name()));
    if !cluster.style.description.is_empty() {
        md.push_str(&format!("{}\n\n", cluster.style.description));
    }
    if cluster.is_empty() {
        md.push_str("_No use cases yet._\n\n");
    } else {
        for use_case in &cluster.use_cases {
            md.push_str(&render_card(use_case));
        }
    }
    md
}

/// Render one use-case card
pub fn render_card(use_case: &UseCase) -> String {
    let mut md = String::new();
    md.push_str(&format!("### [{}]({})\n\n", use_case.title, use_case.path));
    if !use_case.description.is_empty() {
        md.push_str(&format!("{}\n\n", use_case.description));
    }

    let mut lines = Vec::new();
    if let Some(difficulty) = use_case.difficulty {
        lines.push(format!("- Difficulty: {difficulty}"));
    }
    if !use_case.stakeholders.is_empty() {
        lines.push(format!("- For: {}", use_case.stakeholders.join(", ")));
    }
    if !use_case.tags.is_empty() {
        lines.push(format!("- Tags: {}", format_tags(&use_case.tags)));
    }
    let pillars = format_pillars(&use_case.pillars);
    if !pillars.is_empty() {
        lines.push(format!("- Pillars: {pillars}"));
    }
    if !lines.is_empty() {
        md.push_str(&lines.join("\n"));
        md.push_str("\n\n");
    }
    md
}

/// First few tags inline, the rest folded into a `+N more` marker
fn format_tags(tags: &[String]) -> String {
    let shown: Vec<String> = tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(|t| format!("`{t}`"))
        .collect();
    let mut out = shown.join(", ");
    if tags.len() > CARD_TAG_LIMIT {
        out.push_str(&format!(" +{} more", tags.len() - CARD_TAG_LIMIT));
    }
    out
}

/// Badges for the known pillars; names outside the canonical table render
/// nothing
fn format_pillars(pillars: &[String]) -> String {
    pillars
        .iter()
        .filter_map(|name| pillar_badge(name))
        .map(|badge| format!("{} {}", badge.emoji, badge.name))
        .collect::<Vec<_>>()
        .join(", ")
}
