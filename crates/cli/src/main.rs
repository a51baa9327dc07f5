use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use casebook_catalog::{Catalog, CatalogWarning, Cluster, FilterSelection};
use casebook_loader::{ContentLoader, DirScanner, Loaded, LoadReport};
use casebook_model::{Difficulty, SiteConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

mod render;

#[derive(Parser)]
#[command(name = "casebook")]
#[command(about = "Load, inspect, and lint AI use-case catalogs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for data)
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file to use instead of <root>/casebook.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the content tree and print the load report
    Scan(ScanArgs),

    /// Render the use-case overview as markdown
    Overview(OverviewArgs),

    /// List clusters, or the members of one cluster
    Clusters(ClustersArgs),

    /// List every distinct tag
    Tags(TagsArgs),

    /// Filter use cases by tags and difficulty
    Filter(FilterArgs),

    /// Lint the content tree and exit non-zero on findings
    Check(CheckArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct OverviewArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,

    /// Write the rendered overview to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ClustersArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Show the members of one cluster
    #[arg(long)]
    name: Option<String>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TagsArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Select a tag (repeatable; a record matches if it carries any)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Select a difficulty level
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyFlag>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum DifficultyFlag {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyFlag {
    const fn as_domain(self) -> Difficulty {
        match self {
            DifficultyFlag::Beginner => Difficulty::Beginner,
            DifficultyFlag::Intermediate => Difficulty::Intermediate,
            DifficultyFlag::Advanced => Difficulty::Advanced,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean for JSON parsing)
    let json_output = match &cli.command {
        Commands::Scan(args) => args.json,
        Commands::Overview(args) => args.json,
        Commands::Clusters(args) => args.json,
        Commands::Tags(args) => args.json,
        Commands::Filter(args) => args.json,
        Commands::Check(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config_override = cli.config;
    match cli.command {
        Commands::Scan(args) => run_scan(args, config_override.as_deref())?,
        Commands::Overview(args) => run_overview(args, config_override.as_deref())?,
        Commands::Clusters(args) => run_clusters(args, config_override.as_deref())?,
        Commands::Tags(args) => run_tags(args, config_override.as_deref())?,
        Commands::Filter(args) => run_filter(args, config_override.as_deref())?,
        Commands::Check(args) => run_check(args, config_override.as_deref())?,
    }

    Ok(())
}

struct Site {
    config: SiteConfig,
    loaded: Loaded,
}

fn load_site(root: &Path, config_override: Option<&Path>) -> Result<Site> {
    let root = root.canonicalize().context("Invalid project root")?;
    let config = match config_override {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SiteConfig::load(&root).context("Failed to load casebook.toml")?,
    };

    let content_dir = root.join(&config.content_dir);
    let loader = ContentLoader::new(DirScanner::new(content_dir), config.route_base.clone());
    let loaded = loader.load().context("Failed to load content tree")?;

    Ok(Site { config, loaded })
}

fn run_scan(args: ScanArgs, config_override: Option<&Path>) -> Result<()> {
    let site = load_site(&args.root, config_override)?;
    let report = &site.loaded.report;

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        eprintln!(
            "Loaded {} of {} documents ({} skipped) in {}ms",
            report.loaded, report.documents, report.skipped, report.time_ms
        );
        for warning in &report.warnings {
            eprintln!("  warning: {warning}");
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct OverviewOutput<'a> {
    title: &'a str,
    tagline: &'a str,
    clusters: &'a [Cluster],
    all_tags: &'a [String],
}

fn run_overview(args: OverviewArgs, config_override: Option<&Path>) -> Result<()> {
    let site = load_site(&args.root, config_override)?;
    let catalog = Catalog::build(site.loaded.use_cases, &site.config.clusters);

    let rendered = if args.json {
        let output = OverviewOutput {
            title: &site.config.title,
            tagline: &site.config.tagline,
            clusters: catalog.clusters(),
            all_tags: catalog.all_tags(),
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        json
    } else {
        render::render_overview(&site.config, &catalog)
    };

    if let Some(path) = &args.out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, rendered)?;
        eprintln!("Wrote overview to {}", path.display());
    } else {
        print!("{rendered}");
    }

    Ok(())
}

#[derive(Serialize)]
struct ClusterSummary<'a> {
    name: &'a str,
    icon: &'a str,
    description: &'a str,
    members: usize,
}

fn run_clusters(args: ClustersArgs, config_override: Option<&Path>) -> Result<()> {
    let site = load_site(&args.root, config_override)?;
    let catalog = Catalog::build(site.loaded.use_cases, &site.config.clusters);

    if let Some(name) = &args.name {
        let Some(cluster) = catalog.cluster(name) else {
            let available: Vec<&str> = catalog.clusters().iter().map(Cluster::name).collect();
            eprintln!(
                "Cluster \"{name}\" not found. Available clusters: {}",
                available.join(", ")
            );
            std::process::exit(1);
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(cluster)?);
        } else {
            print!("{}", render::render_cluster(cluster));
        }
        return Ok(());
    }

    if args.json {
        let summaries: Vec<ClusterSummary> = catalog
            .clusters()
            .iter()
            .map(|c| ClusterSummary {
                name: c.name(),
                icon: &c.style.icon,
                description: &c.style.description,
                members: c.len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for cluster in catalog.clusters() {
            println!(
                "{} {} ({} use cases)",
                cluster.style.icon,
                cluster.name(),
                cluster.len()
            );
        }
    }

    Ok(())
}

fn run_tags(args: TagsArgs, config_override: Option<&Path>) -> Result<()> {
    let site = load_site(&args.root, config_override)?;
    let catalog = Catalog::build(site.loaded.use_cases, &site.config.clusters);

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.all_tags())?);
    } else {
        for tag in catalog.all_tags() {
            println!("{tag}");
        }
    }

    Ok(())
}

fn run_filter(args: FilterArgs, config_override: Option<&Path>) -> Result<()> {
    let site = load_site(&args.root, config_override)?;
    let catalog = Catalog::build(site.loaded.use_cases, &site.config.clusters);

    let mut selection = FilterSelection::new();
    for tag in &args.tags {
        if !selection.is_selected(tag) {
            selection.toggle_tag(tag.clone());
        }
    }
    selection.set_difficulty(args.difficulty.map(DifficultyFlag::as_domain));

    let results = selection.apply(catalog.use_cases());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        eprintln!("Results ({})", results.len());
        for use_case in &results {
            print!("{}", render::render_card(use_case));
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    ok: bool,
    load: &'a LoadReport,
    catalog_warnings: &'a [CatalogWarning],
}

fn run_check(args: CheckArgs, config_override: Option<&Path>) -> Result<()> {
    let site = load_site(&args.root, config_override)?;
    let report = site.loaded.report;
    let catalog = Catalog::build(site.loaded.use_cases, &site.config.clusters);

    let ok = !report.has_warnings() && catalog.warnings().is_empty();

    if args.json {
        let output = CheckOutput {
            ok,
            load: &report,
            catalog_warnings: catalog.warnings(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!(
            "Checked {} documents: {} loaded, {} skipped",
            report.documents, report.loaded, report.skipped
        );
        for warning in &report.warnings {
            eprintln!("  - {warning}");
        }
        for warning in catalog.warnings() {
            eprintln!("  - {warning}");
        }
        if ok {
            eprintln!("No problems found");
        }
    }

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
