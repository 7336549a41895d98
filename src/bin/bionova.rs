//! Bionova CLI — dashboard analytics over stored search results.
//!
//! Usage:
//!   bionova analyze <dir> [--config path] [--query text] [--json]
//!   bionova normalize <label>...
//!   bionova connected <dir> <a> <b> [--config path]
//!   bionova schema
//!   bionova metadata [dir]

use bionova::{
    normalize, AdjacencyIndex, AiSearchResult, AnalyticsConfig, Dashboard, FileSearchService,
    SearchMetadata, SearchRequest, SearchService, STORED_RESULT_QUERY,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "bionova",
    version,
    about = "Dashboard analytics for research search results"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dashboard for a stored result
    Analyze {
        /// Directory containing result.json
        dir: PathBuf,
        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Query text the result answers
        #[arg(long, default_value = STORED_RESULT_QUERY)]
        query: String,
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the mission category of each label
    Normalize {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Check whether two graph nodes are directly linked
    Connected {
        /// Directory containing result.json
        dir: PathBuf,
        a: String,
        b: String,
        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the JSON schema search providers must return
    Schema,
    /// Print the search taxonomy
    Metadata {
        /// Directory containing metadata.json
        dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 if quiet => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig, String> {
    AnalyticsConfig::load_or_default(path).map_err(|e| format!("Failed to load config: {}", e))
}

async fn load_result(dir: &Path, request: &SearchRequest) -> Result<AiSearchResult, String> {
    let service = FileSearchService::new(dir);
    service
        .search(request)
        .await
        .map_err(|e| e.to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    let stats = &dashboard.analytics.stats;
    if !dashboard.summary.overview.is_empty() {
        println!("{}", dashboard.summary.overview);
        println!();
    }
    println!("{:<16}{}", "Reports", stats.total_reports);
    println!("{:<16}{}", "Years", stats.year_range);
    println!("{:<16}{}", "Top organism", stats.top_organism);
    println!("{:<16}{}", "Top mission", stats.top_mission);

    let distribution = &dashboard.analytics.mission_distribution;
    if !distribution.is_empty() {
        println!();
        println!("{:<20}  {:>5}", "MISSION", "COUNT");
        println!("{}", "-".repeat(27));
        for share in &distribution.shares {
            println!("{:<20}  {:>5}", share.mission, share.count);
        }
    }

    let trend = &dashboard.analytics.organism_trend;
    if !trend.is_empty() {
        println!();
        print!("{:<6}", "YEAR");
        for organism in &trend.organisms {
            print!("  {:>12}", organism);
        }
        println!();
        for row in &trend.rows {
            print!("{:<6}", row.year);
            for count in &row.counts {
                print!("  {:>12}", count);
            }
            println!();
        }
    }

    if !dashboard.themes.is_empty() {
        println!();
        let themes: Vec<String> = dashboard
            .themes
            .iter()
            .take(15)
            .map(|t| format!("{} ({})", t.text, t.frequency))
            .collect();
        println!("Themes: {}", themes.join(", "));
    }

    let graph = &dashboard.graph;
    println!();
    println!("Graph: {} nodes, {} links", graph.nodes, graph.links);
    for dropped in &graph.dropped_links {
        println!(
            "  dropped link {}: {} -> {} ({})",
            dropped.index, dropped.source, dropped.target, dropped.label
        );
    }
}

async fn cmd_analyze(dir: &Path, config: Option<&Path>, query: &str, json: bool) -> i32 {
    let config = match load_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let result = match load_result(dir, &SearchRequest::new(query)).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let dashboard = match Dashboard::build(&result, &config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: invalid graph: {}", e);
            return 1;
        }
    };
    if json {
        return print_json(&dashboard);
    }
    print_dashboard(&dashboard);
    0
}

fn cmd_normalize(labels: &[String]) -> i32 {
    for label in labels {
        println!("{:<32}  {}", label, normalize(label));
    }
    0
}

async fn cmd_connected(dir: &Path, a: &str, b: &str, config: Option<&Path>) -> i32 {
    let config = match load_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let result = match load_result(dir, &SearchRequest::stored()).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let index = match AdjacencyIndex::build(&result.graph, config.graph.link_policy) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error: invalid graph: {}", e);
            return 1;
        }
    };
    match index.connected(a, b) {
        Ok(true) => {
            println!("'{}' and '{}' are connected", a, b);
            0
        }
        Ok(false) => {
            println!("'{}' and '{}' are not connected", a, b);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_schema() -> i32 {
    match AiSearchResult::json_schema() {
        Ok(schema) => print_json(&schema),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_metadata(dir: Option<&Path>) -> i32 {
    let metadata = match dir {
        Some(dir) => match FileSearchService::new(dir).metadata().await {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        None => SearchMetadata::default(),
    };
    print_json(&metadata)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let code = match cli.command {
        Commands::Analyze { dir, config, query, json } => {
            cmd_analyze(&dir, config.as_deref(), &query, json).await
        }
        Commands::Normalize { labels } => cmd_normalize(&labels),
        Commands::Connected { dir, a, b, config } => {
            cmd_connected(&dir, &a, &b, config.as_deref()).await
        }
        Commands::Schema => cmd_schema(),
        Commands::Metadata { dir } => cmd_metadata(dir.as_deref()).await,
    };
    std::process::exit(code);
}
