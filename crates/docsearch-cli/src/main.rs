//! docsearch CLI - Search a local documentation index.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use docsearch_core::{DocsConfig, DocsError, SearchOptions};
use docsearch_index::JsonIndex;
use docsearch_query::QueryEngine;

mod render;

/// docsearch - Rank documentation sections against a query
#[derive(Parser)]
#[command(name = "docsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Index path (default: from config, or the local data directory)
    #[arg(short, long, global = true)]
    index: Option<PathBuf>,

    /// Config file (default: user config dir, then ./docsearch.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the documentation index
    Search {
        /// Search query
        query: String,

        /// Only search this category
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum number of results (1-20)
        #[arg(short = 'k', long)]
        max_results: Option<usize>,

        /// Minimum relevance score
        #[arg(long)]
        min_score: Option<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories in the index
    Categories,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(path: Option<PathBuf>) -> Result<DocsConfig, DocsError> {
    match path {
        Some(path) => DocsConfig::load(&path),
        None => DocsConfig::load_default(),
    }
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error [{}]: {}", err.error_code(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DocsError> {
    let config = load_config(cli.config)?;
    let index_path = cli.index.unwrap_or_else(|| config.index.path.clone());

    let index = Arc::new(JsonIndex::load(&index_path)?);
    let engine = QueryEngine::with_config(index, config.search);

    match cli.command {
        Commands::Search {
            query,
            category,
            max_results,
            min_score,
            json,
        } => {
            let options = SearchOptions {
                query,
                category,
                max_results,
                min_score,
            };
            let results = engine.search(options)?;
            if json {
                println!("{}", render::render_json(&results)?);
            } else {
                println!("{}", render::render_text(&results));
            }
        }
        Commands::Categories => {
            println!("{}", render::render_categories(&engine.categories()));
        }
    }

    Ok(())
}
