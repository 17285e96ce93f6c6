use crate::search::SortMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "robot-search")]
#[command(about = "Search and browse a robot catalog snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Search tuning file (defaults to <config dir>/robot-catalog/search.toml if present)
    #[arg(long, global = true, env = "ROBOT_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as a JSON array instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Type-ahead search: best matches with exact name/slug matches first
    Search {
        /// JSON file holding an array of catalog entries
        catalog: PathBuf,
        query: String,
        /// Maximum results (defaults to the configured type-ahead limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Listing pipeline: tag filter, optional search, sort and limit
    Browse {
        catalog: PathBuf,
        /// Search text; omit to list the (filtered) catalog
        #[arg(default_value = "")]
        query: String,
        /// Only entries carrying this tag ("all" disables the filter)
        #[arg(short, long)]
        tag: Option<String>,
        /// relevance, newest, oldest, name or rating
        #[arg(short, long, default_value = "relevance", value_parser = parse_sort_mode)]
        sort: SortMode,
        /// Maximum results (defaults to the configured listing limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn parse_sort_mode(value: &str) -> Result<SortMode, String> {
    Ok(SortMode::parse(value))
}
