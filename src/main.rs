use anyhow::Context;
use clap::Parser;
use robot_catalog_search::cli::{Cli, Commands};
use robot_catalog_search::{AppContext, CatalogEntry, Result, SearchConfig, SearchOptions, load_catalog};

fn main() -> Result<()> {
    let cli = Cli::parse();
    robot_catalog_search::tracing::init(cli.verbose);

    let config = SearchConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load search config")?;
    let context = AppContext::new(config);

    let results = match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
        } => {
            let entries = load_catalog(&catalog)?;
            context.search_robots(&entries, &query, limit)
        }
        Commands::Browse {
            catalog,
            query,
            tag,
            sort,
            limit,
        } => {
            let entries = load_catalog(&catalog)?;
            let options = SearchOptions {
                tag,
                sort_by: sort,
                limit,
            };
            context.comprehensive_search(&entries, &query, &options)
        }
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        print_table(&results);
    }

    Ok(())
}

fn print_table(results: &[CatalogEntry]) {
    println!("Found {} robots:", results.len());
    for (rank, entry) in results.iter().enumerate() {
        let slug = if entry.slug.is_empty() {
            String::new()
        } else {
            format!(" ({})", entry.slug)
        };
        if entry.tags.is_empty() {
            println!("{:>3}. {}{}", rank + 1, entry.name, slug);
        } else {
            println!("{:>3}. {}{} [{}]", rank + 1, entry.name, slug, entry.tags.join(", "));
        }
    }
}
