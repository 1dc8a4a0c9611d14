use clap::{Parser, Subcommand};
use promptfolio::filter::{ALL_CATEGORIES, GalleryQuery};
use promptfolio::{config, generate, load, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "promptfolio")]
#[command(about = "Deterministic prompt gallery for portfolio sites")]
#[command(long_about = "\
Deterministic prompt gallery for portfolio sites

Prompt cards live in a single JSON file. They are shown in a fixed shuffled
order, filterable by category and free text, each with its own detail page.

Content structure:

  content/
  ├── config.toml     # Site config (optional)
  └── prompts.json    # Array of prompt records

Record fields: id, slug, type, pillClass, title, description, tags, useCase,
prompt, howToUse (list or numbered text), proTips, relatedIds.

Set RUST_LOG=debug for diagnostics.
Run 'promptfolio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List prompts in display order, optionally filtered
    List {
        /// Category chip to filter by
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Case-insensitive text to search for
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Show one prompt and its related prompts
    Show {
        /// Prompt slug
        slug: String,
    },
    /// List the category filter chips
    Filters,
    /// Generate the static site
    Build,
    /// Validate content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { category, query } => {
            let catalog = load::load(&cli.source)?.catalog();
            let query = GalleryQuery::new(category, query);
            output::print_list_output(&catalog.filter(&query), &query);
        }
        Command::Show { slug } => {
            let catalog = load::load(&cli.source)?.catalog();
            let record = catalog
                .get_by_slug(&slug)
                .ok_or_else(|| format!("Prompt not found: {slug}"))?;
            output::print_show_output(record, &catalog.related(record));
        }
        Command::Filters => {
            let catalog = load::load(&cli.source)?.catalog();
            output::print_filters_output(&catalog);
        }
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let content = load::load(&cli.source)?;
            let catalog = content.catalog();
            println!("==> Generating HTML → {}", cli.output.display());
            let pages = generate::generate(&catalog, &content.config, &cli.output)?;
            output::print_generate_output(&pages);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let catalog = load::load(&cli.source)?.catalog();
            output::print_check_output(&catalog);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
