//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use annals::config::AnnalsConfig;
use annals::core::models::Category;
use annals::output::OutputMode;

/// annals - Catalog browser and entry authoring tool
#[derive(Parser, Debug)]
#[command(
    name = "annals",
    version,
    about = "Catalog browser and entry authoring tool",
    long_about = "Browse a catalog of dated, categorized entries.\n\n\
                  Filter by text, year range, category and verification status,\n\
                  and turn contributor forms into front-matter documents."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog entries matching the given filters
    List {
        /// Case-insensitive search across title, summary, tags and body
        #[arg(short, long)]
        query: Option<String>,

        /// Earliest start year (inclusive)
        #[arg(long = "from")]
        year_min: Option<i32>,

        /// Latest start year (inclusive)
        #[arg(long = "to")]
        year_max: Option<i32>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<Category>,

        /// Only show verified entries
        #[arg(long)]
        verified: bool,
    },

    /// Show a single entry with its body and sources
    Show {
        /// Entry title (case-insensitive)
        title: String,
    },

    /// List the available categories
    Categories,

    /// Build a document from a form file and save it
    New {
        /// Path to the form (TOML)
        form: PathBuf,

        /// Directory to write the document to
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the document instead of saving it
        #[arg(long)]
        stdout: bool,
    },

    /// Print issue-tracker text for a form file
    Issue {
        /// Path to the form (TOML)
        form: PathBuf,
    },

    /// Render a markup body file
    Render {
        /// Path to the body text
        file: PathBuf,

        /// Emit HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Print the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = AnnalsConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Some(Command::List {
            query,
            year_min,
            year_max,
            category,
            verified,
        }) => {
            let filters = commands::ListFilters {
                query,
                year_min,
                year_max,
                categories: category,
                verified,
            };
            commands::list(&config, filters, output_mode);
            Ok(())
        },
        Some(Command::Show { title }) => commands::show(&config, &title, output_mode),
        Some(Command::Categories) => {
            commands::categories(output_mode);
            Ok(())
        },
        Some(Command::New { form, out, stdout }) => {
            commands::new(&config, &form, out.as_deref(), stdout, output_mode)
        },
        Some(Command::Issue { form }) => commands::issue(&form, output_mode),
        Some(Command::Render { file, html }) => commands::render(&file, html, output_mode),
        Some(Command::Config) => commands::config(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("annals v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("annals v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'annals --help' for usage");
                println!("Run 'annals list' to browse the catalog");
            }
            Ok(())
        },
    }
}
