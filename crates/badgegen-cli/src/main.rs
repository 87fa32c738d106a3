mod cmd;
mod output;
mod root;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "badgegen",
    about = "Generate README badge SVGs by filling placeholders in templates",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .github/ or .git/)
    #[arg(long, global = true, env = "BADGEGEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log each file written
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every configured badge and write the generated SVGs
    Generate {
        /// Use this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Render without writing any files
        #[arg(long)]
        dry_run: bool,

        /// Only generate the named badge (repeatable)
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,
    },

    /// List configured badges
    List,

    /// Scaffold the iteration file, default templates, and badges.yaml
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Inspect the badge configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let command = cli.command.unwrap_or(Commands::Generate {
        date: None,
        dry_run: false,
        only: Vec::new(),
    });

    let result = match command {
        Commands::Generate {
            date,
            dry_run,
            only,
        } => cmd::generate::run(&root, date, dry_run, &only, cli.json),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Init { force } => cmd::init::run(&root, force, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
