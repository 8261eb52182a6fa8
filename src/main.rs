//! Snipster CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Add a snippet
//! snipster add "First snip" "print('hello world')" py -d "Good day" -t beginner
//!
//! # List, show and search
//! snipster list
//! snipster show 1
//! snipster search "select" --language sql
//! snipster search "ehllo world" --fuzzy
//!
//! # Modify
//! snipster favorite 1
//! snipster tag 1 training advanced
//! snipster tag 1 advanced --remove
//! snipster delete 1 -y
//!
//! # Use the JSON file store for one command
//! snipster --backend json list
//! ```
//!
//! # Configuration
//!
//! `snipster config init` writes `config.toml` to the user's config directory
//! (`~/.config/snipster/config.toml` on Linux). `SNIPSTER_*` environment
//! variables and `DATABASE_URL` override the file.
//!
//! # Logging
//!
//! Diagnostics go to stderr. The filter is read from `SNIPSTER_LOG`
//! (e.g. `SNIPSTER_LOG=snipster=debug`); otherwise `-v` selects info and `-vv`
//! debug, with warnings shown by default.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use snipster::cli::{Cli, Commands};
use snipster::commands::{self, add::AddArgs, search::SearchArgs};
use snipster::config::SnipsterConfig;
use snipster::repo::{self, Backend, SnippetRepository};
use snipster::SnipsterError;

type Result<T> = std::result::Result<T, SnipsterError>;

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "SNIPSTER_LOG";

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SnipsterConfig::load(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &cli.command {
        return commands::config(command, &config, cli.config.as_deref(), quiet);
    }

    if config.backend == Backend::Memory {
        tracing::warn!("memory backend selected; changes are discarded when the command exits");
    }
    let mut repo = repo::open(&config.storage()?)?;
    dispatch(cli.command, repo.as_mut(), &config, quiet)
}

fn dispatch(
    command: Commands,
    repo: &mut dyn SnippetRepository,
    config: &SnipsterConfig,
    quiet: bool,
) -> Result<()> {
    match command {
        Commands::Add {
            title,
            code,
            language,
            description,
            tags,
            favorite,
        } => {
            let args = AddArgs {
                title,
                code,
                language,
                description,
                tags,
                favorite,
            };
            commands::add(repo, args, quiet)?;
        }
        Commands::List { json } => {
            commands::list(repo, json, quiet)?;
        }
        Commands::Show {
            id,
            json,
            no_highlight,
        } => {
            commands::show(repo, id, json, config.highlight && !no_highlight)?;
        }
        Commands::Delete { id, yes } => {
            commands::delete(repo, id, yes, quiet)?;
        }
        Commands::Favorite { id } => {
            commands::favorite(repo, id, quiet)?;
        }
        Commands::Search {
            term,
            tag,
            language,
            fuzzy,
            json,
        } => {
            let args = SearchArgs {
                term,
                tag,
                language,
                fuzzy,
            };
            commands::search(repo, &args, json, quiet)?;
        }
        Commands::Tag { id, tags, remove } => {
            commands::tag(repo, id, &tags, remove, quiet)?;
        }
        Commands::Seed => {
            commands::seed(repo, quiet)?;
        }
        Commands::Config { command } => {
            commands::config(&command, config, None, quiet)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
