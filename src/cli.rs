//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **add**: Store a new snippet
//! - **list** / **show**: Display stored snippets
//! - **delete**, **favorite**, **tag**: Modify a snippet by id
//! - **search**: Exact or fuzzy search with tag and language filters
//! - **seed**: Load the sample snippets
//! - **config**: Write or print the configuration
//!
//! Global flags pick the backend (`--backend`), the config file (`--config`),
//! quiet output (`-q`) and log verbosity (`-v`, `-vv`).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::Language;
use crate::repo::Backend;

#[derive(Parser, Debug)]
#[command(name = "snipster")]
#[command(about = "A code snippet manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage backend (memory, json, sqlite); overrides the config file
    #[arg(long = "backend", value_name = "BACKEND", global = true)]
    pub backend: Option<Backend>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output; list commands print ids only
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new snippet
    #[command(visible_alias = "a")]
    Add {
        /// Snippet title
        title: String,

        /// Snippet code
        code: String,

        /// Language code (py, sql, rs)
        language: Language,

        /// Optional description
        #[arg(short = 'd', long = "description")]
        description: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Mark the snippet as favorite
        #[arg(long = "favorite")]
        favorite: bool,
    },

    /// List all snippets
    #[command(visible_alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show one snippet with its code
    Show {
        /// Snippet id
        id: i64,

        /// Print as JSON
        #[arg(long = "json")]
        json: bool,

        /// Print code without syntax highlighting
        #[arg(long = "no-highlight")]
        no_highlight: bool,
    },

    /// Delete a snippet
    #[command(visible_alias = "rm")]
    Delete {
        /// Snippet id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Toggle the favorite flag of a snippet
    #[command(visible_alias = "fav")]
    Favorite {
        /// Snippet id
        id: i64,
    },

    /// Search snippets by title, code and description
    #[command(visible_alias = "s")]
    Search {
        /// Search term; empty matches everything
        #[arg(default_value = "")]
        term: String,

        /// Only snippets carrying this tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,

        /// Only snippets in this language
        #[arg(short = 'l', long = "language", value_name = "LANG")]
        language: Option<Language>,

        /// Match approximately instead of by substring
        #[arg(short = 'f', long = "fuzzy")]
        fuzzy: bool,

        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Add or remove tags on a snippet
    #[command(visible_alias = "t")]
    Tag {
        /// Snippet id
        id: i64,

        /// Tag names
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,

        /// Remove the tags instead of adding them
        #[arg(short = 'r', long = "remove")]
        remove: bool,
    },

    /// Load sample snippets into the store
    Seed,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}
