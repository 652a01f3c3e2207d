//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for folio using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive full-screen portfolio page (default)
//! - **search**: One-shot project search by free text
//! - **filter**: One-shot project filtering by category key
//! - **categories**: List the category keys the filter understands
//! - **config**: Show the resolved configuration
//!
//! # Design Features
//!
//! - Global `--content` flag to point at a portfolio TOML document
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `b` for `browse`, `s` for `search`)
//! - `--json` output on the one-shot commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Path to a portfolio content TOML document
    #[arg(short, long, global = true, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run; defaults to `browse`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse the portfolio page interactively
    #[command(visible_alias = "b")]
    Browse,

    /// Search project cards by free text
    #[command(visible_alias = "s")]
    Search {
        /// Query matched against titles, descriptions, tags, and tech
        query: String,

        /// Emit matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter project cards by category key
    #[command(visible_alias = "f")]
    Filter {
        /// Category key (see `folio categories`)
        category: String,

        /// Emit matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the category keys the filter understands
    Categories,

    /// Show the resolved configuration and its path
    Config,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The effective command, defaulting to `browse`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}
