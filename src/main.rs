//! Folio binary entry point
//!
//! Parses the CLI, resolves configuration and portfolio content, then
//! dispatches to the interactive browser or a one-shot command.

use folio::FolioError;
use folio::cli::{Cli, Commands};
use folio::config::FolioConfig;
use folio::content::{Card, Portfolio};
use folio::search::{card_matches_query, category_matches};
use folio::{output, ui};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), FolioError> {
    let cli = Cli::parse_args();

    let mut config = FolioConfig::load()?;
    if cli.quiet {
        config.quiet = true;
    }
    if let Some(path) = &cli.content {
        // Session-only override, never written back to the config file
        config.content = Some(path.clone());
    }

    let portfolio = match &config.content {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::embedded()?,
    };

    match cli.get_command() {
        Commands::Browse => ui::browser::run(portfolio, &config)?,
        Commands::Search { query, json } => {
            let term = query.to_lowercase().trim().to_string();
            let matches: Vec<&Card> = portfolio
                .projects
                .iter()
                .filter(|card| card_matches_query(card, &term))
                .collect();
            if json {
                output::print_cards_json(&matches)?;
            } else {
                output::print_cards(&matches, config.quiet);
            }
        }
        Commands::Filter { category, json } => {
            let key = category.trim().to_lowercase();
            let matches: Vec<&Card> = portfolio
                .projects
                .iter()
                .filter(|card| category_matches(&key, &card.tags))
                .collect();
            if json {
                output::print_cards_json(&matches)?;
            } else {
                output::print_cards(&matches, config.quiet);
            }
        }
        Commands::Categories => output::print_categories(config.quiet),
        Commands::Config => output::print_config(&config, &FolioConfig::config_path()?),
    }

    Ok(())
}
