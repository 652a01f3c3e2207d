//! One-shot command output
//!
//! Renders search/filter results, the category list, and the resolved
//! configuration to stdout, colored for humans or as JSON for scripting.

use crate::config::FolioConfig;
use crate::content::Card;
use crate::search::KNOWN_CATEGORIES;
use colored::Colorize;
use std::path::Path;

/// Print matching cards in human-readable form
///
/// With `quiet`, only titles are printed (one per line).
pub fn print_cards(cards: &[&Card], quiet: bool) {
    if cards.is_empty() {
        if !quiet {
            println!("{}", "No matching projects".dimmed());
        }
        return;
    }

    for card in cards {
        if quiet {
            println!("{}", card.title);
            continue;
        }

        println!("{}", card.title.bold());
        println!("  {}", card.description);
        if !card.tags.is_empty() {
            println!("  {}", card.tags.join(", ").magenta());
        }
        if !card.tech.is_empty() {
            println!("  {}", card.tech.join(" ").dimmed());
        }
    }
}

/// Print matching cards as a JSON array
///
/// # Errors
///
/// Returns a serialization error if the cards cannot be encoded.
pub fn print_cards_json(cards: &[&Card]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(cards)?);
    Ok(())
}

/// Print the category keys the filter understands
pub fn print_categories(quiet: bool) {
    if !quiet {
        println!("{}", "Known filter categories:".bold());
    }
    for category in KNOWN_CATEGORIES {
        println!("{category}");
    }
}

/// Print the resolved configuration and where it lives
pub fn print_config(config: &FolioConfig, path: &Path) {
    println!("{} {}", "Config file:".bold(), path.display());
    match &config.content {
        Some(content) => println!("content        = {}", content.display()),
        None => println!("content        = {}", "(embedded demo)".dimmed()),
    }
    println!("header_offset  = {}", config.header_offset);
    println!("debounce_ms    = {}", config.debounce_ms);
    println!("settle_ms      = {}", config.settle_ms);
    println!("quiet          = {}", config.quiet);
}
