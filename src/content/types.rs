//! Portfolio content types

use serde::{Deserialize, Serialize};

/// A project card: title, description, tag strings, and technology
/// identifiers, all searchable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Card description
    pub description: String,
    /// Tag strings shown on the card and matched by category filters
    #[serde(default)]
    pub tags: Vec<String>,
    /// Technology identifiers (icon class names in the original markup)
    #[serde(default)]
    pub tech: Vec<String>,
}

impl Card {
    /// Create a card without tags or tech identifiers
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            tech: Vec::new(),
        }
    }

    /// Set the tag strings
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Set the technology identifiers
    #[must_use]
    pub fn with_tech(mut self, tech: &[&str]) -> Self {
        self.tech = tech.iter().map(|t| (*t).to_string()).collect();
        self
    }
}

/// A testimonial card shown in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quoted text
    pub quote: String,
    /// Author name
    pub author: String,
    /// Author role or affiliation
    #[serde(default)]
    pub role: String,
}

/// The full portfolio document
///
/// Owns everything the page renders: the rotating role headline, both
/// filter button groups, the project cards, and the testimonial cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    /// Display name for the hero header
    #[serde(default)]
    pub name: String,
    /// Tagline shown under the name
    #[serde(default)]
    pub tagline: String,
    /// Roles cycled by the typing headline
    #[serde(default)]
    pub roles: Vec<String>,
    /// Filter keys for the hero quick-filter group
    #[serde(default)]
    pub hero_filters: Vec<String>,
    /// Filter keys for the project-section filter group
    #[serde(default)]
    pub project_filters: Vec<String>,
    /// Project cards
    #[serde(default)]
    pub projects: Vec<Card>,
    /// Testimonial cards
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builders() {
        let card = Card::new("RAG Pipeline", "Retrieval-augmented generation service")
            .with_tags(&["RAG", "LangChain"])
            .with_tech(&["python", "openai"]);

        assert_eq!(card.title, "RAG Pipeline");
        assert_eq!(card.tags, vec!["RAG", "LangChain"]);
        assert_eq!(card.tech, vec!["python", "openai"]);
    }

    #[test]
    fn test_portfolio_deserializes_with_defaults() {
        let portfolio: Portfolio = toml::from_str("name = \"Ada\"").unwrap();
        assert_eq!(portfolio.name, "Ada");
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.testimonials.is_empty());
        assert!(portfolio.hero_filters.is_empty());
    }
}
