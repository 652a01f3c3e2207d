//! Category-to-tag predicate table
//!
//! Filter buttons carry short category keys; project cards carry longer
//! tag strings. This table maps each key to the tag-containment test that
//! decides visibility. Several categories deliberately overlap (a card
//! tagged only "Automation" matches both `automation` and `ai-agent`);
//! unknown keys fall back to literal containment of the key itself.

/// Category keys with an entry in the predicate table, `"all"` first
pub const KNOWN_CATEGORIES: &[&str] = &[
    "all",
    "ai",
    "data",
    "rag",
    "selenium",
    "langchain",
    "cv",
    "automation",
    "ai-agent",
    "web",
];

/// Whether a card with the given tags matches the category
///
/// Matching is case-insensitive substring containment on each tag.
/// `"all"` matches unconditionally.
#[must_use]
pub fn category_matches(category: &str, tags: &[String]) -> bool {
    if category == "all" {
        return true;
    }

    tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        match category {
            "ai" => tag.contains("machine learning"),
            "data" => tag.contains("deep learning"),
            "rag" => tag.contains("rag"),
            "selenium" => tag.contains("selenium"),
            "langchain" => tag.contains("langchain"),
            "cv" => tag.contains("computer vision"),
            "automation" => tag.contains("automation"),
            "ai-agent" => tag.contains("ai agent") || tag.contains("automation"),
            "web" => tag.contains("scraping") || tag.contains("web"),
            other => tag.contains(other),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(category_matches("all", &tags(&[])));
        assert!(category_matches("all", &tags(&["Anything"])));
    }

    #[test]
    fn test_short_keys_map_to_long_tags() {
        assert!(category_matches("ai", &tags(&["Machine Learning"])));
        assert!(category_matches("data", &tags(&["Deep Learning"])));
        assert!(category_matches("cv", &tags(&["Computer Vision"])));
        assert!(!category_matches("ai", &tags(&["Deep Learning"])));
    }

    #[test]
    fn test_overlapping_categories() {
        let automation_only = tags(&["Automation"]);
        assert!(category_matches("automation", &automation_only));
        assert!(category_matches("ai-agent", &automation_only));

        let agent_only = tags(&["AI Agent"]);
        assert!(category_matches("ai-agent", &agent_only));
        assert!(!category_matches("automation", &agent_only));
    }

    #[test]
    fn test_web_matches_scraping_or_web() {
        assert!(category_matches("web", &tags(&["Web Scraping"])));
        assert!(category_matches("web", &tags(&["Scraping"])));
        assert!(!category_matches("web", &tags(&["Automation"])));
    }

    #[test]
    fn test_unknown_key_falls_back_to_literal_containment() {
        assert!(category_matches("python", &tags(&["Python Tooling"])));
        assert!(!category_matches("python", &tags(&["Rust Tooling"])));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(category_matches("selenium", &tags(&["SELENIUM"])));
        assert!(category_matches("rag", &tags(&["RAG"])));
    }
}
