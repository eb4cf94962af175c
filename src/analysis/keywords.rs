// src/analysis/keywords.rs
//! Keyword extraction for the lexical matching pipeline.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Generic resume/job filler terms that carry no signal. Fixed
/// configuration constant, not derived from input.
pub const STOP_WORDS: &[&str] = &[
    "the",
    "and",
    "for",
    "with",
    "that",
    "this",
    "from",
    "your",
    "will",
    "have",
    "work",
    "team",
    "experience",
    "skill",
    "year",
    "role",
    "knowledge",
    "proficiency",
    "ability",
    "strong",
    "excellent",
    "proven",
    "track",
    "record",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Token multiset extracted from free text. Keeps the first-seen order of
/// distinct tokens because scoring output ordering depends on it.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl KeywordSet {
    /// Normalize free text into a filtered token multiset: lowercase, strip
    /// everything outside `[a-z0-9\s]`, split on whitespace, drop tokens of
    /// length <= 3 and stop words. Empty input yields an empty set.
    pub fn extract(text: &str) -> Self {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect();

        let mut set = Self::default();
        for token in cleaned.split_whitespace() {
            if token.len() <= 3 || STOP_WORD_SET.contains(token) {
                continue;
            }
            let entry = set.counts.entry(token.to_string()).or_insert(0);
            if *entry == 0 {
                set.order.push(token.to_string());
            }
            *entry += 1;
        }
        set
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all occurrence counts.
    pub fn total_weight(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distinct tokens with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|token| (token.as_str(), self.counts[token]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercase_filtered_and_long() {
        let set = KeywordSet::extract("Senior Django Developer with PostgreSQL and the team");
        let tokens: Vec<&str> = set.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["senior", "django", "developer", "postgresql"]);
        for (token, _) in set.iter() {
            assert!(token.len() > 3);
            assert!(!STOP_WORDS.contains(&token));
            assert_eq!(token, token.to_lowercase());
        }
    }

    #[test]
    fn punctuation_is_stripped_not_spaced() {
        // "C++" collapses to "c" and is dropped by the length filter;
        // "node.js" becomes "nodejs".
        let set = KeywordSet::extract("C++ node.js");
        let tokens: Vec<&str> = set.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["nodejs"]);
    }

    #[test]
    fn counts_accumulate_and_order_is_first_seen() {
        let set = KeywordSet::extract("python django python flask django python");
        assert_eq!(set.count("python"), 3);
        assert_eq!(set.count("django"), 2);
        assert_eq!(set.count("flask"), 1);
        assert_eq!(set.total_weight(), 6);
        let tokens: Vec<&str> = set.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["python", "django", "flask"]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_set() {
        assert!(KeywordSet::extract("").is_empty());
        assert!(KeywordSet::extract("   \n\t  ").is_empty());
        assert_eq!(KeywordSet::extract("  ").total_weight(), 0);
    }
}
