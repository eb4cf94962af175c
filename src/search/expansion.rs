// src/search/expansion.rs
//! Query expansion against the synonym knowledge base.

use std::collections::HashSet;

use crate::config::{SearchConfig, SynonymRule};

/// Maps a single search query to a bounded set of related terms to broaden
/// recall. The original query always survives as the first element.
#[derive(Debug, Clone)]
pub struct QueryExpander {
    rules: Vec<SynonymRule>,
    max_terms: usize,
}

impl QueryExpander {
    pub fn new(config: &SearchConfig) -> Self {
        let rules = config
            .synonyms
            .iter()
            .map(|rule| SynonymRule {
                trigger: rule.trigger.to_lowercase(),
                terms: rule.terms.clone(),
            })
            .collect();

        Self {
            rules,
            max_terms: config.max_expansion_terms,
        }
    }

    /// Expand a query into at most `max_terms` distinct search terms.
    /// Every trigger phrase contained in the lowercased query contributes
    /// its related terms in knowledge-base order; duplicates keep their
    /// first occurrence. No trigger match returns exactly `[query]`.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();

        let mut terms = vec![query.to_string()];
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(lowered.clone());

        for rule in &self.rules {
            if !lowered.contains(&rule.trigger) {
                continue;
            }
            for term in &rule.terms {
                if seen.insert(term.to_lowercase()) {
                    terms.push(term.clone());
                }
            }
        }

        terms.truncate(self.max_terms);
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> QueryExpander {
        QueryExpander::new(&SearchConfig::default())
    }

    #[test]
    fn original_query_is_always_first() {
        let terms = expander().expand("Python Developer");
        assert_eq!(terms[0], "Python Developer");
        assert!(terms.len() <= 4);
        // Expansions come from the configured table.
        assert!(terms.contains(&"django".to_string()));
        assert!(terms.contains(&"flask".to_string()));
    }

    #[test]
    fn no_trigger_match_returns_only_the_query() {
        let terms = expander().expand("underwater basket weaving");
        assert_eq!(terms, vec!["underwater basket weaving".to_string()]);
    }

    #[test]
    fn dedup_is_case_insensitive_and_keeps_first_occurrence() {
        let config = SearchConfig {
            synonyms: vec![
                SynonymRule {
                    trigger: "rust".to_string(),
                    terms: vec!["Systems Engineer".to_string(), "backend".to_string()],
                },
                SynonymRule {
                    trigger: "rust".to_string(),
                    terms: vec!["systems engineer".to_string(), "embedded".to_string()],
                },
            ],
            ..SearchConfig::default()
        };
        let terms = QueryExpander::new(&config).expand("Rust");
        assert_eq!(
            terms,
            vec![
                "Rust".to_string(),
                "Systems Engineer".to_string(),
                "backend".to_string(),
                "embedded".to_string(),
            ]
        );
    }

    #[test]
    fn combined_result_is_capped() {
        // "python data" trips two rules with seven distinct expansions.
        let terms = expander().expand("python data");
        assert_eq!(terms.len(), 4);
        assert_eq!(terms[0], "python data");
    }

    #[test]
    fn query_matching_its_own_expansion_is_not_duplicated() {
        let terms = expander().expand("django");
        assert!(!terms
            .iter()
            .skip(1)
            .any(|t| t.eq_ignore_ascii_case("django")));
    }
}
