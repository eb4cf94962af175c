// src/analysis/scorer.rs
//! Keyword-overlap scoring, shared by job ranking and the resume ATS audit.

use serde::{Deserialize, Serialize};

use super::keywords::KeywordSet;

/// Missing-keyword list is truncated to the most frequent entries.
const MISSING_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Integer percentage in [0, 100].
    pub score: u8,
    /// Reference tokens found in the candidate text, in encounter order.
    pub matched: Vec<String>,
    /// Reference tokens absent from the candidate text, sorted by
    /// descending reference frequency, truncated to the top 10.
    pub missing: Vec<String>,
}

/// Compare candidate text (resume/profile side) against reference text
/// (job description side). Pure and deterministic: no I/O, no side effects.
///
/// The score is the floor of the covered share of the reference keyword
/// weight. A reference with no extractable keywords cannot be missed and
/// scores 100.
pub fn relevance_score(candidate_text: &str, reference_text: &str) -> ScoreResult {
    let reference = KeywordSet::extract(reference_text);
    let candidate = KeywordSet::extract(candidate_text);

    let total_weight = reference.total_weight();
    if total_weight == 0 {
        return ScoreResult {
            score: 100,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut score_points = 0usize;

    for (token, count) in reference.iter() {
        if candidate.contains(token) {
            score_points += count;
            matched.push(token.to_string());
        } else {
            missing.push(token.to_string());
        }
    }

    // Integer division keeps the historical floor semantics.
    let score = (score_points * 100 / total_weight) as u8;

    // Stable sort: equal-frequency tokens keep encounter order.
    missing.sort_by(|a, b| reference.count(b).cmp(&reference.count(a)));
    missing.truncate(MISSING_LIMIT);

    ScoreResult {
        score,
        matched,
        missing,
    }
}
