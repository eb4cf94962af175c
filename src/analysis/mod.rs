// src/analysis/mod.rs
//! Lexical text analysis: keyword extraction and overlap scoring.

pub mod keywords;
pub mod scorer;

pub use keywords::KeywordSet;
pub use scorer::{relevance_score, ScoreResult};
