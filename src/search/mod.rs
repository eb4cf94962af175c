// src/search/mod.rs
//! Job aggregation pipeline: expand the query, fetch each term from every
//! registered board, dedupe by url, rank against the candidate profile.

pub mod expansion;
pub mod scrapers;

use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::relevance_score;
use crate::config::SearchConfig;
use crate::types::{CandidateProfile, JobPosting};

pub use expansion::QueryExpander;
pub use scrapers::{ComputrabajoBoard, JobBoard, RemoteOkBoard};

pub struct JobSearchEngine {
    expander: QueryExpander,
    boards: Vec<Box<dyn JobBoard>>,
    politeness_delay: Duration,
}

impl JobSearchEngine {
    /// Engine with the default source set. Computrabajo first: it is the
    /// primary market, RemoteOK supplements with remote listings.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let boards: Vec<Box<dyn JobBoard>> = vec![
            Box::new(ComputrabajoBoard::new(config)?),
            Box::new(RemoteOkBoard::new(config)?),
        ];
        Ok(Self::with_boards(config, boards))
    }

    pub fn with_boards(config: &SearchConfig, boards: Vec<Box<dyn JobBoard>>) -> Self {
        Self {
            expander: QueryExpander::new(config),
            boards,
            politeness_delay: Duration::from_millis(config.politeness_delay_ms),
        }
    }

    /// Run one aggregation pass. Always returns a list; scraping failures
    /// surface as fewer (possibly zero) postings, never as an error.
    ///
    /// Each call owns its seen-set and accumulator, so concurrent calls
    /// are independent. Terms are fetched strictly in sequence with the
    /// politeness delay between them.
    pub async fn run(
        &self,
        query: &str,
        location: &str,
        profile: Option<&CandidateProfile>,
    ) -> Vec<JobPosting> {
        let terms = self.expander.expand(query);
        info!("Searching {} term(s) for '{}'", terms.len(), query);

        let mut seen: HashSet<String> = HashSet::new();
        let mut postings: Vec<JobPosting> = Vec::new();

        for (index, term) in terms.iter().enumerate() {
            if index > 0 {
                debug!("Pacing {:?} before next term", self.politeness_delay);
                tokio::time::sleep(self.politeness_delay).await;
            }

            for board in &self.boards {
                let fetched = board.fetch(term, location).await;
                debug!("{} returned {} postings for '{}'", board.source(), fetched.len(), term);

                for posting in fetched {
                    // First posting seen for a url wins; later duplicates
                    // from other terms or boards are dropped untouched.
                    if seen.insert(posting.url.clone()) {
                        postings.push(posting);
                    }
                }
            }
        }

        if let Some(profile) = profile {
            rank_postings(&mut postings, profile);
        }

        info!("Aggregated {} unique postings for '{}'", postings.len(), query);
        postings
    }
}

/// Attach a match score to every posting and stable-sort by it, descending.
/// Ties keep first-seen order.
fn rank_postings(postings: &mut [JobPosting], profile: &CandidateProfile) {
    let candidate_text = profile.comparison_text();
    for posting in postings.iter_mut() {
        let result = relevance_score(&candidate_text, &posting.reference_text());
        posting.match_score = Some(result.score);
    }
    postings.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobSource, SkillEntry};
    use async_trait::async_trait;

    struct StaticBoard {
        postings: Vec<JobPosting>,
    }

    #[async_trait]
    impl JobBoard for StaticBoard {
        fn source(&self) -> JobSource {
            JobSource::RemoteOk
        }

        async fn fetch(&self, _query: &str, _location: &str) -> Vec<JobPosting> {
            self.postings.clone()
        }
    }

    fn posting(url: &str, title: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            url: url.to_string(),
            description: description.to_string(),
            date_posted: String::new(),
            source: JobSource::RemoteOk,
            tags: Vec::new(),
            logo: String::new(),
            match_score: None,
        }
    }

    fn quiet_config() -> SearchConfig {
        SearchConfig {
            politeness_delay_ms: 0,
            synonyms: Vec::new(),
            ..SearchConfig::default()
        }
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            professional_title: "Python Developer".to_string(),
            skills: vec![SkillEntry {
                name: "Flask".to_string(),
                level: String::new(),
                category: String::new(),
            }],
            experiences: Vec::new(),
        }
    }

    #[tokio::test]
    async fn duplicate_urls_collapse_to_first_seen() {
        let first = posting("https://jobs.example/1", "First copy", "python flask");
        let mut second = posting("https://jobs.example/1", "Second copy", "java spring");
        second.company = "Other Co".to_string();

        let config = quiet_config();
        let engine = JobSearchEngine::with_boards(
            &config,
            vec![Box::new(StaticBoard {
                postings: vec![first.clone(), second],
            })],
        );

        let results = engine.run("python", "Remote", Some(&profile())).await;
        assert_eq!(results.len(), 1);
        // First-seen attributes are untouched.
        assert_eq!(results[0].title, "First copy");
        assert_eq!(results[0].company, "Acme");
    }

    #[tokio::test]
    async fn profile_ranking_sorts_descending_and_is_stable() {
        let jobs = vec![
            posting("https://jobs.example/a", "Nothing relevant", "cobol mainframe"),
            posting("https://jobs.example/b", "Half match", "python java"),
            posting("https://jobs.example/c", "Full match", "python flask"),
            posting("https://jobs.example/d", "Also nothing", "fortran punchcards"),
        ];

        let config = quiet_config();
        let engine =
            JobSearchEngine::with_boards(&config, vec![Box::new(StaticBoard { postings: jobs })]);

        let results = engine.run("python", "", Some(&profile())).await;
        let urls: Vec<&str> = results.iter().map(|j| j.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://jobs.example/c",
                "https://jobs.example/b",
                "https://jobs.example/a",
                "https://jobs.example/d",
            ]
        );
        assert_eq!(results[0].match_score, Some(100));
        assert_eq!(results[1].match_score, Some(50));
        // Zero-score ties keep first-seen order.
        assert_eq!(results[2].match_score, Some(0));
        assert_eq!(results[3].match_score, Some(0));
    }

    #[tokio::test]
    async fn without_profile_order_is_first_seen_and_unscored() {
        let jobs = vec![
            posting("https://jobs.example/1", "One", "python"),
            posting("https://jobs.example/2", "Two", "java"),
        ];

        let config = quiet_config();
        let engine =
            JobSearchEngine::with_boards(&config, vec![Box::new(StaticBoard { postings: jobs })]);

        let results = engine.run("anything", "", None).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "One");
        assert!(results.iter().all(|j| j.match_score.is_none()));
    }

    #[tokio::test]
    async fn empty_description_scores_against_title_and_company() {
        let jobs = vec![posting("https://jobs.example/1", "Flask Developer", "")];

        let config = quiet_config();
        let engine =
            JobSearchEngine::with_boards(&config, vec![Box::new(StaticBoard { postings: jobs })]);

        let results = engine.run("python", "", Some(&profile())).await;
        // Reference falls back to "Flask Developer Acme": profile covers
        // flask and developer but not acme -> 2 of 3.
        assert_eq!(results[0].match_score, Some(66));
    }
}
