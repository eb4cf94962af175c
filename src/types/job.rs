// src/types/job.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing source a posting was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSource {
    #[serde(rename = "RemoteOK")]
    RemoteOk,
    Computrabajo,
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobSource::RemoteOk => write!(f, "RemoteOK"),
            JobSource::Computrabajo => write!(f, "Computrabajo"),
        }
    }
}

/// A normalized job listing. The `url` is the identity key: two postings
/// with the same url are the same job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_posted: String,
    pub source: JobSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logo: String,
    /// Attached during ranking; absent until a profile is supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

impl JobPosting {
    /// Text used as the scoring reference for this posting. Falls back to
    /// title + company when the source gave no description snippet.
    pub fn reference_text(&self) -> String {
        if self.description.is_empty() {
            format!("{} {}", self.title, self.company)
        } else {
            self.description.clone()
        }
    }
}
