// src/search/scrapers/mod.rs
//! Pluggable job-listing sources. Each scraper normalizes one site into
//! `JobPosting` records and never lets a network or parse failure escape:
//! blocked, timed out or drifted markup all degrade to an empty list.

pub mod computrabajo;
pub mod remoteok;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::types::{JobPosting, JobSource};

pub use computrabajo::ComputrabajoBoard;
pub use remoteok::RemoteOkBoard;

pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Capability interface for a job-listing source. New sources plug in here
/// without touching the aggregator.
#[async_trait]
pub trait JobBoard: Send + Sync {
    fn source(&self) -> JobSource;

    /// Fetch and normalize postings for one search term. Always returns a
    /// list; an empty one covers "no results", "blocked" and "failed" alike.
    async fn fetch(&self, query: &str, location: &str) -> Vec<JobPosting>;
}

/// Statuses job boards answer with when they decide we are a bot. Expected
/// and non-fatal: the call degrades to an empty result.
pub(crate) fn is_blocking_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 403 | 429 | 503)
}

/// Resolve a possibly-relative href against the source's base URL.
pub(crate) fn absolutize(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", site_origin(base_url), href)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href)
    }
}

/// `scheme://host` portion of a URL, with any path stripped.
fn site_origin(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return url.trim_end_matches('/');
    };
    match url[scheme_end + 3..].find('/') {
        Some(path_start) => &url[..scheme_end + 3 + path_start],
        None => url,
    }
}

/// Collapse runs of whitespace and newlines into single spaces.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_statuses() {
        assert!(is_blocking_status(StatusCode::FORBIDDEN));
        assert!(is_blocking_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_blocking_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_blocking_status(StatusCode::OK));
        assert!(!is_blocking_status(StatusCode::NOT_FOUND));
    }

    #[test]
    fn absolutize_resolves_relative_hrefs() {
        assert_eq!(
            absolutize("https://cl.computrabajo.com", "/ofertas/123"),
            "https://cl.computrabajo.com/ofertas/123"
        );
        assert_eq!(
            absolutize("https://remoteok.com/api", "/remote-jobs/42"),
            "https://remoteok.com/remote-jobs/42"
        );
        assert_eq!(
            absolutize("https://example.com", "https://other.com/j/1"),
            "https://other.com/j/1"
        );
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Senior\n  Developer \t Remote "), "Senior Developer Remote");
    }
}
