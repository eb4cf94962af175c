// src/search/scrapers/remoteok.rs
//! RemoteOK JSON feed scraper.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{absolutize, is_blocking_status, JobBoard, USER_AGENT};
use crate::config::SearchConfig;
use crate::types::{JobPosting, JobSource};

pub struct RemoteOkBoard {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl RemoteOkBoard {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.remoteok.base_url.clone(),
            max_results: config.remoteok.max_results,
        })
    }

    fn feed_url(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return self.base_url.clone();
        }
        let tag = query.trim().to_lowercase().replace(' ', "-");
        format!("{}?tag={}", self.base_url, tag)
    }
}

#[async_trait]
impl JobBoard for RemoteOkBoard {
    fn source(&self) -> JobSource {
        JobSource::RemoteOk
    }

    async fn fetch(&self, query: &str, _location: &str) -> Vec<JobPosting> {
        let url = self.feed_url(query);
        info!("Fetching jobs from: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("RemoteOK request failed: {}", e);
                return Vec::new();
            }
        };

        let status = response.status();
        if is_blocking_status(status) {
            warn!("RemoteOK blocked the request: {}", status);
            return Vec::new();
        }
        if !status.is_success() {
            warn!("RemoteOK returned unexpected status: {}", status);
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read RemoteOK response body: {}", e);
                return Vec::new();
            }
        };

        let postings = parse_feed(&body, &self.base_url, self.max_results);
        debug!("RemoteOK yielded {} postings for '{}'", postings.len(), query);
        postings
    }
}

/// Normalize the RemoteOK feed. The leading element is a legal notice with
/// no `position` field; it and any drifted record missing mandatory fields
/// are skipped rather than failing the whole feed.
fn parse_feed(raw: &str, base_url: &str, max_results: usize) -> Vec<JobPosting> {
    let feed: Vec<Value> = match serde_json::from_str(raw) {
        Ok(feed) => feed,
        Err(e) => {
            warn!("RemoteOK feed is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let mut postings = Vec::new();
    for item in &feed {
        let Some(title) = str_field(item, &["position", "title"]) else {
            continue;
        };
        // The url is the posting's identity; a record without one is unusable.
        let Some(href) = str_field(item, &["apply_url", "url"]) else {
            continue;
        };

        postings.push(JobPosting {
            title,
            company: str_field(item, &["company"]).unwrap_or_default(),
            location: str_field(item, &["location"]).unwrap_or_default(),
            url: absolutize(base_url, &href),
            description: str_field(item, &["description"]).unwrap_or_default(),
            date_posted: str_field(item, &["date"]).unwrap_or_default(),
            source: JobSource::RemoteOk,
            tags: tag_list(item),
            logo: str_field(item, &["company_logo", "logo"]).unwrap_or_default(),
            match_score: None,
        });

        if postings.len() == max_results {
            break;
        }
    }
    postings
}

/// First non-empty string under any of the candidate keys. Field names
/// drift, so every record gets a fallback chain.
fn str_field(item: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = item.get(key).and_then(Value::as_str) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn tag_list(item: &Value) -> Vec<String> {
    item.get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
