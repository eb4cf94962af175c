// src/search/scrapers/computrabajo.rs
//! Computrabajo HTML scraper. The site has no API and an unstable layout,
//! so every field is read through an ordered selector-fallback chain and a
//! record that lost its title is skipped instead of failing the parse.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{absolutize, clean_text, is_blocking_status, JobBoard, USER_AGENT};
use crate::config::SearchConfig;
use crate::types::{JobPosting, JobSource};

/// Record containers: current grid layout, then the legacy card layout.
const ARTICLE_SELECTORS: &[&str] = &["article.box_offer", "div.bClick"];

const TITLE_SELECTORS: &[&str] = &["h1 a.js-o-link", "h2 a.js-o-link", "a.js-o-link"];

const COMPANY_SELECTORS: &[&str] = &["p.fs16.fc_base.mt5 a", "a.empr", "p.fs16 span"];

const LOCATION_SELECTORS: &[&str] = &["p.fs16 span.fc_base", "span[itemprop='addressLocality']"];

const DESCRIPTION_SELECTORS: &[&str] = &["p.fs13.fc_aux", "div.fs13"];

const DATE_SELECTORS: &[&str] = &["span.fc_aux"];

/// Distinct from a block: the site answered normally but found nothing.
const NO_RESULTS_MARKERS: &[&str] = &["No hemos encontrado ofertas", "0 ofertas de trabajo"];

pub struct ComputrabajoBoard {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl ComputrabajoBoard {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.computrabajo.base_url.clone(),
            max_results: config.computrabajo.max_results,
        })
    }

    /// `{base}/trabajo-de-{query}[-en-{location}]`, both parts slugified.
    fn search_url(&self, query: &str, location: &str) -> String {
        let mut path = format!("trabajo-de-{}", slugify(query));
        let location_slug = slugify(location);
        if !location_slug.is_empty() {
            path.push_str("-en-");
            path.push_str(&location_slug);
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl JobBoard for ComputrabajoBoard {
    fn source(&self) -> JobSource {
        JobSource::Computrabajo
    }

    async fn fetch(&self, query: &str, location: &str) -> Vec<JobPosting> {
        let url = self.search_url(query, location);
        info!("Visiting: {}", url);

        let response = match self
            .client
            .get(&url)
            .header("Accept-Language", "es-CL,es;q=0.9")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Computrabajo navigation error: {}", e);
                return Vec::new();
            }
        };

        let status = response.status();
        if is_blocking_status(status) {
            warn!("Computrabajo blocked the request: {}", status);
            return Vec::new();
        }
        if !status.is_success() {
            warn!("Computrabajo returned unexpected status: {}", status);
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read Computrabajo response body: {}", e);
                return Vec::new();
            }
        };

        let postings = parse_listing(&body, &self.base_url, location, self.max_results);
        debug!(
            "Computrabajo yielded {} postings for '{}'",
            postings.len(),
            query
        );
        postings
    }
}

fn parse_listing(html: &str, base_url: &str, location: &str, max_results: usize) -> Vec<JobPosting> {
    if NO_RESULTS_MARKERS.iter().any(|marker| html.contains(marker)) {
        info!("Computrabajo found no jobs for this query");
        return Vec::new();
    }

    let document = Html::parse_document(html);

    let mut articles: Vec<ElementRef> = Vec::new();
    for selector_str in ARTICLE_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            articles = document.select(&selector).collect();
            if !articles.is_empty() {
                break;
            }
        }
    }
    debug!("Found {} article nodes", articles.len());

    let mut postings = Vec::new();
    for article in articles {
        // Title anchor carries both the label and the posting's identity.
        let Some((title, href)) = first_anchor(article, TITLE_SELECTORS) else {
            continue;
        };
        let url = absolutize(base_url, &href);
        if url.is_empty() {
            continue;
        }

        postings.push(JobPosting {
            title,
            company: first_text(article, COMPANY_SELECTORS)
                .unwrap_or_else(|| "Confidencial".to_string()),
            location: first_text(article, LOCATION_SELECTORS)
                .unwrap_or_else(|| location.to_string()),
            url,
            description: first_text(article, DESCRIPTION_SELECTORS).unwrap_or_default(),
            date_posted: first_text(article, DATE_SELECTORS).unwrap_or_default(),
            source: JobSource::Computrabajo,
            tags: Vec::new(),
            logo: String::new(),
            match_score: None,
        });

        if postings.len() == max_results {
            break;
        }
    }
    postings
}

/// First selector in the chain that yields non-empty text.
fn first_text(element: ElementRef, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(node) = element.select(&selector).next() {
                let text = clean_text(&node.text().collect::<Vec<_>>().join(" "));
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// First selector in the chain that yields an anchor with text and an href.
fn first_anchor(element: ElementRef, selectors: &[&str]) -> Option<(String, String)> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(node) = element.select(&selector).next() {
                let text = clean_text(&node.text().collect::<Vec<_>>().join(" "));
                let href = node.value().attr("href").unwrap_or_default().to_string();
                if !text.is_empty() && !href.is_empty() {
                    return Some((text, href));
                }
            }
        }
    }
    None
}

/// Lowercase, fold common Spanish accents, keep alphanumerics and turn
/// spaces into hyphens for the search URL path.
fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join("-")
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        _ => c,
    }
}
