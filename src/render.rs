// src/render.rs
//! HTTP boundary to the external resume render service. Layout is not this
//! crate's concern: the service receives the resolved document plus a style
//! selector and answers with PDF bytes.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::RenderConfig;
use crate::types::{ResumeDocument, ResumeStyle};

const RENDER_ENDPOINT: &str = "/render";

pub struct RenderClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    document: &'a ResumeDocument,
    style: ResumeStyle,
}

impl RenderClient {
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// `render(document, style) -> bytes`.
    pub async fn render(&self, document: &ResumeDocument, style: ResumeStyle) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, RENDER_ENDPOINT);
        info!("Calling resume render service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&RenderRequest { document, style })
            .send()
            .await
            .context("Failed to reach render service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Render service returned {}: {}", status, body);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read render service response")?;
        Ok(bytes.to_vec())
    }
}
