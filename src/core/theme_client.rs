// src/core/theme_client.rs
//! Client for the remote theme rendering service and its theme catalog

use crate::core::config_manager::AppConfig;
use crate::types::resume::{Resume, ThemeRenderRequest};
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use tracing::{info, trace, warn};

const THEME_ENDPOINT: &str = "/theme";

/// Response of the rendering service, relayed to the caller unchanged
#[derive(Debug, Clone)]
pub struct RenderedTheme {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct ThemeClient {
    client: reqwest::Client,
    base_url: String,
    catalog_url: Option<String>,
    catalog_selector: String,
}

impl ThemeClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.render_base_url.clone(),
            catalog_url: config.catalog_url.clone(),
            catalog_selector: config.catalog_selector.clone(),
        })
    }

    pub fn render_url(&self, theme: &str) -> String {
        format!("{}{}/{}", self.base_url, THEME_ENDPOINT, theme)
    }

    /// POST `{"resume": ...}` to the theme endpoint. Any HTTP status is a
    /// successful relay; only transport failures are errors.
    pub async fn render(&self, theme: &str, resume: &Resume) -> Result<RenderedTheme> {
        let url = self.render_url(theme);
        info!("Rendering resume with theme '{}': {}", theme, url);

        let response = self
            .client
            .post(&url)
            .json(&ThemeRenderRequest { resume })
            .send()
            .await
            .with_context(|| format!("Failed to call theme service at {}", url))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .context("Failed to read theme service response")?
            .to_vec();

        trace!("Theme service answered {} ({} bytes)", status, body.len());

        Ok(RenderedTheme {
            status,
            content_type,
            body,
        })
    }

    /// Theme names listed on the catalog page, or nothing when no catalog is configured
    pub async fn list_themes(&self) -> Result<Vec<String>> {
        let Some(catalog_url) = &self.catalog_url else {
            return Ok(Vec::new());
        };

        let response = self
            .client
            .get(catalog_url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch theme catalog {}", catalog_url))?;

        if !response.status().is_success() {
            anyhow::bail!("Theme catalog returned HTTP {}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read theme catalog body")?;

        let themes = parse_theme_catalog(&html, &self.catalog_selector)?;
        if themes.is_empty() {
            warn!(
                "No themes matched '{}' on {}",
                self.catalog_selector, catalog_url
            );
        }
        Ok(themes)
    }
}

/// Trimmed, de-duplicated, non-empty texts of the nodes matching `selector`
pub fn parse_theme_catalog(html: &str, selector: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("Invalid catalog selector '{}': {}", selector, e))?;
    let document = Html::parse_document(html);

    let mut themes: Vec<String> = Vec::new();
    for node in document.select(&selector) {
        let name = node.text().collect::<String>().trim().to_string();
        if !name.is_empty() && !themes.contains(&name) {
            themes.push(name);
        }
    }

    Ok(themes)
}
