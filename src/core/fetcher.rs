// src/core/fetcher.rs
use crate::error::ResumeError;
use crate::extraction::resume_from_html;
use crate::types::resume::Resume;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{error, info};

/// Retrieves profile pages. One GET per call: no retries, no timeout.
#[derive(Clone)]
pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, ResumeError> {
        if url.trim().is_empty() {
            return Err(ResumeError::fetch(url, "empty URL"));
        }

        info!("Fetching profile page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResumeError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResumeError::fetch(url, format!("HTTP error: {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| ResumeError::fetch(url, format!("Failed to read response body: {}", e)))
    }

    /// Fetch `url` and map the page into a résumé
    pub async fn resume_for_url(&self, url: &str) -> Result<Resume, ResumeError> {
        let html = self.fetch(url).await?;

        match resume_from_html(&html, url) {
            Ok(resume) => {
                info!(
                    "Extracted resume for {}: {} work, {} education, {} skill(s)",
                    resume.basics.name,
                    resume.work.len(),
                    resume.education.len(),
                    resume.skills.len()
                );
                Ok(resume)
            }
            Err(e) => {
                error!("Extraction failed for {}: {}", url, e);
                Err(e)
            }
        }
    }
}
