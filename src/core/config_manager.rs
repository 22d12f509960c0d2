// src/core/config_manager.rs
//! Server configuration: optional config.yaml, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the theme rendering service; themes live under `/theme/<name>`
    pub render_base_url: String,
    /// Page listing the available themes. Unset disables the listing on `/`.
    pub catalog_url: Option<String>,
    pub catalog_selector: String,
    pub index_template: PathBuf,
    pub user_agent: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8080,
            render_base_url: "http://themes.jsonresume.org".to_string(),
            catalog_url: None,
            catalog_selector: "a[href*='/theme/']".to_string(),
            index_template: PathBuf::from("templates/index.html"),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: AppConfig,
    #[serde(default)]
    production: AppConfig,
}

/// Configuration together with where it came from, reported once logging is up
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub environment: String,
    /// File the configuration was read from, `None` when running on defaults
    pub source: Option<PathBuf>,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load the configuration for the current environment.
    ///
    /// A missing file at the default location falls back to defaults; an
    /// explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<LoadedConfig> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<LoadedConfig> {
        let environment = Self::get_environment(&lookup);

        let source = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()),
        };

        let config = match &source {
            Some(path) => Self::load_from_file(path, &environment)?,
            None => AppConfig::default(),
        };

        Ok(LoadedConfig {
            config: Self::apply_overrides(config, lookup)?,
            environment,
            source,
        })
    }

    /// Section of config.yaml in use: `RESUME_ENV`, then `ENVIRONMENT`, then "local"
    pub fn get_environment(lookup: &impl Fn(&str) -> Option<String>) -> String {
        lookup("RESUME_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str, environment: &str) -> Result<AppConfig> {
        let file: ConfigFile = serde_yaml::from_str(content)?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    /// Apply `ROCKET_PORT`, `THEMES_URL` and `THEME_CATALOG_URL` on top of `config`
    pub fn apply_overrides(
        mut config: AppConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<AppConfig> {
        if let Some(port) = lookup("ROCKET_PORT") {
            config.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        if let Some(url) = lookup("THEMES_URL") {
            config.render_base_url = url;
        }
        if let Some(url) = lookup("THEME_CATALOG_URL") {
            config.catalog_url = Some(url).filter(|u| !u.is_empty());
        }

        config.render_base_url = config.render_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
