// src/core/mod.rs
//! Configuration and the outbound HTTP collaborators

pub mod config_manager;
pub mod fetcher;
pub mod theme_client;

pub use config_manager::{AppConfig, ConfigManager, LoadedConfig};
pub use fetcher::DocumentFetcher;
pub use theme_client::{RenderedTheme, ThemeClient};
