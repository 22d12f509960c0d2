// src/lib.rs
//! Scrapes a public profile page into a JSON Resume document and serves it
//! over HTTP, optionally rendered through a remote theme service.

pub mod core;
pub mod error;
pub mod extraction;
pub mod template_processor;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::core::{AppConfig, ConfigManager, DocumentFetcher, ThemeClient};
pub use error::ResumeError;
pub use extraction::{assemble, resume_from_html};
pub use types::resume::Resume;
pub use web::{build_rocket, start_web_server};
