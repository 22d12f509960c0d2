// src/template_processor.rs
use crate::utils::escape_html;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

pub struct TemplateProcessor {
    index_template: PathBuf,
}

impl TemplateProcessor {
    pub fn new(index_template: PathBuf) -> Self {
        Self { index_template }
    }

    /// Replace every `{{key}}` placeholder by its value
    pub fn process_variables(content: &str, vars: &HashMap<String, String>) -> String {
        vars.iter().fold(content.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{{{}}}}}", key), value)
        })
    }

    pub fn theme_options(themes: &[String]) -> String {
        themes
            .iter()
            .map(|theme| {
                let theme = escape_html(theme);
                format!(r#"<option value="{}">{}</option>"#, theme, theme)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the index page with the given theme names as `<option>`s
    pub async fn render_index(&self, themes: &[String]) -> Result<String> {
        let template = tokio::fs::read_to_string(&self.index_template)
            .await
            .with_context(|| {
                format!(
                    "Failed to read index template: {}",
                    self.index_template.display()
                )
            })?;

        let mut vars = HashMap::new();
        vars.insert("themes".to_string(), Self::theme_options(themes));

        Ok(Self::process_variables(&template, &vars))
    }
}
