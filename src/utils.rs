// src/utils.rs
use anyhow::Result;

/// Theme names end up in the render URL path
pub fn validate_theme_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("missing theme");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        anyhow::bail!("invalid theme name: {}", name);
    }

    Ok(())
}

/// Escape text for insertion into HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
