// src/web/handlers/resume_handlers.rs
use crate::types::resume::Resume;
use crate::utils::validate_theme_name;
use crate::web::types::{api_error, ApiError, AppState, ErrorResponse, RelayedResponse, RenderForm};

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

fn require_url(url: Option<String>) -> Result<String, ApiError> {
    match url.map(|u| u.trim().to_string()) {
        Some(url) if !url.is_empty() => Ok(url),
        _ => {
            warn!("Rejected request without URL");
            Err(api_error(Status::BadRequest, "missing URL", "MISSING_URL"))
        }
    }
}

async fn extract(state: &AppState, url: &str) -> Result<Resume, ApiError> {
    state
        .fetcher
        .resume_for_url(url)
        .await
        .map_err(|e| (Status::InternalServerError, Json(ErrorResponse::from(e))))
}

pub async fn get_resume_handler(
    url: Option<String>,
    state: &State<AppState>,
) -> Result<Json<Resume>, ApiError> {
    let url = require_url(url)?;
    info!("Resume requested for {}", url);

    extract(state, &url).await.map(Json)
}

pub async fn render_resume_handler(
    form: RenderForm,
    state: &State<AppState>,
) -> Result<RelayedResponse, ApiError> {
    let url = require_url(form.url)?;
    let theme = form.theme.unwrap_or_default().trim().to_string();

    if let Err(e) = validate_theme_name(&theme) {
        warn!("Rejected theme '{}': {}", theme, e);
        return Err(api_error(Status::BadRequest, e.to_string(), "INVALID_THEME"));
    }

    info!("Themed resume requested for {} with '{}'", url, theme);

    let resume = extract(state, &url).await?;

    match state.themes.render(&theme, &resume).await {
        Ok(rendered) => {
            info!("Theme service answered {} for '{}'", rendered.status, theme);
            Ok(RelayedResponse(rendered))
        }
        Err(e) => {
            error!("Theme rendering failed: {:#}", e);
            Err(api_error(
                Status::InternalServerError,
                format!("{:#}", e),
                "THEME_SERVICE_ERROR",
            ))
        }
    }
}
