// src/web/handlers/index_handlers.rs
use crate::web::types::{api_error, ApiError, AppState};

use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::{error, warn};

pub async fn index_handler(state: &State<AppState>) -> Result<RawHtml<String>, ApiError> {
    // The page stays usable without the theme list
    let themes = state.themes.list_themes().await.unwrap_or_else(|e| {
        warn!("Failed to list themes: {:#}", e);
        Vec::new()
    });

    match state.templates.render_index(&themes).await {
        Ok(html) => Ok(RawHtml(html)),
        Err(e) => {
            error!("Failed to render index page: {:#}", e);
            Err(api_error(
                Status::InternalServerError,
                format!("{:#}", e),
                "TEMPLATE_ERROR",
            ))
        }
    }
}
