// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::core::{AppConfig, DocumentFetcher, ThemeClient};
use crate::template_processor::TemplateProcessor;
use crate::types::resume::Resume;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/api/resume?<url>")]
pub async fn get_resume(
    url: Option<String>,
    state: &State<AppState>,
) -> Result<Json<Resume>, ApiError> {
    handlers::get_resume_handler(url, state).await
}

#[post("/resume", data = "<form>")]
pub async fn render_resume(
    form: Form<RenderForm>,
    state: &State<AppState>,
) -> Result<RelayedResponse, ApiError> {
    handlers::render_resume_handler(form.into_inner(), state).await
}

#[get("/")]
pub async fn index(state: &State<AppState>) -> Result<RawHtml<String>, ApiError> {
    handlers::index_handler(state).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request", "BAD_REQUEST"))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Not found", "NOT_FOUND"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format", "UNPROCESSABLE_ENTITY"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error", "INTERNAL_ERROR"))
}

/// Assemble the server without launching it
pub fn build_rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let state = AppState {
        fetcher: DocumentFetcher::new(&config.user_agent)?,
        themes: ThemeClient::new(config)?,
        templates: TemplateProcessor::new(config.index_template.clone()),
    };

    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register("/", catchers![bad_request, not_found, unprocessable, internal_error])
        .mount("/", routes![get_resume, render_resume, index, options]))
}

pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let rocket = build_rocket(&config)?;

    info!("Starting resume scraper on http://{}:{}", config.address, config.port);
    info!("Theme service: {}", config.render_base_url);

    rocket
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
