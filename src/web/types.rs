// src/web/types.rs
use crate::core::{DocumentFetcher, RenderedTheme, ThemeClient};
use crate::error::ResumeError;
use crate::template_processor::TemplateProcessor;
use rocket::form::FromForm;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{Request, Response};

/// Shared, read-only collaborators handed to every request
pub struct AppState {
    pub fetcher: DocumentFetcher,
    pub themes: ThemeClient,
    pub templates: TemplateProcessor,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_code: error_code.into(),
        }
    }
}

pub type ApiError = (Status, Json<ErrorResponse>);

pub fn api_error(status: Status, error: impl Into<String>, error_code: &str) -> ApiError {
    (status, Json(ErrorResponse::new(error, error_code)))
}

impl From<ResumeError> for ErrorResponse {
    fn from(err: ResumeError) -> Self {
        Self::new(err.to_string(), err.kind())
    }
}

#[derive(Debug, FromForm)]
pub struct RenderForm {
    pub url: Option<String>,
    pub theme: Option<String>,
}

/// Theme service answer passed through with its own status and content type
pub struct RelayedResponse(pub RenderedTheme);

impl<'r> Responder<'r, 'static> for RelayedResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let RenderedTheme {
            status,
            content_type,
            body,
        } = self.0;

        let mut binding = Response::build();
        let response = binding
            .status(Status::new(status))
            .sized_body(body.len(), std::io::Cursor::new(body));

        if let Some(content_type) = content_type {
            response.raw_header("Content-Type", content_type);
        }

        response.ok()
    }
}
