use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::views::{ViewError, ViewRenderer};
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "internal server error";

pub fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show to a client. Server-side failures are logged and
/// replaced with a generic message.
fn public_message(status: StatusCode, err: &ApplicationError) -> String {
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
        INTERNAL_MESSAGE.to_string()
    } else {
        err.message().to_string()
    }
}

/// Error returned by the JSON API.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(&err);
        let message = public_message(status, &err);
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// Error returned by the HTML pages, already rendered.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    body: String,
}

impl PageError {
    pub fn render(views: &ViewRenderer, err: ApplicationError) -> Self {
        let status = status_for(&err);
        let message = public_message(status, &err);
        match views.error_page(status, &message) {
            Ok(body) => Self { status, body },
            Err(view_err) => view_err.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ViewError> for PageError {
    fn from(err: ViewError) -> Self {
        tracing::error!(error = %err, "view rendering failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}
