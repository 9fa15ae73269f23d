use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

pub type HtmlResult = Result<Html<String>, AppError>;

const INTERNAL_MESSAGE: &str = "Something went wrong on our end. Please try again later.";

/// Flash-style message shown above page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_error { "notice notice-error" } else { "notice notice-success" }
    }
}

#[derive(Template)]
#[template(path = "errors/error.html")]
struct ErrorTemplate {
    code: u16,
    title: String,
    message: String,
}

pub fn render<T: Template>(template: &T) -> HtmlResult {
    template
        .render()
        .map(Html)
        .map_err(|err| AppError::internal(format!("failed to render page: {err}")))
}

/// Renders `template` under `status`; a render failure becomes the 500 page.
pub fn render_with_status<T: Template>(status: StatusCode, template: &T) -> Response {
    match render(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn error_page(status: StatusCode, message: impl Into<String>) -> Response {
    let page = ErrorTemplate {
        code: status.as_u16(),
        title: status.canonical_reason().unwrap_or("Error").to_string(),
        message: message.into(),
    };
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render error page");
            (status, Html(format!("<h1>{}</h1>", status.as_u16()))).into_response()
        }
    }
}

pub(crate) fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}

/// Text shown to the visitor; internal details stay in the log.
pub(crate) fn client_message(err: &AppError) -> &str {
    match err {
        AppError::Internal(_) => INTERNAL_MESSAGE,
        _ => err.message(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            log_app_error(&self, status);
        }
        error_page(status, client_message(&self))
    }
}
