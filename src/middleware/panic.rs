use std::any::Any;

use axum::{http::StatusCode, response::Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::response::error_page;

pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_to_html)
}

fn panic_to_html(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };

    let client_message = if cfg!(debug_assertions) {
        format!("internal server error: {}", details)
    } else {
        "internal server error".to_string()
    };

    error_page(StatusCode::INTERNAL_SERVER_ERROR, client_message)
}
