use axum::{
    body::{Bytes, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    response::{client_message, error_page, log_app_error},
};

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Turns plain-text error responses (extractor rejections, unmatched
/// routes) into the HTML error page.
pub async fn html_error_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if !response.status().is_client_error() && !response.status().is_server_error() {
        return response;
    }

    if is_html_response(&response) {
        return response;
    }

    let status = response.status();
    let (parts, body) = response.into_parts();
    let message = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => body_bytes_to_message(status, bytes),
        Err(_) => default_message(status),
    };
    let app_error = app_error_from_status(status, message);
    if status.is_server_error() {
        log_app_error(&app_error, status);
    }

    let mut new_response = error_page(status, client_message(&app_error));
    copy_headers(&parts.headers, &mut new_response);
    new_response
}

fn is_html_response(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains("text/html"))
        .unwrap_or(false)
}

fn body_bytes_to_message(status: StatusCode, bytes: Bytes) -> String {
    let message = String::from_utf8_lossy(&bytes).trim().to_string();
    if message.is_empty() {
        return default_message(status);
    }
    message
}

fn default_message(status: StatusCode) -> String {
    match status {
        StatusCode::NOT_FOUND => "The page you are looking for does not exist.".to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    }
}

fn app_error_from_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(message),
        _ if status.is_client_error() => AppError::bad_request(message),
        _ => AppError::internal(message),
    }
}

fn copy_headers(src: &HeaderMap, dest: &mut Response) {
    for (name, value) in src {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        dest.headers_mut().insert(name.clone(), value.clone());
    }
}
