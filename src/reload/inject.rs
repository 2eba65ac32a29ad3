// src/reload/inject.rs

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Script tag added to every served HTML page so browsers join the reload
/// channel.
pub const RELOAD_SCRIPT_TAG: &str = "<script src=\"/__livereload.js\"></script>";

/// Middleware that rewrites `text/html` responses to carry the reload script
/// tag. Everything else passes through untouched.
pub async fn inject_reload_script(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if !is_html(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "failed to buffer HTML response for script injection");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let injected = insert_script_tag(&bytes);
    // The buffered body has a new length; let hyper recompute it.
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(injected))
}

/// Place the script tag just ahead of the closing `</body>` tag, falling back
/// to a plain append for fragments without one.
pub fn insert_script_tag(html: &[u8]) -> Vec<u8> {
    let lower = html.to_ascii_lowercase();
    let insert_at = find_subslice(&lower, b"</body>").unwrap_or(html.len());

    let mut out = Vec::with_capacity(html.len() + RELOAD_SCRIPT_TAG.len());
    out.extend_from_slice(&html[..insert_at]);
    out.extend_from_slice(RELOAD_SCRIPT_TAG.as_bytes());
    out.extend_from_slice(&html[insert_at..]);
    out
}

fn is_html(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
