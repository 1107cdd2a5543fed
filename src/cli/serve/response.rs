//! HTTP response handlers.

use crate::asset::mime;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Cache policy for fingerprinted assets: content hash in the URL means
/// the response can be cached forever.
const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Respond with a rendered HTML document.
pub fn respond_html(request: Request, status: u16, body: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, status, mime::types::HTML);
    }
    send_body(request, status, mime::types::HTML, body.into_bytes())
}

/// Respond with a static asset file, with aggressive caching.
pub fn respond_asset(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let response = Response::from_data(body)
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", ASSET_CACHE_CONTROL));
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(
        request,
        503,
        mime::types::PLAIN,
        b"503 Service Unavailable".to_vec(),
    )
}

/// Respond with 502 after an upstream proxy failure.
pub fn respond_bad_gateway(request: Request, error: &str) -> Result<()> {
    let body = format!("502 Bad Gateway: {error}");
    send_body(request, 502, mime::types::PLAIN, body.into_bytes())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

pub fn send_body(
    request: Request,
    status: u16,
    content_type: &str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(
            Header::from_bytes("Content-Type", content_type)
                .unwrap_or_else(|_| make_header("Content-Type", mime::types::OCTET_STREAM)),
        );
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    // Infallible for the constant header names/values used here
    Header::from_bytes(key, value).unwrap()
}
