//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every helper returns `Result<_, String>`; a non-2xx response becomes
//! `"HTTP {status}: {body}"`.

use crate::shared::config::config;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set, otherwise the current
/// window location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = config().api;
    if !api.base_url.trim().is_empty() {
        return api.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.backend_port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&format!("/api/v1/document/{}", id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encodes one path segment (definition names, keys).
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("HTTP {} from {}", status, response.url());
    Err(format!("HTTP {}: {}", status, body))
}

async fn send(builder: RequestBuilder) -> Result<Response, String> {
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, String> {
    let request: Request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(Request::get(&api_url(path))).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send_json(Request::post(&api_url(path)), body).await?;
    parse(response).await
}

/// POST whose response body is ignored.
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send_json(Request::post(&api_url(path)), body).await.map(|_| ())
}

/// POST without a request body (commands such as `unassign`).
pub async fn post_empty(path: &str) -> Result<(), String> {
    send(Request::post(&api_url(path))).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send_json(Request::put(&api_url(path)), body).await.map(|_| ())
}

pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send_json(Request::patch(&api_url(path)), body).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    send(Request::delete(&api_url(path))).await.map(|_| ())
}

/// Multipart upload of a single file under the form field `file`.
pub async fn upload_file(path: &str, file: &web_sys::File) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{:?}", e))?;
    let request = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

/// Raw response bytes (file downloads).
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let response = check(response).await?;
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("permit"), "permit");
        assert_eq!(segment("bezwaar zaak"), "bezwaar%20zaak");
        assert_eq!(segment("a/b"), "a%2Fb");
    }
}
