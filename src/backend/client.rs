//! HTTP GET against the rendering backend.
//!
//! On WASM this uses reqwest's fetch-based client. Natively it uses the
//! blocking client; callers run it on a worker thread.

use super::types::BackendError;
use serde::de::DeserializeOwned;

/// Fetches a response body, treating non-2xx statuses as errors.
#[cfg(target_arch = "wasm32")]
pub async fn get_bytes(url: &str) -> Result<Vec<u8>, BackendError> {
    log::debug!("GET {}", url);
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    Ok(body.to_vec())
}

/// Fetches a response body, treating non-2xx statuses as errors.
#[cfg(not(target_arch = "wasm32"))]
pub async fn get_bytes(url: &str) -> Result<Vec<u8>, BackendError> {
    log::debug!("GET {}", url);
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    let body = response.bytes()?;
    Ok(body.to_vec())
}

/// Fetches and deserializes a JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, BackendError> {
    let body = get_bytes(url).await?;
    Ok(serde_json::from_slice(&body)?)
}
