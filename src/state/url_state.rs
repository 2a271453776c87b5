//! URL state encoding/decoding.
//!
//! The page query string can preselect a view (`parameter`, `time_index`,
//! `include_wind`) and override the backend origin (`backend`). The current
//! selection is mirrored back with `replaceState` so a reload keeps the view.

use super::Parameter;
use url::{form_urlencoded, Url};

/// Parsed URL parameters.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UrlParams {
    pub parameter: Option<Parameter>,
    pub time_index: Option<usize>,
    pub include_wind: Option<bool>,
    pub backend: Option<String>,
}

impl UrlParams {
    /// Whether the URL names any part of a view.
    pub fn has_view(&self) -> bool {
        self.parameter.is_some() || self.time_index.is_some() || self.include_wind.is_some()
    }
}

/// Parse a query string (with or without the leading `?`).
///
/// Values are percent-decoded. Unknown keys and unparseable values are
/// ignored.
pub fn parse_query(query: &str) -> UrlParams {
    let mut params = UrlParams::default();

    let query = query.trim_start_matches('?');
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "parameter" => params.parameter = Parameter::from_query_value(&value),
            "time_index" => params.time_index = value.parse().ok(),
            "include_wind" => params.include_wind = value.parse().ok(),
            "backend" => params.backend = parse_backend(&value),
            _ => {}
        }
    }

    params
}

/// Accepts only absolute http(s) URLs as a backend origin.
fn parse_backend(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Some(value.to_string())
        }
        _ => {
            log::warn!("Ignoring invalid backend override from URL: {}", value);
            None
        }
    }
}

/// Query string (with leading `?`) for a view, keeping a backend override.
pub fn build_query(
    parameter: Parameter,
    time_index: usize,
    include_wind: bool,
    backend: Option<&str>,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("parameter", parameter.query_value())
        .append_pair("time_index", &time_index.to_string())
        .append_pair("include_wind", if include_wind { "true" } else { "false" });
    if let Some(backend) = backend {
        query.append_pair("backend", backend);
    }
    format!("?{}", query.finish())
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let Some(window) = web_sys::window() else {
        return UrlParams::default();
    };
    match window.location().search() {
        Ok(search) => parse_query(&search),
        Err(_) => UrlParams::default(),
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}

/// Origin of the page hosting the panel.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Native builds have no page.
#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

/// Push the current selection to the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(
    parameter: Parameter,
    time_index: usize,
    include_wind: bool,
    backend: Option<&str>,
) {
    let query = build_query(parameter, time_index, include_wind, backend);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(e) =
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query))
    {
        log::debug!("replaceState failed: {:?}", e);
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(
    _parameter: Parameter,
    _time_index: usize,
    _include_wind: bool,
    _backend: Option<&str>,
) {
}
