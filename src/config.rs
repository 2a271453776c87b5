//! Panel configuration.
//!
//! The panel talks to a single rendering backend. Nothing here is persisted;
//! the only override is the `backend` query parameter of the page URL.

use std::time::Duration;

/// Backend origin used when nothing overrides it.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Cadence of client-side animation playback.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// Runtime configuration for the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Origin of the rendering backend, without a trailing slash.
    pub backend_url: String,

    /// Interval between animation ticks while playing.
    pub frame_interval: Duration,

    /// Origin prepended to share paths returned by the backend.
    /// When unset, the page origin is used (or the backend origin natively).
    pub share_origin: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            share_origin: None,
        }
    }
}

impl PanelConfig {
    /// Replaces the backend origin, normalizing away trailing slashes.
    ///
    /// Blank values are ignored.
    pub fn with_backend_url(mut self, url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            log::warn!("Ignoring empty backend override");
        } else {
            log::info!("Using backend override: {}", trimmed);
            self.backend_url = trimmed.to_string();
        }
        self
    }

    /// Origin for shareable links, given the page origin if one is known.
    pub fn resolve_share_origin(&self, page_origin: Option<String>) -> String {
        self.share_origin
            .clone()
            .or(page_origin)
            .unwrap_or_else(|| self.backend_url.clone())
    }
}
