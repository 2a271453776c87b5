//! URL construction for backend requests.
//!
//! Image requests carry a `t` token that strictly increases per builder, so
//! two requests for the same view never share a URL and cannot be served
//! from an intermediate cache.

use crate::state::Parameter;

/// What an image request renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderKind {
    /// One frame at a time index.
    Frame,
    /// The whole time series as one animated artifact.
    Animation,
}

impl RenderKind {
    pub fn label(&self) -> &'static str {
        match self {
            RenderKind::Frame => "frame",
            RenderKind::Animation => "animation",
        }
    }
}

/// Descriptor for one image fetch.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderRequest {
    pub kind: RenderKind,
    pub parameter: Parameter,
    /// `None` for animation requests, which cover every index.
    pub time_index: Option<usize>,
    pub include_wind: bool,
    /// Cache-busting token embedded in `url`.
    pub token: u64,
    pub url: String,
}

/// Builds request URLs against one backend origin.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    last_token: u64,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            last_token: 0,
        }
    }

    /// Single frame at `time_index`. The overlay flag is passed through even
    /// for parameters that ignore it; the backend decides.
    pub fn build_frame_request(
        &mut self,
        parameter: Parameter,
        time_index: usize,
        include_wind: bool,
    ) -> RenderRequest {
        let token = self.next_token(now_millis());
        let url = format!(
            "{}/static-image?{}&t={}",
            self.base_url,
            view_query(parameter, time_index, include_wind),
            token
        );
        RenderRequest {
            kind: RenderKind::Frame,
            parameter,
            time_index: Some(time_index),
            include_wind,
            token,
            url,
        }
    }

    /// Animated artifact over the whole time domain.
    pub fn build_animation_request(
        &mut self,
        parameter: Parameter,
        include_wind: bool,
    ) -> RenderRequest {
        let token = self.next_token(now_millis());
        let url = format!(
            "{}/parameter-animation?parameter={}&include_wind={}&t={}",
            self.base_url,
            parameter.query_value(),
            include_wind,
            token
        );
        RenderRequest {
            kind: RenderKind::Animation,
            parameter,
            time_index: None,
            include_wind,
            token,
            url,
        }
    }

    /// Endpoint that persists the view and answers with a share path.
    pub fn share_link_url(
        &self,
        parameter: Parameter,
        time_index: usize,
        include_wind: bool,
    ) -> String {
        format!(
            "{}/create-shareable-map?{}",
            self.base_url,
            view_query(parameter, time_index, include_wind)
        )
    }

    pub fn time_info_url(&self) -> String {
        format!("{}/time-info", self.base_url)
    }

    /// Wall-clock milliseconds, bumped past the previous token if the clock
    /// has not advanced (or went backwards).
    fn next_token(&mut self, now_ms: u64) -> u64 {
        let token = now_ms.max(self.last_token + 1);
        self.last_token = token;
        token
    }
}

/// Query fields identifying a view.
fn view_query(parameter: Parameter, time_index: usize, include_wind: bool) -> String {
    format!(
        "parameter={}&time_index={}&include_wind={}",
        parameter.query_value(),
        time_index,
        include_wind
    )
}

fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
