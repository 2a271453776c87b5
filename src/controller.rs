//! View controller: turns user intents into state transitions and backend
//! commands, and applies backend results to the displayed view.
//!
//! Every request trigger is an explicit call here. Intents never perform I/O
//! themselves; they queue [`Command`]s that the update loop drains on its
//! next pass, so each mutation schedules its own request after the mutation
//! has been applied.

use crate::backend::{BackendError, TimeInfo};
use crate::config::PanelConfig;
use crate::request::{RenderRequest, RequestBuilder};
use crate::state::url_state::UrlParams;
use crate::state::{
    AnimationController, AnimationState, ErrorKind, Parameter, ParameterSelection,
    PendingRequest, RequestLedger, TimeIndexStore, TimeOptions, TimeStep, ViewState,
    HOURS_PER_DAY,
};
use std::collections::VecDeque;
use std::fmt::Display;
use std::time::Duration;
use web_time::Instant;

/// Backend work requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    FetchImage { seq: u64, request: RenderRequest },
    CreateShareLink { seq: u64, url: String },
}

pub struct ViewController {
    selection: ParameterSelection,
    time: TimeIndexStore,
    time_options: TimeOptions,
    animation: AnimationController,
    requests: RequestBuilder,
    ledger: RequestLedger,
    view: ViewState,
    share_origin: String,
    commands: VecDeque<Command>,
}

impl ViewController {
    pub fn new(config: &PanelConfig, share_origin: String) -> Self {
        Self {
            selection: ParameterSelection::default(),
            time: TimeIndexStore::default(),
            time_options: TimeOptions::fallback(),
            animation: AnimationController::new(config.frame_interval),
            requests: RequestBuilder::new(config.backend_url.clone()),
            ledger: RequestLedger::default(),
            view: ViewState::default(),
            share_origin,
            commands: VecDeque::new(),
        }
    }

    // ------------------------------------------------------------------
    // Read access for the UI
    // ------------------------------------------------------------------

    pub fn parameter(&self) -> Parameter {
        self.selection.parameter()
    }

    pub fn include_wind(&self) -> bool {
        self.selection.include_wind()
    }

    /// The overlay checkbox is disabled when the parameter rejects overlays.
    pub fn overlay_enabled(&self) -> bool {
        self.selection.parameter().supports_overlay()
    }

    pub fn time_index(&self) -> usize {
        self.time.index()
    }

    pub fn time_label(&self) -> Option<&str> {
        self.time_options.label(self.time.index())
    }

    pub fn time_options(&self) -> &TimeOptions {
        &self.time_options
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    /// Step buttons and the time selector are disabled while playing.
    pub fn step_controls_enabled(&self) -> bool {
        !self.animation.is_playing()
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.animation.time_until_tick(now)
    }

    pub fn is_loading(&self) -> bool {
        self.ledger.is_loading()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.view.error
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.view.error_message()
    }

    pub fn share_link(&self) -> Option<&str> {
        self.view.share_link.as_deref()
    }

    /// Request that produced the artifact currently on screen.
    pub fn current_artifact(&self) -> Option<&RenderRequest> {
        self.view.artifact.as_ref()
    }

    pub fn time_info_url(&self) -> String {
        self.requests.time_info_url()
    }

    // ------------------------------------------------------------------
    // User intents
    // ------------------------------------------------------------------

    /// Selects a parameter. Clears the overlay and leaves animation mode.
    pub fn set_parameter(&mut self, parameter: Parameter) {
        log::info!("Parameter selected: {}", parameter.query_value());
        self.selection.set_parameter(parameter);
        self.animation.stop();
    }

    /// Returns false if the current parameter rejects overlays.
    pub fn set_include_wind(&mut self, include_wind: bool) -> bool {
        let accepted = self.selection.set_include_wind(include_wind);
        if !accepted {
            log::debug!(
                "Overlay ignored for parameter {}",
                self.selection.parameter().query_value()
            );
        }
        accepted
    }

    pub fn step_time(&mut self, step: TimeStep) {
        let index = self.time.step(step);
        log::debug!("Time stepped {:?} to {}", step, index);
        self.after_time_change();
    }

    /// Indices outside `0..HOURS_PER_DAY` are ignored.
    pub fn select_time(&mut self, index: usize) {
        if index >= HOURS_PER_DAY {
            log::warn!("Ignoring out-of-range time selection: {}", index);
            return;
        }
        self.time.set_index(index);
        log::debug!("Time selected: {}", index);
        self.after_time_change();
    }

    /// Play/pause. Entering `Playing` shows the current index right away.
    pub fn toggle_animation(&mut self, now: Instant) {
        if self.animation.toggle(now) == AnimationState::Playing {
            self.request_frame();
        }
    }

    pub fn stop_animation(&mut self) {
        self.animation.stop();
    }

    /// Renders the current (parameter, time, overlay) as one frame.
    pub fn request_frame(&mut self) {
        let request = self.requests.build_frame_request(
            self.selection.parameter(),
            self.time.index(),
            self.selection.include_wind(),
        );
        self.issue_image(request);
    }

    /// Renders the full time series. Client-side playback stops since the
    /// artifact animates itself.
    pub fn request_animation(&mut self) {
        self.animation.stop();
        let request = self
            .requests
            .build_animation_request(self.selection.parameter(), self.selection.include_wind());
        self.issue_image(request);
    }

    pub fn create_share_link(&mut self) {
        self.view.error = None;
        let url = self.requests.share_link_url(
            self.selection.parameter(),
            self.time.index(),
            self.selection.include_wind(),
        );
        let seq = self.ledger.begin(PendingRequest::ShareLink);
        log::debug!("Queued share link request #{}: {}", seq, url);
        self.commands.push_back(Command::CreateShareLink { seq, url });
    }

    pub fn dismiss_share_link(&mut self) {
        self.view.share_link = None;
    }

    /// Applies a view named in the page URL. Returns true if a frame was
    /// requested for it.
    pub fn restore_view(&mut self, params: &UrlParams) -> bool {
        if !params.has_view() {
            return false;
        }
        if let Some(parameter) = params.parameter {
            self.selection.set_parameter(parameter);
        }
        if let Some(index) = params.time_index {
            if index < HOURS_PER_DAY {
                self.time.set_index(index);
            } else {
                log::warn!("Ignoring out-of-range time index from URL: {}", index);
            }
        }
        if let Some(include_wind) = params.include_wind {
            self.selection.set_include_wind(include_wind);
        }
        log::info!(
            "Restored view from URL: {} @ {}",
            self.selection.parameter().query_value(),
            self.time.index()
        );
        self.request_frame();
        true
    }

    /// Advances playback if a tick is due. Returns true if it ticked.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.animation.poll(now) {
            return false;
        }
        self.time.step(TimeStep::Forward);
        self.request_frame();
        true
    }

    // ------------------------------------------------------------------
    // Backend results
    // ------------------------------------------------------------------

    /// Installs the time labels, falling back to hourly labels on failure.
    pub fn apply_time_info(&mut self, result: Result<TimeInfo, BackendError>) {
        self.time_options = match result {
            Ok(info) => {
                let options = info.into_options();
                log::info!(
                    "Loaded {} time label(s) for {}",
                    options.labels().len(),
                    options.date()
                );
                if !options.covers_domain() {
                    log::warn!(
                        "Backend supplied {} time labels for {} slots",
                        options.labels().len(),
                        HOURS_PER_DAY
                    );
                }
                options
            }
            Err(e) => {
                log::warn!("Failed to fetch time information: {}", e);
                TimeOptions::fallback()
            }
        };
    }

    /// Matches an image response to its request. Returns the payload when
    /// it should replace the displayed artifact.
    pub fn complete_image<T, E: Display>(&mut self, seq: u64, result: Result<T, E>) -> Option<T> {
        let Some(completion) = self.ledger.finish(seq) else {
            log::warn!("Response for unknown request #{}", seq);
            return None;
        };
        let PendingRequest::Image(request) = completion.request else {
            log::warn!("Request #{} is not an image request", seq);
            return None;
        };

        match result {
            Ok(payload) if completion.current => {
                log::debug!(
                    "Displaying {} #{} (t={})",
                    request.kind.label(),
                    seq,
                    request.token
                );
                self.view.artifact = Some(request);
                Some(payload)
            }
            Ok(_) => {
                log::debug!("Discarding stale {} response #{}", request.kind.label(), seq);
                None
            }
            Err(e) => {
                log::error!(
                    "Failed to fetch {} from {}: {}",
                    request.kind.label(),
                    request.url,
                    e
                );
                if completion.current {
                    self.view.error = Some(request.kind.into());
                }
                None
            }
        }
    }

    /// Matches a share response to its request and publishes the full URL.
    pub fn complete_share_link<E: Display>(&mut self, seq: u64, result: Result<String, E>) {
        let Some(completion) = self.ledger.finish(seq) else {
            log::warn!("Response for unknown request #{}", seq);
            return;
        };
        if !matches!(completion.request, PendingRequest::ShareLink) {
            log::warn!("Request #{} is not a share request", seq);
            return;
        }

        match result {
            Ok(path) if completion.current => {
                let url = join_share_url(&self.share_origin, &path);
                log::info!("Share link created: {}", url);
                self.view.share_link = Some(url);
            }
            Ok(_) => log::debug!("Discarding stale share response #{}", seq),
            Err(e) => {
                log::error!("Failed to create share link: {}", e);
                if completion.current {
                    self.view.error = Some(ErrorKind::ShareLink);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Command queue
    // ------------------------------------------------------------------

    pub fn take_commands(&mut self) -> Vec<Command> {
        self.commands.drain(..).collect()
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    fn after_time_change(&mut self) {
        if !self.animation.is_playing() {
            self.request_frame();
        }
    }

    fn issue_image(&mut self, request: RenderRequest) {
        self.view.error = None;
        let seq = self.ledger.begin(PendingRequest::Image(request.clone()));
        log::debug!(
            "Queued {} request #{} ({} in flight): {}",
            request.kind.label(),
            seq,
            self.ledger.in_flight(),
            request.url
        );
        self.commands.push_back(Command::FetchImage { seq, request });
    }
}

/// Full share URL from an origin and the path the backend returned.
fn join_share_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RenderKind;
    use crate::state::url_state::parse_query;

    const ORIGIN: &str = "http://panel.local";

    fn controller() -> ViewController {
        ViewController::new(&PanelConfig::default(), ORIGIN.to_string())
    }

    fn image_requests(commands: &[Command]) -> Vec<(u64, RenderRequest)> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::FetchImage { seq, request } => Some((*seq, request.clone())),
                _ => None,
            })
            .collect()
    }

    fn share_seq(commands: &[Command]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                Command::CreateShareLink { seq, .. } => Some(*seq),
                _ => None,
            })
            .expect("no share command")
    }

    #[test]
    fn test_end_to_end_frame_request() {
        let mut c = controller();
        c.set_parameter(Parameter::Pm25);
        c.set_include_wind(false);
        c.select_time(5);

        let requests = image_requests(&c.take_commands());
        assert_eq!(requests.len(), 1);
        let request = &requests[0].1;
        assert_eq!(request.kind, RenderKind::Frame);
        assert!(request
            .url
            .contains("?parameter=pm25&time_index=5&include_wind=false&t="));
    }

    #[test]
    fn test_parameter_change_resets_overlay_and_stops_animation() {
        let now = Instant::now();
        for toggles in 0..3 {
            let mut c = controller();
            assert!(c.set_include_wind(true));
            for _ in 0..toggles {
                c.toggle_animation(now);
            }

            c.set_parameter(Parameter::No2);
            assert!(!c.include_wind());
            assert_eq!(c.animation_state(), AnimationState::Stopped);
            assert_eq!(c.time_until_tick(now), None);
        }
    }

    #[test]
    fn test_parameter_change_does_not_fetch() {
        let mut c = controller();
        c.set_parameter(Parameter::Rain);
        assert!(!c.has_pending_commands());
    }

    #[test]
    fn test_overlay_ignored_for_wind_vector() {
        let mut c = controller();
        c.set_parameter(Parameter::WindVector);
        assert!(!c.overlay_enabled());
        assert!(!c.set_include_wind(true));
        assert!(!c.include_wind());
    }

    #[test]
    fn test_each_time_mutation_schedules_its_own_frame() {
        let mut c = controller();
        c.step_time(TimeStep::Forward);
        c.step_time(TimeStep::Forward);
        c.step_time(TimeStep::Backward);
        c.select_time(20);

        let indices: Vec<_> = image_requests(&c.take_commands())
            .into_iter()
            .map(|(_, r)| r.time_index)
            .collect();
        assert_eq!(indices, vec![Some(1), Some(2), Some(1), Some(20)]);
    }

    #[test]
    fn test_step_wraps_through_controller() {
        let mut c = controller();
        c.step_time(TimeStep::Backward);
        assert_eq!(c.time_index(), 23);
        c.step_time(TimeStep::Forward);
        assert_eq!(c.time_index(), 0);
    }

    #[test]
    fn test_select_time_outside_domain_is_ignored() {
        let mut c = controller();
        c.select_time(6);
        c.take_commands();

        c.select_time(HOURS_PER_DAY);
        assert_eq!(c.time_index(), 6);
        assert!(!c.has_pending_commands());

        c.select_time(HOURS_PER_DAY - 1);
        assert_eq!(c.time_index(), 23);
        c.step_time(TimeStep::Forward);
        assert_eq!(c.time_index(), 0);
    }

    #[test]
    fn test_decode_failure_reported_as_fetch_failure() {
        let mut c = controller();
        c.request_frame();
        let (seq, _) = image_requests(&c.take_commands())[0].clone();
        let shown: Option<()> = c.complete_image(
            seq,
            Err(BackendError::Decode("Unsupported artifact format".to_string())),
        );
        assert!(shown.is_none());
        assert_eq!(c.error(), Some(ErrorKind::FrameFetch));
        assert_eq!(c.current_artifact(), None);

        c.request_animation();
        let (seq, _) = image_requests(&c.take_commands())[0].clone();
        let shown: Option<()> =
            c.complete_image(seq, Err(BackendError::Decode("corrupt GIF".to_string())));
        assert!(shown.is_none());
        assert_eq!(c.error(), Some(ErrorKind::AnimationFetch));
        assert!(!c.is_loading());
    }

    #[test]
    fn test_playing_disables_steps_and_suppresses_fetch() {
        let now = Instant::now();
        let mut c = controller();
        c.toggle_animation(now);
        assert!(!c.step_controls_enabled());
        c.take_commands();

        // The state machine does not block a step, it only skips the fetch
        c.step_time(TimeStep::Forward);
        assert_eq!(c.time_index(), 1);
        assert!(!c.has_pending_commands());

        c.toggle_animation(now);
        assert!(c.step_controls_enabled());
        c.step_time(TimeStep::Forward);
        assert_eq!(image_requests(&c.take_commands()).len(), 1);
    }

    #[test]
    fn test_toggle_sequence_and_immediate_frame() {
        let now = Instant::now();
        let mut c = controller();

        c.toggle_animation(now);
        assert_eq!(c.animation_state(), AnimationState::Playing);
        assert_eq!(image_requests(&c.take_commands()).len(), 1);

        c.toggle_animation(now);
        assert_eq!(c.animation_state(), AnimationState::Paused);
        assert_eq!(c.time_until_tick(now), None);
        assert!(!c.has_pending_commands());

        c.toggle_animation(now);
        assert_eq!(c.animation_state(), AnimationState::Playing);
        assert!(c.time_until_tick(now).is_some());
        assert_eq!(image_requests(&c.take_commands()).len(), 1);

        c.stop_animation();
        assert_eq!(c.animation_state(), AnimationState::Stopped);
        assert_eq!(c.time_until_tick(now), None);
    }

    #[test]
    fn test_ticks_advance_and_request_one_frame_each() {
        let start = Instant::now();
        let mut c = controller();
        c.set_parameter(Parameter::O3);
        assert!(c.set_include_wind(true));
        c.select_time(22);
        c.toggle_animation(start);
        c.take_commands();

        assert!(!c.tick(start + Duration::from_millis(250)));
        assert!(c.tick(start + Duration::from_millis(500)));
        assert_eq!(c.time_index(), 23);
        let requests = image_requests(&c.take_commands());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1.time_index, Some(23));
        assert_eq!(requests[0].1.parameter, Parameter::O3);
        assert!(requests[0].1.include_wind);

        assert!(c.tick(start + Duration::from_millis(1000)));
        assert_eq!(c.time_index(), 0);
        let requests = image_requests(&c.take_commands());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1.time_index, Some(0));
    }

    #[test]
    fn test_no_ticks_when_paused_or_stopped() {
        let start = Instant::now();
        let mut c = controller();
        assert!(!c.tick(start + Duration::from_secs(10)));

        c.toggle_animation(start);
        c.toggle_animation(start);
        assert!(!c.tick(start + Duration::from_secs(10)));
        assert_eq!(c.time_index(), 0);
    }

    #[test]
    fn test_animation_request_stops_playback() {
        let now = Instant::now();
        let mut c = controller();
        c.toggle_animation(now);
        c.take_commands();

        c.request_animation();
        assert_eq!(c.animation_state(), AnimationState::Stopped);
        let requests = image_requests(&c.take_commands());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1.kind, RenderKind::Animation);
        assert_eq!(requests[0].1.time_index, None);
    }

    #[test]
    fn test_loading_and_error_lifecycle() {
        let mut c = controller();
        c.request_frame();
        assert!(c.is_loading());
        let (seq, _) = image_requests(&c.take_commands())[0].clone();

        let shown: Option<()> = c.complete_image(seq, Err("connection refused"));
        assert!(shown.is_none());
        assert!(!c.is_loading());
        assert_eq!(c.error(), Some(ErrorKind::FrameFetch));
        assert_eq!(
            c.error_message(),
            Some("Gagal mengambil gambar. Pastikan server berjalan.")
        );

        // A new request clears the error
        c.request_animation();
        assert_eq!(c.error(), None);
        let (seq, _) = image_requests(&c.take_commands())[0].clone();
        let shown: Option<()> = c.complete_image(seq, Err("HTTP 500"));
        assert!(shown.is_none());
        assert_eq!(c.error(), Some(ErrorKind::AnimationFetch));
    }

    #[test]
    fn test_successful_image_becomes_current_artifact() {
        let mut c = controller();
        c.select_time(4);
        let (seq, request) = image_requests(&c.take_commands())[0].clone();

        assert_eq!(c.complete_image::<_, String>(seq, Ok("pixels")), Some("pixels"));
        assert_eq!(c.current_artifact(), Some(&request));
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_stale_image_response_is_discarded() {
        let mut c = controller();
        c.select_time(1);
        c.select_time(2);
        let requests = image_requests(&c.take_commands());
        let (older, _) = requests[0].clone();
        let (newer, newer_request) = requests[1].clone();

        assert_eq!(c.complete_image::<_, String>(newer, Ok(2)), Some(2));
        assert_eq!(c.complete_image::<_, String>(older, Ok(1)), None);
        assert_eq!(c.current_artifact(), Some(&newer_request));

        // A stale failure does not surface either
        c.select_time(3);
        c.select_time(4);
        let requests = image_requests(&c.take_commands());
        assert_eq!(c.complete_image::<_, String>(requests[1].0, Ok(4)), Some(4));
        assert_eq!(c.complete_image::<u32, _>(requests[0].0, Err("timeout")), None);
        assert_eq!(c.error(), None);
        assert!(!c.is_loading());
    }

    #[test]
    fn test_unknown_sequence_is_ignored() {
        let mut c = controller();
        assert_eq!(c.complete_image::<_, String>(99, Ok(())), None);
        c.complete_share_link::<String>(99, Ok("/static/x.png".to_string()));
        assert!(c.share_link().is_none());
    }

    #[test]
    fn test_share_success_builds_full_url() {
        let mut c = controller();
        c.set_parameter(Parameter::Rain);
        c.select_time(7);
        c.take_commands();

        c.create_share_link();
        let commands = c.take_commands();
        assert!(commands.iter().any(|cmd| matches!(
            cmd,
            Command::CreateShareLink { url, .. }
                if url.ends_with("/create-shareable-map?parameter=rain&time_index=7&include_wind=false")
        )));
        assert!(c.is_loading());

        c.complete_share_link::<String>(share_seq(&commands), Ok("/static/rain_7_1.png".to_string()));
        assert_eq!(c.share_link(), Some("http://panel.local/static/rain_7_1.png"));
        assert!(!c.is_loading());

        c.dismiss_share_link();
        assert!(c.share_link().is_none());
    }

    #[test]
    fn test_share_failure_leaves_link_unset() {
        let mut c = controller();
        c.create_share_link();
        let seq = share_seq(&c.take_commands());

        c.complete_share_link(seq, Err(BackendError::Rejected("missing share_url".into())));
        assert!(c.share_link().is_none());
        assert_eq!(c.error(), Some(ErrorKind::ShareLink));
        assert_eq!(c.error_message(), Some("Gagal membuat URL berbagi."));
    }

    #[test]
    fn test_frame_failure_keeps_share_link_and_overwrites_error_slot() {
        let mut c = controller();
        c.create_share_link();
        let seq = share_seq(&c.take_commands());
        c.complete_share_link::<String>(seq, Ok("/static/a.png".to_string()));

        // Share failure, then frame failure: the single error slot keeps the latest
        c.create_share_link();
        let seq = share_seq(&c.take_commands());
        c.complete_share_link::<&str>(seq, Err("boom"));
        assert_eq!(c.error(), Some(ErrorKind::ShareLink));

        c.request_frame();
        let (seq, _) = image_requests(&c.take_commands())[0].clone();
        let _: Option<()> = c.complete_image(seq, Err("refused"));

        assert_eq!(c.error(), Some(ErrorKind::FrameFetch));
        assert_eq!(c.share_link(), Some("http://panel.local/static/a.png"));
    }

    #[test]
    fn test_time_info_success_and_fallback() {
        let mut c = controller();
        c.apply_time_info(Ok(TimeInfo {
            times: Some(vec!["06:00".to_string(), "07:00".to_string()]),
            date: Some("05/03/2025".to_string()),
        }));
        assert_eq!(c.time_options().date(), "05/03/2025");
        assert_eq!(c.time_label(), Some("06:00"));

        // Short list: out-of-range index has no label but nothing breaks
        c.select_time(5);
        assert_eq!(c.time_label(), None);

        c.apply_time_info(Err(BackendError::Network("refused".to_string())));
        assert_eq!(c.time_options().labels().len(), HOURS_PER_DAY);
        assert_eq!(c.time_label(), Some("05:00"));
        assert_eq!(c.time_options().date(), "04/03/2025");
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_restore_view_from_url() {
        let mut c = controller();
        assert!(c.restore_view(&parse_query("?parameter=u10&time_index=9&include_wind=true")));
        assert_eq!(c.parameter(), Parameter::U10);
        assert_eq!(c.time_index(), 9);
        assert!(c.include_wind());
        assert_eq!(image_requests(&c.take_commands()).len(), 1);

        let mut c = controller();
        assert!(c.restore_view(&parse_query("?parameter=wind_vector&include_wind=true")));
        assert!(!c.include_wind());

        let mut c = controller();
        assert!(!c.restore_view(&parse_query("?backend=http://x")));
        assert!(!c.has_pending_commands());
    }

    #[test]
    fn test_join_share_url() {
        assert_eq!(join_share_url("http://a/", "/static/x.png"), "http://a/static/x.png");
        assert_eq!(join_share_url("http://a", "static/x.png"), "http://a/static/x.png");
        assert_eq!(
            join_share_url("http://a", "https://cdn/x.png"),
            "https://cdn/x.png"
        );
    }
}
