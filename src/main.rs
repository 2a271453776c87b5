#![warn(clippy::all)]

//! Weather Panel - a web-based control panel for WRF forecast maps.
//!
//! The user picks a meteorological parameter, a forecast hour, and an
//! optional wind overlay; a remote rendering service draws the map. The
//! panel shows single frames, full animations, or plays frames back itself,
//! and can ask the service for a shareable link to the current view.

mod backend;
mod config;
mod controller;
mod render;
mod request;
mod state;
mod ui;

use backend::{BackendChannel, BackendResult};
use config::PanelConfig;
use controller::{Command, ViewController};
use eframe::egui;
use render::ArtifactTexture;
use state::url_state;
use web_time::Instant;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Visualisasi Cuaca Indonesia",
        native_options,
        Box::new(|cc| Ok(Box::new(PanelApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(PanelApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct PanelApp {
    /// Selection, playback, and view state
    controller: ViewController,

    /// Channel for async backend requests
    backend: BackendChannel,

    /// Textures for the artifact on screen
    artifact: Option<ArtifactTexture>,

    /// Backend override from the page URL, carried into every URL push.
    backend_override: Option<String>,

    /// Monotonic instant of last URL push (for throttling to ~1/sec).
    last_url_push: Instant,
}

impl PanelApp {
    /// Creates a new PanelApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let url_params = url_state::parse_from_url();

        let mut config = PanelConfig::default();
        if let Some(ref backend_url) = url_params.backend {
            config = config.with_backend_url(backend_url);
        }
        let share_origin = config.resolve_share_origin(url_state::page_origin());
        log::info!(
            "Backend: {}, share origin: {}",
            config.backend_url,
            share_origin
        );

        let mut controller = ViewController::new(&config, share_origin);
        controller.restore_view(&url_params);

        let backend = BackendChannel::new();
        backend.fetch_time_info(cc.egui_ctx.clone(), controller.time_info_url());

        Self {
            controller,
            backend,
            artifact: None,
            backend_override: url_params.backend,
            last_url_push: Instant::now(),
        }
    }

    /// Apply one completed backend request.
    fn handle_backend_result(&mut self, result: BackendResult, ctx: &egui::Context) {
        match result {
            BackendResult::TimeInfo(result) => self.controller.apply_time_info(result),
            BackendResult::Image { seq, result } => {
                if let Some(decoded) = self.controller.complete_image(seq, result) {
                    self.artifact = Some(ArtifactTexture::upload(ctx, decoded, Instant::now()));
                }
            }
            BackendResult::ShareLink { seq, result } => {
                self.controller.complete_share_link(seq, result);
            }
        }
    }

    /// Start the backend work queued by user intents and timer ticks.
    fn execute_commands(&mut self, ctx: &egui::Context) {
        for command in self.controller.take_commands() {
            match command {
                Command::FetchImage { seq, request } => {
                    self.backend.fetch_image(ctx.clone(), seq, request.url);
                }
                Command::CreateShareLink { seq, url } => {
                    self.backend.create_share_link(ctx.clone(), seq, url);
                }
            }
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed backend requests
        while let Some(result) = self.backend.try_recv() {
            self.handle_backend_result(result, ctx);
        }

        // Advance playback; each tick queues one frame request
        let now = Instant::now();
        self.controller.tick(now);

        // Requests queued since the last frame (by the UI or the tick above)
        self.execute_commands(ctx);

        // Push current selection to URL (throttled to once per second)
        if now.duration_since(self.last_url_push).as_secs_f64() >= 1.0 {
            self.last_url_push = now;
            url_state::push_to_url(
                self.controller.parameter(),
                self.controller.time_index(),
                self.controller.include_wind(),
                self.backend_override.as_deref(),
            );
        }

        // Render UI panels in the correct order for egui layout
        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &self.controller);
        ui::render_playback_bar(ctx, &mut self.controller);
        ui::render_control_panel(ctx, &mut self.controller);
        ui::render_canvas(ctx, &self.controller, self.artifact.as_ref(), now);
        ui::render_share_window(ctx, &mut self.controller);

        // Intents from this pass run on the next one
        if self.controller.has_pending_commands() {
            ctx.request_repaint();
        }

        // Wake up for the next playback tick or animated artifact frame
        let wake = [
            self.controller.time_until_tick(now),
            self.artifact
                .as_ref()
                .and_then(|a| a.time_until_next_frame(now)),
        ];
        if let Some(delay) = wake.into_iter().flatten().min() {
            ctx.request_repaint_after(delay);
        }
    }
}
