//! Channel-based backend requests.
//!
//! Requests are async but egui's update() is synchronous. Each request runs
//! as a background task (spawn_local on WASM, a worker thread natively) and
//! sends its result back through a channel, then asks egui to repaint so
//! the update loop picks it up.

use super::client;
use super::types::{BackendError, ShareLinkResponse, TimeInfo};
use crate::render::{decode_artifact, DecodedArtifact};
use eframe::egui;
use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

/// A completed backend request.
pub enum BackendResult {
    /// Startup time labels.
    TimeInfo(Result<TimeInfo, BackendError>),
    /// A frame or animation, already decoded.
    Image {
        seq: u64,
        result: Result<DecodedArtifact, BackendError>,
    },
    /// Share path returned by the backend.
    ShareLink {
        seq: u64,
        result: Result<String, BackendError>,
    },
}

pub struct BackendChannel {
    sender: Sender<BackendResult>,
    receiver: Receiver<BackendResult>,
}

impl Default for BackendChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Loads the time labels and forecast date.
    pub fn fetch_time_info(&self, ctx: egui::Context, url: String) {
        spawn(ctx, self.sender.clone(), async move {
            BackendResult::TimeInfo(client::get_json::<TimeInfo>(&url).await)
        });
    }

    /// Fetches and decodes a frame or animation artifact.
    pub fn fetch_image(&self, ctx: egui::Context, seq: u64, url: String) {
        spawn(ctx, self.sender.clone(), async move {
            let result = match client::get_bytes(&url).await {
                Ok(bytes) => {
                    log::debug!("Received {} bytes for request #{}", bytes.len(), seq);
                    decode_artifact(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
                }
                Err(e) => Err(e),
            };
            BackendResult::Image { seq, result }
        });
    }

    /// Asks the backend to persist the view and return its share path.
    pub fn create_share_link(&self, ctx: egui::Context, seq: u64, url: String) {
        spawn(ctx, self.sender.clone(), async move {
            let result = client::get_json::<ShareLinkResponse>(&url)
                .await
                .and_then(ShareLinkResponse::into_path);
            BackendResult::ShareLink { seq, result }
        });
    }

    /// Non-blocking check for a completed request.
    pub fn try_recv(&self) -> Option<BackendResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn<F>(ctx: egui::Context, sender: Sender<BackendResult>, task: F)
where
    F: Future<Output = BackendResult> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let result = task.await;
        let _ = sender.send(result);
        ctx.request_repaint();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn<F>(ctx: egui::Context, sender: Sender<BackendResult>, task: F)
where
    F: Future<Output = BackendResult> + Send + 'static,
{
    std::thread::spawn(move || {
        let result = pollster::block_on(task);
        let _ = sender.send(result);
        ctx.request_repaint();
    });
}
