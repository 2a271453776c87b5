//! GPU textures for the currently displayed artifact.
//!
//! Exactly one artifact is displayed at a time. Replacing it drops the
//! previous texture handles, which frees them in egui.

use super::decode::{frame_at, DecodedArtifact};
use eframe::egui::{self, TextureHandle, TextureOptions};
use std::time::Duration;
use web_time::Instant;

pub struct ArtifactTexture {
    frames: Vec<TextureHandle>,
    delays: Vec<Duration>,
    shown_at: Instant,
}

impl ArtifactTexture {
    /// Uploads every frame of `artifact`. Playback of animated artifacts
    /// starts at `now`.
    pub fn upload(ctx: &egui::Context, artifact: DecodedArtifact, now: Instant) -> Self {
        let options = TextureOptions {
            magnification: egui::TextureFilter::Linear,
            minification: egui::TextureFilter::Linear,
            ..Default::default()
        };

        let mut frames = Vec::with_capacity(artifact.frame_count());
        let mut delays = Vec::with_capacity(artifact.frame_count());
        for (index, frame) in artifact.frames.into_iter().enumerate() {
            frames.push(ctx.load_texture(format!("artifact_frame_{}", index), frame.image, options));
            delays.push(frame.delay);
        }

        log::debug!("Uploaded artifact texture: {} frame(s)", frames.len());

        Self {
            frames,
            delays,
            shown_at: now,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// Frame to draw at `now`.
    pub fn current(&self, now: Instant) -> Option<&TextureHandle> {
        let elapsed = now.saturating_duration_since(self.shown_at);
        self.frames.get(frame_at(&self.delays, elapsed))
    }

    /// How long until the visible frame changes. `None` for still images.
    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        if !self.is_animated() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        let total: u128 = self.delays.iter().map(Duration::as_millis).sum();
        if total == 0 {
            return None;
        }

        let mut position = elapsed.as_millis() % total;
        for delay in &self.delays {
            let millis = delay.as_millis();
            if position < millis {
                return Some(Duration::from_millis((millis - position) as u64));
            }
            position -= millis;
        }
        Some(Duration::ZERO)
    }
}
