//! Decoding of rendered artifacts into displayable frames.
//!
//! The backend serves single frames as PNG and animations as GIF. Both are
//! decoded into a list of `ColorImage` frames with per-frame delays; a still
//! image is a one-frame list.

use eframe::egui::ColorImage;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::time::Duration;

/// Delay used for GIF frames that declare none, as browsers do.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Errors from decoding artifact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No bytes, or an animation without frames.
    Empty,
    /// The bytes are not a recognized image format.
    Unsupported(String),
    /// The image data is corrupt.
    Image(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "Artifact contains no image data"),
            DecodeError::Unsupported(msg) => write!(f, "Unsupported artifact format: {}", msg),
            DecodeError::Image(msg) => write!(f, "Failed to decode artifact: {}", msg),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        DecodeError::Image(e.to_string())
    }
}

/// One decoded frame.
pub struct ArtifactFrame {
    pub image: ColorImage,
    pub delay: Duration,
}

/// A decoded artifact ready for upload as textures.
pub struct DecodedArtifact {
    pub frames: Vec<ArtifactFrame>,
}

impl DecodedArtifact {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Decodes PNG/GIF (or any other format `image` was built with).
pub fn decode_artifact(bytes: &[u8]) -> Result<DecodedArtifact, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let format =
        image::guess_format(bytes).map_err(|e| DecodeError::Unsupported(e.to_string()))?;

    let frames = match format {
        ImageFormat::Gif => decode_gif(bytes)?,
        _ => {
            let image = image::load_from_memory_with_format(bytes, format)?.to_rgba8();
            vec![ArtifactFrame {
                image: to_color_image(&image),
                delay: Duration::ZERO,
            }]
        }
    };

    if frames.is_empty() {
        return Err(DecodeError::Empty);
    }

    log::debug!(
        "Decoded {:?} artifact: {} frame(s)",
        format,
        frames.len()
    );

    Ok(DecodedArtifact { frames })
}

fn decode_gif(bytes: &[u8]) -> Result<Vec<ArtifactFrame>, DecodeError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;

    Ok(frames
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let millis = if denom == 0 { 0 } else { numer / denom };
            let delay = if millis == 0 {
                DEFAULT_FRAME_DELAY
            } else {
                Duration::from_millis(millis as u64)
            };
            ArtifactFrame {
                image: to_color_image(frame.buffer()),
                delay,
            }
        })
        .collect())
}

fn to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Index of the frame visible `elapsed` after playback started, looping.
pub fn frame_at(delays: &[Duration], elapsed: Duration) -> usize {
    let total: u128 = delays.iter().map(Duration::as_millis).sum();
    if total == 0 {
        return 0;
    }

    let mut remaining = elapsed.as_millis() % total;
    for (index, delay) in delays.iter().enumerate() {
        let millis = delay.as_millis();
        if remaining < millis {
            return index;
        }
        remaining -= millis;
    }
    delays.len() - 1
}
