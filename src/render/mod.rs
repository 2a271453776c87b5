//! Rendered artifact handling.
//!
//! The backend does all map rendering; this module only turns the bytes it
//! returns into egui textures and plays animated ones.

mod decode;
mod texture;

pub use decode::{decode_artifact, DecodedArtifact};
pub use texture::ArtifactTexture;
