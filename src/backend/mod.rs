//! Rendering backend integration.
//!
//! The backend is an opaque image/JSON provider reached over four GET
//! endpoints:
//! - `/time-info`: time labels and forecast date
//! - `/static-image`: one rendered frame
//! - `/parameter-animation`: the animated time series
//! - `/create-shareable-map`: persists a view and returns its path

mod channel;
mod client;
mod types;

pub use channel::{BackendChannel, BackendResult};
pub use types::{BackendError, TimeInfo};
