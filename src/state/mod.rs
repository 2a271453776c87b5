//! Application state management.
//!
//! Each store here is a plain value with explicit transitions; the
//! [`crate::controller::ViewController`] composes them and decides which
//! transitions trigger requests.

mod animation;
mod parameter;
mod time_index;
pub mod url_state;
mod view;

pub use animation::{AnimationController, AnimationState};
pub use parameter::{Parameter, ParameterSelection};
pub use time_index::{TimeIndexStore, TimeOptions, TimeStep, DEFAULT_FORECAST_DATE, HOURS_PER_DAY};
pub use view::{ErrorKind, PendingRequest, RequestLedger, ViewState};
