//! Displayed view state: current artifact, error, share link, and the
//! bookkeeping that decides which responses may still update them.

use crate::request::{RenderKind, RenderRequest};
use std::collections::HashMap;

/// User-facing failure categories. Each has one fixed message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    FrameFetch,
    AnimationFetch,
    ShareLink,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::FrameFetch => "Gagal mengambil gambar. Pastikan server berjalan.",
            ErrorKind::AnimationFetch => "Gagal mengambil animasi. Pastikan server berjalan.",
            ErrorKind::ShareLink => "Gagal membuat URL berbagi.",
        }
    }
}

impl From<RenderKind> for ErrorKind {
    fn from(kind: RenderKind) -> Self {
        match kind {
            RenderKind::Frame => ErrorKind::FrameFetch,
            RenderKind::Animation => ErrorKind::AnimationFetch,
        }
    }
}

/// What the user currently sees.
///
/// `error` is a single slot shared by image and share failures: whichever
/// failed last wins. `share_link` is independent and only changes on a
/// successful share request or a dismissal.
#[derive(Default, Debug)]
pub struct ViewState {
    pub error: Option<ErrorKind>,
    pub artifact: Option<RenderRequest>,
    pub share_link: Option<String>,
}

impl ViewState {
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(|e| e.message())
    }
}

/// A request that has been issued but not answered.
#[derive(Clone, Debug)]
pub enum PendingRequest {
    Image(RenderRequest),
    ShareLink,
}

/// Outcome of matching a response to its request.
#[derive(Debug)]
pub struct Completion {
    pub request: PendingRequest,
    /// False when a newer request of the same kind has already been applied.
    pub current: bool,
}

/// Sequence numbers for in-flight requests.
///
/// Image and share responses are ordered separately; a response is applied
/// only if nothing newer of its kind has been applied before it.
#[derive(Default, Debug)]
pub struct RequestLedger {
    next_seq: u64,
    pending: HashMap<u64, PendingRequest>,
    applied_image: u64,
    applied_share: u64,
}

impl RequestLedger {
    pub fn begin(&mut self, request: PendingRequest) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.pending.insert(seq, request);
        seq
    }

    /// Removes `seq` from the pending set. Unknown sequence numbers yield `None`.
    pub fn finish(&mut self, seq: u64) -> Option<Completion> {
        let request = self.pending.remove(&seq)?;
        let applied = match request {
            PendingRequest::Image(_) => &mut self.applied_image,
            PendingRequest::ShareLink => &mut self.applied_share,
        };
        let current = seq > *applied;
        if current {
            *applied = seq;
        }
        Some(Completion { request, current })
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }
}
