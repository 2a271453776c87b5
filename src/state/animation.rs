//! Client-side animation playback.
//!
//! Playback cycles the time index on a fixed cadence. The controller owns a
//! single [`FrameTimer`]; every transition out of `Playing` cancels it and
//! every transition into `Playing` restarts it, so at most one timer is ever
//! armed.

use std::time::Duration;
use web_time::Instant;

/// Animation mode.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationState {
    /// Not animating; time is stepped by the user.
    #[default]
    Stopped,
    /// Advancing the time index on every tick.
    Playing,
    /// In animation mode, timer halted.
    Paused,
}

impl AnimationState {
    /// Label for the play/pause button.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            AnimationState::Playing => "\u{23F8} Pause",
            AnimationState::Stopped | AnimationState::Paused => "\u{25B6} Play",
        }
    }
}

/// Cancellable fixed-cadence timer, polled from the UI loop.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl FrameTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    /// Arms the timer; the first tick is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    /// Returns true when a tick is due and schedules the next one.
    ///
    /// At most one tick fires per poll. If the loop fell more than one
    /// interval behind, the schedule restarts from `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_tick else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_tick = Some(next);
        true
    }

    /// Time left until the next tick, if armed.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// Stopped / Playing / Paused state machine with its owned timer.
#[derive(Debug, Clone)]
pub struct AnimationController {
    state: AnimationState,
    timer: FrameTimer,
}

impl AnimationController {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: AnimationState::Stopped,
            timer: FrameTimer::new(interval),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == AnimationState::Playing
    }

    /// Stopped -> Playing, Playing -> Paused, Paused -> Playing.
    pub fn toggle(&mut self, now: Instant) -> AnimationState {
        let next = match self.state {
            AnimationState::Stopped | AnimationState::Paused => AnimationState::Playing,
            AnimationState::Playing => AnimationState::Paused,
        };
        self.transition(next, now);
        next
    }

    /// Leaves animation mode from any state.
    pub fn stop(&mut self) {
        if self.state != AnimationState::Stopped {
            log::debug!("Animation stopped (was {:?})", self.state);
        }
        self.state = AnimationState::Stopped;
        self.timer.cancel();
    }

    /// Returns true when a playback tick is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.is_playing() && self.timer.poll(now)
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_tick(now)
    }

    fn transition(&mut self, next: AnimationState, now: Instant) {
        log::debug!("Animation {:?} -> {:?}", self.state, next);
        self.state = next;
        match next {
            AnimationState::Playing => self.timer.start(now),
            AnimationState::Paused | AnimationState::Stopped => self.timer.cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(500);

    #[test]
    fn test_toggle_sequence() {
        let now = Instant::now();
        let mut animation = AnimationController::new(INTERVAL);
        assert_eq!(animation.state(), AnimationState::Stopped);
        assert_eq!(animation.time_until_tick(now), None);

        assert_eq!(animation.toggle(now), AnimationState::Playing);
        assert_eq!(animation.time_until_tick(now), Some(INTERVAL));

        assert_eq!(animation.toggle(now), AnimationState::Paused);
        assert_eq!(animation.time_until_tick(now), None);

        assert_eq!(animation.toggle(now), AnimationState::Playing);
        assert_eq!(animation.time_until_tick(now), Some(INTERVAL));

        animation.stop();
        assert_eq!(animation.state(), AnimationState::Stopped);
        assert_eq!(animation.time_until_tick(now), None);
    }

    #[test]
    fn test_stop_from_paused() {
        let now = Instant::now();
        let mut animation = AnimationController::new(INTERVAL);
        animation.toggle(now);
        animation.toggle(now);
        animation.stop();
        assert_eq!(animation.state(), AnimationState::Stopped);

        // Re-entering works after stop
        assert_eq!(animation.toggle(now), AnimationState::Playing);
    }

    #[test]
    fn test_ticks_follow_cadence() {
        let start = Instant::now();
        let mut animation = AnimationController::new(INTERVAL);
        animation.toggle(start);

        assert!(!animation.poll(start));
        assert!(!animation.poll(start + Duration::from_millis(499)));
        assert!(animation.poll(start + Duration::from_millis(500)));
        // Already fired for this slot
        assert!(!animation.poll(start + Duration::from_millis(700)));
        assert!(animation.poll(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_paused_does_not_tick() {
        let start = Instant::now();
        let mut animation = AnimationController::new(INTERVAL);
        animation.toggle(start);
        animation.toggle(start);
        assert!(!animation.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(INTERVAL);
        timer.start(start);

        let late = start + Duration::from_millis(2600);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.time_until_tick(late), Some(INTERVAL));
    }

    #[test]
    fn test_resume_restarts_timer() {
        let start = Instant::now();
        let mut animation = AnimationController::new(INTERVAL);
        animation.toggle(start);
        animation.toggle(start + Duration::from_millis(400));

        let resumed = start + Duration::from_millis(450);
        animation.toggle(resumed);
        assert!(!animation.poll(start + Duration::from_millis(500)));
        assert!(animation.poll(resumed + INTERVAL));
    }
}
