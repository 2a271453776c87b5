//! Forecast time position and the labels shown for it.

/// Number of hourly slots in a forecast day. Bounds the time index.
pub const HOURS_PER_DAY: usize = 24;

/// Forecast date shown when the backend does not supply one.
pub const DEFAULT_FORECAST_DATE: &str = "04/03/2025";

/// Direction of a single manual step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeStep {
    Backward,
    Forward,
}

impl TimeStep {
    pub fn delta(&self) -> i64 {
        match self {
            TimeStep::Backward => -1,
            TimeStep::Forward => 1,
        }
    }
}

/// Current time index, cyclic over `HOURS_PER_DAY`.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeIndexStore {
    index: usize,
}

impl TimeIndexStore {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves one slot, wrapping 23 -> 0 and 0 -> 23.
    pub fn step(&mut self, step: TimeStep) -> usize {
        let slots = HOURS_PER_DAY as i64;
        self.index = (self.index as i64 + step.delta()).rem_euclid(slots) as usize;
        self.index
    }

    /// Sets the index from a selection control. Values come from the
    /// control's own domain and are not clamped.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

/// Display labels for each time index, plus the forecast date.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimeOptions {
    labels: Vec<String>,
    date: String,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self::fallback()
    }
}

impl TimeOptions {
    pub fn new(labels: Vec<String>, date: String) -> Self {
        Self { labels, date }
    }

    /// Hourly `"HH:00"` labels for every slot and the default date.
    pub fn fallback() -> Self {
        let labels = (0..HOURS_PER_DAY)
            .map(|hour| format!("{:02}:00", hour))
            .collect();
        Self {
            labels,
            date: DEFAULT_FORECAST_DATE.to_string(),
        }
    }

    /// Label for an index, if the list covers it.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels the time selector offers: at most one per index in the domain.
    /// Extra labels from the backend (e.g. a 25th step) are not selectable.
    pub fn selectable_labels(&self) -> &[String] {
        &self.labels[..self.labels.len().min(HOURS_PER_DAY)]
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether every index in the time domain has a label.
    pub fn covers_domain(&self) -> bool {
        self.labels.len() >= HOURS_PER_DAY
    }
}
