use std::time::{Duration, Instant};

/// Rate and ETA estimation from the time the bar started
#[derive(Debug, Clone, Copy)]
pub struct Estimater {
    /// Time when the progress started
    start: Instant,
    /// Units per second, 0 if no time has passed yet
    rate: f64,
    /// Remaining time, `None` if unknown
    eta: Option<Duration>,
}

impl Estimater {
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            rate: 0.0,
            eta: None,
        }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn eta(&self) -> Option<Duration> {
        self.eta
    }

    /// Recompute with the current step and the time now
    pub fn update(&mut self, now: Instant, current: u64, total: u64) {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        self.rate = if elapsed > 0.0 {
            current as f64 / elapsed
        } else {
            0.0
        };
        if !(self.rate > 0.0 && self.rate.is_finite()) {
            self.eta = None;
            return;
        }
        let remaining = total.saturating_sub(current) as f64;
        self.eta = Duration::try_from_secs_f64(remaining / self.rate).ok();
    }
}

/// Format a duration as `1h02m03s`, `2m03s` or `3s`
pub struct DurationFormat(pub Duration);
impl std::fmt::Display for DurationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.0.as_secs();
        let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
        if h > 0 {
            write!(f, "{h}h{m:02}m{s:02}s")
        } else if m > 0 {
            write!(f, "{m}m{s:02}s")
        } else {
            write!(f, "{s}s")
        }
    }
}
