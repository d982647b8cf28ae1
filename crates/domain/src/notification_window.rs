/// The range of instants in which an `Event` boundary must fall for its
/// owner to be notified in the current run.
///
/// Both `start` and `end` are inclusive UTC millis. A window is computed
/// once per run and is never recomputed while the run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationWindow {
    start: i64,
    end: i64,
}

impl NotificationWindow {
    /// Window centered on `now + lookahead_minutes`, widened by
    /// `buffer_seconds` in both directions.
    ///
    /// Bounds saturate at the limits of `i64` instead of overflowing.
    pub fn compute(now_ts: i64, lookahead_minutes: i64, buffer_seconds: i64) -> Self {
        let target = now_ts.saturating_add(lookahead_minutes.saturating_mul(60 * 1000));
        let buffer = buffer_seconds.saturating_abs().saturating_mul(1000);
        Self {
            start: target.saturating_sub(buffer),
            end: target.saturating_add(buffer),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts <= self.end
    }
}
