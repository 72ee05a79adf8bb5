//! Round timer shared by the color and math games.
//!
//! Each correct answer restarts the timer with a smaller limit, down to a
//! floor, so rounds get tighter as the score climbs. All times are in
//! milliseconds on the monotonic since-start clock.

/// Time allowed for the very first round.
pub const INITIAL_TIME_LIMIT_MS: f64 = 3000.0;
/// How much the limit shrinks per point scored.
pub const TIME_DECREASE_PER_ROUND_MS: f64 = 150.0;
/// The limit never drops below this, or the game becomes unwinnable.
pub const MIN_TIME_LIMIT_MS: f64 = 700.0;

#[derive(Debug, Clone, Copy)]
pub struct RoundTimer {
    started_at: f64,
    limit: f64,
}

impl RoundTimer {
    pub fn start(now: f64) -> Self {
        Self {
            started_at: now,
            limit: INITIAL_TIME_LIMIT_MS,
        }
    }

    pub fn remaining(&self, now: f64) -> f64 {
        self.limit - (now - self.started_at)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.remaining(now) <= 0.0
    }

    /// Begin the next round: recompute the limit from the current score and
    /// restart the clock.
    pub fn advance(&mut self, now: f64, score: u32) {
        self.limit = (INITIAL_TIME_LIMIT_MS - score as f64 * TIME_DECREASE_PER_ROUND_MS)
            .max(MIN_TIME_LIMIT_MS);
        self.started_at = now;
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}
