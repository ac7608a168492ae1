//! Fixed-timestep game clock using an accumulator pattern.
//!
//! `draw_web()` fires at browser frame rate with a variable delta. GameTime
//! converts that into discrete ticks at a fixed rate, keeping the game logic
//! deterministic and testable without a browser.
//!
//! The per-frame delta is clamped, so a tab that was throttled or
//! backgrounded resumes with at most half a second of catch-up instead of a
//! backlog of pending ticks.

/// Maximum wall-clock delta consumed per frame, in milliseconds.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

pub struct GameTime {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec).
    ms_per_tick: f64,
    /// Milliseconds accumulated but not yet consumed as ticks.
    accumulator: f64,
    /// Total elapsed ticks since creation.
    pub total_ticks: u64,
    /// Timestamp of the previous frame (ms), None before the first frame.
    last_timestamp: Option<f64>,
}

impl GameTime {
    /// `ticks_per_sec`: how many game ticks per real-time second.
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()`); returns how
    /// many whole ticks to process this frame. Call once per draw frame.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0, // first frame establishes the baseline
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}
