use std::time::Instant;

use tracing::warn;

/// Per-frame time source.
///
/// `delta` is the seconds the previous frame took (never negative), `total`
/// their monotonic sum. `game_time` advances only when the frame loop says
/// so, i.e. not while paused. The fixed-step accumulator carries fractional
/// leftover steps across frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    delta: f32,
    total: f32,
    game_time: f32,
    fixed_step: f32,
    accumulator: f32,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(fixed_step: f32) -> Self {
        Self {
            delta: 0.0,
            total: 0.0,
            game_time: 0.0,
            fixed_step,
            accumulator: 0.0,
            last_tick: None,
        }
    }

    /// Seconds elapsed during the previous frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds since the clock started, monotonic.
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Seconds of unpaused runtime.
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    /// The configured fixed timestep, the `delta` to integrate with inside
    /// a fixed update.
    pub fn fixed_step(&self) -> f32 {
        self.fixed_step
    }

    /// Leftover fixed-step debt carried to the next frame.
    pub fn fixed_accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Measure the frame delta from wall time. The first call reads as a
    /// zero-length frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(delta);
    }

    /// Advance by an explicit delta. Negative inputs clamp to zero so
    /// `total` stays monotonic.
    pub fn advance(&mut self, delta: f32) {
        self.delta = delta.max(0.0);
        self.total += self.delta;
    }

    pub(crate) fn advance_game_time(&mut self) {
        self.game_time += self.delta;
    }

    /// Fold this frame's delta into the accumulator and return how many
    /// fixed updates to run: one per step the accumulator covers, leaving
    /// the (possibly negative) remainder for next frame.
    ///
    /// Catch-up is unbounded by default: a stalled frame owes all its
    /// steps. `cap` clamps the count and forgives the remaining debt,
    /// trading accuracy for a bounded frame.
    pub(crate) fn drain_fixed_steps(&mut self, cap: Option<u32>) -> u32 {
        if self.fixed_step <= 0.0 {
            warn!(fixed_step = self.fixed_step, "non-positive fixed step; skipping fixed updates");
            return 0;
        }
        self.accumulator += self.delta;
        let mut steps = 0;
        while self.accumulator > 0.0 {
            self.accumulator -= self.fixed_step;
            steps += 1;
        }
        if let Some(cap) = cap {
            if steps > cap {
                warn!(steps, cap, "fixed-step catch-up capped; dropping leftover time");
                self.accumulator = 0.0;
                steps = cap;
            }
        }
        steps
    }
}
