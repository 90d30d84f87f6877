//! Wall-clock pacing: converts elapsed real time into due simulation
//! steps. Timer-free, so pacing is testable with plain `Duration`s.

use std::time::Duration;

/// Base cadence at multiplier 1.0: 25 steps (simulated days) per second.
pub const STEP_INTERVAL: Duration = Duration::from_millis(40);

/// Ceiling on steps handed out per poll. A stalled frame drops its backlog
/// instead of replaying it.
pub const MAX_STEPS_PER_TICK: u32 = 8;

/// Accumulates elapsed wall time and hands out whole steps at
/// `STEP_INTERVAL / multiplier`.
#[derive(Debug, Default)]
pub struct StepClock {
    /// Unconsumed wall time, in seconds.
    carry: f64,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps due after `elapsed` more wall time.
    ///
    /// Paused, zero, and non-finite multipliers yield no steps and clear
    /// the accumulator, so resuming never produces a catch-up burst.
    pub fn tick(&mut self, elapsed: Duration, multiplier: f64, paused: bool) -> u32 {
        if paused || !multiplier.is_finite() || multiplier <= 0.0 {
            self.carry = 0.0;
            return 0;
        }

        let interval = STEP_INTERVAL.as_secs_f64() / multiplier;
        self.carry += elapsed.as_secs_f64();

        let mut due = 0;
        while self.carry >= interval && due < MAX_STEPS_PER_TICK {
            self.carry -= interval;
            due += 1;
        }
        if due == MAX_STEPS_PER_TICK {
            self.carry = 0.0;
        }
        due
    }
}
