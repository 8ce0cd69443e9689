//! Point-light oscillator
//!
//! Sweeps the two waterfall point lights downward in a repeating sawtooth.
//! Height is a pure function of the accumulated time; the accumulator is
//! the only state.

use crate::config::LightSweepConfig;

/// Vertical span of one sweep cycle
const SWEEP_SPAN: f32 = 12.0;

/// Height at the top of the sweep; positions repeat in `[rest - span, rest]`
const REST_HEIGHT: f32 = 3.0;

/// Sawtooth oscillator for the two point lights
pub struct LightOscillator {
    accumulated: f32,
    speed_a: f32,
    speed_b: f32,
}

impl LightOscillator {
    /// Create an oscillator from the configured sweep speeds
    pub fn new(config: &LightSweepConfig) -> Self {
        Self {
            accumulated: 0.0,
            speed_a: config.speed_a,
            speed_b: config.speed_b,
        }
    }

    /// Accumulate a frame delta and return the two light heights
    pub fn advance(&mut self, delta_time: f32) -> (f32, f32) {
        self.accumulated += delta_time;
        (
            Self::height(self.speed_a, self.accumulated),
            Self::height(self.speed_b, self.accumulated),
        )
    }

    /// Total time accumulated so far in seconds
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    fn height(speed: f32, t: f32) -> f32 {
        REST_HEIGHT - (speed * t) % SWEEP_SPAN
    }
}
