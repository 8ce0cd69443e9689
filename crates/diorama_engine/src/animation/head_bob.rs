//! Bear-head pose animator
//!
//! A four-phase cyclic state machine: tilt down, hold at the bottom, tilt
//! up, hold at the top, then reset and start over. The phase is derived
//! from absolute elapsed time every call rather than stored, so the
//! animator self-corrects after dropped frames; the two lazily-captured
//! timestamps are the only real state.

use crate::config::HeadBobConfig;
use crate::foundation::math::deg_to_rad;

/// Time-derived state machine producing the bear-head tilt angle
///
/// One cycle lasts `2 * swing_secs + 2 * pause_secs`. Progress through the
/// cycle is split into fixed quarters:
///
/// 1. `0.00..=0.25` — descend from `max_tilt_deg` to 0
/// 2. `0.25..=0.50` — hold at 0, gated by a pause sub-timer
/// 3. `0.50..=0.75` — ascend from `-max_tilt_deg` to 0
/// 4. `0.75..`      — hold at 0; once the pause sub-timer runs out, clear
///    all state so the next invocation starts a fresh cycle
pub struct HeadBobAnimator {
    swing_secs: f32,
    pause_secs: f32,
    max_tilt_deg: f32,
    cycle_start: Option<f32>,
    pause_start: Option<f32>,
    rotation: f32,
}

impl HeadBobAnimator {
    /// Create an idle animator; the first `advance` call starts the cycle
    pub fn new(config: &HeadBobConfig) -> Self {
        Self {
            swing_secs: config.swing_secs,
            pause_secs: config.pause_secs,
            max_tilt_deg: config.max_tilt_deg,
            cycle_start: None,
            pause_start: None,
            rotation: 0.0,
        }
    }

    /// Duration of one full cycle in seconds
    pub fn cycle_secs(&self) -> f32 {
        2.0 * self.swing_secs + 2.0 * self.pause_secs
    }

    /// Whether the animator is between cycles
    pub fn is_idle(&self) -> bool {
        self.cycle_start.is_none()
    }

    /// Current tilt in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Derive the phase for the given elapsed time and return the tilt in
    /// radians
    ///
    /// Callers must only invoke this while a target object exists; the
    /// animator itself performs no such check.
    pub fn advance(&mut self, elapsed: f32) -> f32 {
        let cycle_start = *self.cycle_start.get_or_insert(elapsed);
        let progress = (elapsed - cycle_start) / self.cycle_secs();
        let tilt = self.max_tilt_deg;

        self.rotation = if progress <= 0.25 {
            // Descend
            let downward = progress * 4.0;
            deg_to_rad(tilt - tilt * downward)
        } else if progress <= 0.5 {
            // Hold at the bottom until the pause runs out
            let pause_start = *self.pause_start.get_or_insert(elapsed);
            let pause_progress = (elapsed - pause_start) / self.pause_secs;
            if pause_progress <= 1.0 {
                0.0
            } else {
                // Early ascent when the pause is shorter than a quarter
                // cycle; same interpolation as the ascending phase below
                let upward = (progress - 0.5) * 4.0;
                deg_to_rad(-tilt + tilt * upward)
            }
        } else if progress <= 0.75 {
            // Ascend; the bottom pause is over, so drop its timestamp and
            // let the top hold capture its own
            self.pause_start = None;
            let upward = (progress - 0.5) * 4.0;
            deg_to_rad(-tilt + tilt * upward)
        } else {
            // Hold at the top, then reset once the pause runs out
            let pause_start = *self.pause_start.get_or_insert(elapsed);
            let pause_progress = (elapsed - pause_start) / self.pause_secs;
            if pause_progress <= 1.0 {
                0.0
            } else {
                self.cycle_start = None;
                self.pause_start = None;
                0.0
            }
        };

        self.rotation
    }
}
