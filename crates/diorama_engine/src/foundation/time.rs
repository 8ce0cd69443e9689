//! Time management utilities
//!
//! Two distinct time views exist in the diorama. The [`FrameClock`] tracks
//! elapsed seconds and per-frame deltas since startup and feeds the light
//! oscillator and the head-bob animator. The [`TimeSource`] capability
//! supplies a wall-clock-style "now" in milliseconds and feeds the foam
//! system's shared bob phase and particle time-to-live checks. Keeping the
//! latter behind a trait lets tests drive it deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// High-precision frame timer
///
/// Call [`FrameClock::update`] exactly once per frame; `delta_time` then
/// reports the seconds since the previous update and `elapsed` the seconds
/// since creation.
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    elapsed: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock starting at zero elapsed time
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Update the clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.elapsed += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Advance the clock by an explicit delta instead of sampling a real
    /// instant. Used by hosts that pace frames themselves.
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.elapsed += delta_time;
        self.last_frame = Instant::now();
        self.frame_count += 1;
    }

    /// Time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total elapsed time since clock creation in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of frames observed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Capability supplying the current wall-clock time in milliseconds
///
/// The value only needs to be monotonic within a run; it is used for
/// particle creation timestamps, expiry checks, and the shared bob phase.
pub trait TimeSource {
    /// Current time in milliseconds
    fn now_ms(&self) -> f64;
}

/// [`TimeSource`] backed by the process monotonic clock
///
/// Reports milliseconds since the source was created.
pub struct SystemTimeSource {
    origin: Instant,
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTimeSource {
    /// Create a source whose zero point is now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven [`TimeSource`] for deterministic playback
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and hand the other to the driver:
///
/// ```rust
/// use diorama_engine::foundation::time::{ManualTimeSource, TimeSource};
///
/// let time = ManualTimeSource::new();
/// let handle = time.clone();
/// handle.advance_ms(16.0);
/// assert_eq!(time.now_ms(), 16.0);
/// ```
#[derive(Clone, Default)]
pub struct ManualTimeSource {
    now_ms: Rc<Cell<f64>>,
}

impl ManualTimeSource {
    /// Create a source at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time in milliseconds
    pub fn set_ms(&self, ms: f64) {
        self.now_ms.set(ms);
    }

    /// Advance the current time by the given number of milliseconds
    pub fn advance_ms(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_accumulates_explicit_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.016);
        clock.advance(0.016);
        assert_eq!(clock.frame_count(), 2);
        assert!((clock.elapsed() - 0.032).abs() < 1e-6);
        assert!((clock.delta_time() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_frame_clock_update_is_monotonic() {
        let mut clock = FrameClock::new();
        clock.update();
        let first = clock.elapsed();
        clock.update();
        assert!(clock.elapsed() >= first);
    }

    #[test]
    fn test_manual_time_source_shares_state_across_clones() {
        let time = ManualTimeSource::new();
        let handle = time.clone();
        handle.set_ms(500.0);
        assert_eq!(time.now_ms(), 500.0);
        handle.advance_ms(250.0);
        assert_eq!(time.now_ms(), 750.0);
    }

    #[test]
    fn test_system_time_source_moves_forward() {
        let source = SystemTimeSource::new();
        let first = source.now_ms();
        let second = source.now_ms();
        assert!(second >= first);
    }
}
