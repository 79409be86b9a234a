//! Derives per-frame time deltas from the host's frame timestamps.

use log::warn;

/// Tracks the last frame timestamp and turns consecutive timestamps into
/// deltas.
///
/// The first tick yields a delta of zero so that whatever time passed before
/// the loop started does not turn into one huge jump.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_update: Option<f64>,
}

impl FrameClock {
    /// Creates a clock that has not seen a frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `timestamp` (seconds) and returns the elapsed time since the
    /// previous tick.
    ///
    /// Returns `0.0` on the first tick and whenever the delta is negative or
    /// not finite. A non-finite timestamp is not recorded.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        if !timestamp.is_finite() {
            warn!("ignoring non-finite frame timestamp {}", timestamp);
            return 0.0;
        }

        let dt = match self.last_update.replace(timestamp) {
            Some(last) => timestamp - last,
            None => return 0.0,
        };

        if dt.is_finite() && dt >= 0.0 {
            dt as f32
        } else {
            warn!("frame clock went backwards by {:.4}s, using dt = 0", -dt);
            0.0
        }
    }

    /// Timestamp of the most recent tick, if any.
    pub fn last_update(&self) -> Option<f64> {
        self.last_update
    }

    /// Forgets the previous frame, so the next tick yields zero again.
    pub fn reset(&mut self) {
        self.last_update = None;
    }
}
