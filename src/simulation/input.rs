//! Single-slot handoff of the latest selected point.
//!
//! Input may be captured off the update thread. Only the newest point
//! matters, so the slot holds at most one value and a new submission simply
//! overwrites an unconsumed one.

use std::sync::{Mutex, PoisonError};

use super::vector::Vec2;

/// Most-recent-wins mailbox for destination points.
///
/// Share it with the input side through an `Arc`; the update loop drains it
/// with [`PendingPoint::take`] once per frame.
#[derive(Debug, Default)]
pub struct PendingPoint {
    slot: Mutex<Option<Vec2>>,
}

impl PendingPoint {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `point`, replacing any point not yet taken.
    pub fn submit(&self, point: Vec2) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(point);
    }

    /// Removes and returns the pending point, if any.
    pub fn take(&self) -> Option<Vec2> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// `true` if a point is waiting to be taken.
    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
