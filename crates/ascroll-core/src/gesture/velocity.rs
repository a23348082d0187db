//! Release velocity over a trailing window of pointer samples.

use std::collections::VecDeque;

use crate::host::Offset;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

/// Two-axis velocity tracker.
///
/// Velocity is the displacement between the oldest and newest sample in the
/// window divided by the time between them. A gap longer than
/// [`ASSUME_STOPPED_MS`] cuts the window, so a finger that paused before
/// lifting does not fling.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    window_ms: u64,
    samples: VecDeque<(u64, Offset)>,
}

impl VelocityTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            samples: VecDeque::with_capacity(16),
        }
    }

    /// Record a position. Timestamps older than the newest sample are treated
    /// as simultaneous with it.
    pub fn add(&mut self, timestamp_ms: u64, position: Offset) {
        let newest = self.samples.back().map_or(timestamp_ms, |(t, _)| *t);
        let timestamp_ms = timestamp_ms.max(newest);
        self.samples.push_back((timestamp_ms, position));

        while let Some(&(t, _)) = self.samples.front() {
            if timestamp_ms - t > self.window_ms {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in units/second, zero with fewer than two usable samples
    pub fn velocity(&self) -> Offset {
        let Some(&(newest_t, newest_pos)) = self.samples.back() else {
            return Offset::ZERO;
        };

        let mut oldest = (newest_t, newest_pos);
        let mut previous_t = newest_t;
        for &(t, position) in self.samples.iter().rev().skip(1) {
            if previous_t - t > ASSUME_STOPPED_MS {
                break;
            }
            oldest = (t, position);
            previous_t = t;
        }

        let elapsed = newest_t - oldest.0;
        if elapsed == 0 {
            return Offset::ZERO;
        }
        let seconds = elapsed as f32 / 1000.0;
        Offset::new(
            (newest_pos.x - oldest.1.x) / seconds,
            (newest_pos.y - oldest.1.y) / seconds,
        )
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_returns_zero() {
        let tracker = VelocityTracker::new(100);
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }

    #[test]
    fn test_constant_velocity() {
        let mut tracker = VelocityTracker::new(100);
        // Moving at 10 units per 10ms = 1000 units/s
        for i in 0..5 {
            tracker.add(i * 10, Offset::new(0.0, -(i as f32) * 10.0));
        }
        let velocity = tracker.velocity();
        assert!((velocity.y + 1000.0).abs() < 0.01, "got {:?}", velocity);
        assert_eq!(velocity.x, 0.0);
    }

    #[test]
    fn test_old_samples_leave_window() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, Offset::new(0.0, 0.0));
        tracker.add(30, Offset::new(0.0, 1000.0));
        // Slow samples inside the window dominate
        for t in [150, 160, 170] {
            tracker.add(t, Offset::new(0.0, 1000.0 + (t - 150) as f32));
        }
        let velocity = tracker.velocity();
        assert!((velocity.y - 1000.0).abs() < 0.01, "got {:?}", velocity);
    }

    #[test]
    fn test_pause_before_release_is_zero() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, Offset::new(0.0, 0.0));
        tracker.add(10, Offset::new(0.0, 50.0));
        tracker.add(10 + ASSUME_STOPPED_MS + 1, Offset::new(0.0, 50.0));
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }

    #[test]
    fn test_same_timestamp_is_zero() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(5, Offset::new(0.0, 0.0));
        tracker.add(5, Offset::new(0.0, 300.0));
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }

    #[test]
    fn test_backwards_clock_is_clamped() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(100, Offset::new(0.0, 0.0));
        tracker.add(90, Offset::new(0.0, 10.0));
        let velocity = tracker.velocity();
        assert!(velocity.y.is_finite());
        assert_eq!(velocity, Offset::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, Offset::ZERO);
        tracker.add(10, Offset::new(100.0, 0.0));
        tracker.reset();
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }
}
