//! Eased interpolation of a single axis between two values

use crate::config::EasingType;
use crate::host::Axis;

use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp, progress};

/// Active tween state
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Axis being animated; the other axis is left untouched
    pub axis: Axis,
    /// Starting value
    pub from: f32,
    /// Target value
    pub to: f32,
    /// Start time in milliseconds
    pub start_ms: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Land on `to` even when interrupted
    pub snap_to_end_on_cancel: bool,
    /// Easing function
    pub easing: EasingType,
    /// Last value handed to the host
    current: f32,
}

impl Tween {
    pub fn new(
        axis: Axis,
        from: f32,
        to: f32,
        start_ms: u64,
        duration_ms: u64,
        easing: EasingType,
        snap_to_end_on_cancel: bool,
    ) -> Self {
        Self {
            axis,
            from,
            to,
            start_ms,
            duration_ms,
            snap_to_end_on_cancel,
            easing,
            current: from,
        }
    }

    /// Value at `now_ms`. Returns `to` exactly once the duration has elapsed.
    pub fn sample(&mut self, now_ms: u64) -> f32 {
        self.current = if is_complete(self.start_ms, self.duration_ms, now_ms) {
            self.to
        } else {
            let t = progress(self.start_ms, self.duration_ms, now_ms);
            lerp(self.from, self.to, self.easing.apply(t))
        };
        self.current
    }

    /// Whether the tween has reached its end at `now_ms`
    #[inline]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        is_complete(self.start_ms, self.duration_ms, now_ms)
    }

    /// Last sampled value
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Where the axis should rest when the tween is stopped early
    pub fn value_on_cancel(&self, to_final_value: bool) -> f32 {
        if to_final_value || self.snap_to_end_on_cancel {
            self.to
        } else {
            self.current
        }
    }
}
