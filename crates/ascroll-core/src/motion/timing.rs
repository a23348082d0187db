//! Time calculation utilities for motion drivers
//!
//! Timestamps are host-supplied milliseconds. Clocks that step backwards are
//! treated as "no time passed" instead of producing negative progress.

/// Milliseconds from `start_ms` to `now_ms`, zero if the clock went backwards
#[inline]
pub fn elapsed_ms(start_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(start_ms)
}

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Arguments
/// * `start_ms` - Animation start time
/// * `duration_ms` - Total animation duration
/// * `now_ms` - Current frame time
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start_ms: u64, duration_ms: u64, now_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    let ratio = elapsed_ms(start_ms, now_ms) as f64 / duration_ms as f64;
    ratio.clamp(0.0, 1.0) as f32
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start_ms: u64, duration_ms: u64, now_ms: u64) -> bool {
    elapsed_ms(start_ms, now_ms) >= duration_ms
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
///
/// # Returns
/// Interpolated value
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(-30.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(10, 0, 10) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clock_backwards() {
        assert_eq!(elapsed_ms(500, 400), 0);
        assert_eq!(progress(500, 400, 100), 0.0);
        assert!(!is_complete(500, 400, 100));
    }

    #[test]
    fn test_progress_clamped() {
        assert!((progress(0, 400, 200) - 0.5).abs() < 1e-6);
        assert_eq!(progress(0, 400, 4000), 1.0);
        assert!(is_complete(0, 400, 400));
    }
}
