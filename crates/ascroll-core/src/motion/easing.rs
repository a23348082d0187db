//! Easing curves for tweens
//!
//! Both curves map progress in [0, 1] onto [0, 1], are monotonic and reach
//! exactly 1.0 at t = 1.

pub use crate::config::EasingType;

/// Progress-to-value mapping for an [`EasingType`]
pub trait EasingTypeExt {
    /// Eased value for progress `t`; out-of-range and NaN input is clamped
    fn apply(&self, t: f32) -> f32;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            EasingType::Linear => t,
            EasingType::Decelerate => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [EasingType::Linear, EasingType::Decelerate] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at t=0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_decelerate_front_loads_motion() {
        assert!((EasingType::Decelerate.apply(0.5) - 0.75).abs() < 1e-6);
        assert!(EasingType::Decelerate.apply(0.25) > EasingType::Linear.apply(0.25));

        let mut prev = 0.0;
        for i in 0..=20 {
            let v = EasingType::Decelerate.apply(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(EasingType::Decelerate.apply(-3.0), 0.0);
        assert_eq!(EasingType::Decelerate.apply(7.0), 1.0);
        assert_eq!(EasingType::Linear.apply(f32::NAN), 0.0);
    }
}
