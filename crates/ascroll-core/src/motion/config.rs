//! Durations and fling parameters derived from the animation configuration

pub use crate::config::AnimationConfig;

use super::fling::FlingParams;

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Tween duration in milliseconds
    fn tween_duration_ms(&self) -> u64;

    /// Physics constants for a fling simulation
    fn fling_params(&self) -> FlingParams;

    /// Check if tweens are actually animated
    fn is_smooth(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn tween_duration_ms(&self) -> u64 {
        self.tween_duration_ms
    }

    fn fling_params(&self) -> FlingParams {
        FlingParams {
            deceleration_rate: self.deceleration_rate,
            spring_stiffness: self.spring_stiffness,
            velocity_epsilon: self.velocity_epsilon,
            distance_epsilon: self.distance_epsilon,
            max_overscroll: self.max_overscroll,
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.tween_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fling_params_follow_config() {
        let config = AnimationConfig {
            deceleration_rate: 2.0,
            max_overscroll: 0.0,
            ..Default::default()
        };
        let params = config.fling_params();
        assert_eq!(params.deceleration_rate, 2.0);
        assert_eq!(params.max_overscroll, 0.0);
        assert_eq!(params.spring_stiffness, config.spring_stiffness);
    }

    #[test]
    fn test_is_smooth() {
        let mut config = AnimationConfig::default();
        assert!(config.is_smooth());
        assert_eq!(config.tween_duration_ms(), 400);

        config.tween_duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
