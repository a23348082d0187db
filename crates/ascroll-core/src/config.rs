use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Interval between simulated frame ticks in milliseconds
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

/// Geometry of the scrollable surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Y is the free axis when true, X otherwise
    #[serde(default = "default_true")]
    pub swipe_vertical: bool,
    /// Resting value of X when X is the locked axis
    #[serde(default)]
    pub bound_x: f32,
    /// Resting value of Y when Y is the locked axis
    #[serde(default)]
    pub bound_y: f32,
    /// Surface width
    #[serde(default = "default_width")]
    pub width: f32,
    /// Surface height
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            swipe_vertical: default_true(),
            bound_x: 0.0,
            bound_y: 0.0,
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Where single and double taps come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapDetection {
    /// The input layer delivers `SingleTapConfirmed` / `DoubleTap` events
    #[default]
    Platform,
    /// Taps are recognized from down/up timing and distance
    Builtin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Displacement from the press point before a drag begins
    #[serde(default = "default_touch_slop")]
    pub touch_slop: f32,
    /// Minimum release speed (units/s) that starts a fling
    #[serde(default = "default_min_fling_velocity")]
    pub min_fling_velocity: f32,
    /// Trailing window of move samples used for release velocity
    #[serde(default = "default_velocity_window")]
    pub velocity_window_ms: u64,
    /// A press this soon after a double-tap does not stop the current motion
    #[serde(default = "default_double_tap_guard")]
    pub double_tap_guard_ms: u64,
    /// Tap source
    #[serde(default)]
    pub tap_detection: TapDetection,
    /// Longest press that still counts as a tap (builtin detection)
    #[serde(default = "default_tap_timeout")]
    pub tap_timeout_ms: u64,
    /// Window between two taps for a double-tap (builtin detection)
    #[serde(default = "default_double_tap_timeout")]
    pub double_tap_timeout_ms: u64,
    /// Distance tolerance between two taps for a double-tap (builtin detection)
    #[serde(default = "default_double_tap_slop")]
    pub double_tap_slop: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: default_touch_slop(),
            min_fling_velocity: default_min_fling_velocity(),
            velocity_window_ms: default_velocity_window(),
            double_tap_guard_ms: default_double_tap_guard(),
            tap_detection: TapDetection::default(),
            tap_timeout_ms: default_tap_timeout(),
            double_tap_timeout_ms: default_double_tap_timeout(),
            double_tap_slop: default_double_tap_slop(),
        }
    }
}

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    /// 1 - (1-t)²
    #[default]
    Decelerate,
}

/// Travel range handed to a fling along the free axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlingRange {
    /// ±extent of the surface along the free axis
    #[default]
    Extent,
    /// ±`unbounded_range`, for content with no natural limit
    Unbounded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Tween duration in milliseconds
    #[serde(default = "default_tween_duration")]
    pub tween_duration_ms: u64,
    /// Tween easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Exponential velocity decay rate of a fling, per second
    #[serde(default = "default_deceleration_rate")]
    pub deceleration_rate: f32,
    /// Stiffness of the critically damped spring used past a bound
    #[serde(default = "default_spring_stiffness")]
    pub spring_stiffness: f32,
    /// Fling settles once speed drops below this (units/s)
    #[serde(default = "default_velocity_epsilon")]
    pub velocity_epsilon: f32,
    /// Spring-back settles once this close to the edge
    #[serde(default = "default_distance_epsilon")]
    pub distance_epsilon: f32,
    /// Largest displacement past a bound
    #[serde(default = "default_max_overscroll")]
    pub max_overscroll: f32,
    /// Free-axis fling range
    #[serde(default)]
    pub fling_range: FlingRange,
    /// Half-width of the range used by `FlingRange::Unbounded`
    #[serde(default = "default_unbounded_range")]
    pub unbounded_range: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tween_duration_ms: default_tween_duration(),
            easing: EasingType::default(),
            deceleration_rate: default_deceleration_rate(),
            spring_stiffness: default_spring_stiffness(),
            velocity_epsilon: default_velocity_epsilon(),
            distance_epsilon: default_distance_epsilon(),
            max_overscroll: default_max_overscroll(),
            fling_range: FlingRange::default(),
            unbounded_range: default_unbounded_range(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_frame_interval() -> u64 {
    16 // ~60fps
}

fn default_true() -> bool {
    true
}

fn default_width() -> f32 {
    480.0
}

fn default_height() -> f32 {
    800.0
}

fn default_touch_slop() -> f32 {
    8.0
}

fn default_min_fling_velocity() -> f32 {
    50.0
}

fn default_velocity_window() -> u64 {
    100
}

fn default_double_tap_guard() -> u64 {
    50
}

fn default_tap_timeout() -> u64 {
    500 // long press threshold
}

fn default_double_tap_timeout() -> u64 {
    300
}

fn default_double_tap_slop() -> f32 {
    100.0
}

fn default_tween_duration() -> u64 {
    400
}

fn default_deceleration_rate() -> f32 {
    4.2
}

fn default_spring_stiffness() -> f32 {
    400.0
}

fn default_velocity_epsilon() -> f32 {
    1.0
}

fn default_distance_epsilon() -> f32 {
    0.5
}

fn default_max_overscroll() -> f32 {
    250.0
}

fn default_unbounded_range() -> f32 {
    8000.0
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ascroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ascroll")
            .join("config.toml")
    }

    /// Reject values the motion engine cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let view = &self.view;
        if !(view.width.is_finite() && view.width > 0.0)
            || !(view.height.is_finite() && view.height > 0.0)
        {
            return Err(crate::Error::Config(format!(
                "view size must be positive, got {}x{}",
                view.width, view.height
            )));
        }
        if !view.bound_x.is_finite() || !view.bound_y.is_finite() {
            return Err(crate::Error::Config("view bounds must be finite".into()));
        }

        let gesture = &self.gesture;
        if !(gesture.touch_slop >= 0.0) || !(gesture.min_fling_velocity >= 0.0) {
            return Err(crate::Error::Config(
                "touch_slop and min_fling_velocity must not be negative".into(),
            ));
        }

        let animation = &self.animation;
        let positive = [
            ("deceleration_rate", animation.deceleration_rate),
            ("spring_stiffness", animation.spring_stiffness),
            ("velocity_epsilon", animation.velocity_epsilon),
            ("distance_epsilon", animation.distance_epsilon),
            ("unbounded_range", animation.unbounded_range),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(crate::Error::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(animation.max_overscroll >= 0.0) {
            return Err(crate::Error::Config(
                "max_overscroll must not be negative".into(),
            ));
        }
        if self.general.frame_interval_ms == 0 {
            return Err(crate::Error::Config(
                "frame_interval_ms must be at least 1".into(),
            ));
        }
        if gesture.velocity_window_ms == 0 {
            return Err(crate::Error::Config(
                "velocity_window_ms must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
