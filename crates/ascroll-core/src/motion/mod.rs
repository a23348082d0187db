//! Motion engine: the drivers that move a [`PositionHost`](crate::PositionHost)
//! frame by frame.
//!
//! # Layers
//!
//! ## Atoms
//! - `easing` - Pure easing curves (linear, decelerate)
//! - `timing` - Elapsed-time and interpolation helpers
//! - `config` - Durations and fling parameters derived from [`AnimationConfig`](crate::config::AnimationConfig)
//!
//! ## Drivers
//! - `tween` - Eased interpolation of one axis between two values
//! - `fling` - Velocity decay with clamped rebound past a bound
//! - `driver` - The single active driver (Idle, Tween or Fling)
//!
//! ## Controller
//! - `animation` - [`AnimationManager`], which starts, stops and advances drivers
//!
//! # Usage
//!
//! ```ignore
//! use ascroll_core::motion::AnimationManager;
//! use ascroll_core::{Axis, ScrollView};
//!
//! let mut manager = AnimationManager::new(config.animation.clone());
//! manager.start_tween(&mut view, Axis::X, -30.0, 0.0, true, now_ms);
//!
//! // Once per rendered frame
//! while manager.advance(&mut view, frame_ms).active {
//!     frame_ms += 16;
//! }
//! ```

// Atoms
pub mod config;
pub mod easing;
pub mod timing;

// Drivers
pub mod driver;
pub mod fling;
pub mod tween;

// Controller
pub mod animation;

pub use animation::{AnimationManager, AnimationResult};
pub use config::AnimationConfigExt;
pub use driver::{DriverKind, MotionDriver};
pub use easing::EasingTypeExt;
pub use fling::{FlingBounds, FlingParams, FlingSimulation};
pub use tween::Tween;
