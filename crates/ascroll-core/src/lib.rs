pub mod bounds;
pub mod config;
pub mod error;
pub mod gesture;
pub mod host;
pub mod motion;
pub mod surface;

pub use config::{AppConfig, EasingType, FlingRange, TapDetection};
pub use error::{Error, Result};
pub use host::{Axis, Offset, PositionHost, ScrollView};
pub use surface::ScrollSurface;
