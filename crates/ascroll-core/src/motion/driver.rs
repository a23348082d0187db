//! The single active motion source

use std::fmt;

use super::fling::FlingSimulation;
use super::tween::Tween;

/// What is currently moving the host, if anything
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MotionDriver {
    #[default]
    Idle,
    Tween(Tween),
    Fling(FlingSimulation),
}

/// Payload-free tag for a [`MotionDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Idle,
    Tween,
    Fling,
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriverKind::Idle => "idle",
            DriverKind::Tween => "tween",
            DriverKind::Fling => "fling",
        };
        f.write_str(name)
    }
}

impl MotionDriver {
    pub fn kind(&self) -> DriverKind {
        match self {
            MotionDriver::Idle => DriverKind::Idle,
            MotionDriver::Tween(_) => DriverKind::Tween,
            MotionDriver::Fling(_) => DriverKind::Fling,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, MotionDriver::Idle)
    }

    /// Replace with `Idle`, returning the previous driver
    #[inline]
    pub fn take(&mut self) -> MotionDriver {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EasingType;
    use crate::host::Axis;

    #[test]
    fn test_take_leaves_idle() {
        let mut driver = MotionDriver::Tween(Tween::new(
            Axis::X,
            0.0,
            1.0,
            0,
            400,
            EasingType::Decelerate,
            false,
        ));
        assert_eq!(driver.kind(), DriverKind::Tween);

        let previous = driver.take();
        assert_eq!(previous.kind(), DriverKind::Tween);
        assert!(driver.is_idle());
        assert_eq!(driver.take().kind(), DriverKind::Idle);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DriverKind::Fling.to_string(), "fling");
    }
}
