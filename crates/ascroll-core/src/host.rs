//! The contract between the motion engine and the view it moves.
//!
//! The engine never owns the position. It reads the offset, bound and axis
//! lock through [`PositionHost`] and writes back through `move_to` /
//! `move_offset`, so any widget can carry the state however it likes.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

/// One of the two scroll axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Free-drag axis for the given axis lock
    #[inline]
    pub fn free(swipe_vertical: bool) -> Self {
        if swipe_vertical {
            Axis::Y
        } else {
            Axis::X
        }
    }

    /// Axis pinned to its bound at rest
    #[inline]
    pub fn locked(swipe_vertical: bool) -> Self {
        Self::free(swipe_vertical).other()
    }

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// A 2D offset, bound, velocity or extent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy with one component replaced
    #[inline]
    pub fn with(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => Self { x: value, ..self },
            Axis::Y => Self { y: value, ..self },
        }
    }
}

/// Everything the engine needs from the view it drives
pub trait PositionHost {
    /// Current visual offset
    fn offset(&self) -> Offset;

    /// Resting value per axis; only the locked axis is held to it
    fn bound(&self) -> Offset;

    /// Y is the free axis when true, X otherwise
    fn is_swipe_vertical(&self) -> bool;

    /// Width and height of the surface
    fn extent(&self) -> Offset;

    fn move_to(&mut self, x: f32, y: f32);

    fn move_offset(&mut self, dx: f32, dy: f32) {
        let current = self.offset();
        self.move_to(current.x + dx, current.y + dy);
    }

    /// Called when a motion driver starts (`true`) or settles (`false`)
    fn set_moving(&mut self, _moving: bool) {}

    /// The surface changed size; hosts that track their extent update it here
    fn resize(&mut self, _width: f32, _height: f32) {}
}

/// Plain in-memory host used by the CLI and tests
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollView {
    offset: Offset,
    bound: Offset,
    extent: Offset,
    swipe_vertical: bool,
    moving: bool,
    /// Number of writes since creation, stands in for invalidations
    writes: u64,
}

impl ScrollView {
    pub fn new(swipe_vertical: bool, bound: Offset, extent: Offset) -> Self {
        Self {
            offset: bound,
            bound,
            extent,
            swipe_vertical,
            moving: false,
            writes: 0,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(
            config.swipe_vertical,
            Offset::new(config.bound_x, config.bound_y),
            Offset::new(config.width, config.height),
        )
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn set_extent(&mut self, width: f32, height: f32) {
        self.extent = Offset::new(width, height);
    }

    pub fn set_bound(&mut self, bound: Offset) {
        self.bound = bound;
    }

    pub fn set_swipe_vertical(&mut self, swipe_vertical: bool) {
        self.swipe_vertical = swipe_vertical;
    }
}

impl PositionHost for ScrollView {
    fn offset(&self) -> Offset {
        self.offset
    }

    fn bound(&self) -> Offset {
        self.bound
    }

    fn is_swipe_vertical(&self) -> bool {
        self.swipe_vertical
    }

    fn extent(&self) -> Offset {
        self.extent
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.offset = Offset::new(x, y);
        self.writes += 1;
    }

    fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.set_extent(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_lock() {
        assert_eq!(Axis::free(true), Axis::Y);
        assert_eq!(Axis::locked(true), Axis::X);
        assert_eq!(Axis::free(false), Axis::X);
        assert_eq!(Axis::locked(false), Axis::Y);
    }

    #[test]
    fn test_offset_with() {
        let offset = Offset::new(1.0, 2.0);
        assert_eq!(offset.with(Axis::X, 5.0), Offset::new(5.0, 2.0));
        assert_eq!(offset.with(Axis::Y, 5.0).get(Axis::Y), 5.0);
    }

    #[test]
    fn test_move_offset_accumulates() {
        let mut view = ScrollView::new(true, Offset::ZERO, Offset::new(480.0, 800.0));
        view.move_offset(-30.0, -120.0);
        view.move_offset(10.0, 20.0);
        assert_eq!(view.offset(), Offset::new(-20.0, -100.0));
        assert_eq!(view.writes(), 2);
    }

    #[test]
    fn test_view_starts_at_bound() {
        let view = ScrollView::new(false, Offset::new(3.0, 7.0), Offset::new(100.0, 100.0));
        assert_eq!(view.offset(), Offset::new(3.0, 7.0));
        assert!(!view.is_moving());
    }
}
