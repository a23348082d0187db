use serde::{Deserialize, Serialize};

use crate::host::Offset;

/// Kind of pointer event delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Pointer taken over by a container; never produces a fling
    Cancel,
    /// Platform confirmed a single tap (no second tap followed)
    SingleTapConfirmed,
    /// Platform recognized a double tap
    DoubleTap,
}

/// A pointer sample in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    #[serde(alias = "t")]
    pub timestamp_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            kind,
            x,
            y,
            timestamp_ms,
        }
    }

    pub fn down(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Down, x, y, timestamp_ms)
    }

    pub fn moved(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Move, x, y, timestamp_ms)
    }

    pub fn up(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Up, x, y, timestamp_ms)
    }

    pub fn cancel(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Cancel, x, y, timestamp_ms)
    }

    pub fn single_tap(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::SingleTapConfirmed, x, y, timestamp_ms)
    }

    pub fn double_tap(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::DoubleTap, x, y, timestamp_ms)
    }

    #[inline]
    pub fn position(&self) -> Offset {
        Offset::new(self.x, self.y)
    }
}
