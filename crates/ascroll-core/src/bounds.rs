//! Resting-bound policy for the locked axis
//!
//! Only the free axis is meant to move freely; at rest the locked axis must
//! sit on its bound. When a drag ends with the locked axis displaced, the
//! policy asks for a corrective tween that lands exactly on the bound even if
//! it is interrupted.

use crate::host::{Axis, Offset};

/// A tween the caller should start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenRequest {
    pub axis: Axis,
    pub from: f32,
    pub to: f32,
    pub snap_to_end_on_cancel: bool,
}

/// Corrective tween for the locked axis after a drag ends, if one is needed
pub fn on_drag_end(swipe_vertical: bool, offset: Offset, bound: Offset) -> Option<TweenRequest> {
    snap_locked_axis(swipe_vertical, offset, bound)
}

/// Tween the locked axis back onto its bound, or `None` when it is already there
pub fn snap_locked_axis(swipe_vertical: bool, offset: Offset, bound: Offset) -> Option<TweenRequest> {
    let axis = Axis::locked(swipe_vertical);
    let current = offset.get(axis);
    let target = bound.get(axis);

    if current == target {
        return None;
    }

    Some(TweenRequest {
        axis,
        from: current,
        to: target,
        snap_to_end_on_cancel: true,
    })
}

/// Whether the locked axis sits on its bound
#[inline]
pub fn is_at_rest(swipe_vertical: bool, offset: Offset, bound: Offset) -> bool {
    let axis = Axis::locked(swipe_vertical);
    offset.get(axis) == bound.get(axis)
}
