//! Gesture recognition: transforms raw pointer events into intents.
//!
//! # State Machine
//!
//! ```text
//! Idle --down--> Pressed --move(> slop)--> Dragging --up(slow)--> Idle   (DragEnd)
//!                                          Dragging --up(fast)--> Idle   (FlingBegin)
//!                Pressed --up-----------------------------------> Idle   (taps, builtin)
//! any --cancel--> Idle                                                   (DragEnd if dragging)
//! ```
//!
//! # Invariants
//!
//! 1. Drag and tap never both emit for the same down/up interaction.
//! 2. `DragBegin` is emitted exactly once per drag, before its first `DragDelta`.
//! 3. `Cancel` never produces `FlingBegin`.
//! 4. A down within `double_tap_guard_ms` of a double-tap does not emit
//!    `StopMotion`, so the double-tap's own animation survives its second press.
//!
//! # Taps
//!
//! With [`TapDetection::Platform`] taps come from `SingleTapConfirmed` and
//! `DoubleTap` events. With [`TapDetection::Builtin`] the interpreter emits
//! `SingleTap` on every quick release and `DoubleTap` on the second press of
//! a close pair, so a double-tap is preceded by the `SingleTap` of its first
//! half. Platform tap events are honoured in both modes.

use tracing::{debug, trace};

use crate::config::{GestureConfig, TapDetection};
use crate::host::Offset;

use super::event::{PointerEvent, PointerKind};
use super::intent::Intent;
use super::velocity::VelocityTracker;

/// Pointer-down lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Pressed,
    Dragging,
}

/// Stateful interpreter; feed it every pointer event routed to the surface
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    enabled: bool,
    state: GestureState,

    // Press tracking
    down_pos: Offset,
    down_ms: u64,
    last_pos: Offset,
    tracker: VelocityTracker,

    // Tap tracking
    last_double_tap_ms: Option<u64>,
    last_tap: Option<(Offset, u64)>,
    in_double_tap: bool,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        let tracker = VelocityTracker::new(config.velocity_window_ms);
        Self {
            config,
            enabled: true,
            state: GestureState::Idle,
            down_pos: Offset::ZERO,
            down_ms: 0,
            last_pos: Offset::ZERO,
            tracker,
            last_double_tap_ms: None,
            last_tap: None,
            in_double_tap: false,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Ignore all events until re-enabled; an in-flight gesture is dropped
    pub fn disable(&mut self) {
        self.enabled = false;
        self.reset();
    }

    /// Return to Idle without emitting anything
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.tracker.reset();
        self.in_double_tap = false;
    }

    /// Process a pointer event, returning the intents it produces
    pub fn on_event(&mut self, event: &PointerEvent) -> Vec<Intent> {
        let mut out = Vec::with_capacity(2);
        if !self.enabled {
            return out;
        }

        match event.kind {
            PointerKind::Down => self.on_down(event, &mut out),
            PointerKind::Move => self.on_move(event, &mut out),
            PointerKind::Up => self.on_up(event, &mut out),
            PointerKind::Cancel => self.on_cancel(&mut out),
            PointerKind::SingleTapConfirmed => {
                debug!("single tap confirmed");
                out.push(Intent::SingleTap {
                    x: event.x,
                    y: event.y,
                });
            }
            PointerKind::DoubleTap => {
                debug!("double tap");
                self.last_double_tap_ms = Some(event.timestamp_ms);
                out.push(Intent::DoubleTap {
                    x: event.x,
                    y: event.y,
                });
            }
        }

        out
    }

    fn on_down(&mut self, event: &PointerEvent, out: &mut Vec<Intent>) {
        // A down without an up for the previous gesture
        if self.state == GestureState::Dragging {
            out.push(Intent::DragEnd);
        }

        let pos = event.position();
        let now = event.timestamp_ms;

        self.in_double_tap = false;
        if self.config.tap_detection == TapDetection::Builtin {
            if let Some((tap_pos, tap_ms)) = self.last_tap.take() {
                if now.saturating_sub(tap_ms) <= self.config.double_tap_timeout_ms
                    && distance(tap_pos, pos) <= self.config.double_tap_slop
                {
                    debug!("double tap");
                    self.in_double_tap = true;
                    self.last_double_tap_ms = Some(now);
                    out.push(Intent::DoubleTap { x: pos.x, y: pos.y });
                }
            }
        }

        let guarded = self
            .last_double_tap_ms
            .is_some_and(|t| now.saturating_sub(t) <= self.config.double_tap_guard_ms);
        if guarded {
            trace!("down follows double tap, motion kept");
        } else {
            out.push(Intent::StopMotion);
        }

        self.state = GestureState::Pressed;
        self.down_pos = pos;
        self.down_ms = now;
        self.last_pos = pos;
        self.tracker.reset();
        self.tracker.add(now, pos);
    }

    fn on_move(&mut self, event: &PointerEvent, out: &mut Vec<Intent>) {
        let pos = event.position();
        match self.state {
            GestureState::Idle => return,
            GestureState::Pressed => {
                if distance(self.down_pos, pos) <= self.config.touch_slop {
                    self.tracker.add(event.timestamp_ms, pos);
                    return;
                }
                debug!("drag begin");
                self.state = GestureState::Dragging;
                self.last_tap = None;
                out.push(Intent::DragBegin);
            }
            GestureState::Dragging => {}
        }

        let dx = pos.x - self.last_pos.x;
        let dy = pos.y - self.last_pos.y;
        if dx != 0.0 || dy != 0.0 {
            out.push(Intent::DragDelta { dx, dy });
        }
        self.last_pos = pos;
        self.tracker.add(event.timestamp_ms, pos);
    }

    fn on_up(&mut self, event: &PointerEvent, out: &mut Vec<Intent>) {
        let pos = event.position();
        match self.state {
            GestureState::Idle => {}
            GestureState::Pressed => {
                if self.config.tap_detection == TapDetection::Builtin {
                    self.detect_tap(event, out);
                }
            }
            GestureState::Dragging => {
                // Trailing movement between the last move and the release
                let dx = pos.x - self.last_pos.x;
                let dy = pos.y - self.last_pos.y;
                if dx != 0.0 || dy != 0.0 {
                    out.push(Intent::DragDelta { dx, dy });
                }
                self.tracker.add(event.timestamp_ms, pos);

                let velocity = self.tracker.velocity();
                if velocity.x.hypot(velocity.y) > self.config.min_fling_velocity {
                    debug!(vx = velocity.x, vy = velocity.y, "fling");
                    out.push(Intent::FlingBegin {
                        velocity_x: velocity.x,
                        velocity_y: velocity.y,
                    });
                } else {
                    debug!("drag end");
                    out.push(Intent::DragEnd);
                }
            }
        }
        self.reset();
    }

    fn detect_tap(&mut self, event: &PointerEvent, out: &mut Vec<Intent>) {
        let held = event.timestamp_ms.saturating_sub(self.down_ms);
        if held > self.config.tap_timeout_ms {
            trace!(held, "press too long for a tap");
            self.last_tap = None;
            return;
        }
        if self.in_double_tap {
            // Second half of a double tap, already reported on its down
            self.last_tap = None;
            return;
        }
        out.push(Intent::SingleTap {
            x: event.x,
            y: event.y,
        });
        self.last_tap = Some((event.position(), event.timestamp_ms));
    }

    fn on_cancel(&mut self, out: &mut Vec<Intent>) {
        if self.state == GestureState::Dragging {
            debug!("drag cancelled");
            out.push(Intent::DragEnd);
        }
        self.last_tap = None;
        self.reset();
    }
}

#[inline]
fn distance(a: Offset, b: Offset) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}
