//! A scrollable surface: gesture interpreter, animation manager and bound
//! policy wired to one [`PositionHost`].
//!
//! The surface is driven from outside. Feed every pointer event to
//! [`ScrollSurface::on_event`] and call [`ScrollSurface::tick`] once per
//! frame while it reports `active`.

use tracing::{debug, info, trace};

use crate::bounds::{self, TweenRequest};
use crate::config::{AnimationConfig, AppConfig, FlingRange};
use crate::gesture::{GestureInterpreter, Intent, PointerEvent};
use crate::host::{Axis, Offset, PositionHost};
use crate::motion::{AnimationManager, AnimationResult, DriverKind, FlingBounds};

pub struct ScrollSurface<H: PositionHost> {
    host: H,
    interpreter: GestureInterpreter,
    animation: AnimationManager,
}

impl<H: PositionHost> ScrollSurface<H> {
    pub fn new(host: H, config: &AppConfig) -> Self {
        Self {
            host,
            interpreter: GestureInterpreter::new(config.gesture.clone()),
            animation: AnimationManager::new(config.animation.clone()),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    pub fn animation(&self) -> &AnimationManager {
        &self.animation
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    #[inline]
    pub fn driver_kind(&self) -> DriverKind {
        self.animation.kind()
    }

    pub fn enable(&mut self) {
        self.interpreter.enable();
    }

    /// Ignore gestures; a running animation still finishes on `tick`.
    /// A drag in progress is abandoned with the locked axis on its bound.
    pub fn disable(&mut self) {
        let dragging = self.interpreter.is_dragging();
        self.interpreter.disable();
        if dragging {
            self.place_locked_axis();
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.interpreter.is_enabled()
    }

    /// Interpret a pointer event and act on the intents it produces.
    ///
    /// The intents are returned for callers that want to observe them.
    pub fn on_event(&mut self, event: &PointerEvent) -> Vec<Intent> {
        let intents = self.interpreter.on_event(event);
        for intent in &intents {
            self.apply(*intent, event.timestamp_ms);
        }
        intents
    }

    /// Advance the active animation to `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> AnimationResult {
        self.animation.advance(&mut self.host, now_ms)
    }

    /// Stop everything and put the host back on its bound
    pub fn reset(&mut self) {
        self.animation.stop(&mut self.host, false);
        self.interpreter.reset();
        let bound = self.host.bound();
        self.host.move_to(bound.x, bound.y);
        info!(x = bound.x, y = bound.y, "surface reset");
    }

    /// The surface changed size. Motion stops and the locked axis is placed
    /// on its bound.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.animation.stop(&mut self.host, true);
        self.interpreter.reset();
        self.host.resize(width, height);
        self.place_locked_axis();
        debug!(width, height, "surface resized");
    }

    /// Put the locked axis on its bound without animating
    fn place_locked_axis(&mut self) {
        let axis = Axis::locked(self.host.is_swipe_vertical());
        let bound = self.host.bound().get(axis);
        let offset = self.host.offset();
        if offset.get(axis) != bound {
            let offset = offset.with(axis, bound);
            self.host.move_to(offset.x, offset.y);
        }
    }

    /// Stop whatever is running, leaving the locked axis on its bound
    fn halt(&mut self) {
        let was_fling = self.animation.kind() == DriverKind::Fling;
        self.animation.stop(&mut self.host, false);
        // A frozen fling may have been mid-way through correcting the locked axis
        if was_fling {
            self.place_locked_axis();
        }
    }

    fn apply(&mut self, intent: Intent, now_ms: u64) {
        match intent {
            Intent::StopMotion => self.halt(),
            Intent::DragBegin => {
                // Only a press guarded after a double tap can leave motion running here
                if self.animation.is_animating() {
                    debug!(kind = ?self.animation.kind(), "drag takes over running motion");
                    self.halt();
                }
                trace!("drag begin");
            }
            Intent::DragDelta { dx, dy } => self.host.move_offset(dx, dy),
            Intent::DragEnd => self.on_drag_end(now_ms),
            Intent::FlingBegin {
                velocity_x,
                velocity_y,
            } => self.fling(Offset::new(velocity_x, velocity_y), now_ms),
            Intent::SingleTap { x, y } => debug!(x, y, "single tap"),
            Intent::DoubleTap { .. } => self.on_double_tap(now_ms),
        }
    }

    fn on_drag_end(&mut self, now_ms: u64) {
        // Released past the end of the free axis: spring back onto the range
        let offset = self.host.offset();
        let travel = self.travel_bounds();
        let (min, max) = travel.range(Axis::free(self.host.is_swipe_vertical()));
        let free = offset.get(Axis::free(self.host.is_swipe_vertical()));
        if (free < min || free > max)
            && self
                .animation
                .start_spring_back(&mut self.host, offset, travel, now_ms)
        {
            return;
        }

        let request = bounds::on_drag_end(
            self.host.is_swipe_vertical(),
            self.host.offset(),
            self.host.bound(),
        );
        if let Some(request) = request {
            self.start_tween(request, now_ms);
        }
    }

    fn on_double_tap(&mut self, now_ms: u64) {
        let request = bounds::snap_locked_axis(
            self.host.is_swipe_vertical(),
            self.host.offset(),
            self.host.bound(),
        );
        match request {
            Some(request) => self.start_tween(request, now_ms),
            None => trace!("double tap on bound"),
        }
    }

    /// Fling along the free axis with a release velocity in units/s.
    ///
    /// The free-axis speed is clamped to the surface extent along that axis
    /// and the locked-axis component is ignored. A zero free-axis speed ends
    /// like a slow drag release.
    pub fn fling(&mut self, velocity: Offset, now_ms: u64) {
        let swipe_vertical = self.host.is_swipe_vertical();
        let free = Axis::free(swipe_vertical);
        let extent = self.host.extent().get(free).abs();

        let speed = velocity.get(free);
        if speed == 0.0 || !speed.is_finite() {
            self.on_drag_end(now_ms);
            return;
        }
        let speed = speed.clamp(-extent, extent);
        let velocity = Offset::ZERO.with(free, speed);

        let bounds = self.travel_bounds();
        let start = self.host.offset();
        self.animation
            .start_fling(&mut self.host, start, velocity, bounds, now_ms);

        // A fling with nothing to do still has to leave the locked axis at rest
        if !self.animation.is_animating() {
            self.on_drag_end(now_ms);
        }
    }

    /// Where a fling or spring-back may take the host
    fn travel_bounds(&self) -> FlingBounds {
        let swipe_vertical = self.host.is_swipe_vertical();
        let extent = self.host.extent().get(Axis::free(swipe_vertical)).abs();
        fling_bounds(
            self.animation.config(),
            swipe_vertical,
            extent,
            self.host.bound(),
        )
    }

    fn start_tween(&mut self, request: TweenRequest, now_ms: u64) {
        self.animation.start_tween(
            &mut self.host,
            request.axis,
            request.from,
            request.to,
            request.snap_to_end_on_cancel,
            now_ms,
        );
    }
}

/// Free axis ranges over ±extent (or the unbounded range), the locked axis
/// is pinned to its bound
fn fling_bounds(
    config: &AnimationConfig,
    swipe_vertical: bool,
    extent: f32,
    bound: Offset,
) -> FlingBounds {
    let reach = match config.fling_range {
        FlingRange::Extent => extent,
        FlingRange::Unbounded => config.unbounded_range,
    };
    if swipe_vertical {
        FlingBounds::new(bound.x, bound.x, -reach, reach)
    } else {
        FlingBounds::new(-reach, reach, bound.y, bound.y)
    }
}
