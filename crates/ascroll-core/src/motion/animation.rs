//! Animation controller
//!
//! Owns the one active [`MotionDriver`] and moves the host with it. Call a
//! `start_*` method to begin a motion, then `advance()` once per rendered
//! frame for as long as it reports `active`.

use tracing::{debug, trace};

use crate::config::AnimationConfig;
use crate::host::{Axis, Offset, PositionHost};

use super::config::AnimationConfigExt;
use super::driver::{DriverKind, MotionDriver};
use super::fling::{FlingBounds, FlingSimulation};
use super::tween::Tween;

/// Outcome of one frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationResult {
    /// A driver is still running; the host should schedule another frame
    pub active: bool,
}

impl AnimationResult {
    const IDLE: AnimationResult = AnimationResult { active: false };
    const ACTIVE: AnimationResult = AnimationResult { active: true };
}

/// Runs at most one tween, fling or spring-back at a time
#[derive(Debug, Clone, Default)]
pub struct AnimationManager {
    driver: MotionDriver,
    config: AnimationConfig,
}

impl AnimationManager {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            driver: MotionDriver::Idle,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Update configuration; applies to the next driver started
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    #[inline]
    pub fn driver(&self) -> &MotionDriver {
        &self.driver
    }

    #[inline]
    pub fn kind(&self) -> DriverKind {
        self.driver.kind()
    }

    /// Check if a driver is currently installed
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.driver.is_idle()
    }

    /// Animate one axis from `from` to `to`, replacing any running driver.
    ///
    /// With a zero tween duration, or when `from == to`, the host jumps
    /// straight to `to` and no driver is installed.
    pub fn start_tween<H: PositionHost + ?Sized>(
        &mut self,
        host: &mut H,
        axis: Axis,
        from: f32,
        to: f32,
        snap_to_end_on_cancel: bool,
        now_ms: u64,
    ) {
        self.stop(host, false);

        if !self.config.is_smooth() || from == to {
            write_axis(host, axis, to);
            return;
        }

        debug!(?axis, from, to, snap_to_end_on_cancel, "start tween");
        self.driver = MotionDriver::Tween(Tween::new(
            axis,
            from,
            to,
            now_ms,
            self.config.tween_duration_ms(),
            self.config.easing,
            snap_to_end_on_cancel,
        ));
        host.set_moving(true);
    }

    /// Fling from `start` with `velocity` (units/s), replacing any running driver
    pub fn start_fling<H: PositionHost + ?Sized>(
        &mut self,
        host: &mut H,
        start: Offset,
        velocity: Offset,
        bounds: FlingBounds,
        now_ms: u64,
    ) {
        self.stop(host, false);

        let simulation =
            FlingSimulation::new(start, velocity, bounds, self.config.fling_params(), now_ms);
        if simulation.is_finished() {
            trace!("fling has nothing to do");
            return;
        }

        debug!(
            x = start.x,
            y = start.y,
            vx = velocity.x,
            vy = velocity.y,
            ?bounds,
            "start fling"
        );
        self.driver = MotionDriver::Fling(simulation);
        host.set_moving(true);
    }

    /// Return an out-of-range `start` to the nearest edge of `bounds`.
    ///
    /// Returns `false`, leaving any running driver alone, when `start` is
    /// already in range.
    pub fn start_spring_back<H: PositionHost + ?Sized>(
        &mut self,
        host: &mut H,
        start: Offset,
        bounds: FlingBounds,
        now_ms: u64,
    ) -> bool {
        let Some(simulation) =
            FlingSimulation::spring_back(start, bounds, self.config.fling_params(), now_ms)
        else {
            return false;
        };

        self.stop(host, false);
        debug!(x = start.x, y = start.y, ?bounds, "start spring-back");
        self.driver = MotionDriver::Fling(simulation);
        host.set_moving(true);
        true
    }

    /// Terminate the active driver.
    ///
    /// A tween lands on its end value when `to_final_value` is set or it was
    /// started with `snap_to_end_on_cancel`; otherwise it freezes at the last
    /// written value. A fling always freezes where it is. Stopping while idle
    /// does nothing.
    pub fn stop<H: PositionHost + ?Sized>(&mut self, host: &mut H, to_final_value: bool) {
        match self.driver.take() {
            MotionDriver::Idle => return,
            MotionDriver::Tween(tween) => {
                let value = tween.value_on_cancel(to_final_value);
                debug!(axis = ?tween.axis, value, "stop tween");
                write_axis(host, tween.axis, value);
            }
            MotionDriver::Fling(simulation) => {
                debug!(
                    elapsed_ms = simulation.elapsed_ms(),
                    frames = simulation.frames(),
                    "stop fling"
                );
            }
        }
        host.set_moving(false);
    }

    /// Stop a fling or spring-back, leaving a tween running
    pub fn stop_moving<H: PositionHost + ?Sized>(&mut self, host: &mut H) {
        if self.kind() == DriverKind::Fling {
            self.stop(host, false);
        }
    }

    /// Advance the active driver to `now_ms` and write the result to the host.
    ///
    /// Call once per rendered frame. Does nothing and reports inactive when
    /// no driver is installed.
    pub fn advance<H: PositionHost + ?Sized>(
        &mut self,
        host: &mut H,
        now_ms: u64,
    ) -> AnimationResult {
        let finished = match &mut self.driver {
            MotionDriver::Idle => return AnimationResult::IDLE,
            MotionDriver::Tween(tween) => {
                let value = tween.sample(now_ms);
                write_axis(host, tween.axis, value);
                let done = tween.is_finished(now_ms);
                if done {
                    debug!(axis = ?tween.axis, value, "tween finished");
                }
                done
            }
            MotionDriver::Fling(simulation) => {
                let position = simulation.sample(now_ms);
                host.move_to(position.x, position.y);
                let done = simulation.is_finished();
                if done {
                    debug!(
                        elapsed_ms = simulation.elapsed_ms(),
                        frames = simulation.frames(),
                        x = position.x,
                        y = position.y,
                        "fling finished"
                    );
                }
                done
            }
        };

        if finished {
            self.driver = MotionDriver::Idle;
            host.set_moving(false);
            AnimationResult::IDLE
        } else {
            AnimationResult::ACTIVE
        }
    }
}

fn write_axis<H: PositionHost + ?Sized>(host: &mut H, axis: Axis, value: f32) {
    let offset = host.offset().with(axis, value);
    host.move_to(offset.x, offset.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScrollView;

    fn view() -> ScrollView {
        ScrollView::new(true, Offset::ZERO, Offset::new(480.0, 800.0))
    }

    fn vertical_bounds() -> FlingBounds {
        FlingBounds::new(0.0, 0.0, -800.0, 800.0)
    }

    fn run_to_idle(manager: &mut AnimationManager, view: &mut ScrollView, mut now: u64) -> u64 {
        let mut frames = 0;
        while manager.advance(view, now).active {
            now += 16;
            frames += 1;
            assert!(frames < 10_000, "animation did not settle");
        }
        now
    }

    #[test]
    fn test_tween_converges_exactly() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        view.move_to(-30.0, -120.0);

        manager.start_tween(&mut view, Axis::X, -30.0, 0.0, true, 1000);
        assert_eq!(manager.kind(), DriverKind::Tween);
        assert!(view.is_moving());

        assert!(manager.advance(&mut view, 1200).active);
        assert!(view.offset().x > -30.0 && view.offset().x < 0.0);
        assert_eq!(view.offset().y, -120.0);

        assert!(!manager.advance(&mut view, 1400).active);
        assert_eq!(view.offset(), Offset::new(0.0, -120.0));
        assert!(!manager.is_animating());
        assert!(!view.is_moving());
    }

    #[test]
    fn test_zero_duration_tween_jumps() {
        let config = AnimationConfig {
            tween_duration_ms: 0,
            ..Default::default()
        };
        let mut manager = AnimationManager::new(config);
        let mut view = view();
        manager.start_tween(&mut view, Axis::Y, 0.0, 50.0, false, 0);
        assert!(!manager.is_animating());
        assert_eq!(view.offset().y, 50.0);
    }

    #[test]
    fn test_new_driver_supersedes_old() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();

        manager.start_tween(&mut view, Axis::X, 0.0, 100.0, false, 0);
        manager.start_fling(&mut view, Offset::ZERO, Offset::new(0.0, 600.0), vertical_bounds(), 10);
        assert_eq!(manager.kind(), DriverKind::Fling);

        manager.start_tween(&mut view, Axis::X, 0.0, 100.0, false, 20);
        assert_eq!(manager.kind(), DriverKind::Tween);
    }

    #[test]
    fn test_stop_tween_freezes_or_snaps() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();

        manager.start_tween(&mut view, Axis::X, 0.0, 100.0, false, 0);
        manager.advance(&mut view, 100);
        let frozen = view.offset().x;
        manager.stop(&mut view, false);
        assert_eq!(view.offset().x, frozen);
        assert!(frozen < 100.0);

        manager.start_tween(&mut view, Axis::X, frozen, 0.0, false, 200);
        manager.advance(&mut view, 250);
        manager.stop(&mut view, true);
        assert_eq!(view.offset().x, 0.0);

        manager.start_tween(&mut view, Axis::X, 0.0, 40.0, true, 300);
        manager.advance(&mut view, 310);
        manager.stop(&mut view, false);
        assert_eq!(view.offset().x, 40.0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        manager.start_fling(&mut view, Offset::ZERO, Offset::new(0.0, 700.0), vertical_bounds(), 0);
        manager.advance(&mut view, 16);

        manager.stop(&mut view, false);
        let after_first = view.clone();
        manager.stop(&mut view, true);
        assert_eq!(view, after_first);
        assert!(!manager.is_animating());
        assert!(!manager.advance(&mut view, 32).active);
    }

    #[test]
    fn test_stop_moving_spares_tween() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        manager.start_tween(&mut view, Axis::X, 0.0, 10.0, false, 0);
        manager.stop_moving(&mut view);
        assert_eq!(manager.kind(), DriverKind::Tween);

        manager.start_fling(&mut view, Offset::ZERO, Offset::new(0.0, 700.0), vertical_bounds(), 0);
        manager.stop_moving(&mut view);
        assert!(!manager.is_animating());
    }

    #[test]
    fn test_fling_terminates_within_bounds() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        manager.start_fling(&mut view, Offset::ZERO, Offset::new(0.0, 800.0), vertical_bounds(), 0);
        run_to_idle(&mut manager, &mut view, 16);
        let y = view.offset().y;
        assert!(y > 0.0 && y <= 800.0, "y = {}", y);
        assert_eq!(view.offset().x, 0.0);
    }

    #[test]
    fn test_degenerate_fling_installs_nothing() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        manager.start_fling(&mut view, Offset::ZERO, Offset::ZERO, vertical_bounds(), 0);
        assert!(!manager.is_animating());
        assert!(!view.is_moving());
    }

    #[test]
    fn test_spring_back() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        assert!(!manager.start_spring_back(&mut view, Offset::ZERO, vertical_bounds(), 0));

        view.move_to(0.0, 900.0);
        let start = view.offset();
        assert!(manager.start_spring_back(&mut view, start, vertical_bounds(), 0));
        run_to_idle(&mut manager, &mut view, 16);
        assert_eq!(view.offset(), Offset::new(0.0, 800.0));
    }

    #[test]
    fn test_idle_advance_does_not_write() {
        let mut manager = AnimationManager::with_defaults();
        let mut view = view();
        assert!(!manager.advance(&mut view, 0).active);
        assert_eq!(view.writes(), 0);
    }
}
