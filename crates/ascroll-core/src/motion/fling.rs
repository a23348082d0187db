//! Fling and spring-back simulation.
//!
//! Each axis runs its own closed-form model, sampled at whatever time the
//! host's frame clock reports:
//!
//! - **Decay**: inside `[min, max]` the velocity decays exponentially,
//!   `v(t) = v0·e^(-kt)`, so the total travel is bounded by `v0 / k`.
//! - **Spring**: past a bound the axis is pulled back to the edge by a
//!   critically damped spring. A fling that runs out of room enters this phase
//!   at the exact crossing time with its residual velocity; a spring-back
//!   starts here with zero velocity.
//!
//! The displacement a fling carries past an edge is hard-clamped to
//! `max_overscroll`. A motion that starts further out than that (a release
//! after dragging well past the edge) springs back from where it is, limited
//! only by its starting displacement, so it never jumps on its first frame. An axis
//! whose range collapses to a single point (`min == max`) just springs onto
//! that point, which is how a fling keeps the locked axis on its bound.
//!
//! Because both phases are analytic, large or irregular frame gaps never
//! destabilize the simulation, and termination only depends on elapsed time.

use crate::host::{Axis, Offset};

use super::timing::elapsed_ms;

/// Physics constants for a fling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingParams {
    /// Exponential velocity decay rate, per second
    pub deceleration_rate: f32,
    /// Spring stiffness (unit mass); angular frequency is `sqrt(stiffness)`
    pub spring_stiffness: f32,
    /// Settle once speed drops below this (units/s)
    pub velocity_epsilon: f32,
    /// Spring-back settles once this close to the edge
    pub distance_epsilon: f32,
    /// Largest displacement past a bound
    pub max_overscroll: f32,
}

impl Default for FlingParams {
    fn default() -> Self {
        use super::config::AnimationConfigExt;
        crate::config::AnimationConfig::default().fling_params()
    }
}

/// Travel limits for both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl FlingBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// `(min, max)` for one axis, ordered
    pub fn range(&self, axis: Axis) -> (f32, f32) {
        let (a, b) = match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        };
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn contains(&self, offset: Offset) -> bool {
        [Axis::X, Axis::Y].into_iter().all(|axis| {
            let (min, max) = self.range(axis);
            let value = offset.get(axis);
            value >= min && value <= max
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Decay {
        start: f64,
        origin: f64,
        velocity: f64,
    },
    Spring {
        start: f64,
        edge: f64,
        displacement: f64,
        velocity: f64,
    },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisMotion {
    min: f64,
    max: f64,
    phase: Phase,
    position: f64,
    velocity: f64,
    /// Largest displacement past the edge for the current spring
    overscroll_limit: f64,
}

impl AxisMotion {
    fn new(start: f32, velocity: f32, (min, max): (f32, f32), max_overscroll: f32) -> Self {
        let start = start as f64;
        let velocity = if velocity.is_finite() {
            velocity as f64
        } else {
            0.0
        };
        let (min, max) = (min as f64, max as f64);
        let max_overscroll = max_overscroll as f64;
        let mut overscroll_limit = max_overscroll;

        let phase = if start < min || start > max {
            let edge = if start < min { min } else { max };
            overscroll_limit = max_overscroll.max((start - edge).abs());
            Phase::Spring {
                start: 0.0,
                edge,
                displacement: start - edge,
                velocity,
            }
        } else if velocity == 0.0 {
            Phase::Finished
        } else {
            Phase::Decay {
                start: 0.0,
                origin: start,
                velocity,
            }
        };

        Self {
            min,
            max,
            phase,
            position: start,
            velocity,
            overscroll_limit,
        }
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Time after which a decay starting at `origin` reaches the edge it is
    /// heading for, if it gets there at all
    fn crossing_time(&self, origin: f64, velocity: f64, k: f64) -> Option<f64> {
        let edge = if velocity > 0.0 { self.max } else { self.min };
        let distance = (edge - origin) * velocity.signum();
        let travel = velocity.abs() / k;
        if distance < travel {
            Some(-(1.0 - distance.max(0.0) / travel).ln() / k)
        } else {
            None
        }
    }

    fn sample(&mut self, t: f64, params: &FlingParams) {
        let k = params.deceleration_rate as f64;
        let omega = (params.spring_stiffness as f64).sqrt();
        let velocity_epsilon = params.velocity_epsilon as f64;
        let distance_epsilon = params.distance_epsilon as f64;

        loop {
            match self.phase {
                Phase::Finished => return,
                Phase::Decay {
                    start,
                    origin,
                    velocity,
                } => {
                    let dt = (t - start).max(0.0);
                    if let Some(crossing) = self.crossing_time(origin, velocity, k) {
                        if dt >= crossing {
                            let edge = if velocity > 0.0 { self.max } else { self.min };
                            self.overscroll_limit = params.max_overscroll as f64;
                            self.phase = Phase::Spring {
                                start: start + crossing,
                                edge,
                                displacement: 0.0,
                                velocity: velocity * (-k * crossing).exp(),
                            };
                            continue;
                        }
                    }

                    let decay = (-k * dt).exp();
                    self.velocity = velocity * decay;
                    self.position = origin + velocity / k * (1.0 - decay);
                    if self.velocity.abs() < velocity_epsilon {
                        self.velocity = 0.0;
                        self.phase = Phase::Finished;
                    }
                    return;
                }
                Phase::Spring {
                    start,
                    edge,
                    displacement,
                    velocity,
                } => {
                    let dt = (t - start).max(0.0);
                    let b = velocity + omega * displacement;
                    let envelope = (-omega * dt).exp();
                    let x = (displacement + b * dt) * envelope;
                    let v = (velocity - omega * b * dt) * envelope;

                    // Back inside a non-degenerate range: keep coasting from the edge
                    let outside = if edge == self.max { x >= 0.0 } else { x <= 0.0 };
                    if !outside && self.min < self.max {
                        self.phase = Phase::Decay {
                            start: t,
                            origin: edge,
                            velocity: v,
                        };
                        continue;
                    }

                    self.velocity = v;
                    self.position = edge + x.clamp(-self.overscroll_limit, self.overscroll_limit);
                    if x.abs() < distance_epsilon && v.abs() < velocity_epsilon {
                        self.position = edge;
                        self.velocity = 0.0;
                        self.phase = Phase::Finished;
                    }
                    return;
                }
            }
        }
    }

    /// Where this axis is expected to come to rest
    fn final_position(&self, params: &FlingParams) -> f64 {
        match self.phase {
            Phase::Decay {
                origin, velocity, ..
            } => (origin + velocity / params.deceleration_rate as f64).clamp(self.min, self.max),
            Phase::Spring { edge, .. } => edge,
            Phase::Finished => self.position,
        }
    }
}

/// Two-axis fling state, sampled once per frame
#[derive(Debug, Clone, PartialEq)]
pub struct FlingSimulation {
    x: AxisMotion,
    y: AxisMotion,
    params: FlingParams,
    start_ms: u64,
    /// Latest elapsed time seen; sampling never runs backwards
    elapsed_ms: u64,
    frames: u32,
}

impl FlingSimulation {
    pub fn new(
        start: Offset,
        velocity: Offset,
        bounds: FlingBounds,
        params: FlingParams,
        now_ms: u64,
    ) -> Self {
        Self {
            x: AxisMotion::new(start.x, velocity.x, bounds.range(Axis::X), params.max_overscroll),
            y: AxisMotion::new(start.y, velocity.y, bounds.range(Axis::Y), params.max_overscroll),
            params,
            start_ms: now_ms,
            elapsed_ms: 0,
            frames: 0,
        }
    }

    /// Return an out-of-range position to the nearest edge.
    ///
    /// Returns `None` when `start` is already inside `bounds`.
    pub fn spring_back(
        start: Offset,
        bounds: FlingBounds,
        params: FlingParams,
        now_ms: u64,
    ) -> Option<Self> {
        if bounds.contains(start) {
            return None;
        }
        Some(Self::new(start, Offset::ZERO, bounds, params, now_ms))
    }

    /// Advance to `now_ms` and return the new position
    pub fn sample(&mut self, now_ms: u64) -> Offset {
        self.elapsed_ms = self.elapsed_ms.max(elapsed_ms(self.start_ms, now_ms));
        self.frames += 1;

        let t = self.elapsed_ms as f64 / 1000.0;
        self.x.sample(t, &self.params);
        self.y.sample(t, &self.params);
        self.position()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.x.is_finished() && self.y.is_finished()
    }

    pub fn position(&self) -> Offset {
        Offset::new(self.x.position as f32, self.y.position as f32)
    }

    pub fn velocity(&self) -> Offset {
        Offset::new(self.x.velocity as f32, self.y.velocity as f32)
    }

    /// Predicted resting position
    pub fn final_position(&self) -> Offset {
        Offset::new(
            self.x.final_position(&self.params) as f32,
            self.y.final_position(&self.params) as f32,
        )
    }

    /// Simulated time consumed so far
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Number of samples taken
    #[inline]
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: u64 = 16;

    fn run(sim: &mut FlingSimulation, start_ms: u64) -> (Offset, u32) {
        let mut now = start_ms;
        let mut frames = 0;
        while !sim.is_finished() {
            now += FRAME_MS;
            sim.sample(now);
            frames += 1;
            assert!(frames < 10_000, "fling did not settle");
        }
        (sim.position(), frames)
    }

    #[test]
    fn test_zero_velocity_in_range_is_finished() {
        let sim = FlingSimulation::new(
            Offset::new(0.0, 10.0),
            Offset::ZERO,
            FlingBounds::new(0.0, 0.0, -800.0, 800.0),
            FlingParams::default(),
            0,
        );
        assert!(sim.is_finished());
        assert_eq!(sim.position(), Offset::new(0.0, 10.0));
    }

    #[test]
    fn test_decay_travel_and_direction() {
        let params = FlingParams::default();
        let mut sim = FlingSimulation::new(
            Offset::ZERO,
            Offset::new(0.0, -800.0),
            FlingBounds::new(0.0, 0.0, -8000.0, 8000.0),
            params,
            0,
        );
        let predicted = sim.final_position();
        let (end, frames) = run(&mut sim, 0);

        let travel = 800.0 / params.deceleration_rate;
        assert!(end.y < 0.0);
        assert!(end.y > -travel - 0.01);
        assert!((end.y - predicted.y).abs() < 1.0, "{} vs {}", end.y, predicted.y);
        assert_eq!(end.x, 0.0);
        assert!(frames > 10);
    }

    #[test]
    fn test_rebound_settles_on_edge() {
        let mut sim = FlingSimulation::new(
            Offset::new(0.0, 700.0),
            Offset::new(0.0, 5000.0),
            FlingBounds::new(0.0, 0.0, -800.0, 800.0),
            FlingParams::default(),
            0,
        );
        let mut now = 0;
        let mut overshoot: f32 = 0.0;
        while !sim.is_finished() {
            now += FRAME_MS;
            let p = sim.sample(now);
            overshoot = overshoot.max(p.y - 800.0);
        }
        assert!(overshoot > 0.0, "expected to pass the edge");
        assert!(overshoot <= FlingParams::default().max_overscroll);
        assert_eq!(sim.position().y, 800.0);
    }

    #[test]
    fn test_zero_overscroll_is_hard_clamp() {
        let params = FlingParams {
            max_overscroll: 0.0,
            ..Default::default()
        };
        let mut sim = FlingSimulation::new(
            Offset::ZERO,
            Offset::new(-9000.0, 0.0),
            FlingBounds::new(-100.0, 100.0, 0.0, 0.0),
            params,
            0,
        );
        let mut now = 0;
        while !sim.is_finished() {
            now += FRAME_MS;
            assert!(sim.sample(now).x >= -100.0);
        }
        assert_eq!(sim.position().x, -100.0);
    }

    #[test]
    fn test_locked_axis_springs_onto_point_range() {
        let mut sim = FlingSimulation::new(
            Offset::new(-30.0, -120.0),
            Offset::new(0.0, 600.0),
            FlingBounds::new(0.0, 0.0, -800.0, 800.0),
            FlingParams::default(),
            0,
        );
        let (end, _) = run(&mut sim, 0);
        assert_eq!(end.x, 0.0);
        assert!(end.y > -120.0 && end.y <= 800.0);
    }

    #[test]
    fn test_spring_back_only_when_out_of_range() {
        let bounds = FlingBounds::new(0.0, 0.0, -800.0, 800.0);
        assert!(FlingSimulation::spring_back(Offset::new(0.0, 5.0), bounds, FlingParams::default(), 0).is_none());

        let mut sim =
            FlingSimulation::spring_back(Offset::new(0.0, -950.0), bounds, FlingParams::default(), 0)
                .unwrap();
        let (end, _) = run(&mut sim, 0);
        assert_eq!(end, Offset::new(0.0, -800.0));
    }

    #[test]
    fn test_fling_from_far_past_edge_is_continuous() {
        let bounds = FlingBounds::new(0.0, 0.0, -800.0, 800.0);
        let start = Offset::new(0.0, -3200.0);

        for vy in [-800.0, 0.0, 800.0] {
            let mut sim =
                FlingSimulation::new(start, Offset::new(0.0, vy), bounds, FlingParams::default(), 0);
            let first = sim.sample(FRAME_MS).y;
            assert!((first - start.y).abs() < 150.0, "vy {}: first frame jumped to {}", vy, first);

            let mut previous = first;
            let mut now = FRAME_MS;
            while !sim.is_finished() {
                now += FRAME_MS;
                let y = sim.sample(now).y;
                assert!((y - previous).abs() < 400.0, "vy {}: jumped {} -> {}", vy, previous, y);
                assert!(y >= start.y - 1.0, "vy {}: overshot further out to {}", vy, y);
                previous = y;
                assert!(now < 60_000, "did not settle");
            }
            assert_eq!(sim.position().y, -800.0);
        }
    }

    #[test]
    fn test_single_large_gap_finishes() {
        let mut sim = FlingSimulation::new(
            Offset::ZERO,
            Offset::new(0.0, 4000.0),
            FlingBounds::new(0.0, 0.0, -800.0, 800.0),
            FlingParams::default(),
            100,
        );
        sim.sample(100 + 60_000);
        assert!(sim.is_finished());
        assert_eq!(sim.position().y, 800.0);
    }

    #[test]
    fn test_clock_backwards_does_not_rewind() {
        let mut sim = FlingSimulation::new(
            Offset::ZERO,
            Offset::new(0.0, 500.0),
            FlingBounds::new(0.0, 0.0, -8000.0, 8000.0),
            FlingParams::default(),
            1000,
        );
        let ahead = sim.sample(1200);
        let behind = sim.sample(1100);
        assert_eq!(ahead, behind);
        assert_eq!(sim.elapsed_ms(), 200);
        assert_eq!(sim.frames(), 2);
    }

    #[test]
    fn test_non_finite_velocity_is_ignored() {
        let sim = FlingSimulation::new(
            Offset::ZERO,
            Offset::new(f32::NAN, f32::INFINITY),
            FlingBounds::new(-10.0, 10.0, -10.0, 10.0),
            FlingParams::default(),
            0,
        );
        assert!(sim.is_finished());
    }

    #[test]
    fn test_swapped_bounds_are_ordered() {
        let bounds = FlingBounds::new(10.0, -10.0, 0.0, 0.0);
        assert_eq!(bounds.range(Axis::X), (-10.0, 10.0));
        assert!(bounds.contains(Offset::new(5.0, 0.0)));
    }
}
