//! Per-tick motion of the particle ring.
//!
//! Every tick each particle takes one step made of three parts:
//!
//! 1. the full offset to its successor in the ring,
//! 2. `CENTROID_PULL * (centroid - position)`, with the centroid taken over
//!    the positions at the start of the tick,
//! 3. an independent integer jitter in `[-27, 27]` on each axis.
//!
//! The step is truncated toward zero to whole pixels, shortened to at most
//! [`SPEED`] pixels, applied, and the result clamped into `[0, W] × [0, H]`.
//! The upper bound is inclusive: a particle may sit on column `W` or row `H`,
//! one past the last drawable pixel.
//!
//! All particles read the positions from the start of the tick; the update
//! is a single generation, not in-place Gauss-Seidel.

use glam::{DVec2, IVec2};
use rand::Rng;

use crate::particle::ParticleSet;

/// Longest step a particle may take in one tick, in pixels.
pub const SPEED: f64 = 60.0;

/// Width of the jitter range. Jitter on each axis is uniform in
/// `[-JITTER / 2, JITTER / 2]`.
pub const JITTER: i32 = 55;

/// Coefficient applied to `centroid - position`.
pub const CENTROID_PULL: f64 = -0.003;

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Centroid of the positions at the start of the tick.
    pub centroid: Option<DVec2>,
    /// Particles whose raw step was non-zero.
    pub moved: usize,
}

/// The motion rules, with their constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionModel {
    speed: f64,
    jitter: i32,
    centroid_pull: f64,
}

impl Default for MotionModel {
    fn default() -> Self {
        Self {
            speed: SPEED,
            jitter: JITTER,
            centroid_pull: CENTROID_PULL,
        }
    }
}

impl MotionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same model with jitter switched off. No random numbers are drawn.
    pub fn without_jitter(self) -> Self {
        Self { jitter: 0, ..self }
    }

    /// Mean position of all particles, or `None` for an empty store.
    pub fn centroid(particles: &ParticleSet) -> Option<DVec2> {
        if particles.is_empty() {
            return None;
        }
        let mut sum = DVec2::ZERO;
        for p in particles {
            sum += p.position.as_dvec2();
        }
        Some(sum / particles.len() as f64)
    }

    /// One jitter sample for one axis.
    #[inline]
    pub fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.jitter <= 0 {
            return 0;
        }
        rng.gen_range(0..self.jitter) - self.jitter / 2
    }

    /// Unclamped step for a particle at `position` chasing `target`.
    ///
    /// Each axis sums its terms as `f64` and truncates toward zero.
    pub fn raw_step(&self, position: IVec2, target: IVec2, centroid: DVec2, jitter: IVec2) -> IVec2 {
        let toward_target = (target - position).as_dvec2();
        let toward_centroid = (centroid - position.as_dvec2()) * self.centroid_pull;
        let sum = toward_target + toward_centroid + jitter.as_dvec2();
        IVec2::new(sum.x as i32, sum.y as i32)
    }

    /// Shorten `raw` to at most `speed` pixels.
    ///
    /// Steps already within the limit pass through unchanged; longer ones
    /// keep their direction and are truncated toward zero per axis.
    pub fn limit_speed(&self, raw: IVec2) -> IVec2 {
        let (x, y) = (raw.x as i64, raw.y as i64);
        let magnitude = ((x * x + y * y) as f64).sqrt();
        if magnitude <= self.speed {
            return raw;
        }
        IVec2::new(
            (raw.x as f64 / magnitude * self.speed) as i32,
            (raw.y as f64 / magnitude * self.speed) as i32,
        )
    }

    /// Advance every particle by one tick on a `width × height` surface.
    ///
    /// Jitter is drawn x then y for every particle in store order, including
    /// particles that end up not moving.
    pub fn step<R: Rng + ?Sized>(
        &self,
        particles: &mut ParticleSet,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> StepReport {
        let Some(centroid) = Self::centroid(particles) else {
            return StepReport {
                centroid: None,
                moved: 0,
            };
        };

        let upper = IVec2::new(width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32);
        let len = particles.len();
        // The last particle chases where the first one was before this tick.
        let first = particles.as_slice()[0].position;
        let mut moved = 0;

        for i in 0..len {
            let next = particles.successor(i);
            let target = if next == 0 { first } else { particles.as_slice()[next].position };
            let jitter = IVec2::new(self.jitter(rng), self.jitter(rng));

            let p = &mut particles.as_mut_slice()[i];
            let raw = self.raw_step(p.position, target, centroid, jitter);
            if raw == IVec2::ZERO {
                continue;
            }
            moved += 1;

            let step = self.limit_speed(raw);
            p.position = (p.position + step).clamp(IVec2::ZERO, upper);
        }

        log::trace!("motion step: centroid {:?}, {} of {} moved", centroid, moved, len);
        StepReport {
            centroid: Some(centroid),
            moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::PARTICLE_COUNT;
    use crate::spawn::seeded_rng;

    fn ring(points: &[(i32, i32)]) -> ParticleSet {
        ParticleSet::from_positions(points.iter().map(|&(x, y)| IVec2::new(x, y)))
    }

    fn positions(set: &ParticleSet) -> Vec<IVec2> {
        set.iter().map(|p| p.position).collect()
    }

    #[test]
    fn test_centroid_of_empty_set_is_none() {
        assert_eq!(MotionModel::centroid(&ParticleSet::empty()), None);
    }

    #[test]
    fn test_centroid_is_mean() {
        let set = ring(&[(0, 0), (10, 0), (0, 10)]);
        let c = MotionModel::centroid(&set).unwrap();
        assert!((c.x - 10.0 / 3.0).abs() < 1e-12);
        assert!((c.y - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_recomputed_from_scratch() {
        let set = ring(&[(4, 4)]);
        assert_eq!(MotionModel::centroid(&set), Some(DVec2::new(4.0, 4.0)));
        assert_eq!(MotionModel::centroid(&set), Some(DVec2::new(4.0, 4.0)));
    }

    #[test]
    fn test_jitter_range() {
        let model = MotionModel::new();
        let mut rng = seeded_rng(11);
        let samples: Vec<i32> = (0..20_000).map(|_| model.jitter(&mut rng)).collect();
        assert_eq!(*samples.iter().min().unwrap(), -27);
        assert_eq!(*samples.iter().max().unwrap(), 27);
    }

    #[test]
    fn test_raw_step_truncates_toward_zero() {
        let model = MotionModel::new().without_jitter();
        let centroid = DVec2::new(10.0 / 3.0, 10.0 / 3.0);
        // 10 - 0.01 on x, -0.01 on y
        let raw = model.raw_step(IVec2::ZERO, IVec2::new(10, 0), centroid, IVec2::ZERO);
        assert_eq!(raw, IVec2::new(9, 0));
    }

    #[test]
    fn test_centroid_term_sign() {
        let model = MotionModel::new();
        // Particle and target coincide far left of the centroid.
        let raw = model.raw_step(IVec2::ZERO, IVec2::ZERO, DVec2::new(1000.0, 0.0), IVec2::ZERO);
        assert_eq!(raw, IVec2::new(-3, 0));
    }

    #[test]
    fn test_limit_speed() {
        let model = MotionModel::new();
        assert_eq!(model.limit_speed(IVec2::new(3, 4)), IVec2::new(3, 4));
        assert_eq!(model.limit_speed(IVec2::new(36, 48)), IVec2::new(36, 48));
        assert_eq!(model.limit_speed(IVec2::new(300, 400)), IVec2::new(36, 48));
        assert_eq!(model.limit_speed(IVec2::new(0, -500)), IVec2::new(0, -60));
        let long = model.limit_speed(IVec2::new(-1000, 7));
        assert!(long.as_dvec2().length() <= SPEED);
    }

    #[test]
    fn test_three_particle_ring_without_jitter() {
        let model = MotionModel::new().without_jitter();
        let mut set = ring(&[(0, 0), (10, 0), (0, 10)]);
        let mut rng = seeded_rng(0);

        let report = model.step(&mut set, 100, 100, &mut rng);

        assert_eq!(report.moved, 3);
        assert_eq!(
            positions(&set),
            vec![IVec2::new(9, 0), IVec2::new(1, 9), IVec2::new(0, 1)]
        );
    }

    #[test]
    fn test_last_particle_targets_first_as_it_was_before_tick() {
        let model = MotionModel::new().without_jitter();
        let mut set = ring(&[(50, 50), (90, 50), (60, 50)]);
        let mut rng = seeded_rng(0);
        model.step(&mut set, 200, 200, &mut rng);

        // The first particle moves to (89, 50); the last still heads for (50, 50).
        assert_eq!(
            positions(&set),
            vec![IVec2::new(89, 50), IVec2::new(61, 50), IVec2::new(50, 50)]
        );
    }

    #[test]
    fn test_lone_particle_is_its_own_successor() {
        let model = MotionModel::new().without_jitter();
        let mut set = ring(&[(7, 3)]);
        let report = model.step(&mut set, 20, 20, &mut seeded_rng(0));
        assert_eq!(report.moved, 0);
        assert_eq!(positions(&set), vec![IVec2::new(7, 3)]);
    }

    #[test]
    fn test_resting_particle_is_skipped() {
        let model = MotionModel::new().without_jitter();
        let mut set = ring(&[(5, 5), (5, 5)]);
        let mut rng = seeded_rng(0);
        let report = model.step(&mut set, 10, 10, &mut rng);
        assert_eq!(report.moved, 0);
        assert_eq!(positions(&set), vec![IVec2::new(5, 5); 2]);
    }

    #[test]
    fn test_clamp_allows_inclusive_upper_bound() {
        let model = MotionModel::new().without_jitter();
        let mut set = ring(&[(98, 2), (200, -50)]);
        let mut rng = seeded_rng(0);
        model.step(&mut set, 100, 80, &mut rng);
        let first = set.as_slice()[0].position;
        assert_eq!(first.x, 100);
        assert_eq!(first.y, 0);
    }

    #[test]
    fn test_empty_set_step_is_noop() {
        let mut set = ParticleSet::empty();
        let mut rng = seeded_rng(0);
        let report = MotionModel::new().step(&mut set, 10, 10, &mut rng);
        assert_eq!(report, StepReport { centroid: None, moved: 0 });
    }

    #[test]
    fn test_step_is_deterministic_for_fixed_seed() {
        let mut spawn_rng = seeded_rng(21);
        let start = ParticleSet::initialize(640, 480, &mut spawn_rng).unwrap();

        let mut a = start.clone();
        let mut b = start.clone();
        MotionModel::new().step(&mut a, 640, 480, &mut seeded_rng(5));
        MotionModel::new().step(&mut b, 640, 480, &mut seeded_rng(5));
        assert_eq!(a, b);
        assert_ne!(a, start);
    }

    #[test]
    fn test_speed_bound_and_containment_over_many_ticks() {
        let (w, h) = (320, 240);
        let mut rng = seeded_rng(77);
        let mut set = ParticleSet::initialize(w, h, &mut rng).unwrap();
        let model = MotionModel::new();

        for _ in 0..20 {
            let before = positions(&set);
            model.step(&mut set, w, h, &mut rng);
            assert_eq!(set.len(), PARTICLE_COUNT);
            for (old, p) in before.iter().zip(set.iter()) {
                let new = p.position;
                assert!((new - *old).as_dvec2().length() <= SPEED + 1e-9);
                assert!(new.x >= 0 && new.x <= w as i32);
                assert!(new.y >= 0 && new.y <= h as i32);
            }
        }
    }
}
