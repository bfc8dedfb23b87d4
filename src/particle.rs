//! Particles and the particle store.

use glam::IVec2;
use rand::Rng;

use crate::error::SwarmError;
use crate::spawn::random_position;

/// Number of particles in a live store.
pub const PARTICLE_COUNT: usize = 256 * 27 - 1;

/// A single point, in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Particle {
    pub position: IVec2,
}

/// Ordered collection of particles.
///
/// Storage order is significant: each particle's motion target is the next
/// one in order (the last targets the first), and the color ramp follows the
/// same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    /// A store holding no particles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// [`PARTICLE_COUNT`] particles placed uniformly in `[0, width) × [0, height)`.
    pub fn initialize<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Result<Self, SwarmError> {
        Self::with_count(PARTICLE_COUNT, width, height, rng)
    }

    /// `count` particles placed uniformly in `[0, width) × [0, height)`.
    pub fn with_count<R: Rng + ?Sized>(
        count: usize,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, SwarmError> {
        if width == 0 || height == 0 {
            return Err(SwarmError::surface(format!(
                "cannot place particles on a {}x{} surface",
                width, height
            )));
        }

        let mut particles = Vec::new();
        particles
            .try_reserve_exact(count)
            .map_err(|e| SwarmError::allocation("particles", count, e))?;
        particles.extend((0..count).map(|_| Particle {
            position: random_position(rng, width, height),
        }));

        Ok(Self { particles })
    }

    /// A store holding exactly the given positions, in order.
    pub fn from_positions(positions: impl IntoIterator<Item = IVec2>) -> Self {
        Self {
            particles: positions.into_iter().map(|position| Particle { position }).collect(),
        }
    }

    /// Release every particle. Safe to call on an empty store.
    pub fn destroy(&mut self) {
        self.particles = Vec::new();
    }

    /// Discard every particle and spawn a fresh store for a new surface size.
    ///
    /// On failure the store is left empty.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) -> Result<(), SwarmError> {
        self.destroy();
        *self = Self::initialize(width, height, rng)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Index of the particle `index` moves toward.
    ///
    /// Panics on an empty store.
    #[inline]
    pub fn successor(&self, index: usize) -> usize {
        (index + 1) % self.particles.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
