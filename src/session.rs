//! One running visualization, independent of any window system.
//!
//! A [`Session`] owns the particle store, the motion model, the renderer and
//! the random source, and runs the per-tick sequence against any
//! [`Surface`]. The interactive frame loop drives one session; tests and
//! benchmarks drive it against a [`PixelBuffer`](crate::canvas::PixelBuffer).

use rand::Rng;

use crate::error::SwarmError;
use crate::motion::{MotionModel, StepReport};
use crate::particle::ParticleSet;
use crate::render::Renderer;
use crate::spawn::SwarmRng;
use crate::surface::Surface;

pub struct Session<R = SwarmRng> {
    particles: ParticleSet,
    motion: MotionModel,
    renderer: Renderer,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Spawn a full particle store sized to `surface`.
    pub fn new<S: Surface + ?Sized>(surface: &S, mut rng: R) -> Result<Self, SwarmError> {
        let (width, height) = surface.size()?;
        let particles = ParticleSet::initialize(width, height, &mut rng)?;
        log::info!("spawned {} particles on {}x{}", particles.len(), width, height);
        Ok(Self::from_parts(particles, MotionModel::new(), Renderer::new(), rng))
    }

    pub fn from_parts(particles: ParticleSet, motion: MotionModel, renderer: Renderer, rng: R) -> Self {
        Self {
            particles,
            motion,
            renderer,
            rng,
        }
    }

    /// Replace every particle with a fresh store sized to `surface`.
    ///
    /// Runs between ticks, so update and draw never see a partial store.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &S) -> Result<(), SwarmError> {
        let (width, height) = surface.size()?;
        self.particles.reinitialize(width, height, &mut self.rng)?;
        log::info!("respawned {} particles for {}x{}", self.particles.len(), width, height);
        Ok(())
    }

    /// Advance the particles one step on a `width × height` surface.
    pub fn update(&mut self, width: u32, height: u32) -> StepReport {
        self.motion.step(&mut self.particles, width, height, &mut self.rng)
    }

    /// Draw and present the current particles.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SwarmError> {
        self.renderer.draw(surface, &self.particles)
    }

    /// One full tick: query the surface size, update, draw, present.
    ///
    /// A surface that is not ready skips the tick without moving anything.
    /// A draw failure leaves the completed update in place.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<StepReport, SwarmError> {
        let (width, height) = surface.size()?;
        let report = self.update(width, height);
        self.draw(surface)?;
        Ok(report)
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Release the particle store.
    pub fn shutdown(&mut self) {
        self.particles.destroy();
    }
}
