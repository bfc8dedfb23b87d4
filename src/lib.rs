//! # ringswarm
//!
//! A ring of a few thousand particles, each chasing the next, pulled gently
//! away from the swarm's center and shaken by random jitter. Drawn every tick
//! as filled discs that walk a magenta → cyan → yellow color ramp.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     env_logger::init();
//!     if let Err(e) = ringswarm::Simulation::new().run() {
//!         log::error!("{}", e);
//!     }
//! }
//! ```
//!
//! ## Headless use
//!
//! Everything except the window itself runs against the [`Surface`] trait,
//! so a [`Session`] can be driven against an in-memory [`PixelBuffer`]:
//!
//! ```
//! use ringswarm::prelude::*;
//!
//! let mut frame = PixelBuffer::new(320, 240)?;
//! let mut session = Session::new(&frame, seeded_rng(7))?;
//! for _ in 0..10 {
//!     session.tick(&mut frame)?;
//! }
//! assert_eq!(frame.frames_presented(), 10);
//! # Ok::<(), ringswarm::SwarmError>(())
//! ```
//!
//! ## Pieces
//!
//! | Module | Role |
//! |--------|------|
//! | [`particle`] | The particle store: fixed count, ring order |
//! | [`motion`] | Successor chase, centroid pull, jitter, speed limit, clamp |
//! | [`raster`] | Midpoint circle outline and filled disc |
//! | [`render`] | Clear, color ramp, discs, present |
//! | [`session`] | One tick: size, update, draw |
//! | [`simulation`] | Window, event loop, pacing |

pub mod canvas;
pub mod color;
pub mod error;
mod gpu;
pub mod motion;
pub mod particle;
pub mod raster;
pub mod render;
pub mod session;
mod simulation;
pub mod spawn;
pub mod surface;
pub mod time;

pub use canvas::PixelBuffer;
pub use color::{Color, HueCycle};
pub use error::{GpuError, SimulationError, SwarmError};
pub use glam::IVec2;
pub use gpu::WindowCanvas;
pub use motion::{MotionModel, StepReport};
pub use particle::{Particle, ParticleSet, PARTICLE_COUNT};
pub use render::Renderer;
pub use session::Session;
pub use simulation::{Simulation, MAX_CONSECUTIVE_FRAME_FAILURES, WINDOW_SIZE, WINDOW_TITLE};
pub use surface::Surface;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```
/// use ringswarm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::PixelBuffer;
    pub use crate::color::Color;
    pub use crate::error::SwarmError;
    pub use crate::motion::MotionModel;
    pub use crate::particle::{Particle, ParticleSet};
    pub use crate::render::Renderer;
    pub use crate::session::Session;
    pub use crate::simulation::Simulation;
    pub use crate::spawn::seeded_rng;
    pub use crate::surface::Surface;
    pub use glam::IVec2;
}
