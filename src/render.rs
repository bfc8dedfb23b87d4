//! Frame rendering: clear, color ramp, one disc per particle, present.

use crate::color::{Color, HueCycle};
use crate::error::SwarmError;
use crate::particle::ParticleSet;
use crate::raster::{draw_circle, fill_circle};
use crate::surface::Surface;

/// Background the surface is cleared to each frame.
pub const BACKGROUND: Color = Color::from_hex(0x3b3b3b);

/// Radius of each particle's disc, in pixels.
pub const PARTICLE_RADIUS: i32 = 4;

/// Color of the optional outline ring.
pub const OUTLINE: Color = Color::from_hex(0x111111);

/// Draws a [`ParticleSet`] onto a [`Surface`].
///
/// Rendering only reads particle positions. Any surface error aborts the rest
/// of the frame (including `present`) and is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    background: Color,
    radius: i32,
    outline: Option<Color>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            radius: PARTICLE_RADIUS,
            outline: None,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also trace each disc with a one-pixel ring in `color`.
    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, particles: &ParticleSet) -> Result<(), SwarmError> {
        surface.set_draw_color(self.background)?;
        surface.clear()?;

        for (particle, color) in particles.iter().zip(HueCycle::new()) {
            surface.set_draw_color(color)?;
            fill_circle(surface, particle.position, self.radius)?;

            if let Some(outline) = self.outline {
                surface.set_draw_color(outline)?;
                draw_circle(surface, particle.position, self.radius)?;
            }
        }

        surface.present()
    }
}
