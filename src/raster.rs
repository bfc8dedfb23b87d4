//! Midpoint circle rasterization over a [`Surface`].
//!
//! Both routines walk one octant with an integer decision variable and no
//! floating point:
//!
//! - `offset_x` starts at 0 and `offset_y` at the radius,
//! - `d` starts at `radius - 1`,
//! - each step either advances `offset_x`, retreats `offset_y`, or both
//!   (the diagonal), until `offset_y < offset_x`.
//!
//! A fill covers exactly the pixels with `dx² + dy² <= r² + r`.

use glam::IVec2;

use crate::error::SwarmError;
use crate::surface::Surface;

/// Octant walker shared by the outline and the fill.
struct Octant {
    radius: i32,
    offset_x: i32,
    offset_y: i32,
    d: i32,
}

impl Octant {
    fn new(radius: i32) -> Self {
        Self {
            radius,
            offset_x: 0,
            offset_y: radius,
            d: radius - 1,
        }
    }
}

impl Iterator for Octant {
    /// `(offset_x, offset_y)` with `offset_y >= offset_x`.
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.offset_y < self.offset_x {
            return None;
        }
        let current = (self.offset_x, self.offset_y);

        if self.d >= 2 * self.offset_x {
            self.d -= 2 * self.offset_x + 1;
            self.offset_x += 1;
        } else if self.d < 2 * (self.radius - self.offset_y) {
            self.d += 2 * self.offset_y - 1;
            self.offset_y -= 1;
        } else {
            self.d += 2 * (self.offset_y - self.offset_x - 1);
            self.offset_y -= 1;
            self.offset_x += 1;
        }

        Some(current)
    }
}

/// Plot a one-pixel-wide circle outline.
///
/// Plots the eight symmetric points of every octant step. A negative radius
/// draws nothing. Stops at the first failing draw call.
pub fn draw_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center: IVec2,
    radius: i32,
) -> Result<(), SwarmError> {
    let IVec2 { x, y } = center;
    for (ox, oy) in Octant::new(radius) {
        surface.plot_pixel(x + ox, y + oy)?;
        surface.plot_pixel(x + oy, y + ox)?;
        surface.plot_pixel(x - ox, y + oy)?;
        surface.plot_pixel(x - oy, y + ox)?;
        surface.plot_pixel(x + ox, y - oy)?;
        surface.plot_pixel(x + oy, y - ox)?;
        surface.plot_pixel(x - ox, y - oy)?;
        surface.plot_pixel(x - oy, y - ox)?;
    }
    Ok(())
}

/// Fill a disc with horizontal spans.
///
/// Each octant step draws the caps at `y ± offset_x` (spanning
/// `x ± offset_y`) and the bands at `y ± offset_y` (spanning `x ± offset_x`).
/// Radius 0 fills the center pixel only. Stops at the first failing span.
pub fn fill_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center: IVec2,
    radius: i32,
) -> Result<(), SwarmError> {
    let IVec2 { x, y } = center;
    for (ox, oy) in Octant::new(radius) {
        surface.draw_span(x - oy, x + oy, y + ox)?;
        surface.draw_span(x - ox, x + ox, y + oy)?;
        surface.draw_span(x - ox, x + ox, y - oy)?;
        surface.draw_span(x - oy, x + oy, y - ox)?;
    }
    Ok(())
}
