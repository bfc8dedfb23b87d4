//! The drawing surface the renderer and rasterizer draw through.

use crate::color::Color;
use crate::error::SwarmError;

/// A pixel surface with a current draw color.
///
/// This is the only thing the core needs from its host: a size query, a
/// color, single pixels, horizontal spans, clear and present. Every call may
/// fail with [`SwarmError::SurfaceUnavailable`]; callers abort the current
/// shape (and frame) on the first failure.
///
/// Implemented by [`PixelBuffer`](crate::canvas::PixelBuffer) for headless
/// use and by [`WindowCanvas`](crate::WindowCanvas) for the window.
pub trait Surface {
    /// Current drawable size `(width, height)` in pixels.
    ///
    /// Fails when the surface is not ready, including when it has zero area.
    fn size(&self) -> Result<(u32, u32), SwarmError>;

    /// Sets the color used by `clear`, `plot_pixel` and `draw_span`.
    fn set_draw_color(&mut self, color: Color) -> Result<(), SwarmError>;

    /// Fills the whole surface with the draw color.
    fn clear(&mut self) -> Result<(), SwarmError>;

    fn plot_pixel(&mut self, x: i32, y: i32) -> Result<(), SwarmError>;

    /// Fills every pixel with `x` in `[x0, x1]` on row `y`.
    fn draw_span(&mut self, x0: i32, x1: i32, y: i32) -> Result<(), SwarmError>;

    /// Shows the completed frame.
    fn present(&mut self) -> Result<(), SwarmError>;
}
