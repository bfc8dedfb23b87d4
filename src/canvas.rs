//! CPU pixel buffer that frames are rasterized into.

use crate::color::Color;
use crate::error::SwarmError;
use crate::surface::Surface;

/// RGBA8 pixel buffer, row-major, origin at the top-left.
///
/// Draws outside `[0, width) × [0, height)` are clipped silently, the way a
/// hardware renderer clips. Particles clamped to the inclusive upper bound
/// therefore lose the pixels that hang off the edge.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<[u8; 4]>,
    width: u32,
    height: u32,
    draw_color: Color,
    frames_presented: u64,
}

impl PixelBuffer {
    /// Create a buffer of the given size, cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Result<Self, SwarmError> {
        let mut buffer = Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            draw_color: Color::default(),
            frames_presented: 0,
        };
        buffer.resize(width, height)?;
        Ok(buffer)
    }

    /// Reallocate for a new size. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SwarmError> {
        let count = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|e| SwarmError::allocation("frame pixels", count, e))?;
        pixels.resize(count, [0; 4]);

        self.pixels = pixels;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| {
            let [r, g, b, a] = self.pixels[i];
            Color::rgba(r, g, b, a)
        })
    }

    /// Number of times `present` has been called.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> Result<(u32, u32), SwarmError> {
        if self.width == 0 || self.height == 0 {
            return Err(SwarmError::surface(format!(
                "zero-sized surface ({}x{})",
                self.width, self.height
            )));
        }
        Ok((self.width, self.height))
    }

    fn set_draw_color(&mut self, color: Color) -> Result<(), SwarmError> {
        self.draw_color = color;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SwarmError> {
        self.pixels.fill(self.draw_color.to_array());
        Ok(())
    }

    fn plot_pixel(&mut self, x: i32, y: i32) -> Result<(), SwarmError> {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.draw_color.to_array();
        }
        Ok(())
    }

    fn draw_span(&mut self, x0: i32, x1: i32, y: i32) -> Result<(), SwarmError> {
        if y < 0 || y as u32 >= self.height || self.width == 0 {
            return Ok(());
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(self.width as i32 - 1);
        if lo > hi {
            return Ok(());
        }

        let row = y as usize * self.width as usize;
        self.pixels[row + lo as usize..=row + hi as usize].fill(self.draw_color.to_array());
        Ok(())
    }

    fn present(&mut self) -> Result<(), SwarmError> {
        self.frames_presented += 1;
        Ok(())
    }
}
