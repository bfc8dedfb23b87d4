//! Colors and the per-particle hue ramp.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex & 0xff0000) >> 16) as u8,
            ((hex & 0x00ff00) >> 8) as u8,
            (hex & 0x0000ff) as u8,
        )
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
}

/// Hue ramp stepped once per particle in store order.
///
/// Cycles magenta → cyan → yellow → magenta with a period of 765 steps. The
/// ramp is keyed on sequence position only, so the same particle index gets
/// the same color every frame.
///
/// ```
/// use ringswarm::color::{Color, HueCycle};
///
/// let mut ramp = HueCycle::new();
/// assert_eq!(ramp.next(), Some(Color::rgb(254, 1, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct HueCycle {
    current: Color,
}

impl HueCycle {
    /// Period of the ramp, in steps.
    pub const PERIOD: usize = 3 * 255;

    pub fn new() -> Self {
        Self {
            current: Color::MAGENTA,
        }
    }

    fn step(&mut self) {
        let c = &mut self.current;
        if c.b == 255 && c.r > 0 {
            c.r -= 1;
            c.g += 1;
        } else if c.g == 255 && c.b > 0 {
            c.b -= 1;
            c.r += 1;
        } else if c.r == 255 && c.g > 0 {
            c.g -= 1;
            c.b += 1;
        }
    }
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for HueCycle {
    type Item = Color;

    /// Steps the ramp, then yields the new color. Never ends.
    fn next(&mut self) -> Option<Color> {
        self.step();
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0x3b3b3b), Color::rgb(0x3b, 0x3b, 0x3b));
        assert_eq!(Color::from_hex(0x123456).to_array(), [0x12, 0x34, 0x56, 0xff]);
    }

    #[test]
    fn test_ramp_passes_through_cyan_and_yellow() {
        let colors: Vec<Color> = HueCycle::new().take(HueCycle::PERIOD).collect();
        assert_eq!(colors[254], Color::rgb(0, 255, 255));
        assert_eq!(colors[509], Color::rgb(255, 255, 0));
        assert_eq!(colors[764], Color::MAGENTA);
    }

    #[test]
    fn test_ramp_is_periodic() {
        let mut ramp = HueCycle::new();
        let first: Vec<Color> = ramp.by_ref().take(HueCycle::PERIOD).collect();
        let second: Vec<Color> = ramp.take(HueCycle::PERIOD).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ramp_moves_one_unit_per_step() {
        let mut prev = Color::MAGENTA;
        for color in HueCycle::new().take(2 * HueCycle::PERIOD) {
            let delta = (color.r as i32 - prev.r as i32).abs()
                + (color.g as i32 - prev.g as i32).abs()
                + (color.b as i32 - prev.b as i32).abs();
            assert_eq!(delta, 2);
            assert_eq!(color.a, 255);
            prev = color;
        }
    }
}
