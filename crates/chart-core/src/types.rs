// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (viewport size, padding, colors).

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;
/// Default padding around the plot area, in pixels.
pub const PADDING: u32 = 40;

/// Drawing surface size plus a uniform padding on every edge.
/// Contract: `2 * padding < width` and `2 * padding < height` for a usable plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, padding: u32) -> Self {
        Self { width, height, padding }
    }

    /// Horizontal extent available to the bars.
    pub fn plot_width(&self) -> f64 {
        self.width as f64 - 2.0 * self.padding as f64
    }

    /// Vertical extent available to the bars.
    pub fn plot_height(&self) -> f64 {
        self.height as f64 - 2.0 * self.padding as f64
    }

    /// Y pixel of the bottom edge of the plot (the zero baseline).
    pub fn baseline_y(&self) -> f64 {
        self.height as f64 - self.padding as f64
    }

    pub fn is_usable(&self) -> bool {
        self.plot_width() > 0.0 && self.plot_height() > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS form: `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_extent_and_baseline() {
        let v = Viewport::default();
        assert_eq!(v.plot_width(), 720.0);
        assert_eq!(v.plot_height(), 320.0);
        assert_eq!(v.baseline_y(), 360.0);
        assert!(v.is_usable());
        assert!(!Viewport::new(80, 400, 40).is_usable());
    }

    #[test]
    fn css_hex() {
        assert_eq!(Color::rgb(0, 0, 128).css(), "#000080");
        assert_eq!(Color::rgba(0, 0, 0, 0).css(), "rgba(0, 0, 0, 0.000)");
    }
}
