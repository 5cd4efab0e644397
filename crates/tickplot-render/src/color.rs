//! RGBA color value type.

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    /// Body color for up candles.
    pub const UP_GREEN: Color = Color::rgb(92.0 / 256.0, 214.0 / 256.0, 92.0 / 256.0);
    /// Body color for down candles.
    pub const DOWN_RED: Color = Color::rgb(1.0, 102.0 / 256.0, 102.0 / 256.0);

    /// Opaque color; alpha defaults to 1.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }

    /// CSS `rgba(...)` form used by the SVG surface.
    pub fn css(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{})",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alpha() {
        assert_eq!(Color::rgb(0.5, 0.5, 0.5).a, 1.0);
    }

    #[test]
    fn test_visibility() {
        assert!(Color::BLACK.is_visible());
        assert!(!Color::TRANSPARENT.is_visible());
    }

    #[test]
    fn test_css() {
        assert_eq!(Color::WHITE.css(), "rgba(255,255,255,1)");
        assert_eq!(Color::UP_GREEN.css(), "rgba(92,213,92,1)");
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 0.5).css(), "rgba(0,0,0,0.5)");
    }
}
