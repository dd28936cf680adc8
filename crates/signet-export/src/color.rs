//! Numeric-to-RGB mapping for the styling series

use std::fmt;

/// An RGB color, rendered as space-separated channel values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolate from white toward this color by `|value| / max`
    ///
    /// The ratio is clamped to 1, so magnitudes at or past `max` saturate at
    /// the extreme color. Zero magnitude is plain white.
    pub fn fade(&self, value: f64, max: f64) -> Rgb {
        let ratio = (value.abs() / max).min(1.0);

        let channel = |extreme: u8| 255 - (ratio * f64::from(255 - extreme)).round() as u8;

        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Warm extreme for increased phosphorylation/activity/abundance
pub const WARM: Rgb = Rgb::new(200, 100, 0);

/// Cool extreme for decreased phosphorylation/activity/abundance
pub const COOL: Rgb = Rgb::new(50, 150, 200);

/// Edge color for the activating class
pub const EDGE_POSITIVE: Rgb = Rgb::new(0, 100, 0);

/// Edge color for the inhibiting class
pub const EDGE_NEGATIVE: Rgb = Rgb::new(100, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_white() {
        assert_eq!(WARM.fade(0.0, 2.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_saturation_at_max() {
        assert_eq!(WARM.fade(2.0, 2.0), WARM);
        assert_eq!(WARM.fade(5.0, 2.0), WARM);
        assert_eq!(COOL.fade(-9.0, 2.0), COOL);
    }

    #[test]
    fn test_midpoint() {
        // Halfway between white and the warm extreme
        let mid = WARM.fade(1.0, 2.0);
        assert_eq!(mid, Rgb::new(227, 177, 127));
    }

    #[test]
    fn test_sign_is_ignored() {
        assert_eq!(WARM.fade(-1.3, 2.0), WARM.fade(1.3, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(EDGE_POSITIVE.to_string(), "0 100 0");
        assert_eq!(EDGE_NEGATIVE.to_string(), "100 0 0");
    }
}
