//! Linear blue-to-red heat-map colours.

use std::fmt;

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour for a normalised distance `t`: blue at 0, red at 1.
///
/// `r = round(255 t)`, `b = round(255 (1 - t))`. If `r` would exceed
/// 255 it is clamped and `b` drops to 0. Negative or NaN `t` maps to
/// pure blue.
///
/// ```
/// use nook_field::{heat_color, Rgb};
///
/// assert_eq!(heat_color(0.0), Rgb::new(0, 0, 255));
/// assert_eq!(heat_color(1.0), Rgb::new(255, 0, 0));
/// assert_eq!(heat_color(0.5).to_hex(), "#800080");
/// ```
pub fn heat_color(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
    let r = (255.0 * t).round();
    if r > 255.0 {
        return Rgb::new(255, 0, 0);
    }
    let b = (255.0 * (1.0 - t)).round().clamp(0.0, 255.0);
    Rgb::new(r as u8, 0, b as u8)
}
