//! Sequential "Blues" colormap and the annotation box colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Composite `self` at opacity `alpha` over `background`.
    pub fn over(self, background: Rgb, alpha: f64) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f64 * a + bg as f64 * (1.0 - a)).round() as u8;
        Rgb::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// Relative luminance in `[0, 1]` (Rec. 709 weights, no gamma).
    pub fn luminance(self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

pub const LIGHT_GREEN: Rgb = Rgb::new(144, 238, 144);
pub const LIGHT_CORAL: Rgb = Rgb::new(240, 128, 128);
pub const LIGHT_GREY: Rgb = Rgb::new(211, 211, 211);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Opacity of the box drawn behind each cell value.
pub const BOX_ALPHA: f64 = 0.5;

/// ColorBrewer 9-class Blues, lightest first.
const BLUES: [Rgb; 9] = [
    Rgb::new(247, 251, 255),
    Rgb::new(222, 235, 247),
    Rgb::new(198, 219, 239),
    Rgb::new(158, 202, 225),
    Rgb::new(107, 174, 214),
    Rgb::new(66, 146, 198),
    Rgb::new(33, 113, 181),
    Rgb::new(8, 81, 156),
    Rgb::new(8, 48, 107),
];

/// Map an intensity in `[0, 1]` onto the Blues scale.
///
/// Out-of-range and NaN inputs clamp to the nearest end.
pub fn blues(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (BLUES.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    if lo >= BLUES.len() - 1 {
        return BLUES[BLUES.len() - 1];
    }
    let frac = scaled - lo as f64;
    BLUES[lo + 1].over(BLUES[lo], frac)
}
