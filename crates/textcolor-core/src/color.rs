//! HSL color value and its conversion to 8-bit RGBA.
//!
//! The arithmetic runs in single precision and must stay bit-for-bit stable:
//! a given text has to map to the same bytes on every platform and in every
//! port of the mapping.

use std::fmt;

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// A color in the hue/saturation/lightness model with an alpha channel.
///
/// `h` is in degrees (`0..360`), `s`, `l` and `a` are fractions in
/// `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use textcolor_core::{Hsla, Rgba};
///
/// let red = Hsla::new(0, 1.0, 0.5, 1.0);
/// assert_eq!(red.to_rgba(), Rgba::new(255, 0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// Hue in degrees.
    pub h: u64,
    /// Saturation fraction.
    pub s: f32,
    /// Lightness fraction.
    pub l: f32,
    /// Alpha fraction.
    pub a: f32,
}

impl Hsla {
    /// Create a color from its components.
    pub const fn new(h: u64, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Convert to 8-bit RGBA.
    ///
    /// Color channels are rounded half-to-even. The alpha byte is `a * 255`
    /// truncated toward zero, so an alpha of `0.1` becomes `25`.
    pub fn to_rgba(&self) -> Rgba {
        let h = self.h as f32 / 360.0;
        let (s, l) = (self.s, self.l);

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_channel(p, q, h + ONE_THIRD);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - ONE_THIRD);

        Rgba {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: (self.a * 255.0).clamp(0.0, 255.0) as u8,
        }
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

/// Piecewise HSL channel function for one phase-shifted hue.
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * 6.0 * (TWO_THIRDS - t)
    } else {
        p
    }
}

/// Scale a `0.0..=1.0` channel to a byte, rounding half-to-even.
#[inline]
fn to_byte(channel: f32) -> u8 {
    (channel as f64 * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// An 8-bit color with alpha.
///
/// `Display` renders `#rrggbbaa`.
///
/// ```
/// use textcolor_core::Rgba;
///
/// let c = Rgba::new(190, 135, 197, 255);
/// assert_eq!(c.to_string(), "#be87c5ff");
/// assert_eq!(c.to_argb(), 0xffbe87c5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub const fn to_argb(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
