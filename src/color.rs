//! RGB colors, hex strings, and the CIELAB / Msh conversions used to build
//! diverging colormaps.
//!
//! Msh is the polar form of CIELAB introduced by Moreland ("Diverging Color
//! Maps for Scientific Visualization"): `M` is the magnitude of the Lab
//! vector, `s` the angle from the lightness axis, `h` the hue angle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),
}

/// 8-bit sRGB color. Serializes as a `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unit-range channels, rounding to the nearest step.
    /// Values outside [0, 1] are clipped.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_u8(r),
            g: unit_to_u8(g),
            b: unit_to_u8(b),
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ------------------------ CIELAB ------------------------

/// D65 reference white (X, Y, Z), Y normalized to 100.
const WHITE_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// CIELAB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Msh color (polar CIELAB).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Msh {
    pub m: f64,
    pub s: f64,
    pub h: f64,
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008_856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > 0.008_856 {
        cube
    } else {
        (f - 16.0 / 116.0) / 7.787
    }
}

/// Convert sRGB channels given on a 0..255 scale (fractional values allowed)
/// to CIELAB.
pub fn rgb255_to_lab(rgb: [f64; 3]) -> Lab {
    let [r, g, b] = rgb.map(|c| srgb_to_linear(c / 255.0) * 100.0);
    let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
    let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
    let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

    let fx = lab_f(x / WHITE_D65[0]);
    let fy = lab_f(y / WHITE_D65[1]);
    let fz = lab_f(z / WHITE_D65[2]);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIELAB to unit-range sRGB. Out-of-gamut channels are clipped.
pub fn lab_to_unit_rgb(lab: Lab) -> [f64; 3] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    let x = lab_f_inv(fx) * WHITE_D65[0] / 100.0;
    let y = lab_f_inv(fy) * WHITE_D65[1] / 100.0;
    let z = lab_f_inv(fz) * WHITE_D65[2] / 100.0;

    let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
    let g = -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z;
    let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;
    [r, g, b].map(|c| linear_to_srgb(c.max(0.0)).clamp(0.0, 1.0))
}

impl From<Lab> for Msh {
    fn from(lab: Lab) -> Self {
        let m = (lab.l * lab.l + lab.a * lab.a + lab.b * lab.b).sqrt();
        let s = if m > 0.0 {
            (lab.l / m).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        let h = lab.b.atan2(lab.a);
        Msh { m, s, h }
    }
}

impl From<Msh> for Lab {
    fn from(msh: Msh) -> Self {
        Lab {
            l: msh.m * msh.s.cos(),
            a: msh.m * msh.s.sin() * msh.h.cos(),
            b: msh.m * msh.s.sin() * msh.h.sin(),
        }
    }
}

/// sRGB on a 0..255 scale straight to Msh.
pub fn rgb255_to_msh(rgb: [f64; 3]) -> Msh {
    rgb255_to_lab(rgb).into()
}
