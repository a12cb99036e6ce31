//! Continuous colormaps backed by lookup tables.
//!
//! Two builders are provided:
//! - [`cubehelix`]: Green's cubehelix scheme with seaborn's parameterization,
//!   for sequential data.
//! - [`msh_diverging`]: Moreland's diverging scheme interpolated in Msh space,
//!   with an optional neutral reference color and power-law rescaling.

use std::f64::consts::PI;

use log::debug;

use crate::color::{Msh, Rgb8, lab_to_unit_rgb, rgb255_to_msh};

/// Colormap sampled by a normalized scalar in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    name: String,
    lut: Vec<[f64; 3]>,
}

impl Colormap {
    /// Build from a lookup table of unit-range RGB triples.
    /// An empty table is replaced by a single black entry.
    pub fn from_lut(name: impl Into<String>, mut lut: Vec<[f64; 3]>) -> Self {
        if lut.is_empty() {
            lut.push([0.0, 0.0, 0.0]);
        }
        Self {
            name: name.into(),
            lut,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of discrete entries in the table.
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    /// Always false: [`Colormap::from_lut`] never leaves the table empty.
    /// Present to pair with [`Colormap::len`].
    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Unit-range RGB at `x`. Values outside [0, 1] clamp to the ends, NaN
    /// maps to the low end.
    pub fn sample_unit(&self, x: f64) -> [f64; 3] {
        self.lut[lut_index(x, self.lut.len())]
    }

    /// 8-bit color at `x`.
    pub fn sample(&self, x: f64) -> Rgb8 {
        let [r, g, b] = self.sample_unit(x);
        Rgb8::from_unit(r, g, b)
    }

    /// `n` evenly spaced colors from the low to the high end.
    pub fn samples(&self, n: usize) -> Vec<Rgb8> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Table index for `x` with `n` bins: `floor(x * n)`, the top edge folded into
/// the last bin.
fn lut_index(x: f64, n: usize) -> usize {
    if x.is_nan() || x <= 0.0 {
        return 0;
    }
    ((x * n as f64).floor() as usize).min(n - 1)
}

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}

// ------------------------ Cubehelix ------------------------

/// Parameters of the cubehelix scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubehelixParams {
    /// Starting hue, in [0, 3].
    pub start: f64,
    /// Rotations around the hue wheel over the range.
    pub rot: f64,
    /// Exponent applied to lightness.
    pub gamma: f64,
    /// Saturation.
    pub hue: f64,
    /// Lightness of the low end, in [0, 1].
    pub light: f64,
    /// Lightness of the high end, in [0, 1].
    pub dark: f64,
    pub reverse: bool,
}

impl Default for CubehelixParams {
    fn default() -> Self {
        Self {
            start: 0.0,
            rot: 0.4,
            gamma: 1.0,
            hue: 0.8,
            light: 0.85,
            dark: 0.15,
            reverse: false,
        }
    }
}

const CUBEHELIX_BINS: usize = 256;

/// Per-channel projection coefficients of the helix.
const CUBEHELIX_COEFFS: [(f64, f64); 3] =
    [(-0.14861, 1.78277), (-0.29227, -0.90649), (1.97294, 0.0)];

fn cubehelix_channel(p: &CubehelixParams, (p0, p1): (f64, f64), x: f64) -> f64 {
    let xg = x.powf(p.gamma);
    let amp = p.hue * xg * (1.0 - xg) / 2.0;
    let phi = 2.0 * PI * (p.start / 3.0 + p.rot * x);
    xg + amp * (p0 * phi.cos() + p1 * phi.sin())
}

/// Build a 256-entry cubehelix colormap.
///
/// The helix is first tabulated over [0, 1], then resampled between `light`
/// and `dark`.
pub fn cubehelix(params: &CubehelixParams) -> Colormap {
    let base: Vec<[f64; 3]> = linspace(0.0, 1.0, CUBEHELIX_BINS)
        .map(|x| CUBEHELIX_COEFFS.map(|c| cubehelix_channel(params, c, x).clamp(0.0, 1.0)))
        .collect();

    let mut positions: Vec<f64> = linspace(params.light, params.dark, CUBEHELIX_BINS).collect();
    if params.reverse {
        positions.reverse();
    }
    let lut = positions
        .into_iter()
        .map(|x| base[lut_index(x, base.len())])
        .collect();

    debug!(
        "built cubehelix colormap (start={}, rot={}, light={}, dark={})",
        params.start, params.rot, params.light, params.dark
    );
    Colormap::from_lut("cubehelix", lut)
}

// ------------------------ Msh diverging ------------------------

/// How positions are spread between the ends and the neutral midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rescale {
    Linear,
    /// The distance from the midpoint, in [0, 1], is raised to `1 / power`.
    /// Powers above 1 leave the neutral band narrower.
    Power(f64),
}

/// Parameters of a diverging Msh colormap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MshParams {
    /// Low-end color, sRGB on a 0..255 scale.
    pub rgb1: [f64; 3],
    /// High-end color, sRGB on a 0..255 scale.
    pub rgb2: [f64; 3],
    /// Neutral color at the midpoint, sRGB on a 0..255 scale. Its Msh
    /// magnitude sets the midpoint lightness. `None` uses Moreland's rule
    /// `max(M1, M2, 88)`.
    pub ref_point: Option<[f64; 3]>,
    pub num_bins: usize,
    pub rescale: Rescale,
}

impl Default for MshParams {
    fn default() -> Self {
        Self {
            rgb1: [59.0, 76.0, 192.0],
            rgb2: [180.0, 4.0, 38.0],
            ref_point: None,
            num_bins: 256,
            rescale: Rescale::Linear,
        }
    }
}

const SATURATION_EPS: f64 = 0.05;

/// Hue shift for an unsaturated end so that the interpolation does not pass
/// through a hue discontinuity.
fn adjust_hue(sat: Msh, m_unsat: f64) -> f64 {
    if sat.m >= m_unsat {
        return sat.h;
    }
    let spin = sat.s * (m_unsat * m_unsat - sat.m * sat.m).sqrt() / (sat.m * sat.s.sin());
    if sat.h > -PI / 3.0 {
        sat.h + spin
    } else {
        sat.h - spin
    }
}

fn hue_distance(h1: f64, h2: f64) -> f64 {
    let d = (h1 - h2).abs() % (2.0 * PI);
    if d > PI { 2.0 * PI - d } else { d }
}

fn interpolate_msh(mut c1: Msh, mut c2: Msh, m_mid: Option<f64>, mut t: f64) -> Msh {
    if c1.s > SATURATION_EPS && c2.s > SATURATION_EPS && hue_distance(c1.h, c2.h) > PI / 3.0 {
        let mid = m_mid.unwrap_or_else(|| c1.m.max(c2.m).max(88.0));
        let neutral = Msh {
            m: mid,
            s: 0.0,
            h: 0.0,
        };
        if t < 0.5 {
            c2 = neutral;
            t *= 2.0;
        } else {
            c1 = neutral;
            t = 2.0 * t - 1.0;
        }
    }

    if c1.s < SATURATION_EPS && c2.s > SATURATION_EPS {
        c1.h = adjust_hue(c2, c1.m);
    } else if c2.s < SATURATION_EPS && c1.s > SATURATION_EPS {
        c2.h = adjust_hue(c1, c2.m);
    }

    Msh {
        m: (1.0 - t) * c1.m + t * c2.m,
        s: (1.0 - t) * c1.s + t * c2.s,
        h: (1.0 - t) * c1.h + t * c2.h,
    }
}

fn rescale_position(x: f64, rescale: Rescale) -> f64 {
    match rescale {
        Rescale::Linear => x,
        Rescale::Power(power) => {
            let d = 2.0 * x - 1.0;
            0.5 + 0.5 * d.signum() * d.abs().powf(1.0 / power)
        }
    }
}

/// Build a diverging colormap by interpolating between two colors in Msh
/// space through a neutral midpoint.
pub fn msh_diverging(params: &MshParams) -> Colormap {
    let c1 = rgb255_to_msh(params.rgb1);
    let c2 = rgb255_to_msh(params.rgb2);
    let m_mid = params.ref_point.map(|p| rgb255_to_msh(p).m);

    let lut = linspace(0.0, 1.0, params.num_bins.max(1))
        .map(|x| {
            let t = rescale_position(x, params.rescale);
            lab_to_unit_rgb(interpolate_msh(c1, c2, m_mid, t).into())
        })
        .collect();

    debug!(
        "built msh colormap with {} bins ({:?})",
        params.num_bins, params.rescale
    );
    Colormap::from_lut("msh", lut)
}
