//! Figure dimensions that embed in a LaTeX document without rescaling.
//!
//! After <https://jwalton.info/Embed-Publication-Matplotlib-Latex/>.
//! Widths are typeset points as reported by `\showthe\columnwidth` or
//! `\showthe\textwidth`.

use serde::{Deserialize, Serialize};

/// `(sqrt(5) - 1) / 2`, the default height-to-width ratio.
pub const GOLDEN_RATIO: f64 = 0.618_033_988_749_894_8;

/// Points per inch used for the conversion. Kept at this exact value since
/// existing figures were sized with it.
pub const POINTS_PER_INCH: f64 = 72.2699;

/// Figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigSize {
    /// Pixel dimensions at `dpi`, rounded to the nearest pixel.
    pub fn to_pixels(self, dpi: f64) -> (u32, u32) {
        let px = |inches: f64| (inches * dpi).round().max(0.0) as u32;
        (px(self.width_in), px(self.height_in))
    }

    pub fn aspect_ratio(self) -> f64 {
        self.height_in / self.width_in
    }
}

impl From<FigSize> for (f64, f64) {
    fn from(size: FigSize) -> Self {
        (size.width_in, size.height_in)
    }
}

/// Compute figure dimensions in inches.
///
/// * `width` - target width in points
/// * `height_ratio` - height as a fraction of the width, golden ratio if `None`
/// * `fraction` - share of `width` the figure occupies
///
/// No validation is done; non-positive inputs give non-positive sizes.
pub fn get_fig_size(width: f64, height_ratio: Option<f64>, fraction: f64) -> FigSize {
    let fig_width_pt = width * fraction;
    let inches_per_pt = 1.0 / POINTS_PER_INCH;
    let ratio = height_ratio.unwrap_or(GOLDEN_RATIO);

    let width_in = fig_width_pt * inches_per_pt;
    FigSize {
        width_in,
        height_in: width_in * ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_ratio_constant() {
        assert!((GOLDEN_RATIO - (5f64.sqrt() - 1.0) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn width_is_points_over_72_2699() {
        let size = get_fig_size(300.0, None, 0.8);
        assert!((size.width_in - 300.0 * 0.8 / 72.2699).abs() < 1e-12);
    }

    #[test]
    fn explicit_ratio() {
        let size = get_fig_size(240.0, Some(1.0), 1.0);
        assert!((size.width_in - size.height_in).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_propagate() {
        let size = get_fig_size(-100.0, None, 1.0);
        assert!(size.width_in < 0.0 && size.height_in < 0.0);
        assert_eq!(get_fig_size(504.0, None, 0.0).width_in, 0.0);
    }

    #[test]
    fn pixels_at_dpi() {
        let size = FigSize {
            width_in: 3.5,
            height_in: 2.0,
        };
        assert_eq!(size.to_pixels(100.0), (350, 200));
        let (w, h): (f64, f64) = size.into();
        assert_eq!((w, h), (3.5, 2.0));
    }
}
