//! Adapter helpers to use the paper style and palette with the plotters crate.
//!
//! Usage example (inside your plotting function):
//! ```ignore
//!     use plotters::prelude::*;
//!     use paperfig::{figsize::get_fig_size, journal::MNRAS_COLWIDTH, style::set_fontscale};
//!     use paperfig::plotters_adapter::{
//!         axis_stroke, cycle_color, figure_pixels, text_style, TextRole,
//!     };
//!
//!     let style = set_fontscale(1.0);
//!     let dpi = 300.0;
//!     let size = figure_pixels(get_fig_size(MNRAS_COLWIDTH, None, 1.0), dpi);
//!     let root = SVGBackend::new("fig.svg", size).into_drawing_area();
//!
//!     let mut chart = ChartBuilder::on(&root)
//!         .caption("Residuals", text_style(&style, TextRole::Title, dpi))
//!         .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;
//!     chart
//!         .configure_mesh()
//!         .axis_style(axis_stroke(&style, dpi))
//!         .label_style(text_style(&style, TextRole::TickLabel, dpi))
//!         .draw()?;
//!     for (i, series) in all_series.into_iter().enumerate() {
//!         chart.draw_series(LineSeries::new(series, cycle_color(&style, i)))?;
//!     }
//! ```

use plotters::style::{Color, FontDesc, FontFamily, FontStyle, RGBColor, ShapeStyle, TextStyle};

use crate::color::{ColorError, Rgb8};
use crate::colormap::Colormap;
use crate::figsize::FigSize;
use crate::style::StyleParams;

/// Points per inch for text; font sizes use the PostScript point.
const TEXT_POINTS_PER_INCH: f64 = 72.0;

/// Which text element a style is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Body,
    AxisLabel,
    Title,
    Legend,
    TickLabel,
}

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Parse a `#rrggbb` palette constant into a plotters color.
pub fn hex_color(hex: &str) -> Result<RGBColor, ColorError> {
    Rgb8::from_hex(hex).map(rgb_color)
}

/// Color of `cmap` at the normalized position `x`.
pub fn colormap_color(cmap: &Colormap, x: f64) -> RGBColor {
    rgb_color(cmap.sample(x))
}

/// Convert a size in points to pixels at `dpi`.
pub fn pt_to_px(pt: f64, dpi: f64) -> f64 {
    pt * dpi / TEXT_POINTS_PER_INCH
}

/// Font size in points for `role`.
pub fn font_size_pt(style: &StyleParams, role: TextRole) -> f64 {
    match role {
        TextRole::Body => style.font_size,
        TextRole::AxisLabel => style.axes_labelsize,
        TextRole::Title => style.axes_titlesize,
        TextRole::Legend => style.legend_fontsize,
        TextRole::TickLabel => style.xtick_labelsize,
    }
}

/// Color of the `index`-th line in the style's color cycle, wrapping around.
/// An empty cycle gives black.
pub fn cycle_color(style: &StyleParams, index: usize) -> RGBColor {
    match style.color_cycle.len() {
        0 => RGBColor(0, 0, 0),
        n => rgb_color(style.color_cycle[index % n]),
    }
}

/// Serif text style for `role`, sized in pixels at `dpi`.
pub fn text_style(style: &StyleParams, role: TextRole, dpi: f64) -> TextStyle<'static> {
    let px = pt_to_px(font_size_pt(style, role), dpi);
    TextStyle::from(FontDesc::new(FontFamily::Serif, px, FontStyle::Normal))
}

/// Black stroke with the axes line width, at least one pixel wide.
pub fn axis_stroke(style: &StyleParams, dpi: f64) -> ShapeStyle {
    let px = pt_to_px(style.axes_linewidth, dpi).round().max(1.0) as u32;
    RGBColor(0, 0, 0).stroke_width(px)
}

/// Backend dimensions for a figure size at `dpi`.
pub fn figure_pixels(size: FigSize, dpi: f64) -> (u32, u32) {
    size.to_pixels(dpi)
}
