//! Publication style: serif fonts, inward ticks, and font sizes matched to a
//! 9 pt body text, all scaled by one multiplier. Axes follow the "ticks"
//! look (white face, no grid, ticks on the bottom and left) and lines cycle
//! through the deep palette.
//!
//! # Usage
//!
//! ```rust
//! use paperfig::style::{active_style, set_fontscale};
//!
//! let style = set_fontscale(2.0);
//! assert_eq!(style.axes_labelsize, 18.0);
//! assert_eq!(active_style(), style);
//! ```
//!
//! # Lifecycle
//!
//! The active style is process-wide. Set it once, before any figure is
//! created; each call replaces the whole style. Renderers either read
//! [`active_style`] or take the [`StyleParams`] returned by
//! [`set_fontscale`] directly.
//!
//! Before the first call the active style is the scale-1 style, so a
//! renderer never sees a half-configured state.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{LazyLock, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Rgb8;
use crate::journal::{MNRAS_FIGCAPTION_FONTSIZE, MNRAS_TEXT_FONTSIZE};
use crate::palette::DEEP;

/// Axes line width at scale 1, in points.
pub const BASE_LINEWIDTH: f64 = 0.5;
/// Label, title, and body font size at scale 1, in points.
pub const BASE_FONTSIZE: f64 = MNRAS_TEXT_FONTSIZE;
/// Legend and tick-label font size at scale 1, in points.
pub const BASE_SMALL_FONTSIZE: f64 = MNRAS_FIGCAPTION_FONTSIZE;

/// Tick mark direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    Out,
    InOut,
}

impl TickDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickDirection::In => "in",
            TickDirection::Out => "out",
            TickDirection::InOut => "inout",
        }
    }
}

/// Math text fonts mapped onto the serif family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MathText {
    pub fontset: String,
    pub rm: String,
    pub it: String,
    pub bf: String,
}

impl Default for MathText {
    fn default() -> Self {
        Self {
            fontset: "custom".into(),
            rm: "serif".into(),
            it: "serif:italic".into(),
            bf: "serif:bold".into(),
        }
    }
}

/// Complete set of style options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleParams {
    pub font_scale: f64,
    pub font_family: String,
    pub font_serif: String,
    pub mathtext: MathText,
    /// PostScript/PDF font type; 42 embeds TrueType fonts.
    pub ps_fonttype: u8,
    pub xtick_direction: TickDirection,
    pub ytick_direction: TickDirection,
    pub xtick_bottom: bool,
    pub xtick_top: bool,
    pub ytick_left: bool,
    pub ytick_right: bool,
    pub axes_facecolor: Rgb8,
    pub axes_grid: bool,
    /// Line colors, used in order and wrapped around.
    pub color_cycle: Vec<Rgb8>,
    pub axes_linewidth: f64,
    pub axes_labelsize: f64,
    pub font_size: f64,
    pub axes_titlesize: f64,
    pub legend_fontsize: f64,
    pub xtick_labelsize: f64,
    pub ytick_labelsize: f64,
}

impl StyleParams {
    /// Style with every size multiplied by `font_scale`. The scale is not
    /// validated.
    pub fn with_font_scale(font_scale: f64) -> Self {
        Self {
            font_scale,
            font_family: "serif".into(),
            font_serif: "Times New Roman".into(),
            mathtext: MathText::default(),
            ps_fonttype: 42,
            xtick_direction: TickDirection::In,
            ytick_direction: TickDirection::In,
            xtick_bottom: true,
            xtick_top: false,
            ytick_left: true,
            ytick_right: false,
            axes_facecolor: Rgb8::new(255, 255, 255),
            axes_grid: false,
            color_cycle: DEEP.to_vec(),
            axes_linewidth: BASE_LINEWIDTH * font_scale,
            axes_labelsize: BASE_FONTSIZE * font_scale,
            font_size: BASE_FONTSIZE * font_scale,
            axes_titlesize: BASE_FONTSIZE * font_scale,
            legend_fontsize: BASE_SMALL_FONTSIZE * font_scale,
            xtick_labelsize: BASE_SMALL_FONTSIZE * font_scale,
            ytick_labelsize: BASE_SMALL_FONTSIZE * font_scale,
        }
    }

    /// Options keyed by their matplotlib rc names.
    pub fn to_rc(&self) -> BTreeMap<&'static str, RcValue> {
        let text = |s: &str| RcValue::Str(s.to_string());
        let mut rc = BTreeMap::new();
        rc.insert("ps.fonttype", RcValue::Int(self.ps_fonttype as i64));
        rc.insert("font.family", text(&self.font_family));
        rc.insert("font.serif", text(&self.font_serif));
        rc.insert("mathtext.fontset", text(&self.mathtext.fontset));
        rc.insert("mathtext.rm", text(&self.mathtext.rm));
        rc.insert("mathtext.it", text(&self.mathtext.it));
        rc.insert("mathtext.bf", text(&self.mathtext.bf));
        rc.insert("xtick.direction", text(self.xtick_direction.as_str()));
        rc.insert("ytick.direction", text(self.ytick_direction.as_str()));
        rc.insert("xtick.bottom", RcValue::Bool(self.xtick_bottom));
        rc.insert("xtick.top", RcValue::Bool(self.xtick_top));
        rc.insert("ytick.left", RcValue::Bool(self.ytick_left));
        rc.insert("ytick.right", RcValue::Bool(self.ytick_right));
        rc.insert("axes.facecolor", RcValue::Color(self.axes_facecolor));
        rc.insert("axes.grid", RcValue::Bool(self.axes_grid));
        rc.insert("axes.prop_cycle", RcValue::Cycle(self.color_cycle.clone()));
        rc.insert("axes.linewidth", RcValue::Num(self.axes_linewidth));
        rc.insert("axes.labelsize", RcValue::Num(self.axes_labelsize));
        rc.insert("font.size", RcValue::Num(self.font_size));
        rc.insert("axes.titlesize", RcValue::Num(self.axes_titlesize));
        rc.insert("legend.fontsize", RcValue::Num(self.legend_fontsize));
        rc.insert("xtick.labelsize", RcValue::Num(self.xtick_labelsize));
        rc.insert("ytick.labelsize", RcValue::Num(self.ytick_labelsize));
        rc
    }

    /// Options as `key: value` lines in matplotlibrc syntax.
    pub fn to_rc_string(&self) -> String {
        self.to_rc()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}\n"))
            .collect()
    }
}

impl Default for StyleParams {
    fn default() -> Self {
        Self::with_font_scale(1.0)
    }
}

/// A single rc option value.
///
/// Colors serialize as `#rrggbb`. In matplotlibrc text they are written
/// without the `#`, which starts a comment there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RcValue {
    Bool(bool),
    Int(i64),
    Num(f64),
    Color(Rgb8),
    Cycle(Vec<Rgb8>),
    Str(String),
}

impl RcValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RcValue::Int(i) => Some(*i as f64),
            RcValue::Num(x) => Some(*x),
            _ => None,
        }
    }
}

fn rc_hex(c: &Rgb8) -> String {
    format!("{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RcValue::Bool(true) => f.write_str("True"),
            RcValue::Bool(false) => f.write_str("False"),
            RcValue::Int(i) => write!(f, "{i}"),
            RcValue::Num(x) => write!(f, "{x}"),
            RcValue::Color(c) => f.write_str(&rc_hex(c)),
            RcValue::Cycle(colors) => {
                let quoted: Vec<String> = colors
                    .iter()
                    .map(|c| format!("'{}'", rc_hex(c)))
                    .collect();
                write!(f, "cycler('color', [{}])", quoted.join(", "))
            }
            RcValue::Str(s) => f.write_str(s),
        }
    }
}

// ------------------------ Process-wide state ------------------------

static ACTIVE: LazyLock<RwLock<StyleParams>> =
    LazyLock::new(|| RwLock::new(StyleParams::default()));

/// Replace the active style with one scaled by `font_scale` and return it.
pub fn set_fontscale(font_scale: f64) -> StyleParams {
    let params = StyleParams::with_font_scale(font_scale);
    // Style state stays usable even if a writer panicked.
    let mut active = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    *active = params.clone();
    debug!(
        "applied paper style: font_scale={} font.size={} legend.fontsize={}",
        font_scale, params.font_size, params.legend_fontsize
    );
    params
}

/// Copy of the active style.
pub fn active_style() -> StyleParams {
    ACTIVE.read().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEEP_BLUE;

    #[test]
    fn sizes_scale_linearly() {
        let s = StyleParams::with_font_scale(2.0);
        assert_eq!(s.axes_labelsize, 18.0);
        assert_eq!(s.font_size, 18.0);
        assert_eq!(s.axes_titlesize, 18.0);
        assert_eq!(s.legend_fontsize, 16.0);
        assert_eq!(s.xtick_labelsize, 16.0);
        assert_eq!(s.ytick_labelsize, 16.0);
        assert_eq!(s.axes_linewidth, 1.0);
    }

    #[test]
    fn fixed_options_ignore_scale() {
        let a = StyleParams::with_font_scale(0.5);
        let b = StyleParams::with_font_scale(3.0);
        assert_eq!(a.xtick_direction, TickDirection::In);
        assert_eq!(b.ytick_direction, TickDirection::In);
        assert_eq!(a.font_serif, b.font_serif);
        assert_eq!(a.mathtext, b.mathtext);
        assert_eq!(a.ps_fonttype, 42);
    }

    #[test]
    fn zero_and_negative_scales_propagate() {
        assert_eq!(StyleParams::with_font_scale(0.0).font_size, 0.0);
        assert_eq!(StyleParams::with_font_scale(-1.0).legend_fontsize, -8.0);
    }

    #[test]
    fn rc_map_uses_matplotlib_names() {
        let rc = StyleParams::default().to_rc();
        assert_eq!(rc["font.size"].as_f64(), Some(9.0));
        assert_eq!(rc["legend.fontsize"].as_f64(), Some(8.0));
        assert_eq!(rc["xtick.direction"], RcValue::Str("in".into()));
        assert_eq!(rc["ps.fonttype"], RcValue::Int(42));
        assert_eq!(rc["axes.grid"], RcValue::Bool(false));
        assert_eq!(rc.len(), 23);
    }

    #[test]
    fn color_cycle_is_deep_palette() {
        let style = StyleParams::with_font_scale(2.0);
        assert_eq!(style.color_cycle, DEEP.to_vec());
        assert_eq!(style.color_cycle[0].to_hex(), DEEP_BLUE);

        let rc = style.to_rc();
        assert!(rc.contains_key("axes.prop_cycle"));
        match &rc["axes.prop_cycle"] {
            RcValue::Cycle(colors) => assert_eq!(colors.len(), 10),
            other => panic!("unexpected cycle value: {other:?}"),
        }
    }

    #[test]
    fn ticks_axes_options() {
        let style = StyleParams::default();
        assert!(style.xtick_bottom && style.ytick_left);
        assert!(!style.xtick_top && !style.ytick_right);
        assert!(!style.axes_grid);
        assert_eq!(style.axes_facecolor, Rgb8::new(255, 255, 255));
    }

    #[test]
    fn rc_string_lines() {
        let text = StyleParams::with_font_scale(1.5).to_rc_string();
        assert!(text.contains("font.size: 13.5\n"));
        assert!(text.contains("ytick.direction: in\n"));
        assert!(text.contains("font.serif: Times New Roman\n"));
        assert!(text.contains("axes.grid: False\n"));
        assert!(text.contains("axes.facecolor: ffffff\n"));
        let cycle = "axes.prop_cycle: cycler('color', ['4c72b0', 'dd8452', ";
        assert!(text.contains(cycle));
    }
}
