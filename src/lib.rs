//! paperfig
//!
//! Figure styles for academic papers: serif fonts, inward ticks, font sizes
//! matched to the body text, a palette of colors and colormaps, and figure
//! dimensions that embed in LaTeX without rescaling.
//!
//! ### Features
//! - One call to apply a publication style, scaled by a single multiplier
//! - Hex colors from the xkcd, ColorBrewer, and seaborn "deep" palettes
//! - Cubehelix and Msh diverging colormaps
//! - Figure size in inches from a column or text width in points
//! - Adapters for the plotters crate
//!
//! ### Example
//! ```
//! use paperfig::{get_fig_size, set_fontscale};
//! use paperfig::journal::MNRAS_TEXTWIDTH;
//!
//! let style = set_fontscale(1.0);
//! assert_eq!(style.font_size, 9.0);
//!
//! let size = get_fig_size(MNRAS_TEXTWIDTH, None, 1.0);
//! assert!((size.width_in - 6.974).abs() < 1e-2);
//! let cool_warm = paperfig::palette::MSH_CMAP.sample(0.25);
//! println!("{}", cool_warm);
//! ```

pub mod color;
pub mod colormap;
pub mod figsize;
pub mod journal;
pub mod palette;
pub mod plotters_adapter;
pub mod style;

pub use color::{ColorError, Rgb8};
pub use colormap::Colormap;
pub use figsize::{FigSize, GOLDEN_RATIO, get_fig_size};
pub use palette::PaletteEntry;
pub use style::{StyleParams, active_style, set_fontscale};
