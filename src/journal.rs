//! Page layout constants of journals, in points.

use serde::{Deserialize, Serialize};

use crate::figsize::{FigSize, get_fig_size};

pub const MNRAS_COLWIDTH: f64 = 240.0;
pub const MNRAS_TEXTWIDTH: f64 = 504.0;
pub const MNRAS_TEXT_FONTSIZE: f64 = 9.0;
pub const MNRAS_FIGCAPTION_FONTSIZE: f64 = 8.0;

/// Which of the page widths a figure spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutWidth {
    /// One column of a two-column page.
    Column,
    /// Full text width.
    Text,
}

/// Widths and font sizes of a journal page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JournalLayout {
    pub name: &'static str,
    pub column_width_pt: f64,
    pub text_width_pt: f64,
    pub text_fontsize_pt: f64,
    pub caption_fontsize_pt: f64,
}

impl JournalLayout {
    pub const MNRAS: JournalLayout = JournalLayout {
        name: "MNRAS",
        column_width_pt: MNRAS_COLWIDTH,
        text_width_pt: MNRAS_TEXTWIDTH,
        text_fontsize_pt: MNRAS_TEXT_FONTSIZE,
        caption_fontsize_pt: MNRAS_FIGCAPTION_FONTSIZE,
    };

    pub fn width_pt(&self, width: LayoutWidth) -> f64 {
        match width {
            LayoutWidth::Column => self.column_width_pt,
            LayoutWidth::Text => self.text_width_pt,
        }
    }

    /// Figure size spanning `width`, see [`get_fig_size`].
    pub fn fig_size(
        &self,
        width: LayoutWidth,
        height_ratio: Option<f64>,
        fraction: f64,
    ) -> FigSize {
        get_fig_size(self.width_pt(width), height_ratio, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnras_widths() {
        let j = JournalLayout::MNRAS;
        assert_eq!(j.width_pt(LayoutWidth::Column), 240.0);
        assert_eq!(j.width_pt(LayoutWidth::Text), 504.0);
        assert_eq!(
            j.fig_size(LayoutWidth::Text, None, 1.0),
            get_fig_size(MNRAS_TEXTWIDTH, None, 1.0)
        );
    }
}
