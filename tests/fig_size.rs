use paperfig::journal::{JournalLayout, LayoutWidth, MNRAS_COLWIDTH, MNRAS_TEXTWIDTH};
use paperfig::{GOLDEN_RATIO, get_fig_size};

const TOL: f64 = 1e-9;

#[test]
fn width_follows_points_per_inch() {
    for width in [100.0, 240.0, 345.0, 504.0] {
        for fraction in [0.25, 0.5, 1.0] {
            let size = get_fig_size(width, None, fraction);
            assert!((size.width_in - width * fraction / 72.2699).abs() < TOL);
        }
    }
}

#[test]
fn default_aspect_is_golden_ratio() {
    for width in [1.0, 240.0, 504.0] {
        let size = get_fig_size(width, None, 1.0);
        assert!((size.height_in / size.width_in - (5f64.sqrt() - 1.0) / 2.0).abs() < TOL);
        assert!((size.aspect_ratio() - GOLDEN_RATIO).abs() < TOL);
    }
}

#[test]
fn explicit_ratio_scales_height() {
    let base = get_fig_size(MNRAS_COLWIDTH, None, 1.0);
    for ratio in [0.3, 1.0, 1.7] {
        let size = get_fig_size(MNRAS_COLWIDTH, Some(ratio), 1.0);
        assert!((size.height_in - base.width_in * ratio).abs() < TOL);
    }
}

#[test]
fn half_fraction_halves_width() {
    let full = get_fig_size(MNRAS_TEXTWIDTH, None, 1.0);
    let half = get_fig_size(MNRAS_TEXTWIDTH, None, 0.5);
    assert!((half.width_in - 0.5 * full.width_in).abs() < TOL);
}

#[test]
fn mnras_text_width_scenario() {
    let size = get_fig_size(504.0, None, 1.0);
    assert!((size.width_in - 6.974).abs() < 5e-3);
    assert!((size.height_in - 4.310).abs() < 5e-3);
}

#[test]
fn mnras_half_column_scenario() {
    let size = JournalLayout::MNRAS.fig_size(LayoutWidth::Column, None, 0.5);
    assert!((size.width_in - 1.661).abs() < 5e-3);
    assert!((size.height_in - 1.027).abs() < 5e-3);
}
