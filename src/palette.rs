//! Named colors and colormaps for paper figures.
//!
//! Discrete colors are lowercase `#rrggbb` strings. Colormaps are built on
//! first access and shared for the lifetime of the process.

use std::sync::LazyLock;

use crate::color::Rgb8;
use crate::colormap::{Colormap, CubehelixParams, MshParams, Rescale, cubehelix, msh_diverging};

/// A palette value: either a single color or a continuous colormap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteEntry {
    Discrete(&'static str),
    Continuous(&'static Colormap),
}

impl PaletteEntry {
    /// Representative color: the color itself, or the low end of a colormap.
    pub fn color(&self) -> Rgb8 {
        match self {
            // Hex constants below are checked by tests.
            PaletteEntry::Discrete(hex) => Rgb8::from_hex(hex).unwrap_or(Rgb8::new(0, 0, 0)),
            PaletteEntry::Continuous(cmap) => cmap.sample(0.0),
        }
    }
}

// ------------------------ Colormaps ------------------------

/// Sequential cubehelix map running from black to white.
pub static CMAP: LazyLock<Colormap> = LazyLock::new(|| {
    cubehelix(&CubehelixParams {
        start: 0.5,
        rot: -1.5,
        gamma: 1.0,
        hue: 1.0,
        light: 0.0,
        dark: 1.0,
        reverse: false,
    })
});

/// Cool-to-warm diverging map (blue to red) with a light grey center.
pub static MSH_CMAP: LazyLock<Colormap> = LazyLock::new(|| {
    msh_diverging(&MshParams {
        num_bins: 501,
        rescale: Rescale::Power(2.5),
        ..MshParams::default()
    })
});

/// Green-to-purple diverging map with a mid-grey center.
pub static MSH_CMAP2: LazyLock<Colormap> = LazyLock::new(|| {
    msh_diverging(&MshParams {
        rgb1: [0.085 * 256.0, 0.532 * 256.0, 0.201 * 256.0],
        rgb2: [0.436 * 256.0, 0.308 * 256.0, 0.631 * 256.0],
        ref_point: Some([160.0, 160.0, 160.0]),
        num_bins: 501,
        rescale: Rescale::Power(1.5),
    })
});

// ------------------------ Discrete colors ------------------------

// xkcd color survey names
pub const EMERALD: &str = "#01a049";
pub const ORANGE: &str = "#ff5b00";
pub const PURPLE: &str = "#bf77f6";

// ColorBrewer Set2
pub const CB2_EMERALD: &str = "#66c2a5";
pub const CB2_ORANGE: &str = "#fc8d62";
pub const CB2_BLUE: &str = "#8da0cb";

// ColorBrewer Set1
pub const CB_RED: &str = "#e41a1c";
pub const CB_BLUE: &str = "#377eb8";
pub const CB_GREEN: &str = "#4daf4a";
pub const CB_PURPLE: &str = "#984ea3";
pub const CB_ORANGE: &str = "#ff7f00";
pub const CB_GREY: &str = "#404040";

/// Seaborn "deep" qualitative palette.
pub const DEEP: [Rgb8; 10] = [
    Rgb8::new(0x4c, 0x72, 0xb0), // blue
    Rgb8::new(0xdd, 0x84, 0x52), // orange
    Rgb8::new(0x55, 0xa8, 0x68), // green
    Rgb8::new(0xc4, 0x4e, 0x52), // red
    Rgb8::new(0x81, 0x72, 0xb3), // purple
    Rgb8::new(0x93, 0x78, 0x60), // brown
    Rgb8::new(0xda, 0x8b, 0xc3), // pink
    Rgb8::new(0x8c, 0x8c, 0x8c), // grey
    Rgb8::new(0xcc, 0xb9, 0x74), // olive
    Rgb8::new(0x64, 0xb5, 0xcd), // cyan
];

// First four entries of DEEP
pub const DEEP_BLUE: &str = "#4c72b0";
pub const DEEP_ORANGE: &str = "#dd8452";
pub const DEEP_GREEN: &str = "#55a868";
pub const DEEP_RED: &str = "#c44e52";

const DISCRETE: [(&str, &str); 16] = [
    ("emerald", EMERALD),
    ("orange", ORANGE),
    ("purple", PURPLE),
    ("cb2_emerald", CB2_EMERALD),
    ("cb2_orange", CB2_ORANGE),
    ("cb2_blue", CB2_BLUE),
    ("cb_red", CB_RED),
    ("cb_blue", CB_BLUE),
    ("cb_green", CB_GREEN),
    ("cb_purple", CB_PURPLE),
    ("cb_orange", CB_ORANGE),
    ("cb_grey", CB_GREY),
    ("deep_blue", DEEP_BLUE),
    ("deep_orange", DEEP_ORANGE),
    ("deep_green", DEEP_GREEN),
    ("deep_red", DEEP_RED),
];

/// Every named palette value, colormaps first.
pub fn entries() -> Vec<(&'static str, PaletteEntry)> {
    let mut out = vec![
        ("cmap", PaletteEntry::Continuous(&*CMAP)),
        ("msh_cmap", PaletteEntry::Continuous(&*MSH_CMAP)),
        ("msh_cmap2", PaletteEntry::Continuous(&*MSH_CMAP2)),
    ];
    out.extend(
        DISCRETE
            .iter()
            .map(|&(name, hex)| (name, PaletteEntry::Discrete(hex))),
    );
    out
}

/// Look up a palette value by name (case-insensitive).
pub fn get(name: &str) -> Option<PaletteEntry> {
    let key = name.to_ascii_lowercase();
    entries()
        .into_iter()
        .find(|(n, _)| *n == key)
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_hex_constants_match_palette() {
        assert_eq!(DEEP[0].to_hex(), DEEP_BLUE);
        assert_eq!(DEEP[1].to_hex(), DEEP_ORANGE);
        assert_eq!(DEEP[2].to_hex(), DEEP_GREEN);
        assert_eq!(DEEP[3].to_hex(), DEEP_RED);
    }

    #[test]
    fn discrete_constants_are_valid_lowercase_hex() {
        for (name, hex) in DISCRETE {
            let parsed = Rgb8::from_hex(hex);
            assert!(parsed.is_ok(), "{name} has invalid hex {hex}");
            assert_eq!(parsed.unwrap().to_hex(), hex, "{name} is not lowercase");
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(get("CB_RED"), Some(PaletteEntry::Discrete(CB_RED)));
        assert!(matches!(get("msh_cmap"), Some(PaletteEntry::Continuous(_))));
        assert_eq!(get("nope"), None);
    }

    #[test]
    fn entry_names_are_unique() {
        let names: std::collections::BTreeSet<_> = entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names.len(), entries().len());
    }
}
