//! Sequential color maps, from light to dark.
//!
//! The maps are the 9-class sequential schemes of ColorBrewer, plus `Binary` that goes
//! straight from white to black. [`parameterized_color_space`] gives each value of a
//! parameter sweep a color of a map, so that the series of a sweep read as a gradient.
use std::fmt;
use std::str::FromStr;

use super::ParseError;
use crate::color::Color;

/// A sequential color map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub enum ColorMap {
    #[default]
    Binary,
    Blues,
    BuGn,
    BuPu,
    GnBu,
    Greens,
    Greys,
    Oranges,
    OrRd,
    PuBu,
    PuBuGn,
    PuRd,
    Purples,
    RdPu,
    Reds,
    YlGn,
    YlGnBu,
    YlOrBr,
    YlOrRd,
}

impl ColorMap {
    /// All the color maps
    pub const ALL: &'static [ColorMap] = &[
        ColorMap::Binary,
        ColorMap::Blues,
        ColorMap::BuGn,
        ColorMap::BuPu,
        ColorMap::GnBu,
        ColorMap::Greens,
        ColorMap::Greys,
        ColorMap::Oranges,
        ColorMap::OrRd,
        ColorMap::PuBu,
        ColorMap::PuBuGn,
        ColorMap::PuRd,
        ColorMap::Purples,
        ColorMap::RdPu,
        ColorMap::Reds,
        ColorMap::YlGn,
        ColorMap::YlGnBu,
        ColorMap::YlOrBr,
        ColorMap::YlOrRd,
    ];

    /// Name of the map, e.g. `"YlOrRd"`
    pub const fn name(&self) -> &'static str {
        match self {
            ColorMap::Binary => "binary",
            ColorMap::Blues => "Blues",
            ColorMap::BuGn => "BuGn",
            ColorMap::BuPu => "BuPu",
            ColorMap::GnBu => "GnBu",
            ColorMap::Greens => "Greens",
            ColorMap::Greys => "Greys",
            ColorMap::Oranges => "Oranges",
            ColorMap::OrRd => "OrRd",
            ColorMap::PuBu => "PuBu",
            ColorMap::PuBuGn => "PuBuGn",
            ColorMap::PuRd => "PuRd",
            ColorMap::Purples => "Purples",
            ColorMap::RdPu => "RdPu",
            ColorMap::Reds => "Reds",
            ColorMap::YlGn => "YlGn",
            ColorMap::YlGnBu => "YlGnBu",
            ColorMap::YlOrBr => "YlOrBr",
            ColorMap::YlOrRd => "YlOrRd",
        }
    }

    fn anchors(&self) -> &'static [Color] {
        match self {
            ColorMap::Binary => BINARY,
            ColorMap::Blues => BLUES,
            ColorMap::BuGn => BU_GN,
            ColorMap::BuPu => BU_PU,
            ColorMap::GnBu => GN_BU,
            ColorMap::Greens => GREENS,
            ColorMap::Greys => GREYS,
            ColorMap::Oranges => ORANGES,
            ColorMap::OrRd => OR_RD,
            ColorMap::PuBu => PU_BU,
            ColorMap::PuBuGn => PU_BU_GN,
            ColorMap::PuRd => PU_RD,
            ColorMap::Purples => PURPLES,
            ColorMap::RdPu => RD_PU,
            ColorMap::Reds => REDS,
            ColorMap::YlGn => YL_GN,
            ColorMap::YlGnBu => YL_GN_BU,
            ColorMap::YlOrBr => YL_OR_BR,
            ColorMap::YlOrRd => YL_OR_RD,
        }
    }

    /// Color at `pos`, from 0.0 (lightest) to 1.0 (darkest).
    /// Positions out of range are clamped, NaN gives the lightest color.
    pub fn color(&self, pos: f64) -> Color {
        let anchors = self.anchors();
        let pos = if pos.is_nan() { 0.0 } else { pos.clamp(0.0, 1.0) };
        let x = pos * (anchors.len() - 1) as f64;
        let idx = (x.floor() as usize).min(anchors.len() - 2);
        let t = x - idx as f64;
        let (a, b) = (anchors[idx].rgb(), anchors[idx + 1].rgb());
        let lerp = |i: usize| {
            let v = a[i] as f64 + (b[i] as f64 - a[i] as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::from_rgb(lerp(0), lerp(1), lerp(2))
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = ParseError;

    /// Parse a map name, case insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorMap::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ParseError {
                kind: "color map",
                spec: s.to_string(),
            })
    }
}

/// Error returned by [`parameterized_color_space`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpaceError {
    /// No parameter value
    EmptyParams,
    /// A parameter value is not finite
    InvalidParam {
        /// index of the value
        index: usize,
    },
    /// The offset is not between 0 and 1
    InvalidOffset(f64),
}

impl fmt::Display for ColorSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpaceError::EmptyParams => write!(f, "parameter list is empty"),
            ColorSpaceError::InvalidParam { index } => {
                write!(f, "parameter {index} is not a finite number")
            }
            ColorSpaceError::InvalidOffset(offset) => {
                write!(f, "offset {offset} is not between 0 and 1")
            }
        }
    }
}

impl std::error::Error for ColorSpaceError {}

/// One color of `map` per parameter value. Lighter colors go to lower values.
///
/// Values are normalized to `[offset, 1]`: the smallest value gets the color at `offset`
/// and the largest gets the darkest color of the map. An offset above zero keeps the
/// lightest colors, hardly visible on a white background, out of the plot.
/// When all values are equal, they all get the darkest color.
pub fn parameterized_color_space(
    params: &[f64],
    offset: f64,
    map: ColorMap,
) -> Result<Vec<Color>, ColorSpaceError> {
    if params.is_empty() {
        return Err(ColorSpaceError::EmptyParams);
    }
    if !(0.0..=1.0).contains(&offset) {
        return Err(ColorSpaceError::InvalidOffset(offset));
    }
    if let Some(index) = params.iter().position(|p| !p.is_finite()) {
        return Err(ColorSpaceError::InvalidParam { index });
    }
    let min = params.iter().copied().fold(f64::INFINITY, f64::min);
    let max = params.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    log::trace!("color space {map} over [{min}, {max}] from {offset}");

    let colors = params
        .iter()
        .map(|p| {
            let norm = if span > 0.0 { (p - min) / span } else { 1.0 };
            map.color(offset + norm * (1.0 - offset))
        })
        .collect();
    Ok(colors)
}

const fn hex(rgb: u32) -> Color {
    Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

const BINARY: &[Color] = &[hex(0xffffff), hex(0x000000)];

const BLUES: &[Color] = &[
    hex(0xf7fbff), hex(0xdeebf7), hex(0xc6dbef), hex(0x9ecae1), hex(0x6baed6),
    hex(0x4292c6), hex(0x2171b5), hex(0x08519c), hex(0x08306b),
];
const BU_GN: &[Color] = &[
    hex(0xf7fcfd), hex(0xe5f5f9), hex(0xccece6), hex(0x99d8c9), hex(0x66c2a4),
    hex(0x41ae76), hex(0x238b45), hex(0x006d2c), hex(0x00441b),
];
const BU_PU: &[Color] = &[
    hex(0xf7fcfd), hex(0xe0ecf4), hex(0xbfd3e6), hex(0x9ebcda), hex(0x8c96c6),
    hex(0x8c6bb1), hex(0x88419d), hex(0x810f7c), hex(0x4d004b),
];
const GN_BU: &[Color] = &[
    hex(0xf7fcf0), hex(0xe0f3db), hex(0xccebc5), hex(0xa8ddb5), hex(0x7bccc4),
    hex(0x4eb3d3), hex(0x2b8cbe), hex(0x0868ac), hex(0x084081),
];
const GREENS: &[Color] = &[
    hex(0xf7fcf5), hex(0xe5f5e0), hex(0xc7e9c0), hex(0xa1d99b), hex(0x74c476),
    hex(0x41ab5d), hex(0x238b45), hex(0x006d2c), hex(0x00441b),
];
const GREYS: &[Color] = &[
    hex(0xffffff), hex(0xf0f0f0), hex(0xd9d9d9), hex(0xbdbdbd), hex(0x969696),
    hex(0x737373), hex(0x525252), hex(0x252525), hex(0x000000),
];
const ORANGES: &[Color] = &[
    hex(0xfff5eb), hex(0xfee6ce), hex(0xfdd0a2), hex(0xfdae6b), hex(0xfd8d3c),
    hex(0xf16913), hex(0xd94801), hex(0xa63603), hex(0x7f2704),
];
const OR_RD: &[Color] = &[
    hex(0xfff7ec), hex(0xfee8c8), hex(0xfdd49e), hex(0xfdbb84), hex(0xfc8d59),
    hex(0xef6548), hex(0xd7301f), hex(0xb30000), hex(0x7f0000),
];
const PU_BU: &[Color] = &[
    hex(0xfff7fb), hex(0xece7f2), hex(0xd0d1e6), hex(0xa6bddb), hex(0x74a9cf),
    hex(0x3690c0), hex(0x0570b0), hex(0x045a8d), hex(0x023858),
];
const PU_BU_GN: &[Color] = &[
    hex(0xfff7fb), hex(0xece2f0), hex(0xd0d1e6), hex(0xa6bddb), hex(0x67a9cf),
    hex(0x3690c0), hex(0x02818a), hex(0x016c59), hex(0x014636),
];
const PU_RD: &[Color] = &[
    hex(0xf7f4f9), hex(0xe7e1ef), hex(0xd4b9da), hex(0xc994c7), hex(0xdf65b0),
    hex(0xe7298a), hex(0xce1256), hex(0x980043), hex(0x67001f),
];
const PURPLES: &[Color] = &[
    hex(0xfcfbfd), hex(0xefedf5), hex(0xdadaeb), hex(0xbcbddc), hex(0x9e9ac8),
    hex(0x807dba), hex(0x6a51a3), hex(0x54278f), hex(0x3f007d),
];
const RD_PU: &[Color] = &[
    hex(0xfff7f3), hex(0xfde0dd), hex(0xfcc5c0), hex(0xfa9fb5), hex(0xf768a1),
    hex(0xdd3497), hex(0xae017e), hex(0x7a0177), hex(0x49006a),
];
const REDS: &[Color] = &[
    hex(0xfff5f0), hex(0xfee0d2), hex(0xfcbba1), hex(0xfc9272), hex(0xfb6a4a),
    hex(0xef3b2c), hex(0xcb181d), hex(0xa50f15), hex(0x67000d),
];
const YL_GN: &[Color] = &[
    hex(0xffffe5), hex(0xf7fcb9), hex(0xd9f0a3), hex(0xaddd8e), hex(0x78c679),
    hex(0x41ab5d), hex(0x238443), hex(0x006837), hex(0x004529),
];
const YL_GN_BU: &[Color] = &[
    hex(0xffffd9), hex(0xedf8b1), hex(0xc7e9b4), hex(0x7fcdbb), hex(0x41b6c4),
    hex(0x1d91c0), hex(0x225ea8), hex(0x253494), hex(0x081d58),
];
const YL_OR_BR: &[Color] = &[
    hex(0xffffe5), hex(0xfff7bc), hex(0xfee391), hex(0xfec44f), hex(0xfe9929),
    hex(0xec7014), hex(0xcc4c02), hex(0x993404), hex(0x662506),
];
const YL_OR_RD: &[Color] = &[
    hex(0xffffcc), hex(0xffeda0), hex(0xfed976), hex(0xfeb24c), hex(0xfd8d3c),
    hex(0xfc4e2a), hex(0xe31a1c), hex(0xbd0026), hex(0x800026),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn parse_names() {
        assert_eq!("Blues".parse::<ColorMap>().unwrap(), ColorMap::Blues);
        assert_eq!(" ylorrd ".parse::<ColorMap>().unwrap(), ColorMap::YlOrRd);
        assert_eq!("BINARY".parse::<ColorMap>().unwrap(), ColorMap::Binary);
        assert!("a".parse::<ColorMap>().is_err());
        for map in ColorMap::ALL {
            assert_eq!(map.to_string().parse::<ColorMap>().unwrap(), *map);
        }
    }

    #[test]
    fn map_ends() {
        assert_eq!(ColorMap::Binary.color(0.0), color::WHITE);
        assert_eq!(ColorMap::Binary.color(1.0), color::BLACK);
        assert_eq!(ColorMap::Binary.color(0.5), Color::from_rgb(128, 128, 128));
        assert_eq!(ColorMap::Blues.color(0.0), hex(0xf7fbff));
        assert_eq!(ColorMap::Blues.color(1.0), hex(0x08306b));
        assert_eq!(ColorMap::Blues.color(-3.0), hex(0xf7fbff));
        assert_eq!(ColorMap::Blues.color(7.0), hex(0x08306b));
        assert_eq!(ColorMap::Blues.color(f64::NAN), hex(0xf7fbff));
    }

    #[test]
    fn maps_get_darker() {
        let luma = |c: Color| {
            let [r, g, b] = c.rgb();
            0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
        };
        for map in ColorMap::ALL {
            let lumas: Vec<f64> = (0..=10).map(|i| luma(map.color(i as f64 / 10.0))).collect();
            assert!(lumas.windows(2).all(|w| w[0] >= w[1]), "{map}: {lumas:?}");
        }
    }

    #[test]
    fn color_space_with_offset() {
        let params = [0.0, 2.0 / 3.0, 4.0 / 3.0, 2.0];
        let colors = parameterized_color_space(&params, 0.25, ColorMap::Greys).unwrap();
        assert_eq!(
            colors,
            &[hex(0xd9d9d9), hex(0x969696), hex(0x525252), hex(0x000000)]
        );

        // order of the values doesn't matter
        let colors = parameterized_color_space(&[2.0, 0.0], 0.0, ColorMap::Binary).unwrap();
        assert_eq!(colors, &[color::BLACK, color::WHITE]);
    }

    #[test]
    fn color_space_constant_params() {
        let colors = parameterized_color_space(&[3.3, 3.3], 0.5, ColorMap::Reds).unwrap();
        assert_eq!(colors, &[hex(0x67000d), hex(0x67000d)]);
    }

    #[test]
    fn color_space_errors() {
        assert_eq!(
            parameterized_color_space(&[], 0.0, ColorMap::Binary),
            Err(ColorSpaceError::EmptyParams)
        );
        assert_eq!(
            parameterized_color_space(&[1.0, 2.0], -0.1, ColorMap::Binary),
            Err(ColorSpaceError::InvalidOffset(-0.1))
        );
        assert_eq!(
            parameterized_color_space(&[1.0, 2.0], 1.5, ColorMap::Binary),
            Err(ColorSpaceError::InvalidOffset(1.5))
        );
        assert!(matches!(
            parameterized_color_space(&[1.0, 2.0], f64::NAN, ColorMap::Binary),
            Err(ColorSpaceError::InvalidOffset(_))
        ));
        assert_eq!(
            parameterized_color_space(&[1.0, f64::INFINITY], 0.0, ColorMap::Binary),
            Err(ColorSpaceError::InvalidParam { index: 1 })
        );
        // offset 1 is accepted and gives the darkest color
        let colors = parameterized_color_space(&[1.0, 2.0], 1.0, ColorMap::Blues).unwrap();
        assert_eq!(colors, &[hex(0x08306b), hex(0x08306b)]);
    }
}
