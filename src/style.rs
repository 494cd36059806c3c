//! Style definitions for lines and markers, and the sizes of figure elements.
//!
//! Sequential color maps for parameter sweeps are in [`color_map`].
use std::fmt;
use std::str::FromStr;

pub mod color_map;
pub(crate) mod defaults;

pub use color_map::{ColorMap, ColorSpaceError, parameterized_color_space};

/// Sizes of the figure elements, in points.
///
/// The defaults are the sizes of presentation plots:
/// large fonts, thick lines and big markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Figure title font size
    pub title_font_size: f32,
    /// Axis label font size
    pub axis_label_font_size: f32,
    /// Axis tick labels font size
    pub axis_ticks_font_size: f32,
    /// The legend is scaled down by this factor relatively to the axis labels
    pub legend_scale: f32,
    /// Series line width
    pub line_width: f32,
    /// Series marker size
    pub marker_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title_font_size: defaults::TITLE_FONT_SIZE,
            axis_label_font_size: defaults::AXIS_LABEL_FONT_SIZE,
            axis_ticks_font_size: defaults::AXIS_TICKS_FONT_SIZE,
            legend_scale: defaults::LEGEND_SCALE,
            line_width: defaults::LINE_WIDTH,
            marker_size: defaults::MARKER_SIZE,
        }
    }
}

impl Config {
    /// Set the title font size and return self for chaining
    pub fn with_title_font_size(self, title_font_size: f32) -> Self {
        Config {
            title_font_size,
            ..self
        }
    }

    /// Set the axis label font size and return self for chaining
    pub fn with_axis_label_font_size(self, axis_label_font_size: f32) -> Self {
        Config {
            axis_label_font_size,
            ..self
        }
    }

    /// Set the axis tick labels font size and return self for chaining
    pub fn with_axis_ticks_font_size(self, axis_ticks_font_size: f32) -> Self {
        Config {
            axis_ticks_font_size,
            ..self
        }
    }

    /// Set the legend scale and return self for chaining
    pub fn with_legend_scale(self, legend_scale: f32) -> Self {
        Config {
            legend_scale,
            ..self
        }
    }

    /// Set the series line width and return self for chaining
    pub fn with_line_width(self, line_width: f32) -> Self {
        Config { line_width, ..self }
    }

    /// Set the series marker size and return self for chaining
    pub fn with_marker_size(self, marker_size: f32) -> Self {
        Config {
            marker_size,
            ..self
        }
    }

    /// Font size of the legend entries
    pub fn legend_font_size(&self) -> f32 {
        self.axis_label_font_size / self.legend_scale
    }
}

/// Dash pattern for dashed lines
/// A dash pattern is a sequence of lengths that specify the lengths of
/// alternating dashes and gaps.
///
/// The lengths are relative to the line width.
#[derive(Debug, Clone, PartialEq)]
pub struct Dash(pub Vec<f32>);

impl Default for Dash {
    fn default() -> Self {
        Dash(vec![3.7, 1.6])
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LinePattern {
    /// Solid line (`"-"`)
    #[default]
    Solid,
    /// Dashed line (`"--"`). The pattern is relative to the line width.
    Dash(Dash),
    /// Dash-dot line (`"-."`)
    DashDot,
    /// Dotted line (`":"`)
    Dot,
}

impl LinePattern {
    /// Dash pattern of the line, relative to the line width.
    /// `None` for solid lines.
    pub fn dashes(&self) -> Option<Dash> {
        match self {
            LinePattern::Solid => None,
            LinePattern::Dash(dash) => Some(dash.clone()),
            LinePattern::DashDot => Some(Dash(vec![6.4, 1.6, 1.0, 1.6])),
            LinePattern::Dot => Some(Dash(vec![1.0, 1.65])),
        }
    }
}

impl From<Dash> for LinePattern {
    fn from(dash: Dash) -> Self {
        LinePattern::Dash(dash)
    }
}

/// Error returned when parsing a style specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    spec: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} specification '{}'", self.kind, self.spec)
    }
}

impl std::error::Error for ParseError {}

impl FromStr for LinePattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" => Ok(LinePattern::Solid),
            "--" => Ok(LinePattern::Dash(Dash::default())),
            "-." => Ok(LinePattern::DashDot),
            ":" => Ok(LinePattern::Dot),
            _ => Err(ParseError {
                kind: "line style",
                spec: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePattern::Solid => f.write_str("-"),
            LinePattern::Dash(..) => f.write_str("--"),
            LinePattern::DashDot => f.write_str("-."),
            LinePattern::Dot => f.write_str(":"),
        }
    }
}

/// Shape of a series marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// Circle marker (`"o"`, the default)
    #[default]
    Circle,
    /// Square marker (`"s"`)
    Square,
    /// Diamond marker (`"D"`)
    Diamond,
    /// Cross marker (`"x"`)
    Cross,
    /// Plus marker (`"+"`)
    Plus,
    /// Upward pointing triangle marker (`"^"`)
    TriangleUp,
    /// Downward pointing triangle marker (`"v"`)
    TriangleDown,
}

impl FromStr for MarkerShape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "o" => Ok(MarkerShape::Circle),
            "s" => Ok(MarkerShape::Square),
            "D" | "d" => Ok(MarkerShape::Diamond),
            "x" => Ok(MarkerShape::Cross),
            "+" => Ok(MarkerShape::Plus),
            "^" => Ok(MarkerShape::TriangleUp),
            "v" => Ok(MarkerShape::TriangleDown),
            _ => Err(ParseError {
                kind: "marker",
                spec: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            MarkerShape::Circle => "o",
            MarkerShape::Square => "s",
            MarkerShape::Diamond => "D",
            MarkerShape::Cross => "x",
            MarkerShape::Plus => "+",
            MarkerShape::TriangleUp => "^",
            MarkerShape::TriangleDown => "v",
        };
        f.write_str(code)
    }
}
