/*!
 * # Design module
 *
 * This module contains the data structures describing a figure:
 * a [`Figure`] is a vertical stack of [`Panel`]s sharing one independent axis,
 * each panel holds one or more [`Series`] plotted against a primary or a secondary dependent axis.
 *
 * All structures are validated at construction, so that a figure that could be built
 * can always be prepared (see [`crate::drawing::Prepare`]).
 */
use std::fmt;

use crate::{color, data, style};

pub mod axis;
pub mod figure;
pub mod panel;
pub mod series;

pub use axis::{Axis, Scale};
pub use figure::Figure;
pub use panel::{Legend, LegendPos, Panel};
pub use series::{Interp, Series};

/// Errors of the figure design
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The data source of a series is invalid
    Data(data::Error),
    /// A color specification could not be parsed
    Color(color::ParseError),
    /// A line style or marker specification could not be parsed
    Style(style::ParseError),
    /// An interpolation specification could not be parsed
    UnknownInterp(String),
    /// A legend position specification could not be parsed
    UnknownLegendPos(String),
    /// CUBIC interpolation needs at least 4 data points
    CubicTooShort {
        /// Number of data points of the series
        len: usize,
    },
    /// A panel was built without series
    EmptyPanel,
    /// A series holds negative values and cannot be plotted on a logarithmic dependent axis
    NegativeLogData {
        /// Index of the series in the panel
        series: usize,
    },
    /// A figure was built without panels
    EmptyFigure,
    /// A series holds negative independent values and the independent axis is logarithmic
    NegativeLogIndep {
        /// Index of the panel in the figure
        panel: usize,
        /// Index of the series in the panel
        series: usize,
    },
    /// Figure dimensions must be finite and strictly positive
    InvalidSize {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },
    /// Figure resolution must be finite and strictly positive
    InvalidDpi(f32),
    /// Tick locations must be finite
    InvalidTicks,
    /// The number of tick labels differs from the number of tick locations
    TickLabelCount {
        /// Number of tick locations
        ticks: usize,
        /// Number of tick labels
        labels: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Data(err) => write!(f, "invalid data source: {err}"),
            Error::Color(err) => err.fmt(f),
            Error::Style(err) => err.fmt(f),
            Error::UnknownInterp(spec) => write!(
                f,
                "interpolation '{spec}' is not one of STRAIGHT, STEP, CUBIC, LINREG"
            ),
            Error::UnknownLegendPos(spec) => write!(f, "unknown legend position '{spec}'"),
            Error::CubicTooShort { len } => write!(
                f,
                "at least 4 data points are needed for CUBIC interpolation (got {len})"
            ),
            Error::EmptyPanel => write!(f, "panel has no series"),
            Error::NegativeLogData { series } => write!(
                f,
                "series {series} cannot be plotted in a logarithmic axis because it contains negative data points"
            ),
            Error::EmptyFigure => write!(f, "figure has no panels"),
            Error::NegativeLogIndep { panel, series } => write!(
                f,
                "figure cannot be plotted with a logarithmic independent axis because panel {panel}, series {series} contains negative independent data points"
            ),
            Error::InvalidSize { width, height } => {
                write!(f, "invalid figure size {width} x {height}")
            }
            Error::InvalidDpi(dpi) => write!(f, "invalid figure resolution {dpi}"),
            Error::InvalidTicks => write!(f, "tick locations must be finite"),
            Error::TickLabelCount { ticks, labels } => write!(
                f,
                "number of tick locations and number of tick labels mismatch ({ticks} != {labels})"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Data(err) => Some(err),
            Error::Color(err) => Some(err),
            Error::Style(err) => Some(err),
            _ => None,
        }
    }
}

impl From<data::Error> for Error {
    fn from(err: data::Error) -> Self {
        Error::Data(err)
    }
}

impl From<color::ParseError> for Error {
    fn from(err: color::ParseError) -> Self {
        Error::Color(err)
    }
}

impl From<style::ParseError> for Error {
    fn from(err: style::ParseError) -> Self {
        Error::Style(err)
    }
}

/// Write `text` with every line indented by 3 spaces
fn write_indented(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "   {line}")?;
    }
    writeln!(f)
}

fn or_not_specified(text: Option<&str>) -> &str {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => "not specified",
    }
}
