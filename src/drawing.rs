//! Drawing module
//!
//! This module contains all the logic to convert a design figure into a prepared figure:
//! the curves of the series are interpolated, the axis ranges are unified
//! and the ticks are selected and labelled.
//! The prepared figure is what a rendering library consumes; it is plain data.
use std::fmt;

use crate::{des, style};

pub mod axis;
mod figure;
pub mod interp;
mod panel;
mod series;
pub mod ticks;

pub use axis::{NumBounds, PreparedAxis};
pub use figure::PreparedFigure;
pub use panel::{PreparedLegend, PreparedPanel};
pub use series::{PreparedLine, PreparedMarkers, PreparedSeries};
pub use ticks::{TickConfig, TickSet};

/// Errors that can occur during figure preparation
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The design is inconsistent with the prepared ticks,
    /// e.g. the number of independent tick labels differs from the number of selected ticks.
    Design(des::Error),
    /// The tick configuration can't be used (see [`TickConfig::is_valid`])
    InvalidTickConfig(TickConfig),
}

impl From<des::Error> for Error {
    fn from(err: des::Error) -> Self {
        Error::Design(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Design(err) => err.fmt(f),
            Error::InvalidTickConfig(config) => {
                write!(f, "invalid tick configuration: {config}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Design(err) => Some(err),
            Error::InvalidTickConfig(..) => None,
        }
    }
}

/// Options of the figure preparation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Options {
    /// Sizes of the figure elements
    pub style: style::Config,
    /// Tick selection
    pub ticks: TickConfig,
}

impl Options {
    /// Set the style configuration and return self for chaining
    pub fn with_style(self, style: style::Config) -> Self {
        Options { style, ..self }
    }

    /// Set the tick configuration and return self for chaining
    pub fn with_ticks(self, ticks: TickConfig) -> Self {
        Options { ticks, ..self }
    }
}

/// Extension trait to prepare a design figure for drawing
pub trait Prepare {
    /// Prepare a figure for drawing.
    /// The resulting [`PreparedFigure`] can then be drawn multiple times by a rendering library.
    fn prepare(&self, opts: &Options) -> Result<PreparedFigure, Error>;
}

impl Prepare for des::Figure {
    fn prepare(&self, opts: &Options) -> Result<PreparedFigure, Error> {
        if !opts.ticks.is_valid() {
            return Err(Error::InvalidTickConfig(opts.ticks));
        }
        let ctx = Ctx {
            style: &opts.style,
            ticks: &opts.ticks,
        };
        ctx.setup_figure(self)
    }
}

#[derive(Debug, Clone, Copy)]
struct Ctx<'a> {
    style: &'a style::Config,
    ticks: &'a TickConfig,
}

impl Ctx<'_> {
    fn style(&self) -> &style::Config {
        self.style
    }

    fn ticks(&self) -> &TickConfig {
        self.ticks
    }
}
