//! Axis design structures
use std::fmt;

use super::Error;

/// Scale of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// Linear scale (the default)
    #[default]
    Linear,
    /// Base 10 logarithmic scale
    Log,
}

impl Scale {
    /// Whether the scale is logarithmic
    pub fn is_log(&self) -> bool {
        matches!(self, Scale::Log)
    }
}

/// Description of an axis: label, units and optional tick locations.
///
/// Without tick locations, ticks are selected automatically at preparation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    label: Option<String>,
    units: Option<String>,
    ticks: Option<Vec<f64>>,
}

impl Axis {
    /// Create an axis without label, units or ticks
    pub fn new() -> Self {
        Self::default()
    }

    /// The axis label
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The axis units
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// User tick locations, sorted and without duplicates
    pub fn ticks(&self) -> Option<&[f64]> {
        self.ticks.as_deref()
    }

    /// Set the label and return self for chaining
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Axis {
            label: Some(label.into()),
            ..self
        }
    }

    /// Set the units and return self for chaining
    pub fn with_units(self, units: impl Into<String>) -> Self {
        Axis {
            units: Some(units.into()),
            ..self
        }
    }

    /// Set the tick locations.
    /// They are sorted and duplicates are removed. All must be finite.
    pub fn with_ticks(self, ticks: Vec<f64>) -> Result<Self, Error> {
        let ticks = sorted_ticks(ticks)?;
        Ok(Axis {
            ticks: Some(ticks),
            ..self
        })
    }

    /// Whether the tick locations are given by the user
    pub fn has_ticks(&self) -> bool {
        self.ticks.is_some()
    }

    /// Write the label and units lines, prefixed by `name`
    pub(super) fn write_desc(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        writeln!(
            f,
            "{name} label: {}",
            super::or_not_specified(self.label())
        )?;
        writeln!(
            f,
            "{name} units: {}",
            super::or_not_specified(self.units())
        )
    }
}

pub(super) fn sorted_ticks(mut ticks: Vec<f64>) -> Result<Vec<f64>, Error> {
    if ticks.is_empty() || ticks.iter().any(|t| !t.is_finite()) {
        return Err(Error::InvalidTicks);
    }
    ticks.sort_by(f64::total_cmp);
    ticks.dedup();
    Ok(ticks)
}
