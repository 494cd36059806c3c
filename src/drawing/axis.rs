//! Prepared axes and their range
use super::{Ctx, ticks};
use crate::des;
use crate::des::axis::Scale;

mod bounds;

pub use bounds::NumBounds;

/// An axis ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedAxis {
    label: Option<String>,
    units: Option<String>,
    scale: Scale,
    range: NumBounds,
    ticks: ticks::TickSet,
}

impl PreparedAxis {
    /// The axis label
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The axis units
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Linear or logarithmic
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Range of the data plotted on the axis, including the interpolated curves
    pub fn range(&self) -> NumBounds {
        self.range
    }

    /// Ticks and view range of the axis
    pub fn ticks(&self) -> &ticks::TickSet {
        &self.ticks
    }

    pub(super) fn ticks_mut(&mut self) -> &mut ticks::TickSet {
        &mut self.ticks
    }

    pub(super) fn with_tick_labels(self, labels: Vec<String>) -> Self {
        PreparedAxis {
            ticks: self.ticks.with_labels(labels),
            ..self
        }
    }
}

/// Values and ranges plotted on an axis
#[derive(Debug, Clone, Default)]
pub(super) struct AxisData {
    /// Data values, used to favor ticks on data points
    pub values: Vec<f64>,
    /// Range of the data values
    pub range: NumBounds,
    /// Range of the interpolated curves
    pub curve: NumBounds,
}

impl AxisData {
    pub fn unite_with(&mut self, other: &AxisData) {
        self.values.extend_from_slice(&other.values);
        self.range.unite_with(&other.range);
        self.curve.unite_with(&other.curve);
    }
}

impl Ctx<'_> {
    /// Select the ticks of an axis.
    /// User ticks are kept, otherwise ticks are selected for the scale.
    pub(super) fn setup_axis(&self, desc: &des::Axis, scale: Scale, data: &AxisData) -> PreparedAxis {
        let range = data.range.united(&data.curve);
        let ticks = match (desc.ticks(), scale) {
            (Some(locs), _) => ticks::fixed(locs, range, self.ticks()),
            (None, Scale::Log) => ticks::log(range, self.ticks()),
            (None, Scale::Linear) => ticks::linear(data.range, data.curve, &data.values, self.ticks()),
        };
        log::trace!("axis {:?}: ticks {:?}", desc.label(), ticks.locs());
        PreparedAxis {
            label: desc.label().map(str::to_string),
            units: desc.units().map(str::to_string),
            scale,
            range,
            ticks,
        }
    }
}
