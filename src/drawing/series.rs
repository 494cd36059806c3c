use super::axis::{AxisData, NumBounds};
use super::{Ctx, interp};
use crate::color::Color;
use crate::des;
use crate::style::{LinePattern, MarkerShape, defaults};

/// The curve of a series
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedLine {
    xs: Vec<f64>,
    ys: Vec<f64>,
    width: f32,
    pattern: LinePattern,
}

impl PreparedLine {
    /// Independent coordinates of the polyline
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Dependent coordinates of the polyline
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Line width in points
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Line pattern
    pub fn pattern(&self) -> &LinePattern {
        &self.pattern
    }
}

/// The markers of a series, one per data point
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedMarkers {
    xs: Vec<f64>,
    ys: Vec<f64>,
    shape: MarkerShape,
    size: f32,
    edge_width: f32,
    face: Color,
}

impl PreparedMarkers {
    /// Independent coordinates of the data points
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Dependent coordinates of the data points
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Marker shape
    pub fn shape(&self) -> MarkerShape {
        self.shape
    }

    /// Marker size in points
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Width of the marker edge, drawn in the series color
    pub fn edge_width(&self) -> f32 {
        self.edge_width
    }

    /// Fill color of the marker
    pub fn face(&self) -> Color {
        self.face
    }
}

/// A series ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    label: String,
    color: Color,
    line: Option<PreparedLine>,
    markers: Option<PreparedMarkers>,
    secondary: bool,
    data_bounds: NumBounds,
    curve_bounds: NumBounds,
}

impl PreparedSeries {
    /// Legend label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Color of the line and of the marker edges
    pub fn color(&self) -> Color {
        self.color
    }

    /// The curve, if drawn
    pub fn line(&self) -> Option<&PreparedLine> {
        self.line.as_ref()
    }

    /// The markers, if drawn
    pub fn markers(&self) -> Option<&PreparedMarkers> {
        self.markers.as_ref()
    }

    /// Whether the series is plotted against the secondary axis
    pub fn secondary(&self) -> bool {
        self.secondary
    }

    /// Range of the dependent data
    pub fn data_bounds(&self) -> NumBounds {
        self.data_bounds
    }

    /// Range of the dependent coordinates of the curve, empty if no line is drawn
    pub fn curve_bounds(&self) -> NumBounds {
        self.curve_bounds
    }

    /// Whether the series draws anything
    pub fn is_plottable(&self) -> bool {
        self.line.is_some() || self.markers.is_some()
    }

    /// Whether the series has an entry in the legend
    pub fn has_legend_entry(&self) -> bool {
        self.is_plottable() && !self.label.is_empty()
    }
}

impl Ctx<'_> {
    pub(super) fn setup_series(&self, series: &des::Series) -> (PreparedSeries, AxisData) {
        let xs = series.indep_var();
        let ys = series.dep_var();
        let style = self.style();

        let line = match (series.interp(), series.line_style()) {
            (Some(interp), Some(pattern)) => {
                let (cx, cy) = interp::curve(interp, xs, ys);
                Some(PreparedLine {
                    xs: cx,
                    ys: cy,
                    width: style.line_width,
                    pattern: pattern.clone(),
                })
            }
            _ => None,
        };
        let markers = series.marker().map(|shape| PreparedMarkers {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            shape,
            size: style.marker_size,
            edge_width: style.marker_size * defaults::MARKER_EDGE_RATIO,
            face: defaults::MARKER_FACE,
        });

        let data_bounds: NumBounds = ys.iter().collect();
        let curve_bounds: NumBounds = line
            .as_ref()
            .map(|l| l.ys.iter().collect())
            .unwrap_or_default();
        let overshoot =
            curve_bounds.start() < data_bounds.start() || curve_bounds.end() > data_bounds.end();
        if overshoot && series.interp().is_some_and(|i| i.can_overshoot()) {
            log::debug!(
                "series '{}': curve [{}, {}] overshoots data [{}, {}]",
                series.label(),
                curve_bounds.start(),
                curve_bounds.end(),
                data_bounds.start(),
                data_bounds.end()
            );
        }

        let data = AxisData {
            values: ys.to_vec(),
            range: data_bounds,
            curve: curve_bounds,
        };
        let prepared = PreparedSeries {
            label: series.label().to_string(),
            color: series.color(),
            line,
            markers,
            secondary: series.secondary_axis(),
            data_bounds,
            curve_bounds,
        };
        (prepared, data)
    }
}
