//! Series design structures
use std::fmt;
use std::str::FromStr;

use super::Error;
use crate::color::Color;
use crate::data::{self, DataSource};
use crate::style::{LinePattern, MarkerShape, defaults};

/// Interpolation of the curve drawn between the data points of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interp {
    /// Straight segments between data points
    Straight,
    /// Horizontal segment from each data point to the next one
    Step,
    /// Cubic spline through all data points (the default).
    /// Needs at least 4 data points.
    #[default]
    Cubic,
    /// Least-squares regression line
    Linreg,
}

impl Interp {
    /// Whether the curve can go beyond the range of the data points
    pub fn can_overshoot(&self) -> bool {
        matches!(self, Interp::Cubic | Interp::Linreg)
    }
}

impl FromStr for Interp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STRAIGHT" => Ok(Interp::Straight),
            "STEP" => Ok(Interp::Step),
            "CUBIC" => Ok(Interp::Cubic),
            "LINREG" => Ok(Interp::Linreg),
            _ => Err(Error::UnknownInterp(s.to_string())),
        }
    }
}

impl fmt::Display for Interp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interp::Straight => f.write_str("STRAIGHT"),
            Interp::Step => f.write_str("STEP"),
            Interp::Cubic => f.write_str("CUBIC"),
            Interp::Linreg => f.write_str("LINREG"),
        }
    }
}

/// A data series and its display properties.
///
/// The data is read from the source when the series is built.
/// By default the series is black, has circle markers,
/// a solid line and cubic interpolation, and is plotted against the primary axis.
///
/// A line is drawn only when both an interpolation and a line style are set.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    indep: Vec<f64>,
    dep: Vec<f64>,
    label: String,
    color: Color,
    marker: Option<MarkerShape>,
    interp: Option<Interp>,
    line_style: Option<LinePattern>,
    secondary_axis: bool,
}

impl Series {
    /// Create a series from a data source and a label (the legend entry).
    ///
    /// The default CUBIC interpolation needs at least 4 data points.
    /// This is checked when the series is added to a panel,
    /// so shorter series must select another interpolation before.
    pub fn new(source: &dyn DataSource, label: impl Into<String>) -> Result<Self, Error> {
        let indep = source.indep_var().to_vec();
        let dep = source.dep_var().to_vec();
        data::check_vars(&indep, &dep)?;
        Ok(Series {
            indep,
            dep,
            label: label.into(),
            color: defaults::SERIES_COLOR,
            marker: Some(MarkerShape::default()),
            interp: Some(Interp::default()),
            line_style: Some(LinePattern::default()),
            secondary_axis: false,
        })
    }

    /// Check that the series can be plotted with its interpolation
    pub(crate) fn check(&self) -> Result<(), Error> {
        self.check_interp(self.interp)
    }

    fn check_interp(&self, interp: Option<Interp>) -> Result<(), Error> {
        if interp == Some(Interp::Cubic) && self.indep.len() < 4 {
            return Err(Error::CubicTooShort {
                len: self.indep.len(),
            });
        }
        Ok(())
    }

    /// The independent variable
    pub fn indep_var(&self) -> &[f64] {
        &self.indep
    }

    /// The dependent variable
    pub fn dep_var(&self) -> &[f64] {
        &self.dep
    }

    /// The legend label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The line and marker color
    pub fn color(&self) -> Color {
        self.color
    }

    /// The marker shape, if markers are drawn
    pub fn marker(&self) -> Option<MarkerShape> {
        self.marker
    }

    /// The interpolation, if a line is drawn
    pub fn interp(&self) -> Option<Interp> {
        self.interp
    }

    /// The line style, if a line is drawn
    pub fn line_style(&self) -> Option<&LinePattern> {
        self.line_style.as_ref()
    }

    /// Whether the series is plotted against the secondary axis
    pub fn secondary_axis(&self) -> bool {
        self.secondary_axis
    }

    /// Whether the series draws a line
    pub fn has_line(&self) -> bool {
        self.interp.is_some() && self.line_style.is_some()
    }

    /// Whether the series draws anything
    pub fn is_plottable(&self) -> bool {
        self.has_line() || self.marker.is_some()
    }

    /// Set the color and return self for chaining
    pub fn with_color(self, color: Color) -> Self {
        Series { color, ..self }
    }

    /// Set the color from a specification such as `"b"`, `"red"`, `"#ff8000"` or `"0.5"`
    pub fn with_color_spec(self, spec: &str) -> Result<Self, Error> {
        let color: Color = spec.parse()?;
        Ok(Series { color, ..self })
    }

    /// Set or remove the marker and return self for chaining
    pub fn with_marker(self, marker: impl Into<Option<MarkerShape>>) -> Self {
        Series {
            marker: marker.into(),
            ..self
        }
    }

    /// Set or remove the interpolation.
    /// Fails if CUBIC is requested for less than 4 data points.
    pub fn with_interp(self, interp: impl Into<Option<Interp>>) -> Result<Self, Error> {
        let interp = interp.into();
        self.check_interp(interp)?;
        Ok(Series { interp, ..self })
    }

    /// Set or remove the line style and return self for chaining
    pub fn with_line_style(self, line_style: impl Into<Option<LinePattern>>) -> Self {
        Series {
            line_style: line_style.into(),
            ..self
        }
    }

    /// Plot the series against the secondary axis of the panel
    pub fn with_secondary_axis(self, secondary_axis: bool) -> Self {
        Series {
            secondary_axis,
            ..self
        }
    }
}

fn write_opt<T: fmt::Display>(f: &mut fmt::Formatter<'_>, name: &str, val: Option<T>) -> fmt::Result {
    match val {
        Some(val) => writeln!(f, "{name}: {val}"),
        None => writeln!(f, "{name}: None"),
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Independent variable: ")?;
        data::write_vector(f, &self.indep, "Independent variable: ".len())?;
        f.write_str("\nDependent variable: ")?;
        data::write_vector(f, &self.dep, "Dependent variable: ".len())?;
        writeln!(f)?;
        writeln!(f, "Label: {}", self.label)?;
        writeln!(f, "Color: {}", self.color)?;
        write_opt(f, "Marker", self.marker)?;
        write_opt(f, "Interpolation", self.interp)?;
        write_opt(f, "Line style", self.line_style.as_ref())?;
        write!(f, "Secondary axis: {}", self.secondary_axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::data::BasicSource;

    fn source(len: usize) -> BasicSource {
        let x = (1..=len).map(|i| i as f64).collect();
        let y = (1..=len).map(|i| (i * i) as f64).collect();
        BasicSource::new(x, y).unwrap()
    }

    #[test]
    fn defaults() {
        let series = Series::new(&source(4), "squares").unwrap();
        assert_eq!(series.color(), color::BLACK);
        assert_eq!(series.marker(), Some(MarkerShape::Circle));
        assert_eq!(series.interp(), Some(Interp::Cubic));
        assert_eq!(series.line_style(), Some(&LinePattern::Solid));
        assert!(!series.secondary_axis());
        assert!(series.has_line());
    }

    #[test]
    fn cubic_needs_four_points() {
        let short = Series::new(&source(3), "short").unwrap();
        assert_eq!(short.check(), Err(Error::CubicTooShort { len: 3 }));

        let short = short.with_interp(Interp::Straight).unwrap();
        assert_eq!(short.check(), Ok(()));
        assert_eq!(
            short.clone().with_interp(Interp::Cubic).unwrap_err(),
            Error::CubicTooShort { len: 3 }
        );
        let short = short.with_interp(None).unwrap();
        assert!(!short.has_line());

        assert_eq!(Series::new(&source(4), "ok").unwrap().check(), Ok(()));
    }

    #[test]
    fn invalid_source() {
        #[derive(Debug)]
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("broken")
            }
        }
        impl DataSource for Broken {
            fn indep_var(&self) -> &[f64] {
                &[2.0, 1.0]
            }
            fn dep_var(&self) -> &[f64] {
                &[1.0, 2.0]
            }
            fn set_indep_var(&mut self, _: Vec<f64>) -> Result<(), data::Error> {
                Ok(())
            }
            fn set_dep_var(&mut self, _: Vec<f64>) -> Result<(), data::Error> {
                Ok(())
            }
        }
        assert_eq!(
            Series::new(&Broken, "broken").unwrap_err(),
            Error::Data(data::Error::NotIncreasing)
        );
    }

    #[test]
    fn builders() {
        let series = Series::new(&source(5), "data")
            .unwrap()
            .with_color_spec("b")
            .unwrap()
            .with_marker(None)
            .with_line_style("--".parse::<LinePattern>().unwrap())
            .with_secondary_axis(true);
        assert_eq!(series.color(), color::BLUE);
        assert!(series.marker().is_none());
        assert!(series.secondary_axis());
        assert!(series.is_plottable());

        let series = series.with_line_style(None);
        assert!(!series.has_line());
        assert!(!series.is_plottable());

        assert_eq!(
            Series::new(&source(5), "data")
                .unwrap()
                .with_color_spec("nocolor")
                .unwrap_err(),
            Error::Color(color::ParseError::UnknownName)
        );
    }

    #[test]
    fn interp_spec() {
        assert_eq!("linreg".parse(), Ok(Interp::Linreg));
        assert_eq!(" Step ".parse(), Ok(Interp::Step));
        assert_eq!(
            "spline".parse::<Interp>(),
            Err(Error::UnknownInterp("spline".to_string()))
        );
        assert!(Interp::Cubic.can_overshoot());
        assert!(!Interp::Step.can_overshoot());
    }

    #[test]
    fn display() {
        let src = BasicSource::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, -10.0, 10.0, 5.0]).unwrap();
        let series = Series::new(&src, "Goals").unwrap();
        assert_eq!(
            series.to_string(),
            "Independent variable: [ 1.0, 2.0, 3.0, 4.0 ]\n\
             Dependent variable: [ 1.0, -10.0, 10.0, 5.0 ]\n\
             Label: Goals\n\
             Color: #000000\n\
             Marker: o\n\
             Interpolation: CUBIC\n\
             Line style: -\n\
             Secondary axis: false"
        );
    }
}
