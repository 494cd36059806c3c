//! Panel design structures
use std::fmt;
use std::str::FromStr;

use super::{Axis, Error, Scale, Series};
use crate::style::defaults;

/// Position of the legend within the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPos {
    /// Position chosen by the renderer to overlap the data the least (default)
    #[default]
    Best,
    /// Top right corner
    UpperRight,
    /// Top left corner
    UpperLeft,
    /// Bottom left corner
    LowerLeft,
    /// Bottom right corner
    LowerRight,
    /// Right side, vertically centered
    Right,
    /// Left side, vertically centered
    CenterLeft,
    /// Right side, vertically centered
    CenterRight,
    /// Bottom side, horizontally centered
    LowerCenter,
    /// Top side, horizontally centered
    UpperCenter,
    /// Center of the panel
    Center,
}

const LEGEND_POS_NAMES: [(LegendPos, &str); 11] = [
    (LegendPos::Best, "BEST"),
    (LegendPos::UpperRight, "UPPER RIGHT"),
    (LegendPos::UpperLeft, "UPPER LEFT"),
    (LegendPos::LowerLeft, "LOWER LEFT"),
    (LegendPos::LowerRight, "LOWER RIGHT"),
    (LegendPos::Right, "RIGHT"),
    (LegendPos::CenterLeft, "CENTER LEFT"),
    (LegendPos::CenterRight, "CENTER RIGHT"),
    (LegendPos::LowerCenter, "LOWER CENTER"),
    (LegendPos::UpperCenter, "UPPER CENTER"),
    (LegendPos::Center, "CENTER"),
];

impl FromStr for LegendPos {
    type Err = Error;

    /// Parse a position name such as `"upper right"`, case insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.split_whitespace().collect::<Vec<_>>().join(" ");
        LEGEND_POS_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(&name))
            .map(|(pos, _)| *pos)
            .ok_or_else(|| Error::UnknownLegendPos(s.to_string()))
    }
}

impl fmt::Display for LegendPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = LEGEND_POS_NAMES
            .iter()
            .find(|(pos, _)| pos == self)
            .map_or("BEST", |(_, n)| n);
        f.write_str(name)
    }
}

/// Legend of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend {
    pos: LegendPos,
    cols: u32,
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            pos: LegendPos::default(),
            cols: defaults::LEGEND_COLS,
        }
    }
}

impl From<LegendPos> for Legend {
    fn from(pos: LegendPos) -> Self {
        Legend::default().with_pos(pos)
    }
}

impl Legend {
    /// The position of the legend
    pub fn pos(&self) -> LegendPos {
        self.pos
    }

    /// The number of columns of the legend.
    /// Zero places all entries on a single row.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Set the position and return self for chaining
    pub fn with_pos(self, pos: LegendPos) -> Self {
        Legend { pos, ..self }
    }

    /// Set the number of columns and return self for chaining
    pub fn with_cols(self, cols: u32) -> Self {
        Legend { cols, ..self }
    }
}

/// A panel: one or more series sharing the figure independent axis.
///
/// Series are plotted against the primary (left) or the secondary (right) dependent axis.
/// Both dependent axes share the same scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    series: Vec<Series>,
    primary_axis: Axis,
    secondary_axis: Axis,
    dep_scale: Scale,
    display_indep_axis: bool,
    legend: Legend,
}

impl Panel {
    /// Create a panel from its series.
    ///
    /// Fails if there is no series, or if a series has CUBIC interpolation and less than 4 points.
    pub fn new(series: Vec<Series>) -> Result<Self, Error> {
        if series.is_empty() {
            return Err(Error::EmptyPanel);
        }
        for s in &series {
            s.check()?;
        }
        Ok(Panel {
            series,
            primary_axis: Axis::default(),
            secondary_axis: Axis::default(),
            dep_scale: Scale::default(),
            display_indep_axis: false,
            legend: Legend::default(),
        })
    }

    /// The series of the panel
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The primary (left) dependent axis
    pub fn primary_axis(&self) -> &Axis {
        &self.primary_axis
    }

    /// The secondary (right) dependent axis
    pub fn secondary_axis(&self) -> &Axis {
        &self.secondary_axis
    }

    /// Scale of the dependent axes
    pub fn dep_scale(&self) -> Scale {
        self.dep_scale
    }

    /// Whether the independent axis is displayed below this panel
    pub fn display_indep_axis(&self) -> bool {
        self.display_indep_axis
    }

    /// The legend of the panel
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Whether at least one series is plotted against the primary axis
    pub fn has_primary(&self) -> bool {
        self.series.iter().any(|s| !s.secondary_axis())
    }

    /// Whether at least one series is plotted against the secondary axis
    pub fn has_secondary(&self) -> bool {
        self.series.iter().any(|s| s.secondary_axis())
    }

    /// Set the primary axis and return self for chaining
    pub fn with_primary_axis(self, primary_axis: Axis) -> Self {
        Panel {
            primary_axis,
            ..self
        }
    }

    /// Set the secondary axis and return self for chaining
    pub fn with_secondary_axis(self, secondary_axis: Axis) -> Self {
        Panel {
            secondary_axis,
            ..self
        }
    }

    /// Set the scale of the dependent axes.
    /// A logarithmic scale fails if a series holds negative values.
    pub fn with_dep_scale(self, dep_scale: Scale) -> Result<Self, Error> {
        if dep_scale.is_log() {
            let negative = self
                .series
                .iter()
                .position(|s| s.dep_var().iter().any(|v| *v < 0.0));
            if let Some(series) = negative {
                return Err(Error::NegativeLogData { series });
            }
        }
        Ok(Panel { dep_scale, ..self })
    }

    /// Display the independent axis below this panel.
    /// When no panel of a figure requests it, the last one displays it.
    pub fn with_display_indep_axis(self, display_indep_axis: bool) -> Self {
        Panel {
            display_indep_axis,
            ..self
        }
    }

    /// Set the legend and return self for chaining
    pub fn with_legend(self, legend: Legend) -> Self {
        Panel { legend, ..self }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (num, series) in self.series.iter().enumerate() {
            writeln!(f, "Series {num}:")?;
            super::write_indented(f, &series.to_string())?;
        }
        self.primary_axis.write_desc(f, "Primary axis")?;
        self.secondary_axis.write_desc(f, "Secondary axis")?;
        writeln!(f, "Logarithmic dependent axis: {}", self.dep_scale.is_log())?;
        writeln!(f, "Display independent axis: {}", self.display_indep_axis)?;
        writeln!(f, "Legend properties:")?;
        writeln!(f, "   cols: {}", self.legend.cols)?;
        write!(f, "   pos: {}", self.legend.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BasicSource;
    use crate::des::Interp;
    use crate::style::LinePattern;

    fn goals() -> Series {
        let src = BasicSource::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, -10.0, 10.0, 5.0]).unwrap();
        Series::new(&src, "Goals").unwrap()
    }

    fn saves() -> Series {
        let src =
            BasicSource::new(vec![100.0, 200.0, 300.0, 400.0], vec![50.0, 75.0, 100.0, 125.0]).unwrap();
        Series::new(&src, "Saves")
            .unwrap()
            .with_color_spec("b")
            .unwrap()
            .with_marker(None)
            .with_interp(Interp::Straight)
            .unwrap()
            .with_line_style("--".parse::<LinePattern>().unwrap())
    }

    #[test]
    fn validation() {
        assert_eq!(Panel::new(vec![]).unwrap_err(), Error::EmptyPanel);

        let src = BasicSource::new(vec![1.0, 2.0], vec![1.0, 2.0]).unwrap();
        let short = Series::new(&src, "short").unwrap();
        assert_eq!(
            Panel::new(vec![short.clone()]).unwrap_err(),
            Error::CubicTooShort { len: 2 }
        );
        let short = short.with_interp(Interp::Straight).unwrap();
        assert!(Panel::new(vec![short]).is_ok());
    }

    #[test]
    fn log_dep_scale() {
        let panel = Panel::new(vec![saves(), goals()]).unwrap();
        assert_eq!(
            panel.clone().with_dep_scale(Scale::Log).unwrap_err(),
            Error::NegativeLogData { series: 1 }
        );
        let panel = Panel::new(vec![saves()])
            .unwrap()
            .with_dep_scale(Scale::Log)
            .unwrap();
        assert!(panel.dep_scale().is_log());
    }

    #[test]
    fn axes_presence() {
        let panel = Panel::new(vec![goals(), saves().with_secondary_axis(true)]).unwrap();
        assert!(panel.has_primary());
        assert!(panel.has_secondary());
        let panel = Panel::new(vec![saves().with_secondary_axis(true)]).unwrap();
        assert!(!panel.has_primary());
    }

    #[test]
    fn legend_pos() {
        assert_eq!("upper  right".parse(), Ok(LegendPos::UpperRight));
        assert_eq!("Center".parse(), Ok(LegendPos::Center));
        assert_eq!(LegendPos::LowerCenter.to_string(), "LOWER CENTER");
        assert_eq!(
            "middle".parse::<LegendPos>(),
            Err(Error::UnknownLegendPos("middle".to_string()))
        );
        for (pos, name) in LEGEND_POS_NAMES {
            assert_eq!(name.parse(), Ok(pos));
        }
        let legend = Legend::from(LegendPos::Right).with_cols(0);
        assert_eq!(legend.pos(), LegendPos::Right);
        assert_eq!(legend.cols(), 0);
    }

    #[test]
    fn display() {
        let panel = Panel::new(vec![goals(), saves()])
            .unwrap()
            .with_primary_axis(Axis::new().with_label("Time").with_units("sec"))
            .with_display_indep_axis(true);
        assert_eq!(
            panel.to_string(),
            "Series 0:\n\
             \x20  Independent variable: [ 1.0, 2.0, 3.0, 4.0 ]\n\
             \x20  Dependent variable: [ 1.0, -10.0, 10.0, 5.0 ]\n\
             \x20  Label: Goals\n\
             \x20  Color: #000000\n\
             \x20  Marker: o\n\
             \x20  Interpolation: CUBIC\n\
             \x20  Line style: -\n\
             \x20  Secondary axis: false\n\
             Series 1:\n\
             \x20  Independent variable: [ 100.0, 200.0, 300.0, 400.0 ]\n\
             \x20  Dependent variable: [ 50.0, 75.0, 100.0, 125.0 ]\n\
             \x20  Label: Saves\n\
             \x20  Color: #0000ff\n\
             \x20  Marker: None\n\
             \x20  Interpolation: STRAIGHT\n\
             \x20  Line style: --\n\
             \x20  Secondary axis: false\n\
             Primary axis label: Time\n\
             Primary axis units: sec\n\
             Secondary axis label: not specified\n\
             Secondary axis units: not specified\n\
             Logarithmic dependent axis: false\n\
             Display independent axis: true\n\
             Legend properties:\n\
             \x20  cols: 1\n\
             \x20  pos: BEST"
        );
    }
}
