use super::axis::{AxisData, NumBounds, PreparedAxis};
use super::panel::PreparedPanel;
use super::{Ctx, Error};
use crate::des;
use crate::eng;
use crate::geom::Size;
use crate::style;

/// A figure ready to be drawn.
///
/// All ranges are unified and all ticks are selected and labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedFigure {
    title: Option<String>,
    size: Option<Size>,
    dpi: f32,
    style: style::Config,
    indep_axis: PreparedAxis,
    panels: Vec<PreparedPanel>,
}

impl PreparedFigure {
    /// The figure title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The figure size in inches, if specified
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// The figure resolution in dots per inch
    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Font sizes, line width and marker size
    pub fn style(&self) -> &style::Config {
        &self.style
    }

    /// The independent axis, shared by all panels
    pub fn indep_axis(&self) -> &PreparedAxis {
        &self.indep_axis
    }

    /// The panels, from top to bottom
    pub fn panels(&self) -> &[PreparedPanel] {
        &self.panels
    }
}

impl Ctx<'_> {
    pub(super) fn setup_figure(&self, fig: &des::Figure) -> Result<PreparedFigure, Error> {
        let panels: Vec<PreparedPanel> = fig
            .panels()
            .iter()
            .enumerate()
            .map(|(idx, p)| self.setup_panel(p, fig.displays_indep_axis(idx)))
            .collect();

        let indep = self.indep_data(fig);
        log::debug!(
            "independent range [{}, {}] over {} distinct values",
            indep.range.start(),
            indep.range.end(),
            indep.values.len()
        );
        let mut indep_axis = self.setup_axis(fig.indep_axis(), fig.indep_scale(), &indep);

        if let Some(labels) = fig.indep_tick_labels() {
            if fig.indep_scale().is_log() {
                log::warn!("independent tick labels are ignored on a logarithmic axis");
            } else {
                fig.check_tick_labels(indep_axis.ticks().len())?;
                indep_axis = indep_axis.with_tick_labels(labels.to_vec());
            }
        }

        Ok(PreparedFigure {
            title: fig.title().map(str::to_string),
            size: fig.size(),
            dpi: fig.dpi(),
            style: *self.style(),
            indep_axis,
            panels,
        })
    }

    /// The independent values of all series, rounded to the tick precision and deduplicated
    fn indep_data(&self, fig: &des::Figure) -> AxisData {
        let precision = self.ticks().precision();
        let mut values: Vec<f64> = fig
            .panels()
            .iter()
            .flat_map(|p| p.series())
            .flat_map(|s| s.indep_var())
            .map(|v| eng::round_mantissa(*v, precision))
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        let range: NumBounds = values.iter().collect();
        AxisData {
            values,
            range,
            curve: NumBounds::NAN,
        }
    }
}
