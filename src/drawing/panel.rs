use super::axis::{AxisData, PreparedAxis};
use super::series::PreparedSeries;
use super::{Ctx, ticks};
use crate::des;
use crate::des::axis::Scale;
use crate::des::panel::LegendPos;

/// Legend settings of a prepared panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedLegend {
    pos: LegendPos,
    cols: u32,
    font_size: f32,
}

impl PreparedLegend {
    /// Position of the legend in the panel
    pub fn pos(&self) -> LegendPos {
        self.pos
    }

    /// Number of columns. Zero places all entries on a single row.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Font size of the entries
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// A panel ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPanel {
    series: Vec<PreparedSeries>,
    primary: Option<PreparedAxis>,
    secondary: Option<PreparedAxis>,
    legend: Option<PreparedLegend>,
    display_indep_axis: bool,
}

impl PreparedPanel {
    /// The series, in design order
    pub fn series(&self) -> &[PreparedSeries] {
        &self.series
    }

    /// The primary (left) axis, if a series is plotted against it
    pub fn primary(&self) -> Option<&PreparedAxis> {
        self.primary.as_ref()
    }

    /// The secondary (right) axis, if a series is plotted against it
    pub fn secondary(&self) -> Option<&PreparedAxis> {
        self.secondary.as_ref()
    }

    /// The legend, if a series has a label
    pub fn legend(&self) -> Option<&PreparedLegend> {
        self.legend.as_ref()
    }

    /// Whether the independent axis is drawn below this panel
    pub fn display_indep_axis(&self) -> bool {
        self.display_indep_axis
    }
}

impl Ctx<'_> {
    pub(super) fn setup_panel(&self, panel: &des::Panel, display_indep_axis: bool) -> PreparedPanel {
        let mut series = Vec::with_capacity(panel.series().len());
        let mut primary_data: Option<AxisData> = None;
        let mut secondary_data: Option<AxisData> = None;
        for s in panel.series() {
            let (prepared, data) = self.setup_series(s);
            let side = if prepared.secondary() {
                &mut secondary_data
            } else {
                &mut primary_data
            };
            side.get_or_insert_with(AxisData::default).unite_with(&data);
            series.push(prepared);
        }

        let scale = panel.dep_scale();
        if scale.is_log() {
            // both axes cover all series of the panel
            let mut all = AxisData::default();
            for data in primary_data.iter().chain(secondary_data.iter()) {
                all.unite_with(data);
            }
            for data in [&mut primary_data, &mut secondary_data].into_iter().flatten() {
                data.range = all.range;
                data.curve = all.curve;
            }
        }

        let mut primary = primary_data
            .map(|data| self.setup_axis(panel.primary_axis(), scale, &data));
        let mut secondary = secondary_data
            .map(|data| self.setup_axis(panel.secondary_axis(), scale, &data));

        let user_ticks = panel.primary_axis().has_ticks() || panel.secondary_axis().has_ticks();
        if let (Scale::Linear, false, Some(p), Some(s)) =
            (scale, user_ticks, primary.as_mut(), secondary.as_mut())
        {
            ticks::equalize(p.ticks_mut(), s.ticks_mut(), self.ticks());
        }

        let legend = series
            .iter()
            .any(|s| s.has_legend_entry())
            .then(|| PreparedLegend {
                pos: panel.legend().pos(),
                cols: panel.legend().cols(),
                font_size: self.style().legend_font_size(),
            });

        PreparedPanel {
            series,
            primary,
            secondary,
            legend,
            display_indep_axis,
        }
    }
}
