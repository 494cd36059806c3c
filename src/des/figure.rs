//! Figure design structures
use std::fmt;

use super::{Axis, Error, Panel, Scale};
use crate::geom::Size;
use crate::style::defaults;

/// A figure: a vertical stack of panels sharing one independent axis.
///
/// The independent axis has a label, units, optional tick locations and optional tick labels.
/// Tick labels replace the automatic engineering labels on linear axes.
/// Their number must match the number of ticks, which is checked at preparation
/// when the locations are selected automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    panels: Vec<Panel>,
    title: Option<String>,
    indep_axis: Axis,
    indep_scale: Scale,
    indep_tick_labels: Option<Vec<String>>,
    size: Option<Size>,
    dpi: f32,
}

impl Figure {
    /// Create a figure from its panels, from top to bottom
    pub fn new(panels: Vec<Panel>) -> Result<Self, Error> {
        if panels.is_empty() {
            return Err(Error::EmptyFigure);
        }
        Ok(Figure {
            panels,
            title: None,
            indep_axis: Axis::default(),
            indep_scale: Scale::default(),
            indep_tick_labels: None,
            size: None,
            dpi: defaults::DPI,
        })
    }

    /// The panels, from top to bottom
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The figure title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The independent axis
    pub fn indep_axis(&self) -> &Axis {
        &self.indep_axis
    }

    /// Scale of the independent axis
    pub fn indep_scale(&self) -> Scale {
        self.indep_scale
    }

    /// User labels of the independent axis ticks
    pub fn indep_tick_labels(&self) -> Option<&[String]> {
        self.indep_tick_labels.as_deref()
    }

    /// The figure size in inches. `None` lets the renderer decide.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// The figure resolution in dots per inch
    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Set the title and return self for chaining
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Figure {
            title: Some(title.into()),
            ..self
        }
    }

    /// Set the independent axis.
    /// Fails if it has tick locations whose number differs from the tick labels.
    pub fn with_indep_axis(self, indep_axis: Axis) -> Result<Self, Error> {
        let fig = Figure { indep_axis, ..self };
        fig.check_user_tick_labels()?;
        Ok(fig)
    }

    /// Set the scale of the independent axis.
    /// A logarithmic scale fails if a series holds negative independent values.
    pub fn with_indep_scale(self, indep_scale: Scale) -> Result<Self, Error> {
        if indep_scale.is_log() {
            for (panel, p) in self.panels.iter().enumerate() {
                let negative = p
                    .series()
                    .iter()
                    .position(|s| s.indep_var().iter().any(|v| *v < 0.0));
                if let Some(series) = negative {
                    return Err(Error::NegativeLogIndep { panel, series });
                }
            }
        }
        Ok(Figure {
            indep_scale,
            ..self
        })
    }

    /// Set the labels of the independent axis ticks.
    /// Fails if the axis has tick locations whose number differs.
    pub fn with_indep_tick_labels<S>(self, labels: Vec<S>) -> Result<Self, Error>
    where
        S: Into<String>,
    {
        let fig = Figure {
            indep_tick_labels: Some(labels.into_iter().map(Into::into).collect()),
            ..self
        };
        fig.check_user_tick_labels()?;
        Ok(fig)
    }

    /// Set the figure size in inches
    pub fn with_size(self, width: f32, height: f32) -> Result<Self, Error> {
        let size = Size::new(width, height);
        if !size.is_valid() {
            return Err(Error::InvalidSize { width, height });
        }
        Ok(Figure {
            size: Some(size),
            ..self
        })
    }

    /// Set the figure resolution in dots per inch
    pub fn with_dpi(self, dpi: f32) -> Result<Self, Error> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(Error::InvalidDpi(dpi));
        }
        Ok(Figure { dpi, ..self })
    }

    /// Whether the independent axis is displayed below the panel at index `panel`.
    /// When no panel requests it, the last one displays it.
    pub(crate) fn displays_indep_axis(&self, panel: usize) -> bool {
        let requested = self.panels.iter().any(|p| p.display_indep_axis());
        if requested {
            self.panels[panel].display_indep_axis()
        } else {
            panel + 1 == self.panels.len()
        }
    }

    fn check_user_tick_labels(&self) -> Result<(), Error> {
        match self.indep_axis.ticks() {
            Some(ticks) => self.check_tick_labels(ticks.len()),
            None => Ok(()),
        }
    }

    /// Check the tick labels against the number of ticks of the independent axis
    pub(crate) fn check_tick_labels(&self, ticks: usize) -> Result<(), Error> {
        match &self.indep_tick_labels {
            Some(labels) if labels.len() != ticks => Err(Error::TickLabelCount {
                ticks,
                labels: labels.len(),
            }),
            _ => Ok(()),
        }
    }
}

fn write_dim(f: &mut fmt::Formatter<'_>, name: &str, dim: Option<f32>) -> fmt::Result {
    match dim {
        Some(dim) => write!(f, "Figure {name}: {dim}"),
        None => write!(f, "Figure {name}: not specified"),
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (num, panel) in self.panels.iter().enumerate() {
            writeln!(f, "Panel {num}:")?;
            super::write_indented(f, &panel.to_string())?;
        }
        self.indep_axis.write_desc(f, "Independent variable")?;
        writeln!(
            f,
            "Logarithmic independent axis: {}",
            self.indep_scale.is_log()
        )?;
        writeln!(f, "Title: {}", super::or_not_specified(self.title()))?;
        write_dim(f, "width", self.size.map(|s| s.width()))?;
        writeln!(f)?;
        write_dim(f, "height", self.size.map(|s| s.height()))
    }
}
