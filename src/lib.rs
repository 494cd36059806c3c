#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # pplot
 * _presentation plots_. Figure design for slides and reports, written in Rust
 *
 * pplot takes data series grouped in panels that share one independent axis,
 * validates them, unifies the axis ranges and selects "nice" ticks labelled in engineering notation.
 * The result is a [`drawing::PreparedFigure`], a renderer-agnostic description of the figure
 * that a rendering library draws.
 *
 * ## Get started
 *
 * ```
 * # fn main() -> Result<(), Box<dyn std::error::Error>> {
 * use pplot::{Prepare, data, des, drawing};
 *
 * // Data sources hold the independent and dependent variables of a series
 * let src = data::BasicSource::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, -10.0, 10.0, 5.0])?;
 *
 * // A series is black with circle markers and a cubic spline line by default
 * let series = des::Series::new(&src, "Goals")?.with_color_spec("b")?;
 *
 * let panel = des::Panel::new(vec![series])?
 *     .with_primary_axis(des::Axis::new().with_label("Goals"));
 *
 * let fig = des::Figure::new(vec![panel])?
 *     .with_indep_axis(des::Axis::new().with_label("Time").with_units("sec"))?
 *     .with_title("Season");
 *
 * let prepared = fig.prepare(&drawing::Options::default())?;
 * let goals_axis = prepared.panels()[0].primary().unwrap();
 * // the spline overshoots the data, ticks cover it
 * assert!(goals_axis.ticks().locs()[0] < -10.0);
 * # Ok(())
 * # }
 * ```
 *
 * ## Crate features
 *
 *  - `data-csv` (default): CSV text parsing to feed [`data::CsvSource`] (See [`data::CsvParser`])
 *  - `data-polars`: [Polars](https://pola.rs) data frames as [`data::Table`] (See [`data::polars`])
 *    pulls in the `polars` dependency, which is quite a beast to compile.
 *
 * ## Notes about pplot's design
 *
 * The figure design lies in the [`des`] module. All design structures are validated at construction.
 *
 * The [`drawing`] module prepares a [`des::Figure`]: series curves are interpolated,
 * ranges of the primary and secondary axes of each panel and of the shared independent axis are unified,
 * and ticks are selected by [`drawing::ticks`].
 * Logging goes through the [`log`](https://docs.rs/log) facade, no logger is installed.
 */
// pplot is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

pub mod data;
pub mod des;
pub mod drawing;
pub mod eng;
pub mod style;

pub use drawing::Prepare;

/// Rexports of [`pplot_base::color`]` items
pub mod color {
    pub use pplot_base::color::*;
}
pub use color::Color;

/// Rexports of [`pplot_base::geom`]` items
pub mod geom {
    pub use pplot_base::geom::*;
}
