#![cfg(test)]

use pplot::drawing::{self, Prepare, PreparedFigure};
use pplot::des;

mod tests;

fn prepare(fig: &des::Figure) -> PreparedFigure {
    fig.prepare(&drawing::Options::default())
        .expect("Figure should prepare")
}

fn prepare_with(fig: &des::Figure, ticks: drawing::TickConfig) -> PreparedFigure {
    let opts = drawing::Options::default().with_ticks(ticks);
    fig.prepare(&opts).expect("Figure should prepare")
}

macro_rules! assert_ticks_eq {
    ($axis:expr, [$($loc:expr),* $(,)?], [$($label:expr),* $(,)?]) => {
        let ticks = $axis.ticks();
        let locs: &[f64] = &[$($loc as f64),*];
        let labels: &[&str] = &[$($label),*];
        assert_eq!(ticks.locs(), locs, "tick locations differ");
        assert_eq!(ticks.labels(), labels, "tick labels differ");
    };
}

pub(crate) use assert_ticks_eq;
