use pplot::data::BasicSource;
use pplot::des::{self, Interp};
use pplot::style::LinePattern;

use super::{fig, line2, panel};
use crate::{assert_ticks_eq, prepare};

fn goals() -> des::Series {
    let src = BasicSource::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![1.0, -10.0, 10.0, 5.0, 4.0])
        .unwrap();
    des::Series::new(&src, "Goals").unwrap()
}

#[test]
fn interp_cubic_overshoot() {
    let prepared = prepare(&fig(vec![panel(vec![goals()])]));

    let panel = &prepared.panels()[0];
    let curve = panel.series()[0].curve_bounds();
    assert!(curve.start() < -10.0);
    assert!(curve.end() > 10.0);

    // [-10, 10] is extended to 15 and the curve adds a tick below
    let primary = panel.primary().unwrap();
    assert_ticks_eq!(
        primary,
        [-15, -10, -5, 0, 5, 10, 15],
        ["-15", "-10", "-5", "0", "5", "10", "15"]
    );
    assert_eq!(primary.ticks().view().start(), -15.0);
    assert_eq!(primary.ticks().view().end(), 15.0);
}

#[test]
fn interp_step() {
    let series = goals().with_interp(Interp::Step).unwrap();
    let prepared = prepare(&fig(vec![panel(vec![series])]));

    let panel = &prepared.panels()[0];
    assert_eq!(panel.series()[0].curve_bounds(), panel.series()[0].data_bounds());
    assert_ticks_eq!(
        panel.primary().unwrap(),
        [-10, -5, 0, 5, 10, 15],
        ["-10", "-5", "0", "5", "10", "15"]
    );
}

#[test]
fn interp_markers_only() {
    let series = goals().with_interp(None).unwrap();
    let prepared = prepare(&fig(vec![panel(vec![series])]));

    let s = &prepared.panels()[0].series()[0];
    assert!(s.line().is_none());
    assert_eq!(s.markers().unwrap().ys(), &[1.0, -10.0, 10.0, 5.0, 4.0]);
    // a cubic curve that is not drawn doesn't extend the axis
    assert_ticks_eq!(
        prepared.panels()[0].primary().unwrap(),
        [-10, -5, 0, 5, 10, 15],
        ["-10", "-5", "0", "5", "10", "15"]
    );
}

#[test]
fn interp_no_line_style() {
    let series = goals().with_line_style(None);
    let prepared = prepare(&fig(vec![panel(vec![series])]));
    assert!(prepared.panels()[0].series()[0].line().is_none());
    assert_eq!(prepared.panels()[0].primary().unwrap().ticks().len(), 6);
}

#[test]
fn interp_linreg() {
    let series = line2(&[1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 4.0], "fit")
        .with_interp(Interp::Linreg)
        .unwrap()
        .with_line_style(LinePattern::Dash(Default::default()));
    let prepared = prepare(&fig(vec![panel(vec![series])]));

    let s = &prepared.panels()[0].series()[0];
    let line = s.line().unwrap();
    assert!(matches!(line.pattern(), LinePattern::Dash(_)));
    let ys = line.ys();
    assert!((ys[0] - 1.3).abs() < 1e-9);
    assert!((ys[ys.len() - 1] - 3.7).abs() < 1e-9);
    assert_ticks_eq!(
        prepared.panels()[0].primary().unwrap(),
        [1, 1.5, 2, 2.5, 3, 3.5, 4],
        ["1.0", "1.5", "2.0", "2.5", "3.0", "3.5", "4.0"]
    );
}

#[test]
fn interp_cubic_too_short() {
    let src = BasicSource::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
    let series = des::Series::new(&src, "").unwrap();
    assert_eq!(
        des::Panel::new(vec![series.clone()]).unwrap_err(),
        des::Error::CubicTooShort { len: 3 }
    );
    assert_eq!(
        series.with_interp(Interp::Cubic).unwrap_err(),
        des::Error::CubicTooShort { len: 3 }
    );
}
