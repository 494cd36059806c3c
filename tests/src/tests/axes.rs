use pplot::des::{self, Axis, Scale};

use super::{fig, line, line2, panel};
use crate::{assert_ticks_eq, prepare};

#[test]
fn axes_labels() {
    let panel = panel(vec![line("")])
        .with_primary_axis(Axis::new().with_label("Voltage").with_units("V"));
    let fig = fig(vec![panel])
        .with_indep_axis(Axis::new().with_label("Time").with_units("sec"))
        .unwrap();
    let prepared = prepare(&fig);

    let indep = prepared.indep_axis();
    assert_eq!(indep.label(), Some("Time"));
    assert_eq!(indep.units(), Some("sec"));
    let primary = prepared.panels()[0].primary().unwrap();
    assert_eq!(primary.label(), Some("Voltage"));
    assert_eq!(primary.units(), Some("V"));
}

#[test]
fn axes_user_ticks() {
    let panel = panel(vec![line("")])
        .with_primary_axis(Axis::new().with_ticks(vec![3.0, 0.0, 1.5]).unwrap());
    let prepared = prepare(&fig(vec![panel]));

    let primary = prepared.panels()[0].primary().unwrap();
    assert_ticks_eq!(primary, [0, 1.5, 3], ["0.0", "1.5", "3.0"]);
    // the view covers the ticks beyond the data
    assert_eq!(primary.ticks().view().start(), 0.0);
    assert_eq!(primary.ticks().view().end(), 3.0);
    assert_eq!(primary.range().start(), 1.0);
}

#[test]
fn axes_engineering_labels() {
    let series = line2(&[1.0, 2.0, 3.0], &[-5e-3, 0.0, 15e-3], "");
    let prepared = prepare(&fig(vec![panel(vec![series])]));

    let primary = prepared.panels()[0].primary().unwrap();
    assert_ticks_eq!(
        primary,
        [-5e-3, 0, 5e-3, 10e-3, 15e-3, 20e-3],
        ["-5m", "0", "5m", "10m", "15m", "20m"]
    );
}

#[test]
fn axes_log_indep() {
    let series = line2(&[1.0, 10.0, 100.0], &[1.0, 2.0, 3.0], "");
    let fig = fig(vec![panel(vec![series])])
        .with_indep_scale(Scale::Log)
        .unwrap();
    let prepared = prepare(&fig);

    let indep = prepared.indep_axis();
    assert_eq!(indep.scale(), Scale::Log);
    assert_ticks_eq!(indep, [1, 10, 100], ["1", "10", "100"]);
}

#[test]
fn axes_log_dep() {
    let series = line2(&[1.0, 2.0, 3.0], &[0.5, 2.0, 30.0], "");
    let panel = panel(vec![series]).with_dep_scale(Scale::Log).unwrap();
    let prepared = prepare(&fig(vec![panel]));

    let primary = prepared.panels()[0].primary().unwrap();
    assert_ticks_eq!(primary, [0.1, 1, 10, 100], ["100m", "1", "10", "100"]);
}

#[test]
fn axes_log_dep_with_zero() {
    let series = line2(&[1.0, 2.0, 3.0], &[0.0, 2.0, 5.0], "");
    let panel = panel(vec![series]).with_dep_scale(Scale::Log).unwrap();
    let prepared = prepare(&fig(vec![panel]));

    let primary = prepared.panels()[0].primary().unwrap();
    assert_ticks_eq!(primary, [1, 10], ["1", "10"]);
}

#[test]
fn axes_log_negative_data() {
    let series = line2(&[-1.0, 2.0, 3.0], &[1.0, -2.0, 5.0], "");
    let panel = panel(vec![series]);

    let err = panel.clone().with_dep_scale(Scale::Log).unwrap_err();
    assert_eq!(err, des::Error::NegativeLogData { series: 0 });

    let err = fig(vec![panel]).with_indep_scale(Scale::Log).unwrap_err();
    assert_eq!(err, des::Error::NegativeLogIndep { panel: 0, series: 0 });
}
