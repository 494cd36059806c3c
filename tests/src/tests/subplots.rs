use pplot::des::Axis;
use pplot::drawing;

use super::{fig, line2, panel};
use crate::{assert_ticks_eq, prepare, prepare_with};

#[test]
fn subplots_shared_indep_axis() {
    let top = panel(vec![line2(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], "")]);
    let bottom = panel(vec![line2(&[1.0, 3.0], &[5.0, 4.0], "")]);
    let prepared = prepare(&fig(vec![top, bottom]));

    assert_ticks_eq!(
        prepared.indep_axis(),
        [0, 0.5, 1, 1.5, 2, 2.5, 3],
        ["0.0", "0.5", "1.0", "1.5", "2.0", "2.5", "3.0"]
    );
    let panels = prepared.panels();
    assert!(!panels[0].display_indep_axis());
    assert!(panels[1].display_indep_axis());
}

#[test]
fn subplots_display_indep_axis() {
    let top = panel(vec![line2(&[0.0, 1.0], &[1.0, 2.0], "")]).with_display_indep_axis(true);
    let bottom = panel(vec![line2(&[0.0, 1.0], &[5.0, 4.0], "")]);
    let prepared = prepare(&fig(vec![top, bottom]));

    let panels = prepared.panels();
    assert!(panels[0].display_indep_axis());
    assert!(!panels[1].display_indep_axis());
}

#[test]
fn subplots_dep_axes_are_independent() {
    let top = panel(vec![line2(&[0.0, 1.0], &[0.0, 1.0], "")]);
    let bottom = panel(vec![line2(&[0.0, 1.0], &[0.0, 10.0], "")]);
    let prepared = prepare(&fig(vec![top, bottom]));

    let panels = prepared.panels();
    assert_ticks_eq!(
        panels[0].primary().unwrap(),
        [0, 0.2, 0.4, 0.6, 0.8, 1],
        ["0", "200m", "400m", "600m", "800m", "1"]
    );
    assert_ticks_eq!(
        panels[1].primary().unwrap(),
        [0, 2, 4, 6, 8, 10],
        ["0", "2", "4", "6", "8", "10"]
    );
}

#[test]
fn subplots_secondary_axis_equalized() {
    let panel = panel(vec![
        line2(&[1.0, 2.0], &[0.0, 1.0], "left"),
        line2(&[1.0, 2.0], &[0.0, 8.0], "right").with_secondary_axis(true),
    ]);
    let prepared = prepare(&fig(vec![panel]));

    let panel = &prepared.panels()[0];
    assert_ticks_eq!(
        panel.secondary().unwrap(),
        [0, 1, 2, 3, 4, 5, 6, 7, 8],
        ["0", "1", "2", "3", "4", "5", "6", "7", "8"]
    );
    assert_ticks_eq!(
        panel.primary().unwrap(),
        [0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1],
        ["0", "125m", "250m", "375m", "500m", "625m", "750m", "875m", "1"]
    );
}

#[test]
fn subplots_secondary_user_ticks() {
    let panel = panel(vec![
        line2(&[1.0, 2.0], &[0.0, 1.0], ""),
        line2(&[1.0, 2.0], &[0.0, 8.0], "").with_secondary_axis(true),
    ])
    .with_secondary_axis(Axis::new().with_ticks(vec![0.0, 4.0, 8.0]).unwrap());
    let ticks = drawing::TickConfig::default().with_min_ticks(5);
    let prepared = prepare_with(&fig(vec![panel]), ticks);

    let panel = &prepared.panels()[0];
    assert_ticks_eq!(panel.secondary().unwrap(), [0, 4, 8], ["0", "4", "8"]);
    assert_eq!(panel.primary().unwrap().ticks().len(), 6);
}
