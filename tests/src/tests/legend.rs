use pplot::des::{Legend, LegendPos};

use super::{fig, line, panel};
use crate::prepare;

#[test]
fn legend_default() {
    let prepared = prepare(&fig(vec![panel(vec![line("data")])]));

    let legend = prepared.panels()[0].legend().unwrap();
    assert_eq!(legend.pos(), LegendPos::Best);
    assert_eq!(legend.cols(), 1);
    assert_eq!(legend.font_size(), 12.0);
}

#[test]
fn legend_no_label() {
    let prepared = prepare(&fig(vec![panel(vec![line("")])]));
    assert!(prepared.panels()[0].legend().is_none());
}

#[test]
fn legend_unplottable_series() {
    let hidden = line("hidden").with_marker(None).with_line_style(None);
    let prepared = prepare(&fig(vec![panel(vec![hidden, line("")])]));
    assert!(!prepared.panels()[0].series()[0].has_legend_entry());
    assert!(prepared.panels()[0].legend().is_none());
}

#[test]
fn legend_pos_and_cols() {
    let pos: LegendPos = " lower   center ".parse().unwrap();
    let panel = panel(vec![line("a"), line("b")])
        .with_legend(Legend::from(pos).with_cols(2));
    let prepared = prepare(&fig(vec![panel]));

    let legend = prepared.panels()[0].legend().unwrap();
    assert_eq!(legend.pos(), LegendPos::LowerCenter);
    assert_eq!(legend.cols(), 2);
}

#[test]
fn legend_pos_unknown() {
    assert!("middle".parse::<LegendPos>().is_err());
}
