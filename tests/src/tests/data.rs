use pplot::data::{CsvSource, DataSource, RowFilter};
use pplot::des;

use super::{fig, panel};
use crate::{assert_ticks_eq, prepare};

const CSV: &str = "\
Time,Value,Corner
0,1.5,fast
1,2.5,fast
2,4,fast
0,1,slow
1,2,slow
2,3,slow
";

fn corner(name: &str) -> CsvSource {
    CsvSource::builder("Time", "Value")
        .with_row_filter(RowFilter::new().with_value("Corner", name))
        .parse(CSV)
        .unwrap()
}

fn series(src: &dyn DataSource, label: &str) -> des::Series {
    des::Series::new(src, label)
        .unwrap()
        .with_interp(des::Interp::Straight)
        .unwrap()
}

#[test]
fn data_csv_corners() {
    let fast = corner("fast");
    let slow = corner("slow");
    assert_eq!(fast.dep_var(), &[1.5, 2.5, 4.0]);
    assert_eq!(slow.dep_var(), &[1.0, 2.0, 3.0]);

    let panel = panel(vec![series(&fast, "fast"), series(&slow, "slow")]);
    let prepared = prepare(&fig(vec![panel]));

    assert_ticks_eq!(
        prepared.indep_axis(),
        [0, 0.5, 1, 1.5, 2, 2.5],
        ["0.0", "0.5", "1.0", "1.5", "2.0", "2.5"]
    );
    assert_ticks_eq!(
        prepared.panels()[0].primary().unwrap(),
        [1, 1.5, 2, 2.5, 3, 3.5, 4],
        ["1.0", "1.5", "2.0", "2.5", "3.0", "3.5", "4.0"]
    );
}

#[test]
fn data_csv_processing() {
    let src = CsvSource::builder("Time", "Value")
        .with_row_filter(RowFilter::new().with_value("Corner", "fast"))
        .with_indep_min(1.0)
        .with_proc("milli", |x, y| {
            let y = y.iter().map(|v| v * 1e-3).collect();
            Ok((x.to_vec(), y))
        })
        .parse(CSV)
        .unwrap();
    assert_eq!(src.indep_var(), &[1.0, 2.0]);

    let prepared = prepare(&fig(vec![panel(vec![series(&src, "")])]));
    let primary = prepared.panels()[0].primary().unwrap();
    assert_eq!(primary.range().start(), 2.5e-3);
    assert_eq!(primary.range().end(), 4e-3);
    assert_ticks_eq!(
        primary,
        [2.4e-3, 2.6e-3, 2.8e-3, 3e-3, 3.2e-3, 3.4e-3, 3.6e-3, 3.8e-3, 4e-3],
        ["2.4m", "2.6m", "2.8m", "3.0m", "3.2m", "3.4m", "3.6m", "3.8m", "4.0m"]
    );
}
