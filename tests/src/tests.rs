use pplot::data::BasicSource;
use pplot::des;

use crate::*;

fn fig(panels: Vec<des::Panel>) -> des::Figure {
    des::Figure::new(panels).unwrap()
}

fn panel(series: Vec<des::Series>) -> des::Panel {
    des::Panel::new(series).unwrap()
}

fn line(label: &str) -> des::Series {
    line2(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], label)
}

fn line2(x: &[f64], y: &[f64], label: &str) -> des::Series {
    let src = BasicSource::new(x.to_vec(), y.to_vec()).unwrap();
    des::Series::new(&src, label)
        .unwrap()
        .with_interp(des::Interp::Straight)
        .unwrap()
}

mod axes;
mod data;
mod interp;
mod legend;
mod subplots;

#[test]
fn default() {
    let fig = fig(vec![panel(vec![line("")])]);
    let prepared = prepare(&fig);

    assert_eq!(prepared.title(), None);
    assert_eq!(prepared.size(), None);
    assert_eq!(prepared.dpi(), 100.0);
    assert_eq!(prepared.panels().len(), 1);

    // 3 points give 5 ticks at step 0.5, the grid is extended after the end
    assert_ticks_eq!(
        prepared.indep_axis(),
        [1, 1.5, 2, 2.5, 3, 3.5],
        ["1.0", "1.5", "2.0", "2.5", "3.0", "3.5"]
    );
    let panel = &prepared.panels()[0];
    assert!(panel.display_indep_axis());
    assert!(panel.secondary().is_none());
    assert_ticks_eq!(
        panel.primary().unwrap(),
        [1, 1.5, 2, 2.5, 3, 3.5],
        ["1.0", "1.5", "2.0", "2.5", "3.0", "3.5"]
    );
}

#[test]
fn title_and_size() {
    let fig = fig(vec![panel(vec![line("")])])
        .with_title("Title")
        .with_size(6.0, 4.5)
        .unwrap()
        .with_dpi(300.0)
        .unwrap();
    let prepared = prepare(&fig);

    assert_eq!(prepared.title(), Some("Title"));
    let size = prepared.size().unwrap();
    assert_eq!(size.width(), 6.0);
    assert_eq!(size.height(), 4.5);
    assert_eq!(prepared.dpi(), 300.0);
}

#[test]
fn tick_config() {
    let fig = fig(vec![panel(vec![line2(
        &[0.0, 10.0],
        &[0.0, 10.0],
        "",
    )])]);

    let prepared = prepare(&fig);
    assert_ticks_eq!(
        prepared.indep_axis(),
        [0, 2, 4, 6, 8, 10],
        ["0", "2", "4", "6", "8", "10"]
    );

    let ticks = drawing::TickConfig::default()
        .with_min_ticks(3)
        .with_suggested_max_ticks(4);
    let prepared = prepare_with(&fig, ticks);
    assert_ticks_eq!(prepared.indep_axis(), [0, 5, 10], ["0", "5", "10"]);
}

#[test]
fn parameter_sweep_colors() {
    use pplot::style::{ColorMap, parameterized_color_space};

    let gains = [0.5, 1.0, 2.0];
    let colors = parameterized_color_space(&gains, 0.25, ColorMap::Blues).unwrap();
    let series = gains
        .iter()
        .zip(&colors)
        .map(|(gain, color)| {
            let y: Vec<f64> = [1.0, 2.0, 3.0].iter().map(|x| x * gain).collect();
            line2(&[1.0, 2.0, 3.0], &y, &format!("gain {gain}")).with_color(*color)
        })
        .collect();
    let prepared = prepare(&fig(vec![panel(series)]));

    let series = prepared.panels()[0].series();
    assert_eq!(series.len(), 3);
    for (s, color) in series.iter().zip(&colors) {
        assert_eq!(s.color(), *color);
    }
    // the lowest gain is the lightest
    let luma = |c: pplot::Color| c.rgb().iter().map(|v| *v as u32).sum::<u32>();
    assert!(luma(colors[0]) > luma(colors[1]));
    assert!(luma(colors[1]) > luma(colors[2]));
    assert_eq!(colors[2], ColorMap::Blues.color(1.0));
}
