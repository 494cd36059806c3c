use pplot::data::{CsvSource, RowFilter};
use pplot::style::{ColorMap, parameterized_color_space};
use pplot::{Prepare, des, drawing};

mod common;

const CSV: &str = "\
Time,Value,Corner,Temp
0,1.5,fast,-40
1,2.5,fast,-40
2,4.1,fast,-40
3,4.6,fast,-40
0,1.2,typ,25
1,2.2,typ,25
2,3.3,typ,25
3,3.9,typ,25
0,1,slow,125
1,2,slow,125
2,3,slow,125
3,3.2,slow,125
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let corners = [("fast", -40.0), ("typ", 25.0), ("slow", 125.0)];
    let temps: Vec<f64> = corners.iter().map(|(_, t)| *t).collect();
    // the coldest corner is the lightest
    let colors = parameterized_color_space(&temps, 0.3, ColorMap::YlOrRd)?;

    let mut series = Vec::with_capacity(corners.len());
    for ((corner, temp), color) in corners.iter().zip(colors) {
        let src = CsvSource::builder("Time", "Value")
            .with_row_filter(RowFilter::new().with_value("Corner", *corner))
            .with_proc("milli", |x, y| {
                let y = y.iter().map(|v| v * 1e-3).collect();
                Ok((x.to_vec(), y))
            })
            .parse(CSV)?;
        println!("{src}");
        series.push(des::Series::new(&src, &format!("{corner} ({temp} C)"))?.with_color(color));
    }

    let panel = des::Panel::new(series)?
        .with_primary_axis(des::Axis::new().with_label("Output").with_units("V"))
        .with_legend(des::Legend::from(des::LegendPos::LowerRight));
    let fig = des::Figure::new(vec![panel])?
        .with_indep_axis(des::Axis::new().with_label("Time").with_units("sec"))?
        .with_title("Process corners");

    let prepared = fig.prepare(&drawing::Options::default())?;
    common::print_figure(&prepared);
    Ok(())
}
