use pplot::{Prepare, data, des, drawing};

mod common;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let goals = data::BasicSource::new(time.clone(), vec![1.0, -10.0, 10.0, 5.0, 4.0])?;
    let budget = data::BasicSource::new(time, vec![20.0, 35.0, 30.0, 60.0, 55.0])?;

    // the cubic spline goes below -10 and above 10, the ticks follow it
    let top = des::Panel::new(vec![
        des::Series::new(&goals, "Goals")?.with_color_spec("b")?,
        des::Series::new(&budget, "Budget")?
            .with_color_spec("r")?
            .with_interp(des::Interp::Step)?
            .with_secondary_axis(true),
    ])?
    .with_primary_axis(des::Axis::new().with_label("Goals"))
    .with_secondary_axis(des::Axis::new().with_label("Budget").with_units("$"));

    // same data, straight segments stay within the data
    let bottom = des::Panel::new(vec![
        des::Series::new(&goals, "Goals")?
            .with_color_spec("g")?
            .with_interp(des::Interp::Straight)?,
    ])?
    .with_primary_axis(des::Axis::new().with_label("Goals"));

    let fig = des::Figure::new(vec![top, bottom])?
        .with_indep_axis(des::Axis::new().with_label("Time").with_units("sec"))?
        .with_title("Cubic overshoot");
    println!("{fig}");

    let prepared = fig.prepare(&drawing::Options::default())?;
    common::print_figure(&prepared);
    Ok(())
}
