use pplot::drawing::{PreparedAxis, PreparedFigure};

fn print_axis(name: &str, axis: &PreparedAxis) {
    let ticks = axis.ticks();
    let label = match (axis.label(), axis.units()) {
        (Some(label), Some(units)) => format!("{label} [{units}]"),
        (Some(label), None) => label.to_string(),
        _ => String::new(),
    };
    println!(
        "  {name:<10} {label:<20} view [{}, {}]",
        ticks.view().start(),
        ticks.view().end()
    );
    println!("             ticks: {}", ticks.labels().join("  "));
}

/// Print the axes of a prepared figure, as a renderer would lay them out
pub fn print_figure(fig: &PreparedFigure) {
    if let Some(title) = fig.title() {
        println!("{title}");
    }
    for (idx, panel) in fig.panels().iter().enumerate() {
        println!("panel {idx}:");
        for s in panel.series() {
            println!("  series '{}' in {}", s.label(), s.color());
        }
        if let Some(axis) = panel.primary() {
            print_axis("primary", axis);
        }
        if let Some(axis) = panel.secondary() {
            print_axis("secondary", axis);
        }
    }
    print_axis("indep", fig.indep_axis());
}
