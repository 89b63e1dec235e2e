use std::error::Error;

use chrono::Local;
use plotters::prelude::*;
use projectile_motion::core::kinematics::{
    GroundToGround, LaunchParameters, MOON_GRAVITY_MPS2,
};
use projectile_motion::core::window::shared_axis_window;

const CHART_TIMESTEP_S: f64 = 1.0 / 60.0;
const CHART_WIDTH_PX: u32 = 1280;
const CHART_HEIGHT_PX: u32 = 720;

fn run() -> Result<(), Box<dyn Error>> {
    // Same launch, two gravities; literal parameters by design.
    let launch = LaunchParameters::new(40.0, 50.0);
    let scenarios = [
        ("Earth", launch, RGBColor(188, 39, 50)),
        ("Moon", launch.with_gravity(MOON_GRAVITY_MPS2), RGBColor(86, 108, 196)),
    ];

    let mut series = Vec::new();
    for (name, params, color) in scenarios {
        let engine = GroundToGround::new(params)?;
        let samples = engine.generate_trajectory(CHART_TIMESTEP_S)?;
        log::info!(
            "{name}: T = {:.2} s, R = {:.1} m, H = {:.1} m ({} samples)",
            engine.time_of_flight(),
            engine.range(),
            engine.hmax(),
            samples.len()
        );
        series.push((name, engine, samples, color));
    }

    let (max_x, max_y) = shared_axis_window(
        series
            .iter()
            .map(|(_, engine, _, _)| (engine.range().max(0.0), engine.hmax())),
    );

    let filename = format!("trajectories_{}.png", Local::now().format("%Y%m%d_%H%M%S"));
    let root =
        BitMapBackend::new(&filename, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Same launch on Earth and Moon", ("sans-serif", 28))
        .margin(18)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()?;

    for (name, _, samples, color) in &series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(samples.iter().copied(), color))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("Wrote {filename}");

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
