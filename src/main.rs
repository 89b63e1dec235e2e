use projectile_motion::core::kinematics::{
    GroundToGround, KinematicsError, LaunchParameters, MOON_GRAVITY_MPS2,
};

// Launch parameters are literal by design; there is no CLI surface.
const DEMO_SPEED_MPS: f64 = 40.0;
const DEMO_ANGLE_DEG: f64 = 50.0;

fn print_stats(label: &str, g2g: &GroundToGround) {
    println!("{label}");
    println!("  Time of flight: {:.4} s", g2g.time_of_flight());
    println!("  Range:          {:.4} m", g2g.range());
    println!("  Max height:     {:.4} m", g2g.hmax());
    println!("  Launch speed:   {:.4} m/s", g2g.instantaneous_velocity(0.0));
}

fn run() -> Result<(), KinematicsError> {
    let earth = GroundToGround::new(LaunchParameters::new(DEMO_SPEED_MPS, DEMO_ANGLE_DEG))?;
    let moon = GroundToGround::new(
        LaunchParameters::new(DEMO_SPEED_MPS, DEMO_ANGLE_DEG).with_gravity(MOON_GRAVITY_MPS2),
    )?;

    print_stats("Earth (g = 9.80 m/s^2)", &earth);
    println!();
    print_stats("Moon (g = 1.62 m/s^2)", &moon);

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
