use thiserror::Error;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const MOON_GRAVITY_MPS2: f64 = 1.62;

#[derive(Clone, Copy, Debug)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub horizontal_accel_mps2: f64,
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    pub fn new(speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            speed_mps,
            angle_deg,
            horizontal_accel_mps2: 0.0,
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }

    pub fn with_horizontal_accel(mut self, accel_mps2: f64) -> Self {
        self.horizontal_accel_mps2 = accel_mps2;
        self
    }

    pub fn with_gravity(mut self, gravity_mps2: f64) -> Self {
        self.gravity_mps2 = gravity_mps2;
        self
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum KinematicsError {
    #[error("launch parameters must be finite numbers")]
    NonFiniteInput,
    #[error("launch speed must be positive, got {0} m/s")]
    NonPositiveSpeed(f64),
    #[error("gravity magnitude must be non-zero, got {0} m/s^2")]
    ZeroGravity(f64),
    #[error("trajectory timestep must be positive and finite, got {0} s")]
    NonPositiveTimestep(f64),
}

/// Ground-launched projectile under constant acceleration, closed-form only.
///
/// All derived scalars are cached at construction; every method afterwards is
/// a pure function of that immutable state and its arguments.
#[derive(Clone, Copy, Debug)]
pub struct GroundToGround {
    ux: f64,
    uy: f64,
    ax: f64,
    ay: f64,
    time_of_flight: f64,
    range: f64,
    hmax: f64,
}

impl GroundToGround {
    /// Validates the launch and caches the derived scalars.
    ///
    /// Angles below the horizontal are accepted (they yield a negative
    /// analytic flight time and an empty trajectory); callers wanting a
    /// ballistic arc supply angles in `[0, 180]` degrees.
    pub fn new(params: LaunchParameters) -> Result<Self, KinematicsError> {
        if !params.speed_mps.is_finite()
            || !params.angle_deg.is_finite()
            || !params.horizontal_accel_mps2.is_finite()
            || !params.gravity_mps2.is_finite()
        {
            return Err(KinematicsError::NonFiniteInput);
        }
        if params.speed_mps <= 0.0 {
            return Err(KinematicsError::NonPositiveSpeed(params.speed_mps));
        }
        if params.gravity_mps2 == 0.0 {
            return Err(KinematicsError::ZeroGravity(params.gravity_mps2));
        }

        let theta = params.angle_deg.to_radians();
        let ux = params.speed_mps * theta.cos();
        let uy = params.speed_mps * theta.sin();

        // Gravity always acts downward, whatever sign the caller supplied.
        let g = params.gravity_mps2.abs();
        let ax = params.horizontal_accel_mps2;
        let ay = -g;

        let time_of_flight = (2.0 * uy) / g;
        let range = (ux * time_of_flight) + (0.5 * ax * time_of_flight * time_of_flight);
        let hmax = (uy * uy) / (2.0 * g);

        Ok(Self {
            ux,
            uy,
            ax,
            ay,
            time_of_flight,
            range,
            hmax,
        })
    }

    /// Position at elapsed time `t`, valid for any `t` including past the
    /// flight time; bounding `t` is the caller's job.
    pub fn coordinates(&self, t: f64) -> (f64, f64) {
        let x = (self.ux * t) + (0.5 * self.ax * t * t);
        let y = (self.uy * t) + (0.5 * self.ay * t * t);
        (x, y)
    }

    pub fn velocity_components(&self, t: f64) -> (f64, f64) {
        (self.ux + (self.ax * t), self.uy + (self.ay * t))
    }

    /// Speed magnitude at elapsed time `t`.
    pub fn instantaneous_velocity(&self, t: f64) -> f64 {
        let (vx, vy) = self.velocity_components(t);
        vx.hypot(vy)
    }

    /// Samples positions at `t = 0, timestep, 2*timestep, ...` while
    /// `t < time_of_flight`, stopping short the moment a coordinate would go
    /// negative. The cutoff guards against drift near the flight's end and
    /// against accelerations that pull the arc out of the first quadrant
    /// before the analytic flight time is up.
    ///
    /// An empty sequence is a valid result (zero flight time).
    pub fn generate_trajectory(&self, timestep: f64) -> Result<Vec<(f64, f64)>, KinematicsError> {
        if timestep <= 0.0 || !timestep.is_finite() {
            return Err(KinematicsError::NonPositiveTimestep(timestep));
        }

        let mut samples = Vec::new();
        let mut step = 0u64;
        loop {
            let t = step as f64 * timestep;
            if t >= self.time_of_flight {
                break;
            }
            let (x, y) = self.coordinates(t);
            if x < 0.0 || y < 0.0 {
                break;
            }
            samples.push((x, y));
            step += 1;
        }
        Ok(samples)
    }

    pub fn time_of_flight(&self) -> f64 {
        self.time_of_flight
    }

    /// Analytic ballistic range evaluated at the flight time.
    ///
    /// Under non-zero horizontal acceleration this can disagree with the last
    /// generated sample's x: the trajectory stops at the first-quadrant exit,
    /// the analytic value does not. Consumers animating a landing point
    /// should trust the trajectory, not this scalar.
    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn hmax(&self) -> f64 {
        self.hmax
    }
}

#[cfg(test)]
mod tests {
    use super::{GroundToGround, KinematicsError, LaunchParameters};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn engine(speed: f64, angle: f64) -> GroundToGround {
        GroundToGround::new(LaunchParameters::new(speed, angle))
            .expect("construction should succeed")
    }

    #[test]
    fn scenario_speed_40_angle_50_matches_closed_form() {
        let g2g = engine(40.0, 50.0);

        assert_close(g2g.time_of_flight(), 6.2534, 0.001);
        assert_close(g2g.hmax(), 47.904, 0.001);
        assert_close(g2g.range(), 160.785, 0.01);
    }

    #[test]
    fn forty_five_degree_range_matches_sin_two_theta_formula() {
        let speed = 10.0f64;
        let g2g = engine(speed, 45.0);

        let expected = speed * speed * (2.0f64 * 45.0f64.to_radians()).sin() / 9.8;
        let relative = (g2g.range() - expected).abs() / expected;
        assert!(relative < 1e-6, "relative error {relative}");
    }

    #[test]
    fn flight_time_and_peak_are_non_negative_for_upward_launches() {
        for angle in [0.0, 15.0, 45.0, 90.0, 135.0, 180.0] {
            let g2g = engine(25.0, angle);
            assert!(g2g.time_of_flight() >= 0.0, "angle {angle}");
            assert!(g2g.hmax() >= 0.0, "angle {angle}");
        }
    }

    #[test]
    fn trajectory_starts_at_origin_and_stays_in_first_quadrant() {
        let samples = engine(40.0, 50.0)
            .generate_trajectory(1.0 / 60.0)
            .expect("valid timestep");

        assert_eq!(samples.first().copied(), Some((0.0, 0.0)));
        for (x, y) in samples {
            assert!(x >= 0.0 && y >= 0.0, "sample ({x}, {y}) left the quadrant");
        }
    }

    #[test]
    fn horizontal_launch_yields_empty_trajectory() {
        let g2g = engine(30.0, 0.0);

        assert_close(g2g.time_of_flight(), 0.0, 1e-12);
        let samples = g2g.generate_trajectory(0.05).expect("valid timestep");
        assert!(samples.is_empty());
    }

    #[test]
    fn length_grows_with_flight_time_and_shrinks_with_timestep() {
        let short = engine(20.0, 30.0);
        let long = engine(20.0, 70.0);
        assert!(long.time_of_flight() > short.time_of_flight());

        let dt = 1.0 / 60.0;
        let short_len = short.generate_trajectory(dt).expect("valid").len();
        let long_len = long.generate_trajectory(dt).expect("valid").len();
        assert!(long_len >= short_len);

        let coarse_len = long.generate_trajectory(dt * 4.0).expect("valid").len();
        assert!(coarse_len <= long_len);
    }

    #[test]
    fn strong_backward_acceleration_terminates_well_before_flight_time() {
        let g2g = GroundToGround::new(
            LaunchParameters::new(10.0, 80.0).with_horizontal_accel(-30.0),
        )
        .expect("construction should succeed");

        let dt = 1.0 / 60.0;
        let samples = g2g.generate_trajectory(dt).expect("valid timestep");

        // x goes negative around t = 0.116 s; the analytic flight time is
        // ~2.01 s, so the sequence stops an order of magnitude early.
        assert_eq!(samples.len(), 7);
        let last_t = (samples.len() - 1) as f64 * dt;
        assert!(last_t < g2g.time_of_flight() / 10.0);
        for (x, y) in samples {
            assert!(x >= 0.0 && y >= 0.0);
        }
    }

    #[test]
    fn analytic_range_overshoots_last_sample_under_forward_acceleration() {
        let g2g = GroundToGround::new(
            LaunchParameters::new(300.0, 3.0).with_horizontal_accel(15.0),
        )
        .expect("construction should succeed");

        let samples = g2g.generate_trajectory(1.0 / 60.0).expect("valid timestep");
        let (last_x, _) = *samples.last().expect("non-empty trajectory");
        assert!(last_x < g2g.range());
    }

    #[test]
    fn generate_trajectory_is_idempotent() {
        let g2g = engine(55.0, 62.0);
        let first = g2g.generate_trajectory(1.0 / 30.0).expect("valid");
        let second = g2g.generate_trajectory(1.0 / 30.0).expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn instantaneous_velocity_recovers_launch_speed_and_apex_speed() {
        let g2g = engine(40.0, 50.0);

        assert_close(g2g.instantaneous_velocity(0.0), 40.0, 1e-9);
        // At the apex only the horizontal component remains.
        let apex_t = g2g.time_of_flight() / 2.0;
        assert_close(g2g.instantaneous_velocity(apex_t), 25.7115, 0.001);
        assert_close(g2g.instantaneous_velocity(1.0), 33.0978, 0.001);
    }

    #[test]
    fn rejects_non_positive_timestep() {
        let g2g = engine(40.0, 50.0);

        for bad in [0.0, -0.25, f64::NAN, f64::INFINITY] {
            let err = g2g
                .generate_trajectory(bad)
                .expect_err("timestep should be rejected");
            assert!(matches!(err, KinematicsError::NonPositiveTimestep(_)));
        }
    }

    #[test]
    fn rejects_non_positive_speed() {
        for bad in [0.0, -12.0] {
            let err = GroundToGround::new(LaunchParameters::new(bad, 45.0))
                .expect_err("speed should be rejected");
            assert_eq!(err, KinematicsError::NonPositiveSpeed(bad));
        }
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let err = GroundToGround::new(LaunchParameters::new(f64::NAN, 45.0))
            .expect_err("NaN speed should be rejected");
        assert_eq!(err, KinematicsError::NonFiniteInput);

        let err = GroundToGround::new(
            LaunchParameters::new(10.0, 45.0).with_gravity(f64::INFINITY),
        )
        .expect_err("infinite gravity should be rejected");
        assert_eq!(err, KinematicsError::NonFiniteInput);
    }

    #[test]
    fn supplied_gravity_sign_is_ignored() {
        let down = GroundToGround::new(LaunchParameters::new(40.0, 50.0).with_gravity(9.8))
            .expect("construction should succeed");
        let up = GroundToGround::new(LaunchParameters::new(40.0, 50.0).with_gravity(-9.8))
            .expect("construction should succeed");

        assert_close(down.time_of_flight(), up.time_of_flight(), 1e-12);
        assert_close(down.hmax(), up.hmax(), 1e-12);
    }
}
