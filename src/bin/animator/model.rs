use macroquad::prelude::Color;
use projectile_motion::core::kinematics::{
    GroundToGround, KinematicsError, LaunchParameters, MOON_GRAVITY_MPS2,
};

use crate::constants::{EARTH_TRACE, MOON_TRACE};

#[derive(Clone, Copy)]
pub(crate) struct Scenario {
    pub(crate) name: &'static str,
    pub(crate) params: LaunchParameters,
    pub(crate) trace_color: Color,
}

impl Scenario {
    /// The same launch fired under Earth and Moon gravity, side by side.
    pub(crate) fn side_by_side() -> Vec<Self> {
        let launch = LaunchParameters::new(40.0, 50.0);
        vec![
            Self {
                name: "Earth",
                params: launch,
                trace_color: EARTH_TRACE,
            },
            Self {
                name: "Moon",
                params: launch.with_gravity(MOON_GRAVITY_MPS2),
                trace_color: MOON_TRACE,
            },
        ]
    }
}

/// One simulation's precomputed samples plus a read cursor. The cursor is the
/// only mutable piece; the engine and samples never change after setup.
pub(crate) struct Playback {
    pub(crate) scenario: Scenario,
    pub(crate) engine: GroundToGround,
    timestep_s: f64,
    samples: Vec<(f64, f64)>,
    cursor: usize,
}

impl Playback {
    pub(crate) fn new(scenario: Scenario, timestep_s: f64) -> Result<Self, KinematicsError> {
        let engine = GroundToGround::new(scenario.params)?;
        let samples = engine.generate_trajectory(timestep_s)?;
        Ok(Self {
            scenario,
            engine,
            timestep_s,
            samples,
            cursor: 0,
        })
    }

    /// Returns the next sample, or `None` once the trajectory is exhausted.
    pub(crate) fn advance(&mut self) -> Option<(f64, f64)> {
        let sample = self.samples.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(sample)
    }

    pub(crate) fn current(&self) -> Option<(f64, f64)> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.samples.get(idx).copied())
    }

    /// Samples visited so far, in launch order, for the path trace.
    pub(crate) fn visited(&self) -> &[(f64, f64)] {
        &self.samples[..self.cursor]
    }

    pub(crate) fn elapsed_s(&self) -> f64 {
        self.cursor.saturating_sub(1) as f64 * self.timestep_s
    }

    pub(crate) fn current_speed(&self) -> f64 {
        self.engine.instantaneous_velocity(self.elapsed_s())
    }

    pub(crate) fn finished(&self) -> bool {
        self.cursor >= self.samples.len()
    }

    pub(crate) fn restart(&mut self) {
        self.cursor = 0;
    }
}
