use log::warn;

use crate::error::SimError;
use crate::fluid::Fluid;
use crate::snapshot::DEFAULT_SNAPSHOT_TARGET;
use crate::stability::{DEFAULT_SAFETY_FACTOR, VON_NEUMANN_LIMIT};

/// Simulation configuration.
///
/// All fields are public and can be adjusted after construction; `new()`
/// fills in defaults for a small oil-filled gap. Validation runs once when
/// the simulation is built, before any stepping.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Speed of the moving top wall [m/s].
    pub wall_speed: f64,
    /// Gap between the plates [m].
    pub gap_height: f64,
    /// Working fluid between the plates.
    pub fluid: Fluid,
    /// Temperature held at both walls [K].
    pub wall_temperature: f64,
    /// Number of grid nodes across the gap (≥ 3).
    pub num_nodes: usize,
    /// Simulated duration [s].
    pub duration: f64,
    /// Fraction of the explicit stability limit used for the time step.
    /// Values above 0.5 make the scheme diverge; accepted with a warning.
    pub safety_factor: f64,
    /// Number of snapshots aimed for over the run.
    pub snapshot_target: usize,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            wall_speed: 5.0,
            gap_height: 0.01,
            fluid: Fluid::engine_oil(),
            wall_temperature: 293.15,
            num_nodes: 50,
            duration: 0.2,
            safety_factor: DEFAULT_SAFETY_FACTOR,
            snapshot_target: DEFAULT_SNAPSHOT_TARGET,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.fluid.validate()?;
        if !self.wall_speed.is_finite() || self.wall_speed < 0.0 {
            return Err(SimError::Configuration(format!(
                "wall speed must be non-negative and finite, got {}",
                self.wall_speed
            )));
        }
        if !self.wall_temperature.is_finite() {
            return Err(SimError::Configuration(format!(
                "wall temperature must be finite, got {}",
                self.wall_temperature
            )));
        }
        if self.safety_factor > VON_NEUMANN_LIMIT {
            warn!(
                "safety factor {} exceeds the stability limit {}; the run will diverge",
                self.safety_factor, VON_NEUMANN_LIMIT
            );
        }
        // Grid, duration and safety factor bounds are checked where the
        // grid and the time stepping are built from this config.
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
