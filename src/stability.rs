use log::warn;

use crate::error::SimError;
use crate::fluid::Fluid;
use crate::grid::Grid;

/// Von Neumann stability limit for the explicit diffusion stencil.
/// Safety factors above this value make the scheme diverge.
pub const VON_NEUMANN_LIMIT: f64 = 0.5;

/// Default fraction of the stability limit used for the time step.
pub const DEFAULT_SAFETY_FACTOR: f64 = 0.4;

/// Step counts above this trigger a (non-fatal) performance warning.
pub const MAX_REASONABLE_STEPS: usize = 10_000_000;

/// Time step and step count derived from the grid, the fluid and the
/// requested duration.
///
/// dt = s · dy² / max(ν, α), so the faster-diffusing field sets the pace
/// and both fields stay within the explicit stability bound when s ≤ 0.5.
#[derive(Debug, Clone)]
pub struct TimeStepping {
    /// Time step [s].
    pub dt: f64,
    /// Number of steps covering the requested duration, ceil(t_max / dt).
    pub num_steps: usize,
    /// Safety factor s the step was derived with.
    pub safety_factor: f64,
    excessive: bool,
}

impl TimeStepping {
    pub fn derive(
        grid: &Grid,
        fluid: &Fluid,
        safety_factor: f64,
        duration: f64,
    ) -> Result<Self, SimError> {
        if !safety_factor.is_finite() || safety_factor <= 0.0 {
            return Err(SimError::Configuration(format!(
                "safety factor must be positive and finite, got {safety_factor}"
            )));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SimError::Configuration(format!(
                "simulated duration must be positive and finite, got {duration}"
            )));
        }

        let max_diffusivity = fluid
            .momentum_diffusivity()
            .max(fluid.thermal_diffusivity());
        if !max_diffusivity.is_finite() || max_diffusivity <= 0.0 {
            return Err(SimError::Configuration(format!(
                "maximum diffusivity must be positive and finite, got {max_diffusivity}"
            )));
        }
        let dy = grid.spacing();
        let dt = safety_factor * dy * dy / max_diffusivity;
        let num_steps = (duration / dt).ceil() as usize;

        let excessive = num_steps > MAX_REASONABLE_STEPS;
        if excessive {
            warn!(
                "run needs {num_steps} steps (dt = {dt:.3e} s); \
                 consider a coarser grid or a shorter duration"
            );
        }

        Ok(Self {
            dt,
            num_steps,
            safety_factor,
            excessive,
        })
    }

    /// True when the derived step count exceeds [`MAX_REASONABLE_STEPS`].
    /// The run still proceeds; this only mirrors the logged warning.
    pub fn is_excessive(&self) -> bool {
        self.excessive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario_time_step() {
        // N=10, H=0.01 m, μ=1, ρ=1000, k=0.5, c_p=1000, s=0.4:
        // dy = 0.01/9, max diffusivity is ν = 1e-3, dt = 0.04/81 s.
        let grid = Grid::new(10, 0.01).unwrap();
        let fluid = Fluid::new(1.0, 1000.0, 0.5, 1000.0);
        let ts = TimeStepping::derive(&grid, &fluid, 0.4, 0.01).unwrap();

        let expected_dt = 0.4 * (0.01 / 9.0) * (0.01 / 9.0) / 1.0e-3;
        assert!((ts.dt - expected_dt).abs() < 1e-18, "dt = {}", ts.dt);
        // 0.01 / dt ≈ 20.25 -> 21 steps
        assert_eq!(ts.num_steps, 21);
        assert!(!ts.is_excessive());
    }

    #[test]
    fn test_faster_diffusivity_sets_the_pace() {
        let grid = Grid::new(10, 0.01).unwrap();
        // Water: α ≈ 1.44e-7 < ν ≈ 1.0e-6, so ν governs.
        let fluid = Fluid::water();
        let ts = TimeStepping::derive(&grid, &fluid, 0.4, 0.01).unwrap();
        let dy = grid.spacing();
        let expected = 0.4 * dy * dy / fluid.momentum_diffusivity();
        assert!((ts.dt - expected).abs() < 1e-18);
    }

    #[test]
    fn test_step_count_covers_the_duration() {
        let grid = Grid::new(10, 0.01).unwrap();
        let fluid = Fluid::unit_prandtl();
        let ts = TimeStepping::derive(&grid, &fluid, 0.4, 1.0).unwrap();
        assert!(ts.num_steps as f64 * ts.dt >= 1.0);
        assert!((ts.num_steps - 1) as f64 * ts.dt < 1.0);
    }

    #[test]
    fn test_excessive_step_count_is_flagged_not_fatal() {
        // Fine grid, long duration: far beyond the warning threshold.
        let grid = Grid::new(2000, 0.01).unwrap();
        let fluid = Fluid::unit_prandtl();
        let ts = TimeStepping::derive(&grid, &fluid, 0.4, 100.0).unwrap();
        assert!(ts.num_steps > MAX_REASONABLE_STEPS);
        assert!(ts.is_excessive());
    }

    #[test]
    fn test_rejects_degenerate_diffusivity() {
        // A fluid with no viscosity and no conductivity has D = 0; the
        // division would otherwise yield dt = inf and a zero-step run.
        let grid = Grid::new(10, 0.01).unwrap();
        let fluid = Fluid::new(0.0, 1000.0, 0.0, 1000.0);
        let err = TimeStepping::derive(&grid, &fluid, 0.4, 1.0).unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)));
        assert!(err.to_string().contains("diffusivity"), "got: {err}");
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        let grid = Grid::new(10, 0.01).unwrap();
        let fluid = Fluid::unit_prandtl();
        assert!(TimeStepping::derive(&grid, &fluid, 0.0, 1.0).is_err());
        assert!(TimeStepping::derive(&grid, &fluid, -0.4, 1.0).is_err());
        assert!(TimeStepping::derive(&grid, &fluid, 0.4, 0.0).is_err());
        assert!(TimeStepping::derive(&grid, &fluid, 0.4, f64::NAN).is_err());
    }
}
