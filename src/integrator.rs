use rayon::prelude::*;

use crate::boundary::Walls;
use crate::error::SimError;
use crate::fluid::Fluid;
use crate::grid::Grid;
use crate::state::FieldState;

/// Explicit finite-difference update for the coupled momentum and energy
/// equations.
///
/// Each step reads only previous-step values (double buffering through two
/// scratch vectors swapped into the state), updates the interior nodes
/// 1..N−2, re-imposes the wall values exactly, and then checks both fields
/// for non-finite values.
///
/// Interior update, per node i:
///
/// ```text
/// u'  = u  + dt·ν·(u[i+1] − 2u[i] + u[i−1])/dy²
/// T'  = T  + dt·α·(T[i+1] − 2T[i] + T[i−1])/dy²
///          + dt·(μ/(ρ·c_p))·((u[i+1] − u[i−1])/(2dy))²
/// ```
///
/// The shear rate feeding the dissipation term uses the previous-step
/// velocity, so the two field updates are independent within a step.
#[derive(Debug)]
pub struct Integrator {
    dt: f64,
    momentum_diffusivity: f64,
    thermal_diffusivity: f64,
    heating_coefficient: f64,
    inv_spacing_sq: f64,
    inv_two_spacing: f64,
    walls: Walls,
    velocity_next: Vec<f64>,
    temperature_next: Vec<f64>,
}

impl Integrator {
    pub fn new(grid: &Grid, fluid: &Fluid, walls: Walls, dt: f64) -> Self {
        let dy = grid.spacing();
        let n = grid.num_nodes();
        Self {
            dt,
            momentum_diffusivity: fluid.momentum_diffusivity(),
            thermal_diffusivity: fluid.thermal_diffusivity(),
            heating_coefficient: fluid.heating_coefficient(),
            inv_spacing_sq: 1.0 / (dy * dy),
            inv_two_spacing: 1.0 / (2.0 * dy),
            walls,
            velocity_next: vec![0.0; n],
            temperature_next: vec![0.0; n],
        }
    }

    /// Advance the state by one time step.
    ///
    /// On a non-finite result the error names the field, the node and the
    /// zero-based index of the step that produced it; the state keeps the
    /// offending values for inspection.
    pub fn step(&mut self, state: &mut FieldState) -> Result<(), SimError> {
        let n = state.velocity.len();
        let dt = self.dt;
        let nu = self.momentum_diffusivity;
        let alpha = self.thermal_diffusivity;
        let heat = self.heating_coefficient;
        let inv_dy2 = self.inv_spacing_sq;
        let inv_2dy = self.inv_two_spacing;

        let u_old: &[f64] = &state.velocity;
        let t_old: &[f64] = &state.temperature;

        self.velocity_next[1..n - 1]
            .par_iter_mut()
            .zip(self.temperature_next[1..n - 1].par_iter_mut())
            .enumerate()
            .for_each(|(j, (u_new, t_new))| {
                let i = j + 1;
                let lap_u = (u_old[i + 1] - 2.0 * u_old[i] + u_old[i - 1]) * inv_dy2;
                let lap_t = (t_old[i + 1] - 2.0 * t_old[i] + t_old[i - 1]) * inv_dy2;
                let dudy = (u_old[i + 1] - u_old[i - 1]) * inv_2dy;
                *u_new = u_old[i] + dt * nu * lap_u;
                *t_new = t_old[i] + dt * alpha * lap_t + dt * heat * dudy * dudy;
            });

        self.walls
            .impose(&mut self.velocity_next, &mut self.temperature_next);

        let step_index = state.step;
        std::mem::swap(&mut state.velocity, &mut self.velocity_next);
        std::mem::swap(&mut state.temperature, &mut self.temperature_next);
        state.step += 1;
        state.time = state.step as f64 * dt;

        if let Some((field, node)) = state.first_non_finite() {
            return Err(SimError::NumericalInstability {
                field,
                node,
                step: step_index,
            });
        }
        Ok(())
    }
}
