use crate::boundary::Walls;
use crate::error::FieldKind;
use crate::grid::Grid;

/// Mutable per-run solver state: the two fields plus the clock.
///
/// `step` counts completed steps; `time` is `step * dt` accumulated by the
/// integrator.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub(crate) velocity: Vec<f64>,
    pub(crate) temperature: Vec<f64>,
    pub(crate) time: f64,
    pub(crate) step: usize,
}

impl FieldState {
    /// Fluid at rest at the wall temperature, with the wall values already
    /// imposed (the top wall starts at its full speed).
    pub fn initial(grid: &Grid, walls: &Walls) -> Self {
        let n = grid.num_nodes();
        let mut velocity = vec![0.0; n];
        let mut temperature = vec![walls.wall_temperature; n];
        walls.impose(&mut velocity, &mut temperature);
        Self {
            velocity,
            temperature,
            time: 0.0,
            step: 0,
        }
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Simulated time elapsed so far [s].
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of completed steps.
    pub fn step(&self) -> usize {
        self.step
    }

    /// First NaN or infinity in either field, velocity scanned first.
    pub fn first_non_finite(&self) -> Option<(FieldKind, usize)> {
        if let Some(i) = self.velocity.iter().position(|v| !v.is_finite()) {
            return Some((FieldKind::Velocity, i));
        }
        if let Some(i) = self.temperature.iter().position(|t| !t.is_finite()) {
            return Some((FieldKind::Temperature, i));
        }
        None
    }
}
