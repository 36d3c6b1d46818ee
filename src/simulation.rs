use log::info;

use crate::boundary::Walls;
use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::grid::Grid;
use crate::integrator::Integrator;
use crate::snapshot::{Snapshot, SnapshotSchedule};
use crate::stability::TimeStepping;
use crate::state::FieldState;

/// Observer notified as the run progresses.
///
/// `on_snapshot` is called synchronously from the stepping loop each time a
/// snapshot is emitted, so it should stay cheap. Returning `false` from
/// `keep_running` stops the run cleanly after the current step.
pub trait RunObserver {
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    fn keep_running(&self) -> bool {
        true
    }
}

/// Observer that ignores everything. Used by [`Simulation::run`].
pub struct NoObserver;

impl RunObserver for NoObserver {}

/// Observer that forwards each snapshot to a closure.
pub struct FnObserver<F: FnMut(&Snapshot)>(pub F);

impl<F: FnMut(&Snapshot)> RunObserver for FnObserver<F> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        (self.0)(snapshot);
    }
}

/// Everything a completed run leaves behind.
#[derive(Debug)]
pub struct SimulationResult {
    /// Snapshots in emission order; the last one has progress 1.0 unless
    /// the run was stopped early by an observer.
    pub snapshots: Vec<Snapshot>,
    /// Number of steps actually taken.
    pub steps_completed: usize,
    /// Simulated time reached [s].
    pub time: f64,
    /// Final velocity field [m/s].
    pub velocity: Vec<f64>,
    /// Final temperature field [K].
    pub temperature: Vec<f64>,
}

/// A configured run, ready to step.
///
/// Construction validates the configuration and derives the grid and the
/// time step; `run` then owns the whole stepping loop.
pub struct Simulation {
    grid: Grid,
    walls: Walls,
    time_stepping: TimeStepping,
    snapshot_target: usize,
    integrator: Integrator,
    state: FieldState,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let grid = Grid::new(config.num_nodes, config.gap_height)?;
        let walls = Walls {
            top_speed: config.wall_speed,
            wall_temperature: config.wall_temperature,
        };
        let time_stepping =
            TimeStepping::derive(&grid, &config.fluid, config.safety_factor, config.duration)?;
        let integrator = Integrator::new(&grid, &config.fluid, walls, time_stepping.dt);
        let state = FieldState::initial(&grid, &walls);

        info!(
            "couette run: {} nodes over {} m, dt = {:.3e} s, {} steps",
            grid.num_nodes(),
            grid.height(),
            time_stepping.dt,
            time_stepping.num_steps,
        );

        Ok(Self {
            grid,
            walls,
            time_stepping,
            snapshot_target: config.snapshot_target,
            integrator,
            state,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Derived time step [s].
    pub fn time_step(&self) -> f64 {
        self.time_stepping.dt
    }

    /// Number of steps the run will take.
    pub fn num_steps(&self) -> usize {
        self.time_stepping.num_steps
    }

    /// True when the step count triggered the performance warning.
    pub fn is_excessive(&self) -> bool {
        self.time_stepping.is_excessive()
    }

    /// Run to completion, collecting snapshots into the result.
    pub fn run(self) -> Result<SimulationResult, SimError> {
        self.run_with_observer(&mut NoObserver)
    }

    /// Run to completion, notifying `observer` at every emitted snapshot.
    ///
    /// On a [`SimError::NumericalInstability`] the loop stops at the step
    /// that produced the non-finite value; snapshots already delivered to
    /// the observer remain valid.
    pub fn run_with_observer(
        mut self,
        observer: &mut impl RunObserver,
    ) -> Result<SimulationResult, SimError> {
        let num_steps = self.time_stepping.num_steps;
        let schedule = SnapshotSchedule::new(num_steps, self.snapshot_target);
        let mut snapshots = Vec::new();

        for step_index in 0..num_steps {
            self.integrator.step(&mut self.state)?;
            if schedule.is_due(step_index) {
                let snapshot = Snapshot::capture(&self.state, num_steps);
                observer.on_snapshot(&snapshot);
                snapshots.push(snapshot);
            }
            if !observer.keep_running() {
                info!("run stopped by observer after step {step_index}");
                break;
            }
        }

        Ok(SimulationResult {
            snapshots,
            steps_completed: self.state.step(),
            time: self.state.time(),
            velocity: self.state.velocity.clone(),
            temperature: self.state.temperature.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::Fluid;

    fn quick_config() -> SimulationConfig {
        SimulationConfig {
            num_nodes: 10,
            fluid: Fluid::unit_prandtl(),
            duration: 5.0,
            ..SimulationConfig::new()
        }
    }

    #[test]
    fn test_rejects_invalid_configuration_before_running() {
        let config = SimulationConfig {
            num_nodes: 2,
            ..SimulationConfig::new()
        };
        assert!(matches!(
            Simulation::new(&config),
            Err(SimError::Configuration(_))
        ));
    }

    #[test]
    fn test_result_is_consistent_with_the_plan() {
        let config = quick_config();
        let sim = Simulation::new(&config).unwrap();
        let num_steps = sim.num_steps();
        let dt = sim.time_step();

        let result = sim.run().unwrap();
        assert_eq!(result.steps_completed, num_steps);
        assert!((result.time - num_steps as f64 * dt).abs() < 1e-12);
        assert_eq!(result.velocity.len(), config.num_nodes);
        assert_eq!(result.temperature.len(), config.num_nodes);

        let last = result.snapshots.last().unwrap();
        assert_eq!(last.step, num_steps - 1);
        assert_eq!(last.progress, 1.0);
        assert_eq!(last.velocity, result.velocity);
    }

    #[test]
    fn test_observer_sees_every_collected_snapshot() {
        let config = quick_config();
        let mut seen = Vec::new();
        let result = Simulation::new(&config)
            .unwrap()
            .run_with_observer(&mut FnObserver(|s: &Snapshot| seen.push(s.step)))
            .unwrap();
        let collected: Vec<usize> = result.snapshots.iter().map(|s| s.step).collect();
        assert_eq!(seen, collected);
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_observer_can_stop_the_run_early() {
        struct StopAfter(usize);
        impl RunObserver for StopAfter {
            fn keep_running(&self) -> bool {
                self.0 > 0
            }
            fn on_snapshot(&mut self, _snapshot: &Snapshot) {
                self.0 -= 1;
            }
        }

        let config = quick_config();
        let sim = Simulation::new(&config).unwrap();
        let num_steps = sim.num_steps();
        assert!(num_steps > 10);

        let result = sim.run_with_observer(&mut StopAfter(2)).unwrap();
        assert!(result.steps_completed < num_steps);
        assert_eq!(result.snapshots.len(), 2);
    }
}
