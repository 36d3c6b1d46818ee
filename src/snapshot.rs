use crate::state::FieldState;

/// Default number of snapshots aimed for over a run.
pub const DEFAULT_SNAPSHOT_TARGET: usize = 50;

/// Copy of both fields at one point in the run, handed to observers and
/// collected into the result.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Zero-based index of the step this snapshot was taken after.
    pub step: usize,
    /// Simulated time [s].
    pub time: f64,
    /// Fraction of the run completed, reaching exactly 1.0 at the end.
    pub progress: f64,
    pub velocity: Vec<f64>,
    pub temperature: Vec<f64>,
}

impl Snapshot {
    pub fn capture(state: &FieldState, num_steps: usize) -> Self {
        Self {
            step: state.step() - 1,
            time: state.time(),
            progress: state.step() as f64 / num_steps as f64,
            velocity: state.velocity().to_vec(),
            temperature: state.temperature().to_vec(),
        }
    }
}

/// Decides which steps get a snapshot.
///
/// The emission interval is `max(1, num_steps / target)`, so short runs
/// record every step and long runs stay near the target count. The final
/// step always emits, so the last snapshot carries progress 1.0.
#[derive(Debug, Clone)]
pub struct SnapshotSchedule {
    interval: usize,
    last_step: usize,
}

impl SnapshotSchedule {
    pub fn new(num_steps: usize, target: usize) -> Self {
        Self {
            interval: (num_steps / target.max(1)).max(1),
            last_step: num_steps.saturating_sub(1),
        }
    }

    /// True when the just-completed step (zero-based) should emit.
    pub fn is_due(&self, step_index: usize) -> bool {
        step_index.is_multiple_of(self.interval) || step_index == self.last_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Walls;
    use crate::grid::Grid;

    #[test]
    fn test_schedule_hits_roughly_the_target() {
        let schedule = SnapshotSchedule::new(1000, 50);
        let due: Vec<usize> = (0..1000).filter(|&i| schedule.is_due(i)).collect();
        // Every 20th step plus the final one.
        assert_eq!(due.len(), 51);
        assert_eq!(due[0], 0);
        assert_eq!(due[1], 20);
        assert_eq!(*due.last().unwrap(), 999);
    }

    #[test]
    fn test_short_runs_record_every_step() {
        let schedule = SnapshotSchedule::new(7, 50);
        let due: Vec<usize> = (0..7).filter(|&i| schedule.is_due(i)).collect();
        assert_eq!(due, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_zero_step_schedule_is_harmless() {
        // An empty run never queries the schedule; construction alone must
        // not underflow.
        let schedule = SnapshotSchedule::new(0, 50);
        assert_eq!((0..0).filter(|&i| schedule.is_due(i)).count(), 0);
    }

    #[test]
    fn test_final_step_is_always_due() {
        for num_steps in [1, 2, 21, 99, 100, 12345] {
            let schedule = SnapshotSchedule::new(num_steps, 50);
            assert!(
                schedule.is_due(num_steps - 1),
                "final step missing for num_steps = {num_steps}"
            );
        }
    }

    #[test]
    fn test_capture_copies_fields_and_scales_progress() {
        let grid = Grid::new(5, 0.01).unwrap();
        let walls = Walls {
            top_speed: 5.0,
            wall_temperature: 293.15,
        };
        let mut state = crate::state::FieldState::initial(&grid, &walls);
        state.step = 10;
        state.time = 0.5;

        let snap = Snapshot::capture(&state, 40);
        assert_eq!(snap.step, 9);
        assert_eq!(snap.time, 0.5);
        assert!((snap.progress - 0.25).abs() < 1e-15);
        assert_eq!(snap.velocity, state.velocity());
        assert_eq!(snap.temperature, state.temperature());

        state.step = 40;
        let snap = Snapshot::capture(&state, 40);
        assert_eq!(snap.progress, 1.0);
        assert_eq!(snap.step, 39);
    }
}
