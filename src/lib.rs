//! Explicit finite-difference simulation of plane Couette flow with
//! viscous dissipation heating.
//!
//! A fluid fills the gap between two parallel plates; the top plate moves
//! at a constant speed and both plates are held at a fixed temperature.
//! The crate advances the coupled 1-D momentum and energy equations across
//! the gap with a forward-Euler scheme, the time step derived from the von
//! Neumann stability bound.
//!
//! ```
//! use couette::{Fluid, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     fluid: Fluid::unit_prandtl(),
//!     duration: 1.0,
//!     ..SimulationConfig::new()
//! };
//! let result = Simulation::new(&config).unwrap().run().unwrap();
//! assert_eq!(result.snapshots.last().unwrap().progress, 1.0);
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod fluid;
pub mod grid;
pub mod integrator;
pub mod simulation;
pub mod snapshot;
pub mod stability;
pub mod state;

pub use boundary::Walls;
pub use config::SimulationConfig;
pub use error::{FieldKind, SimError};
pub use fluid::Fluid;
pub use grid::Grid;
pub use integrator::Integrator;
pub use simulation::{FnObserver, NoObserver, RunObserver, Simulation, SimulationResult};
pub use snapshot::{DEFAULT_SNAPSHOT_TARGET, Snapshot, SnapshotSchedule};
pub use stability::{DEFAULT_SAFETY_FACTOR, MAX_REASONABLE_STEPS, TimeStepping, VON_NEUMANN_LIMIT};
pub use state::FieldState;
