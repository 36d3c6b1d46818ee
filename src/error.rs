use std::fmt;

use thiserror::Error;

/// Which of the two scalar fields produced an offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Velocity,
    Temperature,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Velocity => write!(f, "velocity"),
            FieldKind::Temperature => write!(f, "temperature"),
        }
    }
}

/// Fatal errors raised by the solver.
///
/// Both kinds are deterministic given the same configuration, so the caller
/// should not retry: a `Configuration` error means no run was started, and a
/// `NumericalInstability` error means the run stopped after its last valid
/// step (snapshots emitted up to that point remain valid).
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid or degenerate input, detected before any stepping begins.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A non-finite value appeared in a field after a step.
    ///
    /// `step` is the zero-based index of the step that produced it. This
    /// means the scheme was run outside its stability bound (safety factor
    /// above 0.5) or with a pathological material.
    #[error("non-finite {field} at node {node} after step {step}")]
    NumericalInstability {
        field: FieldKind,
        node: usize,
        step: usize,
    },
}
