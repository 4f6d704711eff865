//! Error types returned by the solver library.

use thiserror::Error;

/// Errors produced while constructing an [`Instance`](crate::types::instance::Instance)
/// or running the solver over it.
#[derive(Debug, Error)]
pub enum SolverError {
    /// `slot_starts` was not strictly ascending.
    #[error("slot_starts must be strictly ascending, but entry {index} ({value}) is not greater than the previous entry")]
    SlotStartsNotAscending { index: usize, value: i64 },

    /// A gap between consecutive slots was neither 30 nor 60 minutes.
    #[error("slot cadence between index {index} and {next} is {gap_minutes} minutes, expected 30 or 60")]
    NonUniformSlotCadence {
        index: usize,
        next: usize,
        gap_minutes: i64,
    },

    /// An `open` row's length did not match `slot_starts`.
    #[error("checkpoint '{name}' has {got} opening entries, expected {expected}")]
    OpeningsLengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// `finish_open` did not match `slot_starts` in length.
    #[error("finish_open has {got} entries, expected {expected}")]
    FinishOpeningsLengthMismatch { expected: usize, got: usize },

    /// A name in `excluded` did not match any known checkpoint.
    #[error("excluded checkpoint '{0}' is not a known checkpoint name")]
    UnknownExcludedCheckpoint(String),

    /// There were zero intermediate checkpoints.
    #[error("instance has no intermediate checkpoints")]
    NoCheckpoints,

    /// Too many intermediate checkpoints for the bitmask DP to address.
    #[error("instance has {0} checkpoints, which exceeds the supported maximum of {max}", max = crate::defaults::MAX_CHECKPOINTS)]
    TooManyCheckpoints(usize),

    /// The minimum-speed search never found a speed at which every
    /// non-excluded checkpoint could be visited, even at the upper bound.
    #[error("no walking speed up to {max_kmh} km/h visits every checkpoint")]
    CannotVisitAll { max_kmh: f64 },
}

/// Convenience alias for fallible solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
