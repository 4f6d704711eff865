//! The event instance: checkpoint names, slot schedule and distance table.

use serde::{Deserialize, Serialize};

use crate::defaults::MAX_CHECKPOINTS;
use crate::error::{SolverError, SolverResult};

/// The reserved name of the start node.
pub const START_NAME: &str = "Start";
/// The reserved name of the finish node.
pub const FINISH_NAME: &str = "Finish";

/// Straight distance and height gain between two nodes, directional:
/// `(i, j)` need not equal `(j, i)` since ascent is not symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub km: f64,
    pub height_gain_m: f64,
}

impl DistanceRecord {
    /// A record for a pair of nodes with no direct path between them.
    pub fn unreachable() -> Self {
        Self {
            km: f64::INFINITY,
            height_gain_m: 0.0,
        }
    }
}

/// The fixed event schedule and geometry, validated once at construction.
///
/// Intermediate checkpoints occupy indices `0..N`. `Start` and `Finish` are
/// reserved and occupy indices `N` and `N+1` respectively in every matrix
/// that spans the full node space (`distances`).
#[derive(Debug, Clone)]
pub struct Instance {
    /// Names of the `N` intermediate checkpoints, in index order.
    pub checkpoint_names: Vec<String>,
    /// Ascending minute-of-day slot boundaries, length `S`.
    pub slot_starts: Vec<i64>,
    /// `open[i][s]`: whether intermediate `i` accepts visitors in slot `s`.
    pub open: Vec<Vec<bool>>,
    /// `finish_open[s]`: whether Finish accepts arrivals in slot `s`.
    pub finish_open: Vec<bool>,
    /// Distance/height-gain table over the full `(N+2) x (N+2)` node space.
    pub distances: Vec<Vec<DistanceRecord>>,
    pub start_minute: i64,
    pub end_minute: i64,
}

impl Instance {
    /// Validate and construct an instance. See §3/§9 of the design for the
    /// exact invariants enforced here.
    pub fn new(
        checkpoint_names: Vec<String>,
        slot_starts: Vec<i64>,
        open: Vec<Vec<bool>>,
        finish_open: Vec<bool>,
        distances: Vec<Vec<DistanceRecord>>,
        start_minute: i64,
        end_minute: i64,
    ) -> SolverResult<Self> {
        let n = checkpoint_names.len();
        if n == 0 {
            return Err(SolverError::NoCheckpoints);
        }
        if n > MAX_CHECKPOINTS {
            return Err(SolverError::TooManyCheckpoints(n));
        }

        for w in slot_starts.windows(2).enumerate() {
            let (i, pair) = w;
            let (a, b) = (pair[0], pair[1]);
            if b <= a {
                return Err(SolverError::SlotStartsNotAscending { index: i + 1, value: b });
            }
            let gap = b - a;
            if gap != 30 && gap != 60 {
                return Err(SolverError::NonUniformSlotCadence {
                    index: i,
                    next: i + 1,
                    gap_minutes: gap,
                });
            }
        }

        let s = slot_starts.len();
        for (name, row) in checkpoint_names.iter().zip(open.iter()) {
            if row.len() != s {
                return Err(SolverError::OpeningsLengthMismatch {
                    name: name.clone(),
                    expected: s,
                    got: row.len(),
                });
            }
        }
        if finish_open.len() != s {
            return Err(SolverError::FinishOpeningsLengthMismatch {
                expected: s,
                got: finish_open.len(),
            });
        }

        Ok(Self {
            checkpoint_names,
            slot_starts,
            open,
            finish_open,
            distances,
            start_minute,
            end_minute,
        })
    }

    /// Validate that every name in `excluded` is a known checkpoint.
    pub fn validate_excluded<'a>(&self, excluded: impl Iterator<Item = &'a String>) -> SolverResult<()> {
        for name in excluded {
            if !self.checkpoint_names.iter().any(|n| n == name) {
                return Err(SolverError::UnknownExcludedCheckpoint(name.clone()));
            }
        }
        Ok(())
    }

    /// Number of intermediate checkpoints.
    pub fn n(&self) -> usize {
        self.checkpoint_names.len()
    }

    /// Index reserved for Start within `distances`.
    pub fn start_index(&self) -> usize {
        self.n()
    }

    /// Index reserved for Finish within `distances`.
    pub fn finish_index(&self) -> usize {
        self.n() + 1
    }

    /// Total node count, `N + 2`.
    pub fn all(&self) -> usize {
        self.n() + 2
    }

    /// Resolve a node index to its display name (`"Start"`, `"Finish"`, or a checkpoint name).
    pub fn node_name(&self, index: usize) -> &str {
        if index == self.start_index() {
            START_NAME
        } else if index == self.finish_index() {
            FINISH_NAME
        } else {
            &self.checkpoint_names[index]
        }
    }
}

/// The on-disk shape of an instance file: the same fields as
/// [`Instance::new`]'s arguments, deserialized from JSON and validated on
/// conversion.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceFile {
    pub checkpoint_names: Vec<String>,
    pub slot_starts: Vec<i64>,
    pub open: Vec<Vec<bool>>,
    pub finish_open: Vec<bool>,
    pub distances: Vec<Vec<DistanceRecord>>,
    pub start_minute: i64,
    pub end_minute: i64,
}

impl InstanceFile {
    pub fn into_instance(self) -> SolverResult<Instance> {
        Instance::new(
            self.checkpoint_names,
            self.slot_starts,
            self.open,
            self.finish_open,
            self.distances,
            self.start_minute,
            self.end_minute,
        )
    }
}
