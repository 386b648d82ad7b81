//! Replay a vote batch the way the contract applies it.

use crate::allocation::AllocationSet;
use crate::reconcile::VoteOperation;
use crate::user_vote::UserVotes;
use olas_types::{BasisPoints, Nominee, Percent, MAX_WEIGHT_BPS};
use std::collections::BTreeMap;

/// The user's total committed weight after one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapStep {
    pub operation: VoteOperation,
    pub running_total: BasisPoints,
}

/// Result of applying a batch, one operation at a time, to a prior-vote snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapSimulation {
    start: BasisPoints,
    steps: Vec<CapStep>,
}

impl CapSimulation {
    /// Each operation replaces the nominee's previous weight.
    pub fn run(prior: &UserVotes, operations: &[VoteOperation]) -> Self {
        let mut active: BTreeMap<Nominee, u32> = prior
            .iter()
            .map(|(nominee, vote)| (*nominee, vote.committed().get()))
            .collect();
        let start: u32 = active.values().sum();
        let mut total = start;

        let steps = operations
            .iter()
            .map(|op| {
                let previous = active.insert(op.nominee(), op.weight.get()).unwrap_or(0);
                total = total.saturating_sub(previous).saturating_add(op.weight.get());
                CapStep {
                    operation: *op,
                    running_total: BasisPoints::new(total),
                }
            })
            .collect();

        Self {
            start: BasisPoints::new(start),
            steps,
        }
    }

    pub fn start(&self) -> BasisPoints {
        self.start
    }

    pub fn steps(&self) -> &[CapStep] {
        &self.steps
    }

    pub fn final_total(&self) -> BasisPoints {
        self.steps.last().map_or(self.start, |s| s.running_total)
    }

    /// Highest total reached, including the starting state.
    pub fn peak(&self) -> BasisPoints {
        self.steps
            .iter()
            .map(|s| s.running_total)
            .fold(self.start, std::cmp::max)
    }

    /// Index of the first operation after which the total exceeds the cap.
    pub fn first_breach(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.running_total.get() > MAX_WEIGHT_BPS)
    }

    pub fn is_within_cap(&self) -> bool {
        self.first_breach().is_none()
    }
}

/// Basis points lost by flooring each allocation separately.
///
/// `floor(a) + floor(b)` can fall short of `floor(a + b)`, leaving up to one
/// basis point per nominee permanently unallocated. This is reported, not corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundingDrift {
    pub requested: Percent,
    pub allocated: BasisPoints,
    pub lost: BasisPoints,
}

impl RoundingDrift {
    pub fn measure(allocations: &AllocationSet) -> Self {
        let requested = allocations.total();
        let allocated: BasisPoints = allocations.iter().map(|a| a.basis_points()).sum();
        Self {
            requested,
            allocated,
            lost: requested.to_basis_points().saturating_sub(allocated),
        }
    }

    pub fn is_lossless(&self) -> bool {
        self.lost.is_zero()
    }
}
