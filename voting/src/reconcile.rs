//! Vote reconciliation: turn a desired allocation plus the user's prior votes
//! into an ordered batch of weight-set operations.
//!
//! The contract applies the batch sequentially and rejects it if the user's
//! total weight exceeds 10 000 bp after any single operation. Capacity is
//! therefore freed before it is spent:
//!
//! 1. **Removals**: prior nominees absent from the new allocation are zeroed,
//!    in descending order of prior power.
//! 2. **Carried over**: prior nominees that stay get their new weight, in
//!    descending order of prior power.
//! 3. **Brand new**: nominees without a prior vote, in ascending order of weight.
//!
//! Carried-over updates that *raise* a weight can still overshoot the cap when
//! they precede a larger decrease further down the list. When the ordering above
//! would overshoot, decreases are moved ahead of increases within the
//! carried-over group; each part keeps its descending-prior-power order.

use crate::allocation::{Allocation, AllocationSet};
use crate::simulate::CapSimulation;
use crate::user_vote::UserVotes;
use olas_types::{BasisPoints, ChainId, Nominee, NomineeAddress};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One `(nominee, chainId, weight)` entry of a `voteForNomineeWeights` batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOperation {
    pub address: NomineeAddress,
    pub chain_id: ChainId,
    pub weight: BasisPoints,
}

impl VoteOperation {
    pub fn new(nominee: Nominee, weight: BasisPoints) -> Self {
        Self {
            address: nominee.address,
            chain_id: nominee.chain_id,
            weight,
        }
    }

    pub fn nominee(&self) -> Nominee {
        Nominee::new(self.address, self.chain_id)
    }
}

/// An update to a nominee the user already voted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarriedOver {
    pub operation: VoteOperation,
    pub previous: BasisPoints,
}

impl CarriedOver {
    pub fn is_increase(&self) -> bool {
        self.operation.weight > self.previous
    }
}

/// Operations grouped by how they relate to the prior votes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VotePlan {
    pub removals: Vec<VoteOperation>,
    pub carried_over: Vec<CarriedOver>,
    pub brand_new: Vec<VoteOperation>,
}

impl VotePlan {
    pub fn build(allocations: &AllocationSet, prior: &UserVotes) -> Self {
        let mut removals = Vec::new();
        let mut carried_over = Vec::new();

        for (nominee, vote) in prior.by_descending_power() {
            match allocations.get(&nominee) {
                Some(allocation) => carried_over.push(CarriedOver {
                    operation: VoteOperation::new(nominee, allocation.basis_points()),
                    previous: vote.committed(),
                }),
                None => removals.push(VoteOperation::new(nominee, BasisPoints::ZERO)),
            }
        }

        // Stable sort: equal weights keep their input order.
        let mut fresh: Vec<&Allocation> = allocations
            .iter()
            .filter(|a| !prior.contains(&a.nominee))
            .collect();
        fresh.sort_by(|a, b| a.weight.cmp(&b.weight));
        let brand_new = fresh
            .into_iter()
            .map(|a| VoteOperation::new(a.nominee, a.basis_points()))
            .collect();

        Self {
            removals,
            carried_over,
            brand_new,
        }
    }

    pub fn len(&self) -> usize {
        self.removals.len() + self.carried_over.len() + self.brand_new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removals, then carried-over updates, then brand-new nominees.
    pub fn in_priority_order(&self) -> Vec<VoteOperation> {
        let mut ops = Vec::with_capacity(self.len());
        ops.extend_from_slice(&self.removals);
        ops.extend(self.carried_over.iter().map(|c| c.operation));
        ops.extend_from_slice(&self.brand_new);
        ops
    }

    /// As [`Self::in_priority_order`], but carried-over decreases precede increases.
    ///
    /// The running total falls monotonically through removals and decreases, then
    /// rises monotonically to the final allocation, which is itself within the cap.
    pub fn in_cap_safe_order(&self) -> Vec<VoteOperation> {
        let (increases, non_increases): (Vec<&CarriedOver>, Vec<&CarriedOver>) =
            self.carried_over.iter().partition(|c| c.is_increase());

        let mut ops = Vec::with_capacity(self.len());
        ops.extend_from_slice(&self.removals);
        ops.extend(non_increases.into_iter().map(|c| c.operation));
        ops.extend(increases.into_iter().map(|c| c.operation));
        ops.extend_from_slice(&self.brand_new);
        ops
    }
}

/// Produce the batch to submit for `allocations`, given the user's `prior` votes.
///
/// `allocations` should already be topped up by [`crate::Retainer::allocate`].
pub fn reconcile(allocations: &AllocationSet, prior: &UserVotes) -> Vec<VoteOperation> {
    let plan = VotePlan::build(allocations, prior);
    debug!(
        removals = plan.removals.len(),
        carried_over = plan.carried_over.len(),
        brand_new = plan.brand_new.len(),
        "reconciled vote plan"
    );

    let ordered = plan.in_priority_order();
    let simulation = CapSimulation::run(prior, &ordered);
    if let Some(step) = simulation.first_breach() {
        debug!(
            step,
            peak = %simulation.peak(),
            "priority order exceeds weight cap, moving carried-over decreases first"
        );
        return plan.in_cap_safe_order();
    }
    ordered
}
