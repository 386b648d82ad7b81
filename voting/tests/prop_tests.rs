use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use olas_types::{BasisPoints, ChainId, Nominee, NomineeAddress, Percent, MAX_WEIGHT_BPS};
use olas_voting::{
    reconcile, Allocation, AllocationSet, CapSimulation, Retainer, UserVote, UserVotes, VotePlan,
};

fn nominee(seed: u8) -> Nominee {
    Nominee::new(NomineeAddress::from_evm([seed; 20]), ChainId::MAINNET)
}

/// Raw weights in thousandths of a percent, scaled down so they sum to at most 100%.
fn capped_weights(len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=100_000, len).prop_map(|raw| {
        let total: u64 = raw.iter().map(|w| u64::from(*w)).sum();
        if total <= 100_000 {
            raw
        } else {
            raw.iter()
                .map(|w| (u64::from(*w) * 100_000 / total) as u32)
                .collect()
        }
    })
}

fn seeds() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::subsequence((1u8..=10).collect::<Vec<_>>(), 0..=6).prop_shuffle()
}

fn prior_votes() -> impl Strategy<Value = UserVotes> {
    seeds().prop_flat_map(|seeds| {
        let len = seeds.len();
        capped_weights(len).prop_map(move |weights| {
            UserVotes::from_entries(seeds.iter().zip(weights).map(|(s, w)| {
                // Prior powers are whole basis points.
                let power = Percent::new(Decimal::new(i64::from(w / 10), 2));
                (nominee(*s), UserVote::with_current_power(power))
            }))
            .unwrap()
        })
    })
}

fn desired_allocations() -> impl Strategy<Value = AllocationSet> {
    seeds().prop_flat_map(|seeds| {
        let len = seeds.len();
        capped_weights(len).prop_map(move |weights| {
            AllocationSet::new(
                seeds
                    .iter()
                    .zip(weights)
                    .map(|(s, w)| {
                        Allocation::new(nominee(*s), Percent::new(Decimal::new(i64::from(w), 3)))
                    })
                    .collect(),
            )
            .unwrap()
        })
    })
}

proptest! {
    /// No prefix of the batch pushes the user over 10 000 bp.
    #[test]
    fn running_total_never_exceeds_cap(prior in prior_votes(), desired in desired_allocations()) {
        let allocations = Retainer::default().allocate(desired);
        let ops = reconcile(&allocations, &prior);
        let simulation = CapSimulation::run(&prior, &ops);
        prop_assert!(simulation.is_within_cap(), "peak {}", simulation.peak());
        prop_assert!(simulation.final_total().get() <= MAX_WEIGHT_BPS);
    }

    /// Every old or new nominee appears exactly once with the right weight.
    #[test]
    fn nominees_are_conserved(prior in prior_votes(), desired in desired_allocations()) {
        let ops = reconcile(&desired, &prior);

        let emitted: Vec<Nominee> = ops.iter().map(|o| o.nominee()).collect();
        let unique: BTreeSet<Nominee> = emitted.iter().copied().collect();
        prop_assert_eq!(unique.len(), emitted.len());

        let expected: BTreeSet<Nominee> = prior
            .nominees()
            .copied()
            .chain(desired.iter().map(|a| a.nominee))
            .collect();
        prop_assert_eq!(unique, expected);

        for op in &ops {
            match desired.get(&op.nominee()) {
                Some(allocation) => prop_assert_eq!(op.weight, allocation.basis_points()),
                None => prop_assert_eq!(op.weight, BasisPoints::ZERO),
            }
        }
    }

    /// Removals lead; brand-new nominees trail in ascending weight.
    #[test]
    fn batch_ordering_law(prior in prior_votes(), desired in desired_allocations()) {
        let ops = reconcile(&desired, &prior);

        let removals = prior.nominees().filter(|n| !desired.contains(n)).count();
        for op in &ops[..removals] {
            prop_assert!(!desired.contains(&op.nominee()));
        }
        for op in &ops[removals..] {
            prop_assert!(desired.contains(&op.nominee()));
        }

        let fresh: Vec<Percent> = ops
            .iter()
            .filter(|o| !prior.contains(&o.nominee()))
            .filter_map(|o| desired.get(&o.nominee()).map(|a| a.weight))
            .collect();
        prop_assert!(fresh.windows(2).all(|w| w[0] <= w[1]));
    }

    /// The priority order is kept verbatim whenever it respects the cap.
    #[test]
    fn priority_order_kept_when_safe(prior in prior_votes(), desired in desired_allocations()) {
        let plan = VotePlan::build(&desired, &prior);
        let priority = plan.in_priority_order();
        if CapSimulation::run(&prior, &priority).is_within_cap() {
            prop_assert_eq!(reconcile(&desired, &prior), priority);
        } else {
            prop_assert_eq!(reconcile(&desired, &prior), plan.in_cap_safe_order());
        }
    }

    /// Carried-over updates appear in descending prior power within each direction.
    #[test]
    fn carried_over_descending_prior_power(prior in prior_votes(), desired in desired_allocations()) {
        let plan = VotePlan::build(&desired, &prior);
        let powers: Vec<Percent> = plan
            .carried_over
            .iter()
            .map(|c| prior.get(&c.operation.nominee()).map(|v| v.current.power).unwrap_or_default())
            .collect();
        prop_assert!(powers.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Topping up is a no-op on a set that already sums to 100%.
    #[test]
    fn retainer_idempotent(desired in desired_allocations()) {
        let retainer = Retainer::default();
        let once = retainer.allocate(desired);
        prop_assert_eq!(once.total(), Percent::HUNDRED);
        prop_assert_eq!(retainer.allocate(once.clone()), once);
    }
}
