//! Desired vote allocations, as collected from the voter.

use crate::error::VoteError;
use olas_types::{BasisPoints, Nominee, Percent};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display data attached to an allocation. Not sent on-chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A user's desired weight for one nominee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(flatten)]
    pub nominee: Nominee,
    pub weight: Percent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AllocationMetadata>,
}

impl Allocation {
    pub fn new(nominee: Nominee, weight: Percent) -> Self {
        Self {
            nominee,
            weight,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: AllocationMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn basis_points(&self) -> BasisPoints {
        self.weight.to_basis_points()
    }
}

/// A validated allocation: unique nominees, each weight in `0..=100`, total `<= 100`.
///
/// Input order is preserved; it breaks ties when new nominees are ordered by weight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Allocation>", into = "Vec<Allocation>")]
pub struct AllocationSet {
    allocations: Vec<Allocation>,
}

impl AllocationSet {
    pub fn new(allocations: Vec<Allocation>) -> Result<Self, VoteError> {
        let mut seen = HashSet::with_capacity(allocations.len());
        for allocation in &allocations {
            if allocation.weight.is_negative() {
                return Err(VoteError::NegativeWeight {
                    nominee: allocation.nominee,
                    weight: allocation.weight,
                });
            }
            if allocation.weight > Percent::HUNDRED {
                return Err(VoteError::WeightAboveMax {
                    nominee: allocation.nominee,
                    weight: allocation.weight,
                });
            }
            if !seen.insert(allocation.nominee) {
                return Err(VoteError::DuplicateNominee(allocation.nominee));
            }
        }

        let total: Percent = allocations.iter().map(|a| a.weight).sum();
        if total > Percent::HUNDRED {
            return Err(VoteError::TotalExceedsMax { total });
        }

        Ok(Self { allocations })
    }

    /// Skips validation. Callers must uphold the set invariants.
    pub(crate) fn from_validated(allocations: Vec<Allocation>) -> Self {
        Self { allocations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Percent {
        self.allocations.iter().map(|a| a.weight).sum()
    }

    pub fn get(&self, nominee: &Nominee) -> Option<&Allocation> {
        self.allocations.iter().find(|a| &a.nominee == nominee)
    }

    pub fn contains(&self, nominee: &Nominee) -> bool {
        self.get(nominee).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.allocations.iter()
    }

    pub fn as_slice(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn into_vec(self) -> Vec<Allocation> {
        self.allocations
    }
}

impl TryFrom<Vec<Allocation>> for AllocationSet {
    type Error = VoteError;

    fn try_from(allocations: Vec<Allocation>) -> Result<Self, Self::Error> {
        Self::new(allocations)
    }
}

impl From<AllocationSet> for Vec<Allocation> {
    fn from(set: AllocationSet) -> Self {
        set.allocations
    }
}

impl<'a> IntoIterator for &'a AllocationSet {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.allocations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olas_types::{ChainId, NomineeAddress};
    use rust_decimal_macros::dec;

    fn nominee(seed: u8) -> Nominee {
        Nominee::new(NomineeAddress::from_evm([seed; 20]), ChainId::MAINNET)
    }

    fn alloc(seed: u8, weight: rust_decimal::Decimal) -> Allocation {
        Allocation::new(nominee(seed), Percent::new(weight))
    }

    #[test]
    fn accepts_partial_allocation() {
        let set = AllocationSet::new(vec![alloc(1, dec!(30)), alloc(2, dec!(60))]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.total(), Percent::new(dec!(90)));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = AllocationSet::new(vec![alloc(1, dec!(-1))]).unwrap_err();
        assert!(matches!(err, VoteError::NegativeWeight { .. }));
    }

    #[test]
    fn rejects_single_weight_above_hundred() {
        let err = AllocationSet::new(vec![alloc(1, dec!(100.01))]).unwrap_err();
        assert!(matches!(err, VoteError::WeightAboveMax { .. }));
    }

    #[test]
    fn rejects_total_above_hundred() {
        let err = AllocationSet::new(vec![alloc(1, dec!(60)), alloc(2, dec!(40.5))]).unwrap_err();
        assert_eq!(
            err,
            VoteError::TotalExceedsMax {
                total: Percent::new(dec!(100.5))
            }
        );
    }

    #[test]
    fn rejects_duplicate_nominee() {
        let err = AllocationSet::new(vec![alloc(1, dec!(10)), alloc(1, dec!(20))]).unwrap_err();
        assert_eq!(err, VoteError::DuplicateNominee(nominee(1)));
    }

    #[test]
    fn same_address_on_different_chains_is_not_a_duplicate() {
        let mut other_chain = alloc(1, dec!(20));
        other_chain.nominee.chain_id = ChainId::new(100);
        assert!(AllocationSet::new(vec![alloc(1, dec!(10)), other_chain]).is_ok());
    }

    #[test]
    fn deserializes_ui_shape() {
        let json = r#"[{
            "address": "0xa0DA53447C0f6C4987964d8463da7e6628B30f82",
            "chainId": 8453,
            "weight": 12.345,
            "metadata": { "name": "Pearl", "description": "Staking" }
        }]"#;
        let set: AllocationSet = serde_json::from_str(json).unwrap();
        let first = &set.as_slice()[0];
        assert_eq!(first.nominee.chain_id, ChainId::new(8453));
        assert_eq!(first.basis_points(), BasisPoints::new(1234));
        assert_eq!(first.metadata.as_ref().unwrap().name, "Pearl");
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = r#"[
            {"address": "0xa0DA53447C0f6C4987964d8463da7e6628B30f82", "chainId": 1, "weight": 70},
            {"address": "0xa0DA53447C0f6C4987964d8463da7e6628B30f82", "chainId": 1, "weight": 10}
        ]"#;
        assert!(serde_json::from_str::<AllocationSet>(json).is_err());
    }
}
