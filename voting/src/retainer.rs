//! Retainer top-up: unallocated voting power is directed to the retainer
//! nominee so every submitted allocation sums to exactly 100%.

use crate::allocation::{Allocation, AllocationMetadata, AllocationSet};
use olas_types::{ChainId, Nominee, NomineeAddress, Percent};
use tracing::debug;

/// The Olas retainer contract on Ethereum mainnet, left-padded to 32 bytes.
pub const MAINNET_RETAINER: Nominee = Nominee::new(
    NomineeAddress::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa0, 0xda, 0x53, 0x44, 0x7c, 0x0f, 0x6c, 0x49, 0x87,
        0x96, 0x4d, 0x84, 0x63, 0xda, 0x7e, 0x66, 0x28, 0xb3, 0x0f, 0x82,
    ]),
    ChainId::MAINNET,
);

/// The sentinel nominee that absorbs unallocated weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retainer {
    nominee: Nominee,
}

impl Retainer {
    pub fn new(nominee: Nominee) -> Self {
        Self { nominee }
    }

    pub fn nominee(&self) -> Nominee {
        self.nominee
    }

    pub fn is_retainer(&self, nominee: &Nominee) -> bool {
        &self.nominee == nominee
    }

    /// Top `allocations` up to 100% with a retainer entry.
    ///
    /// A set that already sums to 100% is returned unchanged. If the retainer is
    /// already present its weight absorbs the shortfall, so applying this twice
    /// yields the same set as applying it once.
    pub fn allocate(&self, allocations: AllocationSet) -> AllocationSet {
        let total = allocations.total();
        if total >= Percent::HUNDRED {
            return allocations;
        }

        let shortfall = Percent::HUNDRED - total;
        debug!(retainer = %self.nominee, %shortfall, "allocating unassigned weight to retainer");

        let mut entries = allocations.into_vec();
        match entries.iter_mut().find(|a| self.is_retainer(&a.nominee)) {
            Some(existing) => existing.weight = existing.weight + shortfall,
            None => entries.push(
                Allocation::new(self.nominee, shortfall).with_metadata(AllocationMetadata {
                    name: "Retainer".to_string(),
                    description: "Unallocated voting power".to_string(),
                }),
            ),
        }
        AllocationSet::from_validated(entries)
    }
}

impl Default for Retainer {
    fn default() -> Self {
        Self::new(MAINNET_RETAINER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn nominee(seed: u8) -> Nominee {
        Nominee::new(NomineeAddress::from_evm([seed; 20]), ChainId::MAINNET)
    }

    fn set(entries: &[(u8, rust_decimal::Decimal)]) -> AllocationSet {
        AllocationSet::new(
            entries
                .iter()
                .map(|(seed, w)| Allocation::new(nominee(*seed), Percent::new(*w)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn mainnet_retainer_matches_published_address() {
        assert_eq!(
            MAINNET_RETAINER.address,
            "0xa0DA53447C0f6C4987964d8463da7e6628B30f82"
                .parse::<NomineeAddress>()
                .unwrap()
        );
    }

    #[test]
    fn full_allocation_is_unchanged() {
        let input = set(&[(1, dec!(100))]);
        let output = Retainer::default().allocate(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn shortfall_is_appended() {
        let output = Retainer::default().allocate(set(&[(1, dec!(30)), (2, dec!(60))]));
        assert_eq!(output.len(), 3);
        let last = output.as_slice().last().unwrap();
        assert_eq!(last.nominee, MAINNET_RETAINER);
        assert_eq!(last.weight, Percent::new(dec!(10)));
        assert_eq!(output.total(), Percent::HUNDRED);
    }

    #[test]
    fn empty_allocation_goes_entirely_to_retainer() {
        let output = Retainer::default().allocate(AllocationSet::empty());
        assert_eq!(output.len(), 1);
        assert_eq!(output.total(), Percent::HUNDRED);
    }

    #[test]
    fn fractional_shortfall_is_exact() {
        let output = Retainer::default().allocate(set(&[(1, dec!(33.33)), (2, dec!(33.33))]));
        assert_eq!(
            output.get(&MAINNET_RETAINER).unwrap().weight,
            Percent::new(dec!(33.34))
        );
    }

    #[test]
    fn existing_retainer_entry_absorbs_shortfall() {
        let retainer = Retainer::new(nominee(9));
        let output = retainer.allocate(set(&[(1, dec!(50)), (9, dec!(20))]));
        assert_eq!(output.len(), 2);
        assert_eq!(output.get(&nominee(9)).unwrap().weight, Percent::new(dec!(50)));
        assert!(retainer.is_retainer(&nominee(9)));
        assert!(!retainer.is_retainer(&nominee(1)));
    }

    #[test]
    fn allocating_twice_is_stable() {
        let retainer = Retainer::default();
        let once = retainer.allocate(set(&[(1, dec!(40))]));
        let twice = retainer.allocate(once.clone());
        assert_eq!(once, twice);
    }
}
