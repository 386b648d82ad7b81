use proptest::prelude::*;
use rust_decimal::Decimal;

use olas_types::{BasisPoints, Percent, Timestamp, MAX_WEIGHT_BPS};

proptest! {
    /// Any digits past the second decimal are dropped, never rounded up.
    #[test]
    fn basis_points_floor_sub_hundredths(hundredths in 0u32..=MAX_WEIGHT_BPS, extra in 0u32..10) {
        let extra = if hundredths == MAX_WEIGHT_BPS { 0 } else { extra };
        let value = Decimal::new(i64::from(hundredths) * 10 + i64::from(extra), 3);
        prop_assert_eq!(Percent::new(value).to_basis_points(), BasisPoints::new(hundredths));
    }

    /// Converting basis points to a percentage and back is lossless.
    #[test]
    fn basis_points_survive_percent_conversion(raw in 0u32..=MAX_WEIGHT_BPS) {
        let bps = BasisPoints::new(raw);
        prop_assert_eq!(Percent::from(bps).to_basis_points(), bps);
    }

    /// The next epoch start is the first boundary strictly after `now`.
    #[test]
    fn next_epoch_start_is_next_boundary(now in 0u64..10_000_000_000, epoch in 1u64..2_000_000) {
        let next = Timestamp::new(now).next_epoch_start(epoch).as_secs();
        prop_assert!(next > now);
        prop_assert_eq!(next % epoch, 0);
        prop_assert!(next - now <= epoch);
    }
}
