//! Stay pricing.
//!
//! Free cancellation carries a flat 20% surcharge over the base rate. Amounts
//! are exact decimals: the surcharge is applied as an integer percentage and
//! the total is rounded half-to-even to the currency minor unit, so `1000 x 3`
//! nights with free cancellation is exactly `3600`.

use rust_decimal::{Decimal, RoundingStrategy};

use super::room::CancellationPolicy;

/// Percentage of the base total charged for a free-cancellation stay.
pub const FREE_CANCELLATION_RATE_PERCENT: u32 = 120;

/// Decimal places kept on a total.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Total price for `nights` at `base_price` per night.
///
/// `nights >= 1` is enforced by the request contract, not here.
pub fn calculate_price(base_price: Decimal, nights: u32, policy: CancellationPolicy) -> Decimal {
    let base_total = base_price * Decimal::from(nights);
    let total = match policy {
        CancellationPolicy::FreeCancellation => {
            base_total * Decimal::from(FREE_CANCELLATION_RATE_PERCENT) / Decimal::ONE_HUNDRED
        }
        CancellationPolicy::NonRefundable => base_total,
    };
    total.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), 3, CancellationPolicy::FreeCancellation, dec!(3600))]
    #[case(dec!(1000), 3, CancellationPolicy::NonRefundable, dec!(3000))]
    #[case(dec!(1500), 1, CancellationPolicy::FreeCancellation, dec!(1800))]
    #[case(dec!(0), 7, CancellationPolicy::FreeCancellation, dec!(0))]
    #[case(dec!(2499), 2, CancellationPolicy::NonRefundable, dec!(4998))]
    #[case(dec!(333), 1, CancellationPolicy::FreeCancellation, dec!(399.6))]
    fn prices_known_stays(
        #[case] base_price: Decimal,
        #[case] nights: u32,
        #[case] policy: CancellationPolicy,
        #[case] expected: Decimal,
    ) {
        assert_eq!(calculate_price(base_price, nights, policy), expected);
    }

    #[rstest]
    #[case(dec!(10.005), CancellationPolicy::NonRefundable, dec!(10.00))]
    #[case(dec!(10.015), CancellationPolicy::NonRefundable, dec!(10.02))]
    #[case(dec!(0.125), CancellationPolicy::NonRefundable, dec!(0.12))]
    #[case(dec!(0.135), CancellationPolicy::NonRefundable, dec!(0.14))]
    #[case(dec!(0.0104), CancellationPolicy::NonRefundable, dec!(0.01))]
    // 8.3375 * 1.2 = 10.005
    #[case(dec!(8.3375), CancellationPolicy::FreeCancellation, dec!(10.00))]
    fn rounds_half_to_even_at_two_decimals(
        #[case] base_price: Decimal,
        #[case] policy: CancellationPolicy,
        #[case] expected: Decimal,
    ) {
        let total = calculate_price(base_price, 1, policy);
        assert_eq!(total, expected);
        assert!(total.scale() <= MINOR_UNIT_SCALE);
    }

    proptest! {
        #[test]
        fn free_cancellation_adds_twenty_percent(base in 0u32..1_000_000, nights in 1u32..366) {
            let total = calculate_price(Decimal::from(base), nights, CancellationPolicy::FreeCancellation);
            let expected = Decimal::from(u64::from(base) * u64::from(nights) * 6) / Decimal::from(5);
            prop_assert_eq!(total, expected);
        }

        #[test]
        fn non_refundable_is_base_times_nights(base in 0u32..1_000_000, nights in 1u32..366) {
            let total = calculate_price(Decimal::from(base), nights, CancellationPolicy::NonRefundable);
            prop_assert_eq!(total, Decimal::from(u64::from(base) * u64::from(nights)));
        }
    }
}
