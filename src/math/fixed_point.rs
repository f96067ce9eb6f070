//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use bigdecimal::{BigDecimal, RoundingMode};
use ethnum::U256;
use num_bigint::{BigInt, Sign};
use num_traits::Pow;

use crate::{CoreError, AMOUNT_SCALE, ARITHMETIC_OVERFLOW, INVALID_RATIO, Q96};

pub(crate) fn u256_to_bigint(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes())
}

pub(crate) fn bigint_to_u256(value: &BigInt) -> Result<U256, CoreError> {
    let (_, bytes) = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(U256::from_be_bytes(buf))
}

/// Converts a raw Q64.96 sqrt price into its exact decimal ratio.
///
/// `raw / 2^96` is rewritten as `raw * 5^96 / 10^96`, which terminates in
/// decimal, so the returned value carries no division error at all. Callers
/// narrow it for display with `truncate_ratio`.
pub fn sqrt_price_to_ratio(sqrt_price: U256) -> BigDecimal {
    BigDecimal::new(u256_to_bigint(sqrt_price) * BigInt::from(5u8).pow(96u32), 96)
}

/// Converts a decimal sqrt price ratio back into raw Q64.96, truncating any
/// fraction below the last fixed-point bit.
///
/// # Returns
/// - `INVALID_RATIO` for negative input, `ARITHMETIC_OVERFLOW` when the
///   scaled value does not fit 256 bits.
pub fn ratio_to_sqrt_price(ratio: &BigDecimal) -> Result<U256, CoreError> {
    if ratio.sign() == Sign::Minus {
        return Err(INVALID_RATIO);
    }
    let scaled = (ratio * BigDecimal::from(u256_to_bigint(Q96))).with_scale_round(0, RoundingMode::Down);
    let (int, _) = scaled.into_bigint_and_exponent();
    bigint_to_u256(&int)
}

/// Narrows a ratio or amount to `AMOUNT_SCALE` fractional digits.
/// Always truncates toward zero; conservative floor semantics for amounts.
pub fn truncate_ratio(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(AMOUNT_SCALE, RoundingMode::Down)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tick_index_to_sqrt_price;
    use core::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_ratio_at_unit_price() {
        assert_eq!(sqrt_price_to_ratio(Q96), BigDecimal::from(1));
        assert_eq!(sqrt_price_to_ratio(Q96 * U256::new(2)), BigDecimal::from(2));
    }

    #[test]
    fn test_ratio_is_exact() {
        // 3 * 2^96 / 2 => 1.5 exactly
        let raw = Q96 * U256::new(3) / U256::new(2);
        assert_eq!(sqrt_price_to_ratio(raw), dec("1.5"));
    }

    #[test]
    fn test_ratio_exact_digits_at_tick() {
        let raw = tick_index_to_sqrt_price(150).unwrap();
        assert_eq!(truncate_ratio(&sqrt_price_to_ratio(raw)), dec("1.007527817646717795"));

        let raw = tick_index_to_sqrt_price(-100).unwrap();
        assert_eq!(truncate_ratio(&sqrt_price_to_ratio(raw)), dec("0.995012727929250903"));
    }

    #[test]
    fn test_ratio_monotonic() {
        let mut prev = sqrt_price_to_ratio(U256::ZERO);
        for step in 1u128..50 {
            let current = sqrt_price_to_ratio(U256::new(step * 12345678901234567890));
            assert!(current > prev);
            prev = current;
        }
    }

    #[test]
    fn test_ratio_round_trip() {
        for raw in [
            U256::ONE,
            U256::new(4295128739),
            Q96,
            Q96 * U256::new(1000) + U256::new(17),
            U256::from_str("1461446703485210103287273052203988822378723970342").unwrap(),
        ] {
            let ratio = sqrt_price_to_ratio(raw);
            assert_eq!(ratio_to_sqrt_price(&ratio), Ok(raw));
        }
    }

    #[test]
    fn test_negative_ratio_rejected() {
        assert_eq!(ratio_to_sqrt_price(&dec("-1")), Err(INVALID_RATIO));
    }

    #[test]
    fn test_ratio_overflow_rejected() {
        // 2^160 * 2^96 == 2^256, one past the top of U256.
        let ratio = BigDecimal::from(BigInt::from(2u8).pow(160u32));
        assert_eq!(ratio_to_sqrt_price(&ratio), Err(ARITHMETIC_OVERFLOW));
    }

    #[test]
    fn test_truncates_never_rounds() {
        assert_eq!(truncate_ratio(&dec("1.9999999999999999999")), dec("1.999999999999999999"));
        assert_eq!(truncate_ratio(&dec("0.0000000000000000015")), dec("0.000000000000000001"));
    }
}
