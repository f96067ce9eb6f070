//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use bigdecimal::BigDecimal;
use ethnum::U256;
use num_bigint::BigInt;
use num_traits::Pow;

use super::fixed_point::u256_to_bigint;
use crate::truncate_ratio;

/// Converts a Q64.96 sqrt price into the displayable price of token 0 in
/// terms of token 1: `(raw / 2^96)^2 * 10^(decimals_0 - decimals_1)`.
///
/// The square and the 2^192 divisor are evaluated exactly (the divisor is
/// rewritten as 5^192 at decimal scale 192) before the final truncation to
/// `AMOUNT_SCALE`. Display-only; never feed the result back into amount
/// math.
pub fn sqrt_price_to_price(sqrt_price: U256, decimals_0: u8, decimals_1: u8) -> BigDecimal {
    let squared = u256_to_bigint(sqrt_price).pow(2u32) * BigInt::from(5u8).pow(192u32);
    let scale = 192 - decimals_0 as i64 + decimals_1 as i64;
    truncate_ratio(&BigDecimal::new(squared, scale))
}

/// Approximate price at a tick, for quick display or sanity checks only.
#[cfg(feature = "floats")]
pub fn tick_index_to_price(tick_index: i32, decimals_0: u8, decimals_1: u8) -> f64 {
    libm::pow(1.0001, tick_index as f64) * libm::pow(10.0, decimals_0 as f64 - decimals_1 as f64)
}

/// Approximate price for a Q64.96 sqrt price, for display only.
#[cfg(feature = "floats")]
pub fn sqrt_price_to_price_f64(sqrt_price: U256, decimals_0: u8, decimals_1: u8) -> f64 {
    let sqrt = sqrt_price.as_f64() / crate::Q96.as_f64();
    sqrt * sqrt * libm::pow(10.0, decimals_0 as f64 - decimals_1 as f64)
}
