//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use bigdecimal::BigDecimal;
use ethnum::U256;
use num_bigint::BigInt;
use num_traits::One;

use crate::{
    sqrt_price_to_ratio, truncate_ratio, CoreError, PositionAmounts, PositionStatus, INVALID_SQRT_PRICE,
};

/// Classifies where the current price sits relative to a position's
/// boundary sqrt prices. Boundaries may arrive in either order.
pub fn position_status(current_sqrt_price: U256, sqrt_price_1: U256, sqrt_price_2: U256) -> PositionStatus {
    let (sqrt_price_lower, sqrt_price_upper) = if sqrt_price_1 <= sqrt_price_2 {
        (sqrt_price_1, sqrt_price_2)
    } else {
        (sqrt_price_2, sqrt_price_1)
    };
    if sqrt_price_1 == sqrt_price_2 {
        PositionStatus::Invalid
    } else if current_sqrt_price <= sqrt_price_lower {
        PositionStatus::PriceBelowRange
    } else if current_sqrt_price >= sqrt_price_upper {
        PositionStatus::PriceAboveRange
    } else {
        PositionStatus::PriceInRange
    }
}

/// Check if a position is in range.
/// When a position is in range it holds both assets and earns fees.
pub fn is_position_in_range(current_sqrt_price: U256, sqrt_price_1: U256, sqrt_price_2: U256) -> bool {
    position_status(current_sqrt_price, sqrt_price_1, sqrt_price_2) == PositionStatus::PriceInRange
}

/// Computes the token amounts a position of the given liquidity holds
/// between two boundary sqrt prices.
///
/// All three sqrt prices are converted to exact decimal ratios before the
/// constant-liquidity range formulas run, then each amount is rescaled by
/// its token's decimals and truncated down to `AMOUNT_SCALE`:
///
/// ```text
/// amount_0 = L * (upper - current) / (current * upper) / 10^decimals_0
/// amount_1 = L * (current - lower)                     / 10^decimals_1
/// ```
///
/// When the current price lies outside the range, the nearest boundary is
/// substituted for it, so the position resolves to a single asset exactly
/// as the range formulas degenerate. Boundary prices supplied in inverted
/// order are swapped before use.
///
/// # Parameters
/// - `liquidity` - The position's liquidity magnitude.
/// - `current_sqrt_price` - The pool's current sqrt price, Q64.96.
/// - `sqrt_price_1` - One boundary sqrt price, Q64.96.
/// - `sqrt_price_2` - The other boundary sqrt price, Q64.96.
/// - `decimals_0` - Decimal places of token 0.
/// - `decimals_1` - Decimal places of token 1.
///
/// # Returns
/// - Both amounts, non-negative; `(0, 0)` for zero liquidity. Fails with
///   `INVALID_SQRT_PRICE` when any sqrt price is zero (uninitialized).
pub fn position_amounts(
    liquidity: u128,
    current_sqrt_price: U256,
    sqrt_price_1: U256,
    sqrt_price_2: U256,
    decimals_0: u8,
    decimals_1: u8,
) -> Result<PositionAmounts, CoreError> {
    if current_sqrt_price == U256::ZERO || sqrt_price_1 == U256::ZERO || sqrt_price_2 == U256::ZERO {
        return Err(INVALID_SQRT_PRICE);
    }
    let (sqrt_price_lower, sqrt_price_upper) = if sqrt_price_2 < sqrt_price_1 {
        (sqrt_price_2, sqrt_price_1)
    } else {
        (sqrt_price_1, sqrt_price_2)
    };
    let pinned_sqrt_price = current_sqrt_price.clamp(sqrt_price_lower, sqrt_price_upper);

    let lower = sqrt_price_to_ratio(sqrt_price_lower);
    let upper = sqrt_price_to_ratio(sqrt_price_upper);
    let current = sqrt_price_to_ratio(pinned_sqrt_price);
    let liquidity = BigDecimal::from(liquidity);

    let amount_0 = &liquidity * (&upper - &current) / (&current * &upper) * pow10_shift(decimals_0);
    let amount_1 = &liquidity * (&current - &lower) * pow10_shift(decimals_1);

    Ok(PositionAmounts {
        amount_0: truncate_ratio(&amount_0),
        amount_1: truncate_ratio(&amount_1),
    })
}

// 10^-decimals, exact.
fn pow10_shift(decimals: u8) -> BigDecimal {
    BigDecimal::new(BigInt::one(), decimals as i64)
}
