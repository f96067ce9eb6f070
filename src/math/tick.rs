//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use ethnum::U256;

use crate::{
    CoreError, TickRange, INVALID_TICK_SPACING, MAX_SQRT_PRICE, MAX_TICK_INDEX, MIN_SQRT_PRICE, MIN_TICK_INDEX,
    SQRT_PRICE_OUT_OF_BOUNDS, TICK_INDEX_OUT_OF_BOUNDS,
};

/// Per-bit multipliers for the tick-to-sqrt-price decomposition.
/// Entry `i` is `1 / sqrt(1.0001)^(2^i)` in Q128.128.
const SQRT_PRICE_MULTIPLIERS: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// Computes `sqrt(1.0001^tick) * 2^96` for a given tick index.
///
/// The tick magnitude is decomposed bit by bit and folded against the
/// precomputed Q128.128 multipliers; a positive tick takes the reciprocal
/// of the accumulated ratio. Results are bit-exact against the published
/// reference vectors, which downstream amount math depends on.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the price tick.
///
/// # Returns
/// - The Q64.96 sqrt price as `U256`, or `TICK_INDEX_OUT_OF_BOUNDS` when
///   the tick lies outside `[MIN_TICK_INDEX, MAX_TICK_INDEX]`.
pub fn tick_index_to_sqrt_price(tick_index: i32) -> Result<U256, CoreError> {
    if !(MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    let abs_tick = tick_index.unsigned_abs();

    let mut ratio = if abs_tick & 1 != 0 {
        U256::new(SQRT_PRICE_MULTIPLIERS[0])
    } else {
        U256::ONE << 128
    };
    for (i, multiplier) in SQRT_PRICE_MULTIPLIERS.iter().enumerate().skip(1) {
        if abs_tick & (1 << i) != 0 {
            ratio = (ratio * U256::new(*multiplier)) >> 128;
        }
    }
    if tick_index > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so truncated remainders never map the
    // price below its tick.
    let mut sqrt_price = ratio >> 32;
    if ratio & ((U256::ONE << 32) - U256::ONE) != U256::ZERO {
        sqrt_price += U256::ONE;
    }
    Ok(sqrt_price)
}

/// Computes the greatest tick whose sqrt price does not exceed the input.
/// Inverse of `tick_index_to_sqrt_price`, resolved by binary search over
/// the valid tick interval.
pub fn sqrt_price_to_tick_index(sqrt_price: U256) -> Result<i32, CoreError> {
    if sqrt_price < MIN_SQRT_PRICE || sqrt_price > MAX_SQRT_PRICE {
        return Err(SQRT_PRICE_OUT_OF_BOUNDS);
    }
    let mut low = MIN_TICK_INDEX;
    let mut high = MAX_TICK_INDEX;
    while low < high {
        let mid = (low + high + 1).div_euclid(2);
        if tick_index_to_sqrt_price(mid)? <= sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    Ok(low)
}

/// Locates the initialized-boundary range enclosing a tick.
///
/// The remainder is taken with floor semantics so it stays in
/// `[0, tick_spacing)` for negative ticks as well, which keeps both
/// boundaries on multiples of the spacing with
/// `lower <= tick_current_index < upper`.
pub fn enclosing_tick_range(tick_current_index: i32, tick_spacing: u16) -> Result<TickRange, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let spacing = tick_spacing as i32;
    let tick_lower_index = tick_current_index.div_euclid(spacing) * spacing;
    Ok(TickRange {
        tick_lower_index,
        tick_upper_index: tick_lower_index + spacing,
    })
}

/// Orders two tick indexes into a `TickRange`.
pub fn order_tick_indexes(tick_index_1: i32, tick_index_2: i32) -> TickRange {
    if tick_index_1 < tick_index_2 {
        TickRange {
            tick_lower_index: tick_index_1,
            tick_upper_index: tick_index_2,
        }
    } else {
        TickRange {
            tick_lower_index: tick_index_2,
            tick_upper_index: tick_index_1,
        }
    }
}
