//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use ethnum::U256;

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -887272;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 887272;

/// The sqrt price at `MIN_TICK_INDEX`, in Q64.96.
pub const MIN_SQRT_PRICE: U256 = U256::new(4295128739);

/// The sqrt price at `MAX_TICK_INDEX`, in Q64.96.
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_PRICE: U256 = U256::from_words(0xfffd8963, 0xefd1fc6a506488495d951d5263988d26);
