//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use ethnum::U256;

/// The Q64.96 scaling constant, 2^96.
pub const Q96: U256 = U256::new(0x1000000000000000000000000);

/// Fractional decimal digits retained by displayed ratios and amounts.
/// Narrowing to this scale always truncates toward zero, never rounds.
pub const AMOUNT_SCALE: i64 = 18;
