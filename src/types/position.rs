//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

use bigdecimal::BigDecimal;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionStatus {
    PriceInRange,
    PriceBelowRange,
    PriceAboveRange,
    Invalid,
}

/// Token amounts held by a position, rescaled by each token's decimals.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PositionAmounts {
    pub amount_0: BigDecimal,
    pub amount_1: BigDecimal,
}
