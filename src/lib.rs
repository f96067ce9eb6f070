//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

//! Pure fixed-point math for concentrated liquidity positions.
//!
//! Everything in this crate operates on already-resolved numeric snapshots
//! of pool state (current tick, tick spacing, liquidity, token decimals).
//! Fetching that state from a chain belongs to the calling layer.

mod constants;
mod math;
mod types;

pub use constants::*;
pub use math::*;
pub use types::*;
