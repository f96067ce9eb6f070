//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

/// Fee tiers a pool can be deployed with. The tier fixes the tick spacing,
/// so callers select a pool by token pair plus tier rather than carrying a
/// process-wide default pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeeTier {
    /// 0.01%
    Lowest,
    /// 0.05%
    Low,
    /// 0.3%
    Medium,
    /// 1%
    High,
}

impl FeeTier {
    /// Fee in hundredths of a basis point.
    pub fn fee(&self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    /// Granularity of usable tick boundaries for pools of this tier.
    pub fn tick_spacing(&self) -> u16 {
        match self {
            FeeTier::Lowest => 1,
            FeeTier::Low => 10,
            FeeTier::Medium => 60,
            FeeTier::High => 200,
        }
    }
}
