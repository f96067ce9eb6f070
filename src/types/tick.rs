//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

/// An ordered pair of tick indexes bounding a position range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickRange {
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
}
