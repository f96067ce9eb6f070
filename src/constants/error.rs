//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

pub type CoreError = &'static str;

pub const INVALID_TICK_SPACING: CoreError = "Tick spacing must be positive";

pub const INVALID_SQRT_PRICE: CoreError = "Invalid sqrt price";

pub const INVALID_RATIO: CoreError = "Negative floating ratio";

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const SQRT_PRICE_OUT_OF_BOUNDS: CoreError = "Sqrt price out of bounds";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";
