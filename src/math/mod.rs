//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

mod fixed_point;
mod position;
mod price;
mod tick;

pub use fixed_point::*;
pub use position::*;
pub use price::*;
pub use tick::*;
