//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

mod error;
mod fixed_point;
mod tick;

pub use error::*;
pub use fixed_point::*;
pub use tick::*;
