//
// Copyright (c) Rangelens Contributors
//
// Licensed under the Apache License, Version 2.0
//

mod fee;
mod position;
mod tick;

pub use fee::*;
pub use position::*;
pub use tick::*;
