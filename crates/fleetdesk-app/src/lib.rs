// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod browser;
pub mod detail;
pub mod fleet;
pub mod format;
pub mod ids;
pub mod model;
pub mod records;
pub mod state;

pub use browser::*;
pub use detail::*;
pub use fleet::*;
pub use ids::*;
pub use model::*;
pub use state::*;
