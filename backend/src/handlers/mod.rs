//! HTTP handlers

mod assessment;
mod health;
mod impact;
mod prediction;

pub use assessment::*;
pub use health::*;
pub use impact::*;
pub use prediction::*;
