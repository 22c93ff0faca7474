//! Domain models for the Surplus-to-Sustain platform

mod crop;
mod impact;
mod prediction;
mod surplus;

pub use crop::*;
pub use impact::*;
pub use prediction::*;
pub use surplus::*;
