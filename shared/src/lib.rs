//! Shared types and models for the Surplus-to-Sustain platform
//!
//! This crate contains the yield, surplus and impact calculations shared
//! between the backend and the browser module (via WASM).

pub mod estimation;
pub mod models;
pub mod types;
pub mod validation;

pub use estimation::*;
pub use models::*;
pub use types::*;
pub use validation::*;
