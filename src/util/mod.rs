//! Shared utility helpers.

pub mod error;
pub mod scalar;

pub use error::{DistFieldError, DistFieldResult};
pub use scalar::CostScalar;
