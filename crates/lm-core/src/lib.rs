//! lm-core: shared foundation for the liquid mixture crates.
//!
//! Contains:
//! - units (uom SI types, unit-tagged text parsing)
//! - numeric (float and length checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LmError, LmResult};
pub use numeric::*;
pub use units::*;
