//! lm-mixture: thermophysical properties of liquid mixtures.
//!
//! Provides:
//! - `MixtureModel`, the query surface consumed by spray and evaporation models
//! - `LiquidMixture`, which combines independently modelled pure components with
//!   mole-fraction mixing rules
//! - `BoilingPointSolver`, the bracketed root finder behind `pv_invert`
//!
//! # Example
//!
//! ```
//! use lm_liquids::LiquidDatabase;
//! use lm_mixture::{LiquidMixture, MixtureModel};
//!
//! let db = LiquidDatabase::builtin();
//! let mixture = LiquidMixture::from_yaml_str("H2O:\nC7H16:\n", &db).unwrap();
//!
//! let x = [0.5, 0.5];
//! let w = mixture.w(&x).unwrap();
//! assert!((w - 0.5 * (18.015 + 100.204)).abs() < 1e-9);
//!
//! let t_boil = mixture.pv_invert(101_325.0, &x).unwrap();
//! assert!(t_boil > 300.0 && t_boil < 400.0);
//! ```

pub mod error;
pub mod mixture;
pub mod model;
pub mod solver;

// Re-exports for ergonomics
pub use error::{MixtureError, MixtureResult};
pub use mixture::{LiquidMixture, TR_MAX};
pub use model::MixtureModel;
pub use solver::{BoilingPointSolver, Root, SolverConfig};
