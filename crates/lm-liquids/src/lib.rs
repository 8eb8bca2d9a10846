//! lm-liquids: pure-component liquid property models.
//!
//! Provides:
//! - `PureComponentModel`, the capability a mixture needs from each component
//! - NSRDS-style correlation functions (`Nsrds0`, `Nsrds1`, `Nsrds5`, `Nsrds6`, `ApiDiffusivity`)
//! - `CoefficientLiquid`, a model driven entirely by a `LiquidCoeffs` set
//! - `LiquidDatabase`, the table of built-in default coefficients keyed by identifier
//!
//! # Example
//!
//! ```
//! use lm_liquids::{LiquidDatabase, PureComponentModel};
//!
//! let db = LiquidDatabase::builtin();
//! let water = db.model("H2O").unwrap();
//! let rho = water.density(101_325.0, 300.0);
//! assert!(rho > 990.0 && rho < 1000.0);
//! ```

pub mod database;
pub mod error;
pub mod functions;
pub mod liquid;
pub mod model;

// Re-exports for ergonomics
pub use database::{LiquidDatabase, LiquidEntry};
pub use error::{LiquidError, LiquidResult};
pub use functions::{ApiDiffusivity, Nsrds0, Nsrds1, Nsrds5, Nsrds6};
pub use liquid::{CoefficientLiquid, LiquidCoeffs};
pub use model::PureComponentModel;
