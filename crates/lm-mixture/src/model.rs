//! Mixture model trait.

use crate::error::MixtureResult;
use crate::solver::SolverConfig;
use lm_liquids::PureComponentModel;
use std::fmt;

/// Mixture-level property queries.
///
/// `x` is always a mole-fraction vector and `y` a mass-fraction vector, ordered like
/// [`MixtureModel::components`]. Vectors of the wrong length are rejected with
/// `MixtureError::DimensionMismatch`; fractions are not renormalised.
///
/// Implementations must be thread-safe (Send + Sync) and immutable after construction.
pub trait MixtureModel: Send + Sync + fmt::Debug {
    /// Create an independently owned copy of this mixture.
    fn clone_box(&self) -> Box<dyn MixtureModel>;

    /// Component identifiers, in composition order.
    fn components(&self) -> &[String];

    /// Component models, parallel to [`MixtureModel::components`].
    fn properties(&self) -> &[Box<dyn PureComponentModel>];

    /// Number of components.
    fn size(&self) -> usize {
        self.components().len()
    }

    /// Critical temperature [K], mole fractions weighted by critical volume.
    fn tc(&self, x: &[f64]) -> MixtureResult<f64>;

    /// Pseudocritical temperature [K] (Kay's rule).
    fn tpc(&self, x: &[f64]) -> MixtureResult<f64>;

    /// Pseudocritical pressure [Pa] (modified Prausnitz and Gunn).
    fn ppc(&self, x: &[f64]) -> MixtureResult<f64>;

    /// Pseudo triple point temperature [K] (mole averaged).
    fn tpt(&self, x: &[f64]) -> MixtureResult<f64>;

    /// Acentric factor.
    fn omega(&self, x: &[f64]) -> MixtureResult<f64>;

    /// Equilibrium mole fractions at the liquid surface (Raoult's law).
    ///
    /// The result is not renormalised.
    fn xs(&self, p: f64, tg: f64, tl: f64, xg: &[f64], xl: &[f64]) -> MixtureResult<Vec<f64>>;

    /// Mean molecular weight [kg/kmol].
    fn w(&self, x: &[f64]) -> MixtureResult<f64>;

    /// Mass fractions from mole fractions.
    fn mass_fractions(&self, x: &[f64]) -> MixtureResult<Vec<f64>>;

    /// Mole fractions from mass fractions.
    fn mole_fractions(&self, y: &[f64]) -> MixtureResult<Vec<f64>>;

    /// Density [kg/m³].
    fn rho(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Vapour pressure [Pa].
    fn pv(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Latent heat [J/kg].
    fn hl(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Heat capacity [J/(kg·K)].
    fn cp(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Surface tension [N/m].
    fn sigma(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Viscosity [Pa·s].
    fn mu(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Thermal conductivity [W/(m·K)] (Li's method).
    fn k(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Vapour diffusivity [m²/s] (Blanc's law).
    fn d(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64>;

    /// Boiling temperature [K] at pressure `p` with the given solver settings.
    fn pv_invert_with(&self, p: f64, x: &[f64], config: &SolverConfig) -> MixtureResult<f64>;

    /// Boiling temperature [K] at pressure `p`: the `T` with `pv(p, T, x) == p`.
    fn pv_invert(&self, p: f64, x: &[f64]) -> MixtureResult<f64> {
        self.pv_invert_with(p, x, &SolverConfig::default())
    }
}

impl Clone for Box<dyn MixtureModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
