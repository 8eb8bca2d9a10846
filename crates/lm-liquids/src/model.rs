//! Pure-component liquid property model trait.

use std::fmt;

/// Property capability of a single pure liquid.
///
/// Pressures in Pa, temperatures in K, molecular weight in kg/kmol and molar
/// volumes in m³/kmol. Implementations must be thread-safe (Send + Sync) and
/// immutable after construction; every query is a pure function of its arguments.
pub trait PureComponentModel: Send + Sync + fmt::Debug {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Create an independently owned copy of this model.
    fn clone_box(&self) -> Box<dyn PureComponentModel>;

    /// Liquid density [kg/m³].
    fn density(&self, p: f64, t: f64) -> f64;

    /// Saturation vapour pressure [Pa].
    fn vapor_pressure(&self, p: f64, t: f64) -> f64;

    /// Latent heat of vaporisation [J/kg].
    fn latent_heat(&self, p: f64, t: f64) -> f64;

    /// Liquid heat capacity [J/(kg·K)].
    fn heat_capacity(&self, p: f64, t: f64) -> f64;

    /// Surface tension [N/m].
    fn surface_tension(&self, p: f64, t: f64) -> f64;

    /// Liquid dynamic viscosity [Pa·s].
    fn viscosity(&self, p: f64, t: f64) -> f64;

    /// Liquid thermal conductivity [W/(m·K)].
    fn thermal_conductivity(&self, p: f64, t: f64) -> f64;

    /// Vapour diffusivity into the carrier gas [m²/s].
    fn diffusivity(&self, p: f64, t: f64) -> f64;

    /// Molecular weight [kg/kmol].
    fn molecular_weight(&self) -> f64;

    /// Critical temperature [K].
    fn critical_temperature(&self) -> f64;

    /// Critical pressure [Pa].
    fn critical_pressure(&self) -> f64;

    /// Critical molar volume [m³/kmol].
    fn critical_volume(&self) -> f64;

    /// Critical compressibility factor.
    fn critical_compressibility(&self) -> f64;

    /// Triple point temperature [K].
    fn triple_temperature(&self) -> f64;

    /// Normal boiling temperature [K].
    fn boiling_temperature(&self) -> f64;

    /// Pitzer acentric factor.
    fn acentric_factor(&self) -> f64;
}

impl Clone for Box<dyn PureComponentModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
