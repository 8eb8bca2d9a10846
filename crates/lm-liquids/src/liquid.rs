//! Coefficient-driven liquid model.

use crate::error::{LiquidError, LiquidResult};
use crate::functions::{ApiDiffusivity, Nsrds0, Nsrds1, Nsrds5, Nsrds6};
use crate::model::PureComponentModel;
use serde::{Deserialize, Serialize};

/// Complete coefficient set describing one pure liquid.
///
/// This is the block a mixture description supplies when a component opts out of
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiquidCoeffs {
    /// Molecular weight [kg/kmol]
    pub w: f64,
    /// Critical temperature [K]
    pub tc: f64,
    /// Critical pressure [Pa]
    pub pc: f64,
    /// Critical molar volume [m³/kmol]
    pub vc: f64,
    /// Critical compressibility factor
    pub zc: f64,
    /// Triple point temperature [K]
    pub tt: f64,
    /// Normal boiling temperature [K]
    pub tb: f64,
    /// Acentric factor
    pub omega: f64,

    /// Density [kg/m³]
    pub rho: Nsrds5,
    /// Vapour pressure [Pa]
    pub pv: Nsrds1,
    /// Latent heat [J/kg]
    pub hl: Nsrds6,
    /// Heat capacity [J/(kg·K)]
    pub cp: Nsrds0,
    /// Viscosity [Pa·s]
    pub mu: Nsrds1,
    /// Thermal conductivity [W/(m·K)]
    pub k: Nsrds0,
    /// Surface tension [N/m]
    pub sigma: Nsrds6,
    /// Vapour diffusivity [m²/s]
    pub d: ApiDiffusivity,
}

impl LiquidCoeffs {
    /// Check the scalar constants for physical plausibility.
    pub fn validate(&self) -> LiquidResult<()> {
        validation::positive(self.w, "molecular weight")?;
        validation::positive(self.tc, "critical temperature")?;
        validation::positive(self.pc, "critical pressure")?;
        validation::positive(self.vc, "critical volume")?;
        validation::positive(self.zc, "critical compressibility")?;
        validation::positive(self.tt, "triple point temperature")?;
        validation::positive(self.tb, "boiling temperature")?;
        validation::finite(self.omega, "acentric factor")?;

        if self.tt >= self.tc {
            return Err(LiquidError::InvalidCoeffs {
                what: "triple point temperature must be below critical temperature",
            });
        }
        if !(self.tt..=self.tc).contains(&self.tb) {
            return Err(LiquidError::InvalidCoeffs {
                what: "boiling temperature must lie between triple and critical point",
            });
        }
        Ok(())
    }
}

/// Pure liquid whose properties are evaluated from a `LiquidCoeffs` set.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientLiquid {
    name: String,
    coeffs: LiquidCoeffs,
}

impl CoefficientLiquid {
    /// Validate the coefficients and wrap them as a model.
    pub fn new(name: impl Into<String>, coeffs: LiquidCoeffs) -> LiquidResult<Self> {
        coeffs.validate()?;
        Ok(Self {
            name: name.into(),
            coeffs,
        })
    }

    pub fn coeffs(&self) -> &LiquidCoeffs {
        &self.coeffs
    }
}

impl PureComponentModel for CoefficientLiquid {
    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn PureComponentModel> {
        Box::new(self.clone())
    }

    fn density(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.rho.eval(t)
    }

    fn vapor_pressure(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.pv.eval(t)
    }

    fn latent_heat(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.hl.eval(t)
    }

    fn heat_capacity(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.cp.eval(t)
    }

    fn surface_tension(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.sigma.eval(t)
    }

    fn viscosity(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.mu.eval(t)
    }

    fn thermal_conductivity(&self, _p: f64, t: f64) -> f64 {
        self.coeffs.k.eval(t)
    }

    fn diffusivity(&self, p: f64, t: f64) -> f64 {
        self.coeffs.d.eval(p, t)
    }

    fn molecular_weight(&self) -> f64 {
        self.coeffs.w
    }

    fn critical_temperature(&self) -> f64 {
        self.coeffs.tc
    }

    fn critical_pressure(&self) -> f64 {
        self.coeffs.pc
    }

    fn critical_volume(&self) -> f64 {
        self.coeffs.vc
    }

    fn critical_compressibility(&self) -> f64 {
        self.coeffs.zc
    }

    fn triple_temperature(&self) -> f64 {
        self.coeffs.tt
    }

    fn boiling_temperature(&self) -> f64 {
        self.coeffs.tb
    }

    fn acentric_factor(&self) -> f64 {
        self.coeffs.omega
    }
}

/// Validation helpers for coefficient constants.
pub(crate) mod validation {
    use super::*;

    /// Ensure a constant is finite.
    pub fn finite(v: f64, what: &'static str) -> LiquidResult<()> {
        if !v.is_finite() {
            return Err(LiquidError::InvalidCoeffs { what });
        }
        Ok(())
    }

    /// Ensure a constant is positive and finite.
    pub fn positive(v: f64, what: &'static str) -> LiquidResult<()> {
        if !v.is_finite() || v <= 0.0 {
            return Err(LiquidError::InvalidCoeffs { what });
        }
        Ok(())
    }
}
