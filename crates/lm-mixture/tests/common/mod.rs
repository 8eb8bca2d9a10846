//! Mock pure liquids for mixture tests.
//!
//! Properties are constant except the vapour pressure, which follows a
//! Clausius-Clapeyron form with a closed-form inverse. This lets the mixing rules
//! and the boiling-point inversion be checked against exact values.

#![allow(dead_code)]

use lm_liquids::PureComponentModel;
use lm_mixture::LiquidMixture;

pub const P_REF: f64 = 101_325.0;

/// Constant-property liquid with `pv = P_REF * exp(b * (1 - tb / T))`.
#[derive(Debug, Clone)]
pub struct MockLiquid {
    pub name: String,
    pub w: f64,
    pub tc: f64,
    pub vc: f64,
    pub zc: f64,
    pub tt: f64,
    pub tb: f64,
    pub omega: f64,
    /// Dimensionless Clapeyron slope
    pub b: f64,
    pub rho: f64,
    pub hl: f64,
    pub cp: f64,
    pub sigma: f64,
    pub mu: f64,
    pub k: f64,
    pub d: f64,
}

impl MockLiquid {
    /// A light, water-like liquid.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            w: 20.0,
            tc: 600.0,
            vc: 0.06,
            zc: 0.23,
            tt: 250.0,
            tb: 370.0,
            omega: 0.3,
            b: 12.0,
            rho: 1000.0,
            hl: 2.2e6,
            cp: 4000.0,
            sigma: 0.06,
            mu: 1e-3,
            k: 0.6,
            d: 2e-5,
        }
    }

    /// A heavy, alkane-like liquid.
    pub fn heavy() -> Self {
        Self {
            name: "heavy".to_string(),
            w: 100.0,
            tc: 550.0,
            vc: 0.4,
            zc: 0.26,
            tt: 200.0,
            tb: 400.0,
            omega: 0.35,
            b: 10.0,
            rho: 700.0,
            hl: 3.5e5,
            cp: 2200.0,
            sigma: 0.02,
            mu: 4e-4,
            k: 0.12,
            d: 7e-6,
        }
    }

    /// Exact temperature where the vapour pressure equals `p`.
    pub fn boiling_point(&self, p: f64) -> f64 {
        self.tb / (1.0 - (p / P_REF).ln() / self.b)
    }
}

impl PureComponentModel for MockLiquid {
    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn PureComponentModel> {
        Box::new(self.clone())
    }

    fn density(&self, _p: f64, _t: f64) -> f64 {
        self.rho
    }

    fn vapor_pressure(&self, _p: f64, t: f64) -> f64 {
        P_REF * (self.b * (1.0 - self.tb / t)).exp()
    }

    fn latent_heat(&self, _p: f64, _t: f64) -> f64 {
        self.hl
    }

    fn heat_capacity(&self, _p: f64, _t: f64) -> f64 {
        self.cp
    }

    fn surface_tension(&self, _p: f64, _t: f64) -> f64 {
        self.sigma
    }

    fn viscosity(&self, _p: f64, _t: f64) -> f64 {
        self.mu
    }

    fn thermal_conductivity(&self, _p: f64, _t: f64) -> f64 {
        self.k
    }

    fn diffusivity(&self, _p: f64, _t: f64) -> f64 {
        self.d
    }

    fn molecular_weight(&self) -> f64 {
        self.w
    }

    fn critical_temperature(&self) -> f64 {
        self.tc
    }

    fn critical_pressure(&self) -> f64 {
        self.zc * 8314.462618 * self.tc / self.vc
    }

    fn critical_volume(&self) -> f64 {
        self.vc
    }

    fn critical_compressibility(&self) -> f64 {
        self.zc
    }

    fn triple_temperature(&self) -> f64 {
        self.tt
    }

    fn boiling_temperature(&self) -> f64 {
        self.tb
    }

    fn acentric_factor(&self) -> f64 {
        self.omega
    }
}

pub fn mixture_of(liquids: Vec<MockLiquid>) -> LiquidMixture {
    LiquidMixture::new(
        liquids
            .into_iter()
            .map(|l| (l.name.clone(), Box::new(l) as Box<dyn PureComponentModel>))
            .collect(),
    )
    .unwrap()
}

pub fn light_heavy() -> LiquidMixture {
    mixture_of(vec![MockLiquid::light(), MockLiquid::heavy()])
}
