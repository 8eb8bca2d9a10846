//! Liquid mixture built from independently modelled pure components.

use crate::error::{MixtureError, MixtureResult};
use crate::model::MixtureModel;
use crate::solver::{BoilingPointSolver, SolverConfig};
use lm_config::{ConfigError, MixtureDef};
use lm_core::numeric::{ensure_finite, ensure_len};
use lm_core::units::constants::R_UNIVERSAL;
use lm_liquids::{CoefficientLiquid, LiquidDatabase, PureComponentModel};
use std::path::Path;
use tracing::{debug, warn};

/// Maximum reduced temperature at which component properties are evaluated.
pub const TR_MAX: f64 = 0.999;

/// Mole fractions at or below this are treated as absent.
const SMALL: f64 = 1e-15;

/// A mixture of liquids.
///
/// Holds the component identifiers and, in the same order, one owned model per
/// component. Cloning deep-copies every component model.
#[derive(Debug, Clone)]
pub struct LiquidMixture {
    components: Vec<String>,
    properties: Vec<Box<dyn PureComponentModel>>,
}

impl LiquidMixture {
    /// Build a mixture from `(identifier, model)` pairs in composition order.
    pub fn new(components: Vec<(String, Box<dyn PureComponentModel>)>) -> MixtureResult<Self> {
        if components.is_empty() {
            return Err(MixtureError::Configuration {
                what: "mixture has no components".to_string(),
            });
        }

        let (components, properties): (Vec<_>, Vec<_>) = components.into_iter().unzip();
        debug!(components = ?components, "liquid mixture constructed");

        Ok(Self {
            components,
            properties,
        })
    }

    /// Resolve a mixture description against a coefficient database.
    ///
    /// Components that keep their defaults are looked up by identifier and take the
    /// database's canonical id (`water` becomes `H2O`); the others are built from their
    /// own coefficient block under the identifier as written.
    pub fn from_config(def: &MixtureDef, db: &LiquidDatabase) -> MixtureResult<Self> {
        lm_config::validate_mixture(def).map_err(ConfigError::from)?;

        let mut components: Vec<(String, Box<dyn PureComponentModel>)> =
            Vec::with_capacity(def.len());
        for (id, component) in def.iter() {
            let model = match component.coeffs {
                Some(coeffs) => CoefficientLiquid::new(id, coeffs)?,
                None => db.model(id)?,
            };

            let name = model.name().to_string();
            if components.iter().any(|(existing, _)| *existing == name) {
                return Err(MixtureError::Configuration {
                    what: format!("component {name} is listed more than once (as {id})"),
                });
            }
            components.push((name, Box::new(model) as Box<dyn PureComponentModel>));
        }

        Self::new(components)
    }

    /// Parse a YAML mixture description and resolve it.
    pub fn from_yaml_str(content: &str, db: &LiquidDatabase) -> MixtureResult<Self> {
        let def = lm_config::parse_yaml(content)?;
        Self::from_config(&def, db)
    }

    /// Load a YAML or JSON mixture description from disk and resolve it.
    pub fn load(path: &Path, db: &LiquidDatabase) -> MixtureResult<Self> {
        let def = lm_config::load(path)?;
        Self::from_config(&def, db)
    }

    fn check(&self, v: &[f64], what: &'static str) -> MixtureResult<()> {
        ensure_len(v, self.properties.len(), what)?;
        Ok(())
    }

    fn zip<'a>(
        &'a self,
        x: &'a [f64],
    ) -> impl Iterator<Item = (f64, &'a dyn PureComponentModel)> {
        x.iter().copied().zip(
            self.properties
                .iter()
                .map(|liquid| -> &'a dyn PureComponentModel { liquid.as_ref() }),
        )
    }

    /// Components with a non-negligible fraction.
    fn present<'a>(
        &'a self,
        x: &'a [f64],
    ) -> impl Iterator<Item = (f64, &'a dyn PureComponentModel)> {
        self.zip(x).filter(|(xi, _)| *xi > SMALL)
    }

    fn tc_of(&self, x: &[f64]) -> f64 {
        let (vtc, vc) = self.zip(x).fold((0.0, 0.0), |(vtc, vc), (xi, liquid)| {
            let xvc = xi * liquid.critical_volume();
            (vtc + xvc * liquid.critical_temperature(), vc + xvc)
        });
        vtc / vc
    }

    fn tpc_of(&self, x: &[f64]) -> f64 {
        self.zip(x)
            .map(|(xi, liquid)| xi * liquid.critical_temperature())
            .sum()
    }

    fn tpt_of(&self, x: &[f64]) -> f64 {
        self.zip(x)
            .map(|(xi, liquid)| xi * liquid.triple_temperature())
            .sum()
    }

    fn w_of(&self, x: &[f64]) -> f64 {
        self.zip(x)
            .map(|(xi, liquid)| xi * liquid.molecular_weight())
            .sum()
    }

    fn pv_of(&self, p: f64, t: f64, x: &[f64]) -> f64 {
        self.present(x)
            .map(|(xi, liquid)| xi * liquid.vapor_pressure(p, capped(liquid, t)))
            .sum()
    }

    /// Mole-fraction weighted mean of a quantity evaluated on the mass basis.
    fn mass_weighted<F>(&self, x: &[f64], f: F) -> f64
    where
        F: Fn(&dyn PureComponentModel) -> f64,
    {
        let sum: f64 = self
            .present(x)
            .map(|(xi, liquid)| xi * liquid.molecular_weight() * f(liquid))
            .sum();
        sum / self.w_of(x)
    }
}

/// Temperature at which a component is evaluated: `min(TR_MAX·Tc, T)`.
fn capped(liquid: &dyn PureComponentModel, t: f64) -> f64 {
    t.min(TR_MAX * liquid.critical_temperature())
}

impl MixtureModel for LiquidMixture {
    fn clone_box(&self) -> Box<dyn MixtureModel> {
        Box::new(self.clone())
    }

    fn components(&self) -> &[String] {
        &self.components
    }

    fn properties(&self) -> &[Box<dyn PureComponentModel>] {
        &self.properties
    }

    fn tc(&self, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.tc_of(x))
    }

    fn tpc(&self, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.tpc_of(x))
    }

    fn ppc(&self, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        let (vc, zc) = self.zip(x).fold((0.0, 0.0), |(vc, zc), (xi, liquid)| {
            (
                vc + xi * liquid.critical_volume(),
                zc + xi * liquid.critical_compressibility(),
            )
        });
        Ok(R_UNIVERSAL * zc * self.tpc_of(x) / vc)
    }

    fn tpt(&self, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.tpt_of(x))
    }

    fn omega(&self, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self
            .zip(x)
            .map(|(xi, liquid)| xi * liquid.acentric_factor())
            .sum())
    }

    fn xs(&self, p: f64, _tg: f64, tl: f64, xg: &[f64], xl: &[f64]) -> MixtureResult<Vec<f64>> {
        self.check(xg, "xg")?;
        self.check(xl, "xl")?;
        Ok(self
            .zip(xl)
            .map(|(xi, liquid)| liquid.vapor_pressure(p, capped(liquid, tl)) * xi / p)
            .collect())
    }

    fn w(&self, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.w_of(x))
    }

    fn mass_fractions(&self, x: &[f64]) -> MixtureResult<Vec<f64>> {
        self.check(x, "x")?;
        let w = self.w_of(x);
        Ok(self
            .zip(x)
            .map(|(xi, liquid)| xi * liquid.molecular_weight() / w)
            .collect())
    }

    fn mole_fractions(&self, y: &[f64]) -> MixtureResult<Vec<f64>> {
        self.check(y, "y")?;
        let moles: Vec<f64> = self
            .zip(y)
            .map(|(yi, liquid)| yi / liquid.molecular_weight())
            .collect();
        let total: f64 = moles.iter().sum();
        Ok(moles.into_iter().map(|n| n / total).collect())
    }

    fn rho(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        let (mass, volume) = self
            .present(x)
            .fold((0.0, 0.0), |(mass, volume), (xi, liquid)| {
                let rho_i = liquid.density(p, capped(liquid, t));
                if rho_i > SMALL {
                    let m_i = xi * liquid.molecular_weight();
                    (mass + m_i, volume + m_i / rho_i)
                } else {
                    (mass, volume)
                }
            });
        Ok(mass / volume)
    }

    fn pv(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.pv_of(p, t, x))
    }

    fn hl(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.mass_weighted(x, |liquid| liquid.latent_heat(p, capped(liquid, t))))
    }

    fn cp(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self.mass_weighted(x, |liquid| liquid.heat_capacity(p, capped(liquid, t))))
    }

    fn sigma(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        Ok(self
            .present(x)
            .map(|(xi, liquid)| xi * liquid.surface_tension(p, capped(liquid, t)))
            .sum())
    }

    fn mu(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        let ln_mu: f64 = self
            .present(x)
            .map(|(xi, liquid)| xi * liquid.viscosity(p, capped(liquid, t)).ln())
            .sum();
        Ok(ln_mu.exp())
    }

    fn k(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;

        // Superficial volume fractions and pure conductivities
        let (phi, kappa): (Vec<f64>, Vec<f64>) = self
            .zip(x)
            .map(|(xi, liquid)| {
                let ti = capped(liquid, t);
                (
                    xi * liquid.molecular_weight() / liquid.density(p, ti),
                    liquid.thermal_conductivity(p, ti),
                )
            })
            .unzip();
        let phi_sum: f64 = phi.iter().sum();

        let k: f64 = phi
            .iter()
            .zip(&kappa)
            .map(|(phi_i, k_i)| {
                phi.iter()
                    .zip(&kappa)
                    .map(|(phi_j, k_j)| phi_i * phi_j * 2.0 / (1.0 / k_i + 1.0 / k_j))
                    .sum::<f64>()
            })
            .sum();

        Ok(k / (phi_sum * phi_sum))
    }

    fn d(&self, p: f64, t: f64, x: &[f64]) -> MixtureResult<f64> {
        self.check(x, "x")?;
        let d_inv: f64 = self
            .present(x)
            .map(|(xi, liquid)| xi / liquid.diffusivity(p, capped(liquid, t)))
            .sum();
        Ok(1.0 / d_inv)
    }

    fn pv_invert_with(&self, p: f64, x: &[f64], config: &SolverConfig) -> MixtureResult<f64> {
        self.check(x, "x")?;
        for &xi in x {
            ensure_finite(xi, "x")?;
        }
        if !p.is_finite() || p <= 0.0 {
            return Err(MixtureError::Convergence {
                what: format!("target pressure {p} Pa must be positive and finite"),
            });
        }

        // Bracket between the pseudo triple point and the critical temperature
        let t_lo = self.tpt_of(x);
        let t_hi = self.tc_of(x);

        let root = BoilingPointSolver::new(*config)
            .solve(|t| self.pv_of(p, t, x) - p, t_lo, t_hi, p)
            .map_err(|e| match e {
                MixtureError::Convergence { what } => MixtureError::Convergence {
                    what: format!("boiling point at {p} Pa: {what}"),
                },
                other => other,
            })
            .inspect_err(|e| warn!(p, t_lo, t_hi, error = %e, "vapour pressure inversion failed"))?;

        debug!(
            p,
            t = root.t,
            iterations = root.iterations,
            "vapour pressure inverted"
        );
        Ok(root.t)
    }
}
