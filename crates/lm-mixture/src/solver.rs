//! Bracketed root finder for the boiling-point inversion.

use crate::error::{MixtureError, MixtureResult};

/// Boiling-point solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Stop once the temperature bracket is narrower than this [K]
    pub t_tol: f64,
    /// Residual tolerance relative to the target pressure
    pub rel_tol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            t_tol: 1e-6,
            rel_tol: 1e-10,
        }
    }
}

/// Root of a monotonically increasing residual on a temperature bracket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    /// Temperature [K]
    pub t: f64,
    /// Residual at `t`
    pub residual: f64,
    /// Number of interior evaluations
    pub iterations: usize,
}

/// Safeguarded secant/bisection solver.
///
/// A secant step is taken only when it lands strictly inside the bracket and the
/// previous step at least halved the bracket; otherwise the bracket is bisected.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoilingPointSolver {
    config: SolverConfig,
}

impl BoilingPointSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find `t` in `[t_lo, t_hi]` with `residual(t) == 0`.
    ///
    /// `scale` sets the residual tolerance (`rel_tol * scale`). The residual must be
    /// negative at `t_lo` and positive at `t_hi`.
    pub fn solve<F>(&self, residual: F, t_lo: f64, t_hi: f64, scale: f64) -> MixtureResult<Root>
    where
        F: Fn(f64) -> f64,
    {
        if !t_lo.is_finite() || !t_hi.is_finite() || t_lo > t_hi {
            return Err(MixtureError::Convergence {
                what: format!("invalid temperature bracket [{t_lo}, {t_hi}] K"),
            });
        }

        let f_tol = self.config.rel_tol * scale.abs();
        let f_lo = finite_residual(residual(t_lo), t_lo)?;
        let f_hi = finite_residual(residual(t_hi), t_hi)?;

        if f_lo.abs() <= f_tol {
            return Ok(Root {
                t: t_lo,
                residual: f_lo,
                iterations: 0,
            });
        }
        if f_hi.abs() <= f_tol {
            return Ok(Root {
                t: t_hi,
                residual: f_hi,
                iterations: 0,
            });
        }
        if f_lo > 0.0 {
            return Err(MixtureError::Convergence {
                what: format!("root lies below the bracket: residual {f_lo} at {t_lo} K"),
            });
        }
        if f_hi < 0.0 {
            return Err(MixtureError::Convergence {
                what: format!("root lies above the bracket: residual {f_hi} at {t_hi} K"),
            });
        }

        let (mut a, mut fa) = (t_lo, f_lo);
        let (mut b, mut fb) = (t_hi, f_hi);
        let mut prev_width = f64::INFINITY;

        for iter in 1..=self.config.max_iterations {
            let width = b - a;
            let secant = b - fb * width / (fb - fa);
            let t = if secant > a && secant < b && width <= 0.5 * prev_width {
                secant
            } else {
                0.5 * (a + b)
            };
            prev_width = width;

            let ft = finite_residual(residual(t), t)?;
            if ft.abs() <= f_tol {
                return Ok(Root {
                    t,
                    residual: ft,
                    iterations: iter,
                });
            }

            if ft < 0.0 {
                a = t;
                fa = ft;
            } else {
                b = t;
                fb = ft;
            }

            if b - a <= self.config.t_tol {
                let (t, residual) = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };
                return Ok(Root {
                    t,
                    residual,
                    iterations: iter,
                });
            }
        }

        Err(MixtureError::Convergence {
            what: format!(
                "no convergence after {} iterations, bracket [{a}, {b}] K",
                self.config.max_iterations
            ),
        })
    }
}

fn finite_residual(f: f64, t: f64) -> MixtureResult<f64> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(MixtureError::Convergence {
            what: format!("non-finite residual at {t} K"),
        })
    }
}
