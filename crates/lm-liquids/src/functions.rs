//! Temperature correlations used by the coefficient-driven liquid model.
//!
//! The forms follow the NSRDS / DIPPR equation numbering. All of them are plain
//! data so they can be written out in a mixture description and read back with serde.

use serde::{Deserialize, Serialize};

/// Fifth-order polynomial: `a + bT + cT² + dT³ + eT⁴ + fT⁵`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Nsrds0 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Nsrds0 {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn eval(&self, t: f64) -> f64 {
        ((((self.f * t + self.e) * t + self.d) * t + self.c) * t + self.b) * t + self.a
    }
}

/// Extended Antoine form: `exp(a + b/T + c ln T + d T^e)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nsrds1 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub d: f64,
    #[serde(default)]
    pub e: f64,
}

impl Nsrds1 {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }

    pub fn eval(&self, t: f64) -> f64 {
        (self.a + self.b / t + self.c * t.ln() + self.d * t.powf(self.e)).exp()
    }
}

/// Rackett-type density: `a / b^(1 + (1 - T/c)^d)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nsrds5 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Nsrds5 {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn eval(&self, t: f64) -> f64 {
        self.a / self.b.powf(1.0 + (1.0 - t / self.c).powf(self.d))
    }
}

/// Watson-type form in reduced temperature:
/// `a (1 - Tr)^(b + c Tr + d Tr² + e Tr³)` with `Tr = T / tc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nsrds6 {
    pub tc: f64,
    pub a: f64,
    pub b: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub d: f64,
    #[serde(default)]
    pub e: f64,
}

impl Nsrds6 {
    pub const fn new(tc: f64, a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { tc, a, b, c, d, e }
    }

    pub fn eval(&self, t: f64) -> f64 {
        let tr = t / self.tc;
        self.a * (1.0 - tr).powf(((self.e * tr + self.d) * tr + self.c) * tr + self.b)
    }
}

/// API vapour diffusivity of a species into a carrier gas [m²/s].
///
/// ```text
/// D = 3.6059e-3 (1.8 T)^1.75 sqrt(1/wf + 1/wa) / (p (a^(1/3) + b^(1/3))²)
/// ```
///
/// `a`, `b` are the molar volumes of the two species and `wf`, `wa` their
/// molecular weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiDiffusivity {
    pub a: f64,
    pub b: f64,
    pub wf: f64,
    pub wa: f64,
}

impl ApiDiffusivity {
    pub const fn new(a: f64, b: f64, wf: f64, wa: f64) -> Self {
        Self { a, b, wf, wa }
    }

    pub fn eval(&self, p: f64, t: f64) -> f64 {
        let alpha = (1.0 / self.wf + 1.0 / self.wa).sqrt();
        let beta = (self.a.cbrt() + self.b.cbrt()).powi(2);
        3.6059e-3 * (1.8 * t).powf(1.75) * alpha / (p * beta)
    }
}
