//! Built-in default coefficients, keyed by liquid identifier.

use crate::error::{LiquidError, LiquidResult};
use crate::functions::{ApiDiffusivity, Nsrds0, Nsrds1, Nsrds5, Nsrds6};
use crate::liquid::{CoefficientLiquid, LiquidCoeffs};

#[derive(Debug, Clone, PartialEq)]
pub struct LiquidEntry {
    pub canonical_id: String,
    pub display_name: String,
    pub aliases: Vec<String>,
    pub coeffs: LiquidCoeffs,
}

impl LiquidEntry {
    pub fn new(
        canonical_id: impl Into<String>,
        display_name: impl Into<String>,
        aliases: &[&str],
        coeffs: LiquidCoeffs,
    ) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            display_name: display_name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            coeffs,
        }
    }

    /// Exact, case-insensitive match on the canonical id or any alias.
    pub fn is_named(&self, id: &str) -> bool {
        let id = id.trim();
        self.canonical_id.eq_ignore_ascii_case(id)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(id))
    }

    /// Substring search used for listing.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

/// Mapping table from liquid identifier to default coefficients.
///
/// Start from [`LiquidDatabase::builtin`] and extend it with [`LiquidDatabase::insert`];
/// there is no global registry.
#[derive(Debug, Clone, Default)]
pub struct LiquidDatabase {
    entries: Vec<LiquidEntry>,
}

impl LiquidDatabase {
    /// A database with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default coefficient sets shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                LiquidEntry::new("H2O", "Water", &["water"], h2o()),
                LiquidEntry::new("C7H16", "n-Heptane", &["heptane", "n-heptane"], c7h16()),
                LiquidEntry::new("C8H18", "n-Octane", &["octane", "n-octane"], c8h18()),
            ],
        }
    }

    /// Add an entry, replacing any entry with the same canonical id.
    pub fn insert(&mut self, entry: LiquidEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.canonical_id == entry.canonical_id)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn entries(&self) -> &[LiquidEntry] {
        &self.entries
    }

    pub fn filter(&self, query: &str) -> Vec<&LiquidEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches_query(query))
            .collect()
    }

    pub fn lookup(&self, id: &str) -> LiquidResult<&LiquidEntry> {
        self.entries
            .iter()
            .find(|entry| entry.is_named(id))
            .ok_or_else(|| LiquidError::UnknownLiquid { id: id.to_string() })
    }

    /// Build a model from the default coefficients of `id`.
    pub fn model(&self, id: &str) -> LiquidResult<CoefficientLiquid> {
        let entry = self.lookup(id)?;
        CoefficientLiquid::new(entry.canonical_id.clone(), entry.coeffs.clone())
    }
}

fn h2o() -> LiquidCoeffs {
    LiquidCoeffs {
        w: 18.015,
        tc: 647.13,
        pc: 2.2055e7,
        vc: 0.05595,
        zc: 0.229,
        tt: 273.16,
        tb: 373.15,
        omega: 0.3449,
        rho: Nsrds5::new(98.343885, 0.30542, 647.13, 0.081),
        pv: Nsrds1::new(73.649, -7258.2, -7.3037, 4.1653e-6, 2.0),
        hl: Nsrds6::new(647.13, 2_889_425.478_767_69, 0.3199, -0.212, 0.25795, 0.0),
        cp: Nsrds0::new(
            15_341.104_635_026_4,
            -116.019_983_347_211,
            0.451_013_044_684_985,
            -7.835_692_478_490_15e-4,
            5.201_276_713_849_57e-7,
            0.0,
        ),
        mu: Nsrds1::new(-51.964, 3670.6, 5.7331, -5.3495e-29, 10.0),
        k: Nsrds0::new(-0.4267, 0.0056903, -8.0065e-6, 1.815e-9, 0.0, 0.0),
        sigma: Nsrds6::new(647.13, 0.18548, 2.717, -3.554, 2.047, 0.0),
        d: ApiDiffusivity::new(15.0, 15.0, 18.015, 28.0),
    }
}

fn c7h16() -> LiquidCoeffs {
    LiquidCoeffs {
        w: 100.204,
        tc: 540.2,
        pc: 2.7358e6,
        vc: 0.428,
        zc: 0.261,
        tt: 182.57,
        tb: 371.58,
        omega: 0.3495,
        rho: Nsrds5::new(61.383_968_36, 0.26211, 540.2, 0.28141),
        pv: Nsrds1::new(87.829, -6996.4, -9.8802, 7.2099e-6, 2.0),
        hl: Nsrds6::new(540.2, 499_121.791_545_248, 0.38795, 0.0, 0.0, 0.0),
        cp: Nsrds0::new(1376.0, 2.9, 0.0, 0.0, 0.0, 0.0),
        mu: Nsrds1::new(-24.451, 1533.1, 2.0087, 0.0, 0.0),
        k: Nsrds0::new(0.215, -3.03e-4, 0.0, 0.0, 0.0, 0.0),
        sigma: Nsrds6::new(540.2, 0.054143, 1.2512, 0.0, 0.0, 0.0),
        d: ApiDiffusivity::new(147.18, 20.1, 100.204, 28.0),
    }
}

fn c8h18() -> LiquidCoeffs {
    LiquidCoeffs {
        w: 114.231,
        tc: 568.7,
        pc: 2.49e6,
        vc: 0.486,
        zc: 0.256,
        tt: 216.38,
        tb: 398.83,
        omega: 0.3996,
        rho: Nsrds5::new(60.805, 0.25882, 568.7, 0.2791),
        pv: Nsrds1::new(96.084, -7900.2, -11.003, 7.1802e-6, 2.0),
        hl: Nsrds6::new(568.7, 483_057.0, 0.38467, 0.0, 0.0, 0.0),
        cp: Nsrds0::new(1380.0, 2.85, 0.0, 0.0, 0.0, 0.0),
        mu: Nsrds1::new(-20.463, 1497.4, 1.379, 0.0, 0.0),
        k: Nsrds0::new(0.2156, -2.9483e-4, 0.0, 0.0, 0.0, 0.0),
        sigma: Nsrds6::new(568.7, 0.052789, 1.2326, 0.0, 0.0, 0.0),
        d: ApiDiffusivity::new(185.0, 20.1, 114.231, 28.0),
    }
}
