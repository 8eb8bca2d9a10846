//! Mixture description schema.
//!
//! Each top-level key names a component; the mapping order is the component order
//! used by every composition vector.
//!
//! ```yaml
//! H2O:                      # built-in defaults
//! C7H16:
//!   default_coeffs: false
//!   coeffs:
//!     w: 100.204
//!     # ... full coefficient set
//! ```

use indexmap::IndexMap;
use lm_liquids::LiquidCoeffs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MixtureDef {
    pub components: IndexMap<String, Option<ComponentDef>>,
}

impl MixtureDef {
    /// Iterate components in declaration order; an empty entry reads as defaults.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ComponentDef)> + '_ {
        self.components
            .iter()
            .map(|(id, def)| (id.as_str(), def.clone().unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Append a component that uses the built-in defaults.
    pub fn with_default(mut self, id: impl Into<String>) -> Self {
        self.components.insert(id.into(), None);
        self
    }

    /// Append a component with explicit coefficients.
    pub fn with_coeffs(mut self, id: impl Into<String>, coeffs: LiquidCoeffs) -> Self {
        self.components.insert(
            id.into(),
            Some(ComponentDef {
                default_coeffs: false,
                coeffs: Some(coeffs),
            }),
        );
        self
    }
}

/// Per-component block.
///
/// `coeffs` is required when `default_coeffs` is false and rejected when it is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComponentDef {
    #[serde(default = "default_true")]
    pub default_coeffs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coeffs: Option<LiquidCoeffs>,
}

impl Default for ComponentDef {
    fn default() -> Self {
        Self {
            default_coeffs: true,
            coeffs: None,
        }
    }
}

fn default_true() -> bool {
    true
}
