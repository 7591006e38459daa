use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SmError};

/// Numeric tolerances used by particle validation and decay checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Allowed distance from a member of the valid charge set.
    #[serde(default = "default_charge_tolerance")]
    pub charge: f64,
    /// Allowed gap between invariant mass and declared rest mass before a
    /// warning is emitted.
    #[serde(default = "default_mass_tolerance")]
    pub invariant_mass: f64,
    /// Allowed gap between the products' charge sum and the parent charge.
    #[serde(default = "default_conservation_tolerance")]
    pub conservation: f64,
}

fn default_charge_tolerance() -> f64 {
    1e-6
}

fn default_mass_tolerance() -> f64 {
    1e-6
}

fn default_conservation_tolerance() -> f64 {
    1e-2
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            charge: default_charge_tolerance(),
            invariant_mass: default_mass_tolerance(),
            conservation: default_conservation_tolerance(),
        }
    }
}

/// Exclusive upper bound on the charge tolerance: half the 1/3 spacing of the
/// valid charge set.
pub const MAX_CHARGE_TOLERANCE: f64 = 1.0 / 6.0;

impl Tolerances {
    /// Checks that every tolerance is finite and non-negative, and that the
    /// charge tolerance stays below [`MAX_CHARGE_TOLERANCE`].
    pub fn validate(&self) -> Result<(), SmError> {
        for (name, value) in [
            ("charge", self.charge),
            ("invariant_mass", self.invariant_mass),
            ("conservation", self.conservation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SmError::Config(
                    ErrorInfo::new("invalid-tolerance", "tolerance must be finite and >= 0")
                        .with_context("field", name)
                        .with_context("value", value),
                ));
            }
        }
        if self.charge >= MAX_CHARGE_TOLERANCE {
            return Err(SmError::Config(
                ErrorInfo::new("invalid-tolerance", "charge tolerance must stay below 1/6")
                    .with_context("field", "charge")
                    .with_context("value", self.charge),
            ));
        }
        Ok(())
    }
}
