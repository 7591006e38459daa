//! Conservation checks over decay products.

use serde::Serialize;
use sm_core::{ErrorInfo, SmError};

use crate::ParticleProperties;

/// Fails when `charges` do not sum to `parent_charge` within `tolerance`.
pub fn check_charge_sum<I>(parent_charge: f64, charges: I, tolerance: f64) -> Result<(), SmError>
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for charge in charges {
        total += charge;
        count += 1;
    }
    // NaN sums fail the comparison and are rejected.
    if (total - parent_charge).abs() <= tolerance {
        return Ok(());
    }
    Err(SmError::Conservation(
        ErrorInfo::new(
            "charge-not-conserved",
            "decay products' charges do not sum to the parent charge",
        )
        .with_context("parent_charge", parent_charge)
        .with_context("product_charge", total)
        .with_context("products", count)
        .with_context("tolerance", tolerance),
    ))
}

/// Checks that the products' charges sum to `parent_charge`.
pub fn check_charge_conservation<P: ParticleProperties>(
    parent_charge: f64,
    products: &[P],
    tolerance: f64,
) -> Result<(), SmError> {
    check_charge_sum(
        parent_charge,
        products.iter().map(ParticleProperties::charge),
        tolerance,
    )
}

/// Additive quantum numbers of a parent compared with its products.
///
/// Only charge is enforced; lepton and baryon number are reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantumNumberBalance {
    /// Products' charge minus parent charge.
    pub charge: f64,
    /// Products' lepton number minus parent lepton number.
    pub lepton_number: i32,
    /// Products' baryon number minus parent baryon number.
    pub baryon_number: f64,
}

impl QuantumNumberBalance {
    /// Computes the balance of `products` against `parent`.
    pub fn of<P, C>(parent: &P, products: &[C]) -> Self
    where
        P: ParticleProperties + ?Sized,
        C: ParticleProperties,
    {
        let charge: f64 = products.iter().map(ParticleProperties::charge).sum();
        let lepton_number: i32 = products.iter().map(ParticleProperties::lepton_number).sum();
        let baryon_number: f64 = products.iter().map(ParticleProperties::baryon_number).sum();
        Self {
            charge: charge - parent.charge(),
            lepton_number: lepton_number - parent.lepton_number(),
            baryon_number: baryon_number - parent.baryon_number(),
        }
    }

    /// True when every quantity balances within `tolerance`.
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.charge.abs() <= tolerance
            && self.lepton_number == 0
            && self.baryon_number.abs() <= tolerance
    }
}
