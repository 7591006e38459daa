//! Validation of electric charges against the allowed discrete set.

use sm_core::{ErrorInfo, SmError};

/// Charges (in units of e) a particle may carry.
pub const VALID_CHARGES: [f64; 7] = [
    -1.0,
    -2.0 / 3.0,
    -1.0 / 3.0,
    0.0,
    1.0 / 3.0,
    2.0 / 3.0,
    1.0,
];

/// Returns true when `charge` lies within `tolerance` of a valid charge.
pub fn is_valid_charge(charge: f64, tolerance: f64) -> bool {
    VALID_CHARGES
        .iter()
        .any(|valid| (charge - valid).abs() <= tolerance)
}

/// Rejects charges outside [`VALID_CHARGES`].
pub fn validate_charge(charge: f64, tolerance: f64) -> Result<(), SmError> {
    if is_valid_charge(charge, tolerance) {
        Ok(())
    } else {
        Err(SmError::Charge(
            ErrorInfo::new("invalid-charge", "charge is not a valid multiple of e/3")
                .with_context("charge", charge)
                .with_hint("allowed charges are -1, -2/3, -1/3, 0, 1/3, 2/3 and 1"),
        ))
    }
}
