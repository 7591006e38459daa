use sm_core::{SmError, Tolerances, MAX_CHARGE_TOLERANCE};

fn with_charge(charge: f64) -> Tolerances {
    Tolerances {
        charge,
        ..Tolerances::default()
    }
}

#[test]
fn defaults_are_valid() {
    assert!(Tolerances::default().validate().is_ok());
    assert!(with_charge(0.1).validate().is_ok());
}

#[test]
fn charge_tolerance_must_stay_below_a_sixth() {
    for charge in [MAX_CHARGE_TOLERANCE, 0.2, 0.5] {
        let err = with_charge(charge).validate().unwrap_err();
        assert!(matches!(err, SmError::Config(_)));
        assert_eq!(err.code(), "invalid-tolerance");
        assert_eq!(err.info().context.get("field"), Some(&"charge".to_string()));
    }
}

#[test]
fn negative_or_non_finite_tolerances_are_rejected() {
    let bad = [
        with_charge(-1e-6),
        with_charge(f64::NAN),
        Tolerances {
            invariant_mass: f64::INFINITY,
            ..Tolerances::default()
        },
    ];
    for tolerances in bad {
        let err = tolerances.validate().unwrap_err();
        assert_eq!(err.code(), "invalid-tolerance");
    }
}
