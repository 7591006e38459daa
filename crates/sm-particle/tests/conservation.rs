use sm_core::{FourMomentum, SmError, Tolerances};
use sm_particle::{
    check_charge_conservation, check_charge_sum, Intrinsics, Particle, ParticleProperties,
    QuantumNumberBalance,
};

fn momentum() -> FourMomentum {
    FourMomentum::at_rest(91200.0)
}

fn electron(anti: bool) -> Particle {
    let lepton_number = if anti { -1 } else { 1 };
    Particle::electron(
        Intrinsics::new(-1.0, 0.5, momentum(), 0.511).with_antiparticle(anti),
        lepton_number,
    )
    .unwrap()
}

fn neutrino(anti: bool) -> Particle {
    let lepton_number = if anti { -1 } else { 1 };
    Particle::neutrino(
        Intrinsics::new(0.0, 0.5, momentum(), 0.0).with_antiparticle(anti),
        if anti { "Anti-Neutrino" } else { "Neutrino" },
        lepton_number,
        false,
    )
    .unwrap()
}

#[test]
fn electron_positron_pair_is_neutral() {
    let products = vec![electron(false), electron(true)];
    assert!(check_charge_conservation(0.0, &products, 0.01).is_ok());
}

#[test]
fn tau_leptonic_products_sum_to_minus_one() {
    let products = vec![electron(false), neutrino(false), neutrino(true)];
    assert!(check_charge_conservation(-1.0, &products, 0.01).is_ok());
    let err = check_charge_conservation(1.0, &products, 0.01).unwrap_err();
    match err {
        SmError::Conservation(info) => {
            assert_eq!(info.code, "charge-not-conserved");
            assert_eq!(info.context.get("products"), Some(&"3".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn raw_charge_sums_respect_tolerance() {
    assert!(check_charge_sum(0.0, [2.0 / 3.0, -2.0 / 3.0], 0.01).is_ok());
    assert!(check_charge_sum(1.0, [2.0 / 3.0, 0.34], 0.01).is_ok());
    assert!(check_charge_sum(1.0, [2.0 / 3.0, 0.3], 0.01).is_err());
    assert!(check_charge_sum(0.0, [f64::NAN], 0.01).is_err());
    assert!(check_charge_sum(0.0, std::iter::empty(), 0.01).is_ok());
}

#[test]
fn attaching_products_validates_first() {
    let mut z = Particle::z_boson(Intrinsics::new(0.0, 1.0, momentum(), 91200.0)).unwrap();
    let tolerances = Tolerances::default();

    let err = z
        .attach_decay_products(vec![electron(false), electron(false)], &tolerances)
        .unwrap_err();
    assert!(matches!(err, SmError::Conservation(_)));
    assert!(!z.has_decayed());

    z.attach_decay_products(vec![electron(false), electron(true)], &tolerances)
        .unwrap();
    assert_eq!(z.decay_products().len(), 2);
    assert!(z.check_decay_consistency(&tolerances).is_ok());

    let err = z
        .attach_decay_products(vec![electron(false), electron(true)], &tolerances)
        .unwrap_err();
    assert_eq!(err.code(), "already-decayed");
    assert_eq!(z.decay_products().len(), 2);
}

#[test]
fn empty_product_list_is_rejected() {
    let mut z = Particle::z_boson(Intrinsics::new(0.0, 1.0, momentum(), 91200.0)).unwrap();
    let err = z
        .attach_decay_products(Vec::new(), &Tolerances::default())
        .unwrap_err();
    assert!(matches!(err, SmError::Decay(_)));
    assert_eq!(err.code(), "empty-decay");
    assert!(!z.has_decayed());
}

#[test]
fn stable_particles_reject_products() {
    let mut e = electron(false);
    let err = e
        .attach_decay_products(vec![neutrino(false)], &Tolerances::default())
        .unwrap_err();
    assert_eq!(err.code(), "stable-particle");
}

#[test]
fn quantum_number_balance_reports_lepton_number() {
    let tau = Particle::tau(Intrinsics::new(-1.0, 0.5, momentum(), 1777.0), 1).unwrap();
    let products = vec![electron(false), neutrino(false), neutrino(true)];
    let balance = QuantumNumberBalance::of(&tau, &products);
    assert!(balance.charge.abs() < 1e-12);
    assert_eq!(balance.lepton_number, 0);
    assert!(balance.is_balanced(0.01));

    let lopsided = vec![electron(false), neutrino(true), neutrino(true)];
    let balance = QuantumNumberBalance::of(&tau, &lopsided);
    assert_eq!(balance.lepton_number, -2);
    assert!(!balance.is_balanced(0.01));
    assert_eq!(tau.lepton_number(), 1);
}
