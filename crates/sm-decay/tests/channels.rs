use sm_core::{FourMomentum, Tolerances};
use sm_decay::{DecayChannel, DecayGenerator};
use sm_particle::{
    check_charge_conservation, Intrinsics, KindTag, Particle, ParticleProperties,
};

fn tau(anti: bool) -> Particle {
    Particle::tau(
        Intrinsics::new(-1.0, 0.5, FourMomentum::at_rest(1777.0), 1777.0).with_antiparticle(anti),
        if anti { -1 } else { 1 },
    )
    .unwrap()
}

fn w_boson(anti: bool) -> Particle {
    Particle::w_boson(
        Intrinsics::new(1.0, 1.0, FourMomentum::at_rest(80400.0), 80400.0).with_antiparticle(anti),
    )
    .unwrap()
}

fn z_boson() -> Particle {
    let at_rest = FourMomentum::at_rest(91200.0);
    Particle::z_boson(Intrinsics::new(0.0, 1.0, at_rest, 91200.0)).unwrap()
}

fn higgs() -> Particle {
    Particle::higgs_boson(Intrinsics::new(
        0.0,
        0.0,
        FourMomentum::at_rest(126000.0),
        126000.0,
    ))
    .unwrap()
}

fn names(products: &[Particle]) -> Vec<&str> {
    products.iter().map(|p| p.name()).collect()
}

#[test]
fn option_tables_follow_parent_kind() {
    assert_eq!(DecayChannel::options_for(&tau(false)).unwrap().len(), 2);
    assert_eq!(DecayChannel::options_for(&higgs()).unwrap().len(), 4);
    assert_eq!(
        DecayChannel::options_for(&w_boson(false)).unwrap(),
        &[DecayChannel::WPlusLeptonic, DecayChannel::WPlusHadronic]
    );
    assert_eq!(
        DecayChannel::options_for(&w_boson(true)).unwrap(),
        &[DecayChannel::WMinusLeptonic, DecayChannel::WMinusHadronic]
    );
    assert_eq!(
        DecayChannel::options_for(&z_boson()).unwrap(),
        &[DecayChannel::ZLeptonic, DecayChannel::ZHadronic]
    );
    let photon = Particle::photon(FourMomentum::at_rest(0.0)).unwrap();
    assert!(DecayChannel::options_for(&photon).is_none());
}

#[test]
fn every_channel_conserves_charge_for_its_parent() {
    let tolerances = Tolerances::default();
    let parents = [tau(false), tau(true), higgs(), w_boson(false), w_boson(true), z_boson()];
    for parent in &parents {
        for channel in DecayChannel::options_for(parent).unwrap() {
            assert_eq!(channel.parent_kind(), parent.tag());
            let products = channel.products(parent, &tolerances).unwrap();
            assert!((2..=3).contains(&products.len()));
            assert!(
                check_charge_conservation(parent.charge(), &products, 0.01).is_ok(),
                "{} does not conserve charge",
                channel.label()
            );
        }
    }
}

#[test]
fn products_copy_the_parent_momentum() {
    let parent = Particle::z_boson(Intrinsics::new(
        0.0,
        1.0,
        FourMomentum::new(95000.0, 100.0, -50.0, 2000.0),
        91200.0,
    ))
    .unwrap();
    let products = DecayChannel::ZHadronic
        .products(&parent, &Tolerances::default())
        .unwrap();
    for product in &products {
        assert_eq!(product.four_momentum(), parent.four_momentum());
    }
}

#[test]
fn tau_channel_contents() {
    let tolerances = Tolerances::default();
    let leptonic = DecayChannel::TauLeptonic.products(&tau(false), &tolerances).unwrap();
    assert_eq!(names(&leptonic), ["Electron", "Neutrino", "Anti-Neutrino"]);
    assert_eq!(leptonic[0].charge(), -1.0);

    let hadronic = DecayChannel::TauHadronic.products(&tau(false), &tolerances).unwrap();
    assert_eq!(
        names(&hadronic),
        ["Anti-Up Quark", "Down Quark", "Anti-Neutrino"]
    );
    assert!((hadronic[0].charge() + 2.0 / 3.0).abs() < 1e-12);
    assert!((hadronic[0].baryon_number() + 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(hadronic[0].colour_charge(), Some("anti-red"));
}

#[test]
fn antitau_decays_through_conjugate_products() {
    let products = DecayChannel::TauLeptonic
        .products(&tau(true), &Tolerances::default())
        .unwrap();
    assert_eq!(products[0].charge(), 1.0);
    assert!(products[0].is_antiparticle());
    assert_eq!(names(&products), ["Electron", "Anti-Neutrino", "Neutrino"]);
}

#[test]
fn higgs_channel_contents() {
    let tolerances = Tolerances::default();
    let ww = DecayChannel::HiggsToWW.products(&higgs(), &tolerances).unwrap();
    assert_eq!(ww[0].charge(), 1.0);
    assert_eq!(ww[1].charge(), -1.0);
    assert!(ww.iter().all(|p| p.tag() == KindTag::WBoson));

    let photons = DecayChannel::HiggsToPhotons.products(&higgs(), &tolerances).unwrap();
    assert!(photons
        .iter()
        .all(|p| p.tag() == KindTag::Photon && p.rest_mass() == 0.0));

    let bottoms = DecayChannel::HiggsToBottomPair.products(&higgs(), &tolerances).unwrap();
    assert_eq!(names(&bottoms), ["Bottom Quark", "Anti-Bottom Quark"]);
}

#[test]
fn generated_bosons_can_decay_again() {
    let generator = DecayGenerator::default();
    let zz = DecayChannel::HiggsToZZ
        .products(&higgs(), generator.tolerances())
        .unwrap();
    let mut first = zz[0].clone();
    let mut script = sm_core::ScriptedChoices::new(vec![0]);
    assert_eq!(
        generator.decay(&mut first, &mut script).unwrap(),
        DecayChannel::ZLeptonic
    );
    assert_eq!(first.decay_products().len(), 2);
}

#[test]
fn channels_serialize_in_kebab_case() {
    let json = serde_json::to_string(&DecayChannel::HiggsToBottomPair).unwrap();
    assert_eq!(json, "\"higgs-to-bottom-pair\"");
    assert!(DecayChannel::ZLeptonic.is_leptonic());
    assert!(!DecayChannel::ZHadronic.is_leptonic());
}
