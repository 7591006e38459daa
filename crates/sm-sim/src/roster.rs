use sm_core::{FourMomentum, SmError, Tolerances};
use sm_particle::{Intrinsics, Particle, ParticleKind};

fn at_rest(charge: f64, spin: f64, mass: f64) -> Intrinsics {
    Intrinsics::new(charge, spin, FourMomentum::at_rest(mass), mass)
}

fn quark_pair(
    charge: f64,
    mass: f64,
    flavour: &str,
    colour: &str,
) -> [(Intrinsics, ParticleKind); 2] {
    let intrinsics = at_rest(charge, 0.5, mass);
    [
        (
            intrinsics,
            ParticleKind::Quark {
                name: format!("{flavour} Quark"),
                baryon_number: 1.0 / 3.0,
                colour: colour.to_string(),
            },
        ),
        (
            intrinsics.anti(),
            ParticleKind::Quark {
                name: format!("Anti-{flavour} Quark"),
                baryon_number: -1.0 / 3.0,
                colour: format!("anti-{colour}"),
            },
        ),
    ]
}

fn neutrino_pair(family: &str) -> [(Intrinsics, ParticleKind); 2] {
    let intrinsics = Intrinsics::new(0.0, 0.5, FourMomentum::ZERO, 0.0);
    [
        (
            intrinsics,
            ParticleKind::Neutrino {
                name: format!("{family} Neutrino"),
                lepton_number: 1,
                interacts: false,
            },
        ),
        (
            intrinsics.anti(),
            ParticleKind::Neutrino {
                name: format!("{family} Anti-Neutrino"),
                lepton_number: -1,
                interacts: false,
            },
        ),
    ]
}

/// Builds the thirty-particle demonstration roster.
///
/// Order: charged leptons and their antiparticles, Higgs, W⁺, W⁻, Z,
/// photon, gluon, three neutrino pairs, then six quark/antiquark pairs.
/// Massive members sit at rest; the photon moves along +z so its invariant
/// mass is zero.
pub fn reference_roster(tolerances: &Tolerances) -> Result<Vec<Particle>, SmError> {
    let electron = at_rest(-1.0, 0.5, 0.511);
    let muon = at_rest(-1.0, 0.5, 105.7);
    let tau = at_rest(-1.0, 0.5, 1777.0);
    let w = at_rest(1.0, 1.0, 80400.0);

    let mut entries = vec![
        (electron, ParticleKind::electron(1)),
        (electron.anti(), ParticleKind::electron(-1)),
        (
            muon,
            ParticleKind::Muon {
                lepton_number: 1,
                isolated: true,
            },
        ),
        (
            muon.anti(),
            ParticleKind::Muon {
                lepton_number: -1,
                isolated: true,
            },
        ),
        (tau, ParticleKind::Tau { lepton_number: 1 }),
        (tau.anti(), ParticleKind::Tau { lepton_number: -1 }),
        (at_rest(0.0, 0.0, 126000.0), ParticleKind::HiggsBoson),
        (w, ParticleKind::WBoson),
        (w.anti(), ParticleKind::WBoson),
        (at_rest(0.0, 1.0, 91200.0), ParticleKind::ZBoson),
        (
            Intrinsics::new(0.0, 1.0, FourMomentum::new(62.55, 0.0, 0.0, 62.55), 0.0),
            ParticleKind::Photon,
        ),
        (
            Intrinsics::new(0.0, 1.0, FourMomentum::ZERO, 0.0),
            ParticleKind::Gluon {
                colours: ["red".to_string(), "blue".to_string()],
            },
        ),
    ];
    for family in ["Electron", "Muon", "Tau"] {
        entries.extend(neutrino_pair(family));
    }
    for (charge, mass, flavour, colour) in [
        (2.0 / 3.0, 2.3, "Up", "red"),
        (-1.0 / 3.0, 4.8, "Down", "blue"),
        (2.0 / 3.0, 1275.0, "Charm", "green"),
        (-1.0 / 3.0, 95.0, "Strange", "red"),
        (2.0 / 3.0, 173070.0, "Top", "blue"),
        (-1.0 / 3.0, 4180.0, "Bottom", "green"),
    ] {
        entries.extend(quark_pair(charge, mass, flavour, colour));
    }

    entries
        .into_iter()
        .map(|(intrinsics, kind)| Particle::with_tolerances(intrinsics, kind, tolerances))
        .collect()
}
