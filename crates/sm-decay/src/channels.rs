use serde::{Deserialize, Serialize};
use sm_core::{FourMomentum, SmError, Tolerances};
use sm_particle::{Intrinsics, KindTag, Particle, ParticleKind, ParticleProperties};

/// Rest masses (MeV) assigned to generated products.
pub mod masses {
    /// Electron / positron.
    pub const ELECTRON: f64 = 0.511;
    /// Up quark.
    pub const UP_QUARK: f64 = 2.3;
    /// Down quark.
    pub const DOWN_QUARK: f64 = 4.8;
    /// Bottom quark.
    pub const BOTTOM_QUARK: f64 = 4180.0;
    /// W boson.
    pub const W_BOSON: f64 = 80400.0;
    /// Z boson.
    pub const Z_BOSON: f64 = 91200.0;
}

/// Predefined product combination for a decaying parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecayChannel {
    /// τ → e ν ν̄.
    TauLeptonic,
    /// τ → ū d ν̄.
    TauHadronic,
    /// H → Z Z.
    HiggsToZZ,
    /// H → W⁺ W⁻.
    HiggsToWW,
    /// H → γ γ.
    HiggsToPhotons,
    /// H → b b̄.
    HiggsToBottomPair,
    /// W⁺ → e⁺ ν.
    WPlusLeptonic,
    /// W⁺ → u d̄.
    WPlusHadronic,
    /// W⁻ → e⁻ ν̄.
    WMinusLeptonic,
    /// W⁻ → d ū.
    WMinusHadronic,
    /// Z → e⁻ e⁺.
    ZLeptonic,
    /// Z → u ū.
    ZHadronic,
}

const TAU_CHANNELS: [DecayChannel; 2] = [DecayChannel::TauLeptonic, DecayChannel::TauHadronic];
const HIGGS_CHANNELS: [DecayChannel; 4] = [
    DecayChannel::HiggsToZZ,
    DecayChannel::HiggsToWW,
    DecayChannel::HiggsToPhotons,
    DecayChannel::HiggsToBottomPair,
];
const W_PLUS_CHANNELS: [DecayChannel; 2] =
    [DecayChannel::WPlusLeptonic, DecayChannel::WPlusHadronic];
const W_MINUS_CHANNELS: [DecayChannel; 2] =
    [DecayChannel::WMinusLeptonic, DecayChannel::WMinusHadronic];
const Z_CHANNELS: [DecayChannel; 2] = [DecayChannel::ZLeptonic, DecayChannel::ZHadronic];

impl DecayChannel {
    /// Channels open to `parent`, in selection order. `None` for stable kinds.
    ///
    /// W bosons branch on the sign of their charge before the
    /// leptonic/hadronic choice.
    pub fn options_for(parent: &Particle) -> Option<&'static [DecayChannel]> {
        match parent.kind() {
            ParticleKind::Tau { .. } => Some(&TAU_CHANNELS),
            ParticleKind::HiggsBoson => Some(&HIGGS_CHANNELS),
            ParticleKind::WBoson if parent.charge() > 0.0 => Some(&W_PLUS_CHANNELS),
            ParticleKind::WBoson => Some(&W_MINUS_CHANNELS),
            ParticleKind::ZBoson => Some(&Z_CHANNELS),
            ParticleKind::Electron { .. }
            | ParticleKind::Muon { .. }
            | ParticleKind::Neutrino { .. }
            | ParticleKind::Quark { .. }
            | ParticleKind::Photon
            | ParticleKind::Gluon { .. } => None,
        }
    }

    /// Kind of parent this channel belongs to.
    pub fn parent_kind(self) -> KindTag {
        match self {
            DecayChannel::TauLeptonic | DecayChannel::TauHadronic => KindTag::Tau,
            DecayChannel::HiggsToZZ
            | DecayChannel::HiggsToWW
            | DecayChannel::HiggsToPhotons
            | DecayChannel::HiggsToBottomPair => KindTag::HiggsBoson,
            DecayChannel::WPlusLeptonic
            | DecayChannel::WPlusHadronic
            | DecayChannel::WMinusLeptonic
            | DecayChannel::WMinusHadronic => KindTag::WBoson,
            DecayChannel::ZLeptonic | DecayChannel::ZHadronic => KindTag::ZBoson,
        }
    }

    /// Whether every product is a lepton.
    pub fn is_leptonic(self) -> bool {
        matches!(
            self,
            DecayChannel::TauLeptonic
                | DecayChannel::WPlusLeptonic
                | DecayChannel::WMinusLeptonic
                | DecayChannel::ZLeptonic
        )
    }

    /// Short human readable label.
    pub fn label(self) -> &'static str {
        match self {
            DecayChannel::TauLeptonic => "tau -> e nu nu~",
            DecayChannel::TauHadronic => "tau -> u~ d nu~",
            DecayChannel::HiggsToZZ => "H -> Z Z",
            DecayChannel::HiggsToWW => "H -> W+ W-",
            DecayChannel::HiggsToPhotons => "H -> gamma gamma",
            DecayChannel::HiggsToBottomPair => "H -> b b~",
            DecayChannel::WPlusLeptonic => "W+ -> e+ nu",
            DecayChannel::WPlusHadronic => "W+ -> u d~",
            DecayChannel::WMinusLeptonic => "W- -> e- nu~",
            DecayChannel::WMinusHadronic => "W- -> d u~",
            DecayChannel::ZLeptonic => "Z -> e- e+",
            DecayChannel::ZHadronic => "Z -> u u~",
        }
    }

    /// Builds this channel's products for `parent`.
    ///
    /// Every product carries the parent's full four-momentum; no momentum is
    /// shared out between them. A positively charged tau decays through the
    /// charge-conjugate products. Conservation is not checked here.
    pub fn products(
        self,
        parent: &Particle,
        tolerances: &Tolerances,
    ) -> Result<Vec<Particle>, SmError> {
        let factory = ProductFactory {
            momentum: parent.four_momentum(),
            tolerances,
        };
        let conjugate = self.parent_kind() == KindTag::Tau && parent.charge() > 0.0;
        let species: &[(Species, bool)] = match self {
            DecayChannel::TauLeptonic => &[
                (Species::Electron, false),
                (Species::Neutrino, false),
                (Species::Neutrino, true),
            ],
            DecayChannel::TauHadronic => &[
                (Species::Up, true),
                (Species::Down, false),
                (Species::Neutrino, true),
            ],
            DecayChannel::HiggsToZZ => &[(Species::Z, false), (Species::Z, false)],
            DecayChannel::HiggsToWW => &[(Species::W, false), (Species::W, true)],
            DecayChannel::HiggsToPhotons => &[(Species::Photon, false), (Species::Photon, false)],
            DecayChannel::HiggsToBottomPair => &[(Species::Bottom, false), (Species::Bottom, true)],
            DecayChannel::WPlusLeptonic => &[(Species::Electron, true), (Species::Neutrino, false)],
            DecayChannel::WPlusHadronic => &[(Species::Up, false), (Species::Down, true)],
            DecayChannel::WMinusLeptonic => {
                &[(Species::Electron, false), (Species::Neutrino, true)]
            }
            DecayChannel::WMinusHadronic => &[(Species::Down, false), (Species::Up, true)],
            DecayChannel::ZLeptonic => &[(Species::Electron, false), (Species::Electron, true)],
            DecayChannel::ZHadronic => &[(Species::Up, false), (Species::Up, true)],
        };
        species
            .iter()
            .map(|&(species, anti)| factory.build(species, anti != conjugate))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
enum Species {
    Electron,
    Neutrino,
    Up,
    Down,
    Bottom,
    Photon,
    W,
    Z,
}

struct ProductFactory<'a> {
    momentum: FourMomentum,
    tolerances: &'a Tolerances,
}

impl ProductFactory<'_> {
    fn build(&self, species: Species, anti: bool) -> Result<Particle, SmError> {
        let sign = if anti { -1 } else { 1 };
        let (intrinsics, kind) = match species {
            Species::Electron => (
                self.intrinsics(-1.0, 0.5, masses::ELECTRON),
                ParticleKind::electron(sign),
            ),
            Species::Neutrino => (
                self.intrinsics(0.0, 0.5, 0.0),
                ParticleKind::Neutrino {
                    name: if anti { "Anti-Neutrino" } else { "Neutrino" }.to_string(),
                    lepton_number: sign,
                    interacts: false,
                },
            ),
            Species::Up => (
                self.intrinsics(2.0 / 3.0, 0.5, masses::UP_QUARK),
                quark(anti, "Up Quark", "red"),
            ),
            Species::Down => (
                self.intrinsics(-1.0 / 3.0, 0.5, masses::DOWN_QUARK),
                quark(anti, "Down Quark", "blue"),
            ),
            Species::Bottom => (
                self.intrinsics(-1.0 / 3.0, 0.5, masses::BOTTOM_QUARK),
                quark(anti, "Bottom Quark", "red"),
            ),
            Species::Photon => (self.intrinsics(0.0, 1.0, 0.0), ParticleKind::Photon),
            Species::W => (
                self.intrinsics(1.0, 1.0, masses::W_BOSON),
                ParticleKind::WBoson,
            ),
            Species::Z => (
                self.intrinsics(0.0, 1.0, masses::Z_BOSON),
                ParticleKind::ZBoson,
            ),
        };
        Particle::with_tolerances(intrinsics.with_antiparticle(anti), kind, self.tolerances)
    }

    fn intrinsics(&self, charge: f64, spin: f64, rest_mass: f64) -> Intrinsics {
        Intrinsics::new(charge, spin, self.momentum, rest_mass)
    }
}

fn quark(anti: bool, flavour: &str, colour: &str) -> ParticleKind {
    let (name, baryon_number, colour) = if anti {
        (
            format!("Anti-{flavour}"),
            -1.0 / 3.0,
            format!("anti-{colour}"),
        )
    } else {
        (flavour.to_string(), 1.0 / 3.0, colour.to_string())
    };
    ParticleKind::Quark {
        name,
        baryon_number,
        colour,
    }
}
