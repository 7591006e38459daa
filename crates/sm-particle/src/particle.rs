//! The closed set of particle kinds and the owning particle record.

use serde::Serialize;
use sm_core::{ErrorInfo, FourMomentum, SmError, Tolerances};

use crate::charge::validate_charge;
use crate::conservation::check_charge_conservation;
use crate::ParticleProperties;

/// Number of electron calorimeter layers.
pub const CALORIMETER_LAYERS: usize = 4;

/// Physical parameters shared by every particle kind.
///
/// `charge` is the raw charge; when `antiparticle` is set it is negated once
/// when the particle is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intrinsics {
    /// Raw electric charge in units of e.
    pub charge: f64,
    /// Spin quantum number.
    pub spin: f64,
    /// Four-momentum, copied into the particle.
    pub momentum: FourMomentum,
    /// Declared rest mass.
    pub rest_mass: f64,
    /// Whether the particle is the antiparticle of the named kind.
    pub antiparticle: bool,
}

impl Intrinsics {
    /// Parameters for a particle (not an antiparticle).
    pub fn new(charge: f64, spin: f64, momentum: FourMomentum, rest_mass: f64) -> Self {
        Self {
            charge,
            spin,
            momentum,
            rest_mass,
            antiparticle: false,
        }
    }

    /// Marks the parameters as describing an antiparticle.
    pub fn anti(self) -> Self {
        self.with_antiparticle(true)
    }

    /// Sets the antiparticle flag explicitly.
    pub fn with_antiparticle(self, antiparticle: bool) -> Self {
        Self {
            antiparticle,
            ..self
        }
    }
}

/// Broad family a particle kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleClass {
    /// Charged leptons and neutrinos.
    Lepton,
    /// Quarks of any flavour.
    Quark,
    /// Gauge bosons and the Higgs.
    Boson,
}

/// Fieldless discriminant of [`ParticleKind`], used for runtime kind tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindTag {
    /// Electron or positron.
    Electron,
    /// Muon or antimuon.
    Muon,
    /// Tau or antitau.
    Tau,
    /// Any neutrino flavour.
    Neutrino,
    /// Any quark flavour.
    Quark,
    /// Photon.
    Photon,
    /// Gluon.
    Gluon,
    /// W boson of either charge.
    WBoson,
    /// Z boson.
    ZBoson,
    /// Higgs boson.
    HiggsBoson,
}

impl KindTag {
    /// Every kind, in declaration order.
    pub const ALL: [KindTag; 10] = [
        KindTag::Electron,
        KindTag::Muon,
        KindTag::Tau,
        KindTag::Neutrino,
        KindTag::Quark,
        KindTag::Photon,
        KindTag::Gluon,
        KindTag::WBoson,
        KindTag::ZBoson,
        KindTag::HiggsBoson,
    ];

    /// Family of the kind.
    pub fn class(self) -> ParticleClass {
        match self {
            KindTag::Electron | KindTag::Muon | KindTag::Tau | KindTag::Neutrino => {
                ParticleClass::Lepton
            }
            KindTag::Quark => ParticleClass::Quark,
            KindTag::Photon
            | KindTag::Gluon
            | KindTag::WBoson
            | KindTag::ZBoson
            | KindTag::HiggsBoson => ParticleClass::Boson,
        }
    }

    /// Type name reported for the kind. Neutrinos report their own name
    /// instead; this is only the fallback.
    pub fn type_name(self) -> &'static str {
        match self {
            KindTag::Electron => "Electron",
            KindTag::Muon => "Muon",
            KindTag::Tau => "Tau",
            KindTag::Neutrino => "Neutrino",
            KindTag::Quark => "Quark",
            KindTag::Photon => "Photon",
            KindTag::Gluon => "Gluon",
            KindTag::WBoson => "WBoson",
            KindTag::ZBoson => "ZBoson",
            KindTag::HiggsBoson => "HiggsBoson",
        }
    }

    /// Whether particles of this kind carry a decay-product list.
    pub fn is_decayable(self) -> bool {
        matches!(
            self,
            KindTag::Tau | KindTag::WBoson | KindTag::ZBoson | KindTag::HiggsBoson
        )
    }
}

/// Kind-specific attributes of a particle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParticleKind {
    /// Electron with per-layer calorimeter deposits.
    Electron {
        /// +1 for the electron, -1 for the positron.
        lepton_number: i32,
        /// Energy deposited in each calorimeter layer.
        calorimeter: [f64; CALORIMETER_LAYERS],
    },
    /// Muon with a track isolation flag.
    Muon {
        /// Lepton number.
        lepton_number: i32,
        /// Whether the muon track is isolated.
        isolated: bool,
    },
    /// Tau lepton.
    Tau {
        /// Lepton number.
        lepton_number: i32,
    },
    /// Neutrino; its name doubles as its type name.
    Neutrino {
        /// Flavour name such as "Electron Neutrino".
        name: String,
        /// Lepton number.
        lepton_number: i32,
        /// Whether the neutrino interacted with the detector.
        interacts: bool,
    },
    /// Quark of a named flavour.
    Quark {
        /// Flavour name such as "Up Quark".
        name: String,
        /// +1/3 for quarks, -1/3 for antiquarks.
        baryon_number: f64,
        /// Colour label, e.g. "red" or "anti-blue".
        colour: String,
    },
    /// Photon.
    Photon,
    /// Gluon carrying a colour/anticolour pair.
    Gluon {
        /// Colour labels.
        colours: [String; 2],
    },
    /// W boson.
    WBoson,
    /// Z boson.
    ZBoson,
    /// Higgs boson.
    HiggsBoson,
}

impl ParticleKind {
    /// Electron kind with empty calorimeter layers.
    pub fn electron(lepton_number: i32) -> Self {
        ParticleKind::Electron {
            lepton_number,
            calorimeter: [0.0; CALORIMETER_LAYERS],
        }
    }

    /// Discriminant of the kind.
    pub fn tag(&self) -> KindTag {
        match self {
            ParticleKind::Electron { .. } => KindTag::Electron,
            ParticleKind::Muon { .. } => KindTag::Muon,
            ParticleKind::Tau { .. } => KindTag::Tau,
            ParticleKind::Neutrino { .. } => KindTag::Neutrino,
            ParticleKind::Quark { .. } => KindTag::Quark,
            ParticleKind::Photon => KindTag::Photon,
            ParticleKind::Gluon { .. } => KindTag::Gluon,
            ParticleKind::WBoson => KindTag::WBoson,
            ParticleKind::ZBoson => KindTag::ZBoson,
            ParticleKind::HiggsBoson => KindTag::HiggsBoson,
        }
    }
}

/// Disagreement between a particle's invariant mass and its rest mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassMismatch {
    /// Mass computed from the four-momentum; `NaN` when spacelike.
    pub invariant_mass: f64,
    /// Declared rest mass.
    pub rest_mass: f64,
    /// Tolerance that was exceeded.
    pub tolerance: f64,
}

/// A validated particle.
///
/// Everything except the calorimeter deposits, gluon colours and the
/// decay-product list is fixed at construction. Decay products are owned by
/// the parent and can be attached once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    charge: f64,
    spin: f64,
    momentum: FourMomentum,
    rest_mass: f64,
    antiparticle: bool,
    #[serde(flatten)]
    kind: ParticleKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    decay_products: Vec<Particle>,
}

impl Particle {
    /// Builds a particle with the default tolerances.
    pub fn new(intrinsics: Intrinsics, kind: ParticleKind) -> Result<Self, SmError> {
        Self::with_tolerances(intrinsics, kind, &Tolerances::default())
    }

    /// Builds a particle, validating its charge against `tolerances.charge`.
    ///
    /// Fails with a `Config` error when `tolerances` itself is invalid.
    ///
    /// A rest mass that disagrees with the invariant mass of the supplied
    /// four-momentum is logged as a warning and does not fail construction.
    pub fn with_tolerances(
        intrinsics: Intrinsics,
        kind: ParticleKind,
        tolerances: &Tolerances,
    ) -> Result<Self, SmError> {
        let charge = if intrinsics.antiparticle {
            -intrinsics.charge
        } else {
            intrinsics.charge
        };
        tolerances.validate()?;
        validate_charge(charge, tolerances.charge)?;

        let particle = Self {
            charge,
            spin: intrinsics.spin,
            momentum: intrinsics.momentum,
            rest_mass: intrinsics.rest_mass,
            antiparticle: intrinsics.antiparticle,
            kind,
            decay_products: Vec::new(),
        };
        if let Some(mismatch) = particle.mass_mismatch(tolerances.invariant_mass) {
            log::warn!(
                "invariant mass does not match rest mass for {}: invariant mass {}, rest mass {}",
                particle.name(),
                mismatch.invariant_mass,
                mismatch.rest_mass
            );
        }
        Ok(particle)
    }

    /// Electron (or positron with `intrinsics.anti()`).
    pub fn electron(intrinsics: Intrinsics, lepton_number: i32) -> Result<Self, SmError> {
        Self::new(intrinsics, ParticleKind::electron(lepton_number))
    }

    /// Muon with an isolation flag.
    pub fn muon(
        intrinsics: Intrinsics,
        lepton_number: i32,
        isolated: bool,
    ) -> Result<Self, SmError> {
        Self::new(
            intrinsics,
            ParticleKind::Muon {
                lepton_number,
                isolated,
            },
        )
    }

    /// Tau lepton.
    pub fn tau(intrinsics: Intrinsics, lepton_number: i32) -> Result<Self, SmError> {
        Self::new(intrinsics, ParticleKind::Tau { lepton_number })
    }

    /// Neutrino named `name`.
    pub fn neutrino(
        intrinsics: Intrinsics,
        name: impl Into<String>,
        lepton_number: i32,
        interacts: bool,
    ) -> Result<Self, SmError> {
        Self::new(
            intrinsics,
            ParticleKind::Neutrino {
                name: name.into(),
                lepton_number,
                interacts,
            },
        )
    }

    /// Quark of flavour `name`.
    pub fn quark(
        intrinsics: Intrinsics,
        name: impl Into<String>,
        baryon_number: f64,
        colour: impl Into<String>,
    ) -> Result<Self, SmError> {
        Self::new(
            intrinsics,
            ParticleKind::Quark {
                name: name.into(),
                baryon_number,
                colour: colour.into(),
            },
        )
    }

    /// Massless, neutral, spin-1 photon.
    pub fn photon(momentum: FourMomentum) -> Result<Self, SmError> {
        let intrinsics = Intrinsics::new(0.0, 1.0, momentum, 0.0);
        Self::new(intrinsics, ParticleKind::Photon)
    }

    /// Massless, neutral gluon with a colour pair.
    pub fn gluon(
        spin: f64,
        momentum: FourMomentum,
        colour_a: impl Into<String>,
        colour_b: impl Into<String>,
    ) -> Result<Self, SmError> {
        Self::new(
            Intrinsics::new(0.0, spin, momentum, 0.0),
            ParticleKind::Gluon {
                colours: [colour_a.into(), colour_b.into()],
            },
        )
    }

    /// W boson; `intrinsics.anti()` flips a W⁺ into a W⁻.
    pub fn w_boson(intrinsics: Intrinsics) -> Result<Self, SmError> {
        Self::new(intrinsics, ParticleKind::WBoson)
    }

    /// Z boson.
    pub fn z_boson(intrinsics: Intrinsics) -> Result<Self, SmError> {
        Self::new(intrinsics, ParticleKind::ZBoson)
    }

    /// Higgs boson.
    pub fn higgs_boson(intrinsics: Intrinsics) -> Result<Self, SmError> {
        Self::new(intrinsics, ParticleKind::HiggsBoson)
    }

    /// Kind-specific attributes.
    pub fn kind(&self) -> &ParticleKind {
        &self.kind
    }

    /// Runtime kind of the particle.
    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    /// Family of the particle.
    pub fn class(&self) -> ParticleClass {
        self.tag().class()
    }

    /// Antiparticle flag as supplied at construction.
    ///
    /// Kept separately because neutral particles cannot be told apart by charge.
    pub fn is_antiparticle(&self) -> bool {
        self.antiparticle
    }

    /// Descriptive name: the flavour for quarks and neutrinos, the type name
    /// otherwise.
    pub fn name(&self) -> &str {
        match &self.kind {
            ParticleKind::Neutrino { name, .. } | ParticleKind::Quark { name, .. } => name.as_str(),
            _ => self.tag().type_name(),
        }
    }

    /// Returns the invariant-mass disagreement, if it exceeds `tolerance`.
    pub fn mass_mismatch(&self, tolerance: f64) -> Option<MassMismatch> {
        let invariant_mass = self.momentum.invariant_mass();
        // NaN (spacelike) fails the comparison and is reported.
        let within = (invariant_mass - self.rest_mass).abs() <= tolerance;
        (!within).then_some(MassMismatch {
            invariant_mass,
            rest_mass: self.rest_mass,
            tolerance,
        })
    }

    /// Colour label of a quark.
    pub fn colour_charge(&self) -> Option<&str> {
        match &self.kind {
            ParticleKind::Quark { colour, .. } => Some(colour.as_str()),
            _ => None,
        }
    }

    /// Colour pair of a gluon.
    pub fn colour_charges(&self) -> Option<(&str, &str)> {
        match &self.kind {
            ParticleKind::Gluon { colours } => Some((colours[0].as_str(), colours[1].as_str())),
            _ => None,
        }
    }

    /// Replaces the colour pair of a gluon.
    pub fn set_colour_charges(
        &mut self,
        colour_a: impl Into<String>,
        colour_b: impl Into<String>,
    ) -> Result<(), SmError> {
        match &mut self.kind {
            ParticleKind::Gluon { colours } => {
                *colours = [colour_a.into(), colour_b.into()];
                Ok(())
            }
            _ => Err(self.wrong_kind(KindTag::Gluon)),
        }
    }

    /// Energy deposited in calorimeter `layer` (0-based) of an electron.
    pub fn calorimeter_energy(&self, layer: usize) -> Result<f64, SmError> {
        match &self.kind {
            ParticleKind::Electron { calorimeter, .. } => calorimeter
                .get(layer)
                .copied()
                .ok_or_else(|| layer_out_of_range(layer)),
            _ => Err(self.wrong_kind(KindTag::Electron)),
        }
    }

    /// Records the energy deposited in calorimeter `layer` of an electron.
    pub fn set_calorimeter_energy(&mut self, layer: usize, energy: f64) -> Result<(), SmError> {
        let slot = match &mut self.kind {
            ParticleKind::Electron { calorimeter, .. } => calorimeter.get_mut(layer),
            _ => return Err(self.wrong_kind(KindTag::Electron)),
        };
        match slot {
            Some(slot) => {
                *slot = energy;
                Ok(())
            }
            None => Err(layer_out_of_range(layer)),
        }
    }

    /// Isolation flag of a muon.
    pub fn is_isolated(&self) -> Option<bool> {
        match self.kind {
            ParticleKind::Muon { isolated, .. } => Some(isolated),
            _ => None,
        }
    }

    /// Interaction flag of a neutrino.
    pub fn interacts(&self) -> Option<bool> {
        match self.kind {
            ParticleKind::Neutrino { interacts, .. } => Some(interacts),
            _ => None,
        }
    }

    /// Whether this kind can carry decay products.
    pub fn can_decay(&self) -> bool {
        self.tag().is_decayable()
    }

    /// Whether decay products have been attached.
    pub fn has_decayed(&self) -> bool {
        !self.decay_products.is_empty()
    }

    /// Attached decay products, in generation order. Empty before a decay.
    pub fn decay_products(&self) -> &[Particle] {
        &self.decay_products
    }

    /// Attaches decay products after checking charge conservation.
    ///
    /// Nothing is attached when the particle is stable, has already decayed,
    /// or the products' charges do not sum to the parent charge.
    pub fn attach_decay_products(
        &mut self,
        products: Vec<Particle>,
        tolerances: &Tolerances,
    ) -> Result<(), SmError> {
        if !self.can_decay() {
            return Err(SmError::Decay(
                ErrorInfo::new("stable-particle", "particle kind has no decay channels")
                    .with_context("particle", self.name()),
            ));
        }
        if self.has_decayed() {
            return Err(SmError::Decay(
                ErrorInfo::new("already-decayed", "particle already carries decay products")
                    .with_context("particle", self.name())
                    .with_context("products", self.decay_products.len()),
            ));
        }
        if products.is_empty() {
            return Err(SmError::Decay(
                ErrorInfo::new("empty-decay", "a decay needs at least one product")
                    .with_context("particle", self.name()),
            ));
        }
        check_charge_conservation(self.charge, &products, tolerances.conservation)?;
        self.decay_products = products;
        Ok(())
    }

    /// Re-checks the attached products against the parent charge.
    pub fn check_decay_consistency(&self, tolerances: &Tolerances) -> Result<(), SmError> {
        check_charge_conservation(self.charge, &self.decay_products, tolerances.conservation)
    }

    fn wrong_kind(&self, expected: KindTag) -> SmError {
        SmError::Kind(
            ErrorInfo::new("wrong-kind", "operation needs another particle kind")
                .with_context("expected", expected.type_name())
                .with_context("actual", self.tag().type_name()),
        )
    }
}

fn layer_out_of_range(layer: usize) -> SmError {
    SmError::Range(
        ErrorInfo::new("calorimeter-layer", "invalid calorimeter layer index")
            .with_context("layer", layer)
            .with_context("layers", CALORIMETER_LAYERS),
    )
}

impl ParticleProperties for Particle {
    fn charge(&self) -> f64 {
        self.charge
    }

    fn spin(&self) -> f64 {
        self.spin
    }

    fn four_momentum(&self) -> FourMomentum {
        self.momentum
    }

    fn rest_mass(&self) -> f64 {
        self.rest_mass
    }

    fn type_name(&self) -> &str {
        match &self.kind {
            ParticleKind::Neutrino { name, .. } => name.as_str(),
            _ => self.tag().type_name(),
        }
    }

    fn lepton_number(&self) -> i32 {
        match self.kind {
            ParticleKind::Electron { lepton_number, .. }
            | ParticleKind::Muon { lepton_number, .. }
            | ParticleKind::Tau { lepton_number }
            | ParticleKind::Neutrino { lepton_number, .. } => lepton_number,
            _ => 0,
        }
    }

    fn baryon_number(&self) -> f64 {
        match self.kind {
            ParticleKind::Quark { baryon_number, .. } => baryon_number,
            _ => 0.0,
        }
    }
}
