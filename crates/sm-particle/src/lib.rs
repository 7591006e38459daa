#![deny(missing_docs)]
#![doc = "Standard-Model particle variants, charge validation, conservation checks and the particle catalogue."]

use sm_core::FourMomentum;

/// Ordered particle catalogue with count and aggregate queries.
pub mod catalogue;
pub mod charge;
pub mod conservation;
pub mod particle;

pub use catalogue::ParticleCatalogue;
pub use charge::{is_valid_charge, validate_charge, VALID_CHARGES};
pub use conservation::{check_charge_conservation, check_charge_sum, QuantumNumberBalance};
pub use particle::{
    Intrinsics, KindTag, MassMismatch, Particle, ParticleClass, ParticleKind, CALORIMETER_LAYERS,
};

/// Read-only capability set shared by every particle kind.
pub trait ParticleProperties {
    /// Electric charge in units of e, after antiparticle negation.
    fn charge(&self) -> f64;

    /// Spin quantum number.
    fn spin(&self) -> f64;

    /// Four-momentum.
    fn four_momentum(&self) -> FourMomentum;

    /// Declared rest mass.
    fn rest_mass(&self) -> f64;

    /// Type name used for catalogue filtering.
    fn type_name(&self) -> &str;

    /// Lepton number; zero for non-leptons.
    fn lepton_number(&self) -> i32 {
        0
    }

    /// Baryon number; zero for non-quarks.
    fn baryon_number(&self) -> f64 {
        0.0
    }
}
