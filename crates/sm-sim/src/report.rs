//! JSON-serialisable summaries printed by the CLI.

use std::collections::BTreeMap;

use serde::Serialize;
use sm_core::{RngHandle, SmError};
use sm_decay::{DecayChannel, DecayGenerator};
use sm_particle::{
    Particle, ParticleCatalogue, ParticleClass, ParticleProperties, QuantumNumberBalance,
};

/// Aggregate counts over a catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    /// Number of particles held.
    pub total: usize,
    /// Count per lower-cased type name.
    pub by_type: BTreeMap<String, usize>,
    /// Count per particle family.
    pub by_class: BTreeMap<ParticleClass, usize>,
    /// Summed four-momentum as `[E, px, py, pz]`.
    pub total_four_momentum: [f64; 4],
}

impl RosterSummary {
    /// Summarises `catalogue`.
    pub fn of(catalogue: &ParticleCatalogue) -> Self {
        let by_class = [ParticleClass::Lepton, ParticleClass::Quark, ParticleClass::Boson]
            .into_iter()
            .map(|class| (class, catalogue.count_of_class(class)))
            .collect();
        Self {
            total: catalogue.total_count(),
            by_type: catalogue.counts_by_type(),
            by_class,
            total_four_momentum: catalogue.total_four_momentum().to_array(),
        }
    }
}

/// One generated product as shown in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    /// Descriptive name.
    pub name: String,
    /// Electric charge.
    pub charge: f64,
}

impl From<&Particle> for ProductSummary {
    fn from(particle: &Particle) -> Self {
        Self {
            name: particle.name().to_string(),
            charge: particle.charge(),
        }
    }
}

/// Outcome of decaying one roster member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayRecord {
    /// Position of the parent in the roster.
    pub index: usize,
    /// Parent's descriptive name.
    pub parent: String,
    /// Parent's charge.
    pub charge: f64,
    /// Channel drawn for the parent.
    pub channel: DecayChannel,
    /// Products in channel order.
    pub products: Vec<ProductSummary>,
    /// Quantum-number bookkeeping of the products.
    pub balance: QuantumNumberBalance,
}

/// Decays every decayable member of `roster` in place.
///
/// Member `i` draws from substream `i` of `seed`, so adding a stable member
/// does not change the channels drawn for the others.
pub fn decay_roster(
    roster: &mut [Particle],
    generator: &DecayGenerator,
    seed: u64,
) -> Result<Vec<DecayRecord>, SmError> {
    let mut records = Vec::new();
    for (index, particle) in roster.iter_mut().enumerate() {
        if !particle.can_decay() {
            continue;
        }
        let mut rng = RngHandle::substream(seed, index as u64);
        let channel = generator.decay(particle, &mut rng)?;
        let products = particle.decay_products();
        records.push(DecayRecord {
            index,
            parent: particle.name().to_string(),
            charge: particle.charge(),
            channel,
            products: products.iter().map(ProductSummary::from).collect(),
            balance: QuantumNumberBalance::of(&*particle, products),
        });
    }
    Ok(records)
}
