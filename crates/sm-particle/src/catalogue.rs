use std::collections::BTreeMap;

use sm_core::FourMomentum;

use crate::particle::{KindTag, Particle, ParticleClass};
use crate::ParticleProperties;

/// Insertion-ordered collection of particles.
///
/// The catalogue owns what it holds and only grows. Decay products stay owned
/// by their parent; [`ParticleCatalogue::add_with_products`] stores copies.
#[derive(Debug, Clone, Default)]
pub struct ParticleCatalogue {
    particles: Vec<Particle>,
}

impl ParticleCatalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a particle. No de-duplication is performed.
    pub fn add(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Appends copies of every decay product (depth first), then the parent.
    pub fn add_with_products(&mut self, particle: Particle) {
        for product in particle.decay_products() {
            self.add_with_products(product.clone());
        }
        self.add(particle);
    }

    /// Number of particles held.
    pub fn total_count(&self) -> usize {
        self.particles.len()
    }

    /// True when nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    /// Particles as a slice.
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles whose type name matches `type_name`, ignoring case.
    pub fn count_by_type(&self, type_name: &str) -> usize {
        self.matching(type_name).count()
    }

    /// Particles whose type name matches `type_name`, ignoring case.
    pub fn particles_of_type(&self, type_name: &str) -> Vec<&Particle> {
        self.matching(type_name).collect()
    }

    /// Count per lower-cased type name.
    pub fn counts_by_type(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for particle in &self.particles {
            *counts
                .entry(particle.type_name().to_lowercase())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Number of particles of runtime kind `kind`.
    pub fn count_of_kind(&self, kind: KindTag) -> usize {
        self.particles.iter().filter(|p| p.tag() == kind).count()
    }

    /// Number of particles in family `class`.
    pub fn count_of_class(&self, class: ParticleClass) -> usize {
        self.particles.iter().filter(|p| p.class() == class).count()
    }

    /// Sum of all four-momenta, starting from the zero vector.
    pub fn total_four_momentum(&self) -> FourMomentum {
        self.particles
            .iter()
            .fold(FourMomentum::ZERO, |acc, p| acc.add(&p.four_momentum()))
    }

    /// Stable sort by ascending charge.
    pub fn sort_by_charge(&mut self) {
        self.particles.sort_by(|a, b| a.charge().total_cmp(&b.charge()));
    }

    fn matching(&self, type_name: &str) -> impl Iterator<Item = &Particle> + '_ {
        let wanted = type_name.to_lowercase();
        self.particles
            .iter()
            .filter(move |p| p.type_name().to_lowercase() == wanted)
    }
}

impl Extend<Particle> for ParticleCatalogue {
    fn extend<I: IntoIterator<Item = Particle>>(&mut self, iter: I) {
        self.particles.extend(iter);
    }
}

impl FromIterator<Particle> for ParticleCatalogue {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParticleCatalogue {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
