use serde::Serialize;
use sm_core::{ChoiceSource, ErrorInfo, SmError, Tolerances};
use sm_particle::{check_charge_conservation, Particle, ParticleProperties, QuantumNumberBalance};

use crate::channels::DecayChannel;

/// Products generated for one decay, not yet attached to the parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayEvent {
    /// Selected channel.
    pub channel: DecayChannel,
    /// Products in channel order.
    pub products: Vec<Particle>,
    /// Quantum-number bookkeeping of the products against the parent.
    pub balance: QuantumNumberBalance,
}

/// Selects decay channels and builds charge-conserving products.
///
/// The generator holds no randomness of its own; every call takes a
/// [`ChoiceSource`], so a fixed seed or a scripted sequence reproduces the
/// same decays.
#[derive(Debug, Clone, Default)]
pub struct DecayGenerator {
    tolerances: Tolerances,
}

impl DecayGenerator {
    /// Creates a generator after validating `tolerances`.
    pub fn new(tolerances: Tolerances) -> Result<Self, SmError> {
        tolerances.validate()?;
        Ok(Self { tolerances })
    }

    /// Tolerances applied to products and conservation checks.
    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Draws one channel for `parent` from `source`.
    pub fn select_channel<S>(
        &self,
        parent: &Particle,
        source: &mut S,
    ) -> Result<DecayChannel, SmError>
    where
        S: ChoiceSource + ?Sized,
    {
        let options = DecayChannel::options_for(parent).ok_or_else(|| {
            SmError::Decay(
                ErrorInfo::new("stable-particle", "particle kind has no decay channels")
                    .with_context("particle", parent.name()),
            )
        })?;
        let pick = source.choose(options.len());
        options.get(pick).copied().ok_or_else(|| {
            SmError::Decay(
                ErrorInfo::new("invalid-choice", "choice index out of range")
                    .with_context("choice", pick)
                    .with_context("options", options.len()),
            )
        })
    }

    /// Selects a channel and builds its products without touching `parent`.
    ///
    /// Fails with a conservation error when the products' charges do not add
    /// up to the parent's.
    pub fn generate<S>(&self, parent: &Particle, source: &mut S) -> Result<DecayEvent, SmError>
    where
        S: ChoiceSource + ?Sized,
    {
        let channel = self.select_channel(parent, source)?;
        log::debug!("{}: selected channel {}", parent.name(), channel.label());
        let products = channel.products(parent, &self.tolerances)?;
        check_charge_conservation(parent.charge(), &products, self.tolerances.conservation)?;

        let balance = QuantumNumberBalance::of(parent, &products);
        if !balance.is_balanced(self.tolerances.conservation) {
            log::debug!(
                "{}: {} leaves lepton number {:+} and baryon number {:+.3} unbalanced",
                parent.name(),
                channel.label(),
                balance.lepton_number,
                balance.baryon_number
            );
        }
        Ok(DecayEvent {
            channel,
            products,
            balance,
        })
    }

    /// Decays `parent` in place, attaching the generated products.
    ///
    /// A particle decays at most once. On any error the parent is left as it
    /// was and, for an already-decayed parent, no randomness is consumed.
    pub fn decay<S>(&self, parent: &mut Particle, source: &mut S) -> Result<DecayChannel, SmError>
    where
        S: ChoiceSource + ?Sized,
    {
        if parent.has_decayed() {
            return Err(SmError::Decay(
                ErrorInfo::new("already-decayed", "particle already carries decay products")
                    .with_context("particle", parent.name()),
            ));
        }
        let event = self.generate(parent, source)?;
        parent.attach_decay_products(event.products, &self.tolerances)?;
        Ok(event.channel)
    }
}
