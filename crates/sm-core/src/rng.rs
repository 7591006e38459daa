//! Deterministic RNG wrapper, seed-derivation helpers and discrete choice sources.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle exposed to toolkit consumers.
///
/// The handle is a thin wrapper around `StdRng`. A master `seed: u64` must be
/// provided by the caller. Substreams are derived by hashing
/// `(master_seed, substream_id)` with SipHash-1-3 configured with fixed zero
/// keys, so a run that decays several parents can give each one its own
/// reproducible stream.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Seeds a handle from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for a numbered substream of `master_seed`.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Seed for `substream` of `master_seed`.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}

/// Source of uniformly distributed discrete choices.
///
/// Decay channel selection only ever needs "pick one of `options`", so this is
/// the whole surface the generator depends on.
pub trait ChoiceSource {
    /// Returns an index in `0..options`. `options` is always non-zero.
    fn choose(&mut self, options: usize) -> usize;
}

impl<R: RngCore> ChoiceSource for R {
    fn choose(&mut self, options: usize) -> usize {
        debug_assert!(options > 0, "choice over an empty option set");
        self.gen_range(0..options.max(1))
    }
}

/// Replays a fixed sequence of choices, cycling when exhausted.
///
/// Scripted values larger than the option count wrap modulo the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedChoices {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedChoices {
    /// Creates a source replaying `script`. An empty script always yields 0.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of choices drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(&mut self, options: usize) -> usize {
        let options = options.max(1);
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % options
    }
}
