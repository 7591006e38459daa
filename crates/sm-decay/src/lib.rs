#![deny(missing_docs)]
#![doc = "Decay channel tables and the stochastic decay generator for Standard-Model particles."]

//! Children of a decay carry their parent's four-momentum unchanged, so the
//! summed energy of the products exceeds the parent's.

/// Channel tables and product construction.
pub mod channels;
/// Channel selection and validated attachment of products.
pub mod generator;

pub use channels::{masses, DecayChannel};
pub use generator::{DecayEvent, DecayGenerator};
