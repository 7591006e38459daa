#![deny(missing_docs)]
#![doc = "Core value types for the SM particle toolkit: four-momenta, structured errors, tolerances and deterministic randomness."]

/// Tolerance configuration shared by validation and decay checks.
pub mod config;
pub mod errors;
pub mod momentum;
pub mod rng;

pub use config::{Tolerances, MAX_CHARGE_TOLERANCE};
pub use errors::{ErrorInfo, SmError};
pub use momentum::FourMomentum;
pub use rng::{derive_substream_seed, ChoiceSource, RngHandle, ScriptedChoices};
