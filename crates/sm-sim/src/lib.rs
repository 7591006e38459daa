#![deny(missing_docs)]
#![doc = "Reference roster, run configuration and JSON reports behind the `sm-sim` binary."]

/// YAML run configuration.
pub mod config;
pub mod report;
/// The reference particle roster.
pub mod roster;

pub use config::RunConfig;
pub use report::{decay_roster, DecayRecord, ProductSummary, RosterSummary};
pub use roster::reference_roster;
