use std::error::Error;
use std::path::Path;

use sm_sim::RunConfig;

pub mod decay;
pub mod roster;
pub mod version;

/// Loads `path` when given, otherwise the defaults, then applies a seed override.
pub fn resolve_config(
    path: Option<&Path>,
    seed: Option<u64>,
) -> Result<RunConfig, Box<dyn Error>> {
    let mut config = match path {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    log::debug!("run config: {config:?}");
    Ok(config)
}
