use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use sm_decay::DecayGenerator;
use sm_sim::{decay_roster, reference_roster, DecayRecord};

use super::resolve_config;

#[derive(Args, Debug)]
pub struct DecayArgs {
    /// Optional YAML run configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed; overrides the configuration file.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct DecayReport {
    seed: u64,
    decays: Vec<DecayRecord>,
}

pub fn run(args: &DecayArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args.config.as_deref(), args.seed)?;
    let generator = DecayGenerator::new(config.tolerances)?;
    let mut roster = reference_roster(generator.tolerances())?;
    let decays = decay_roster(&mut roster, &generator, config.seed)?;
    let report = DecayReport {
        seed: config.seed,
        decays,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
