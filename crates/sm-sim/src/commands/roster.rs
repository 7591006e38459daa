use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use sm_decay::DecayGenerator;
use sm_particle::ParticleCatalogue;
use sm_sim::{decay_roster, reference_roster, RosterSummary};

use super::resolve_config;

#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Optional YAML run configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Decay unstable members first and catalogue their products too.
    #[arg(long)]
    pub with_products: bool,
    /// Seed override used with `--with-products`.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &RosterArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args.config.as_deref(), args.seed)?;
    let mut roster = reference_roster(&config.tolerances)?;
    let mut catalogue = ParticleCatalogue::new();
    if args.with_products {
        let generator = DecayGenerator::new(config.tolerances)?;
        decay_roster(&mut roster, &generator, config.seed)?;
        for particle in roster {
            catalogue.add_with_products(particle);
        }
    } else {
        catalogue.extend(roster);
    }
    let summary = RosterSummary::of(&catalogue);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
