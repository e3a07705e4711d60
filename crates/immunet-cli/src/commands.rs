//! Subcommand implementations.

use std::path::PathBuf;
use std::sync::Arc;

use immunet_core::config::{CliOverrides, ImmunetConfig};
use immunet_core::errors::PipelineError;
use immunet_core::events::EventDispatcher;
use immunet_engine::generators::{erdos_renyi, waxman, ErdosRenyiParams, WaxmanParams};
use immunet_engine::model::save_model;
use immunet_engine::pipeline::{self, RunOptions};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cli::{GenerateCommand, RunArgs};
use crate::handler::LoggingHandler;

/// `immunet run`: prints the infected total, then the selection time in
/// seconds.
pub fn run(args: RunArgs) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        seed: args.seed,
        num_instances: args.instances,
        num_vaccines: args.vaccines,
        output_directory: args.output_dir,
        write_realizations: args.no_save.then_some(false),
    };
    let config = ImmunetConfig::load(&args.root, Some(&overrides))?;

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(LoggingHandler));

    let options = RunOptions {
        realizations: args.realizations,
    };
    let report = pipeline::run(&args.model, &options, &config, &dispatcher)?;

    tracing::info!(
        nodes = ?report.immunization,
        seed = ?report.seed,
        "immunization set"
    );
    println!("{}", report.infected_total);
    println!("{}", report.elapsed.as_secs_f64());
    Ok(())
}

/// `immunet generate`: writes a model file and prints its path.
pub fn generate(command: GenerateCommand) -> Result<(), PipelineError> {
    let (model, out) = match command {
        GenerateCommand::ErdosRenyi(args) => {
            let params = ErdosRenyiParams {
                nodes: args.nodes,
                edge_probability: args.edge_prob,
                model: args.model.params(),
            };
            let mut rng = seeded_rng(args.model.seed);
            let out = args
                .model
                .out
                .unwrap_or_else(|| PathBuf::from(params.default_file_name()));
            (erdos_renyi::generate(&params, &mut rng)?, out)
        }
        GenerateCommand::Waxman(args) => {
            let params = WaxmanParams {
                nodes: args.nodes,
                centers: args.centers,
                alpha: args.alpha,
                beta: args.beta,
                model: args.model.params(),
            };
            let mut rng = seeded_rng(args.model.seed);
            let out = args
                .model
                .out
                .unwrap_or_else(|| PathBuf::from(params.default_file_name()));
            (waxman::generate(&params, &mut rng)?, out)
        }
    };

    save_model(&model, &out)?;
    println!("{}", out.display());
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(seed, "generator seed");
    ChaCha20Rng::seed_from_u64(seed)
}
