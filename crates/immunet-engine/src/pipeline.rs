//! End-to-end run: model file in, immunization set out.

use std::path::{Path, PathBuf};
use std::time::Duration;

use immunet_core::config::ImmunetConfig;
use immunet_core::errors::{ImmunetErrorCode, PipelineError};
use immunet_core::events::types::{ErrorEvent, RealizationsSavedEvent};
use immunet_core::events::ImmunetEventHandler;

use crate::model::{load_model, ContagionModel};
use crate::realization::storage::file_name;
use crate::realization::RealizationSet;
use crate::sampling::RealizationSampler;
use crate::selection::{GreedySelector, RoundRecord};

/// Per-invocation options that are not configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Replay a saved realization file instead of sampling.
    pub realizations: Option<PathBuf>,
}

/// Result of a run, with node ids resolved to tokens.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Chosen nodes in selection order.
    pub immunization: Vec<String>,
    /// Infected nodes summed over all realizations under the chosen set.
    pub infected_total: u64,
    /// Duration of the selection phase.
    pub elapsed: Duration,
    /// Where realizations were written, if they were.
    pub realizations_path: Option<PathBuf>,
    /// Base sampling seed; `None` when realizations were replayed.
    pub seed: Option<u64>,
    pub rounds: Vec<RoundRecord>,
    pub realization_count: usize,
}

/// Load, validate, sample (or replay), save, select.
///
/// Errors are reported to `handler` before being returned.
pub fn run(
    model_path: &Path,
    options: &RunOptions,
    config: &ImmunetConfig,
    handler: &dyn ImmunetEventHandler,
) -> Result<RunReport, PipelineError> {
    run_inner(model_path, options, config, handler).inspect_err(|e| {
        handler.on_error(&ErrorEvent {
            message: e.to_string(),
            error_code: e.error_code().to_string(),
        });
    })
}

fn run_inner(
    model_path: &Path,
    options: &RunOptions,
    config: &ImmunetConfig,
    handler: &dyn ImmunetEventHandler,
) -> Result<RunReport, PipelineError> {
    tracing::info!(model = %model_path.display(), "loading model");
    let mut model = load_model(model_path)?.validate()?;
    model.apply_config(config);

    let mut realizations = match options.realizations {
        Some(ref path) => RealizationSet::load(path, &model.network)?,
        None => sample(&model, config, handler)?,
    };

    let realizations_path = if options.realizations.is_none()
        && config.output.effective_write_realizations()
    {
        let name = file_name(
            model.network.node_count(),
            model.num_vaccines,
            model.num_instances as usize,
        );
        let path = realizations.save(
            model.network.node_table(),
            &config.output.effective_directory(),
            &name,
            config.output.effective_indent(),
        )?;
        handler.on_realizations_saved(&RealizationsSavedEvent {
            path: path.clone(),
            count: realizations.len(),
        });
        Some(path)
    } else {
        None
    };

    let outcome = GreedySelector::new(model.num_vaccines).select(
        &model.network,
        &mut realizations,
        handler,
    );

    Ok(RunReport {
        immunization: outcome.immunization.names(model.network.node_table()),
        infected_total: outcome.verification.infected_total,
        elapsed: outcome.elapsed,
        realizations_path,
        seed: realizations.seed(),
        rounds: outcome.rounds,
        realization_count: realizations.len(),
    })
}

fn sample(
    model: &ContagionModel,
    config: &ImmunetConfig,
    handler: &dyn ImmunetEventHandler,
) -> Result<RealizationSet, PipelineError> {
    let mut sampler = RealizationSampler::new(model.num_instances);
    if let Some(seed) = config.sampling.seed {
        sampler = sampler.with_seed(seed);
    }
    Ok(sampler.sample_with_events(&model.network, handler)?)
}
