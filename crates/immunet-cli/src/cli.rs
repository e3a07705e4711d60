use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use immunet_engine::generators::ModelParams;

#[derive(Parser, Debug)]
#[command(name = "immunet")]
#[command(version)]
#[command(about = "Greedy immunization on probabilistic contagion networks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample realizations of a model and select an immunization set
    Run(RunArgs),

    /// Generate a synthetic model file
    #[command(subcommand)]
    Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Model file
    pub model: PathBuf,

    /// Base sampling seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override NUM_INSTANCES
    #[arg(long)]
    pub instances: Option<u32>,

    /// Override NUM_VACCINES
    #[arg(long)]
    pub vaccines: Option<usize>,

    /// Directory for the realization file
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Do not write the realization file
    #[arg(long)]
    pub no_save: bool,

    /// Replay a saved realization file instead of sampling
    #[arg(long)]
    pub realizations: Option<PathBuf>,

    /// Directory searched for immunet.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommand {
    /// Directed Erdős–Rényi G(n, p)
    ErdosRenyi(ErdosRenyiArgs),

    /// Waxman graph over Gaussian-clustered points
    Waxman(WaxmanArgs),
}

#[derive(Args, Debug)]
pub struct ErdosRenyiArgs {
    /// Number of nodes
    #[arg(long)]
    pub nodes: usize,

    /// Probability of each directed edge
    #[arg(long, default_value_t = 0.3)]
    pub edge_prob: f64,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Debug)]
pub struct WaxmanArgs {
    /// Number of nodes
    #[arg(long)]
    pub nodes: usize,

    /// Number of Gaussian clusters
    #[arg(long)]
    pub centers: usize,

    /// Edge density in (0, 1]
    #[arg(long)]
    pub alpha: f64,

    /// Distance decay
    #[arg(long)]
    pub beta: f64,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Fraction of nodes infected initially
    #[arg(long, default_value_t = 0.1)]
    pub infected_ratio: f64,

    /// Immunization budget as a fraction of the node count
    #[arg(long, default_value_t = 0.1)]
    pub vaccine_ratio: f64,

    /// NUM_INSTANCES written to the model
    #[arg(long, default_value_t = 50)]
    pub instances: u32,

    /// Generator seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (default: derived from the parameters)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl ModelArgs {
    pub fn params(&self) -> ModelParams {
        ModelParams {
            infected_ratio: self.infected_ratio,
            vaccine_ratio: self.vaccine_ratio,
            num_instances: self.instances,
        }
    }
}
