//! Contagion model: the weighted network plus the run parameters read
//! from a model file.

pub mod network;
pub mod parser;
pub mod types;
pub mod writer;

pub use network::{ProbabilisticNetwork, WeightedEdge};
pub use parser::{load_model, parse_model, ParsedModel};
pub use types::ContagionModel;
pub use writer::{save_model, write_model};
