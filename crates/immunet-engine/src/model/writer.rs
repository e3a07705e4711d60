//! Model file writer, the inverse of [`parse_model`](super::parse_model).

use std::fmt::Write as _;
use std::path::Path;

use immunet_core::constants::WEIGHT_PRECISION;
use immunet_core::errors::StorageError;

use super::types::ContagionModel;

/// Render a model in the line-oriented format: seeds, every node, edges in
/// insertion order, then the run parameters.
pub fn write_model(model: &ContagionModel) -> String {
    let network = &model.network;
    let mut out = String::new();

    for &seed in network.seeds() {
        let _ = writeln!(out, "INFECTED_NODE {}", network.node_name(seed));
    }
    for id in network.node_table().ids() {
        let _ = writeln!(out, "NODE {}", network.node_name(id));
    }
    for edge in network.edges() {
        let _ = writeln!(
            out,
            "EDGE {} {} {:.prec$}",
            network.node_name(edge.parent),
            network.node_name(edge.node),
            edge.weight,
            prec = WEIGHT_PRECISION,
        );
    }
    let _ = writeln!(out, "NUM_INSTANCES {}", model.num_instances);
    let _ = writeln!(out, "NUM_VACCINES {}", model.num_vaccines);
    out
}

/// Write a model file, creating parent directories as needed.
pub fn save_model(model: &ContagionModel, path: &Path) -> Result<(), StorageError> {
    let write_err = |e: std::io::Error| StorageError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    std::fs::write(path, write_model(model)).map_err(write_err)?;
    tracing::info!(path = %path.display(), "model written");
    Ok(())
}
