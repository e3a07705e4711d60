//! JSON persistence of realization sets.
//!
//! File layout: an array with one object per realization,
//!
//! ```json
//! [
//!     {
//!         "edges": [["a", "b"]],
//!         "infected_nodes": ["a"]
//!     }
//! ]
//! ```

use std::path::{Path, PathBuf};

use immunet_core::constants::REALIZATION_FILE_PREFIX;
use immunet_core::errors::StorageError;
use immunet_core::types::{NodeId, NodeTable};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::deterministic::DeterministicRealization;
use super::set::RealizationSet;
use crate::model::ProbabilisticNetwork;

/// On-disk shape of one realization.
#[derive(Debug, Serialize, Deserialize)]
struct RealizationRecord {
    #[serde(default)]
    edges: Vec<(String, String)>,
    infected_nodes: Vec<String>,
}

/// `greedy_deterministicInstances_{nodes}_{vaccines}_{instances}.json`
pub fn file_name(node_count: usize, num_vaccines: usize, num_instances: usize) -> String {
    format!("{REALIZATION_FILE_PREFIX}_{node_count}_{num_vaccines}_{num_instances}.json")
}

impl RealizationSet {
    /// Serialize with node tokens from `nodes`. Edges and seeds are sorted
    /// so the output does not depend on sampling order.
    pub fn to_json(&self, nodes: &NodeTable, indent: usize) -> Result<String, StorageError> {
        let records: Vec<RealizationRecord> = self.iter().map(|r| record_of(r, nodes)).collect();

        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|e| StorageError::Serialization {
                message: e.to_string(),
            })?;
        String::from_utf8(buf).map_err(|e| StorageError::Serialization {
            message: e.to_string(),
        })
    }

    /// Write the set to `dir/file_name`, creating `dir` if needed.
    pub fn save(
        &self,
        nodes: &NodeTable,
        dir: &Path,
        file_name: &str,
        indent: usize,
    ) -> Result<PathBuf, StorageError> {
        let path = dir.join(file_name);
        let write_err = |e: std::io::Error| StorageError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;
        let json = self.to_json(nodes, indent)?;
        std::fs::write(&path, json).map_err(write_err)?;

        tracing::info!(path = %path.display(), count = self.len(), "realizations saved");
        Ok(path)
    }

    /// Read a realization file against `network`'s node table. Every token
    /// must name a network node.
    pub fn load(path: &Path, network: &ProbabilisticNetwork) -> Result<Self, StorageError> {
        let text = std::fs::read_to_string(path).map_err(|e| StorageError::FileOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let records: Vec<RealizationRecord> =
            serde_json::from_str(&text).map_err(|e| StorageError::Serialization {
                message: e.to_string(),
            })?;

        let mut realizations = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.infected_nodes.is_empty() {
                return Err(StorageError::MalformedRealization {
                    index,
                    message: "no infected nodes".to_string(),
                });
            }
            let seeds = record
                .infected_nodes
                .iter()
                .map(|name| lookup(network, name))
                .collect::<Result<Vec<_>, _>>()?;
            let edges = record
                .edges
                .iter()
                .map(|(parent, node)| Ok((lookup(network, parent)?, lookup(network, node)?)))
                .collect::<Result<Vec<_>, StorageError>>()?;
            realizations.push(DeterministicRealization::new(
                network.node_table(),
                &seeds,
                &edges,
            ));
        }

        tracing::info!(path = %path.display(), count = realizations.len(), "realizations loaded");
        Ok(Self::new(realizations, None))
    }
}

fn record_of(realization: &DeterministicRealization, nodes: &NodeTable) -> RealizationRecord {
    let mut edges: Vec<(String, String)> = realization
        .live_edges()
        .map(|(p, n)| (nodes.resolve(p).to_string(), nodes.resolve(n).to_string()))
        .collect();
    edges.sort_unstable();

    let mut infected_nodes = nodes.names(realization.initial_infected());
    infected_nodes.sort_unstable();

    RealizationRecord {
        edges,
        infected_nodes,
    }
}

fn lookup(network: &ProbabilisticNetwork, name: &str) -> Result<NodeId, StorageError> {
    network.node_id(name).ok_or_else(|| StorageError::UnknownNode {
        name: name.to_string(),
    })
}
