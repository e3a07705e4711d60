//! Line-oriented model file parser.
//!
//! One directive per line, whitespace-separated:
//!
//! ```text
//! INFECTED_NODE a
//! NODE d
//! EDGE a b 0.5
//! NUM_INSTANCES 100
//! NUM_VACCINES 2
//! ```

use std::path::Path;

use immunet_core::errors::{ParseError, PipelineError, StorageError, ValidationError};

use super::network::ProbabilisticNetwork;
use super::types::ContagionModel;

/// A model file read into memory but not yet validated.
#[derive(Debug, Default)]
pub struct ParsedModel {
    pub network: ProbabilisticNetwork,
    pub num_instances: Option<u32>,
    pub num_vaccines: Option<usize>,
}

impl ParsedModel {
    /// Check required directives in priority order (seeds, instance count,
    /// vaccine budget), then the incoming-weight invariant.
    pub fn validate(self) -> Result<ContagionModel, ValidationError> {
        if self.network.seeds().is_empty() {
            return Err(ValidationError::MissingInfectedNodes);
        }
        let num_instances = self
            .num_instances
            .ok_or(ValidationError::MissingNumInstances)?;
        let num_vaccines = self.num_vaccines.ok_or(ValidationError::MissingNumVaccines)?;
        self.network.check_invariant()?;

        Ok(ContagionModel {
            network: self.network,
            num_instances,
            num_vaccines,
        })
    }
}

/// Parse a model from text. Blank lines are skipped and tokens past a
/// directive's fields are ignored. A repeated `NUM_*` directive keeps the
/// last value.
pub fn parse_model(input: &str) -> Result<ParsedModel, ParseError> {
    let mut model = ParsedModel::default();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw.split_whitespace();
        let Some(directive) = tokens.next() else {
            continue;
        };

        match directive {
            "NODE" => {
                let node = field(&mut tokens, line, "NODE", "node")?;
                model.network.add_node(node);
            }
            "INFECTED_NODE" => {
                let node = field(&mut tokens, line, "INFECTED_NODE", "node")?;
                model.network.add_initial_infected_node(node);
            }
            "EDGE" => {
                let parent = field(&mut tokens, line, "EDGE", "source")?;
                let node = field(&mut tokens, line, "EDGE", "target")?;
                let weight = number::<f64>(&mut tokens, line, "EDGE", "weight")?;
                model.network.add_edge(parent, node, weight);
            }
            "NUM_INSTANCES" => {
                model.num_instances =
                    Some(number(&mut tokens, line, "NUM_INSTANCES", "instance count")?);
            }
            "NUM_VACCINES" => {
                model.num_vaccines =
                    Some(number(&mut tokens, line, "NUM_VACCINES", "vaccine count")?);
            }
            other => {
                return Err(ParseError::UnknownDirective {
                    line,
                    token: other.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        nodes = model.network.node_count(),
        edges = model.network.edge_count(),
        seeds = model.network.seeds().len(),
        "parsed model"
    );
    Ok(model)
}

/// Read and parse a model file.
pub fn load_model(path: &Path) -> Result<ParsedModel, PipelineError> {
    let text = std::fs::read_to_string(path).map_err(|e| StorageError::FileOpen {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(parse_model(&text)?)
}

fn field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    directive: &'static str,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::MissingField {
        line,
        directive,
        field,
    })
}

fn number<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    directive: &'static str,
    name: &'static str,
) -> Result<T, ParseError> {
    let raw = field(tokens, line, directive, name)?;
    raw.parse::<T>().map_err(|_| ParseError::InvalidNumber {
        line,
        field: name,
        value: raw.to_string(),
    })
}
