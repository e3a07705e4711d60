//! Top-level immunet configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OutputConfig, SamplingConfig, SelectionConfig};
use crate::constants::{MAX_INDENT, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`IMMUNET_*`)
/// 3. Project config (`immunet.toml` in the working root)
/// 4. User config (`~/.immunet/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImmunetConfig {
    pub sampling: SamplingConfig,
    pub selection: SelectionConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub num_instances: Option<u32>,
    pub num_vaccines: Option<usize>,
    pub output_directory: Option<String>,
    pub write_realizations: Option<bool>,
}

impl ImmunetConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Err(e @ ConfigError::Unreadable { .. }) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                    other => other?,
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ImmunetConfig) -> Result<(), ConfigError> {
        if let Some(indent) = config.output.indent {
            if indent > MAX_INDENT {
                return Err(ConfigError::ValidationFailed {
                    field: "output.indent".to_string(),
                    message: format!("must be at most {MAX_INDENT}"),
                });
            }
        }
        if config.sampling.num_instances == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.num_instances".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref dir) = config.output.directory {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.directory".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.immunet/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ImmunetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: ImmunetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ImmunetConfig, other: &ImmunetConfig) {
        // Sampling
        if other.sampling.seed.is_some() {
            base.sampling.seed = other.sampling.seed;
        }
        if other.sampling.num_instances.is_some() {
            base.sampling.num_instances = other.sampling.num_instances;
        }

        // Selection
        if other.selection.num_vaccines.is_some() {
            base.selection.num_vaccines = other.selection.num_vaccines;
        }

        // Output
        if other.output.directory.is_some() {
            base.output.directory = other.output.directory.clone();
        }
        if other.output.write_realizations.is_some() {
            base.output.write_realizations = other.output.write_realizations;
        }
        if other.output.indent.is_some() {
            base.output.indent = other.output.indent;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `IMMUNET_SAMPLING_SEED`, `IMMUNET_OUTPUT_INDENT`, etc.
    /// Unlike unknown TOML keys, a present but unparsable value is an error.
    fn apply_env_overrides(config: &mut ImmunetConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<u64>("IMMUNET_SAMPLING_SEED")? {
            config.sampling.seed = Some(v);
        }
        if let Some(v) = env_parse::<u32>("IMMUNET_SAMPLING_NUM_INSTANCES")? {
            config.sampling.num_instances = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IMMUNET_SELECTION_NUM_VACCINES")? {
            config.selection.num_vaccines = Some(v);
        }
        if let Ok(val) = std::env::var("IMMUNET_OUTPUT_DIRECTORY") {
            config.output.directory = Some(val);
        }
        if let Some(v) = env_parse::<bool>("IMMUNET_OUTPUT_WRITE_REALIZATIONS")? {
            config.output.write_realizations = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IMMUNET_OUTPUT_INDENT")? {
            config.output.indent = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ImmunetConfig, cli: &CliOverrides) {
        if let Some(v) = cli.seed {
            config.sampling.seed = Some(v);
        }
        if let Some(v) = cli.num_instances {
            config.sampling.num_instances = Some(v);
        }
        if let Some(v) = cli.num_vaccines {
            config.selection.num_vaccines = Some(v);
        }
        if let Some(ref v) = cli.output_directory {
            config.output.directory = Some(v.clone());
        }
        if let Some(v) = cli.write_realizations {
            config.output.write_realizations = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an environment variable, `Ok(None)` when unset.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: key.to_string(),
                value: val.clone(),
            }),
        Err(_) => Ok(None),
    }
}

/// Returns the user-level immunet config directory: `~/.immunet/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".immunet"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
