//! Shared constants for the immunet engine.

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "IMMUNET_LOG";

/// Filter used when `IMMUNET_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "immunet=info";

/// Project-level config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "immunet.toml";

/// Default directory for sampled realization files.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = ".";

/// Default JSON indent width for realization files.
pub const DEFAULT_INDENT: usize = 4;

/// Largest accepted JSON indent width.
pub const MAX_INDENT: usize = 16;

/// Upper bound on the total incoming weight of any node. Compared with a
/// strict `>` on the running f64 sum, with no rounding tolerance: decimal
/// weights that add up to exactly 1 may be rejected.
pub const MAX_INCOMING_WEIGHT: f64 = 1.0;

/// Golden-ratio increment used to derive per-realization seeds.
pub const SEED_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// Raw incoming weights are divided by `sum * WEIGHT_SLACK` in generated
/// graphs, keeping every node's incoming total strictly below 1.
pub const WEIGHT_SLACK: f64 = 1.1;

/// Decimal places used when writing edge weights.
pub const WEIGHT_PRECISION: usize = 5;

/// Prefix of realization file names.
pub const REALIZATION_FILE_PREFIX: &str = "greedy_deterministicInstances";
