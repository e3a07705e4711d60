//! Tests for the immunet configuration system.

use std::sync::Mutex;

use immunet_core::config::{CliOverrides, ImmunetConfig};
use immunet_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all IMMUNET_ env vars to prevent cross-test contamination.
fn clear_immunet_env_vars() {
    for key in [
        "IMMUNET_SAMPLING_SEED",
        "IMMUNET_SAMPLING_NUM_INSTANCES",
        "IMMUNET_SELECTION_NUM_VACCINES",
        "IMMUNET_OUTPUT_DIRECTORY",
        "IMMUNET_OUTPUT_WRITE_REALIZATIONS",
        "IMMUNET_OUTPUT_INDENT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_immunet_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("immunet.toml"),
        r#"
[sampling]
seed = 7
num_instances = 200

[output]
indent = 2
"#,
    )
    .unwrap();

    // Env overrides the project file for num_instances
    std::env::set_var("IMMUNET_SAMPLING_NUM_INSTANCES", "300");

    let cli = CliOverrides {
        seed: Some(99),
        ..Default::default()
    };
    let config = ImmunetConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.sampling.seed, Some(99));
    assert_eq!(config.sampling.num_instances, Some(300));
    assert_eq!(config.output.indent, Some(2));

    clear_immunet_env_vars();
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_immunet_env_vars();

    let dir = tempdir();
    let config = ImmunetConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.sampling.seed, None);
    assert_eq!(config.selection.num_vaccines, None);
    assert_eq!(config.output.effective_indent(), 4);
    assert!(config.output.effective_write_realizations());
    assert_eq!(config.output.effective_directory(), std::path::PathBuf::from("."));
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_immunet_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("immunet.toml"), "[sampling\nseed = ").unwrap();

    let err = ImmunetConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_unparsable_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_immunet_env_vars();

    std::env::set_var("IMMUNET_SAMPLING_SEED", "not-a-number");
    let dir = tempdir();
    let err = ImmunetConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvValue { .. }), "got {err:?}");

    clear_immunet_env_vars();
}

#[test]
fn test_validation_rejects_zero_instances_and_wide_indent() {
    let config = ImmunetConfig::from_toml("[sampling]\nnum_instances = 0\n").unwrap();
    assert!(matches!(
        ImmunetConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let config = ImmunetConfig::from_toml("[output]\nindent = 64\n").unwrap();
    assert!(matches!(
        ImmunetConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = ImmunetConfig::from_toml(
        r#"
[sampling]
seed = 3
future_knob = "x"

[reporting]
colour = true
"#,
    )
    .unwrap();
    assert_eq!(config.sampling.seed, Some(3));
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = ImmunetConfig::from_toml(
        "[selection]\nnum_vaccines = 5\n[output]\ndirectory = \"out\"\nwrite_realizations = false\n",
    )
    .unwrap();
    let reparsed = ImmunetConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.selection.num_vaccines, Some(5));
    assert_eq!(reparsed.output.directory.as_deref(), Some("out"));
    assert_eq!(reparsed.output.write_realizations, Some(false));
}
