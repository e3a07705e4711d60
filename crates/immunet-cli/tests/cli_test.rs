//! Tests that drive the built `immunet` binary.

use std::path::Path;
use std::process::{Command, Output};

const MODEL: &str = "\
INFECTED_NODE a
EDGE a b 1.0
EDGE b c 1.0
NUM_INSTANCES 10
NUM_VACCINES 1
";

/// Run the binary with an isolated HOME and no IMMUNET_* variables.
fn immunet(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_immunet"))
        .args(args)
        .env("HOME", home)
        .env_remove("IMMUNET_LOG")
        .env_remove("IMMUNET_SAMPLING_SEED")
        .env_remove("IMMUNET_SAMPLING_NUM_INSTANCES")
        .env_remove("IMMUNET_SELECTION_NUM_VACCINES")
        .env_remove("IMMUNET_OUTPUT_DIRECTORY")
        .env_remove("IMMUNET_OUTPUT_WRITE_REALIZATIONS")
        .env_remove("IMMUNET_OUTPUT_INDENT")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = immunet(dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("run"));
}

#[test]
fn usage_errors_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(immunet(dir.path(), &[]).status.code(), Some(1));
    assert_eq!(immunet(dir.path(), &["run"]).status.code(), Some(1));
    assert_eq!(
        immunet(dir.path(), &["run", "m.txt", "--seed", "x"]).status.code(),
        Some(1)
    );
}

#[test]
fn run_prints_infected_total_then_seconds() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(dir.path(), "model.txt", MODEL);
    let out = dir.path().join("out");
    let root = dir.path().display().to_string();
    let out_arg = out.display().to_string();

    let output = immunet(
        dir.path(),
        &["run", &model, "--seed", "1", "--output-dir", &out_arg, "--root", &root],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    assert_eq!(lines[0], "10");
    assert!(lines[1].parse::<f64>().unwrap() >= 0.0);
    assert!(out.join("greedy_deterministicInstances_3_1_10.json").exists());
}

#[test]
fn no_save_skips_realization_file() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(dir.path(), "model.txt", MODEL);
    let out = dir.path().join("out");
    let root = dir.path().display().to_string();
    let out_arg = out.display().to_string();

    let output = immunet(
        dir.path(),
        &["run", &model, "--no-save", "--output-dir", &out_arg, "--root", &root],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(!out.exists());
}

#[test]
fn project_config_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(dir.path(), "model.txt", MODEL);
    write(
        dir.path(),
        "immunet.toml",
        "[selection]\nnum_vaccines = 0\n[output]\nwrite_realizations = false\n",
    );
    let root = dir.path().display().to_string();

    let output = immunet(dir.path(), &["run", &model, "--root", &root]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    // nothing vaccinated: a, b and c are infected in all 10 realizations
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some("30"));
}

#[test]
fn missing_directive_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(dir.path(), "model.txt", "INFECTED_NODE a\nNUM_INSTANCES 3\n");
    let root = dir.path().display().to_string();

    let output = immunet(dir.path(), &["run", &model, "--root", &root]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found num vaccines"));
    assert!(output.stdout.is_empty());
}

#[test]
fn weight_violation_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(
        dir.path(),
        "model.txt",
        "INFECTED_NODE a\nEDGE a c 0.6\nEDGE b c 0.6\nNUM_INSTANCES 3\nNUM_VACCINES 1\n",
    );
    let root = dir.path().display().to_string();

    let output = immunet(dir.path(), &["run", &model, "--root", &root]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Weight of incoming edges exceeds 1"));
}

#[test]
fn unknown_directive_and_missing_file_fail() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(dir.path(), "model.txt", "VERTEX a\n");
    let root = dir.path().display().to_string();

    let output = immunet(dir.path(), &["run", &model, "--root", &root]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("VERTEX"));

    let missing = dir.path().join("absent.txt").display().to_string();
    let output = immunet(dir.path(), &["run", &missing, "--root", &root]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[IO_ERROR]"));
}

#[test]
fn generated_models_can_be_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().display().to_string();
    let er = dir.path().join("er.txt").display().to_string();
    let wax = dir.path().join("wax.txt").display().to_string();

    let output = immunet(
        dir.path(),
        &["generate", "erdos-renyi", "--nodes", "12", "--seed", "3", "--instances", "5", "--out", &er],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let output = immunet(
        dir.path(),
        &[
            "generate", "waxman", "--nodes", "15", "--centers", "2", "--alpha", "0.4", "--beta",
            "0.6", "--seed", "3", "--instances", "5", "--out", &wax,
        ],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    for model in [&er, &wax] {
        let output = immunet(dir.path(), &["run", model, "--no-save", "--root", &root]);
        assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    }
}

#[test]
fn invalid_generator_parameters_fail() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("g.txt").display().to_string();
    let output = immunet(
        dir.path(),
        &["generate", "erdos-renyi", "--nodes", "0", "--out", &out],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[GENERATOR_ERROR]"));
}

#[test]
fn per_round_results_log_at_debug_only() {
    let dir = tempfile::tempdir().unwrap();
    let model = write(dir.path(), "model.txt", MODEL);
    let root = dir.path().display().to_string();
    let args = ["run", model.as_str(), "--seed", "1", "--no-save", "--root", root.as_str()];

    let quiet = immunet(dir.path(), &args);
    assert_eq!(quiet.status.code(), Some(0), "{}", stderr(&quiet));
    assert!(!stderr(&quiet).contains("vaccinated"), "{}", stderr(&quiet));

    let verbose = Command::new(env!("CARGO_BIN_EXE_immunet"))
        .args(args)
        .env("HOME", dir.path())
        .env("IMMUNET_LOG", "immunet=debug")
        .output()
        .unwrap();
    assert_eq!(verbose.status.code(), Some(0), "{}", stderr(&verbose));
    assert!(stderr(&verbose).contains("vaccinated"), "{}", stderr(&verbose));
}
