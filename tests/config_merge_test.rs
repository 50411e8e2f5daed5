use clap::Parser;
use csv_regroup::domain::model::UnlabeledPolicy;
use csv_regroup::domain::ports::ConfigProvider;
use csv_regroup::utils::validation::Validate;
use csv_regroup::CliConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_toml(dir: &TempDir, content: &str) -> PathBuf {
    let file = dir.path().join("regroup.toml");
    fs::write(&file, content).unwrap();
    file
}

fn parse(args: &[&str]) -> CliConfig {
    let mut argv = vec!["csv-regroup"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap()
}

#[test]
fn test_file_values_fill_in_unset_flags() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_toml(
        &temp_dir,
        r#"
        [regroup]
        root_dir = "/data/experiments"
        results_name = "Grouped"
        on_unlabeled = "fail"
        "#,
    );

    let resolved = parse(&["--config", file.to_str().unwrap()])
        .resolve()
        .unwrap();
    assert_eq!(resolved.root_dir(), "/data/experiments");
    assert_eq!(resolved.results_dir_name(), "Grouped");
    assert_eq!(resolved.on_unlabeled(), UnlabeledPolicy::Fail);
}

#[test]
fn test_explicit_flags_win_over_file_values() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_toml(
        &temp_dir,
        "[regroup]\nroot_dir = \"/from/file\"\nresults_name = \"FromFile\"\n",
    );

    let resolved = parse(&["-r", "/from/cli", "--config", file.to_str().unwrap()])
        .resolve()
        .unwrap();
    assert_eq!(resolved.root_dir(), "/from/cli");
    // results_name was not given on the command line, so the file value applies
    assert_eq!(resolved.results_dir_name(), "FromFile");
}

#[test]
fn test_flag_spelling_out_the_default_still_wins() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_toml(&temp_dir, "[regroup]\non_unlabeled = \"fail\"\n");

    // `--on-unlabeled skip` happens to equal the default; it must still
    // override the file, not lose to it.
    let resolved = parse(&[
        "--on-unlabeled",
        "skip",
        "--config",
        file.to_str().unwrap(),
    ])
    .resolve()
    .unwrap();
    assert_eq!(resolved.on_unlabeled(), UnlabeledPolicy::Skip);
}

#[test]
fn test_unset_flags_without_file_fall_back_to_defaults() {
    let resolved = parse(&[]).resolve().unwrap();
    assert_eq!(resolved.root_dir(), ".");
    assert_eq!(resolved.results_dir_name(), "Results");
    assert_eq!(resolved.on_unlabeled(), UnlabeledPolicy::Skip);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let config = parse(&["--config", "/definitely/not/here.toml"]);
    assert!(config.resolve().is_err());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_toml(&temp_dir, "[regroup\nroot_dir = ");

    let config = parse(&["--config", file.to_str().unwrap()]);
    assert!(config.resolve().is_err());
}

#[test]
fn test_validation_rejects_bad_results_name() {
    let mut config = parse(&[]);

    config.results_name = Some("nested/name".to_string());
    assert!(config.validate().is_err());

    config.results_name = Some("".to_string());
    assert!(config.validate().is_err());

    config.results_name = Some("Results".to_string());
    assert!(config.validate().is_ok());
}
