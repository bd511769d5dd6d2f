use std::fs;

use tempfile::tempdir;

use sslconf::SslConfigError;
use sslconf_cli::{Args, CliError, ConfigError, error_adapter::to_reportables, run};

fn args(input: &str, config: Option<String>, trace_level: Option<u8>) -> Args {
    Args {
        input: input.to_string(),
        config,
        log_level: "off".to_string(),
        trace_level,
    }
}

#[test]
fn e2e_valid_configuration() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("sslconfig.xml");
    fs::write(
        &input,
        "<SSLConfig>\n  <server>\n    <general version=\"TLSv1.2\"/>\n  </server>\n</SSLConfig>\n",
    )
    .unwrap();

    let summary = run(&args(&input.to_string_lossy(), None, Some(1))).expect("valid configuration");

    assert_eq!(summary.elements(), 3);
    assert_eq!(summary.errors(), 0);
}

#[test]
fn e2e_invalid_configuration_reports_each_diagnostic() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("sslconfig.xml");
    fs::write(&input, "<!DOCTYPE SSLConfig>\n<SSLConfig/>\n<extra/>\n").unwrap();

    let err = run(&args(&input.to_string_lossy(), None, Some(0))).unwrap_err();

    assert!(matches!(err, CliError::Load(SslConfigError::Invalid { .. })));
    let reportables = to_reportables(&err);
    assert_eq!(reportables.len(), 2);
    assert!(reportables[1].to_string().contains("more than one root element"));
}

#[test]
fn e2e_missing_input() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("missing.xml");

    let err = run(&args(&input.to_string_lossy(), None, None)).unwrap_err();

    assert!(matches!(err, CliError::Load(SslConfigError::Io { .. })));
}

#[test]
fn e2e_explicit_config_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("sslconfig.xml");
    let config = dir.path().join("config.toml");
    fs::write(&input, "<SSLConfig/>").unwrap();
    fs::write(&config, "[trace]\nsecurity = 1\n\n[report]\ncategory = \"TLS\"\n").unwrap();

    let result = run(&args(
        &input.to_string_lossy(),
        Some(config.to_string_lossy().to_string()),
        None,
    ));

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn e2e_missing_explicit_config_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("sslconfig.xml");
    fs::write(&input, "<SSLConfig/>").unwrap();

    let err = run(&args(
        &input.to_string_lossy(),
        Some(dir.path().join("nope.toml").to_string_lossy().to_string()),
        None,
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Config(ConfigError::MissingFile(_))));
}
