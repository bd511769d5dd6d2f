//! Integration tests for loading SSL configuration documents.

use std::sync::Arc;

use sslconf::{ConfigLoader, SslConfigError, TraceLevels, config::AppConfig};

const VALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SSLConfig>
  <client>
    <general version="SSLv23" cipherlist="HIGH" verifymode="peer" verifydepth="10"/>
    <certauthority file="cacert.pem"/>
  </client>
  <server>
    <general version="SSLv23" cipherlist="HIGH" verifymode="peer"/>
    <certificate type="RSA">
      <public encoding="PEM" filename="server_cert.pem"/>
      <private encoding="PEM" filename="server_key.pem"/>
    </certificate>
  </server>
</SSLConfig>
"#;

#[test]
fn test_valid_configuration_is_accepted() {
    let mut loader = ConfigLoader::new(&AppConfig::default(), Arc::new(TraceLevels::new(1)));

    let summary = loader.load_str("sslconfig.xml", VALID).expect("valid configuration");

    assert_eq!(summary.elements(), 9);
    assert_eq!(summary.errors(), 0);
    assert_eq!(summary.warnings(), 0);
}

#[test]
fn test_truncated_configuration_is_rejected() {
    let mut loader = ConfigLoader::new(&AppConfig::default(), Arc::new(TraceLevels::default()));
    let truncated = &VALID[..VALID.find("<server>").unwrap()];

    let err = loader.load_str("sslconfig.xml", truncated).unwrap_err();

    match err {
        SslConfigError::Invalid { err, .. } => {
            let fatal = &err.diagnostics()[0];
            assert!(fatal.severity().is_fatal());
            assert_eq!(fatal.source_location(), "sslconfig.xml");
        }
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_trace_level_change_applies_to_existing_loader() {
    let trace = Arc::new(TraceLevels::new(0));
    let mut loader = ConfigLoader::new(&AppConfig::default(), Arc::clone(&trace));

    trace.set_security(2);

    assert!(loader.reporter().trace_levels().parse_warnings());
    assert!(loader.load_str("sslconfig.xml", VALID).is_ok());
}
