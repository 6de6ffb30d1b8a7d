//! Settings loading tests

use neo3_config::{ConfigError, CryptoSettings, DEFAULT_CURVE, MAINNET_STANDBY_VALIDATORS};
use std::io::Write;

#[test]
fn test_default_settings() {
    let settings = CryptoSettings::default();
    assert_eq!(settings.curve, DEFAULT_CURVE);
    assert!(settings.validate_public_keys);
    assert!(settings.standby_committee.is_empty());
}

#[test]
fn test_mainnet_settings_carry_validators() {
    let settings = CryptoSettings::mainnet();
    assert_eq!(settings.standby_committee.len(), MAINNET_STANDBY_VALIDATORS.len());
    assert_eq!(settings.standby_committee[0], MAINNET_STANDBY_VALIDATORS[0]);
}

#[test]
fn test_toml_roundtrip() {
    let settings = CryptoSettings::mainnet();
    let text = settings.to_toml_string().unwrap();
    let parsed = CryptoSettings::from_toml_str(&text).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "curve = \"secp256k1\"\nvalidate_public_keys = false\nstandby_committee = [\"00\"]"
    )
    .unwrap();

    let settings = CryptoSettings::load(file.path()).unwrap();
    assert_eq!(settings.curve, "secp256k1");
    assert!(!settings.validate_public_keys);
    assert_eq!(settings.standby_committee, vec!["00".to_string()]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CryptoSettings::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let result = CryptoSettings::from_toml_str("curve = [");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_json_representation_uses_field_names() {
    let value = serde_json::to_value(CryptoSettings::default()).unwrap();
    assert_eq!(value["curve"], "secp256r1");
    assert_eq!(value["validate_public_keys"], true);
}
