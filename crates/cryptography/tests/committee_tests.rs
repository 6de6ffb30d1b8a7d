//! Standby committee loading tests

use std::io::Write;

use neo3_config::CryptoSettings;
use neo3_crypto::{committee, ECCurve, Error};

const G_R1_OFF_CURVE: &str = concat!(
    "04",
    "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f4"
);

#[test]
fn test_mainnet_committee_is_sorted_by_x() {
    let points = committee::standby_committee(&CryptoSettings::mainnet()).unwrap();
    let prefixes: Vec<String> = points
        .iter()
        .map(|point| point.to_string()[..6].to_string())
        .collect();

    assert_eq!(
        prefixes,
        ["02486f", "024c7b", "02aaec", "03b209", "03b8d9", "02ca0e", "02df48"]
    );
    assert!(points.iter().all(|p| p.curve() == ECCurve::Secp256r1));
}

#[test]
fn test_duplicate_keys_are_removed() {
    let mut settings = CryptoSettings::mainnet();
    let first = settings.standby_committee[0].clone();
    settings.standby_committee.push(first.to_uppercase());
    settings.standby_committee.push(first);

    let points = committee::standby_committee(&settings).unwrap();
    assert_eq!(points.len(), 7);
}

#[test]
fn test_validation_follows_settings() {
    let mut settings = CryptoSettings {
        standby_committee: vec![G_R1_OFF_CURVE.to_string()],
        ..CryptoSettings::default()
    };
    assert_eq!(
        committee::standby_committee(&settings),
        Err(Error::InvalidPublicKey)
    );

    settings.validate_public_keys = false;
    let points = committee::standby_committee(&settings).unwrap();
    assert_eq!(points.len(), 1);
    assert!(points[0].validate().is_err());
}

#[test]
fn test_settings_from_toml() {
    let settings = CryptoSettings::from_toml_str(
        r#"
curve = "secp256r1"
validate_public_keys = true
standby_committee = [
    "02486fd15702c4490a26703112a5cc1d0923fd697a33406bd5a1c00e0013b09a70",
    "03b209fd4f53a7170ea4444e0cb0a6bb6a53c2bd016926989cf85f9b0fba17a70c",
]
"#,
    )
    .unwrap();

    let points = committee::standby_committee(&settings).unwrap();
    assert_eq!(points.len(), 2);
    assert!(points[0] < points[1]);
    assert_eq!(
        committee::curve_from_settings(&settings).unwrap(),
        ECCurve::Secp256r1
    );
}

#[test]
fn test_load_committee_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let toml = CryptoSettings::mainnet().to_toml_string().unwrap();
    file.write_all(toml.as_bytes()).unwrap();

    let points = committee::load_standby_committee(file.path()).unwrap();
    assert_eq!(points.len(), 7);
    assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_missing_settings_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = committee::load_standby_committee(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(Error::Config(_))));
}
