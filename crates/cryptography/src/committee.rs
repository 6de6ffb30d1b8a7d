//! Standby committee keys loaded from [`CryptoSettings`].
//!
//! Consensus needs every node to agree on the validator order, so the keys
//! are returned sorted by the canonical [`ECPoint`] order.

use std::path::Path;

use neo3_config::CryptoSettings;
use tracing::debug;

use crate::{ECCurve, ECPoint, Result};

/// Curve named by the settings.
pub fn curve_from_settings(settings: &CryptoSettings) -> Result<ECCurve> {
    settings.curve.parse()
}

/// Decodes the standby committee, sorted and without duplicates.
pub fn standby_committee(settings: &CryptoSettings) -> Result<Vec<ECPoint>> {
    let curve = curve_from_settings(settings)?;
    let mut points = settings
        .standby_committee
        .iter()
        .map(|key| {
            let bytes = hex::decode(key)?;
            ECPoint::decode_point(&bytes, curve, settings.validate_public_keys)
        })
        .collect::<Result<Vec<_>>>()?;

    points.sort();
    points.dedup();
    debug!(%curve, members = points.len(), "loaded standby committee");
    Ok(points)
}

/// Reads settings from a TOML file and decodes their standby committee.
pub fn load_standby_committee<P: AsRef<Path>>(path: P) -> Result<Vec<ECPoint>> {
    let settings = CryptoSettings::load(path)?;
    standby_committee(&settings)
}
