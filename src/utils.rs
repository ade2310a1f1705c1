//! Utility functions for identifier generation

use bech32::Bech32m;
use uuid7::uuid7;

// tag a flow instance with a unique, human-prefixed reference
pub fn new_intake_ref(hrp: &str) -> anyhow::Result<String> {
    let hrp = bech32::Hrp::parse(hrp)?;
    Ok(bech32::encode::<Bech32m>(hrp, uuid7().as_bytes())?)
}
