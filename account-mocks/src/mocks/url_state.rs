//! Mock control state in the query string
//!
//! Non-default control values are stored as base64url-encoded JSON so the
//! URL can be shared to reproduce a panel state.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::warn;

/// Decode a `?state=` value. Malformed input yields no overrides.
pub fn parse_state(encoded: &str) -> BTreeMap<String, String> {
    if encoded.is_empty() {
        return BTreeMap::new();
    }

    let bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Ignoring undecodable mock state: {e}");
            return BTreeMap::new();
        }
    };

    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        warn!("Ignoring malformed mock state: {e}");
        BTreeMap::new()
    })
}

/// Encode overrides; `None` when everything is at its default.
pub fn encode_state(values: &BTreeMap<String, String>) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let json = serde_json::to_vec(values).ok()?;
    Some(URL_SAFE_NO_PAD.encode(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_encoding() {
        let mut values = BTreeMap::new();
        values.insert("is_active".to_string(), "0".to_string());
        values.insert("locale".to_string(), "es".to_string());
        let encoded = encode_state(&values).unwrap();
        assert_eq!(parse_state(&encoded), values);
    }

    #[test]
    fn test_defaults_produce_no_state() {
        assert_eq!(encode_state(&BTreeMap::new()), None);
        assert!(parse_state("").is_empty());
    }

    #[test]
    fn test_garbage_is_ignored() {
        assert!(parse_state("!!not base64!!").is_empty());
        assert!(parse_state(&URL_SAFE_NO_PAD.encode(b"[1,2]")).is_empty());
    }
}
