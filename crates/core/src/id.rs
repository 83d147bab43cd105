//! Strongly-typed identifiers: account addresses and name hashes.

use core::fmt;
use core::str::FromStr;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TrackingError, TrackingResult};

/// Raw account address length in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Human-readable part used by `Display`/`FromStr`.
pub const DEFAULT_ADDRESS_PREFIX: &str = "terra";

/// Account address (raw bytes; bech32 on the wire).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parse canonical (lowercase) bech32 text carrying the given prefix.
    pub fn from_bech32(text: &str, prefix: &str) -> TrackingResult<Self> {
        if text.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(TrackingError::invalid_address(format!(
                "`{text}` is not lowercase"
            )));
        }

        let checked = CheckedHrpstring::new::<Bech32>(text)
            .map_err(|e| TrackingError::invalid_address(format!("`{text}`: {e}")))?;

        let expected = parse_prefix(prefix)?;
        if checked.hrp() != expected {
            return Err(TrackingError::invalid_address(format!(
                "`{text}` does not carry the `{prefix}` prefix"
            )));
        }

        let bytes: Vec<u8> = checked.byte_iter().collect();
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            TrackingError::invalid_address(format!(
                "`{text}` decodes to {} bytes, expected {ADDRESS_LEN}",
                b.len()
            ))
        })?;

        Ok(Self(bytes))
    }

    pub fn to_bech32(&self, prefix: &str) -> TrackingResult<String> {
        let hrp = parse_prefix(prefix)?;
        bech32::encode::<Bech32>(hrp, &self.0)
            .map_err(|e| TrackingError::invalid_address(e.to_string()))
    }
}

/// Validate a bech32 human-readable part.
pub fn parse_prefix(prefix: &str) -> TrackingResult<Hrp> {
    if prefix.is_empty() || prefix.chars().any(|c| !c.is_ascii_lowercase()) {
        return Err(TrackingError::invalid_address(format!(
            "prefix `{prefix}` must be lowercase letters"
        )));
    }
    Hrp::parse(prefix).map_err(|e| TrackingError::invalid_address(format!("prefix `{prefix}`: {e}")))
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_bech32(DEFAULT_ADDRESS_PREFIX).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s, DEFAULT_ADDRESS_PREFIX)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Deterministic 32-byte identifier of a name (see [`crate::Name::name_hash`]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameHash([u8; 32]);

impl NameHash {
    pub const ZERO: NameHash = NameHash([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameHash({self})")
    }
}

impl Serialize for NameHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NameHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&text, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(seed: u8) -> Address {
        Address::new([seed; ADDRESS_LEN])
    }

    #[test]
    fn bech32_round_trip() {
        let a = addr(7);
        let text = a.to_string();
        assert!(text.starts_with("terra1"));
        assert_eq!(text.parse::<Address>().unwrap(), a);
    }

    #[test]
    fn rejects_wrong_prefix_and_bad_checksum() {
        let a = addr(1);
        let cosmos = a.to_bech32("cosmos").unwrap();
        assert!(Address::from_bech32(&cosmos, "terra").is_err());
        assert_eq!(Address::from_bech32(&cosmos, "cosmos").unwrap(), a);

        let mut corrupted = a.to_string();
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == 'q' { 'p' } else { 'q' });
        assert!(corrupted.parse::<Address>().is_err());

        assert!(a.to_string().to_uppercase().parse::<Address>().is_err());
        assert!("not-an-address".parse::<Address>().is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        let hrp = Hrp::parse("terra").unwrap();
        let short = bech32::encode::<Bech32>(hrp, &[1u8; 10]).unwrap();
        let err = short.parse::<Address>().unwrap_err();
        assert!(matches!(err, TrackingError::InvalidAddress(_)));
    }

    #[test]
    fn name_hash_serializes_as_hex() {
        let hash = NameHash::new([0xab; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        assert_eq!(serde_json::from_str::<NameHash>(&json).unwrap(), hash);
    }
}
