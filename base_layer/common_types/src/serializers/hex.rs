// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use serde::{Deserialize, Deserializer, Serializer};

/// Encodes bytes as lowercase hex with a `0x` prefix.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn from_prefixed_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits)
}

pub fn serialize<S: Serializer, T: AsRef<[u8]>>(v: &T, s: S) -> Result<S::Ok, S::Error> {
    if s.is_human_readable() {
        s.serialize_str(&to_prefixed_hex(v.as_ref()))
    } else {
        s.serialize_bytes(v.as_ref())
    }
}

/// Use a serde deserializer to deserialize the hex string of the given object.
pub fn deserialize<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<Vec<u8>>,
    T::Error: std::fmt::Display,
{
    let bytes = if d.is_human_readable() {
        let hex = <String as Deserialize>::deserialize(d)?;
        from_prefixed_hex(&hex).map_err(serde::de::Error::custom)?
    } else {
        <Vec<u8> as Deserialize>::deserialize(d)?
    };

    T::try_from(bytes).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_is_optional() {
        assert_eq!(from_prefixed_hex("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(from_prefixed_hex("0X0102").unwrap(), vec![1, 2]);
        assert_eq!(from_prefixed_hex("0102").unwrap(), vec![1, 2]);
        assert!(from_prefixed_hex("0x012").is_err());
        assert_eq!(to_prefixed_hex(&[0xab, 0xcd]), "0xabcd");
    }
}
