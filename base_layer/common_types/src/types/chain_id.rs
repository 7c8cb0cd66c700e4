// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use txsig_hashing::{Chunk, MerkleHasher, TreeHash};

use crate::error::TypeParseError;

/// The numeric replay-protection chain identifier, an unsigned 256-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "ChainIdRepr", into = "String")]
pub struct ChainId(U256);

impl ChainId {
    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for ChainId {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<ChainId> for U256 {
    fn from(value: ChainId) -> Self {
        value.0
    }
}

impl FromStr for ChainId {
    type Err = TypeParseError;

    /// Accepts decimal or `0x`-prefixed hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x") {
            Some(digits) => U256::from_str_radix(digits, 16).ok(),
            None => U256::from_dec_str(s).ok(),
        };
        parsed
            .map(Self)
            .ok_or_else(|| TypeParseError::InvalidInteger(s.to_string()))
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ChainId> for String {
    fn from(value: ChainId) -> Self {
        value.to_string()
    }
}

/// Configuration files may carry a chain id as a plain integer or, when it does not fit in 64 bits, as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChainIdRepr {
    Number(u64),
    Text(String),
}

impl TryFrom<ChainIdRepr> for ChainId {
    type Error = TypeParseError;

    fn try_from(value: ChainIdRepr) -> Result<Self, Self::Error> {
        match value {
            ChainIdRepr::Number(n) => Ok(Self::from(n)),
            ChainIdRepr::Text(s) => s.parse(),
        }
    }
}

impl TreeHash for ChainId {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        self.0.tree_hash_root::<H>()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_decimal_and_hex() {
        assert_eq!(ChainId::from_str("424242").unwrap(), ChainId::from(424_242));
        assert_eq!(ChainId::from_str("0x67932").unwrap(), ChainId::from(424_242));
        assert!(ChainId::from_str("not a number").is_err());
        assert_eq!(ChainId::from(11_155_111).to_string(), "11155111");
    }

    #[test]
    fn deserializes_from_number_or_string() {
        assert_eq!(serde_json::from_str::<ChainId>("1").unwrap(), ChainId::from(1));
        let big = "\"115792089237316195423570985008687907853269984665640564039457584007913129639935\"";
        assert_eq!(serde_json::from_str::<ChainId>(big).unwrap(), ChainId::from(U256::MAX));
        assert_eq!(serde_json::to_string(&ChainId::from(5)).unwrap(), "\"5\"");
    }
}
