// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use txsig_hashing::{Chunk, MerkleHasher, TreeHash};

use crate::error::TypeParseError;

/// The one-byte wire-level transaction type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionType(u8);

impl TransactionType {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for TransactionType {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<TransactionType> for u8 {
    fn from(value: TransactionType) -> Self {
        value.0
    }
}

impl FromStr for TransactionType {
    type Err = TypeParseError;

    /// Accepts `0x`-prefixed hex or decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x") {
            Some(digits) => u8::from_str_radix(digits, 16),
            None => s.parse::<u8>(),
        };
        parsed
            .map(Self)
            .map_err(|_| TypeParseError::InvalidInteger(s.to_string()))
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl TreeHash for TransactionType {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        self.0.tree_hash_root::<H>()
    }
}
