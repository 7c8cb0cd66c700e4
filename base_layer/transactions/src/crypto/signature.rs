// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{fmt, str::FromStr};

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use txsig_common_types::serializers::hex::{from_prefixed_hex, to_prefixed_hex};
use txsig_hashing::{Chunk, MerkleHasher, TreeHash};

use super::KeyError;

/// A recoverable secp256k1 ECDSA signature laid out as `r (32) || s (32) || y_parity (1)`.
///
/// The signature is the payload of a signed envelope and tree-hashes as a 65-byte vector.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1Signature([u8; 65]);

impl Secp256k1Signature {
    pub const LENGTH: usize = 65;
    const RECOVERY_ID_INDEX: usize = 64;

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    pub fn s(&self) -> &[u8] {
        &self.0[32..Self::RECOVERY_ID_INDEX]
    }

    pub fn y_parity(&self) -> u8 {
        self.0[Self::RECOVERY_ID_INDEX]
    }

    pub fn to_hex(&self) -> String {
        to_prefixed_hex(&self.0)
    }

    /// Parses the signature for key recovery. Only the canonical form is accepted: `y_parity` is 0 or 1, `r` and `s`
    /// are non-zero and `s` lies in the lower half of the curve order.
    pub(crate) fn to_recoverable(self) -> Result<RecoverableSignature, KeyError> {
        if self.y_parity() > 1 {
            return Err(KeyError::InvalidSignature(format!(
                "y_parity must be 0 or 1, got {}",
                self.y_parity()
            )));
        }
        if self.r().iter().all(|b| *b == 0) || self.s().iter().all(|b| *b == 0) {
            return Err(KeyError::InvalidSignature("r and s must be non-zero".to_string()));
        }
        let recovery_id = RecoveryId::from_i32(i32::from(self.y_parity()))?;
        let signature = RecoverableSignature::from_compact(&self.0[..Self::RECOVERY_ID_INDEX], recovery_id)?;
        let standard = signature.to_standard();
        let mut normalized = standard;
        normalized.normalize_s();
        if normalized != standard {
            return Err(KeyError::InvalidSignature("s is not in the lower half of the curve order".to_string()));
        }
        Ok(signature)
    }
}

impl From<[u8; 65]> for Secp256k1Signature {
    fn from(bytes: [u8; 65]) -> Self {
        Self(bytes)
    }
}

impl From<RecoverableSignature> for Secp256k1Signature {
    fn from(signature: RecoverableSignature) -> Self {
        let (recovery_id, compact) = signature.serialize_compact();
        let mut bytes = [0u8; Self::LENGTH];
        bytes[..Self::RECOVERY_ID_INDEX].copy_from_slice(&compact);
        // recovery ids are always in 0..=3
        bytes[Self::RECOVERY_ID_INDEX] = recovery_id.to_i32() as u8;
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Secp256k1Signature {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; Self::LENGTH] = bytes.try_into().map_err(|_| KeyError::InvalidLength {
            expected: Self::LENGTH,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Secp256k1Signature {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(from_prefixed_hex(s)?.as_slice())
    }
}

impl fmt::Display for Secp256k1Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Secp256k1Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1Signature({})", self.to_hex())
    }
}

impl TreeHash for Secp256k1Signature {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        self.0.tree_hash_root::<H>()
    }
}
