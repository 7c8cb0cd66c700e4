// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{fmt, str::FromStr};

use secp256k1::{Message, PublicKey};
use txsig_common_types::{
    serializers::hex::{from_prefixed_hex, to_prefixed_hex},
    types::{ExecutionAddress, FixedHash},
};

use super::{KeyError, Secp256k1Signature, SECP256K1_CTX};

/// A secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey(PublicKey);

impl Secp256k1PublicKey {
    pub const COMPRESSED_LENGTH: usize = secp256k1::constants::PUBLIC_KEY_SIZE;
    pub const UNCOMPRESSED_LENGTH: usize = secp256k1::constants::UNCOMPRESSED_PUBLIC_KEY_SIZE;

    /// Accepts both the 33-byte compressed and 65-byte uncompressed encodings.
    pub fn from_bytes(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != Self::COMPRESSED_LENGTH && slice.len() != Self::UNCOMPRESSED_LENGTH {
            return Err(KeyError::InvalidLength {
                expected: Self::COMPRESSED_LENGTH,
                actual: slice.len(),
            });
        }
        Ok(Self(PublicKey::from_slice(slice)?))
    }

    pub fn to_compressed_bytes(&self) -> [u8; Self::COMPRESSED_LENGTH] {
        self.0.serialize()
    }

    pub fn to_uncompressed_bytes(&self) -> [u8; Self::UNCOMPRESSED_LENGTH] {
        self.0.serialize_uncompressed()
    }

    /// The execution-layer account controlled by this key.
    pub fn to_execution_address(&self) -> ExecutionAddress {
        ExecutionAddress::from_uncompressed_public_key(&self.to_uncompressed_bytes())
    }
}

impl From<PublicKey> for Secp256k1PublicKey {
    fn from(key: PublicKey) -> Self {
        Self(key)
    }
}

impl FromStr for Secp256k1PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&from_prefixed_hex(s)?)
    }
}

impl fmt::Display for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_prefixed_hex(&self.to_compressed_bytes()))
    }
}

impl fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1PublicKey({})", self)
    }
}

/// Recovers the public key that produced `signature` over `signing_root`.
///
/// Returns `None` if the signature is malformed or no key can be recovered. Recovery also verifies the signature, so
/// a returned key always verifies against the root; whether it is the *expected* key is for the caller to decide.
pub fn recover_public_key(signing_root: &FixedHash, signature: &Secp256k1Signature) -> Option<Secp256k1PublicKey> {
    let signature = signature.to_recoverable().ok()?;
    let msg = Message::from_digest(*signing_root.as_bytes());
    SECP256K1_CTX
        .recover_ecdsa(&msg, &signature)
        .ok()
        .map(Secp256k1PublicKey)
}
