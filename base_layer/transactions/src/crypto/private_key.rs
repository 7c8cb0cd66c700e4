// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::fmt;

use secp256k1::{Message, PublicKey, SecretKey};
use txsig_common_types::{serializers::hex::from_prefixed_hex, types::FixedHash};

use super::{KeyError, Secp256k1PublicKey, Secp256k1Signature, SECP256K1_CTX};

/// A secp256k1 signing key. Signatures are deterministic (RFC6979 nonces) and carry a recovery id, so the signer's
/// public key can be recovered from the signature and the signed root alone.
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1PrivateKey(SecretKey);

impl Secp256k1PrivateKey {
    pub const LENGTH: usize = secp256k1::constants::SECRET_KEY_SIZE;

    pub fn from_bytes(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != Self::LENGTH {
            return Err(KeyError::InvalidLength {
                expected: Self::LENGTH,
                actual: slice.len(),
            });
        }
        Ok(Self(SecretKey::from_slice(slice)?))
    }

    /// Parses a 32-byte key from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = from_prefixed_hex(s)?;
        Self::from_bytes(&bytes)
    }

    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey::from(PublicKey::from_secret_key(&SECP256K1_CTX, &self.0))
    }

    /// Signs a 32-byte signing root.
    pub fn sign(&self, signing_root: &FixedHash) -> Secp256k1Signature {
        let msg = Message::from_digest(*signing_root.as_bytes());
        let signature = SECP256K1_CTX.sign_ecdsa_recoverable(&msg, &self.0);
        Secp256k1Signature::from(signature)
    }

    pub fn to_bytes(&self) -> [u8; Self::LENGTH] {
        self.0.secret_bytes()
    }
}

// Never print key material
impl fmt::Debug for Secp256k1PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secp256k1PrivateKey").field(&"***").finish()
    }
}
