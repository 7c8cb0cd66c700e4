// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use sha3::{Digest, Keccak256};

use super::fixed_bytes::fixed_bytes_type;

fixed_bytes_type!(
    /// A 20-byte execution-layer account address.
    ExecutionAddress,
    20
);

impl ExecutionAddress {
    /// Derives the address of a secp256k1 public key given in 65-byte uncompressed form (`0x04 || x || y`): the last
    /// 20 bytes of `keccak256(x || y)`.
    pub fn from_uncompressed_public_key(public_key: &[u8; 65]) -> Self {
        let hash = Keccak256::digest(&public_key[1..]);
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }
}
