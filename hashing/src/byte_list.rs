// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use crate::{
    merkleize::{merkleize_padded, mix_in_length, pack_bytes},
    Chunk,
    MerkleHasher,
    TreeHash,
    TreeHashError,
    BYTES_PER_CHUNK,
};

/// A variable-length byte string of at most `N` bytes.
///
/// The root is taken over a tree sized for `N` bytes with the actual length mixed in, so two lists that share a
/// prefix of zero bytes but differ in length have different roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteList<const N: usize> {
    bytes: Vec<u8>,
}

impl<const N: usize> ByteList<N> {
    pub const MAX_LENGTH: usize = N;

    pub fn new(bytes: Vec<u8>) -> Result<Self, TreeHashError> {
        if bytes.len() > N {
            return Err(TreeHashError::ListTooLong {
                len: bytes.len(),
                max: N,
            });
        }
        Ok(Self { bytes })
    }

    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl<const N: usize> TryFrom<Vec<u8>> for ByteList<N> {
    type Error = TreeHashError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteList<N> {
    type Error = TreeHashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes.to_vec())
    }
}

impl<const N: usize> AsRef<[u8]> for ByteList<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> TreeHash for ByteList<N> {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        // The length was bounded on construction, so the packed chunks always fit the tree
        let root = merkleize_padded::<H>(&pack_bytes(&self.bytes), N.div_ceil(BYTES_PER_CHUNK));
        mix_in_length::<H>(&root, self.bytes.len())
    }
}
