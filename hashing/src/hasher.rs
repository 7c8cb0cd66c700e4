// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use core::marker::PhantomData;

use digest::{consts::U32, Digest, OutputSizeUser};
use sha2::Sha256;

pub const BYTES_PER_CHUNK: usize = 32;

/// A single leaf or node of a tree hash.
pub type Chunk = [u8; BYTES_PER_CHUNK];

/// The function used to combine two sibling nodes into their parent.
///
/// Root computations are generic over this trait so that the hash function is a dependency of the caller rather
/// than a property of the data.
pub trait MerkleHasher {
    fn hash_pair(left: &Chunk, right: &Chunk) -> Chunk;
}

/// Combines nodes as `D(left || right)` for any digest with a 32-byte output.
pub struct DigestHasher<D> {
    _d: PhantomData<D>,
}

impl<D> MerkleHasher for DigestHasher<D>
where D: Digest + OutputSizeUser<OutputSize = U32>
{
    fn hash_pair(left: &Chunk, right: &Chunk) -> Chunk {
        D::new().chain_update(left).chain_update(right).finalize().into()
    }
}

pub type Sha256Hasher = DigestHasher<Sha256>;
