// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use crate::{Chunk, MerkleHasher, TreeHashError, BYTES_PER_CHUNK};

/// Root of a perfect tree of the given depth whose leaves are all zero chunks.
pub fn zero_hash<H: MerkleHasher>(depth: usize) -> Chunk {
    let mut node = [0u8; BYTES_PER_CHUNK];
    for _ in 0..depth {
        node = H::hash_pair(&node, &node);
    }
    node
}

/// Merkleizes `chunks`, padding with zero chunks up to the next power of two of the chunk count.
pub fn merkleize<H: MerkleHasher>(chunks: &[Chunk]) -> Chunk {
    merkleize_padded::<H>(chunks, chunks.len())
}

/// Merkleizes `chunks` into a tree sized for `limit` leaves, so that the root of a partially filled list does not
/// depend on how many leaves happen to be present. Supplying more chunks than `limit` is an error.
pub fn merkleize_with_limit<H: MerkleHasher>(chunks: &[Chunk], limit: usize) -> Result<Chunk, TreeHashError> {
    if chunks.len() > limit {
        return Err(TreeHashError::ChunkLimitExceeded {
            count: chunks.len(),
            limit,
        });
    }
    Ok(merkleize_padded::<H>(chunks, limit))
}

/// Callers guarantee `chunks.len() <= width`.
pub(crate) fn merkleize_padded<H: MerkleHasher>(chunks: &[Chunk], width: usize) -> Chunk {
    let depth = tree_depth(width);
    if chunks.is_empty() {
        return zero_hash::<H>(depth);
    }

    let mut layer = chunks.to_vec();
    for level in 0..depth {
        if layer.len() % 2 == 1 {
            layer.push(zero_hash::<H>(level));
        }
        layer = layer.chunks(2).map(|pair| H::hash_pair(&pair[0], &pair[1])).collect();
    }
    layer[0]
}

/// Mixes the length of a list into its root: `hash_pair(root, uint256(length))`.
pub fn mix_in_length<H: MerkleHasher>(root: &Chunk, length: usize) -> Chunk {
    let mut length_chunk = [0u8; BYTES_PER_CHUNK];
    length_chunk[..8].copy_from_slice(&(length as u64).to_le_bytes());
    H::hash_pair(root, &length_chunk)
}

/// Splits `bytes` into chunks, right-padding the final chunk with zeroes.
pub fn pack_bytes(bytes: &[u8]) -> Vec<Chunk> {
    bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|part| {
            let mut chunk = [0u8; BYTES_PER_CHUNK];
            chunk[..part.len()].copy_from_slice(part);
            chunk
        })
        .collect()
}

fn tree_depth(width: usize) -> usize {
    width.next_power_of_two().trailing_zeros() as usize
}
