// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Tree hashing
//!
//! Deterministic root hashes over typed, structured values. Every value is reduced to 32-byte chunks which are
//! combined pairwise into a binary Merkle tree, so that any change to any field of a structure changes its root.
//!
//! The node-combining function is injected through the [`MerkleHasher`] trait. Production code uses
//! [`Sha256Hasher`]; tests are free to substitute a stub.

mod byte_list;
mod error;
mod hasher;
mod merkleize;
mod tree_hash;

pub use byte_list::ByteList;
pub use error::TreeHashError;
pub use hasher::{Chunk, DigestHasher, MerkleHasher, Sha256Hasher, BYTES_PER_CHUNK};
pub use merkleize::{merkleize, merkleize_with_limit, mix_in_length, pack_bytes, zero_hash};
pub use tree_hash::TreeHash;

/// Implements [`TreeHash`] for a struct by merkleizing the roots of the listed fields, in the order given.
///
/// The field order is part of the hash: two structs with the same fields in a different order have different roots.
#[macro_export]
macro_rules! impl_tree_hash_container {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::TreeHash for $ty {
            fn tree_hash_root<H: $crate::MerkleHasher>(&self) -> $crate::Chunk {
                $crate::merkleize::<H>(&[$($crate::TreeHash::tree_hash_root::<H>(&self.$field)),+])
            }
        }
    };
}
