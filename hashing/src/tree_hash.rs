// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use primitive_types::U256;

use crate::{
    merkleize::{merkleize_padded, pack_bytes},
    Chunk,
    MerkleHasher,
    BYTES_PER_CHUNK,
};

/// A value with a deterministic tree-hash root.
///
/// Basic values (integers, booleans) are serialized little-endian into a single right-padded chunk. Fixed-length
/// byte vectors are packed into chunks and merkleized. Containers merkleize the roots of their fields in declaration
/// order, see [`impl_tree_hash_container!`](crate::impl_tree_hash_container).
pub trait TreeHash {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk;
}

fn basic_chunk(le_bytes: &[u8]) -> Chunk {
    let mut chunk = [0u8; BYTES_PER_CHUNK];
    chunk[..le_bytes.len()].copy_from_slice(le_bytes);
    chunk
}

macro_rules! impl_tree_hash_for_uint {
    ($($ty:ty),+) => {
        $(
            impl TreeHash for $ty {
                fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
                    basic_chunk(&self.to_le_bytes())
                }
            }
        )+
    };
}

impl_tree_hash_for_uint!(u8, u16, u32, u64, u128);

impl TreeHash for bool {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        basic_chunk(&[u8::from(*self)])
    }
}

impl TreeHash for U256 {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        let mut chunk = [0u8; BYTES_PER_CHUNK];
        self.to_little_endian(&mut chunk);
        chunk
    }
}

/// `[u8; N]` hashes as a fixed-length byte vector.
impl<const N: usize> TreeHash for [u8; N] {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        // pack_bytes yields exactly ceil(N / 32) chunks, which is the tree width
        merkleize_padded::<H>(&pack_bytes(self), N.div_ceil(BYTES_PER_CHUNK))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{impl_tree_hash_container, merkleize, Sha256Hasher};

    #[test]
    fn integers_are_little_endian_and_right_padded() {
        let root = 0x0102_0304u32.tree_hash_root::<Sha256Hasher>();
        assert_eq!(&root[..4], &[4, 3, 2, 1]);
        assert!(root[4..].iter().all(|b| *b == 0));

        let root = 42u64.tree_hash_root::<Sha256Hasher>();
        assert_eq!(root[0], 42);
        assert!(root[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn u256_fills_the_whole_chunk() {
        let root = U256::MAX.tree_hash_root::<Sha256Hasher>();
        assert_eq!(root, [0xffu8; 32]);
        let root = U256::from(424_242u64).tree_hash_root::<Sha256Hasher>();
        assert_eq!(root, 424_242u64.tree_hash_root::<Sha256Hasher>());
    }

    #[test]
    fn booleans() {
        assert_eq!(true.tree_hash_root::<Sha256Hasher>()[0], 1);
        assert_eq!(false.tree_hash_root::<Sha256Hasher>(), [0u8; 32]);
    }

    #[test]
    fn short_byte_vectors_are_a_single_padded_chunk() {
        let root = [0x12u8, 0x34, 0x56, 0x78].tree_hash_root::<Sha256Hasher>();
        assert_eq!(&root[..4], &[0x12, 0x34, 0x56, 0x78]);
        assert!(root[4..].iter().all(|b| *b == 0));
        let hash = [0xabu8; 32];
        assert_eq!(hash.tree_hash_root::<Sha256Hasher>(), hash);
    }

    #[test]
    fn long_byte_vectors_are_merkleized() {
        let root = [0xffu8; 65].tree_hash_root::<Sha256Hasher>();
        assert_eq!(
            hex::encode(root),
            "f26e85e8c159114b1650fbced2b1d03898385a8cb7dc652dcecd46217da46439"
        );
    }

    struct Pair {
        first: u64,
        second: u64,
    }

    impl_tree_hash_container!(Pair { first, second });

    struct SwappedPair {
        first: u64,
        second: u64,
    }

    impl_tree_hash_container!(SwappedPair { second, first });

    #[test]
    fn containers_hash_their_fields_in_order() {
        let pair = Pair { first: 1, second: 2 };
        let expected = merkleize::<Sha256Hasher>(&[
            1u64.tree_hash_root::<Sha256Hasher>(),
            2u64.tree_hash_root::<Sha256Hasher>(),
        ]);
        assert_eq!(pair.tree_hash_root::<Sha256Hasher>(), expected);

        let swapped = SwappedPair { first: 1, second: 2 };
        assert_ne!(swapped.tree_hash_root::<Sha256Hasher>(), expected);
    }
}
