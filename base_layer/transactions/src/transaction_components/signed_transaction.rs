// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_common_types::types::FixedHash;
use txsig_hashing::{merkleize, Chunk, MerkleHasher, TreeHash};

/// A transaction message together with its signature.
///
/// The envelope hashes as a two-field container, `message` first. Its root is the transaction identifier; it differs
/// from the signing root, which covers the message and the signing domain but not the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction<M, G> {
    message: M,
    signature: G,
}

impl<M, G> SignedTransaction<M, G> {
    pub fn new(message: M, signature: G) -> Self {
        Self { message, signature }
    }

    pub fn message(&self) -> &M {
        &self.message
    }

    pub fn signature(&self) -> &G {
        &self.signature
    }

    pub fn into_parts(self) -> (M, G) {
        (self.message, self.signature)
    }
}

impl<M: TreeHash, G: TreeHash> SignedTransaction<M, G> {
    /// The transaction identifier: the root of the whole envelope.
    pub fn hash<H: MerkleHasher>(&self) -> FixedHash {
        FixedHash::root_of::<H, _>(self)
    }
}

impl<M: TreeHash, G: TreeHash> TreeHash for SignedTransaction<M, G> {
    fn tree_hash_root<H: MerkleHasher>(&self) -> Chunk {
        merkleize::<H>(&[
            self.message.tree_hash_root::<H>(),
            self.signature.tree_hash_root::<H>(),
        ])
    }
}

#[cfg(test)]
mod test {
    use txsig_hashing::Sha256Hasher;

    use super::*;

    #[test]
    fn hash_is_the_root_of_message_and_signature() {
        let tx = SignedTransaction::new(FixedHash::from([1u8; 32]), FixedHash::from([2u8; 32]));
        let expected = Sha256Hasher::hash_pair(&[1u8; 32], &[2u8; 32]);
        assert_eq!(tx.hash::<Sha256Hasher>().as_bytes(), &expected);
        assert_eq!(tx.hash::<Sha256Hasher>(), tx.clone().hash::<Sha256Hasher>());
    }

    #[test]
    fn field_order_matters() {
        let tx = SignedTransaction::new(FixedHash::from([1u8; 32]), FixedHash::from([2u8; 32]));
        let swapped = SignedTransaction::new(FixedHash::from([2u8; 32]), FixedHash::from([1u8; 32]));
        assert_ne!(tx.hash::<Sha256Hasher>(), swapped.hash::<Sha256Hasher>());
    }

    #[test]
    fn parts_round_trip() {
        let tx = SignedTransaction::new(7u64, [9u8; 65]);
        assert_eq!(tx.message(), &7);
        assert_eq!(tx.signature(), &[9u8; 65]);
        assert_eq!(tx.into_parts(), (7, [9u8; 65]));
    }
}
