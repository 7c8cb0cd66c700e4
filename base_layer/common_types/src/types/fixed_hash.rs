// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_hashing::{MerkleHasher, TreeHash};

use super::fixed_bytes::fixed_bytes_type;

fixed_bytes_type!(
    /// A 32-byte hash: block hashes, tree-hash roots, signing roots and transaction identifiers.
    FixedHash,
    32
);

/// A hash identifying a block, e.g. the genesis block of a chain.
pub type Hash32 = FixedHash;

impl FixedHash {
    /// The tree-hash root of `value` as a `FixedHash`.
    pub fn root_of<H: MerkleHasher, T: TreeHash>(value: &T) -> Self {
        Self(value.tree_hash_root::<H>())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use txsig_hashing::Sha256Hasher;

    use super::*;
    use crate::error::TypeParseError;

    #[test]
    fn parse_and_display() {
        let s = "0x000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
        let hash = FixedHash::from_str(s).unwrap();
        assert_eq!(hash.as_bytes()[31], 0x1f);
        assert_eq!(hash.to_string(), s);
        assert_eq!(FixedHash::from_str(&s[2..]).unwrap(), hash);
        assert_eq!(format!("{:?}", FixedHash::zero()), format!("FixedHash(0x{})", "00".repeat(32)));
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        let err = FixedHash::try_from(&[0u8; 31][..]).unwrap_err();
        assert_eq!(err, TypeParseError::InvalidLength {
            expected: 32,
            actual: 31
        });
        assert!(FixedHash::from_str("0x00").is_err());
        assert_eq!(
            FixedHash::from_str("0xzz").unwrap_err(),
            TypeParseError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );
    }

    #[test]
    fn serde_uses_prefixed_hex() {
        let hash = FixedHash::from([0xaa; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "aa".repeat(32)));
        assert_eq!(serde_json::from_str::<FixedHash>(&json).unwrap(), hash);
    }

    #[test]
    fn root_of_a_hash_is_the_hash() {
        let hash = FixedHash::from([7u8; 32]);
        assert_eq!(FixedHash::root_of::<Sha256Hasher, _>(&hash), hash);
    }
}
