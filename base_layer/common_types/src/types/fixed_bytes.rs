// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

/// Defines a newtype over `[u8; N]` with hex formatting and parsing, serde support and a tree-hash root equal to
/// that of a fixed-length byte vector.
macro_rules! fixed_bytes_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub const fn zero() -> Self {
                Self([0u8; $len])
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                $crate::serializers::hex::to_prefixed_hex(&self.0)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::error::TypeParseError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let bytes: [u8; $len] =
                    bytes
                        .try_into()
                        .map_err(|_| $crate::error::TypeParseError::InvalidLength {
                            expected: $len,
                            actual: bytes.len(),
                        })?;
                Ok(Self(bytes))
            }
        }

        impl TryFrom<Vec<u8>> for $name {
            type Error = $crate::error::TypeParseError;

            fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
                Self::try_from(bytes.as_slice())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::TypeParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = $crate::serializers::hex::from_prefixed_hex(s)?;
                Self::try_from(bytes.as_slice())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                $crate::serializers::hex::serialize(self, s)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                $crate::serializers::hex::deserialize(d)
            }
        }

        impl txsig_hashing::TreeHash for $name {
            fn tree_hash_root<H: txsig_hashing::MerkleHasher>(&self) -> txsig_hashing::Chunk {
                txsig_hashing::TreeHash::tree_hash_root::<H>(&self.0)
            }
        }
    };
}

pub(crate) use fixed_bytes_type;
