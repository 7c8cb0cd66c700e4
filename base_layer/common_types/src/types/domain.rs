// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use super::{fixed_bytes::fixed_bytes_type, FixedHash};

fixed_bytes_type!(
    /// A 4-byte signing-domain separator. The first bytes of every [`Domain`], identifying the signing context.
    DomainType,
    4
);

/// Mask bit (in the last byte) shared by every domain used to sign execution-layer data.
pub const DOMAIN_EXECUTION_MASK: DomainType = DomainType::new([0x00, 0x00, 0x00, 0x02]);
/// Mask bit (in the last byte) reserved for consensus-layer application domains.
pub const DOMAIN_APPLICATION_MASK: DomainType = DomainType::new([0x00, 0x00, 0x00, 0x01]);
/// Base value for execution transaction domains. Byte 1 is replaced with the transaction type.
pub const DOMAIN_EXECUTION_TRANSACTION_BASE: DomainType = DomainType::new([0x01, 0x00, 0x00, 0x02]);

impl DomainType {
    /// Position of the transaction type tag inside an execution transaction domain type.
    pub const TRANSACTION_TYPE_INDEX: usize = 1;

    fn has_mask(&self, mask: &DomainType) -> bool {
        self.0.iter().zip(mask.0.iter()).all(|(b, m)| b & m == *m)
    }

    /// True if this domain type lies in the execution namespace.
    pub fn is_execution(&self) -> bool {
        self.has_mask(&DOMAIN_EXECUTION_MASK)
    }

    /// True if this domain type lies in the consensus application namespace.
    pub fn is_application(&self) -> bool {
        self.has_mask(&DOMAIN_APPLICATION_MASK)
    }

    /// True if this domain type was derived from [`DOMAIN_EXECUTION_TRANSACTION_BASE`], i.e. it only differs from
    /// the base in the transaction type byte.
    pub fn is_execution_transaction(&self) -> bool {
        self.0
            .iter()
            .zip(DOMAIN_EXECUTION_TRANSACTION_BASE.0.iter())
            .enumerate()
            .all(|(i, (b, base))| i == Self::TRANSACTION_TYPE_INDEX || b == base)
    }
}

fixed_bytes_type!(
    /// The full 32-byte signing domain: `domain_type (4 bytes) || fork_data_root[..28]`.
    Domain,
    32
);

impl Domain {
    pub const FORK_DATA_ROOT_BYTES: usize = Self::LEN - DomainType::LEN;

    /// Binds a domain type to a fork-data root. Only the first 28 bytes of the root are kept.
    pub fn from_parts(domain_type: DomainType, fork_data_root: &FixedHash) -> Self {
        let mut bytes = [0u8; Self::LEN];
        bytes[..DomainType::LEN].copy_from_slice(domain_type.as_slice());
        bytes[DomainType::LEN..].copy_from_slice(&fork_data_root.as_slice()[..Self::FORK_DATA_ROOT_BYTES]);
        Self(bytes)
    }

    pub fn domain_type(&self) -> DomainType {
        let mut bytes = [0u8; DomainType::LEN];
        bytes.copy_from_slice(&self.0[..DomainType::LEN]);
        DomainType(bytes)
    }
}
