// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_common_types::types::{ChainId, Domain, FixedHash, Hash32, TransactionType, Version};
use txsig_hashing::{impl_tree_hash_container, MerkleHasher, TreeHash};

use super::{compute_execution_domain, domain_type_for_transaction_type};

/// The structure whose root is signed: an object root bound to a signing domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningData {
    pub object_root: FixedHash,
    pub domain: Domain,
}

impl_tree_hash_container!(SigningData { object_root, domain });

/// The signing domain of transactions of type `tx_type`, on the network identified by `genesis_hash` and `chain_id`,
/// as of the fork (`tx_type_fork_version`) that introduced the type.
pub fn compute_transaction_domain<H: MerkleHasher>(
    tx_type: TransactionType,
    tx_type_fork_version: Version,
    genesis_hash: &Hash32,
    chain_id: ChainId,
) -> Domain {
    let domain_type = domain_type_for_transaction_type(tx_type);
    compute_execution_domain::<H>(domain_type, tx_type_fork_version, genesis_hash, chain_id)
}

/// The 32-byte value handed to the signer: `root(SigningData { object_root: root(message), domain })`.
pub fn compute_signing_root<H: MerkleHasher, T: TreeHash>(message: &T, domain: &Domain) -> FixedHash {
    FixedHash::root_of::<H, _>(&SigningData {
        object_root: FixedHash::root_of::<H, _>(message),
        domain: *domain,
    })
}
