// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_common_types::types::{ChainId, Domain, DomainType, FixedHash, Hash32, Version};
use txsig_hashing::{impl_tree_hash_container, MerkleHasher};

/// The network identity a domain is bound to. Field order is part of the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionForkData {
    pub fork_version: Version,
    pub genesis_hash: Hash32,
    pub chain_id: ChainId,
}

impl_tree_hash_container!(ExecutionForkData {
    fork_version,
    genesis_hash,
    chain_id
});

/// Root of `ExecutionForkData { fork_version, genesis_hash, chain_id }`.
pub fn compute_execution_fork_data_root<H: MerkleHasher>(
    fork_version: Version,
    genesis_hash: &Hash32,
    chain_id: ChainId,
) -> FixedHash {
    FixedHash::root_of::<H, _>(&ExecutionForkData {
        fork_version,
        genesis_hash: *genesis_hash,
        chain_id,
    })
}

/// `domain_type || fork_data_root[..28]`.
pub fn compute_execution_domain<H: MerkleHasher>(
    domain_type: DomainType,
    fork_version: Version,
    genesis_hash: &Hash32,
    chain_id: ChainId,
) -> Domain {
    let fork_data_root = compute_execution_fork_data_root::<H>(fork_version, genesis_hash, chain_id);
    Domain::from_parts(domain_type, &fork_data_root)
}
