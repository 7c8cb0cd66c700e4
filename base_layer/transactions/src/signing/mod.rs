// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Domain-separated signing roots
//!
//! A signature over an execution transaction commits to three things: the root of the unsigned transaction, the
//! transaction type, and the network it was produced for (fork version, genesis hash and chain id). The two latter
//! are folded into a 32-byte [`Domain`](txsig_common_types::types::Domain):
//!
//! ```text
//! domain_type  = 0x01 || tx_type || 0x00 0x02
//! fork_root    = root(ExecutionForkData { fork_version, genesis_hash, chain_id })
//! domain       = domain_type || fork_root[..28]
//! signing_root = root(SigningData { object_root: root(message), domain })
//! ```
//!
//! so a signature produced for one transaction type, chain or fork never verifies under another.
//!
//! All computations are generic over the [`MerkleHasher`](txsig_hashing::MerkleHasher) used to combine tree nodes.

mod domain_type;
pub use domain_type::domain_type_for_transaction_type;

mod fork_data;
pub use fork_data::{compute_execution_domain, compute_execution_fork_data_root, ExecutionForkData};

mod signing_root;
pub use signing_root::{compute_signing_root, compute_transaction_domain, SigningData};
