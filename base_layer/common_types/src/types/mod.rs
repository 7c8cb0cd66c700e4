// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

mod fixed_bytes;

mod chain_id;
pub use chain_id::ChainId;

mod domain;
pub use domain::{
    Domain,
    DomainType,
    DOMAIN_APPLICATION_MASK,
    DOMAIN_EXECUTION_MASK,
    DOMAIN_EXECUTION_TRANSACTION_BASE,
};

mod execution_address;
pub use execution_address::ExecutionAddress;

mod fixed_hash;
pub use fixed_hash::{FixedHash, Hash32};

mod transaction_type;
pub use transaction_type::TransactionType;

mod version;
pub use version::Version;
