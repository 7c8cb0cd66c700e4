// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use primitive_types::U256;
use txsig_common_types::types::{ChainId, ExecutionAddress, TransactionType};
use txsig_hashing::impl_tree_hash_container;

use super::{SignedTransaction, TransactionScheme};
use crate::crypto::Secp256k1Signature;

pub const BASIC_TRANSACTION_TYPE: TransactionType = TransactionType::new(0xab);

/// A plain value transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicTransaction {
    pub chain_id: ChainId,
    pub nonce: u64,
    pub max_fee_per_gas: U256,
    pub gas: u64,
    pub tx_to: ExecutionAddress,
    pub tx_value: U256,
}

impl_tree_hash_container!(BasicTransaction {
    chain_id,
    nonce,
    max_fee_per_gas,
    gas,
    tx_to,
    tx_value,
});

impl TransactionScheme for BasicTransaction {
    type Signature = Secp256k1Signature;

    const TRANSACTION_TYPE: TransactionType = BASIC_TRANSACTION_TYPE;
}

pub type SignedBasicTransaction = SignedTransaction<BasicTransaction, Secp256k1Signature>;
