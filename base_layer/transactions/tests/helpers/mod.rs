// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

#![allow(dead_code)]

use std::str::FromStr;

use primitive_types::U256;
use txsig_common_types::types::{ChainId, ExecutionAddress};
use txsig_transactions::{crypto::Secp256k1PrivateKey, transaction_components::BasicTransaction, TransactionSigner};

pub const REFERENCE_SECRET_KEY: &str = "0x4fd3fb62d6b7a4749f75d56d06b0aea1ec2c2a6986d2bfa975d7891585590fea";
pub const REFERENCE_SIGNER: &str = "0x8c2f919c9b568a9bd6ff45d4b320586ba6f0218e";

pub fn reference_signer() -> TransactionSigner {
    TransactionSigner::new(Secp256k1PrivateKey::from_hex(REFERENCE_SECRET_KEY).unwrap())
}

pub fn random_signer() -> TransactionSigner {
    TransactionSigner::new(Secp256k1PrivateKey::from_bytes(&rand::random::<[u8; 32]>()).unwrap())
}

pub fn reference_transaction() -> BasicTransaction {
    BasicTransaction {
        chain_id: ChainId::from(424_242),
        nonce: 42,
        max_fee_per_gas: U256::from(69_123_456_789u64),
        gas: 21_000,
        tx_to: ExecutionAddress::from_str("0xd8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap(),
        tx_value: U256::from(3_141_592_653u64),
    }
}
