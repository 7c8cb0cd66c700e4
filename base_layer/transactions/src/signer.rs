// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::marker::PhantomData;

use log::*;
use txsig_common_types::types::ExecutionAddress;
use txsig_hashing::{MerkleHasher, Sha256Hasher};

use crate::{
    chain_config::ChainConfig,
    crypto::{Secp256k1PrivateKey, Secp256k1Signature},
    transaction_components::{SignedTransaction, TransactionScheme},
    TransactionError,
};

const LOG_TARGET: &str = "c::tx::signer";

/// Signs transactions of any scheme for the network described by a [`ChainConfig`].
pub struct TransactionSigner<H = Sha256Hasher> {
    key: Secp256k1PrivateKey,
    address: ExecutionAddress,
    _hasher: PhantomData<H>,
}

impl TransactionSigner<Sha256Hasher> {
    pub fn new(key: Secp256k1PrivateKey) -> Self {
        Self::with_hasher(key)
    }
}

impl<H: MerkleHasher> TransactionSigner<H> {
    pub fn with_hasher(key: Secp256k1PrivateKey) -> Self {
        let address = key.public_key().to_execution_address();
        Self {
            key,
            address,
            _hasher: PhantomData,
        }
    }

    /// The account the signatures of this signer recover to.
    pub fn address(&self) -> &ExecutionAddress {
        &self.address
    }

    /// Signs `message` under the signing domain of its transaction type on `config`'s network and wraps it in a
    /// signed envelope.
    pub fn sign_transaction<S>(
        &self,
        config: &ChainConfig,
        message: S,
    ) -> Result<SignedTransaction<S, Secp256k1Signature>, TransactionError>
    where
        S: TransactionScheme<Signature = Secp256k1Signature>,
    {
        let signing_root = config.signing_root::<H, S>(&message)?;
        let signature = self.key.sign(&signing_root);
        debug!(
            target: LOG_TARGET,
            "Signed transaction of type {} on {} from {} (signing root {})",
            S::TRANSACTION_TYPE,
            config.network(),
            self.address,
            signing_root
        );
        Ok(SignedTransaction::new(message, signature))
    }
}
