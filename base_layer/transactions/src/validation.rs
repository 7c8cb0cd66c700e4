// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::marker::PhantomData;

use log::*;
use txsig_common_types::types::{ExecutionAddress, FixedHash};
use txsig_hashing::{MerkleHasher, Sha256Hasher};

use crate::{
    chain_config::ChainConfig,
    crypto::{recover_public_key, Secp256k1Signature},
    transaction_components::{AnySignedTransaction, SignedTransaction, TransactionScheme},
};

const LOG_TARGET: &str = "c::tx::validation";

/// Recovers and checks transaction signers against the signing domains of one network.
///
/// A signature made for another chain, fork or transaction type recovers to an unrelated address, so the outcome is
/// a plain yes/no: callers cannot tell a replayed signature from a corrupted one.
pub struct SignatureValidator<'a, H = Sha256Hasher> {
    config: &'a ChainConfig,
    _hasher: PhantomData<H>,
}

impl<'a> SignatureValidator<'a, Sha256Hasher> {
    pub fn new(config: &'a ChainConfig) -> Self {
        Self::with_hasher(config)
    }
}

impl<'a, H: MerkleHasher> SignatureValidator<'a, H> {
    pub fn with_hasher(config: &'a ChainConfig) -> Self {
        Self {
            config,
            _hasher: PhantomData,
        }
    }

    /// The account whose key produced the signature of `tx`, if any key can be recovered under this network's
    /// signing domain.
    pub fn recover_signer<S>(&self, tx: &SignedTransaction<S, Secp256k1Signature>) -> Option<ExecutionAddress>
    where S: TransactionScheme<Signature = Secp256k1Signature> {
        let signing_root = match self.config.signing_root::<H, S>(tx.message()) {
            Ok(root) => root,
            Err(e) => {
                debug!(target: LOG_TARGET, "No signing domain for transaction: {}", e);
                return None;
            },
        };
        self.recover_from_root(&signing_root, tx.signature())
    }

    /// True if `tx` was signed by `expected` for this network.
    pub fn is_authorized<S>(&self, tx: &SignedTransaction<S, Secp256k1Signature>, expected: &ExecutionAddress) -> bool
    where S: TransactionScheme<Signature = Secp256k1Signature> {
        self.check_signer(self.recover_signer(tx), expected)
    }

    /// As [`Self::recover_signer`], dispatching on the transaction type of `tx`.
    pub fn recover_any_signer(&self, tx: &AnySignedTransaction) -> Option<ExecutionAddress> {
        match tx {
            AnySignedTransaction::Basic(tx) => self.recover_signer(tx),
            AnySignedTransaction::Call(tx) => self.recover_signer(tx),
        }
    }

    /// As [`Self::is_authorized`], dispatching on the transaction type of `tx`.
    pub fn is_any_authorized(&self, tx: &AnySignedTransaction, expected: &ExecutionAddress) -> bool {
        self.check_signer(self.recover_any_signer(tx), expected)
    }

    fn recover_from_root(&self, signing_root: &FixedHash, signature: &Secp256k1Signature) -> Option<ExecutionAddress> {
        match recover_public_key(signing_root, signature) {
            Some(key) => Some(key.to_execution_address()),
            None => {
                debug!(
                    target: LOG_TARGET,
                    "Could not recover a public key from signature {} over {}", signature, signing_root
                );
                None
            },
        }
    }

    fn check_signer(&self, recovered: Option<ExecutionAddress>, expected: &ExecutionAddress) -> bool {
        match recovered {
            Some(signer) if signer == *expected => true,
            Some(signer) => {
                debug!(
                    target: LOG_TARGET,
                    "Signature on {} recovers to {}, expected {}",
                    self.config.network(),
                    signer,
                    expected
                );
                false
            },
            None => false,
        }
    }
}
