// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_common_types::types::{FixedHash, TransactionType};
use txsig_hashing::MerkleHasher;

use super::{
    BasicTransaction,
    CallTransaction,
    SignedBasicTransaction,
    SignedCallTransaction,
    TransactionScheme,
};
use crate::crypto::Secp256k1Signature;

/// A signed transaction of any of the supported schemes, tagged by its transaction type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnySignedTransaction {
    Basic(SignedBasicTransaction),
    Call(SignedCallTransaction),
}

impl AnySignedTransaction {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            AnySignedTransaction::Basic(_) => BasicTransaction::TRANSACTION_TYPE,
            AnySignedTransaction::Call(_) => CallTransaction::TRANSACTION_TYPE,
        }
    }

    /// The identifier of the wrapped envelope.
    pub fn hash<H: MerkleHasher>(&self) -> FixedHash {
        match self {
            AnySignedTransaction::Basic(tx) => tx.hash::<H>(),
            AnySignedTransaction::Call(tx) => tx.hash::<H>(),
        }
    }

    pub fn signature(&self) -> &Secp256k1Signature {
        match self {
            AnySignedTransaction::Basic(tx) => tx.signature(),
            AnySignedTransaction::Call(tx) => tx.signature(),
        }
    }
}

impl From<SignedBasicTransaction> for AnySignedTransaction {
    fn from(tx: SignedBasicTransaction) -> Self {
        AnySignedTransaction::Basic(tx)
    }
}

impl From<SignedCallTransaction> for AnySignedTransaction {
    fn from(tx: SignedCallTransaction) -> Self {
        AnySignedTransaction::Call(tx)
    }
}
