// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use primitive_types::U256;
use txsig_common_types::types::{ChainId, ExecutionAddress, TransactionType};
use txsig_hashing::{impl_tree_hash_container, ByteList};

use super::{BasicTransaction, SignedTransaction, TransactionScheme};
use crate::{crypto::Secp256k1Signature, TransactionError};

pub const CALL_TRANSACTION_TYPE: TransactionType = TransactionType::new(0xac);

/// The maximum calldata length, in bytes.
pub const MAX_CALLDATA_SIZE: usize = 1 << 24;

/// A contract call: a transfer that also carries calldata for the recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTransaction {
    pub chain_id: ChainId,
    pub nonce: u64,
    pub max_fee_per_gas: U256,
    pub gas: u64,
    pub tx_to: ExecutionAddress,
    pub tx_value: U256,
    pub input: ByteList<MAX_CALLDATA_SIZE>,
}

impl_tree_hash_container!(CallTransaction {
    chain_id,
    nonce,
    max_fee_per_gas,
    gas,
    tx_to,
    tx_value,
    input,
});

impl CallTransaction {
    /// A call carrying `input` as calldata, with the remaining fields taken from `transfer`.
    pub fn from_transfer(transfer: BasicTransaction, input: Vec<u8>) -> Result<Self, TransactionError> {
        Ok(Self {
            chain_id: transfer.chain_id,
            nonce: transfer.nonce,
            max_fee_per_gas: transfer.max_fee_per_gas,
            gas: transfer.gas,
            tx_to: transfer.tx_to,
            tx_value: transfer.tx_value,
            input: ByteList::new(input)?,
        })
    }
}

impl TransactionScheme for CallTransaction {
    type Signature = Secp256k1Signature;

    const TRANSACTION_TYPE: TransactionType = CALL_TRANSACTION_TYPE;
}

pub type SignedCallTransaction = SignedTransaction<CallTransaction, Secp256k1Signature>;

#[cfg(test)]
mod test {
    use txsig_common_types::types::FixedHash;
    use txsig_hashing::{Sha256Hasher, TreeHash};

    use super::*;
    use crate::transaction_components::test::reference_transaction;

    fn reference_call(input: Vec<u8>) -> CallTransaction {
        CallTransaction::from_transfer(reference_transaction(), input).unwrap()
    }

    #[test]
    fn calldata_root() {
        let call = reference_call(vec![0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(
            hex::encode(call.input.tree_hash_root::<Sha256Hasher>()),
            "b447786863d253400b7eb0dad5c1c992c9f00d9eeaaf1e788f2f8bcd375ab232"
        );
        assert_eq!(
            FixedHash::root_of::<Sha256Hasher, _>(&call).to_hex(),
            "0xad22b3a5873402355f2ec32301ef4e720e346bc787cd77efbc6dd5e535882e15"
        );
    }

    #[test]
    fn empty_calldata_still_differs_from_a_basic_transaction() {
        let call = reference_call(vec![]);
        assert_eq!(
            hex::encode(call.input.tree_hash_root::<Sha256Hasher>()),
            "0e6179774d9c1f780c91a68968a143b5ffd2f18c2c01a2e85016e12a8c781a0b"
        );
        assert_ne!(
            FixedHash::root_of::<Sha256Hasher, _>(&call),
            FixedHash::root_of::<Sha256Hasher, _>(&reference_transaction())
        );
    }

    #[test]
    fn oversized_calldata_is_rejected() {
        let oversized = vec![0u8; MAX_CALLDATA_SIZE + 1];
        let err = CallTransaction::from_transfer(reference_transaction(), oversized).unwrap_err();
        assert!(matches!(err, TransactionError::TreeHashError(_)));
    }
}
