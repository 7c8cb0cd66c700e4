// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_common_types::types::TransactionType;
use txsig_hashing::TreeHash;

/// An unsigned transaction format, identified on the wire by a one-byte type tag.
///
/// The implementing type is the unsigned message; its root is what gets signed, bound to the signing domain of
/// [`Self::TRANSACTION_TYPE`].
pub trait TransactionScheme: TreeHash {
    const TRANSACTION_TYPE: TransactionType;

    /// The signature payload carried in the signed envelope.
    type Signature: TreeHash;
}
