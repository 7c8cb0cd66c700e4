// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use thiserror::Error;
use txsig_common_types::types::TransactionType;
use txsig_hashing::TreeHashError;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction type {0} is not registered for this network")]
    UnknownTransactionType(TransactionType),
    #[error("Tree hash error: {0}")]
    TreeHashError(#[from] TreeHashError),
}
