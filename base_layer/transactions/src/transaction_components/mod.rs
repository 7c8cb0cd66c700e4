// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

pub use any_transaction::AnySignedTransaction;
pub use basic_transaction::{BasicTransaction, SignedBasicTransaction, BASIC_TRANSACTION_TYPE};
pub use call_transaction::{CallTransaction, SignedCallTransaction, CALL_TRANSACTION_TYPE, MAX_CALLDATA_SIZE};
pub use scheme::TransactionScheme;
pub use signed_transaction::SignedTransaction;

mod any_transaction;
mod basic_transaction;
mod call_transaction;
mod scheme;
mod signed_transaction;
