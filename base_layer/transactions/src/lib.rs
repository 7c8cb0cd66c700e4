// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Signing execution transactions
//!
//! Transactions are structured values whose identity is a tree-hash root. This crate derives the root a transaction
//! author signs (the *signing root*), assembles signed envelopes, and recovers and checks signers.
//!
//! The signing root binds the unsigned transaction to a 32-byte domain made of the transaction's type and the
//! network it targets, so signatures cannot be replayed across chains, forks or transaction types, and the signing
//! root of a transaction is never equal to its identifier.
//!
//! ```ignore
//! let config = ChainConfig::for_network(Network::LocalNet);
//! let signer = TransactionSigner::new(key);
//! let signed = signer.sign_transaction(&config, transaction)?;
//! let tx_id = signed.hash::<Sha256Hasher>();
//! assert!(SignatureValidator::new(&config).is_authorized(&signed, signer.address()));
//! ```

pub mod chain_config;
pub mod crypto;
pub mod signing;
pub mod transaction_components;

mod error;
pub use error::TransactionError;

mod signer;
pub use signer::TransactionSigner;

mod validation;
pub use validation::SignatureValidator;
