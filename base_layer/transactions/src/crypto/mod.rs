// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Recoverable ECDSA over secp256k1, the signature primitive of the shipped transaction schemes.

mod error;
pub use error::KeyError;

mod private_key;
pub use private_key::Secp256k1PrivateKey;

mod public_key;
pub use public_key::{recover_public_key, Secp256k1PublicKey};

mod signature;
pub use signature::Secp256k1Signature;

use once_cell::sync::Lazy;
use secp256k1::{All, Secp256k1};

pub(crate) static SECP256K1_CTX: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);
