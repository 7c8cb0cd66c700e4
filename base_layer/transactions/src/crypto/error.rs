// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Expected {expected} bytes but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Not a valid secp256k1 key: {0}")]
    InvalidKey(String),
    #[error("Not a valid recoverable signature: {0}")]
    InvalidSignature(String),
}

impl From<secp256k1::Error> for KeyError {
    fn from(err: secp256k1::Error) -> Self {
        match err {
            secp256k1::Error::InvalidSignature | secp256k1::Error::InvalidRecoveryId => {
                KeyError::InvalidSignature(err.to_string())
            },
            _ => KeyError::InvalidKey(err.to_string()),
        }
    }
}
