// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeParseError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Expected {expected} bytes but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid integer `{0}`")]
    InvalidInteger(String),
}
