// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeHashError {
    #[error("Cannot merkleize {count} chunks under a limit of {limit}")]
    ChunkLimitExceeded { count: usize, limit: usize },
    #[error("List of length {len} exceeds its maximum length of {max}")]
    ListTooLong { len: usize, max: usize },
}
