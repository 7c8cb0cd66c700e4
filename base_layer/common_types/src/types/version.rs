// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use super::fixed_bytes::fixed_bytes_type;

fixed_bytes_type!(
    /// A 4-byte fork version tag.
    Version,
    4
);

impl From<u32> for Version {
    /// `0x12345678` becomes the bytes `12 34 56 78`.
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}
