// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

pub mod error;
pub mod serializers;
pub mod types;
