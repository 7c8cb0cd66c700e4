// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

mod error;
pub use error::ConfigurationError;

mod loader;
pub use loader::{ConfigLoader, ConfigPath, NetworkConfigPath};

mod network;
pub use network::Network;

mod utils;
pub use utils::load_configuration;
