// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Common logging and configuration utilities
//!
//! A single TOML file carries the chain settings of every network an application may sign for. The `network` key of a
//! section selects which network subsection is merged over it, e.g.
//!
//! ```toml
//! [chain]
//! network = "localnet"
//!
//! [chain.mainnet]
//! chain_id = 1
//! ```
//!
//! The log configuration file path is chosen with the following order of precedence:
//!
//! 1. Command-line argument
//! 2. The `TXSIG_LOG_CONFIGURATION` environment variable
//! 3. `~/.txsig/log4rs.yml`

mod configuration;
pub use configuration::{
    load_configuration,
    ConfigLoader,
    ConfigPath,
    ConfigurationError,
    Network,
    NetworkConfigPath,
};

mod logging;
pub use logging::{get_log_configuration_path, initialize_logging, install_default_logfile_config};

pub const DEFAULT_CONFIG: &str = "config.toml";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const LOG_CONFIG_ENV_VAR: &str = "TXSIG_LOG_CONFIGURATION";

const LOG_TARGET: &str = "c::common::config";
