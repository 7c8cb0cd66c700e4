// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::path::Path;

use config::{Config, Environment, File};
use log::{debug, info};

use crate::{ConfigurationError, LOG_TARGET};

/// Loads the configuration file at `path`. Values may be overridden from `TXSIG_`-prefixed environment variables,
/// using `__` as the section separator (e.g. `TXSIG_CHAIN__NETWORK=mainnet`).
pub fn load_configuration(path: &Path) -> Result<Config, ConfigurationError> {
    debug!(
        target: LOG_TARGET,
        "Loading configuration file from {}",
        path.to_str().unwrap_or("[??]")
    );
    if !path.exists() {
        return Err(ConfigurationError::new(
            "config",
            Some(path.to_string_lossy().to_string()),
            "configuration file does not exist",
        ));
    }
    let cfg = Config::builder()
        .add_source(File::from(path))
        .add_source(Environment::with_prefix("TXSIG").prefix_separator("_").separator("__"))
        .build()?;
    info!(target: LOG_TARGET, "Configuration file loaded.");
    Ok(cfg)
}
