// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{
    env,
    fs,
    path::{Path, PathBuf},
};

use crate::{ConfigurationError, DEFAULT_LOG_CONFIG, LOG_CONFIG_ENV_VAR};

/// Determine the path to a log configuration file using the following precedence rules:
/// 1. Use the provided path (usually pulled from a CLI argument)
/// 2. Use the value in the `TXSIG_LOG_CONFIGURATION` envar
/// 3. The default path (OS-dependent), `~/.txsig/log4rs.yml`
/// 4. `log4rs.yml` in the current directory
pub fn get_log_configuration_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .or_else(|| {
            env::var_os(LOG_CONFIG_ENV_VAR)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs_next::home_dir().map(|path| path.join(".txsig").join(DEFAULT_LOG_CONFIG)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG))
}

/// Set up application-level logging using the Log4rs configuration file at `config_file`.
pub fn initialize_logging(config_file: &Path) -> Result<(), ConfigurationError> {
    println!(
        "Initializing logging according to {:?}",
        config_file.to_str().unwrap_or("[??]")
    );
    log4rs::init_file(config_file, Default::default()).map_err(|e| {
        ConfigurationError::new(
            "log_config",
            Some(config_file.to_string_lossy().to_string()),
            format!("We couldn't load a logging configuration file. {}", e),
        )
    })
}

/// Installs the sample logfile configuration at the given path, creating parent directories as needed.
pub fn install_default_logfile_config(path: &Path) -> Result<(), std::io::Error> {
    let source = include_str!("../logging/log4rs-sample.yml");
    if let Some(d) = path.parent() {
        fs::create_dir_all(d)?;
    }
    fs::write(path, source)
}

#[cfg(test)]
mod test {
    use super::*;

    // Both precedence rules share one test since they touch the same process-wide env var
    #[test]
    fn get_log_configuration_path_precedence() {
        let path = get_log_configuration_path(Some(PathBuf::from("~/my-txsig")));
        assert_eq!(path.to_str().unwrap(), "~/my-txsig");

        env::set_var(LOG_CONFIG_ENV_VAR, "~/fake-example");
        let path = get_log_configuration_path(None);
        assert_eq!(path.to_str().unwrap(), "~/fake-example");
        let path = get_log_configuration_path(Some(PathBuf::from("~/my-txsig")));
        assert_eq!(path.to_str().unwrap(), "~/my-txsig");

        env::set_var(LOG_CONFIG_ENV_VAR, "");
        let path = get_log_configuration_path(None);
        assert!(path.ends_with(DEFAULT_LOG_CONFIG));
        env::remove_var(LOG_CONFIG_ENV_VAR);
    }

    #[test]
    fn installs_the_sample_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_LOG_CONFIG);
        install_default_logfile_config(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("appenders:"));
    }

    #[test]
    fn missing_log_configuration_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = initialize_logging(&dir.path().join("absent.yml")).unwrap_err();
        assert_eq!(err.field(), "log_config");
    }
}
