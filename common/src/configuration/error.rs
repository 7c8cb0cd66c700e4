// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::fmt;

/// A configuration value that could not be loaded or did not pass validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    field: String,
    value: Option<String>,
    message: String,
}

impl ConfigurationError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, value: Option<String>, msg: M) -> Self {
        ConfigurationError {
            field: field.into(),
            value,
            message: msg.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Invalid value `{}` for {}: {}", v, self.field, self.message),
            None => write!(f, "Invalid value for {}: {}", self.field, self.message),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<config::ConfigError> for ConfigurationError {
    fn from(err: config::ConfigError) -> Self {
        use config::ConfigError;
        match err {
            ConfigError::FileParse { uri: Some(uri), cause } => Self::new(uri, None, cause.to_string()),
            ConfigError::Type { ref key, .. } => {
                Self::new(key.clone().unwrap_or_default(), None, err.to_string())
            },
            ConfigError::NotFound(key) => Self::new(key, None, "required key not found"),
            x => Self::new("", None, x.to_string()),
        }
    }
}
