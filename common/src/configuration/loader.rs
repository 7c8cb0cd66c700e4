// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use config::{Config, Value};

use super::{ConfigurationError, Network};

pub trait ConfigPath {
    /// Main configuration section
    fn main_key_prefix() -> &'static str;

    /// Overload values from a key prefix based on some configuration value.
    ///
    /// Should return a path to configuration table with overloading values.
    /// Returns `ConfigurationError` if key_prefix field has wrong value.
    /// Returns Ok(None) if no overload is required
    fn overload_key_prefix(config: &Config) -> Result<Option<String>, ConfigurationError>;

    /// Merge and produce sub-config from overload_key_prefix to main_key_prefix,
    /// which can be used to deserialize Self struct.
    /// If overload key is not present in config it won't make effect
    fn merge_subconfig(config: &Config) -> Result<Config, ConfigurationError> {
        let overload = match Self::overload_key_prefix(config)? {
            Some(key) => config.get::<Value>(key.as_str()).ok(),
            None => None,
        };
        match overload {
            Some(overload) => {
                let base: Value = config.get(Self::main_key_prefix()).unwrap_or_default();
                // Tables set at the same key are merged recursively, the override winning on conflicts
                let merged = Config::builder()
                    .set_default(Self::main_key_prefix(), base)?
                    .set_override(Self::main_key_prefix(), overload)?
                    .build()?;
                Ok(merged)
            },
            None => Ok(config.clone()),
        }
    }
}

pub trait NetworkConfigPath {
    /// Main configuration section
    fn main_key_prefix() -> &'static str;

    /// Path for `network` key in config
    fn network_config_key() -> String {
        let main = <Self as NetworkConfigPath>::main_key_prefix();
        format!("{}.network", main)
    }
}

impl<C: NetworkConfigPath> ConfigPath for C {
    /// Returns the string representing the top level configuration category.
    /// For example, in the following TOML file, options for `main_key_prefix` would be `chain` or `signer`:
    /// ```toml
    /// [chain]
    ///   subkey1=1
    /// [signer]
    ///   subkey2=1
    /// ```
    fn main_key_prefix() -> &'static str {
        <Self as NetworkConfigPath>::main_key_prefix()
    }

    /// Loads the desired subsection from the config file into the provided `config` and merges the results. The
    /// subsection that is selected for merging is determined by the value of the `network` sub key of the "main"
    /// section. For example, if a TOML configuration file contains the following:
    ///
    /// ```toml
    /// [chain]
    ///   network="mainnet"
    ///   chain_id=5
    /// [chain.mainnet]
    ///   chain_id=1
    /// [chain.sepolia]
    ///   chain_id=11155111
    /// ```
    ///
    /// the result after calling `merge_subconfig` would have `chain_id` set to 1. If `network` were omitted,
    /// `chain_id` would be 5, and if `network` were set to `sepolia`, `chain_id` would be 11155111.
    fn overload_key_prefix(config: &Config) -> Result<Option<String>, ConfigurationError> {
        let network_key = Self::network_config_key();
        let network_val: Option<String> = config.get_string(network_key.as_str()).ok();
        if let Some(s) = network_val {
            let network: Network = s.parse()?;
            Ok(Some(format!("{}.{}", Self::main_key_prefix(), network)))
        } else {
            Ok(None)
        }
    }
}

pub trait ConfigLoader: ConfigPath + for<'de> serde::de::Deserialize<'de> {
    /// Try to load configuration from supplied Config by `main_key_prefix()`
    /// with values overloaded from `overload_key_prefix()`.
    ///
    /// Default values will be taken from
    /// - `#[serde(default="value")]` field attribute
    /// - value defined in `ConfigBuilder::set_default()`
    fn load_from(config: &Config) -> Result<Self, ConfigurationError> {
        let merger = Self::merge_subconfig(config)?;
        Ok(merger.get(Self::main_key_prefix())?)
    }
}
impl<C> ConfigLoader for C where C: ConfigPath + for<'de> serde::de::Deserialize<'de> {}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Signer {
        account: String,
        #[serde(default = "serde_default_fee")]
        max_fee: u64,
    }

    fn serde_default_fee() -> u64 {
        100
    }

    impl NetworkConfigPath for Signer {
        fn main_key_prefix() -> &'static str {
            "signer"
        }
    }

    #[test]
    fn network_config_loader() -> Result<(), Box<dyn std::error::Error>> {
        let builder = Config::builder()
            .set_override("signer.account", "alice")?
            .set_override("signer.mainnet.account", "bob")?
            .set_override("signer.mainnet.max_fee", 7)?;

        // no network value
        let signer = <Signer as ConfigLoader>::load_from(&builder.clone().build()?)?;
        assert_eq!(signer.account, "alice");
        assert_eq!(signer.max_fee, 100);

        // network = mainnet
        let config = builder.clone().set_override("signer.network", "mainnet")?.build()?;
        let signer = <Signer as ConfigLoader>::load_from(&config)?;
        assert_eq!(signer.account, "bob");
        assert_eq!(signer.max_fee, 7);

        // network without a subsection falls back to the main section
        let config = builder.clone().set_override("signer.network", "sepolia")?.build()?;
        let signer = <Signer as ConfigLoader>::load_from(&config)?;
        assert_eq!(signer.account, "alice");

        let config = builder.set_override("signer.network", "wrong_network")?.build()?;
        let err = <Signer as ConfigLoader>::load_from(&config).unwrap_err();
        assert_eq!(err.field(), "network");
        Ok(())
    }

    #[test]
    fn missing_section_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::builder().set_override("other.account", "carol")?.build()?;
        assert!(<Signer as ConfigLoader>::load_from(&config).is_err());
        Ok(())
    }
}
