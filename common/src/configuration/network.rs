// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{
    fmt,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// The networks a transaction can be signed for. Each network carries its own genesis hash, chain id and fork
/// schedule, so signatures never carry over from one to another.
#[repr(u8)]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Network {
    MainNet = 0x00,
    Sepolia = 0x01,
    LocalNet = 0x10,
}

impl Network {
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn as_key_str(self) -> &'static str {
        #[allow(clippy::enum_glob_use)]
        use Network::*;
        match self {
            MainNet => "mainnet",
            Sepolia => "sepolia",
            LocalNet => "localnet",
        }
    }
}

/// The default network for all applications
impl Default for Network {
    fn default() -> Self {
        Network::LocalNet
    }
}

impl FromStr for Network {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        #[allow(clippy::enum_glob_use)]
        use Network::*;
        match value.to_lowercase().as_str() {
            "mainnet" => Ok(MainNet),
            "sepolia" => Ok(Sepolia),
            "localnet" | "local" => Ok(LocalNet),
            invalid => Err(ConfigurationError::new(
                "network",
                Some(value.to_string()),
                format!("Invalid network option: {}", invalid),
            )),
        }
    }
}

impl TryFrom<String> for Network {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Network> for String {
    fn from(n: Network) -> Self {
        n.to_string()
    }
}

impl TryFrom<u8> for Network {
    type Error = ConfigurationError;

    fn try_from(v: u8) -> Result<Self, ConfigurationError> {
        match v {
            x if x == Network::MainNet as u8 => Ok(Network::MainNet),
            x if x == Network::Sepolia as u8 => Ok(Network::Sepolia),
            x if x == Network::LocalNet as u8 => Ok(Network::LocalNet),
            _ => Err(ConfigurationError::new(
                "network",
                Some(v.to_string()),
                format!("Invalid network option: {}", v),
            )),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_key_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn network_bytes_and_keys() {
        assert_eq!(Network::MainNet.as_byte(), 0x00);
        assert_eq!(Network::Sepolia.as_byte(), 0x01);
        assert_eq!(Network::LocalNet.as_byte(), 0x10);

        assert_eq!(Network::MainNet.as_key_str(), "mainnet");
        assert_eq!(Network::Sepolia.as_key_str(), "sepolia");
        assert_eq!(Network::LocalNet.as_key_str(), "localnet");
    }

    #[test]
    fn network_default() {
        assert_eq!(Network::default(), Network::LocalNet);
    }

    #[test]
    fn network_from_str() {
        assert_eq!(Network::from_str("mainnet").unwrap(), Network::MainNet);
        assert_eq!(Network::from_str("Sepolia").unwrap(), Network::Sepolia);
        assert_eq!(Network::from_str("localnet").unwrap(), Network::LocalNet);
        assert_eq!(Network::from_str("local").unwrap(), Network::LocalNet);
        let err = Network::from_str("invalid network").unwrap_err();
        assert_eq!(err.field(), "network");
    }

    #[test]
    fn network_from_byte() {
        assert_eq!(Network::try_from(0x00).unwrap(), Network::MainNet);
        assert_eq!(Network::try_from(0x01).unwrap(), Network::Sepolia);
        assert_eq!(Network::try_from(0x10).unwrap(), Network::LocalNet);
        assert!(Network::try_from(0x02).is_err());
    }
}
