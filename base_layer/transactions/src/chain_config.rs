// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{collections::HashSet, path::Path};

use config::Config;
use log::*;
use serde::{Deserialize, Serialize};
use txsig_common::{load_configuration, ConfigLoader, ConfigurationError, Network, NetworkConfigPath};
use txsig_common_types::types::{ChainId, Domain, FixedHash, Hash32, TransactionType, Version};
use txsig_hashing::MerkleHasher;

use crate::{
    signing::{compute_signing_root, compute_transaction_domain},
    transaction_components::{TransactionScheme, BASIC_TRANSACTION_TYPE, CALL_TRANSACTION_TYPE},
    TransactionError,
};

const LOG_TARGET: &str = "c::tx::chain_config";

/// The fork at which a transaction type was introduced on a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTypeConfig {
    pub tx_type: TransactionType,
    pub fork_version: Version,
}

/// The immutable network identity used to derive signing domains: genesis hash, chain id and the fork version each
/// transaction type was introduced in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawChainConfig")]
pub struct ChainConfig {
    network: Network,
    genesis_hash: Hash32,
    chain_id: ChainId,
    transaction_types: Vec<TransactionTypeConfig>,
}

impl ChainConfig {
    pub fn builder(genesis_hash: Hash32, chain_id: ChainId) -> ChainConfigBuilder {
        ChainConfigBuilder::new(genesis_hash, chain_id)
    }

    /// The built-in settings for `network`.
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::MainNet => Self {
                network,
                genesis_hash: Hash32::new(MAINNET_GENESIS_HASH),
                chain_id: ChainId::from(1),
                transaction_types: default_transaction_types(Version::new([0x05, 0x00, 0x00, 0x00])),
            },
            Network::Sepolia => Self {
                network,
                genesis_hash: Hash32::new(SEPOLIA_GENESIS_HASH),
                chain_id: ChainId::from(11_155_111),
                transaction_types: default_transaction_types(Version::new([0x90, 0x00, 0x00, 0x74])),
            },
            Network::LocalNet => {
                let mut genesis_hash = [0u8; 32];
                genesis_hash.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
                Self {
                    network,
                    genesis_hash: Hash32::new(genesis_hash),
                    chain_id: ChainId::from(424_242),
                    transaction_types: default_transaction_types(Version::new([0x12, 0x34, 0x56, 0x78])),
                }
            },
        }
    }

    /// Loads the `chain` section of `config`, merging the `chain.<network>` subsection over it when `chain.network`
    /// is set. Keys left out fall back to the built-in settings of the selected network.
    pub fn load(config: &Config) -> Result<Self, ConfigurationError> {
        let chain_config = <Self as ConfigLoader>::load_from(config)?;
        debug!(
            target: LOG_TARGET,
            "Loaded chain configuration for {} (chain id {}, {} transaction type(s))",
            chain_config.network,
            chain_config.chain_id,
            chain_config.transaction_types.len()
        );
        Ok(chain_config)
    }

    /// Reads the configuration file at `path` and loads its `chain` section.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let config = load_configuration(path)?;
        Self::load(&config)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn genesis_hash(&self) -> &Hash32 {
        &self.genesis_hash
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn transaction_types(&self) -> &[TransactionTypeConfig] {
        &self.transaction_types
    }

    /// The fork version `tx_type` was introduced in, if it is registered on this network.
    pub fn fork_version(&self, tx_type: TransactionType) -> Option<Version> {
        self.transaction_types
            .iter()
            .find(|t| t.tx_type == tx_type)
            .map(|t| t.fork_version)
    }

    /// The signing domain of `tx_type` on this network.
    pub fn transaction_domain<H: MerkleHasher>(&self, tx_type: TransactionType) -> Result<Domain, TransactionError> {
        let fork_version = self.fork_version(tx_type).ok_or_else(|| {
            trace!(
                target: LOG_TARGET,
                "Transaction type {} is not registered on {}",
                tx_type,
                self.network
            );
            TransactionError::UnknownTransactionType(tx_type)
        })?;
        Ok(compute_transaction_domain::<H>(
            tx_type,
            fork_version,
            &self.genesis_hash,
            self.chain_id,
        ))
    }

    /// The root to sign for `message` on this network.
    pub fn signing_root<H: MerkleHasher, S: TransactionScheme>(
        &self,
        message: &S,
    ) -> Result<FixedHash, TransactionError> {
        let domain = self.transaction_domain::<H>(S::TRANSACTION_TYPE)?;
        Ok(compute_signing_root::<H, _>(message, &domain))
    }
}

impl NetworkConfigPath for ChainConfig {
    fn main_key_prefix() -> &'static str {
        "chain"
    }
}

/// Builds a [`ChainConfig`], rejecting transaction types registered more than once.
#[derive(Debug, Clone)]
pub struct ChainConfigBuilder {
    network: Network,
    genesis_hash: Hash32,
    chain_id: ChainId,
    transaction_types: Vec<TransactionTypeConfig>,
}

impl ChainConfigBuilder {
    pub fn new(genesis_hash: Hash32, chain_id: ChainId) -> Self {
        Self {
            network: Network::default(),
            genesis_hash,
            chain_id,
            transaction_types: Vec::new(),
        }
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Registers `tx_type` as introduced in the fork `fork_version`.
    pub fn with_transaction_type(mut self, tx_type: TransactionType, fork_version: Version) -> Self {
        self.transaction_types.push(TransactionTypeConfig { tx_type, fork_version });
        self
    }

    pub fn build(self) -> Result<ChainConfig, ConfigurationError> {
        let mut seen = HashSet::new();
        for t in &self.transaction_types {
            if !seen.insert(t.tx_type) {
                return Err(ConfigurationError::new(
                    "transaction_types",
                    Some(t.tx_type.to_string()),
                    "transaction type is registered more than once",
                ));
            }
        }
        Ok(ChainConfig {
            network: self.network,
            genesis_hash: self.genesis_hash,
            chain_id: self.chain_id,
            transaction_types: self.transaction_types,
        })
    }
}

#[derive(Deserialize)]
struct RawChainConfig {
    #[serde(default)]
    network: Network,
    genesis_hash: Option<Hash32>,
    chain_id: Option<ChainId>,
    transaction_types: Option<Vec<TransactionTypeConfig>>,
}

impl TryFrom<RawChainConfig> for ChainConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawChainConfig) -> Result<Self, Self::Error> {
        let preset = ChainConfig::for_network(raw.network);
        let builder = ChainConfig::builder(
            raw.genesis_hash.unwrap_or(preset.genesis_hash),
            raw.chain_id.unwrap_or(preset.chain_id),
        )
        .with_network(raw.network);
        raw.transaction_types
            .unwrap_or(preset.transaction_types)
            .into_iter()
            .fold(builder, |b, t| b.with_transaction_type(t.tx_type, t.fork_version))
            .build()
    }
}

fn default_transaction_types(fork_version: Version) -> Vec<TransactionTypeConfig> {
    vec![
        TransactionTypeConfig {
            tx_type: BASIC_TRANSACTION_TYPE,
            fork_version,
        },
        TransactionTypeConfig {
            tx_type: CALL_TRANSACTION_TYPE,
            fork_version,
        },
    ]
}

const MAINNET_GENESIS_HASH: [u8; 32] = [
    0xd4, 0xe5, 0x67, 0x40, 0xf8, 0x76, 0xae, 0xf8, 0xc0, 0x10, 0xb8, 0x6a, 0x40, 0xd5, 0xf5, 0x67, 0x45, 0xa1, 0x18,
    0xd0, 0x90, 0x6a, 0x34, 0xe6, 0x9a, 0xec, 0x8c, 0x0d, 0xb1, 0xcb, 0x8f, 0xa3,
];

const SEPOLIA_GENESIS_HASH: [u8; 32] = [
    0x25, 0xa5, 0xcc, 0x10, 0x6e, 0xea, 0x71, 0x38, 0xac, 0xab, 0x33, 0x23, 0x1d, 0x71, 0x60, 0xd6, 0x9c, 0xb7, 0x77,
    0xee, 0x0c, 0x2c, 0x55, 0x3f, 0xcd, 0xdf, 0x51, 0x38, 0x99, 0x3e, 0x6d, 0xd9,
];
