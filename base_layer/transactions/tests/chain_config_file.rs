// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

mod helpers;

use std::io::Write;

use helpers::reference_signer;
use tempfile::NamedTempFile;
use txsig_common::Network;
use txsig_common_types::types::{ChainId, Hash32, TransactionType, Version};
use txsig_transactions::{chain_config::ChainConfig, SignatureValidator};

const CONFIG: &str = r#"
[chain]
network = "localnet"

[chain.localnet]
chain_id = 424242
genesis_hash = "0x000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"

[[chain.localnet.transaction_types]]
tx_type = 0xab
fork_version = "0x12345678"

[chain.sepolia]
chain_id = "11155111"
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_the_selected_network() {
    let file = write_config(CONFIG);
    let config = ChainConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.network(), Network::LocalNet);
    assert_eq!(config.chain_id(), ChainId::from(424_242));
    assert_eq!(config.genesis_hash(), ChainConfig::for_network(Network::LocalNet).genesis_hash());
    assert_eq!(config.fork_version(TransactionType::new(0xab)), Some(Version::from(0x1234_5678)));
    // Only 0xab is listed in the file
    assert_eq!(config.fork_version(TransactionType::new(0xac)), None);
}

#[test]
fn file_config_signs_like_the_preset() {
    let file = write_config(CONFIG);
    let config = ChainConfig::load_from_file(file.path()).unwrap();
    let preset = ChainConfig::for_network(Network::LocalNet);
    let signer = reference_signer();
    let from_file = signer.sign_transaction(&config, helpers::reference_transaction()).unwrap();
    let from_preset = signer.sign_transaction(&preset, helpers::reference_transaction()).unwrap();
    assert_eq!(from_file, from_preset);
    assert!(SignatureValidator::new(&config).is_authorized(&from_preset, signer.address()));
}

#[test]
fn switching_network_uses_its_subsection_and_preset() {
    let file = write_config(&CONFIG.replace("network = \"localnet\"", "network = \"sepolia\""));
    let config = ChainConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.network(), Network::Sepolia);
    assert_eq!(config.chain_id(), ChainId::from(11_155_111));
    assert_eq!(config.genesis_hash(), ChainConfig::for_network(Network::Sepolia).genesis_hash());
}

#[test]
fn duplicate_types_in_a_file_are_rejected() {
    let file = write_config(
        r#"
[chain]
network = "localnet"
genesis_hash = "0x0000000000000000000000000000000000000000000000000000000000000000"

[[chain.transaction_types]]
tx_type = 0xab
fork_version = "0x00000001"

[[chain.transaction_types]]
tx_type = 0xab
fork_version = "0x00000002"
"#,
    );
    assert!(ChainConfig::load_from_file(file.path()).is_err());
}

#[test]
fn unknown_network_is_rejected() {
    let file = write_config("[chain]\nnetwork = \"moonnet\"\n");
    let err = ChainConfig::load_from_file(file.path()).unwrap_err();
    assert_eq!(err.field(), "network");
}

#[test]
fn main_section_only() {
    let file = write_config(
        r#"
[chain]
chain_id = 99
genesis_hash = "0x1111111111111111111111111111111111111111111111111111111111111111"
transaction_types = []
"#,
    );
    let config = ChainConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.network(), Network::LocalNet);
    assert_eq!(config.chain_id(), ChainId::from(99));
    assert_eq!(config.genesis_hash(), &Hash32::from([0x11; 32]));
    assert!(config.transaction_types().is_empty());
}
