//! Common types shared between the suiview UI and its RPC layer
//!
//! Everything here is free of browser and framework dependencies so the
//! view logic can be unit tested natively.

pub mod rpc;
pub mod view;

use serde::{Deserialize, Serialize};

/// A connected wallet account
///
/// Created by the wallet adapter when the user approves a connection,
/// cleared on disconnect. Owned by the wallet context; views only read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub address: String,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Named Sui network endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuiNetwork {
    Devnet,
    Mainnet,
}

impl SuiNetwork {
    /// All selectable networks, in display order
    pub const ALL: [SuiNetwork; 2] = [SuiNetwork::Devnet, SuiNetwork::Mainnet];

    /// Public fullnode JSON-RPC endpoint for this network
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            SuiNetwork::Devnet => "https://fullnode.devnet.sui.io:443",
            SuiNetwork::Mainnet => "https://fullnode.mainnet.sui.io:443",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SuiNetwork::Devnet => "devnet",
            SuiNetwork::Mainnet => "mainnet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "devnet" => Some(SuiNetwork::Devnet),
            "mainnet" => Some(SuiNetwork::Mainnet),
            _ => None,
        }
    }
}

impl Default for SuiNetwork {
    // Devnet is the active network at startup
    fn default() -> Self {
        SuiNetwork::Devnet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_network_is_devnet() {
        assert_eq!(SuiNetwork::default(), SuiNetwork::Devnet);
    }

    #[test]
    fn test_fullnode_urls() {
        assert_eq!(
            SuiNetwork::Devnet.fullnode_url(),
            "https://fullnode.devnet.sui.io:443"
        );
        assert_eq!(
            SuiNetwork::Mainnet.fullnode_url(),
            "https://fullnode.mainnet.sui.io:443"
        );
    }

    #[test]
    fn test_network_name_round_trip() {
        for network in SuiNetwork::ALL {
            assert_eq!(SuiNetwork::from_name(network.name()), Some(network));
        }
        assert_eq!(SuiNetwork::from_name("testnet"), None);
    }
}
