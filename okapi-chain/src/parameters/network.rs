//! The eCash networks, and the constants that identify them on the wire.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

use crate::block;

/// An enum describing the possible network choices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Network {
    /// The production network.
    #[default]
    Mainnet,

    /// The public test network.
    Testnet,

    /// The local regression test network.
    Regtest,
}

/// A magic number identifying an eCash network on the wire.
///
/// The magic number is sent at the start of every network protocol message,
/// so peers on different networks disconnect from each other early.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

/// Magic numbers for each eCash network.
pub mod magics {
    use super::Magic;

    /// The production network.
    pub const MAINNET: Magic = Magic([0xe3, 0xe1, 0xf3, 0xe8]);

    /// The public test network.
    pub const TESTNET: Magic = Magic([0xf4, 0xe5, 0xf3, 0xf4]);

    /// The local regression test network.
    pub const REGTEST: Magic = Magic([0xda, 0xb5, 0xbf, 0xfa]);
}

impl From<Network> for &'static str {
    fn from(network: Network) -> &'static str {
        match network {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Regtest => "Regtest",
        }
    }
}

impl From<&Network> for &'static str {
    fn from(network: &Network) -> &'static str {
        (*network).into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

impl Network {
    /// Returns an iterator over the available network variants.
    pub fn iter() -> impl Iterator<Item = Network> {
        [Network::Mainnet, Network::Testnet, Network::Regtest].into_iter()
    }

    /// Returns the magic value prefixed to this network's protocol messages.
    pub fn magic(&self) -> Magic {
        match self {
            Network::Mainnet => magics::MAINNET,
            Network::Testnet => magics::TESTNET,
            Network::Regtest => magics::REGTEST,
        }
    }

    /// Returns the cashaddr prefix for this network, without the `:`
    /// separator.
    pub fn cashaddr_prefix(&self) -> &'static str {
        match self {
            Network::Mainnet => "ecash",
            Network::Testnet => "ectest",
            Network::Regtest => "ecregtest",
        }
    }

    /// Returns the default P2P port for this network.
    pub fn default_port(&self) -> u16 {
        match self {
            Network::Mainnet => 8333,
            Network::Testnet => 18333,
            Network::Regtest => 18444,
        }
    }

    /// Returns the hash of this network's genesis block.
    pub fn genesis_hash(&self) -> block::Hash {
        match self {
            // ecash-cli getblockhash 0
            Network::Mainnet => "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
            // ecash-cli -testnet getblockhash 0
            Network::Testnet => "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943",
            // ecash-cli -regtest getblockhash 0
            Network::Regtest => "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206",
        }
        .parse()
        .expect("hard-coded hash parses")
    }

    /// Returns the network name as defined in
    /// [BIP70](https://github.com/bitcoin/bips/blob/master/bip-0070.mediawiki#paymentdetailspaymentrequest).
    pub fn bip70_network_name(&self) -> String {
        match self {
            Network::Mainnet => "main".to_string(),
            Network::Testnet => "test".to_string(),
            Network::Regtest => "regtest".to_string(),
        }
    }

    /// Returns the lowercase network name.
    pub fn lowercase_name(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    /// Returns `true` if this network is used for testing.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }
}

impl FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}

/// An error indicating that a string is not a valid network name.
#[derive(Clone, Debug, Error)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(String);
