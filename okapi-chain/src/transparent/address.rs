//! Transparent eCash addresses.

use std::fmt;

use crate::{
    parameters::Network,
    serialization::SerializationError,
    transparent::{cashaddr, opcodes::OpCode, Script},
};

#[cfg(test)]
use proptest::prelude::*;

/// The CashAddr version byte for a pay-to-public-key-hash address with a
/// 160-bit hash: type bits 0, size bits 0.
const P2PKH_VERSION_BYTE: u8 = 0x00;

/// The CashAddr version byte for a pay-to-script-hash address with a
/// 160-bit hash: type bits 1, size bits 0.
const P2SH_VERSION_BYTE: u8 = 0x08;

/// Transparent eCash addresses.
///
/// eCash addresses are CashAddr strings: a network prefix such as `ecash:`,
/// then a base32 payload carrying a version byte and a 20-byte hash. The
/// version byte distinguishes P2SH addresses from P2PKH addresses, so the
/// encoding determines the lock script shape.
///
/// <https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/doc/standards/cashaddr.md>
#[derive(
    Clone, Eq, PartialEq, Hash, serde_with::SerializeDisplay, serde_with::DeserializeFromStr,
)]
pub enum Address {
    /// P2SH (Pay to Script Hash) addresses
    PayToScriptHash {
        /// Production, test, or regtest network
        network: Network,
        /// 20 bytes specifying a script hash.
        script_hash: [u8; 20],
    },

    /// P2PKH (Pay to Public Key Hash) addresses
    PayToPublicKeyHash {
        /// Production, test, or regtest network
        network: Network,
        /// 20 bytes specifying a public key hash, which is a RIPEMD-160
        /// hash of a SHA-256 hash of a compressed ECDSA key encoding.
        pub_key_hash: [u8; 20],
    },
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug_struct = f.debug_struct("TransparentAddress");

        match self {
            Address::PayToScriptHash {
                network,
                script_hash,
            } => debug_struct
                .field("network", network)
                .field("script_hash", &hex::encode(script_hash))
                .finish(),
            Address::PayToPublicKeyHash {
                network,
                pub_key_hash,
            } => debug_struct
                .field("network", network)
                .field("pub_key_hash", &hex::encode(pub_key_hash))
                .finish(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut payload = Vec::with_capacity(21);
        payload.push(self.version_byte());
        payload.extend_from_slice(&self.hash_bytes());

        f.write_str(&cashaddr::encode(
            self.network().cashaddr_prefix(),
            &payload,
        ))
    }
}

impl std::str::FromStr for Address {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, payload) = cashaddr::decode(s)?;

        let network = Network::iter()
            .find(|network| network.cashaddr_prefix() == prefix)
            .ok_or(SerializationError::Parse("unknown cashaddr prefix"))?;

        // A version byte and a 160-bit hash. Larger hash sizes are valid
        // CashAddr payloads, but eCash only uses 160-bit hashes.
        if payload.len() != 21 {
            return Err(SerializationError::Parse(
                "unexpected cashaddr payload length",
            ));
        }
        let mut hash_bytes = [0u8; 20];
        hash_bytes.copy_from_slice(&payload[1..]);

        match payload[0] {
            P2PKH_VERSION_BYTE => Ok(Address::PayToPublicKeyHash {
                network,
                pub_key_hash: hash_bytes,
            }),
            P2SH_VERSION_BYTE => Ok(Address::PayToScriptHash {
                network,
                script_hash: hash_bytes,
            }),
            _ => Err(SerializationError::Parse("bad cashaddr version byte")),
        }
    }
}

impl Address {
    /// Create an address for the given public key hash and network.
    pub fn from_pub_key_hash(network: Network, pub_key_hash: [u8; 20]) -> Self {
        Self::PayToPublicKeyHash {
            network,
            pub_key_hash,
        }
    }

    /// Create an address for the given script hash and network.
    pub fn from_script_hash(network: Network, script_hash: [u8; 20]) -> Self {
        Self::PayToScriptHash {
            network,
            script_hash,
        }
    }

    /// Returns the network for this address.
    pub fn network(&self) -> Network {
        match self {
            Address::PayToScriptHash { network, .. } => *network,
            Address::PayToPublicKeyHash { network, .. } => *network,
        }
    }

    /// Returns `true` if the address is `PayToScriptHash`, and `false` if it is `PayToPublicKeyHash`.
    pub fn is_script_hash(&self) -> bool {
        matches!(self, Address::PayToScriptHash { .. })
    }

    /// Returns the hash bytes for this address, regardless of the address type.
    pub fn hash_bytes(&self) -> [u8; 20] {
        match *self {
            Address::PayToScriptHash { script_hash, .. } => script_hash,
            Address::PayToPublicKeyHash { pub_key_hash, .. } => pub_key_hash,
        }
    }

    /// Returns the CashAddr version byte for this address type.
    fn version_byte(&self) -> u8 {
        match self {
            Address::PayToScriptHash { .. } => P2SH_VERSION_BYTE,
            Address::PayToPublicKeyHash { .. } => P2PKH_VERSION_BYTE,
        }
    }

    /// Turns the address into the `scriptPubKey` script that can be used in a coinbase output.
    pub fn script(&self) -> Script {
        let mut script_bytes = Vec::new();

        match self {
            // https://developer.bitcoin.org/devguide/transactions.html#pay-to-script-hash-p2sh
            Address::PayToScriptHash { .. } => {
                script_bytes.push(OpCode::Hash160 as u8);
                script_bytes.push(OpCode::Push20Bytes as u8);
                script_bytes.extend(self.hash_bytes());
                script_bytes.push(OpCode::Equal as u8);
            }
            // https://developer.bitcoin.org/devguide/transactions.html#pay-to-public-key-hash-p2pkh
            Address::PayToPublicKeyHash { .. } => {
                script_bytes.push(OpCode::Dup as u8);
                script_bytes.push(OpCode::Hash160 as u8);
                script_bytes.push(OpCode::Push20Bytes as u8);
                script_bytes.extend(self.hash_bytes());
                script_bytes.push(OpCode::EqualVerify as u8);
                script_bytes.push(OpCode::CheckSig as u8);
            }
        };

        Script::new(&script_bytes)
    }

    /// Returns the address for `script` on `network`, if `script` is a
    /// standard pay-to-script-hash or pay-to-public-key-hash script.
    pub fn from_script(script: &Script, network: Network) -> Option<Address> {
        let bytes = script.as_raw_bytes();

        match bytes.len() {
            23 if bytes[0] == OpCode::Hash160 as u8
                && bytes[1] == OpCode::Push20Bytes as u8
                && bytes[22] == OpCode::Equal as u8 =>
            {
                let mut script_hash = [0u8; 20];
                script_hash.copy_from_slice(&bytes[2..22]);
                Some(Address::PayToScriptHash {
                    network,
                    script_hash,
                })
            }
            25 if bytes[0] == OpCode::Dup as u8
                && bytes[1] == OpCode::Hash160 as u8
                && bytes[2] == OpCode::Push20Bytes as u8
                && bytes[23] == OpCode::EqualVerify as u8
                && bytes[24] == OpCode::CheckSig as u8 =>
            {
                let mut pub_key_hash = [0u8; 20];
                pub_key_hash.copy_from_slice(&bytes[3..23]);
                Some(Address::PayToPublicKeyHash {
                    network,
                    pub_key_hash,
                })
            }
            _ => None,
        }
    }
}


#[cfg(test)]
proptest! {

    #[test]
    fn transparent_address_roundtrip(addr in any::<Address>()) {
        let _init_guard = okapi_test::init();

        let string = addr.to_string();
        let addr2: Address = string.parse().expect("printed address should parse");

        prop_assert_eq![addr, addr2];
    }

    #[test]
    fn transparent_address_display_matches_script(addr in any::<Address>()) {
        let _init_guard = okapi_test::init();

        let script = addr.script();

        prop_assert_eq![Address::from_script(&script, addr.network()), Some(addr)];
    }
}
