//! Network upgrade consensus parameters for eCash.

use NetworkUpgrade::*;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound::*;

use crate::block;
use crate::parameters::{Network, Network::*};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// An eCash network upgrade.
///
/// Network upgrades change the eCash network protocol or consensus rules in
/// incompatible ways.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum NetworkUpgrade {
    /// The eCash protocol for a Genesis block.
    ///
    /// eCash genesis blocks use the original Bitcoin protocol.
    Genesis,

    /// The Bitcoin protocol before the Uahf upgrade.
    BeforeUahf,

    /// The eCash protocol after the August 2017 upgrade, which split the
    /// chain away from Bitcoin and raised the maximum block size to 8 MB.
    Uahf,

    /// The eCash protocol after the November 2017 upgrade, which replaced
    /// the difficulty adjustment algorithm.
    Daa,

    /// The eCash protocol after the May 2018 upgrade, which raised the
    /// maximum block size to 32 MB.
    Monolith,

    /// The eCash protocol after the November 2018 upgrade, which introduced
    /// canonical transaction ordering and push-only coinbase scripts.
    MagneticAnomaly,

    /// The eCash protocol after the May 2019 upgrade, which introduced
    /// Schnorr signatures.
    GreatWall,

    /// The eCash protocol after the November 2019 upgrade, which introduced
    /// Schnorr multisig and minimal push rules.
    Graviton,

    /// The eCash protocol after the May 2020 upgrade, which introduced
    /// signature operation counting.
    Phonon,

    /// The eCash protocol after the November 2020 upgrade, which split the
    /// chain away from Bitcoin Cash and introduced the miner fund.
    Axion,
}

/// Mainnet network upgrade activation heights.
///
/// This is actually a bijective map, but it is const, so we use a vector, and
/// do the uniqueness check in the unit tests.
///
/// # Correctness
///
/// Don't use this directly; use [`NetworkUpgrade::activation_list`].
pub(super) const MAINNET_ACTIVATION_HEIGHTS: &[(block::Height, NetworkUpgrade)] = &[
    (block::Height(0), Genesis),
    (block::Height(1), BeforeUahf),
    (block::Height(478_559), Uahf),
    (block::Height(504_032), Daa),
    (block::Height(530_359), Monolith),
    (block::Height(556_767), MagneticAnomaly),
    (block::Height(582_680), GreatWall),
    (block::Height(609_136), Graviton),
    (block::Height(635_259), Phonon),
    (block::Height(661_648), Axion),
];

/// Testnet network upgrade activation heights.
///
/// This is actually a bijective map, but it is const, so we use a vector, and
/// do the uniqueness check in the unit tests.
///
/// # Correctness
///
/// Don't use this directly; use [`NetworkUpgrade::activation_list`].
pub(super) const TESTNET_ACTIVATION_HEIGHTS: &[(block::Height, NetworkUpgrade)] = &[
    (block::Height(0), Genesis),
    (block::Height(1), BeforeUahf),
    (block::Height(1_155_876), Uahf),
    (block::Height(1_188_698), Daa),
    // Monolith and GreatWall activated on testnet by median-time-past, and
    // the chain parameters never recorded their heights.
    (block::Height(1_267_997), MagneticAnomaly),
    (block::Height(1_341_712), Graviton),
    (block::Height(1_378_461), Phonon),
    (block::Height(1_421_482), Axion),
];

/// Regtest network upgrade activation heights.
///
/// Regtest enables every upgrade from the start of the chain, so the
/// activation heights are consecutive low heights after genesis.
///
/// This is actually a bijective map, but it is const, so we use a vector, and
/// do the uniqueness check in the unit tests.
///
/// # Correctness
///
/// Don't use this directly; use [`NetworkUpgrade::activation_list`].
pub(super) const REGTEST_ACTIVATION_HEIGHTS: &[(block::Height, NetworkUpgrade)] = &[
    (block::Height(0), Genesis),
    (block::Height(1), Uahf),
    (block::Height(2), Daa),
    (block::Height(3), Monolith),
    (block::Height(4), MagneticAnomaly),
    (block::Height(5), GreatWall),
    (block::Height(6), Graviton),
    (block::Height(7), Phonon),
    (block::Height(8), Axion),
];

impl NetworkUpgrade {
    /// Returns a map between activation heights and network upgrades for
    /// `network`, in ascending height order.
    ///
    /// The activation height of an upgrade is the height of the first block
    /// to which the upgrade's rules apply.
    ///
    /// If an upgrade's activation height on `network` is not recorded in the
    /// chain parameters, that upgrade does not appear in the list.
    ///
    /// This is actually a bijective map.
    pub fn activation_list(network: Network) -> BTreeMap<block::Height, NetworkUpgrade> {
        match network {
            Mainnet => MAINNET_ACTIVATION_HEIGHTS,
            Testnet => TESTNET_ACTIVATION_HEIGHTS,
            Regtest => REGTEST_ACTIVATION_HEIGHTS,
        }
        .iter()
        .cloned()
        .collect()
    }

    /// Returns the current network upgrade for `network` and `height`.
    pub fn current(network: Network, height: block::Height) -> NetworkUpgrade {
        NetworkUpgrade::activation_list(network)
            .range(..=height)
            .map(|(_, nu)| *nu)
            .next_back()
            .expect("every height has a current network upgrade")
    }

    /// Returns the next network upgrade for `network` and `height`.
    ///
    /// Returns None if there is no recorded upgrade after `height`.
    pub fn next(network: Network, height: block::Height) -> Option<NetworkUpgrade> {
        NetworkUpgrade::activation_list(network)
            .range((Excluded(height), Unbounded))
            .map(|(_, nu)| *nu)
            .next()
    }

    /// Returns the activation height for this network upgrade on `network`.
    ///
    /// Returns None if this upgrade's activation height is not recorded in
    /// the chain parameters for `network`.
    pub fn activation_height(&self, network: Network) -> Option<block::Height> {
        NetworkUpgrade::activation_list(network)
            .iter()
            .filter(|(_, nu)| nu == &self)
            .map(|(height, _)| *height)
            .next()
    }

    /// Returns `true` if `height` is the activation height of any network
    /// upgrade on `network`.
    ///
    /// Use [`NetworkUpgrade::activation_height`] to get the specific network
    /// upgrade.
    pub fn is_activation_height(network: Network, height: block::Height) -> bool {
        NetworkUpgrade::activation_list(network).contains_key(&height)
    }
}

impl fmt::Display for NetworkUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
