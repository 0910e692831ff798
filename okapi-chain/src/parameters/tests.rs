//! Consensus parameter tests.

use std::collections::HashSet;

use super::network_upgrade::{
    MAINNET_ACTIVATION_HEIGHTS, REGTEST_ACTIVATION_HEIGHTS, TESTNET_ACTIVATION_HEIGHTS,
};
use super::*;

use crate::block;

use Network::*;
use NetworkUpgrade::*;

/// Check that the activation height maps are bijective.
#[test]
fn activation_bijective() {
    let _init_guard = okapi_test::init();

    for (network, heights) in [
        (Mainnet, MAINNET_ACTIVATION_HEIGHTS),
        (Testnet, TESTNET_ACTIVATION_HEIGHTS),
        (Regtest, REGTEST_ACTIVATION_HEIGHTS),
    ] {
        let activation_list = NetworkUpgrade::activation_list(network);
        let upgrades: HashSet<&NetworkUpgrade> = activation_list.values().collect();

        assert_eq!(
            activation_list.len(),
            heights.len(),
            "{network} activation heights must be unique"
        );
        assert_eq!(
            upgrades.len(),
            heights.len(),
            "{network} network upgrades must be unique"
        );
    }
}

#[test]
fn activation_extremes_mainnet() {
    let _init_guard = okapi_test::init();
    activation_extremes(Mainnet)
}

#[test]
fn activation_extremes_testnet() {
    let _init_guard = okapi_test::init();
    activation_extremes(Testnet)
}

#[test]
fn activation_extremes_regtest() {
    let _init_guard = okapi_test::init();
    activation_extremes(Regtest)
}

/// Test the activation lookup functions for `network` at the extremes of the
/// chain.
fn activation_extremes(network: Network) {
    // The genesis upgrade applies to the genesis block, and only to the
    // genesis block.
    assert_eq!(
        NetworkUpgrade::activation_list(network).get(&block::Height(0)),
        Some(&Genesis)
    );
    assert_eq!(Genesis.activation_height(network), Some(block::Height(0)));
    assert!(NetworkUpgrade::is_activation_height(
        network,
        block::Height(0)
    ));

    assert_eq!(NetworkUpgrade::current(network, block::Height(0)), Genesis);
    assert_ne!(NetworkUpgrade::next(network, block::Height(0)), None);

    // The most recent upgrade applies to all following blocks.
    assert_eq!(
        NetworkUpgrade::current(network, block::Height::MAX),
        Axion
    );
    assert_eq!(NetworkUpgrade::next(network, block::Height::MAX), None);
    assert!(!NetworkUpgrade::is_activation_height(
        network,
        block::Height::MAX
    ));
}

#[test]
fn activation_consistent_mainnet() {
    let _init_guard = okapi_test::init();
    activation_consistent(Mainnet)
}

#[test]
fn activation_consistent_testnet() {
    let _init_guard = okapi_test::init();
    activation_consistent(Testnet)
}

#[test]
fn activation_consistent_regtest() {
    let _init_guard = okapi_test::init();
    activation_consistent(Regtest)
}

/// Check that the `activation_height`, `is_activation_height`, `current`, and
/// `next` functions are consistent for `network`.
fn activation_consistent(network: Network) {
    let activation_list = NetworkUpgrade::activation_list(network);
    let network_upgrades: HashSet<&NetworkUpgrade> = activation_list.values().collect();

    for &network_upgrade in network_upgrades {
        let height = network_upgrade
            .activation_height(network)
            .expect("listed upgrades must have an activation height");

        assert!(NetworkUpgrade::is_activation_height(network, height));
        assert_eq!(NetworkUpgrade::current(network, height), network_upgrade);

        // Network upgrades don't repeat.
        assert_ne!(
            NetworkUpgrade::next(network, height),
            Some(network_upgrade)
        );
        assert_ne!(
            NetworkUpgrade::next(network, block::Height(height.0 + 1)),
            Some(network_upgrade)
        );
        assert_ne!(
            NetworkUpgrade::next(network, block::Height::MAX),
            Some(network_upgrade)
        );
    }
}

/// Check the mainnet activation schedule around known upgrade boundaries.
#[test]
fn activation_schedule_mainnet() {
    let _init_guard = okapi_test::init();

    assert_eq!(
        NetworkUpgrade::current(Mainnet, block::Height(478_558)),
        BeforeUahf
    );
    assert_eq!(
        NetworkUpgrade::current(Mainnet, block::Height(478_559)),
        Uahf
    );
    assert_eq!(
        NetworkUpgrade::current(Mainnet, block::Height(661_647)),
        Phonon
    );
    assert_eq!(
        NetworkUpgrade::current(Mainnet, block::Height(661_648)),
        Axion
    );
    assert_eq!(
        NetworkUpgrade::current(Mainnet, block::Height(800_000)),
        Axion
    );

    assert_eq!(Axion.activation_height(Mainnet), Some(block::Height(661_648)));
    assert!(!NetworkUpgrade::is_activation_height(
        Mainnet,
        block::Height(661_649)
    ));
}

#[test]
fn activation_schedule_testnet() {
    let _init_guard = okapi_test::init();

    assert_eq!(
        NetworkUpgrade::current(Testnet, block::Height(1_300_000)),
        MagneticAnomaly
    );
    assert_eq!(
        Axion.activation_height(Testnet),
        Some(block::Height(1_421_482))
    );

    // Testnet Monolith and GreatWall activated by median-time-past, so they
    // have no recorded activation height.
    assert_eq!(Monolith.activation_height(Testnet), None);
    assert_eq!(GreatWall.activation_height(Testnet), None);
}

#[test]
fn activation_schedule_regtest() {
    let _init_guard = okapi_test::init();

    // Regtest skips the pre-upgrade protocol, the first upgrade activates at
    // height 1.
    assert_eq!(BeforeUahf.activation_height(Regtest), None);
    assert_eq!(NetworkUpgrade::current(Regtest, block::Height(1)), Uahf);

    assert_eq!(Axion.activation_height(Regtest), Some(block::Height(8)));
    assert_eq!(
        NetworkUpgrade::current(Regtest, block::Height(100)),
        Axion
    );
}

#[test]
fn network_upgrade_display() {
    let _init_guard = okapi_test::init();

    assert_eq!(Axion.to_string(), "Axion");
    assert_eq!(MagneticAnomaly.to_string(), "MagneticAnomaly");
}

#[test]
fn network_magics() {
    let _init_guard = okapi_test::init();

    assert_eq!(Mainnet.magic(), Magic([0xe3, 0xe1, 0xf3, 0xe8]));
    assert_eq!(Testnet.magic(), Magic([0xf4, 0xe5, 0xf3, 0xf4]));
    assert_eq!(Regtest.magic(), Magic([0xda, 0xb5, 0xbf, 0xfa]));

    assert_eq!(format!("{:?}", magics::MAINNET), r#"Magic("e3e1f3e8")"#);
}

#[test]
fn network_identity() {
    let _init_guard = okapi_test::init();

    assert_eq!(Mainnet.default_port(), 8333);
    assert_eq!(Testnet.default_port(), 18333);
    assert_eq!(Regtest.default_port(), 18444);

    assert_eq!(Mainnet.cashaddr_prefix(), "ecash");
    assert_eq!(Testnet.cashaddr_prefix(), "ectest");
    assert_eq!(Regtest.cashaddr_prefix(), "ecregtest");

    assert_eq!(Mainnet.bip70_network_name(), "main");
    assert_eq!(Testnet.bip70_network_name(), "test");
    assert_eq!(Regtest.bip70_network_name(), "regtest");

    assert!(!Mainnet.is_a_test_network());
    assert!(Testnet.is_a_test_network());
    assert!(Regtest.is_a_test_network());
}

#[test]
fn network_genesis_hashes_are_distinct() {
    let _init_guard = okapi_test::init();

    let hashes: HashSet<block::Hash> = Network::iter()
        .map(|network| network.genesis_hash())
        .collect();
    assert_eq!(hashes.len(), 3);
}

#[test]
fn network_name_round_trip() {
    let _init_guard = okapi_test::init();

    for network in Network::iter() {
        let parsed: Network = network
            .to_string()
            .parse()
            .expect("displayed network names parse");
        assert_eq!(parsed, network);

        let parsed: Network = network
            .lowercase_name()
            .parse()
            .expect("lowercase network names parse");
        assert_eq!(parsed, network);
    }

    let error = "avalanche".parse::<Network>().unwrap_err();
    assert_eq!(error.to_string(), "Invalid network: avalanche");
}
