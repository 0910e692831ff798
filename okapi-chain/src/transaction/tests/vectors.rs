//! Fixed test vectors for transactions.

use hex::FromHex;

use okapi_test::prelude::*;

use crate::{
    amount::COIN,
    block::Height,
    serialization::{EcashDeserialize, EcashSerialize},
    transaction::{Hash, LockTime, Transaction},
    transparent,
};

/// The coinbase transaction of the shared Bitcoin and eCash genesis block.
const GENESIS_TRANSACTION_HEX: &str = concat!(
    "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d",
    "0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66",
    "207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe55",
    "48271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba",
    "0b8d578a4c702b6bf11d5fac00000000",
);

#[test]
fn genesis_transaction_round_trips() -> Result<()> {
    let _init_guard = okapi_test::init();

    let bytes = <Vec<u8>>::from_hex(GENESIS_TRANSACTION_HEX)?;
    let transaction = Transaction::ecash_deserialize(&bytes[..])?;

    assert_eq!(transaction.version, 1);
    assert_eq!(transaction.lock_time, LockTime::unlocked());
    assert!(transaction.has_valid_coinbase_transaction_inputs());

    assert_eq!(transaction.outputs.len(), 1);
    assert_eq!(i64::from(transaction.outputs[0].value), 50 * COIN);

    assert_eq!(transaction.ecash_serialize_to_vec()?, bytes);

    Ok(())
}

#[test]
fn genesis_transaction_hash() -> Result<()> {
    let _init_guard = okapi_test::init();

    let bytes = <Vec<u8>>::from_hex(GENESIS_TRANSACTION_HEX)?;
    let transaction = Transaction::ecash_deserialize(&bytes[..])?;

    assert_eq!(
        transaction.hash().to_string(),
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
    );

    Ok(())
}

#[test]
fn transaction_hash_from_str() {
    let _init_guard = okapi_test::init();

    let hash: Hash = "3166411bd5343e0b284a108f39a929fbbb62619784f8c6dafe520703b5b446bf"
        .parse()
        .unwrap();
    assert_eq!(
        format!("{hash:?}"),
        r#"transaction::Hash("3166411bd5343e0b284a108f39a929fbbb62619784f8c6dafe520703b5b446bf")"#
    );
}

#[test]
fn coinbase_input_helpers() {
    let _init_guard = okapi_test::init();

    let coinbase_input = transparent::Input::Coinbase {
        height: Height(10),
        data: transparent::CoinbaseData::new(Vec::new()),
        sequence: 0,
    };
    let prev_out_input = transparent::Input::PrevOut {
        outpoint: transparent::OutPoint {
            hash: Hash([0x42; 32]),
            index: 0,
        },
        unlock_script: transparent::Script::new(&[]),
        sequence: 0,
    };

    let coinbase = Transaction {
        version: 2,
        inputs: vec![coinbase_input.clone()],
        outputs: Vec::new(),
        lock_time: LockTime::unlocked(),
    };
    assert!(coinbase.has_valid_coinbase_transaction_inputs());
    assert!(coinbase.has_any_coinbase_inputs());

    let spend = Transaction {
        version: 2,
        inputs: vec![prev_out_input.clone()],
        outputs: Vec::new(),
        lock_time: LockTime::unlocked(),
    };
    assert!(!spend.has_valid_coinbase_transaction_inputs());
    assert!(!spend.has_any_coinbase_inputs());

    // A coinbase input in second position makes the input set invalid, but
    // it must still be detected.
    let hidden = Transaction {
        version: 2,
        inputs: vec![prev_out_input, coinbase_input],
        outputs: Vec::new(),
        lock_time: LockTime::unlocked(),
    };
    assert!(!hidden.has_valid_coinbase_transaction_inputs());
    assert!(hidden.has_any_coinbase_inputs());
}

#[test]
fn lock_time_boundaries_round_trip() -> Result<()> {
    let _init_guard = okapi_test::init();

    // The highest lock time that is a height, and the lowest that is a time.
    let max_height = LockTime::Height(LockTime::MAX_HEIGHT);
    let min_time = LockTime::min_lock_time_timestamp();

    let bytes = max_height.ecash_serialize_to_vec()?;
    assert_eq!(bytes, 499_999_999u32.to_le_bytes());
    assert_eq!(LockTime::ecash_deserialize(&bytes[..])?, max_height);

    let bytes = min_time.ecash_serialize_to_vec()?;
    assert_eq!(bytes, 500_000_000u32.to_le_bytes());
    assert_eq!(LockTime::ecash_deserialize(&bytes[..])?, min_time);
    assert!(min_time.is_time());

    let unlocked = LockTime::unlocked().ecash_serialize_to_vec()?;
    assert_eq!(unlocked, [0; 4]);

    Ok(())
}
