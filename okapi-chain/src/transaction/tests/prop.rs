//! Property tests for transactions.

use okapi_test::prelude::*;

use crate::{
    block::{self, MAX_BLOCK_BYTES},
    serialization::{EcashDeserialize, EcashSerialize, TrustedPreallocate},
    transaction::{serialize::MIN_TRANSPARENT_TX_SIZE, LockTime, Transaction},
};

#[test]
fn transaction_roundtrip() -> Result<()> {
    let _init_guard = okapi_test::init();

    let strategy = prop_oneof![
        any::<block::Height>()
            .prop_flat_map(|height| Transaction::arbitrary_with(Some(height))),
        Transaction::arbitrary_with(None),
    ];

    proptest!(|(transaction in strategy)| {
        let bytes = transaction
            .ecash_serialize_to_vec()
            .expect("transaction should serialize");
        let parsed = Transaction::ecash_deserialize(&bytes[..])
            .expect("serialized transaction should deserialize");
        prop_assert_eq!(transaction, parsed);
    });

    Ok(())
}

proptest! {
    #[test]
    fn transaction_hash_is_stable(transaction in Transaction::arbitrary_with(None)) {
        let _init_guard = okapi_test::init();

        let bytes = transaction
            .ecash_serialize_to_vec()
            .expect("transaction should serialize");
        let parsed = Transaction::ecash_deserialize(&bytes[..])
            .expect("serialized transaction should deserialize");

        prop_assert_eq!(transaction.hash(), parsed.hash());
    }

    #[test]
    fn lock_time_roundtrip(lock_time in any::<LockTime>()) {
        let _init_guard = okapi_test::init();

        let bytes = lock_time
            .ecash_serialize_to_vec()
            .expect("lock time should serialize");
        let parsed = LockTime::ecash_deserialize(&bytes[..])
            .expect("serialized lock time should deserialize");

        prop_assert_eq!(lock_time, parsed);
    }

    /// Confirm that every transaction takes at least MIN_TRANSPARENT_TX_SIZE
    /// bytes when serialized. This verifies that our calculated
    /// [`TrustedPreallocate::max_allocation`] is indeed an upper bound.
    #[test]
    fn transaction_size_is_small_enough(transaction in Transaction::arbitrary_with(None)) {
        let _init_guard = okapi_test::init();

        let serialized = transaction
            .ecash_serialize_to_vec()
            .expect("transaction should serialize");
        prop_assert!(serialized.len() as u64 >= MIN_TRANSPARENT_TX_SIZE);
    }
}

#[test]
fn transaction_max_allocation_is_big_enough() {
    let _init_guard = okapi_test::init();

    let max_allocation = Transaction::max_allocation();
    assert!(max_allocation * MIN_TRANSPARENT_TX_SIZE <= MAX_BLOCK_BYTES);
    assert!((max_allocation + 1) * MIN_TRANSPARENT_TX_SIZE > MAX_BLOCK_BYTES);
}
