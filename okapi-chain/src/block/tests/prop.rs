//! Property tests for blocks.

use std::{env, io::ErrorKind};

use proptest::test_runner::Config;

use okapi_test::prelude::*;

use crate::{
    serialization::{EcashDeserialize, EcashDeserializeInto, EcashSerialize, SerializationError},
    transaction,
};

use super::super::{serialize::MAX_BLOCK_BYTES, *};

proptest! {
    #[test]
    fn block_hash_roundtrip(hash in any::<Hash>()) {
        let _init_guard = okapi_test::init();

        let bytes = hash.ecash_serialize_to_vec().expect("hash should serialize");
        let parsed = Hash::ecash_deserialize(&bytes[..]).expect("serialized hash should deserialize");

        prop_assert_eq!(hash, parsed);
    }

    #[test]
    fn block_header_roundtrip(header in any::<Header>()) {
        let _init_guard = okapi_test::init();

        let bytes = header.ecash_serialize_to_vec().expect("header should serialize");
        prop_assert_eq!(bytes.len(), 80);

        let parsed = Header::ecash_deserialize(&bytes[..])
            .expect("serialized header should deserialize");
        prop_assert_eq!(header, parsed);
    }

    /// Duplicating the last transaction hash of an odd-length list must not
    /// change the merkle root (CVE-2012-2459).
    #[test]
    fn merkle_root_collides_on_duplicate_last_hash(
        hashes in any::<[transaction::Hash; 3]>(),
    ) {
        let _init_guard = okapi_test::init();

        let root: merkle::Root = hashes.iter().copied().collect();
        let duplicated: merkle::Root = hashes
            .iter()
            .copied()
            .chain(std::iter::once(hashes[2]))
            .collect();

        prop_assert_eq!(root, duplicated);
    }
}

proptest! {
    // The block roundtrip test can be really slow, so we use fewer cases by
    // default. Set the PROPTEST_CASES env var to override this default.
    #![proptest_config(Config::with_cases(env::var("PROPTEST_CASES")
                                          .ok()
                                          .and_then(|v| v.parse().ok())
                                          .unwrap_or(16)))]

    #[test]
    fn block_roundtrip(block in any::<Block>()) {
        let _init_guard = okapi_test::init();

        let bytes = block.ecash_serialize_to_vec().expect("block should serialize");
        let bytes = &mut bytes.as_slice();

        // Check the block size limit
        if bytes.len() <= MAX_BLOCK_BYTES as _ {
            let parsed = bytes.ecash_deserialize_into().expect("serialized block should deserialize");
            prop_assert_eq!(block, parsed);
        } else {
            let serialization_err = bytes.ecash_deserialize_into::<Block>()
                .expect_err("blocks larger than the maximum size should fail");
            match serialization_err {
                SerializationError::Io(io_err) => {
                    prop_assert_eq!(io_err.kind(), ErrorKind::UnexpectedEof);
                }
                _ => {
                    prop_assert!(false,
                                 "blocks larger than the maximum size should fail with an io::Error");
                }
            }
        }
    }

    /// Generated blocks have exactly one coinbase transaction, in first
    /// position.
    #[test]
    fn arbitrary_blocks_have_coinbase_first(block in any::<Block>()) {
        let _init_guard = okapi_test::init();

        prop_assert!(block.coinbase_height().is_some());
        prop_assert!(block.transactions[0].has_valid_coinbase_transaction_inputs());
        for transaction in &block.transactions[1..] {
            prop_assert!(!transaction.has_any_coinbase_inputs());
        }
    }
}
