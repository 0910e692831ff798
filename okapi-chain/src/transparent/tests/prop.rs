//! Property tests for transparent inputs and outputs.

use okapi_test::prelude::*;

use crate::{
    block::{self, MAX_BLOCK_BYTES},
    serialization::{EcashDeserialize, EcashSerialize, TrustedPreallocate},
    transparent::{
        serialize::{MIN_TRANSPARENT_INPUT_SIZE, MIN_TRANSPARENT_OUTPUT_SIZE},
        Input, OutPoint, Output, Script,
    },
};

#[test]
fn coinbase_has_height() -> Result<()> {
    let _init_guard = okapi_test::init();

    let strategy =
        any::<block::Height>().prop_flat_map(|height| Input::arbitrary_with(Some(height)));

    proptest!(|(input in strategy)| {
        let is_coinbase = matches!(input, Input::Coinbase { .. });
        prop_assert!(is_coinbase);
    });

    Ok(())
}

#[test]
fn input_coinbase_vecs_only_have_coinbase_input() -> Result<()> {
    let _init_guard = okapi_test::init();

    let strategy = any::<block::Height>()
        .prop_flat_map(|height| Input::vec_strategy(Some(height), 100));

    proptest!(|(inputs in strategy)| {
        prop_assert_eq!(inputs.len(), 1);
        let is_coinbase = matches!(inputs[0], Input::Coinbase { .. });
        prop_assert!(is_coinbase);
    });

    Ok(())
}

#[test]
fn input_roundtrip() -> Result<()> {
    let _init_guard = okapi_test::init();

    let strategy = prop_oneof![
        any::<block::Height>().prop_flat_map(|height| Input::arbitrary_with(Some(height))),
        Input::arbitrary_with(None),
    ];

    proptest!(|(input in strategy)| {
        let bytes = input
            .ecash_serialize_to_vec()
            .expect("input should serialize");
        let parsed = Input::ecash_deserialize(&bytes[..])
            .expect("serialized input should deserialize");
        prop_assert_eq!(input, parsed);
    });

    Ok(())
}

proptest! {
    #[test]
    fn output_roundtrip(output in any::<Output>()) {
        let _init_guard = okapi_test::init();

        let bytes = output
            .ecash_serialize_to_vec()
            .expect("output should serialize");
        let parsed = Output::ecash_deserialize(&bytes[..])
            .expect("serialized output should deserialize");
        prop_assert_eq!(output, parsed);
    }

    /// Confirm that every input takes at least MIN_TRANSPARENT_INPUT_SIZE
    /// bytes when serialized. This verifies that our calculated
    /// [`TrustedPreallocate::max_allocation`] is indeed an upper bound.
    #[test]
    fn input_size_is_small_enough(input in Input::arbitrary_with(None)) {
        let _init_guard = okapi_test::init();

        let serialized = input
            .ecash_serialize_to_vec()
            .expect("input should serialize");
        prop_assert!(serialized.len() as u64 >= MIN_TRANSPARENT_INPUT_SIZE);
    }

    /// Confirm that every output takes at least MIN_TRANSPARENT_OUTPUT_SIZE
    /// bytes when serialized.
    #[test]
    fn output_size_is_small_enough(output in any::<Output>()) {
        let _init_guard = okapi_test::init();

        let serialized = output
            .ecash_serialize_to_vec()
            .expect("output should serialize");
        prop_assert!(serialized.len() as u64 >= MIN_TRANSPARENT_OUTPUT_SIZE);
    }
}

#[test]
fn input_max_allocation_is_big_enough() -> Result<()> {
    let _init_guard = okapi_test::init();

    // The smallest possible serialized input: an empty unlock script.
    let input = Input::PrevOut {
        outpoint: OutPoint {
            hash: crate::transaction::Hash([0; 32]),
            index: 0,
        },
        unlock_script: Script::new(&[]),
        sequence: 0,
    };
    let serialized = input.ecash_serialize_to_vec()?;
    assert_eq!(serialized.len() as u64, MIN_TRANSPARENT_INPUT_SIZE);

    // One item below the limit fits in a block, one item above does not.
    let max_allocation = Input::max_allocation();
    assert!(max_allocation * MIN_TRANSPARENT_INPUT_SIZE <= MAX_BLOCK_BYTES);
    assert!((max_allocation + 1) * MIN_TRANSPARENT_INPUT_SIZE > MAX_BLOCK_BYTES);

    Ok(())
}

#[test]
fn output_max_allocation_is_big_enough() -> Result<()> {
    let _init_guard = okapi_test::init();

    // The smallest possible serialized output: an empty lock script.
    let output = Output {
        value: crate::amount::Amount::try_from(0).expect("zero is a valid amount"),
        lock_script: Script::new(&[]),
    };
    let serialized = output.ecash_serialize_to_vec()?;
    assert_eq!(serialized.len() as u64, MIN_TRANSPARENT_OUTPUT_SIZE);

    let max_allocation = Output::max_allocation();
    assert!(max_allocation * MIN_TRANSPARENT_OUTPUT_SIZE <= MAX_BLOCK_BYTES);
    assert!((max_allocation + 1) * MIN_TRANSPARENT_OUTPUT_SIZE > MAX_BLOCK_BYTES);

    Ok(())
}
