//! Property tests for amounts.

use proptest::prelude::*;

use crate::{
    amount::*,
    serialization::{EcashDeserializeInto, EcashSerialize},
};

proptest! {
    #[test]
    fn amount_wire_round_trip(amount in any::<Amount<NonNegative>>()) {
        let _init_guard = okapi_test::init();

        let bytes = amount
            .ecash_serialize_to_vec()
            .expect("serializing to a Vec never fails");
        let parsed: Amount<NonNegative> = bytes
            .as_slice()
            .ecash_deserialize_into()
            .expect("serialized amounts deserialize");

        prop_assert_eq!(parsed, amount);
    }

    /// Multiplying then dividing gives the floor: multiplying the quotient
    /// back never exceeds the product, and one more unit always does.
    #[test]
    fn percentage_of_amount_rounds_down(sats in 0i64..=(MAX_MONEY / 100)) {
        let _init_guard = okapi_test::init();

        let total: Amount<NonNegative> = sats.try_into().expect("value is in range");
        let required = ((total * 8).expect("product is within MAX_MONEY") / 100)
            .expect("divisor is not zero");
        let required = required.satoshis();

        prop_assert!(required * 100 <= sats * 8);
        prop_assert!((required + 1) * 100 > sats * 8);
    }
}
