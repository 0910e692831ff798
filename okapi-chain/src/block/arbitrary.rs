use proptest::{arbitrary::any, prelude::*};

use crate::{
    serialization::arbitrary::datetime_u32, transaction::Transaction,
    work::difficulty::CompactDifficulty,
};

use super::*;

impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Header {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (
            // version is interpreted as i32 on the wire, so we are limited to i32::MAX here
            (4u32..(i32::MAX as u32)),
            any::<Hash>(),
            any::<merkle::Root>(),
            // time is serialized as u32 on the wire, but rust timestamps are i64
            datetime_u32(),
            any::<CompactDifficulty>(),
            any::<u32>(),
        )
            .prop_map(
                |(version, previous_block_hash, merkle_root, time, difficulty_threshold, nonce)| {
                    Header {
                        version,
                        previous_block_hash,
                        merkle_root,
                        time,
                        difficulty_threshold,
                        nonce,
                    }
                },
            )
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Block {
    type Parameters = Option<Height>;

    /// Generate a block with a coinbase transaction at the given height, or
    /// at an arbitrary height if `coinbase_height` is `None`.
    fn arbitrary_with(coinbase_height: Self::Parameters) -> Self::Strategy {
        let height = match coinbase_height {
            Some(height) => Just(height).boxed(),
            None => any::<Height>().boxed(),
        };

        (any::<Header>(), height)
            .prop_flat_map(|(header, height)| {
                (Just(header), Transaction::vec_strategy(height, 2))
            })
            .prop_map(|(header, transactions)| Block {
                header,
                transactions,
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
