//! Randomised test data generation for transactions.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::{collection::vec, prelude::*};

use crate::{block, transparent};

use super::{LockTime, Transaction};

impl Transaction {
    /// Returns a strategy for a `Vec` of transactions, where the first
    /// transaction is always the only coinbase transaction.
    pub fn vec_strategy(
        coinbase_height: block::Height,
        max_size: usize,
    ) -> BoxedStrategy<Vec<Arc<Self>>> {
        let coinbase = Transaction::arbitrary_with(Some(coinbase_height)).prop_map(Arc::new);
        let remainder = vec(Transaction::arbitrary_with(None).prop_map(Arc::new), 0..=max_size);

        (coinbase, remainder)
            .prop_map(|(first, mut remainder)| {
                remainder.insert(0, first);
                remainder
            })
            .boxed()
    }
}

impl Arbitrary for Transaction {
    type Parameters = Option<block::Height>;

    /// Generate a transaction, as a coinbase transaction for the given
    /// height, or as a transaction spending previous outputs if
    /// `coinbase_height` is `None`.
    fn arbitrary_with(coinbase_height: Self::Parameters) -> Self::Strategy {
        (
            1..=2u32,
            transparent::Input::vec_strategy(coinbase_height, 10),
            vec(any::<transparent::Output>(), 0..10),
            any::<LockTime>(),
        )
            .prop_map(|(version, inputs, outputs, lock_time)| Transaction {
                version,
                inputs,
                outputs,
                lock_time,
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for LockTime {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        prop_oneof![
            (block::Height::MIN.0..=LockTime::MAX_HEIGHT.0)
                .prop_map(|n| LockTime::Height(block::Height(n))),
            (LockTime::MIN_TIMESTAMP..=LockTime::MAX_TIMESTAMP).prop_map(|n| {
                LockTime::Time(
                    Utc.timestamp_opt(n, 0)
                        .single()
                        .expect("in-range number of seconds and valid nanosecond"),
                )
            })
        ]
        .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
