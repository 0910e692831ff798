use proptest::{collection::vec, prelude::*};

use crate::{block, parameters::Network};

use super::{serialize::GENESIS_COINBASE_DATA, Address, CoinbaseData, Input, OutPoint, Script};

impl Input {
    /// Construct a strategy for creating valid-ish vecs of Inputs.
    ///
    /// If `coinbase_height` is `Some`, the vec contains a single coinbase
    /// input for that height. Otherwise it contains `1..=max_size` previous
    /// output inputs.
    pub fn vec_strategy(
        coinbase_height: Option<block::Height>,
        max_size: usize,
    ) -> BoxedStrategy<Vec<Self>> {
        if coinbase_height.is_some() {
            Self::arbitrary_with(coinbase_height)
                .prop_map(|input| vec![input])
                .boxed()
        } else {
            vec(Self::arbitrary_with(None), 1..=max_size).boxed()
        }
    }
}

impl Arbitrary for Input {
    type Parameters = Option<block::Height>;

    fn arbitrary_with(height: Self::Parameters) -> Self::Strategy {
        if let Some(height) = height {
            (vec(any::<u8>(), 0..95), any::<u32>())
                .prop_map(move |(data, sequence)| Input::Coinbase {
                    height,
                    data: if height == block::Height(0) {
                        CoinbaseData(GENESIS_COINBASE_DATA.to_vec())
                    } else {
                        CoinbaseData(data)
                    },
                    sequence,
                })
                .boxed()
        } else {
            (any::<OutPoint>(), any::<Script>(), any::<u32>())
                .prop_map(|(outpoint, unlock_script, sequence)| Input::PrevOut {
                    outpoint,
                    unlock_script,
                    sequence,
                })
                .boxed()
        }
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Address {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<Network>(), any::<bool>(), any::<[u8; 20]>())
            .prop_map(|(network, is_p2pkh, hash_bytes)| {
                if is_p2pkh {
                    Address::from_pub_key_hash(network, hash_bytes)
                } else {
                    Address::from_script_hash(network, hash_bytes)
                }
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
