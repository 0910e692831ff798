use proptest::prelude::*;

use super::difficulty::CompactDifficulty;

impl Arbitrary for CompactDifficulty {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<u32>().prop_map(CompactDifficulty).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
