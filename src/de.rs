use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess};

use crate::binary::BinaryHeap;
use crate::order::Kind;

/// Accepts any sequence and heapifies it, so input order doesn't matter
impl<'de, T, K> Deserialize<'de> for BinaryHeap<T, K>
where
    T: Ord + Deserialize<'de>,
    K: Kind,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T, K>(PhantomData<(&'de (), T, K)>);

        impl<'de, T, K> de::Visitor<'de> for ValueVisitor<'de, T, K>
        where
            T: Ord + Deserialize<'de>,
            K: Kind,
        {
            type Value = BinaryHeap<T, K>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // size_hint comes from the input; cap it
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));

                while let Some(value) = seq.next_element()? {
                    values.push(value);
                }

                Ok(BinaryHeap::from_vec(values))
            }
        }

        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
