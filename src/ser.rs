use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::binary::BinaryHeap;

/// Serializes the backing elements in tree order
impl<T, K> Serialize for BinaryHeap<T, K>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.as_slice().len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
