//! `Serialize`/`Deserialize` for [`Seq<T>`], available with the `serde`
//! feature.
//!
//! A `Seq` serializes exactly like a slice of its elements.

use crate::Seq;

use core::cmp;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

impl<T: Serialize> Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct SeqVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SeqVisitor<T> {
    type Value = Seq<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Seq<T>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // The hint is untrusted input; cap the pre-allocation.
        let hint = cmp::min(access.size_hint().unwrap_or(0), 4096);
        let mut seq = Seq::with_capacity(hint);
        while let Some(value) = access.next_element()? {
            seq.push(value);
        }
        Ok(seq)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Seq<T> {
    fn deserialize<D>(deserializer: D) -> Result<Seq<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}
