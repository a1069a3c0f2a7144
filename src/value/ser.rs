use std::result;

use serde::Serialize;
use serde_bytes::Bytes;

use super::{List, Tag};

// Serializing to other formats, eg JSON for dumping a tree. The NBT types
// that have no counterpart elsewhere are flattened: byte arrays become serde
// bytes, End becomes unit.
impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Tag::End => serializer.serialize_unit(),
            Tag::Byte(v) => serializer.serialize_u8(*v),
            Tag::Short(v) => serializer.serialize_i16(*v),
            Tag::Int(v) => serializer.serialize_i32(*v),
            Tag::Long(v) => serializer.serialize_i64(*v),
            Tag::Float(v) => serializer.serialize_f32(*v),
            Tag::Double(v) => serializer.serialize_f64(*v),
            Tag::ByteArray(v) => Bytes::new(v).serialize(serializer),
            Tag::String(v) => serializer.serialize_str(v),
            Tag::List(v) => v.serialize(serializer),
            Tag::Compound(v) => v.serialize(serializer),
            Tag::IntArray(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            List::End => serializer.collect_seq(std::iter::empty::<Tag>()),
            List::Byte(v) => v.serialize(serializer),
            List::Short(v) => v.serialize(serializer),
            List::Int(v) => v.serialize(serializer),
            List::Long(v) => v.serialize(serializer),
            List::Float(v) => v.serialize(serializer),
            List::Double(v) => v.serialize(serializer),
            List::ByteArray(v) => serializer.collect_seq(v.iter().map(|b| Bytes::new(b))),
            List::String(v) => v.serialize(serializer),
            List::List(v) => v.serialize(serializer),
            List::Compound(v) => v.serialize(serializer),
            List::IntArray(v) => v.serialize(serializer),
        }
    }
}
