use crate::error::{Error, Result};
use crate::{Compound, Tag, TagType};

/// A homogeneous NBT list.
///
/// Every element of an NBT list has the same type, and on the wire the
/// elements carry neither a name nor their own type byte. The list is stored
/// as a single typed vector per element type, so a list holding mixed
/// elements cannot be constructed.
///
/// ```
/// # use nbtcodec::{List, Tag, TagType};
/// # fn main() -> nbtcodec::error::Result<()> {
/// let mut list = List::from(vec![11i64, 12, 13]);
/// list.push(Tag::Long(14))?;
/// assert!(list.push(Tag::String("no".into())).is_err());
///
/// assert_eq!(list.element_type(), TagType::Long);
/// assert_eq!(list.as_longs()?, &[11, 12, 13, 14]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum List {
    /// An empty list with the End element type. This is how the game writes
    /// most empty lists.
    End,
    Byte(Vec<u8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<u8>>),
    String(Vec<String>),
    List(Vec<List>),
    Compound(Vec<Compound>),
    IntArray(Vec<Vec<i32>>),
}

impl Default for List {
    fn default() -> Self {
        List::End
    }
}

macro_rules! for_each_variant {
    ($list:expr, $v:ident => $body:expr, End => $end:expr) => {
        match $list {
            List::End => $end,
            List::Byte($v) => $body,
            List::Short($v) => $body,
            List::Int($v) => $body,
            List::Long($v) => $body,
            List::Float($v) => $body,
            List::Double($v) => $body,
            List::ByteArray($v) => $body,
            List::String($v) => $body,
            List::List($v) => $body,
            List::Compound($v) => $body,
            List::IntArray($v) => $body,
        }
    };
}

macro_rules! as_slice {
    ($fn:ident, $variant:ident, $type:ty) => {
        pub fn $fn(&self) -> Result<&[$type]> {
            match self {
                List::$variant(v) => Ok(v),
                // An End list is empty, so it is an empty list of anything.
                List::End => Ok(&[]),
                _ => Err(Error::type_mismatch(
                    TagType::$variant,
                    self.element_type(),
                )),
            }
        }
    };
}

impl List {
    /// Create an empty list of the given element type.
    pub fn new(element_type: TagType) -> Self {
        match element_type {
            TagType::End => List::End,
            TagType::Byte => List::Byte(vec![]),
            TagType::Short => List::Short(vec![]),
            TagType::Int => List::Int(vec![]),
            TagType::Long => List::Long(vec![]),
            TagType::Float => List::Float(vec![]),
            TagType::Double => List::Double(vec![]),
            TagType::ByteArray => List::ByteArray(vec![]),
            TagType::String => List::String(vec![]),
            TagType::List => List::List(vec![]),
            TagType::Compound => List::Compound(vec![]),
            TagType::IntArray => List::IntArray(vec![]),
        }
    }

    /// Create a list of the given element type from tags. Fails if any of
    /// the tags is of a different type.
    pub fn from_tags(element_type: TagType, tags: Vec<Tag>) -> Result<Self> {
        let mut list = List::new(element_type);
        for tag in tags {
            list.push(tag)?;
        }
        Ok(list)
    }

    /// The type every element of this list has.
    pub fn element_type(&self) -> TagType {
        match self {
            List::End => TagType::End,
            List::Byte(_) => TagType::Byte,
            List::Short(_) => TagType::Short,
            List::Int(_) => TagType::Int,
            List::Long(_) => TagType::Long,
            List::Float(_) => TagType::Float,
            List::Double(_) => TagType::Double,
            List::ByteArray(_) => TagType::ByteArray,
            List::String(_) => TagType::String,
            List::List(_) => TagType::List,
            List::Compound(_) => TagType::Compound,
            List::IntArray(_) => TagType::IntArray,
        }
    }

    pub fn len(&self) -> usize {
        for_each_variant!(self, v => v.len(), End => 0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a tag to the list. The tag must have the same type as the
    /// list's elements. Elements can't be pushed to a list of End.
    pub fn push(&mut self, tag: Tag) -> Result<()> {
        match (self, tag) {
            (List::Byte(v), Tag::Byte(t)) => v.push(t),
            (List::Short(v), Tag::Short(t)) => v.push(t),
            (List::Int(v), Tag::Int(t)) => v.push(t),
            (List::Long(v), Tag::Long(t)) => v.push(t),
            (List::Float(v), Tag::Float(t)) => v.push(t),
            (List::Double(v), Tag::Double(t)) => v.push(t),
            (List::ByteArray(v), Tag::ByteArray(t)) => v.push(t),
            (List::String(v), Tag::String(t)) => v.push(t),
            (List::List(v), Tag::List(t)) => v.push(t),
            (List::Compound(v), Tag::Compound(t)) => v.push(t),
            (List::IntArray(v), Tag::IntArray(t)) => v.push(t),
            (list, tag) => {
                return Err(Error::type_mismatch(list.element_type(), tag.tag_type()));
            }
        }
        Ok(())
    }

    /// Get a copy of the element at `index` as a tag.
    pub fn get(&self, index: usize) -> Option<Tag> {
        for_each_variant!(self, v => v.get(index).cloned().map(Tag::from), End => None)
    }

    /// Convert the list into a tag per element.
    pub fn into_tags(self) -> Vec<Tag> {
        for_each_variant!(self, v => v.into_iter().map(Tag::from).collect(), End => vec![])
    }

    as_slice!(as_bytes, Byte, u8);
    as_slice!(as_shorts, Short, i16);
    as_slice!(as_ints, Int, i32);
    as_slice!(as_longs, Long, i64);
    as_slice!(as_floats, Float, f32);
    as_slice!(as_doubles, Double, f64);
    as_slice!(as_byte_arrays, ByteArray, Vec<u8>);
    as_slice!(as_strings, String, String);
    as_slice!(as_lists, List, List);
    as_slice!(as_compounds, Compound, Compound);
    as_slice!(as_int_arrays, IntArray, Vec<i32>);
}

macro_rules! from_vec {
    ($type:ty, $variant:ident) => {
        impl From<Vec<$type>> for List {
            fn from(val: Vec<$type>) -> Self {
                List::$variant(val)
            }
        }
    };
}
from_vec!(u8, Byte);
from_vec!(i16, Short);
from_vec!(i32, Int);
from_vec!(i64, Long);
from_vec!(f32, Float);
from_vec!(f64, Double);
from_vec!(Vec<u8>, ByteArray);
from_vec!(String, String);
from_vec!(List, List);
from_vec!(Compound, Compound);
from_vec!(Vec<i32>, IntArray);
