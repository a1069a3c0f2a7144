mod list;
mod ser;

pub use self::list::List;

use crate::error::{Error, Result};
use crate::{Compound, TagType};

/// Tag is a complete NBT value. It owns its data. Lists and compounds
/// recursively own their children, so a tree can never contain cycles.
///
/// The variant always agrees with the [`TagType`] written to the wire, see
/// [`Tag::tag_type`]. Payloads are taken out with the `as_*` methods, which
/// fail with a type mismatch rather than convert between types.
///
/// ```
/// # use nbtcodec::{Tag, TagType};
/// # fn main() -> nbtcodec::error::Result<()> {
/// let tag = Tag::from(1234i32);
/// assert_eq!(tag.tag_type(), TagType::Int);
/// assert_eq!(tag.as_int()?, 1234);
/// assert!(tag.as_long().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Only produced when reading the End marker of a compound. It has no
    /// payload and cannot be written as a value.
    End,
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
}

macro_rules! as_copy {
    ($fn:ident, $variant:ident, $type:ty) => {
        pub fn $fn(&self) -> Result<$type> {
            match *self {
                Tag::$variant(v) => Ok(v),
                _ => Err(Error::type_mismatch(TagType::$variant, self.tag_type())),
            }
        }
    };
}

macro_rules! as_ref {
    ($fn:ident, $fn_into:ident, $variant:ident, $type:ty; mut $fn_mut:ident) => {
        as_ref!($fn, $fn_into, $variant, $type, $type);

        pub fn $fn_mut(&mut self) -> Result<&mut $type> {
            match self {
                Tag::$variant(v) => Ok(v),
                other => Err(Error::type_mismatch(TagType::$variant, other.tag_type())),
            }
        }
    };
    ($fn:ident, $fn_into:ident, $variant:ident, $type:ty, $owned:ty) => {
        pub fn $fn(&self) -> Result<&$type> {
            match self {
                Tag::$variant(v) => Ok(v),
                _ => Err(Error::type_mismatch(TagType::$variant, self.tag_type())),
            }
        }

        pub fn $fn_into(self) -> Result<$owned> {
            match self {
                Tag::$variant(v) => Ok(v),
                other => Err(Error::type_mismatch(TagType::$variant, other.tag_type())),
            }
        }
    };
}

impl Tag {
    /// The type this tag is written as.
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
        }
    }

    as_copy!(as_byte, Byte, u8);
    as_copy!(as_short, Short, i16);
    as_copy!(as_int, Int, i32);
    as_copy!(as_long, Long, i64);
    as_copy!(as_float, Float, f32);
    as_copy!(as_double, Double, f64);

    as_ref!(as_byte_array, into_byte_array, ByteArray, [u8], Vec<u8>);
    as_ref!(as_str, into_string, String, str, String);
    as_ref!(as_list, into_list, List, List; mut as_list_mut);
    as_ref!(as_compound, into_compound, Compound, Compound; mut as_compound_mut);
    as_ref!(as_int_array, into_int_array, IntArray, [i32], Vec<i32>);
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(u8, Byte);
from!(i8, Byte, as u8);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<u8>, ByteArray);
from!(&[u8], ByteArray, .to_vec());
from!(Vec<i32>, IntArray);
from!(&[i32], IntArray, .to_vec());
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(u8::from(val))
    }
}
