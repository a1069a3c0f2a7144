//! nbtcodec reads and writes NBT, the tree-structured binary format used by
//! *Minecraft: Java Edition* to store world data, player inventories and
//! similar things.
//!
//! * For the in-memory tree see [`Tag`], [`List`] and [`Compound`].
//! * For reading see [`de`], for writing see [`ser`].
//! * For gzip and zlib wrapped data see [`compression`].
//!
//! A stream holds a single named tag, usually a compound. The whole tree is
//! read into memory.
//!
//! # Quick example
//!
//! ```
//! use nbtcodec::{Compound, Tag};
//!
//! # fn main() -> nbtcodec::error::Result<()> {
//! let mut level = Compound::new();
//! level.insert("shortTest", 32767i16);
//! level.insert("stringTest", "HELLO");
//!
//! let bytes = nbtcodec::to_bytes("Level", &Tag::Compound(level))?;
//! let (name, tag) = nbtcodec::from_bytes(&bytes)?;
//!
//! assert_eq!(name, "Level");
//! assert_eq!(tag.as_compound()?.get_short("shortTest")?, 32767);
//! assert_eq!(tag.as_compound()?.get_string("stringTest")?, "HELLO");
//! # Ok(())
//! # }
//! ```
//!
//! # Compressed data
//!
//! NBT files are usually gzip compressed (eg `level.dat`), and chunks inside
//! region files are zlib compressed. The core only needs a [`std::io::Read`],
//! so compression is just a wrapper around it:
//!
//! ```no_run
//! use nbtcodec::compression::{read_named_tag_flavor, Flavor};
//!
//! let file = std::fs::File::open("level.dat").unwrap();
//! let (_, level) = read_named_tag_flavor(file, Flavor::Gzip).unwrap();
//! println!("{}", level);
//! ```

pub mod compression;
pub mod de;
pub mod error;
pub mod ser;

mod compound;
mod display;
mod value;

pub use compound::*;
pub use de::{from_bytes, read_named_tag, DeOpts, Decoder, DuplicateKeys};
pub use display::NamedTag;
pub use ser::{to_bytes, write_named_tag};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

/// The type of an NBT tag. This does not carry the value or the name of the
/// data. The discriminant is the byte used on the wire.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to u8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (u8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, elements must all be the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
}

impl TagType {
    /// Name of the tag type as used in diagnostics, eg `TAG_Byte_Array`.
    pub fn name(self) -> &'static str {
        match self {
            TagType::End => "TAG_End",
            TagType::Byte => "TAG_Byte",
            TagType::Short => "TAG_Short",
            TagType::Int => "TAG_Int",
            TagType::Long => "TAG_Long",
            TagType::Float => "TAG_Float",
            TagType::Double => "TAG_Double",
            TagType::ByteArray => "TAG_Byte_Array",
            TagType::String => "TAG_String",
            TagType::List => "TAG_List",
            TagType::Compound => "TAG_Compound",
            TagType::IntArray => "TAG_Int_Array",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Crates exist to generate this code for us, but the tags will very rarely
// change so writing it out isn't a massive burden.
impl TryFrom<u8> for TagType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use TagType::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        tag as u8
    }
}
