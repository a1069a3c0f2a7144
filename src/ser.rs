//! Writing a [`Tag`] tree to any [`Write`].
//!
//! Writing mirrors reading exactly: the same big-endian widths and the same
//! signed length prefixes. Compound entries are written in the order the
//! compound iterates them, which is not part of the format, followed by a
//! single End tag.
//!
//! ```
//! # use nbtcodec::{to_bytes, List, Tag};
//! # fn main() -> nbtcodec::error::Result<()> {
//! let bytes = to_bytes("longs", &Tag::List(List::from(vec![1i64])))?;
//! assert_eq!(
//!     bytes,
//!     [9, 0, 5, b'l', b'o', b'n', b'g', b's', 4, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Names and strings are written as Java's modified UTF-8, so NUL becomes
//! `C0 80` and characters outside the BMP become surrogate pairs. This is
//! plain UTF-8 for everything else.
//!
//! A well formed tree only fails to write if the writer fails, or if a
//! string or array is too long for its length prefix.

use std::convert::TryFrom;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::trace;

use crate::error::{Error, Result};
use crate::{Compound, List, Tag, TagType};

/// Write `tag` to `writer` with the given name.
pub fn write_named_tag<W: Write>(mut writer: W, name: &str, tag: &Tag) -> Result<()> {
    trace!("write {} {:?}", tag.tag_type(), name);
    writer.write_named(name, tag)
}

/// Write `tag` with the given name to a new vector.
pub fn to_bytes(name: &str, tag: &Tag) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_named_tag(&mut buf, name, tag)?;
    Ok(buf)
}

pub(crate) trait WriteNbt: Write {
    fn write_tag_type(&mut self, tag_type: TagType) -> Result<()> {
        self.write_u8(tag_type.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let data = cesu8::to_java_cesu8(s);
        let len = i16::try_from(data.len()).map_err(|_| Error::length_limit(data.len()))?;
        self.write_i16::<BigEndian>(len)?;
        self.write_all(&data)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::length_limit(len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }

    fn write_named(&mut self, name: &str, tag: &Tag) -> Result<()> {
        if let Tag::End = tag {
            return Err(Error::invalid_end());
        }

        self.write_tag_type(tag.tag_type())?;
        self.write_size_prefixed_str(name)?;
        self.write_payload(tag)
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::End => return Err(Error::invalid_end()),
            Tag::Byte(v) => self.write_u8(*v)?,
            Tag::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Tag::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Tag::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Tag::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Tag::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Tag::ByteArray(v) => self.write_byte_array(v)?,
            Tag::String(v) => self.write_size_prefixed_str(v)?,
            Tag::List(v) => self.write_list(v)?,
            Tag::Compound(v) => self.write_compound(v)?,
            Tag::IntArray(v) => self.write_int_array(v)?,
        }
        Ok(())
    }

    fn write_byte_array(&mut self, v: &[u8]) -> Result<()> {
        self.write_len(v.len())?;
        self.write_all(v)?;
        Ok(())
    }

    fn write_int_array(&mut self, v: &[i32]) -> Result<()> {
        self.write_len(v.len())?;
        for el in v {
            self.write_i32::<BigEndian>(*el)?;
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        self.write_tag_type(list.element_type())?;
        self.write_len(list.len())?;

        // Elements have no tag or name of their own, just the payload.
        match list {
            List::End => {}
            List::Byte(v) => self.write_all(v)?,
            List::Short(v) => {
                for el in v {
                    self.write_i16::<BigEndian>(*el)?;
                }
            }
            List::Int(v) => {
                for el in v {
                    self.write_i32::<BigEndian>(*el)?;
                }
            }
            List::Long(v) => {
                for el in v {
                    self.write_i64::<BigEndian>(*el)?;
                }
            }
            List::Float(v) => {
                for el in v {
                    self.write_f32::<BigEndian>(*el)?;
                }
            }
            List::Double(v) => {
                for el in v {
                    self.write_f64::<BigEndian>(*el)?;
                }
            }
            List::ByteArray(v) => {
                for el in v {
                    self.write_byte_array(el)?;
                }
            }
            List::String(v) => {
                for el in v {
                    self.write_size_prefixed_str(el)?;
                }
            }
            List::List(v) => {
                for el in v {
                    self.write_list(el)?;
                }
            }
            List::Compound(v) => {
                for el in v {
                    self.write_compound(el)?;
                }
            }
            List::IntArray(v) => {
                for el in v {
                    self.write_int_array(el)?;
                }
            }
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, tag) in compound {
            self.write_named(name, tag)?;
        }
        self.write_tag_type(TagType::End)
    }
}

impl<T> WriteNbt for T where T: Write + ?Sized {}
