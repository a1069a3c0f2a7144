//! Reading NBT from any [`Read`] into a [`Tag`] tree.
//!
//! A stream holds one named tag. Reading it produces the name and the
//! complete tree:
//!
//! ```
//! # use nbtcodec::{read_named_tag, TagType};
//! # fn main() -> nbtcodec::error::Result<()> {
//! // An empty compound called "hello".
//! let data = [10u8, 0, 5, b'h', b'e', b'l', b'l', b'o', 0];
//! let (name, tag) = read_named_tag(&data[..])?;
//!
//! assert_eq!(name, "hello");
//! assert_eq!(tag.tag_type(), TagType::Compound);
//! # Ok(())
//! # }
//! ```
//!
//! Every read is strict. A short read, a negative length or an unknown tag
//! type aborts the whole read with an error; no partial tree is returned.
//!
//! # Strings
//!
//! Strings are decoded as UTF-8. The game writes strings in Java's modified
//! UTF-8 (CESU-8), which differs for NUL and for characters outside of the
//! Basic Multilingual Plane, so data that is not valid UTF-8 is decoded as
//! CESU-8 instead. If neither works the read fails with
//! [`ErrorKind::Nonunicode`][`crate::error::ErrorKind::Nonunicode`], since a
//! lossy conversion could not be written back unchanged.
//!
//! # Limits
//!
//! Untrusted input can claim enormous lengths or nest compounds deep enough
//! to exhaust the stack. [`DeOpts`] bounds both.

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{Compound, List, Tag, TagType};

// Upper bound for preallocating array and list storage. Lengths come from the
// input, so trust them only as far as this.
const MAX_PREALLOC: usize = 4096;

/// What to do when a compound contains the same name more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// Keep the later entry, replacing the earlier one.
    Overwrite,
    /// Fail the read with [`ErrorKind::DuplicateKey`][`crate::error::ErrorKind::DuplicateKey`].
    Reject,
}

/// Options for customizing reading.
///
/// ```
/// # use nbtcodec::{DeOpts, Decoder, DuplicateKeys};
/// let opts = DeOpts::new()
///     .max_depth(64)
///     .duplicate_keys(DuplicateKeys::Reject);
///
/// let mut decoder = Decoder::new(&[0u8][..]).with_opts(opts);
/// # let _ = decoder.read_named_tag();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    max_depth: usize,
    max_seq_len: usize,
    duplicate_keys: DuplicateKeys,
}

impl DeOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum nesting of compounds and lists. The root compound is at
    /// depth 1. Default is 256.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum number of elements in an array or list. Default is
    /// 10,000,000.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Handling of repeated names within a compound. Default is
    /// [`DuplicateKeys::Overwrite`].
    pub fn duplicate_keys(mut self, value: DuplicateKeys) -> Self {
        self.duplicate_keys = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_seq_len: 10_000_000,
            duplicate_keys: DuplicateKeys::Overwrite,
        }
    }
}

/// Read a named tag from `reader` using the default options.
pub fn read_named_tag<R: Read>(reader: R) -> Result<(String, Tag)> {
    Decoder::new(reader).read_named_tag()
}

/// Read a named tag from a slice of uncompressed NBT.
pub fn from_bytes(input: &[u8]) -> Result<(String, Tag)> {
    read_named_tag(input)
}

/// Decoder reads complete named tags from any reader. Does not do
/// decompression, see [`compression`][`crate::compression`] for that.
pub struct Decoder<R: Read> {
    reader: R,
    opts: DeOpts,
    depth: usize,
}

impl<R: Read> Decoder<R> {
    /// Create a new decoder for the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            opts: DeOpts::default(),
            depth: 0,
        }
    }

    pub fn with_opts(mut self, opts: DeOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next named tag. If the first byte is the End tag this
    /// returns an empty name with [`Tag::End`].
    pub fn read_named_tag(&mut self) -> Result<(String, Tag)> {
        self.depth = 0;
        let (name, tag) = self.read_named()?;
        trace!("read {} {:?}", tag.tag_type(), name);
        Ok((name, tag))
    }

    fn read_named(&mut self) -> Result<(String, Tag)> {
        let tag_type = self.read_tag_type()?;
        if tag_type == TagType::End {
            // End tags have no name or value.
            return Ok((String::new(), Tag::End));
        }

        let name = self.read_size_prefixed_string()?;
        let tag = self.read_value(tag_type)?;
        Ok((name, tag))
    }

    /// Read the payload of a tag of the given type. The payload is read as
    /// a root, so nesting is counted from here.
    pub fn read_payload(&mut self, tag_type: TagType) -> Result<Tag> {
        self.depth = 0;
        self.read_value(tag_type)
    }

    fn read_value(&mut self, tag_type: TagType) -> Result<Tag> {
        Ok(match tag_type {
            TagType::End => return Err(Error::invalid_end()),
            TagType::Byte => Tag::Byte(self.reader.read_u8()?),
            TagType::Short => Tag::Short(self.reader.read_i16::<BigEndian>()?),
            TagType::Int => Tag::Int(self.reader.read_i32::<BigEndian>()?),
            TagType::Long => Tag::Long(self.reader.read_i64::<BigEndian>()?),
            TagType::Float => Tag::Float(self.reader.read_f32::<BigEndian>()?),
            TagType::Double => Tag::Double(self.reader.read_f64::<BigEndian>()?),
            TagType::ByteArray => Tag::ByteArray(self.read_byte_array()?),
            TagType::String => Tag::String(self.read_size_prefixed_string()?),
            TagType::List => Tag::List(self.read_list()?),
            TagType::Compound => Tag::Compound(self.read_compound()?),
            TagType::IntArray => Tag::IntArray(self.read_int_array()?),
        })
    }

    fn read_tag_type(&mut self) -> Result<TagType> {
        let tag = self.reader.read_u8()?;
        TagType::try_from(tag).map_err(|_| Error::unknown_tag_type(tag))
    }

    fn read_size_prefixed_string(&mut self) -> Result<String> {
        let len = self.reader.read_i16::<BigEndian>()?;
        if len < 0 {
            return Err(Error::malformed_length(len.into()));
        }

        let mut buf = vec![0; len as usize];
        self.reader.read_exact(&mut buf[..])?;

        match String::from_utf8(buf) {
            Ok(s) => Ok(s),
            Err(e) => {
                let buf = e.into_bytes();
                match cesu8::from_java_cesu8(&buf) {
                    Ok(s) => Ok(s.into_owned()),
                    Err(_) => Err(Error::nonunicode(buf)),
                }
            }
        }
    }

    /// Read an i32 length prefix for an array or list.
    fn read_len(&mut self) -> Result<usize> {
        let len = self.reader.read_i32::<BigEndian>()?;
        if len < 0 {
            return Err(Error::malformed_length(len));
        }

        let len = len as usize;
        if len > self.opts.max_seq_len {
            return Err(Error::length_limit(len));
        }
        Ok(len)
    }

    fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;

        // Avoid allocating the claimed size up front, truncated input is
        // detected once the reader runs dry.
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(Error::unexpected_eof());
        }
        Ok(buf)
    }

    fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_len()?;
        self.read_elements(len, |de| Ok(de.reader.read_i32::<BigEndian>()?))
    }

    fn read_list(&mut self) -> Result<List> {
        self.enter()?;

        let element_type = self.read_tag_type()?;
        let len = self.read_len()?;

        let list = match element_type {
            TagType::End if len == 0 => List::End,
            TagType::End => return Err(Error::invalid_list(len)),
            TagType::Byte => List::Byte(self.read_elements(len, |de| Ok(de.reader.read_u8()?))?),
            TagType::Short => List::Short(
                self.read_elements(len, |de| Ok(de.reader.read_i16::<BigEndian>()?))?,
            ),
            TagType::Int => List::Int(
                self.read_elements(len, |de| Ok(de.reader.read_i32::<BigEndian>()?))?,
            ),
            TagType::Long => List::Long(
                self.read_elements(len, |de| Ok(de.reader.read_i64::<BigEndian>()?))?,
            ),
            TagType::Float => List::Float(
                self.read_elements(len, |de| Ok(de.reader.read_f32::<BigEndian>()?))?,
            ),
            TagType::Double => List::Double(
                self.read_elements(len, |de| Ok(de.reader.read_f64::<BigEndian>()?))?,
            ),
            TagType::ByteArray => {
                List::ByteArray(self.read_elements(len, |de| de.read_byte_array())?)
            }
            TagType::String => {
                List::String(self.read_elements(len, |de| de.read_size_prefixed_string())?)
            }
            TagType::List => List::List(self.read_elements(len, |de| de.read_list())?),
            TagType::Compound => List::Compound(self.read_elements(len, |de| de.read_compound())?),
            TagType::IntArray => {
                List::IntArray(self.read_elements(len, |de| de.read_int_array())?)
            }
        };

        self.leave();
        Ok(list)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;

        let mut compound = Compound::new();
        loop {
            let (name, tag) = self.read_named()?;
            if tag == Tag::End {
                break;
            }

            match self.opts.duplicate_keys {
                DuplicateKeys::Reject if compound.contains_key(&name) => {
                    return Err(Error::duplicate_key(&name));
                }
                DuplicateKeys::Reject => {
                    compound.insert(name, tag);
                }
                DuplicateKeys::Overwrite => {
                    if compound.insert(name.clone(), tag).is_some() {
                        debug!("duplicate key {:?} in compound, keeping the later value", name);
                    }
                }
            }
        }

        self.leave();
        Ok(compound)
    }

    fn read_elements<T, F>(&mut self, len: usize, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mut elements = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            elements.push(f(self)?);
        }
        Ok(elements)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.opts.max_depth {
            return Err(Error::depth_limit(self.opts.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
