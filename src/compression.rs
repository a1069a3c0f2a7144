//! Reading and writing compressed NBT.
//!
//! NBT is rarely stored raw. Files such as `level.dat` and player data are
//! gzip compressed, chunks in region files are zlib compressed. These helpers
//! wrap the plain [`read_named_tag`][`crate::read_named_tag`] and
//! [`write_named_tag`][`crate::write_named_tag`] with the matching
//! [`flate2`] stream.
//!
//! ```
//! use nbtcodec::compression::{read_named_tag_flavor, write_named_tag_flavor, Flavor};
//! use nbtcodec::{Compound, Tag};
//!
//! # fn main() -> nbtcodec::error::Result<()> {
//! let tag = Tag::Compound(Compound::from_iter([("DataVersion", 2586i32)]));
//!
//! let mut file = Vec::new();
//! write_named_tag_flavor(&mut file, "", &tag, Flavor::Gzip)?;
//! assert_eq!(Flavor::detect(&file), Flavor::Gzip);
//!
//! let (_, read) = read_named_tag_flavor(file.as_slice(), Flavor::Gzip)?;
//! assert_eq!(read, tag);
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use crate::de::{DeOpts, Decoder};
use crate::error::Result;
use crate::ser::write_named_tag;
use crate::Tag;

/// The compression wrapping a stream of NBT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Uncompressed,
    Gzip,
    Zlib,
}

impl Flavor {
    /// Guess the flavor from the first bytes of some data.
    ///
    /// Gzip streams start with the magic `1f 8b`. Zlib streams written with
    /// the usual 32K window start with `78`, which is not a valid tag type,
    /// so can't be the start of raw NBT. Anything else is assumed to be
    /// uncompressed.
    pub fn detect(data: &[u8]) -> Flavor {
        match data {
            [0x1f, 0x8b, ..] => Flavor::Gzip,
            [0x78, ..] => Flavor::Zlib,
            _ => Flavor::Uncompressed,
        }
    }
}

/// Read a named tag that has been compressed with the given flavor.
pub fn read_named_tag_flavor<R: Read>(reader: R, flavor: Flavor) -> Result<(String, Tag)> {
    read_named_tag_flavor_with_opts(reader, flavor, DeOpts::default())
}

/// Like [`read_named_tag_flavor`], with options for the decoder.
pub fn read_named_tag_flavor_with_opts<R: Read>(
    reader: R,
    flavor: Flavor,
    opts: DeOpts,
) -> Result<(String, Tag)> {
    match flavor {
        Flavor::Uncompressed => Decoder::new(reader).with_opts(opts).read_named_tag(),
        Flavor::Gzip => Decoder::new(GzDecoder::new(reader))
            .with_opts(opts)
            .read_named_tag(),
        Flavor::Zlib => Decoder::new(ZlibDecoder::new(reader))
            .with_opts(opts)
            .read_named_tag(),
    }
}

/// Write a named tag, compressing it with the given flavor. The compressed
/// stream is finished before returning.
pub fn write_named_tag_flavor<W: Write>(
    writer: W,
    name: &str,
    tag: &Tag,
    flavor: Flavor,
) -> Result<()> {
    match flavor {
        Flavor::Uncompressed => write_named_tag(writer, name, tag),
        Flavor::Gzip => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            write_named_tag(&mut encoder, name, tag)?;
            encoder.finish()?;
            Ok(())
        }
        Flavor::Zlib => {
            let mut encoder = ZlibEncoder::new(writer, Compression::default());
            write_named_tag(&mut encoder, name, tag)?;
            encoder.finish()?;
            Ok(())
        }
    }
}
