use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::builder::Builder;
use crate::compression::{
    read_named_tag_flavor, read_named_tag_flavor_with_opts, write_named_tag_flavor, Flavor,
};
use crate::error::{ErrorKind, Result};
use crate::{Compound, DeOpts, List, Tag};

fn sample() -> Tag {
    let mut c = Compound::new();
    c.insert("DataVersion", 2586i32);
    c.insert("LevelName", "New World");
    c.insert("Pos", List::from(vec![0.5f64, 64.0, -3.25]));
    Tag::Compound(c)
}

#[test]
fn gzip_round_trip() -> Result<()> {
    let mut data = Vec::new();
    write_named_tag_flavor(&mut data, "", &sample(), Flavor::Gzip)?;

    let (name, tag) = read_named_tag_flavor(data.as_slice(), Flavor::Gzip)?;
    assert_eq!(name, "");
    assert_eq!(tag, sample());
    Ok(())
}

#[test]
fn zlib_round_trip() -> Result<()> {
    let mut data = Vec::new();
    write_named_tag_flavor(&mut data, "chunk", &sample(), Flavor::Zlib)?;

    let (name, tag) = read_named_tag_flavor(data.as_slice(), Flavor::Zlib)?;
    assert_eq!(name, "chunk");
    assert_eq!(tag, sample());
    Ok(())
}

#[test]
fn uncompressed_is_plain_nbt() -> Result<()> {
    // Encode one tree on both sides, two separately built maps may iterate
    // in different orders.
    let tag = sample();
    let mut data = Vec::new();
    write_named_tag_flavor(&mut data, "", &tag, Flavor::Uncompressed)?;

    assert_eq!(data, crate::to_bytes("", &tag)?);
    Ok(())
}

#[test]
fn gzip_output_decompresses_to_plain_nbt() -> Result<()> {
    let tag = sample();
    let mut data = Vec::new();
    write_named_tag_flavor(&mut data, "", &tag, Flavor::Gzip)?;

    let mut plain = Vec::new();
    GzDecoder::new(data.as_slice()).read_to_end(&mut plain)?;
    assert_eq!(plain, crate::to_bytes("", &tag)?);
    Ok(())
}

#[test]
fn reads_data_compressed_elsewhere() -> Result<()> {
    let plain = Builder::new()
        .start_compound("")
        .int("a", 1)
        .end_compound()
        .build();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&plain)?;
    let data = encoder.finish()?;

    let (_, tag) = read_named_tag_flavor(data.as_slice(), Flavor::Zlib)?;
    assert_eq!(tag.as_compound()?.get_int("a")?, 1);
    Ok(())
}

#[test]
fn truncated_gzip_fails() -> Result<()> {
    let mut data = Vec::new();
    write_named_tag_flavor(&mut data, "", &sample(), Flavor::Gzip)?;
    data.truncate(data.len() / 2);

    assert!(read_named_tag_flavor(data.as_slice(), Flavor::Gzip).is_err());
    Ok(())
}

#[test]
fn options_apply_through_compression() -> Result<()> {
    let mut data = Vec::new();
    write_named_tag_flavor(&mut data, "", &sample(), Flavor::Gzip)?;

    let err = read_named_tag_flavor_with_opts(
        data.as_slice(),
        Flavor::Gzip,
        DeOpts::new().max_depth(1),
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DepthLimit(1));
    Ok(())
}

#[test]
fn detect_flavor() -> Result<()> {
    let mut gzip = Vec::new();
    write_named_tag_flavor(&mut gzip, "", &sample(), Flavor::Gzip)?;
    let mut zlib = Vec::new();
    write_named_tag_flavor(&mut zlib, "", &sample(), Flavor::Zlib)?;
    let plain = crate::to_bytes("", &sample())?;

    assert_eq!(Flavor::detect(&gzip), Flavor::Gzip);
    assert_eq!(Flavor::detect(&zlib), Flavor::Zlib);
    assert_eq!(Flavor::detect(&plain), Flavor::Uncompressed);
    assert_eq!(Flavor::detect(&[]), Flavor::Uncompressed);
    Ok(())
}
