use std::io::Read;
use std::path::Path;

use clap::{App, Arg};
use env_logger::Env;
use log::{debug, error};
use nbtcodec::compression::{read_named_tag_flavor_with_opts, Flavor};
use nbtcodec::{DeOpts, DuplicateKeys, NamedTag};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn pick_flavor(format: &str, data: &[u8]) -> Flavor {
    match format {
        "raw" => Flavor::Uncompressed,
        "gzip" => Flavor::Gzip,
        "zlib" => Flavor::Zlib,
        _ => Flavor::detect(data),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Dump NBT from a file or stdin as text or JSON")
        .arg(
            Arg::with_name("file")
                .takes_value(true)
                .required(false)
                .help("NBT file to read, stdin if not given"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .takes_value(true)
                .possible_values(&["auto", "raw", "gzip", "zlib"])
                .default_value("auto"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("Print the tree as JSON"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .takes_value(false)
                .help("Fail on compounds with duplicate names"),
        )
        .get_matches();

    let mut data = vec![];
    match matches.value_of("file") {
        Some(path) => std::fs::File::open(Path::new(path))?.read_to_end(&mut data)?,
        None => std::io::stdin().read_to_end(&mut data)?,
    };

    let flavor = pick_flavor(matches.value_of("format").unwrap_or("auto"), &data);
    debug!("read {} bytes, decoding as {:?}", data.len(), flavor);

    let mut opts = DeOpts::new();
    if let Some(depth) = matches.value_of("max-depth") {
        opts = opts.max_depth(depth.parse()?);
    }
    if matches.is_present("strict") {
        opts = opts.duplicate_keys(DuplicateKeys::Reject);
    }

    let (name, tag) = match read_named_tag_flavor_with_opts(data.as_slice(), flavor, opts) {
        Ok(named) => named,
        Err(e) => {
            error!("could not read NBT: {}", e);
            return Err(e.into());
        }
    };

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&tag)?);
    } else {
        println!("{}", NamedTag::new(&name, &tag));
    }

    Ok(())
}
