#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, to_bytes, DeOpts, Decoder, Tag};

fuzz_target!(|data: &[u8]| {
    let read = Decoder::new(data)
        .with_opts(DeOpts::new().max_seq_len(100))
        .read_named_tag();

    if let Ok((name, tag)) = read {
        if tag == Tag::End {
            return;
        }

        // Anything that was read must write, and read back again.
        let bs = to_bytes(&name, &tag).unwrap();
        from_bytes(&bs).unwrap();
    }
});
