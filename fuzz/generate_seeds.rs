#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;

    let dir = "fuzz/corpus/fuzz_encode";
    fs::create_dir_all(dir).unwrap();
    // Layout bytes (lines, samples, bands, selector) then record text.
    fs::write(format!("{dir}/u8_bsq_1x1x3.bin"), b"\x00\x00\x02\x00value\n10\n20\n30\n").unwrap();
    fs::write(format!("{dir}/i16_bip_be.bin"), b"\x01\x01\x01\x8dv\n258\n-1\n7\n8\n").unwrap();
    fs::write(format!("{dir}/f64_bil.bin"), b"\x00\x02\x00\x0ev\n1.5\n-2e3\ninf\n").unwrap();
    fs::write(format!("{dir}/garbage_records.bin"), b"\x02\x02\x02\x03v\nabc\n\n+\n.e5\n").unwrap();
    fs::write(format!("{dir}/no_label.bin"), b"\x00\x00\x00\x00").unwrap();

    let dir = "fuzz/corpus/fuzz_header";
    fs::create_dir_all(dir).unwrap();
    fs::write(
        format!("{dir}/minimal.hdr"),
        b"ENVI\nlines = 10\nsamples = 20\nbands = 3\ndata type = 4\ninterleave = bsq\nbyte order = 0\n",
    )
    .unwrap();
    fs::write(format!("{dir}/missing_field.hdr"), b"ENVI\nlines = 1\n").unwrap();
    fs::write(format!("{dir}/no_magic.hdr"), b"lines = 1\n").unwrap();

    println!("Generated seed corpora in fuzz/corpus/");
}
