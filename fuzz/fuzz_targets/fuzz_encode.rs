#![no_main]
use libfuzzer_sys::fuzz_target;
use zenenvi::*;

const CODES: [u8; 6] = [1, 2, 3, 4, 5, 12];

fuzz_target!(|data: &[u8]| {
    // First four bytes pick the layout, the rest is record text (any bytes).
    let [l, s, b, sel, rest @ ..] = data else {
        return;
    };
    let Ok(dims) = Dimensions::new(
        usize::from(l % 8) + 1,
        usize::from(s % 8) + 1,
        usize::from(b % 8) + 1,
    ) else {
        return;
    };
    let Ok(data_type) = DataType::from_code(CODES[usize::from(sel % 6)]) else {
        return;
    };
    let interleave = Interleave::ALL[usize::from((sel / 6) % 3)];
    let byte_order = if sel & 0x80 != 0 { ByteOrder::Big } else { ByteOrder::Little };

    // Must never panic, and the buffer size is fixed by the layout alone.
    let image = EncodeRequest::new(dims, data_type, interleave)
        .with_byte_order(byte_order)
        .encode_records(rest, enough::Unstoppable)
        .expect("in-memory encode cannot fail for small cubes");
    assert_eq!(
        image.data.len(),
        dims.element_count().unwrap() * data_type.bytes_per_element()
    );
    assert_eq!(image.header.to_string().parse::<EnviHeader>().unwrap(), image.header);
});
