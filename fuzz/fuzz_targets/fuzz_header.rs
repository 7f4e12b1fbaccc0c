#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary header text must never panic; anything accepted
    // must survive a write/parse cycle unchanged.
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(header) = text.parse::<zenenvi::EnviHeader>() else {
        return;
    };
    let again: zenenvi::EnviHeader = header.to_string().parse().expect("re-parse failed");
    assert_eq!(header, again);
});
