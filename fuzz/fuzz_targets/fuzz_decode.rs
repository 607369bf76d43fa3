#![no_main]
use jsonslice::decode;
use libfuzzer_sys::fuzz_target;

/// Decoding must never panic, and whenever `jsonslice` accepts a document,
/// `serde_json` — an independent RFC 8259 implementation — must agree that
/// it's valid.
fn run(data: &[u8]) {
    let accepted = decode(data).is_ok();
    let reference_accepted = serde_json::from_slice::<serde_json::Value>(data).is_ok();

    if accepted && !reference_accepted {
        panic!("jsonslice accepted input serde_json rejects: {data:?}");
    }
}

fuzz_target!(|data: &[u8]| run(data));
