#![no_main]

use libfuzzer_sys::fuzz_target;
use vindecode::reference::ReferenceData;
use vindecode::{DecoderConfig, VinDecoder};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let reference = ReferenceData::from_json(include_str!("../../tests/fixtures/reference.json"))
        .expect("fixture parses");
    let decoder = VinDecoder::with_config(
        &reference,
        &reference,
        DecoderConfig::builder().current_year(2025).build(),
    );
    // A decoded VIN must round-trip its own input.
    if let Ok(vin) = decoder.decode(s) {
        assert_eq!(vin.full, s);
        assert!(vindecode::is_valid_vin(&vin.full));
    }
});
