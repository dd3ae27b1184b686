#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = vindecode::validate_vin(s);
        let _ = vindecode::compute_check_digit(s);
        let _ = vindecode::decompose(s);
        if let Some(c) = s.chars().next() {
            let _ = vindecode::resolve_years(c, 2025);
        }
    }
});
