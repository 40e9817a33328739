#![no_main]

use libfuzzer_sys::fuzz_target;

use piva::core::{SplitMode, validate_vat};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid results are fine, panics are bugs.
        for mode in [SplitMode::EuPrefixScan, SplitMode::ItPrefixOnly] {
            let check = validate_vat(s, mode);
            assert_eq!(check.is_valid, check.reason.is_none());
            // A valid Italian body is always exactly 11 decimal digits.
            if check.is_valid && check.country_code == "IT" {
                assert_eq!(check.numeric_body.len(), 11);
                assert!(check.numeric_body.bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }
});
