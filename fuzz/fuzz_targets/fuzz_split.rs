#![no_main]

use libfuzzer_sys::fuzz_target;

use piva::core::{is_eu_vat_code, split_it_prefix, split_vat};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Splitting must reassemble to the input (or default to IT untouched).
        let (code, body) = split_vat(s);
        if body.len() < s.len() {
            assert!(is_eu_vat_code(code));
            assert_eq!(format!("{code}{body}"), s);
        } else {
            assert_eq!(code, "IT");
            assert_eq!(body, s);
        }

        let (stripped, body) = split_it_prefix(s);
        if stripped {
            assert_eq!(format!("IT{body}"), s);
        } else {
            assert_eq!(body, s);
        }
    }
});
