//! Property-based tests for the decomposition core.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use piva::core::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a string of exactly `len` decimal digits.
fn arb_digits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..10, len).prop_map(|digits| {
        digits
            .into_iter()
            .map(|d| char::from_digit(d, 10).unwrap())
            .collect()
    })
}

/// Generate a checksum-valid 11-digit Partita IVA body.
fn arb_valid_body() -> impl Strategy<Value = String> {
    arb_digits(10).prop_map(|first_ten| {
        let control = control_digit(&first_ten).unwrap();
        format!("{first_ten}{control}")
    })
}

/// Pick one of the 28 EU prefixes.
fn arb_prefix() -> impl Strategy<Value = &'static str> {
    prop::sample::select(EU_VAT_CODES)
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Identical input always yields identical output, in both modes.
    #[test]
    fn validation_is_deterministic(raw in ".{0,24}") {
        for mode in [SplitMode::EuPrefixScan, SplitMode::ItPrefixOnly] {
            prop_assert_eq!(validate_vat(&raw, mode), validate_vat(&raw, mode));
        }
    }

    /// The computed control digit always completes a valid number, and
    /// no other final digit does.
    #[test]
    fn control_digit_is_unique(first_ten in arb_digits(10)) {
        let control = control_digit(&first_ten).unwrap();
        for d in 0..10u8 {
            let candidate = format!("{first_ten}{d}");
            prop_assert_eq!(is_valid_partita_iva(&candidate), d == control, "{}", candidate);
        }
    }

    /// Any digit string of length ≠ 11 is invalid as an Italian body.
    #[test]
    fn wrong_length_is_invalid(len in 0usize..=20, seed in arb_digits(20)) {
        prop_assume!(len != 11);
        let body = &seed[..len];
        let check = validate_vat(body, SplitMode::ItPrefixOnly);
        prop_assert!(!check.is_valid);
    }

    /// A non-digit anywhere in an 11-character body makes it invalid.
    #[test]
    fn non_digit_is_invalid(body in arb_digits(11), pos in 0usize..11, c in "[a-zA-Z ./-]") {
        let mut corrupted: Vec<char> = body.chars().collect();
        corrupted[pos] = c.chars().next().unwrap();
        let corrupted: String = corrupted.into_iter().collect();
        let check = validate_vat(&corrupted, SplitMode::ItPrefixOnly);
        prop_assert!(!check.is_valid);
        prop_assert!(check.reason.is_some());
    }

    /// The EU prefix scan recovers exactly the prefix and body it was handed.
    #[test]
    fn eu_scan_decomposition_is_exact(code in arb_prefix(), body in arb_digits(11)) {
        let raw = format!("{code}{body}");
        let check = validate_vat(&raw, SplitMode::EuPrefixScan);
        prop_assert_eq!(check.country_code, code);
        prop_assert_eq!(check.numeric_body, body.as_str());
        prop_assert!(check.prefix_stripped);
    }

    /// Valid bodies validate with and without the IT prefix, in both modes.
    #[test]
    fn modes_agree_on_italian_input(body in arb_valid_body()) {
        for raw in [body.clone(), format!("IT{body}")] {
            for mode in [SplitMode::EuPrefixScan, SplitMode::ItPrefixOnly] {
                let check = validate_vat(&raw, mode);
                prop_assert!(check.is_valid, "{} under {:?}", raw, mode);
                prop_assert_eq!(check.numeric_body, body.as_str());
                prop_assert!(check.is_italian());
            }
        }
    }

    /// A valid Italian check always carries an 11-digit body and a
    /// reconstructible composite key.
    #[test]
    fn valid_italian_invariants(raw in ".{0,24}") {
        let check = validate_vat(&raw, SplitMode::EuPrefixScan);
        if check.is_valid && check.is_italian() {
            prop_assert_eq!(check.numeric_body.len(), 11);
            prop_assert!(check.numeric_body.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(
                check.euvat().unwrap(),
                format!("IT{}", check.numeric_body)
            );
        }
    }
}
