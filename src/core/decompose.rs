//! Country-prefix decomposition and validation of raw VAT strings.

use serde::Serialize;
use thiserror::Error;

use super::checksum::is_valid_partita_iva;
use super::countries::EU_VAT_CODES;

/// Why a decomposed identifier failed validation.
///
/// Invalidity is always reported through [`VatCheck::reason`], never
/// raised — [`validate_vat`] is total over all input strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum InvalidReason {
    /// The numeric body is empty (or the whole input was).
    #[error("empty input")]
    EmptyInput,
    /// The body is not exactly 11 decimal digits.
    #[error("body is not an 11-digit number")]
    MalformedBody,
    /// The 11th digit does not match the computed control digit.
    #[error("control digit mismatch")]
    ChecksumMismatch,
}

/// How country prefixes are recognized during decomposition.
///
/// The two modes disagree on non-IT input: under [`EuPrefixScan`] a
/// recognized foreign prefix is stripped and the number passes through
/// for the registry to judge, while [`ItPrefixOnly`] leaves it in the
/// body, where it then fails the digit check.
///
/// [`EuPrefixScan`]: SplitMode::EuPrefixScan
/// [`ItPrefixOnly`]: SplitMode::ItPrefixOnly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SplitMode {
    /// Scan the full [`EU_VAT_CODES`] table; first matching prefix wins.
    /// No match means country IT with the entire input as the body.
    EuPrefixScan,
    /// Recognize only the literal `"IT"` prefix. The country is always
    /// reported as IT and the checksum always runs.
    ItPrefixOnly,
}

/// Decomposition and validation result for one raw identifier.
///
/// Borrows the numeric body from the input. For an IT number,
/// `is_valid` implies the body is exactly 11 decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatCheck<'a> {
    /// Determined country prefix; `"IT"` when nothing matched.
    pub country_code: &'static str,
    /// What remains after prefix removal (the whole input if none was).
    pub numeric_body: &'a str,
    /// Whether a recognized prefix was actually removed from the input.
    pub prefix_stripped: bool,
    /// Structural validity. Non-IT numbers are accepted here and judged
    /// by the registry instead.
    pub is_valid: bool,
    /// Set iff `is_valid` is false.
    pub reason: Option<InvalidReason>,
}

impl VatCheck<'_> {
    /// Composite registry lookup key (`country_code + numeric_body`),
    /// or `None` for invalid identifiers.
    pub fn euvat(&self) -> Option<String> {
        self.is_valid
            .then(|| format!("{}{}", self.country_code, self.numeric_body))
    }

    /// Whether the identifier was attributed to Italy.
    pub fn is_italian(&self) -> bool {
        self.country_code == "IT"
    }
}

/// Split a raw identifier on the first matching EU prefix.
///
/// Falls back to `("IT", raw)` when no prefix matches — the original
/// value stays intact as the body. Matching is case-sensitive.
pub fn split_vat(raw: &str) -> (&'static str, &str) {
    for &code in EU_VAT_CODES {
        if let Some(rest) = raw.strip_prefix(code) {
            return (code, rest);
        }
    }
    ("IT", raw)
}

/// Strip a literal `"IT"` prefix if present.
///
/// Returns whether it was, and the remaining body. Any other prefix —
/// including valid foreign ones — is left in place.
pub fn split_it_prefix(raw: &str) -> (bool, &str) {
    match raw.strip_prefix("IT") {
        Some(rest) => (true, rest),
        None => (false, raw),
    }
}

/// Decompose a raw VAT string and validate the Italian check digit.
///
/// Surrounding whitespace is trimmed first. Under
/// [`SplitMode::EuPrefixScan`] a non-IT country short-circuits to valid:
/// the cross-border check belongs to the VIES registry, this function
/// only produces the identifier it needs. Never panics, never errors.
pub fn validate_vat(raw: &str, mode: SplitMode) -> VatCheck<'_> {
    let raw = raw.trim();

    let (country_code, numeric_body, prefix_stripped) = match mode {
        SplitMode::EuPrefixScan => {
            let (code, body) = split_vat(raw);
            (code, body, body.len() < raw.len())
        }
        SplitMode::ItPrefixOnly => {
            let (stripped, body) = split_it_prefix(raw);
            ("IT", body, stripped)
        }
    };

    let reason = if country_code == "IT" {
        check_body(numeric_body)
    } else {
        None
    };

    VatCheck {
        country_code,
        numeric_body,
        prefix_stripped,
        is_valid: reason.is_none(),
        reason,
    }
}

fn check_body(body: &str) -> Option<InvalidReason> {
    if body.is_empty() {
        return Some(InvalidReason::EmptyInput);
    }
    if body.len() != 11 || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Some(InvalidReason::MalformedBody);
    }
    if !is_valid_partita_iva(body) {
        return Some(InvalidReason::ChecksumMismatch);
    }
    None
}
