//! EU VAT country prefix table.
//!
//! These are VAT registration prefixes, not plain ISO 3166-1: Greece is
//! "EL" (not "GR") and Northern Ireland trades under "XI" post-Brexit.
//! "GB" is deliberately absent — Great Britain left the VIES system.

/// Check whether `code` is a known EU VAT country prefix.
pub fn is_eu_vat_code(code: &str) -> bool {
    EU_VAT_CODES.binary_search(&code).is_ok()
}

/// The 28 EU VAT prefixes recognized during decomposition.
/// Sorted for binary search; prefix scanning walks this order.
pub static EU_VAT_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK", "XI",
];
