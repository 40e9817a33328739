//! Batch decomposition and registry enrichment for row sets.
//!
//! Re-expresses the spreadsheet workflow as three explicit steps: map
//! every raw cell through the core, deduplicate valid rows by their
//! composite key, then left-join one registry answer per unique key back
//! onto the full row set. Original row order and multiplicity are
//! preserved throughout; a failed lookup marks only the rows sharing
//! that key and never aborts the batch.
//!
//! # Example
//!
//! ```ignore
//! use piva::batch::enrich_rows;
//! use piva::core::SplitMode;
//! use piva::vies::ViesClient;
//!
//! let client = ViesClient::new()?;
//! let raws = ["IT00743110157", "DE123456789", "IT00743110157", "bogus"];
//! let rows = enrich_rows(&client, raws, SplitMode::EuPrefixScan).await;
//! // duplicate IT00743110157 triggered a single lookup, "bogus" none
//! ```

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::core::{InvalidReason, SplitMode, split_vat, validate_vat};
use crate::vies::{VatRegistry, ViesCheck, ViesError};

/// One decomposed row, optionally enriched with a registry answer.
///
/// Owned counterpart of [`crate::core::VatCheck`]: rows outlive the
/// input cells they were read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatRow {
    /// The raw cell value as supplied.
    pub raw: String,
    pub country_code: String,
    pub numeric_body: String,
    pub is_valid: bool,
    pub reason: Option<InvalidReason>,
    /// Registry answer for this row's composite key, if one was fetched.
    pub registry: Option<ViesCheck>,
    /// Lookup failure for this row's composite key, if any.
    pub lookup_error: Option<String>,
}

impl VatRow {
    /// Composite registry lookup key, `None` for invalid rows.
    pub fn euvat(&self) -> Option<String> {
        self.is_valid
            .then(|| format!("{}{}", self.country_code, self.numeric_body))
    }
}

/// Decompose every raw value into a row. No lookups, no I/O.
pub fn decompose_rows<I, S>(raws: I, mode: SplitMode) -> Vec<VatRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let check = validate_vat(raw, mode);
            VatRow {
                raw: raw.to_string(),
                country_code: check.country_code.to_string(),
                numeric_body: check.numeric_body.to_string(),
                is_valid: check.is_valid,
                reason: check.reason,
                registry: None,
                lookup_error: None,
            }
        })
        .collect()
}

/// Composite keys of valid rows, deduplicated, in first-occurrence order.
///
/// This is the set of lookups a batch actually needs: rows sharing a key
/// are served by one registry call.
pub fn unique_euvats(rows: &[VatRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for row in rows {
        if let Some(key) = row.euvat() {
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Decompose, deduplicate, look up, and join — the full pipeline.
pub async fn enrich_rows<R, I, S>(registry: &R, raws: I, mode: SplitMode) -> Vec<VatRow>
where
    R: VatRegistry,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    enrich_rows_with_progress(registry, raws, mode, |_, _| {}).await
}

/// [`enrich_rows`] with a `(completed, total)` callback after each
/// registry lookup, for progress reporting over large batches.
pub async fn enrich_rows_with_progress<R, I, S>(
    registry: &R,
    raws: I,
    mode: SplitMode,
    mut progress: impl FnMut(usize, usize),
) -> Vec<VatRow>
where
    R: VatRegistry,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = decompose_rows(raws, mode);
    let keys = unique_euvats(&rows);
    let total = keys.len();

    let mut outcomes: HashMap<String, Result<ViesCheck, ViesError>> =
        HashMap::with_capacity(total);
    for (done, key) in keys.into_iter().enumerate() {
        // Composite keys are always prefix + body, so the scan split is exact.
        let (country_code, vat_number) = split_vat(&key);
        let outcome = registry.lookup(country_code, vat_number).await;
        outcomes.insert(key, outcome);
        progress(done + 1, total);
    }

    for row in &mut rows {
        if let Some(key) = row.euvat() {
            match outcomes.get(&key) {
                Some(Ok(check)) => row.registry = Some(check.clone()),
                Some(Err(err)) => row.lookup_error = Some(err.to_string()),
                None => {}
            }
        }
    }

    rows
}
