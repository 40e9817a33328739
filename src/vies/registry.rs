//! The registry seam between decomposition and enrichment.

use std::future::Future;

use super::client::{ViesCheck, ViesError};

/// A VAT registry that can confirm a composite identifier.
///
/// [`ViesClient`](super::ViesClient) is the production implementation;
/// batch tests substitute mocks. Futures are `Send` so batches can run
/// on multi-threaded executors.
pub trait VatRegistry {
    /// Look up a VAT number already split into prefix and body.
    fn lookup(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> impl Future<Output = Result<ViesCheck, ViesError>> + Send;
}
