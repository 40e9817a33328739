//! EU VIES registry integration.
//!
//! [`ViesClient`] is an explicit handle around the VIES REST API —
//! construct it once and pass it to whatever orchestrates lookups. The
//! [`VatRegistry`] trait is the seam batch processing depends on, so
//! tests can substitute a mock for the real service.
//!
//! # Example
//!
//! ```ignore
//! use piva::vies::ViesClient;
//!
//! // Async, requires network. VIES is a free public service.
//! let client = ViesClient::new()?;
//! let check = client.check("IT", "00743110157").await?;
//! assert!(check.valid);
//! ```

mod client;
mod registry;

pub use client::{ViesCheck, ViesClient, ViesError, check_vies};
pub use registry::VatRegistry;
