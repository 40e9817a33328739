//! VAT identifier decomposition and Italian Partita IVA validation.
//!
//! This module provides the pure core: country-prefix splitting in two
//! modes, the Italian check-digit algorithm, and the fixed EU VAT prefix
//! table.

mod checksum;
mod countries;
mod decompose;

pub use checksum::*;
pub use countries::*;
pub use decompose::*;
