//! # piva
//!
//! Italian Partita IVA validation: EU VAT identifier decomposition,
//! Italian check-digit verification, and VIES registry enrichment for
//! spreadsheet-style row sets.
//!
//! The core is a pure, total function: any input string yields a
//! [`core::VatCheck`], never a panic or an error. Two decomposition modes
//! coexist (see [`core::SplitMode`]) because callers disagree on how
//! aggressively country prefixes should be recognized.
//!
//! ## Quick Start
//!
//! ```rust
//! use piva::core::{SplitMode, validate_vat};
//!
//! // Scan all EU prefixes, defaulting to IT
//! let check = validate_vat("IT00743110157", SplitMode::EuPrefixScan);
//! assert_eq!(check.country_code, "IT");
//! assert_eq!(check.numeric_body, "00743110157");
//! assert!(check.is_valid);
//! assert_eq!(check.euvat().as_deref(), Some("IT00743110157"));
//!
//! // Non-IT numbers are structurally accepted; VIES is the authority
//! let check = validate_vat("DE123456789", SplitMode::EuPrefixScan);
//! assert_eq!(check.country_code, "DE");
//! assert!(check.is_valid);
//!
//! // Or recognize only the literal "IT" prefix
//! let check = validate_vat("FR12345678903", SplitMode::ItPrefixOnly);
//! assert!(!check.prefix_stripped);
//! assert!(!check.is_valid);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Decomposition modes, Partita IVA checksum, EU prefix table |
//! | `vies` | VIES REST client and the `VatRegistry` seam |
//! | `batch` | Row pipeline: decompose, dedupe, lookup, left join |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vies")]
pub mod vies;

#[cfg(feature = "batch")]
pub mod batch;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
