//! # vindecode
//!
//! Validation and decoding of 17-character Vehicle Identification Numbers
//! (ISO 3779 / North American scheme): character set and length checks,
//! the weighted modulo-11 check digit, WMI/VDS/VIS decomposition and
//! model-year resolution over the 30-year code cycle.
//!
//! Manufacturer and descriptor reference data are collaborators behind the
//! [`ManufacturerLookup`](crate::core::ManufacturerLookup) and
//! [`DescriptorLookup`](crate::core::DescriptorLookup) traits.
//!
//! ## Quick Start
//!
//! ```rust
//! use vindecode::core::*;
//!
//! assert!(validate_vin("1HGCM82633A004352").is_ok());
//! assert_eq!(compute_check_digit("1HGCM82633A004352").unwrap(), '3');
//!
//! let (prefix, serial) = decompose("1HGCM82633A004352");
//! assert_eq!(prefix, "1HGCM82633A");
//! assert_eq!(serial, Some(4352));
//!
//! assert_eq!(resolve_years('3', 2025).unwrap(), vec![2003]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Tables, check digit, validation, decomposition, model years, decoder |
//! | `reference` | In-memory manufacturer/descriptor reference data, JSON loading |
//! | `store` | Find-or-insert store for decoded VINs |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "reference")]
pub mod reference;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
