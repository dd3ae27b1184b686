//! Core VIN types, validation, decomposition and decoding.
//!
//! Everything in this module is pure computation over process-wide constant
//! tables. The only fallible external calls are the two lookup collaborators
//! invoked by [`VinDecoder`].

mod check_digit;
mod config;
mod decompose;
mod decoder;
mod error;
mod lookup;
mod model_year;
pub mod tables;
mod types;
mod validation;

pub use check_digit::*;
pub use config::*;
pub use decompose::*;
pub use decoder::*;
pub use error::*;
pub use lookup::*;
pub use model_year::*;
pub use types::*;
pub(crate) use types::check_year_range;
pub use validation::*;
