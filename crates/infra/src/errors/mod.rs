//! Infrastructure error conversions

pub mod conversions;

pub use conversions::{store_error, InfraError, PostgrestError};
