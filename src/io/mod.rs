//! File I/O for molecule coordinate listings.

pub mod error;
pub mod xyz;

pub use error::Error;
