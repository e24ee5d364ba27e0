use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("field line count must be positive")]
    ZeroFieldLines,

    #[error("arrows-per-line count must be positive")]
    ZeroArrowsPerLine,
}
