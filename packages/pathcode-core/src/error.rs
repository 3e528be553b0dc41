use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is a caller-contract violation raised synchronously;
/// nothing here is transient or retryable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
