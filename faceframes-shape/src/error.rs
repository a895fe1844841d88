use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("unknown face shape: {0:?}")]
    UnknownShape(String),

    #[error("invalid classifier thresholds: {0}")]
    InvalidThresholds(String),
}

pub type Result<T> = std::result::Result<T, Error>;
