//! Fatal errors raised while ingesting the election record. Failed cryptographic checks are not
//! errors; they are reported through [`crate::verifier::CheckFailure`].
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid decimal integer: {0}")]
    Decimal(#[from] crate::decimal::DecimalError),

    #[error("invalid group constants: {0}")]
    InvalidConstants(&'static str),

    #[error("no generator in either the constants or the context")]
    MissingGenerator,

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
