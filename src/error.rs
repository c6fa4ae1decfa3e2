use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    /// The service answered with `success = false`.
    #[error("{0}")]
    Rejected(String),

    #[error("could not reach service at {addr}: {source}")]
    Unreachable {
        addr: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("invalid service address '{0}'")]
    InvalidEndpoint(String),

    #[error("transport failure: {0}")]
    Transport(#[from] tonic::Status),

    #[error("cannot read oracle code from {}: {source}", path.display())]
    OracleSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report to {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
