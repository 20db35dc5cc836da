use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinSummaryError {
    #[error("could not access {path:?}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed pin summary: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not start worker pool: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}
