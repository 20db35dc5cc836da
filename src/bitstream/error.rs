use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitstreamError {
    #[error("could not open bitstream {path:?}: {source}")]
    FileAccessError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("bitstream lengths differ ({0:#x} != {1:#x})")]
    LengthMismatchError(usize, usize),
}
