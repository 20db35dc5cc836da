use crate::bitstream::error::BitstreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinDiffError {
    #[error(transparent)]
    BitstreamError(#[from] BitstreamError),
    #[error("expected exactly one differing bit, got {0:#04x}")]
    AmbiguousBitError(u8),
    #[error("no pin related change found in the configuration region")]
    NoPinChangeFoundError,
}
