use crate::bitstream::error::BitstreamError;

pub type Result<T> = std::result::Result<T, BitstreamError>;
