use crate::pin_diff::error::PinDiffError;

pub type Result<T> = std::result::Result<T, PinDiffError>;
