use crate::pin_summary::error::PinSummaryError;

pub type Result<T> = std::result::Result<T, PinSummaryError>;
