use crate::pin_diff::error::PinDiffError;
use crate::pin_diff::result::Result;

/// Index (LSB = 0) of the only bit set in `x`.
pub fn locate_bit(x: u8) -> Result<u8> {
    if x.count_ones() != 1 {
        return Err(PinDiffError::AmbiguousBitError(x));
    }
    Ok(x.trailing_zeros() as u8)
}
