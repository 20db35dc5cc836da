mod bitstream;
pub mod knowledge;
mod pin_diff;
mod pin_summary;

// Exported objects
pub use crate::bitstream::error::BitstreamError;
pub use crate::bitstream::{load_bitstream, BitAddress, Bitstream};
pub use crate::pin_diff::bit_locator::locate_bit;
pub use crate::pin_diff::error::PinDiffError;
pub use crate::pin_diff::region::DEFAULT_TOTAL_SIZE;
pub use crate::pin_diff::{resolve_pin_bit_address, ConfigRegion, DiffRecord, PinDiffResolver};
pub use crate::pin_summary::error::PinSummaryError;
pub use crate::pin_summary::naming::{BitstreamNaming, DriveStrength};
pub use crate::pin_summary::pin_list::{parse_pin_list, read_pin_list};
pub use crate::pin_summary::{
    extract_pin_addresses, extract_pin_summary, probe_flag, Extraction, FlagProbe, PinAddresses,
    PinFailure, PinSummary,
};
