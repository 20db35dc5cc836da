use crate::bitstream::error::BitstreamError;
use crate::bitstream::{BitAddress, Bitstream};
use bit_locator::locate_bit;
use error::PinDiffError;
use result::Result;
use std::path::Path;

pub mod bit_locator;
pub mod diff_record;
pub mod error;
pub mod region;
pub mod result;

pub use diff_record::DiffRecord;
pub use region::ConfigRegion;

/// Locates the configuration bit that toggles between two bitstreams which
/// differ in a single pin option.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PinDiffResolver {
    region: ConfigRegion,
}

impl PinDiffResolver {
    pub fn new(region: ConfigRegion) -> Self {
        Self { region }
    }

    pub fn region(&self) -> &ConfigRegion {
        &self.region
    }

    /// Loads both files and returns the bit address of the first pin related
    /// change. `path_b` is usually the 12mA bitstream of the same pin.
    pub fn resolve<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        path_a: P,
        path_b: Q,
    ) -> Result<BitAddress> {
        let a = Bitstream::load(path_a)?;
        let b = Bitstream::load(path_b)?;
        self.resolve_bitstreams(&a, &b)
    }

    pub fn resolve_bitstreams(&self, a: &Bitstream, b: &Bitstream) -> Result<BitAddress> {
        let first = self
            .scan(a, b)?
            .next()
            .ok_or(PinDiffError::NoPinChangeFoundError)?;
        log::debug!("first pin related change: {}", first);

        let bit_index = locate_bit(first.xor())?;
        Ok(first.address() * 8 + bit_index as usize)
    }

    /// Every difference that survives the region and single-bit filters, in
    /// ascending address order.
    pub fn candidates(&self, a: &Bitstream, b: &Bitstream) -> Result<Vec<DiffRecord>> {
        Ok(self.scan(a, b)?.collect())
    }

    fn scan<'a>(
        &'a self,
        a: &'a Bitstream,
        b: &'a Bitstream,
    ) -> Result<impl Iterator<Item = DiffRecord> + 'a> {
        if a.len() != b.len() {
            return Err(BitstreamError::LengthMismatchError(a.len(), b.len()).into());
        }
        let region = self.region;

        Ok(a
            .bytes()
            .iter()
            .zip(b.bytes().iter())
            .enumerate()
            .filter_map(|(address, (value_a, value_b))| {
                DiffRecord::new(address, *value_a, *value_b)
            })
            .filter(move |record| {
                if !region.contains(record.address()) {
                    log::trace!("skipping diff at addr {:#x}", record.address());
                    return false;
                }
                if !record.is_single_bit() {
                    log::trace!("skipping multi-bit diff {}", record);
                    return false;
                }
                log::trace!("found diff {}", record);
                true
            }))
    }
}

/// Loads two bitstreams and locates the first pin related change inside the
/// given configuration window.
pub fn resolve_pin_bit_address<P: AsRef<Path>, Q: AsRef<Path>>(
    path_a: P,
    path_b: Q,
    header_exclude: usize,
    trailer_exclude: usize,
    total_size: usize,
) -> Result<BitAddress> {
    PinDiffResolver::new(ConfigRegion::new(header_exclude, trailer_exclude, total_size))
        .resolve(path_a, path_b)
}

#[cfg(test)]
mod tests {
    use crate::bitstream::error::BitstreamError;
    use crate::bitstream::Bitstream;
    use crate::pin_diff::error::PinDiffError;
    use crate::pin_diff::{ConfigRegion, DiffRecord, PinDiffResolver};

    const LENGTH: usize = 10_000;

    fn bitstream_with(changes: &[(usize, u8)]) -> Bitstream {
        let mut bytes = vec![0u8; LENGTH];
        for (address, value) in changes {
            bytes[*address] = *value;
        }
        Bitstream::from(bytes)
    }

    #[test]
    fn test_identical_bitstreams() {
        let a = Bitstream::from(vec![0x5a; 100]);
        let resolver = PinDiffResolver::default();
        assert!(matches!(
            resolver.resolve_bitstreams(&a, &a.clone()),
            Err(PinDiffError::NoPinChangeFoundError)
        ));
    }

    #[test]
    fn test_single_bit_in_region() {
        let a = bitstream_with(&[(5000, 0x01)]);
        let b = bitstream_with(&[]);
        let resolver = PinDiffResolver::default();
        assert_eq!(resolver.resolve_bitstreams(&a, &b).unwrap(), 40000);
    }

    #[test]
    fn test_bit_index_added_to_address() {
        let a = bitstream_with(&[(5000, 0b0110_0000)]);
        let b = bitstream_with(&[(5000, 0b0010_0000)]);
        let resolver = PinDiffResolver::default();
        assert_eq!(resolver.resolve_bitstreams(&a, &b).unwrap(), 5000 * 8 + 6);
    }

    #[test]
    fn test_header_diff_skipped() {
        let a = bitstream_with(&[(100, 0x01)]);
        let b = bitstream_with(&[]);
        let resolver = PinDiffResolver::default();
        assert!(matches!(
            resolver.resolve_bitstreams(&a, &b),
            Err(PinDiffError::NoPinChangeFoundError)
        ));
    }

    #[test]
    fn test_trailer_diff_skipped() {
        let region = ConfigRegion::new(16, 16, LENGTH);
        let a = bitstream_with(&[(LENGTH - 15, 0x01), (LENGTH - 16, 0x04)]);
        let b = bitstream_with(&[]);
        let resolver = PinDiffResolver::new(region);
        assert_eq!(
            resolver.resolve_bitstreams(&a, &b).unwrap(),
            (LENGTH - 16) * 8 + 2
        );
    }

    #[test]
    fn test_multi_bit_diff_skipped() {
        let a = bitstream_with(&[(4500, 0x03), (7000, 0x80)]);
        let b = bitstream_with(&[]);
        let resolver = PinDiffResolver::default();
        assert_eq!(resolver.resolve_bitstreams(&a, &b).unwrap(), 7000 * 8 + 7);
    }

    #[test]
    fn test_only_multi_bit_diff() {
        let a = bitstream_with(&[(4500, 0x03)]);
        let b = bitstream_with(&[]);
        let resolver = PinDiffResolver::default();
        assert!(matches!(
            resolver.resolve_bitstreams(&a, &b),
            Err(PinDiffError::NoPinChangeFoundError)
        ));
    }

    #[test]
    fn test_lowest_address_wins() {
        let a = bitstream_with(&[(6000, 0x02), (8000, 0x01)]);
        let b = bitstream_with(&[]);
        let resolver = PinDiffResolver::default();
        assert_eq!(resolver.resolve_bitstreams(&a, &b).unwrap(), 6000 * 8 + 1);
    }

    #[test]
    fn test_length_mismatch() {
        let a = Bitstream::from(vec![0u8; 10]);
        let b = Bitstream::from(vec![0u8; 11]);
        let resolver = PinDiffResolver::default();
        assert!(matches!(
            resolver.resolve_bitstreams(&a, &b),
            Err(PinDiffError::BitstreamError(
                BitstreamError::LengthMismatchError(10, 11)
            ))
        ));
    }

    #[test]
    fn test_candidates() {
        let a = bitstream_with(&[(100, 0x01), (4500, 0x03), (6000, 0x10), (8000, 0x00)]);
        let b = bitstream_with(&[(8000, 0x40)]);
        let resolver = PinDiffResolver::default();
        assert_eq!(
            resolver.candidates(&a, &b).unwrap(),
            vec![
                DiffRecord::new(6000, 0x10, 0x00).unwrap(),
                DiffRecord::new(8000, 0x00, 0x40).unwrap(),
            ]
        );
    }

    #[test]
    fn test_candidates_agree_with_byte_diff() {
        let region = ConfigRegion::new(0, 0, LENGTH);
        let a = bitstream_with(&[(0, 0x01), (17, 0x03), (9999, 0x80)]);
        let b = bitstream_with(&[(17, 0x01), (300, 0x20)]);
        let resolver = PinDiffResolver::new(region);

        let diff = a.diff(&b).unwrap();
        let candidates = resolver.candidates(&a, &b).unwrap();
        let addresses: Vec<usize> = candidates.iter().map(|r| r.address()).collect();
        assert_eq!(addresses, vec![0, 17, 300, 9999]);
        for record in candidates.iter() {
            assert_eq!(record.xor(), diff[record.address()]);
        }
    }
}
