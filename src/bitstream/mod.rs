use crate::bitstream::error::BitstreamError;
use helper::{get_buffer_length, xor_bytes};
use result::Result;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

pub mod error;
mod helper;
pub mod result;

/// Absolute bit offset into a bitstream: `byte_address * 8 + bit_index`.
pub type BitAddress = usize;

/// Raw contents of a configuration bitstream file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bitstream {
    bytes: Vec<u8>,
}

impl Bitstream {
    /// Reads the whole file at `path` without interpreting its content.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {:?}", path);

        let file_access_error = |source| BitstreamError::FileAccessError {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(file_access_error)?;
        let bitstream = Self::from_reader(&mut BufReader::new(file)).map_err(file_access_error)?;

        log::info!("read {} bytes from {:?}", bitstream.len(), path);
        Ok(bitstream)
    }

    pub fn from_reader<R: Read + Seek>(reader: &mut R) -> std::io::Result<Self> {
        let length = get_buffer_length(reader)?;
        let mut bytes = Vec::with_capacity(length);
        reader.read_to_end(&mut bytes)?;
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Value of the bit at `bit_address`, or `None` past the end of the bitstream.
    pub fn bit(&self, bit_address: BitAddress) -> Option<bool> {
        self.bytes
            .get(bit_address / 8)
            .map(|byte| (byte >> (bit_address % 8)) & 1 == 1)
    }

    /// Byte-wise XOR against a bitstream of the same length.
    pub fn diff(&self, other: &Bitstream) -> Result<Vec<u8>> {
        xor_bytes(&self.bytes, &other.bytes)
    }
}

impl From<Vec<u8>> for Bitstream {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// Reads a bitstream from disk.
pub fn load_bitstream<P: AsRef<Path>>(path: P) -> Result<Bitstream> {
    Bitstream::load(path)
}
