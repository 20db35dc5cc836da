use crate::bitstream::{BitAddress, Bitstream};
use crate::pin_diff::error::PinDiffError;
use crate::pin_diff::PinDiffResolver;
use error::PinSummaryError;
use naming::{BitstreamNaming, DriveStrength};
use rayon::prelude::*;
use result::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub mod error;
pub mod naming;
pub mod pin_list;
pub mod result;

/// Drive-strength bit addresses of one pin.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PinAddresses {
    #[serde(rename = "bit_4mA")]
    pub bit_4ma: BitAddress,
    /// Base address of the pin, see `crate::knowledge`
    #[serde(rename = "bit_8mA")]
    pub bit_8ma: BitAddress,
}

/// Located addresses keyed by pin name.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSummary {
    pins: BTreeMap<String, PinAddresses>,
}

impl PinSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, pin: S, addresses: PinAddresses) {
        self.pins.insert(pin.into(), addresses);
    }

    pub fn get(&self, pin: &str) -> Option<&PinAddresses> {
        self.pins.get(pin)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PinAddresses)> {
        self.pins.iter()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PinSummaryError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source| PinSummaryError::IoError {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        log::info!("wrote {} pins to {:?}", self.len(), path);
        Ok(())
    }
}

/// A pin whose addresses could not be resolved.
#[derive(Debug)]
pub struct PinFailure {
    pub pin: String,
    pub error: PinDiffError,
}

#[derive(Debug)]
pub struct Extraction {
    pub summary: PinSummary,
    pub failures: Vec<PinFailure>,
}

/// Compares the 4mA and 8mA bitstreams of `pin` against its 12mA bitstream.
pub fn extract_pin_addresses(
    pin: &str,
    naming: &BitstreamNaming,
    resolver: &PinDiffResolver,
) -> std::result::Result<PinAddresses, PinDiffError> {
    let reference = naming.path(pin, DriveStrength::Drive12mA);
    let bit_4ma = resolver.resolve(naming.path(pin, DriveStrength::Drive4mA), &reference)?;
    let bit_8ma = resolver.resolve(naming.path(pin, DriveStrength::Drive8mA), &reference)?;
    log::debug!("pin {}: bit_4mA = {}, bit_8mA = {}", pin, bit_4ma, bit_8ma);
    Ok(PinAddresses { bit_4ma, bit_8ma })
}

/// Resolves every pin on a pool of `jobs` worker threads (0 picks one per CPU).
/// Each worker holds two bitstreams at a time, so `jobs` bounds memory use.
pub fn extract_pin_summary(
    pins: &[String],
    naming: &BitstreamNaming,
    resolver: &PinDiffResolver,
    jobs: usize,
) -> Result<Extraction> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let results: Vec<_> = pool.install(|| {
        pins.par_iter()
            .map(|pin| (pin, extract_pin_addresses(pin, naming, resolver)))
            .collect()
    });

    let mut summary = PinSummary::new();
    let mut failures = vec![];
    for (pin, result) in results {
        match result {
            Ok(addresses) => summary.insert(pin.as_str(), addresses),
            Err(error) => {
                log::warn!("skipping pin {}: {}", pin, error);
                failures.push(PinFailure {
                    pin: pin.clone(),
                    error,
                });
            }
        }
    }
    Ok(Extraction { summary, failures })
}

/// Value of a configuration flag for every pin of a summary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FlagProbe {
    pub values: Vec<(String, Option<bool>)>,
}

impl FlagProbe {
    pub fn set_count(&self) -> usize {
        self.values.iter().filter(|(_, v)| *v == Some(true)).count()
    }
}

/// Reads the bit at `bit_8mA + offset` of each pin from a reference bitstream.
pub fn probe_flag(summary: &PinSummary, reference: &Bitstream, offset: usize) -> FlagProbe {
    let values = summary
        .iter()
        .map(|(pin, addresses)| {
            let value = addresses
                .bit_8ma
                .checked_add(offset)
                .and_then(|bit_address| reference.bit(bit_address));
            (pin.clone(), value)
        })
        .collect();
    FlagProbe { values }
}
