/// Total size of the target device's configuration bitstream
pub const DEFAULT_TOTAL_SIZE: usize = 33_554_660;

/// Byte window of a bitstream that holds configuration data. Differences in the
/// header before it and in the trailing checksum after it are ignored.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ConfigRegion {
    pub header_exclude: usize,
    pub trailer_exclude: usize,
    pub total_size: usize,
}

impl ConfigRegion {
    /// Window used when locating drive-strength bits of a pin.
    pub const PIN_CHANGE: ConfigRegion = ConfigRegion {
        header_exclude: 4096,
        trailer_exclude: 4096,
        total_size: DEFAULT_TOTAL_SIZE,
    };

    /// Wider trailer exclusion, for general configuration changes.
    pub const CONF_CHANGE: ConfigRegion = ConfigRegion {
        header_exclude: 4000,
        trailer_exclude: 10000,
        total_size: DEFAULT_TOTAL_SIZE,
    };

    pub fn new(header_exclude: usize, trailer_exclude: usize, total_size: usize) -> Self {
        Self {
            header_exclude,
            trailer_exclude,
            total_size,
        }
    }

    /// Last byte address inside the window.
    pub fn end(&self) -> usize {
        self.total_size.saturating_sub(self.trailer_exclude)
    }

    pub fn contains(&self, address: usize) -> bool {
        address >= self.header_exclude && address <= self.end()
    }
}

impl Default for ConfigRegion {
    fn default() -> Self {
        Self::PIN_CHANGE
    }
}
