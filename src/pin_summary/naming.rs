use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DriveStrength {
    Drive4mA,
    Drive8mA,
    Drive12mA,
}

impl fmt::Display for DriveStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drive4mA => write!(f, "4mA"),
            Self::Drive8mA => write!(f, "8mA"),
            Self::Drive12mA => write!(f, "12mA"),
        }
    }
}

/// Maps a pin and drive strength to its bitstream file,
/// `{prefix}{pin}_{strength}.jic`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitstreamNaming {
    prefix: String,
}

impl BitstreamNaming {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn path(&self, pin: &str, strength: DriveStrength) -> PathBuf {
        PathBuf::from(format!("{}{}_{}.jic", self.prefix, pin, strength))
    }
}
