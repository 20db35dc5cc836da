use std::fmt;

type Offset = usize;

/// A byte address where two bitstreams differ. `value_a ^ value_b` is never 0.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DiffRecord {
    address: Offset,
    value_a: u8,
    value_b: u8,
}

impl DiffRecord {
    /// `None` when both values are equal.
    pub fn new(address: Offset, value_a: u8, value_b: u8) -> Option<Self> {
        if value_a == value_b {
            return None;
        }
        Some(Self {
            address,
            value_a,
            value_b,
        })
    }

    pub fn address(&self) -> Offset {
        self.address
    }

    pub fn value_a(&self) -> u8 {
        self.value_a
    }

    pub fn value_b(&self) -> u8 {
        self.value_b
    }

    pub fn xor(&self) -> u8 {
        self.value_a ^ self.value_b
    }

    pub fn is_single_bit(&self) -> bool {
        self.xor().count_ones() == 1
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiffRecord(address={:#x}, a={:#04x}, b={:#04x})",
            self.address, self.value_a, self.value_b
        )
    }
}
