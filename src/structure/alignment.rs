// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    pub const BYTE: Alignment = Alignment { value: 1 };

    pub fn new(value: usize) -> Self {
        assert!(value > 0 && value.is_power_of_two());
        Self { value }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    /// Rounds `offset` up to the next multiple of this alignment.
    pub fn align(&self, offset: usize) -> usize {
        (offset + self.value - 1) & !(self.value - 1)
    }

    pub fn raise_to(&mut self, value: usize) {
        if self.value < value {
            *self = Self::new(value);
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::BYTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_rounds_up() {
        let align = Alignment::new(8);
        assert_eq!(align.align(0), 0);
        assert_eq!(align.align(1), 8);
        assert_eq!(align.align(8), 8);
        assert_eq!(align.align(17), 24);
    }

    #[test]
    fn test_raise_never_lowers() {
        let mut align = Alignment::default();
        align.raise_to(4);
        align.raise_to(2);
        assert_eq!(align.as_usize(), 4);
    }
}
