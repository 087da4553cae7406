//! RAM-backed EEPROM
//!
//! Stands in for the external part on host builds and in application
//! tests. Starts out erased (every cell `0xFF`) like a fresh device.

use latch_core::traits::{EepromError, ExternalEeprom};

/// Erased cell value
pub const ERASED: u8 = 0xFF;

/// EEPROM of `N` bytes held in RAM
pub struct MemoryEeprom<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> Default for MemoryEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryEeprom<N> {
    /// Create an erased EEPROM
    pub const fn new() -> Self {
        Self { cells: [ERASED; N] }
    }

    /// Create an EEPROM preloaded with an image
    pub const fn from_image(cells: [u8; N]) -> Self {
        Self { cells }
    }

    /// Current contents
    pub fn image(&self) -> &[u8; N] {
        &self.cells
    }

    /// Reset every cell to the erased value
    pub fn erase(&mut self) {
        self.cells = [ERASED; N];
    }
}

impl<const N: usize> ExternalEeprom for MemoryEeprom<N> {
    fn capacity(&self) -> u32 {
        N as u32
    }

    fn write_byte(&mut self, address: u16, data: u8) -> Result<(), EepromError> {
        let cell = self
            .cells
            .get_mut(usize::from(address))
            .ok_or(EepromError::AddressOutOfRange)?;
        *cell = data;
        Ok(())
    }

    fn read_byte(&mut self, address: u16) -> Result<u8, EepromError> {
        self.cells
            .get(usize::from(address))
            .copied()
            .ok_or(EepromError::AddressOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latch_core::traits::EepromStatus;
    use proptest::prelude::*;

    #[test]
    fn test_starts_erased() {
        let mut eeprom = MemoryEeprom::<16>::new();
        assert_eq!(eeprom.capacity(), 16);
        assert_eq!(eeprom.read_byte(0), Ok(ERASED));
        assert_eq!(eeprom.read_byte(15), Ok(ERASED));
    }

    #[test]
    fn test_out_of_range() {
        let mut eeprom = MemoryEeprom::<16>::new();
        assert_eq!(eeprom.write_byte(16, 0), Err(EepromError::AddressOutOfRange));
        assert_eq!(eeprom.read_byte(16), Err(EepromError::AddressOutOfRange));
        assert_eq!(eeprom.write_byte_status(100, 0), EepromStatus::Error);
    }

    #[test]
    fn test_image_and_erase() {
        let mut eeprom = MemoryEeprom::from_image([1, 2, 3, 4]);
        assert_eq!(eeprom.read_byte(2), Ok(3));

        eeprom.write_bytes(0, &[9, 9]).unwrap();
        assert_eq!(eeprom.image(), &[9, 9, 3, 4]);

        eeprom.erase();
        assert_eq!(eeprom.image(), &[ERASED; 4]);
    }

    #[test]
    fn test_full_u16_space() {
        let mut eeprom = MemoryEeprom::<65536>::new();
        eeprom.write_byte(u16::MAX, 0x5A).unwrap();
        assert_eq!(eeprom.read_byte(u16::MAX), Ok(0x5A));
    }

    proptest! {
        #[test]
        fn prop_round_trip(address in 0u16..2048, data in any::<u8>()) {
            let mut eeprom = MemoryEeprom::<2048>::new();
            prop_assert_eq!(eeprom.write_byte_status(address, data), EepromStatus::Success);

            let mut out = !data;
            prop_assert_eq!(eeprom.read_byte_status(address, &mut out), EepromStatus::Success);
            prop_assert_eq!(out, data);
        }
    }
}
