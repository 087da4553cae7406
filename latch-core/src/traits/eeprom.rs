//! External EEPROM contract
//!
//! Byte-granular random access to non-volatile storage addressed by a
//! 16-bit offset. The transport (serial bus, RAM, ...) is left to the
//! implementation.

/// Two-valued result of an EEPROM operation
///
/// The discriminants are the values the control unit has always used on
/// the wire between its layers: `ERROR = 0`, `SUCCESS = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EepromStatus {
    Error = 0,
    Success = 1,
}

impl EepromStatus {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn is_success(self) -> bool {
        matches!(self, EepromStatus::Success)
    }
}

impl<T, E> From<&Result<T, E>> for EepromStatus {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => EepromStatus::Success,
            Err(_) => EepromStatus::Error,
        }
    }
}

/// Errors from EEPROM operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError {
    /// Bus transfer failed (NACK, arbitration lost, device absent)
    Bus,
    /// Address is beyond the device capacity
    AddressOutOfRange,
    /// Device did not finish its internal write cycle in time
    WriteTimeout,
}

/// External EEPROM byte access
pub trait ExternalEeprom {
    /// Number of addressable bytes
    fn capacity(&self) -> u32;

    /// Persist one byte at `address`
    fn write_byte(&mut self, address: u16, data: u8) -> Result<(), EepromError>;

    /// Read the byte stored at `address`
    fn read_byte(&mut self, address: u16) -> Result<u8, EepromError>;

    /// Status-returning form of [`write_byte`](Self::write_byte)
    fn write_byte_status(&mut self, address: u16, data: u8) -> EepromStatus {
        EepromStatus::from(&self.write_byte(address, data))
    }

    /// Status-returning form of [`read_byte`](Self::read_byte)
    ///
    /// `data` is only written on success.
    fn read_byte_status(&mut self, address: u16, data: &mut u8) -> EepromStatus {
        match self.read_byte(address) {
            Ok(value) => {
                *data = value;
                EepromStatus::Success
            }
            Err(_) => EepromStatus::Error,
        }
    }

    /// Write consecutive bytes starting at `start`, stopping at the first error
    fn write_bytes(&mut self, start: u16, data: &[u8]) -> Result<(), EepromError> {
        for (offset, &byte) in data.iter().enumerate() {
            self.write_byte(offset_address(start, offset)?, byte)?;
        }
        Ok(())
    }

    /// Fill `buf` from consecutive bytes starting at `start`
    fn read_bytes(&mut self, start: u16, buf: &mut [u8]) -> Result<(), EepromError> {
        for (offset, slot) in buf.iter_mut().enumerate() {
            *slot = self.read_byte(offset_address(start, offset)?)?;
        }
        Ok(())
    }
}

impl<T: ExternalEeprom + ?Sized> ExternalEeprom for &mut T {
    fn capacity(&self) -> u32 {
        (**self).capacity()
    }

    fn write_byte(&mut self, address: u16, data: u8) -> Result<(), EepromError> {
        (**self).write_byte(address, data)
    }

    fn read_byte(&mut self, address: u16) -> Result<u8, EepromError> {
        (**self).read_byte(address)
    }
}

fn offset_address(start: u16, offset: usize) -> Result<u16, EepromError> {
    u16::try_from(offset)
        .ok()
        .and_then(|offset| start.checked_add(offset))
        .ok_or(EepromError::AddressOutOfRange)
}
