//! 24Cxx serial EEPROM over I2C
//!
//! Byte write: `START | dev+W | word address | data | STOP`.
//! Random read: `START | dev+W | word address | RESTART | dev+R | data | STOP`.
//!
//! After a byte write the device goes deaf for its internal write cycle
//! (up to 5 ms on most parts). With `write_poll_attempts > 0` the driver
//! probes the device with empty writes until it ACKs again, so the next
//! call never lands in the middle of a write cycle.

use latch_core::config::{AddressMode, EepromConfig};
use latch_core::traits::{EepromError, ExternalEeprom};
use latch_hal::I2cBus;

/// Device address and word address for one memory location
struct Target {
    device: u8,
    word: [u8; 2],
    word_len: usize,
}

impl Target {
    fn word(&self) -> &[u8] {
        &self.word[..self.word_len]
    }
}

/// I2C EEPROM driver
pub struct I2cEeprom<B> {
    bus: B,
    config: EepromConfig,
}

impl<B: I2cBus> I2cEeprom<B> {
    /// Create a driver for the EEPROM described by `config`
    ///
    /// Rejects configs that fail [`EepromConfig::validate`]; a capacity the
    /// addressing mode cannot reach would alias high addresses onto low ones.
    pub fn new(bus: B, config: EepromConfig) -> Result<Self, &'static str> {
        config.validate()?;
        Ok(Self { bus, config })
    }

    /// Get the driver configuration
    pub fn config(&self) -> &EepromConfig {
        &self.config
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }

    fn target(&self, address: u16) -> Result<Target, EepromError> {
        if u32::from(address) >= self.config.capacity {
            return Err(EepromError::AddressOutOfRange);
        }

        let [high, low] = address.to_be_bytes();
        let target = match self.config.addressing {
            AddressMode::BlockSelect => Target {
                device: self.config.device_address | (high & 0x07),
                word: [low, 0],
                word_len: 1,
            },
            AddressMode::TwoByte => Target {
                device: self.config.device_address,
                word: [high, low],
                word_len: 2,
            },
        };
        Ok(target)
    }

    /// Wait for the internal write cycle by acknowledge polling
    fn wait_write_cycle(&mut self, device: u8) -> Result<(), EepromError> {
        let attempts = self.config.write_poll_attempts;
        if attempts == 0 {
            return Ok(());
        }

        for _ in 0..attempts {
            if self.bus.write(device, &[]).is_ok() {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "EEPROM {=u8:#x} still busy after {=u16} polls",
            device,
            attempts
        );
        Err(EepromError::WriteTimeout)
    }
}

impl<B: I2cBus> ExternalEeprom for I2cEeprom<B> {
    fn capacity(&self) -> u32 {
        self.config.capacity
    }

    fn write_byte(&mut self, address: u16, data: u8) -> Result<(), EepromError> {
        let target = self.target(address)?;

        let mut frame = [0u8; 3];
        let len = target.word_len;
        frame[..len].copy_from_slice(target.word());
        frame[len] = data;

        self.bus.write(target.device, &frame[..=len]).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("EEPROM write at {=u16:#x} failed", address);
            EepromError::Bus
        })?;

        self.wait_write_cycle(target.device)
    }

    fn read_byte(&mut self, address: u16) -> Result<u8, EepromError> {
        let target = self.target(address)?;

        let mut data = [0u8; 1];
        self.bus
            .write_read(target.device, target.word(), &mut data)
            .map_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("EEPROM read at {=u16:#x} failed", address);
                EepromError::Bus
            })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("EEPROM read {=u16:#x} = {=u8:#x}", address, data[0]);

        Ok(data[0])
    }
}
