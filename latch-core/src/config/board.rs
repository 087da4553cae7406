//! Board configuration types
//!
//! Buzzer wiring and external EEPROM bus parameters.

use latch_hal::i2c::MAX_ADDRESS;
use latch_hal::{PinId, PortId};

/// Port the buzzer is wired to
pub const BUZZER_PORT_ID: PortId = PortId::A;

/// Pin the buzzer is wired to
pub const BUZZER_PIN_ID: PinId = PinId::P0;

/// Base 7-bit address of a 24Cxx serial EEPROM (A2..A0 tied low)
pub const EEPROM_BASE_ADDRESS: u8 = 0x50;

/// Buzzer wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerConfig {
    pub port: PortId,
    pub pin: PinId,
}

impl BuzzerConfig {
    /// Create a buzzer config for the given port/pin pair
    pub const fn new(port: PortId, pin: PinId) -> Self {
        Self { port, pin }
    }
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self::new(BUZZER_PORT_ID, BUZZER_PIN_ID)
    }
}

/// How the memory address is sent to the EEPROM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressMode {
    /// One word-address byte; address bits 8..10 select the block through
    /// the low three bits of the device address (24C01 to 24C16)
    BlockSelect,
    /// Two word-address bytes, high byte first (24C32 and larger)
    TwoByte,
}

impl AddressMode {
    /// Largest capacity this addressing scheme can reach
    pub const fn max_capacity(self) -> u32 {
        match self {
            AddressMode::BlockSelect => 2048,
            AddressMode::TwoByte => 65536,
        }
    }
}

/// External EEPROM configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EepromConfig {
    /// 7-bit I2C device address (block bits cleared in block-select mode)
    pub device_address: u8,
    /// Word-address layout
    pub addressing: AddressMode,
    /// Device size in bytes
    pub capacity: u32,
    /// Acknowledge polls after a write before giving up (0 = no polling)
    pub write_poll_attempts: u16,
}

impl EepromConfig {
    /// Default acknowledge polls, roughly 10 ms of probes at 100 kHz
    pub const DEFAULT_POLL_ATTEMPTS: u16 = 100;

    /// 24C02: 256 bytes
    pub const fn at24c02() -> Self {
        Self {
            device_address: EEPROM_BASE_ADDRESS,
            addressing: AddressMode::BlockSelect,
            capacity: 256,
            write_poll_attempts: Self::DEFAULT_POLL_ATTEMPTS,
        }
    }

    /// 24C16: 2 KiB in eight 256-byte blocks
    pub const fn at24c16() -> Self {
        Self {
            device_address: EEPROM_BASE_ADDRESS,
            addressing: AddressMode::BlockSelect,
            capacity: 2048,
            write_poll_attempts: Self::DEFAULT_POLL_ATTEMPTS,
        }
    }

    /// 24C256: 32 KiB, two-byte addressing
    pub const fn at24c256() -> Self {
        Self {
            device_address: EEPROM_BASE_ADDRESS,
            addressing: AddressMode::TwoByte,
            capacity: 32768,
            write_poll_attempts: Self::DEFAULT_POLL_ATTEMPTS,
        }
    }

    /// Device address bits consumed by block selection
    pub const fn block_mask(&self) -> u8 {
        match self.addressing {
            AddressMode::BlockSelect if self.capacity > 256 => {
                (((self.capacity - 1) >> 8) & 0x07) as u8
            }
            _ => 0,
        }
    }

    /// Check the configuration is physically meaningful
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.device_address > MAX_ADDRESS {
            return Err("device_address is not a 7-bit address");
        }
        if self.capacity == 0 {
            return Err("capacity must be non-zero");
        }
        if self.capacity > self.addressing.max_capacity() {
            return Err("capacity exceeds what the addressing mode can reach");
        }
        if self.device_address & self.block_mask() != 0 {
            return Err("device_address overlaps block select bits");
        }
        Ok(())
    }
}

impl Default for EepromConfig {
    fn default() -> Self {
        Self::at24c16()
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub buzzer: BuzzerConfig,
    pub eeprom: EepromConfig,
}

impl BoardConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), &'static str> {
        self.eeprom.validate()
    }
}
