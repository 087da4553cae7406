//! TOML board configuration
//!
//! Every key is optional; anything left out keeps its compile-time default.
//!
//! ```toml
//! [buzzer]
//! port = "A"
//! pin = 0
//!
//! [eeprom]
//! device_address = 0x50
//! addressing = "block_select"   # or "two_byte"
//! capacity = 2048
//! write_poll_attempts = 100
//! ```

use serde::Deserialize;

use latch_hal::{PinId, PortId};

use super::board::{AddressMode, BoardConfig};

/// Configuration load error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Not valid TOML, unknown key, or a value of the wrong type
    Parse,
    /// Well-formed but physically meaningless value
    Invalid(&'static str),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBoard {
    buzzer: Option<RawBuzzer>,
    eeprom: Option<RawEeprom>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBuzzer {
    port: Option<char>,
    pin: Option<u8>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEeprom {
    device_address: Option<u8>,
    addressing: Option<RawAddressMode>,
    capacity: Option<u32>,
    write_poll_attempts: Option<u16>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawAddressMode {
    BlockSelect,
    TwoByte,
}

impl From<RawAddressMode> for AddressMode {
    fn from(raw: RawAddressMode) -> Self {
        match raw {
            RawAddressMode::BlockSelect => AddressMode::BlockSelect,
            RawAddressMode::TwoByte => AddressMode::TwoByte,
        }
    }
}

impl BoardConfig {
    /// Parse board configuration, starting from the defaults
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Self::default().merge_toml(input)
    }

    /// Apply the keys present in `input` on top of `self`
    pub fn merge_toml(mut self, input: &str) -> Result<Self, ConfigError> {
        let raw: RawBoard = ::toml::from_str(input).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Board config is not valid TOML");
            ConfigError::Parse
        })?;

        if let Some(buzzer) = raw.buzzer {
            if let Some(port) = buzzer.port {
                self.buzzer.port =
                    PortId::from_letter(port).ok_or(ConfigError::Invalid("buzzer.port"))?;
            }
            if let Some(pin) = buzzer.pin {
                self.buzzer.pin = PinId::from_u8(pin).ok_or(ConfigError::Invalid("buzzer.pin"))?;
            }
        }

        if let Some(eeprom) = raw.eeprom {
            if let Some(address) = eeprom.device_address {
                self.eeprom.device_address = address;
            }
            if let Some(mode) = eeprom.addressing {
                self.eeprom.addressing = mode.into();
            }
            if let Some(capacity) = eeprom.capacity {
                self.eeprom.capacity = capacity;
            }
            if let Some(attempts) = eeprom.write_poll_attempts {
                self.eeprom.write_poll_attempts = attempts;
            }
        }

        self.validate().map_err(ConfigError::Invalid)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Board config loaded: {}", self);

        Ok(self)
    }
}
