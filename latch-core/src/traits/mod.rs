//! Driver contracts
//!
//! These traits define the interface between application logic and the
//! peripheral driver implementations.

pub mod buzzer;
pub mod eeprom;

pub use buzzer::Buzzer;
pub use eeprom::{EepromError, EepromStatus, ExternalEeprom};
