//! Peripheral driver implementations
//!
//! This crate provides concrete implementations of the contracts defined
//! in latch-core:
//!
//! - Buzzer on a single GPIO line
//! - External EEPROM over I2C (24Cxx family)
//! - RAM-backed EEPROM for host builds and tests
//! - Adapters from embedded-hal 1.0 pins and buses to the latch-hal traits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod eeprom;
pub mod eh;

pub use buzzer::GpioBuzzer;
pub use eeprom::{I2cEeprom, MemoryEeprom};
