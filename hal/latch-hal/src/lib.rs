//! Latch Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the Latch drivers are
//! written against. A chip-specific port (register-level GPIO and TWI code)
//! or an adapter over another HAL implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (door lock control unit)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  latch-drivers (buzzer, EEPROM)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  latch-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ chip register │       │ embedded-hal  │
//! │    driver     │       │   adapters    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioDriver`] - Port/pin addressed digital I/O
//! - [`i2c::I2cBus`] - I2C (two-wire) bus master operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{GpioDriver, Level, PinDirection, PinId, PortId};
pub use i2c::{I2cBus, I2cConfig};
