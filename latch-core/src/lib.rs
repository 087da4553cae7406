//! Board-agnostic core for the Latch peripheral drivers
//!
//! This crate contains everything that does not depend on a concrete
//! driver implementation:
//!
//! - Driver contracts (buzzer, external EEPROM)
//! - EEPROM status and error types
//! - Board configuration (buzzer pin, EEPROM bus parameters)
//!
//! # Features
//!
//! - `defmt`: `defmt::Format` for every public type
//! - `toml`: `config::BoardConfig::from_toml` board overrides. The TOML
//!   loader and its tests only build with this feature on, so run
//!   `cargo test -p latch-core --features toml` (or `--all-features`) to
//!   cover them.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;

pub use latch_hal::{Level, PinDirection, PinId, PortId};
