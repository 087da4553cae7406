//! Configuration types
//!
//! Compile-time defaults for the control unit wiring, plus the structures
//! drivers are constructed from. With the `toml` feature the defaults can
//! be overridden from board configuration text (tests included, so
//! `cargo test --features toml` exercises the loader).

pub mod board;
#[cfg(feature = "toml")]
pub mod toml;

pub use board::*;
#[cfg(feature = "toml")]
pub use self::toml::ConfigError;
