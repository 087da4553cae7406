//! External EEPROM implementations

pub mod i2c;
pub mod memory;

pub use i2c::I2cEeprom;
pub use memory::MemoryEeprom;
