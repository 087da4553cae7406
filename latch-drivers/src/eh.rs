//! embedded-hal 1.0 adapters
//!
//! Lets any chip HAL from the embedded-hal ecosystem back the Latch drivers:
//! a single output pin stands in for the port/pin addressed
//! [`GpioDriver`], and an `embedded_hal::i2c::I2c` bus for [`I2cBus`].

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use latch_hal::{GpioDriver, I2cBus, Level, PinDirection, PinId, PortId};

fn infallible(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// One embedded-hal output pin bound to a port/pin pair
///
/// Calls naming any other port/pin are ignored. The output level is
/// tracked here because reading back a pin needs `&mut` in embedded-hal.
pub struct EhOutputPin<P> {
    pin: P,
    port: PortId,
    id: PinId,
    level: Level,
}

impl<P: OutputPin<Error = Infallible>> EhOutputPin<P> {
    /// Bind `pin` to the given port/pin pair
    ///
    /// The level is unknown until the first write and reads back as LOW.
    pub fn new(pin: P, port: PortId, id: PinId) -> Self {
        Self {
            pin,
            port,
            id,
            level: Level::Low,
        }
    }

    /// Release the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }

    fn owns(&self, port: PortId, pin: PinId) -> bool {
        self.port == port && self.id == pin
    }
}

impl<P: OutputPin<Error = Infallible>> GpioDriver for EhOutputPin<P> {
    fn setup_pin_direction(&mut self, port: PortId, pin: PinId, direction: PinDirection) {
        // The type of an embedded-hal output pin already fixes its direction
        if self.owns(port, pin) && direction == PinDirection::Output {
            return;
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("Ignoring direction {} for {} {}", direction, port, pin);
    }

    fn write_pin(&mut self, port: PortId, pin: PinId, level: Level) {
        if !self.owns(port, pin) {
            #[cfg(feature = "defmt")]
            defmt::trace!("Ignoring write to unbound pin {} {}", port, pin);
            return;
        }
        infallible(match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        });
        self.level = level;
    }

    fn read_pin(&self, port: PortId, pin: PinId) -> Level {
        if self.owns(port, pin) {
            self.level
        } else {
            Level::Low
        }
    }
}

/// embedded-hal I2C bus as an [`I2cBus`]
pub struct EhI2c<I> {
    i2c: I,
}

impl<I: I2c> EhI2c<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the wrapped bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for EhI2c<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(address, write_data, read_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GpioBuzzer, I2cEeprom};
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, NoAcknowledgeSource, Operation};
    use latch_core::config::EepromConfig;
    use latch_core::traits::{Buzzer, EepromError, ExternalEeprom};

    /// Pin counting how often it was driven
    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    /// 24C02 behind an embedded-hal bus
    struct MockI2c {
        address: u8,
        pointer: u8,
        cells: [u8; 256],
    }

    impl MockI2c {
        fn new(address: u8) -> Self {
            Self {
                address,
                pointer: 0,
                cells: [0xFF; 256],
            }
        }
    }

    impl I2cErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), ErrorKind> {
            if address != self.address {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((&word, rest)) = bytes.split_first() {
                            self.pointer = word;
                            if let Some(&value) = rest.first() {
                                self.cells[usize::from(word)] = value;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for slot in buf.iter_mut() {
                            *slot = self.cells[usize::from(self.pointer)];
                            self.pointer = self.pointer.wrapping_add(1);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_buzzer_on_embedded_hal_pin() {
        let pin = EhOutputPin::new(MockPin::default(), PortId::A, PinId::P0);
        let mut buzzer = GpioBuzzer::init(pin);
        assert!(!buzzer.is_on());

        buzzer.on();
        assert!(buzzer.is_on());

        let pin = buzzer.release().release();
        assert!(pin.high);
        // init LOW, then on
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn test_other_pins_ignored() {
        let mut pin = EhOutputPin::new(MockPin::default(), PortId::B, PinId::P3);

        pin.write_pin(PortId::B, PinId::P4, Level::High);
        pin.write_pin(PortId::A, PinId::P3, Level::High);
        assert_eq!(pin.read_pin(PortId::B, PinId::P3), Level::Low);

        pin.write_pin(PortId::B, PinId::P3, Level::High);
        assert_eq!(pin.read_pin(PortId::B, PinId::P3), Level::High);
        assert_eq!(pin.read_pin(PortId::B, PinId::P4), Level::Low);
        assert_eq!(pin.release().writes, 1);
    }

    #[test]
    fn test_eeprom_on_embedded_hal_bus() {
        let config = EepromConfig::at24c02();
        let mut eeprom = I2cEeprom::new(EhI2c::new(MockI2c::new(0x50)), config).unwrap();

        eeprom.write_byte(0x10, 0xC3).unwrap();
        assert_eq!(eeprom.read_byte(0x10), Ok(0xC3));
        assert_eq!(eeprom.release().release().cells[0x10], 0xC3);
    }

    #[test]
    fn test_missing_device_is_bus_error() {
        let config = EepromConfig::at24c02();
        let mut eeprom = I2cEeprom::new(EhI2c::new(MockI2c::new(0x57)), config).unwrap();

        assert_eq!(eeprom.read_byte(0x10), Err(EepromError::Bus));
        assert_eq!(eeprom.write_byte(0x10, 1), Err(EepromError::Bus));
    }
}
