//! GPIO pin abstractions
//!
//! Pins are addressed the way an 8-bit AVR part lays them out: four ports
//! (A to D) of eight pins each. A [`GpioDriver`] owns every pin of the chip
//! and is told which one to touch on each call.

/// GPIO port identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PortId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl PortId {
    /// Number of ports on the chip
    pub const COUNT: usize = 4;

    /// Get the port as an index (A = 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Port from its letter, case-insensitive
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(PortId::A),
            'B' => Some(PortId::B),
            'C' => Some(PortId::C),
            'D' => Some(PortId::D),
            _ => None,
        }
    }

    /// Port letter (uppercase)
    pub const fn letter(self) -> char {
        match self {
            PortId::A => 'A',
            PortId::B => 'B',
            PortId::C => 'C',
            PortId::D => 'D',
        }
    }
}

/// Pin number within a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinId {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
}

impl PinId {
    /// Pins per port
    pub const COUNT: usize = 8;

    /// Get the pin number
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a pin id from its number
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(PinId::P0),
            1 => Some(PinId::P1),
            2 => Some(PinId::P2),
            3 => Some(PinId::P3),
            4 => Some(PinId::P4),
            5 => Some(PinId::P5),
            6 => Some(PinId::P6),
            7 => Some(PinId::P7),
            _ => None,
        }
    }

    /// Bit mask of this pin in its port register
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Logic level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Direction of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// High-impedance input (reset state)
    #[default]
    Input,
    /// Push-pull output
    Output,
}

/// Port/pin addressed GPIO driver
///
/// Implementations handle the direction and output registers of the chip.
/// Operations are infallible at this layer: an implementation that cannot
/// serve a port/pin pair ignores the call.
pub trait GpioDriver {
    /// Configure a pin as input or output
    fn setup_pin_direction(&mut self, port: PortId, pin: PinId, direction: PinDirection);

    /// Drive an output pin to the given level
    fn write_pin(&mut self, port: PortId, pin: PinId, level: Level);

    /// Read the current level of a pin
    ///
    /// For an output pin this is the level it is being driven to.
    fn read_pin(&self, port: PortId, pin: PinId) -> Level;

    /// Toggle an output pin
    fn toggle_pin(&mut self, port: PortId, pin: PinId) {
        let level = match self.read_pin(port, pin) {
            Level::High => Level::Low,
            Level::Low => Level::High,
        };
        self.write_pin(port, pin, level);
    }
}

impl<T: GpioDriver + ?Sized> GpioDriver for &mut T {
    fn setup_pin_direction(&mut self, port: PortId, pin: PinId, direction: PinDirection) {
        (**self).setup_pin_direction(port, pin, direction);
    }

    fn write_pin(&mut self, port: PortId, pin: PinId, level: Level) {
        (**self).write_pin(port, pin, level);
    }

    fn read_pin(&self, port: PortId, pin: PinId) -> Level {
        (**self).read_pin(port, pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Register-level model of the four 8-bit ports
    #[derive(Default)]
    struct PortRegisters {
        ddr: [u8; PortId::COUNT],
        port: [u8; PortId::COUNT],
    }

    impl GpioDriver for PortRegisters {
        fn setup_pin_direction(&mut self, port: PortId, pin: PinId, direction: PinDirection) {
            match direction {
                PinDirection::Output => self.ddr[port.index()] |= pin.mask(),
                PinDirection::Input => self.ddr[port.index()] &= !pin.mask(),
            }
        }

        fn write_pin(&mut self, port: PortId, pin: PinId, level: Level) {
            match level {
                Level::High => self.port[port.index()] |= pin.mask(),
                Level::Low => self.port[port.index()] &= !pin.mask(),
            }
        }

        fn read_pin(&self, port: PortId, pin: PinId) -> Level {
            (self.port[port.index()] & pin.mask() != 0).into()
        }
    }

    #[test]
    fn test_port_letters() {
        assert_eq!(PortId::from_letter('a'), Some(PortId::A));
        assert_eq!(PortId::from_letter('D'), Some(PortId::D));
        assert_eq!(PortId::from_letter('E'), None);
        assert_eq!(PortId::C.letter(), 'C');
    }

    #[test]
    fn test_pin_numbers() {
        assert_eq!(PinId::from_u8(0), Some(PinId::P0));
        assert_eq!(PinId::from_u8(7), Some(PinId::P7));
        assert_eq!(PinId::from_u8(8), None);
        assert_eq!(PinId::P5.mask(), 0b0010_0000);
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert_eq!(Level::default(), Level::Low);
    }

    #[test]
    fn test_toggle_only_touches_one_pin() {
        let mut regs = PortRegisters::default();
        regs.write_pin(PortId::B, PinId::P2, Level::High);

        regs.toggle_pin(PortId::B, PinId::P3);
        assert_eq!(regs.read_pin(PortId::B, PinId::P3), Level::High);
        assert_eq!(regs.read_pin(PortId::B, PinId::P2), Level::High);

        regs.toggle_pin(PortId::B, PinId::P3);
        assert_eq!(regs.read_pin(PortId::B, PinId::P3), Level::Low);
        assert_eq!(regs.port[PortId::B.index()], 0b0000_0100);
    }

    #[test]
    fn test_driver_through_mut_ref() {
        fn drive_high<G: GpioDriver>(mut gpio: G) {
            gpio.setup_pin_direction(PortId::A, PinId::P0, PinDirection::Output);
            gpio.write_pin(PortId::A, PinId::P0, Level::High);
        }

        let mut regs = PortRegisters::default();
        drive_high(&mut regs);
        assert_eq!(regs.ddr[0], 0b0000_0001);
        assert_eq!(regs.read_pin(PortId::A, PinId::P0), Level::High);
    }
}
