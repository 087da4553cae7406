//! GPIO buzzer
//!
//! Active buzzer driven directly from a digital output: pin HIGH sounds,
//! pin LOW is silent.

use latch_core::config::BuzzerConfig;
use latch_core::traits::Buzzer;
use latch_hal::{GpioDriver, Level, PinDirection};

/// Buzzer on one GPIO line
///
/// The only state is the physical pin level; [`is_on`](Buzzer::is_on)
/// reads it back through the GPIO driver.
pub struct GpioBuzzer<G> {
    gpio: G,
    config: BuzzerConfig,
}

impl<G: GpioDriver> GpioBuzzer<G> {
    /// Initialize the buzzer on the default pin
    pub fn init(gpio: G) -> Self {
        Self::init_with(gpio, BuzzerConfig::default())
    }

    /// Initialize the buzzer on a configured pin
    ///
    /// Sets the pin direction to output, then drives it LOW so the buzzer
    /// starts silent.
    pub fn init_with(mut gpio: G, config: BuzzerConfig) -> Self {
        gpio.setup_pin_direction(config.port, config.pin, PinDirection::Output);
        gpio.write_pin(config.port, config.pin, Level::Low);
        Self { gpio, config }
    }

    /// Pin wiring this buzzer was initialized with
    pub fn config(&self) -> BuzzerConfig {
        self.config
    }

    /// Get access to the underlying GPIO driver
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Release the GPIO driver
    ///
    /// The pin is left at whatever level it was last driven to.
    pub fn release(self) -> G {
        self.gpio
    }
}

impl<G: GpioDriver> Buzzer for GpioBuzzer<G> {
    fn on(&mut self) {
        self.gpio
            .write_pin(self.config.port, self.config.pin, Level::High);
    }

    fn off(&mut self) {
        self.gpio
            .write_pin(self.config.port, self.config.pin, Level::Low);
    }

    fn is_on(&self) -> bool {
        self.gpio
            .read_pin(self.config.port, self.config.pin)
            .is_high()
    }
}
