//! Buzzer trait

/// An on/off audible indicator
///
/// Both operations are unconditional and idempotent: `on` while already
/// on (or `off` while already off) leaves the output unchanged.
pub trait Buzzer {
    /// Start sounding
    fn on(&mut self);

    /// Stop sounding
    fn off(&mut self);

    /// Check if the buzzer is currently sounding
    fn is_on(&self) -> bool;

    /// Switch to the given state
    fn set_on(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }
}
