//! Adapters for `embedded-hal` 1.0 implementations
//!
//! Boards that already have ecosystem pin/delay drivers can wrap them
//! in these newtypes instead of re-implementing the local traits.

use core::convert::Infallible;

use crate::delay::DelayUs;
use crate::gpio::OutputPin;

/// Wraps an infallible `embedded_hal::digital::OutputPin`
pub struct EhalOutputPin<P>(pub P);

impl<P> OutputPin for EhalOutputPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.0.set_high() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match self.0.set_low() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }
}

/// Wraps an `embedded_hal::delay::DelayNs`
pub struct EhalDelay<D>(pub D);

impl<D: embedded_hal::delay::DelayNs> DelayUs for EhalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }
}
