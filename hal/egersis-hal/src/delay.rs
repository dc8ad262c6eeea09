//! Busy-wait time source
//!
//! The bring-up sequences hold GPIO levels for datasheet-mandated
//! microsecond windows while interrupts are masked, so the delay source
//! must spin rather than sleep.

/// Microsecond busy-wait
pub trait DelayUs {
    /// Block for at least `us` microseconds without yielding
    fn delay_us(&mut self, us: u32);
}
