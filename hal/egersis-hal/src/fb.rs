//! Frame-buffer controller register block
//!
//! The slice of the LCD controller the panel power sequence touches:
//! the main control register and the two status/clear registers.

/// Frame-buffer controller registers
pub trait FbRegisters {
    /// Controller-enable bit within the control register
    const CONTROL_ENABLE: u32;

    /// Read the control register
    fn read_control(&self) -> u32;

    /// Write the control register
    fn write_control(&mut self, value: u32);

    /// Write status register 0 (write-1-to-clear)
    fn write_status0(&mut self, value: u32);

    /// Write status register 1 (write-1-to-clear)
    fn write_status1(&mut self, value: u32);
}
