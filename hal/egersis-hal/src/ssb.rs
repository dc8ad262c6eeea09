//! Synchronous serial port register block
//!
//! Register-level access to one clocked, frame-based serial port
//! (the kind used to bit-bang display controller commands). The bus
//! driver in the core crate owns arbitration and polling policy; this
//! trait only exposes the four registers involved.

/// One synchronous serial port
///
/// Associated constants pin down where the chip puts the two bits the
/// bus driver needs: the port-enable bit in control register 0 and the
/// busy flag in the status register.
pub trait SsbRegisters {
    /// Port-enable bit within control register 0
    const CONTROL0_ENABLE: u32;
    /// Busy flag within the status register (set while a frame drains)
    const STATUS_BUSY: u32;

    /// Read control register 0 (clock/frame configuration + enable)
    fn read_control0(&self) -> u32;

    /// Write control register 0
    fn write_control0(&mut self, value: u32);

    /// Write control register 1 (frame/interrupt configuration)
    fn write_control1(&mut self, value: u32);

    /// Read the status register
    fn read_status(&self) -> u32;

    /// Write the transmit data register
    fn write_data(&mut self, value: u32);
}
