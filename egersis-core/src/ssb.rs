//! Synchronous-serial bus driver
//!
//! One clocked serial port shared by whoever needs to reach a device
//! behind it. Access is arbitrated through a move-only handle: `acquire`
//! mints it, every operation requires it, `release` consumes it. A
//! caller holding no handle cannot touch the port, and a released
//! handle cannot be reused.
//!
//! `send_command` is a blocking, non-suspending primitive: it spins on
//! the port's busy flag with a fixed iteration bound because it runs
//! inside interrupt-masked sequences where nothing could wake a sleeper.

use egersis_hal::SsbRegisters;

/// Iterations of busy-flag polling before a transfer is declared dead.
///
/// At the slowest clock profile in use a 16-bit frame drains in well
/// under 100 status reads; 1000 leaves an order of magnitude of
/// headroom while still failing in microseconds on dead hardware.
pub const STATUS_POLL_LIMIT: u32 = 1000;

/// Identifies one physical serial port on the SoC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusId(pub u8);

/// Serial bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Another owner currently holds the bus
    Busy,
    /// The busy flag never cleared within [`STATUS_POLL_LIMIT`] polls
    Timeout,
}

/// Clock configuration: raw control-0 register image, port-enable bit
/// excluded (the driver manages that bit itself)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig(u32);

impl ClockConfig {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Frame configuration: raw control-1 register image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameConfig(u32);

impl FrameConfig {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Proof of exclusive bus ownership
///
/// Minted by [`SsbBus::acquire`], consumed by [`SsbBus::release`].
/// Deliberately neither `Clone` nor `Copy`: after release the handle is
/// gone and stale use does not compile.
#[derive(Debug)]
pub struct SsbHandle {
    bus: u8,
}

/// Driver for one synchronous serial port
pub struct SsbBus<R: SsbRegisters> {
    id: BusId,
    regs: R,
    owner: Option<&'static str>,
}

impl<R: SsbRegisters> SsbBus<R> {
    pub fn new(id: BusId, regs: R) -> Self {
        Self {
            id,
            regs,
            owner: None,
        }
    }

    pub fn id(&self) -> BusId {
        self.id
    }

    /// Current owner label, if the bus is held
    pub fn owner(&self) -> Option<&'static str> {
        self.owner
    }

    /// Read-only view of the underlying register block
    pub fn regs(&self) -> &R {
        &self.regs
    }

    /// Take exclusive ownership of the bus
    ///
    /// Fails with [`BusError::Busy`] while another owner holds it;
    /// never blocks waiting for the bus to free up.
    pub fn acquire(&mut self, owner: &'static str) -> Result<SsbHandle, BusError> {
        if self.owner.is_some() {
            return Err(BusError::Busy);
        }
        self.owner = Some(owner);
        Ok(SsbHandle { bus: self.id.0 })
    }

    /// Program clock and frame parameters
    ///
    /// Takes effect before the next transmit. The port-enable bit is
    /// stripped from the clock image; enabling is a separate step.
    pub fn configure(&mut self, handle: &SsbHandle, clock: ClockConfig, frame: FrameConfig) {
        self.check(handle);
        self.regs.write_control0(clock.raw() & !R::CONTROL0_ENABLE);
        self.regs.write_control1(frame.raw());
    }

    /// Set the port-enable bit, preserving the rest of control-0
    pub fn enable(&mut self, handle: &SsbHandle) {
        self.check(handle);
        let control = self.regs.read_control0();
        self.regs.write_control0(control | R::CONTROL0_ENABLE);
    }

    /// Clear the port-enable bit, preserving the rest of control-0
    pub fn disable(&mut self, handle: &SsbHandle) {
        self.check(handle);
        let control = self.regs.read_control0();
        self.regs.write_control0(control & !R::CONTROL0_ENABLE);
    }

    /// Wait for any in-flight frame to drain
    pub fn wait_idle(&mut self, handle: &SsbHandle) -> Result<(), BusError> {
        self.check(handle);
        self.poll_idle()
    }

    /// Transmit one 16-bit command frame
    ///
    /// Writes the data register, then spins on the busy flag until the
    /// frame has drained or [`STATUS_POLL_LIMIT`] polls have elapsed.
    pub fn send_command(&mut self, handle: &SsbHandle, value: u16) -> Result<(), BusError> {
        self.check(handle);
        self.regs.write_data(u32::from(value));
        self.poll_idle()
    }

    /// Give the bus up; the handle cannot outlive this call
    pub fn release(&mut self, handle: SsbHandle) {
        self.check(&handle);
        self.owner = None;
    }

    fn poll_idle(&mut self) -> Result<(), BusError> {
        for _ in 0..STATUS_POLL_LIMIT {
            if self.regs.read_status() & R::STATUS_BUSY == 0 {
                return Ok(());
            }
        }
        Err(BusError::Timeout)
    }

    fn check(&self, handle: &SsbHandle) {
        debug_assert_eq!(handle.bus, self.id.0, "handle from a different bus");
        debug_assert!(self.owner.is_some(), "operation on an unowned bus");
    }
}
