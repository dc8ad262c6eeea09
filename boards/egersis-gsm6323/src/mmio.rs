//! Volatile MMIO implementations of the HAL traits
//!
//! Every type here reads and writes physical addresses from [`crate::reg`]
//! and is therefore unsafe to construct: the caller asserts that the
//! address space is mapped and that no other context drives the same
//! block.

use egersis_hal::{
    FbRegisters, IrqControl, Level, OutputPin, PinFunction, PinMux, SsbRegisters, WakePolicy,
};

use crate::reg;

fn rd(addr: usize) -> u32 {
    unsafe { (addr as *const u32).read_volatile() }
}

fn wr(addr: usize, value: u32) {
    unsafe { (addr as *mut u32).write_volatile(value) }
}

fn rmw(addr: usize, clear: u32, set: u32) {
    wr(addr, (rd(addr) & !clear) | set);
}

/// GPIO bank bookkeeping: banks 0-2 are contiguous, bank 3 is windowed
fn bank_reg(bank0: usize, bank3: usize, pin: u8) -> usize {
    let bank = usize::from(pin / 32);
    if bank < 3 {
        reg::gpio::BASE + bank0 + 4 * bank
    } else {
        reg::gpio::BASE + bank3
    }
}

/// LCD controller register file
pub struct LcdRegs {
    _private: (),
}

impl LcdRegs {
    /// # Safety
    /// Sole access to the LCD controller block.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl FbRegisters for LcdRegs {
    const CONTROL_ENABLE: u32 = reg::lcd::LCCR0_ENB;

    fn read_control(&self) -> u32 {
        rd(reg::lcd::BASE + reg::lcd::LCCR0)
    }

    fn write_control(&mut self, value: u32) {
        wr(reg::lcd::BASE + reg::lcd::LCCR0, value);
    }

    fn write_status0(&mut self, value: u32) {
        wr(reg::lcd::BASE + reg::lcd::LCSR0, value);
    }

    fn write_status1(&mut self, value: u32) {
        wr(reg::lcd::BASE + reg::lcd::LCSR1, value);
    }
}

/// Synchronous serial port 3 register file
pub struct Ssp3Regs {
    _private: (),
}

impl Ssp3Regs {
    /// # Safety
    /// Sole access to the SSP3 block.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl SsbRegisters for Ssp3Regs {
    const CONTROL0_ENABLE: u32 = reg::ssp3::SSCR0_SSE;
    const STATUS_BUSY: u32 = reg::ssp3::SSSR_BSY;

    fn read_control0(&self) -> u32 {
        rd(reg::ssp3::BASE + reg::ssp3::SSCR0)
    }

    fn write_control0(&mut self, value: u32) {
        wr(reg::ssp3::BASE + reg::ssp3::SSCR0, value);
    }

    fn write_control1(&mut self, value: u32) {
        wr(reg::ssp3::BASE + reg::ssp3::SSCR1, value);
    }

    fn read_status(&self) -> u32 {
        rd(reg::ssp3::BASE + reg::ssp3::SSSR)
    }

    fn write_data(&mut self, value: u32) {
        wr(reg::ssp3::BASE + reg::ssp3::SSDR, value);
    }
}

/// One GPIO pin in output mode
pub struct GpioOutput {
    pin: u8,
}

impl GpioOutput {
    /// # Safety
    /// The pin must be mux'd as a GPIO output and not driven elsewhere.
    pub const unsafe fn new(pin: u8) -> Self {
        Self { pin }
    }
}

impl OutputPin for GpioOutput {
    fn set_high(&mut self) {
        let addr = bank_reg(reg::gpio::GPSR0, reg::gpio::GPSR3, self.pin);
        wr(addr, 1 << (self.pin % 32));
    }

    fn set_low(&mut self) {
        let addr = bank_reg(reg::gpio::GPCR0, reg::gpio::GPCR3, self.pin);
        wr(addr, 1 << (self.pin % 32));
    }
}

/// The SoC pin multiplexer
pub struct MfpBlock {
    _private: (),
}

impl MfpBlock {
    /// # Safety
    /// Sole access to the GAFR/GPDR/wake register files.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }

    fn set_alternate(&mut self, pin: u8, function: u8) {
        // Two bits per pin, eight contiguous registers cover pins 0-127
        let addr = reg::gpio::BASE + reg::gpio::GAFR0_L + 4 * usize::from(pin / 16);
        let shift = u32::from(pin % 16) * 2;
        rmw(addr, 0b11 << shift, u32::from(function & 0b11) << shift);
    }

    fn set_direction(&mut self, pin: u8, output: bool) {
        let addr = bank_reg(reg::gpio::GPDR0, reg::gpio::GPDR3, pin);
        let bit = 1 << (pin % 32);
        if output {
            rmw(addr, 0, bit);
        } else {
            rmw(addr, bit, 0);
        }
    }

    fn set_wake(&mut self, pin: u8, wake: WakePolicy) {
        let bit = 1u32 << (pin % 32);
        match wake {
            WakePolicy::None => {
                if pin < 32 {
                    rmw(reg::pm::BASE + reg::pm::PWER, bit, 0);
                }
            }
            WakePolicy::EdgeRising => {
                if pin < 32 {
                    rmw(reg::pm::BASE + reg::pm::PWER, 0, bit);
                    rmw(reg::pm::BASE + reg::pm::PRER, 0, bit);
                    rmw(reg::pm::BASE + reg::pm::PFER, bit, 0);
                }
            }
            WakePolicy::EdgeFalling => {
                if pin < 32 {
                    rmw(reg::pm::BASE + reg::pm::PWER, 0, bit);
                    rmw(reg::pm::BASE + reg::pm::PRER, bit, 0);
                    rmw(reg::pm::BASE + reg::pm::PFER, 0, bit);
                }
            }
            WakePolicy::EdgeBoth => {
                if pin < 32 {
                    rmw(reg::pm::BASE + reg::pm::PWER, 0, bit);
                    rmw(reg::pm::BASE + reg::pm::PRER, 0, bit);
                    rmw(reg::pm::BASE + reg::pm::PFER, 0, bit);
                }
            }
            // Level wake exists only for the keypad block (pins 96+)
            WakePolicy::LevelHigh | WakePolicy::LevelLow => {
                if pin >= 96 {
                    rmw(reg::pm::BASE + reg::pm::PKWR, 0, 1 << (pin - 96));
                }
            }
        }
    }
}

impl PinMux for MfpBlock {
    fn configure(&mut self, pin: u8, function: PinFunction, wake: WakePolicy) {
        match function {
            PinFunction::Alternate(af) => self.set_alternate(pin, af),
            PinFunction::Input => {
                self.set_alternate(pin, 0);
                self.set_direction(pin, false);
            }
            PinFunction::Output(level) => {
                self.set_alternate(pin, 0);
                // Drive the level before turning the pin around so it
                // never glitches through the opposite state
                let addr = match level {
                    Level::High => bank_reg(reg::gpio::GPSR0, reg::gpio::GPSR3, pin),
                    Level::Low => bank_reg(reg::gpio::GPCR0, reg::gpio::GPCR3, pin),
                };
                wr(addr, 1 << (pin % 32));
                self.set_direction(pin, true);
            }
        }
        self.set_wake(pin, wake);
    }
}

/// Calibrated spin delay
///
/// `loops_per_us` comes from the core clock; there is no timer to lean
/// on while interrupts are masked.
pub struct SpinDelay {
    loops_per_us: u32,
}

impl SpinDelay {
    pub const fn new(loops_per_us: u32) -> Self {
        Self { loops_per_us }
    }
}

impl egersis_hal::DelayUs for SpinDelay {
    fn delay_us(&mut self, us: u32) {
        for _ in 0..us.saturating_mul(self.loops_per_us) {
            core::hint::spin_loop();
        }
    }
}

/// Interrupt masking through the `critical-section` implementation the
/// platform links in
pub struct CpuIrq {
    _private: (),
}

impl CpuIrq {
    /// # Safety
    /// A `critical-section` implementation must be registered.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl IrqControl for CpuIrq {
    type Token = critical_section::RestoreState;

    fn save_and_disable(&mut self) -> Self::Token {
        unsafe { critical_section::acquire() }
    }

    fn restore(&mut self, token: Self::Token) {
        unsafe { critical_section::release(token) }
    }
}
