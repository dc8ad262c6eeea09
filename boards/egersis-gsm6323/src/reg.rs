//! PXA27x register map
//!
//! Physical base addresses and register offsets for the peripheral
//! blocks the bring-up touches. Offsets are in bytes from the block
//! base.

/// GPIO controller
pub mod gpio {
    pub const BASE: usize = 0x40E0_0000;

    /// Pin-level registers, banks 0-2 (pins 0-95)
    pub const GPLR0: usize = 0x00;
    /// Direction registers, banks 0-2
    pub const GPDR0: usize = 0x0C;
    /// Output-set registers, banks 0-2
    pub const GPSR0: usize = 0x18;
    /// Output-clear registers, banks 0-2
    pub const GPCR0: usize = 0x24;

    /// Bank 3 (pins 96-120) lives in a separate window
    pub const GPLR3: usize = 0x100;
    pub const GPDR3: usize = 0x10C;
    pub const GPSR3: usize = 0x118;
    pub const GPCR3: usize = 0x124;

    /// Alternate-function registers: two bits per pin, eight registers
    /// covering pins 0-127, contiguous from GAFR0_L
    pub const GAFR0_L: usize = 0x54;
}

/// Power manager (wake-up plumbing)
pub mod pm {
    pub const BASE: usize = 0x40F0_0000;

    /// Wake-up enable, pins 0-31
    pub const PWER: usize = 0x0C;
    /// Wake on rising edge, pins 0-31
    pub const PRER: usize = 0x10;
    /// Wake on falling edge, pins 0-31
    pub const PFER: usize = 0x14;
    /// Keypad level wake, pins 96+
    pub const PKWR: usize = 0x50;
}

/// LCD controller
pub mod lcd {
    pub const BASE: usize = 0x4400_0000;

    /// Control register 0; bit 0 enables the controller
    pub const LCCR0: usize = 0x000;
    /// Status register 1 (write-1-to-clear)
    pub const LCSR1: usize = 0x034;
    /// Status register 0 (write-1-to-clear)
    pub const LCSR0: usize = 0x038;

    pub const LCCR0_ENB: u32 = 1 << 0;
}

/// Synchronous serial port 3 (panel command channel)
pub mod ssp3 {
    pub const BASE: usize = 0x4190_0000;

    pub const SSCR0: usize = 0x00;
    pub const SSCR1: usize = 0x04;
    pub const SSSR: usize = 0x08;
    pub const SSDR: usize = 0x10;

    /// Port enable, SSCR0
    pub const SSCR0_SSE: u32 = 1 << 7;
    /// Busy: a frame is still draining, SSSR
    pub const SSSR_BSY: u32 = 1 << 4;
}
