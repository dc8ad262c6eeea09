//! GSM6323 pin assignment table
//!
//! Applied once, before any other subsystem starts; read-only for the
//! rest of the process lifetime.

use egersis_core::pinmux::PinAssignment;
use egersis_hal::{Level, WakePolicy};

/// Panel enable line, driven high at mux time (panel defaults on)
pub const LCD_ENABLE: u8 = 89;
/// MMC card-detect input
pub const MMC_DETECT: u8 = 99;
/// USB OTG id / VBUS sense input
pub const OTG_ID: u8 = 41;
/// USB D+ pull-up, low until the gadget is ready
pub const USB_PULLUP: u8 = 19;
/// Serial port number the panel command channel sits on
pub const LCD_BUS: u8 = 3;

pub static TABLE: &[PinAssignment] = &[
    // Power-IC interrupt
    PinAssignment::gpio_in(0).with_wake(WakePolicy::EdgeFalling),
    // Power button
    PinAssignment::gpio_in(1).with_wake(WakePolicy::EdgeBoth),
    // USB VBUS sense
    PinAssignment::gpio_in(11).with_wake(WakePolicy::EdgeBoth),
    // Touchscreen pen-down
    PinAssignment::gpio_in(13).with_wake(WakePolicy::EdgeBoth),
    // AC97 link
    PinAssignment::alt(28, 1), // bit clock
    PinAssignment::alt(29, 1), // data in
    PinAssignment::alt(30, 2), // data out
    PinAssignment::alt(31, 2), // sync
    PinAssignment::alt(98, 1), // system clock
    // LCD data bus, 16 bpp
    PinAssignment::alt(58, 2),
    PinAssignment::alt(59, 2),
    PinAssignment::alt(60, 2),
    PinAssignment::alt(61, 2),
    PinAssignment::alt(62, 2),
    PinAssignment::alt(63, 2),
    PinAssignment::alt(64, 2),
    PinAssignment::alt(65, 2),
    PinAssignment::alt(66, 2),
    PinAssignment::alt(67, 2),
    PinAssignment::alt(68, 2),
    PinAssignment::alt(69, 2),
    PinAssignment::alt(70, 2),
    PinAssignment::alt(71, 2),
    PinAssignment::alt(72, 2),
    PinAssignment::alt(73, 2),
    PinAssignment::alt(74, 2), // frame clock
    PinAssignment::alt(75, 2), // line clock
    PinAssignment::alt(76, 2), // pixel clock
    PinAssignment::alt(77, 2), // bias
    // Matrix keypad
    PinAssignment::alt(101, 1).with_wake(WakePolicy::LevelHigh), // row 1
    PinAssignment::alt(102, 1).with_wake(WakePolicy::LevelHigh), // row 2
    PinAssignment::alt(97, 3).with_wake(WakePolicy::LevelHigh),  // row 3
    PinAssignment::alt(103, 2),                                  // col 0
    PinAssignment::alt(104, 2),                                  // col 1
    PinAssignment::alt(105, 2),                                  // col 2
    // Bluetooth UART
    PinAssignment::alt(42, 1), // rxd
    PinAssignment::alt(43, 2), // txd
    PinAssignment::alt(44, 1), // cts
    PinAssignment::alt(45, 2), // rts
    // GSM UARTs
    PinAssignment::alt(34, 1), // ffuart rxd
    PinAssignment::alt(16, 3), // ffuart txd
    PinAssignment::alt(83, 2), // ffuart rts
    PinAssignment::alt(46, 2), // stuart rxd
    PinAssignment::alt(47, 1), // stuart txd
    // MMC
    PinAssignment::alt(32, 2),  // clock
    PinAssignment::alt(92, 1),  // dat 0
    PinAssignment::alt(109, 1), // dat 1
    PinAssignment::alt(110, 1), // dat 2
    PinAssignment::alt(111, 1), // dat 3
    PinAssignment::alt(112, 1), // cmd
    PinAssignment::gpio_in(MMC_DETECT).with_wake(WakePolicy::EdgeBoth),
    // I2C
    PinAssignment::alt(117, 1), // scl
    PinAssignment::alt(118, 1), // sda
    // Serial port 3, panel command channel
    PinAssignment::alt(35, 3), // frame
    PinAssignment::alt(38, 1), // txd
    PinAssignment::alt(40, 3), // clock
    // Not the port's rxd: repurposed to gate panel power
    PinAssignment::gpio_out(LCD_ENABLE, Level::High),
    // Camera interface
    PinAssignment::alt(12, 2), // dd 7
    PinAssignment::alt(17, 2), // dd 6
    PinAssignment::alt(23, 1), // master clock
    PinAssignment::alt(24, 1), // frame valid
    PinAssignment::alt(25, 1), // line valid
    PinAssignment::alt(26, 2), // pixel clock
    PinAssignment::alt(27, 3), // dd 0
    // Static memory chip select 5
    PinAssignment::alt(33, 2),
    // USB
    PinAssignment::gpio_in(OTG_ID),
    PinAssignment::gpio_out(USB_PULLUP, Level::Low),
    // OS timer channel out
    PinAssignment::alt(9, 1),
];
