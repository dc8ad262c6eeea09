//! GSM6323 board support
//!
//! Board definition for the RoverPC E5 / Amoi E860 handhelds: a PXA27x
//! SoC, a DA9030 power-management chip on the power I²C bus, and a
//! Tianma TM240320 panel whose command channel sits on synchronous
//! serial port 3 behind a GPIO enable line.
//!
//! The crate is data plus wiring: static tables (`pins`, `keys`,
//! `power`, `usb`, `audio`, `display`), the SoC register map (`reg`),
//! volatile MMIO implementations of the HAL traits (`mmio`), and the
//! board's fixed bring-up order (`board`).

#![no_std]

pub mod audio;
pub mod board;
pub mod display;
pub mod keys;
pub mod mmio;
pub mod pins;
pub mod power;
pub mod reg;
pub mod usb;

pub use board::{apply_pin_mux, lcd_panel, run_bringup, DeviceSet};
