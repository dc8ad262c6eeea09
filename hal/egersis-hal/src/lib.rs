//! Egersis Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the board-agnostic bring-up
//! logic is written against. A board crate implements them over real
//! registers; tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board crate (egersis-gsm6323, ...)     │
//! └─────────────────────────────────────────┘
//!                     │ implements
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  egersis-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     ▲ consumes
//!                     │
//! ┌─────────────────────────────────────────┐
//! │  egersis-core (sequencers, bus driver)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`delay::DelayUs`] - Busy-wait time source
//! - [`irq::IrqControl`] - Local interrupt masking
//! - [`pinmux::PinMux`] - Pin alternate-function controller
//! - [`ssb::SsbRegisters`] - Synchronous serial port register block
//! - [`fb::FbRegisters`] - Frame-buffer controller register block

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod ehal;
pub mod fb;
pub mod gpio;
pub mod irq;
pub mod pinmux;
pub mod ssb;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use fb::FbRegisters;
pub use gpio::{InputPin, Level, OutputPin};
pub use irq::{IrqControl, IrqGuard};
pub use pinmux::{PinFunction, PinMux, WakePolicy};
pub use ssb::SsbRegisters;
