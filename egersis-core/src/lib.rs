//! Board-agnostic peripheral bring-up logic
//!
//! This crate contains the parts of board bring-up with real ordering
//! and timing hazards, written against the `egersis-hal` traits so they
//! run identically over memory-mapped registers and over test doubles:
//!
//! - Pin-mux table validation and all-or-nothing apply
//! - Exclusive-owner synchronous serial bus driver
//! - Panel power-on sequencer (interrupt-masked, microsecond-timed)
//! - Ordered subsystem bring-up sequencer
//! - Power-IC sub-device registry
//! - Opaque board-table types (keys, USB gadget, audio routes, timing)

#![no_std]
#![deny(unsafe_code)]

pub mod bringup;
pub mod config;
pub mod panel;
pub mod pinmux;
pub mod registry;
pub mod ssb;
