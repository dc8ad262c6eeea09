//! Pin-mux table applier
//!
//! A board declares one static table routing every used pin to its
//! signal function. The whole table is validated before the first
//! register write and then applied as a single interrupt-masked region:
//! a malformed table leaves the hardware untouched, a valid one is
//! never observed half-applied.

use egersis_hal::irq::IrqGuard;
use egersis_hal::{IrqControl, Level, PinFunction, PinMux, WakePolicy};

use crate::config::ConfigError;

/// Pins are tracked in a 128-bit occupancy map; the SoC family tops
/// out at GPIO120.
pub const MAX_PIN: u8 = 128;

/// One entry of a board pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub pin: u8,
    pub function: PinFunction,
    pub wake: WakePolicy,
}

impl PinAssignment {
    /// Route a pin to alternate function `function`
    pub const fn alt(pin: u8, function: u8) -> Self {
        Self {
            pin,
            function: PinFunction::Alternate(function),
            wake: WakePolicy::None,
        }
    }

    /// Use a pin as a GPIO input
    pub const fn gpio_in(pin: u8) -> Self {
        Self {
            pin,
            function: PinFunction::Input,
            wake: WakePolicy::None,
        }
    }

    /// Use a pin as a GPIO output driven to `level` at configure time
    pub const fn gpio_out(pin: u8, level: Level) -> Self {
        Self {
            pin,
            function: PinFunction::Output(level),
            wake: WakePolicy::None,
        }
    }

    /// Attach a wake policy to this assignment
    pub const fn with_wake(self, wake: WakePolicy) -> Self {
        Self {
            pin: self.pin,
            function: self.function,
            wake,
        }
    }
}

/// Validate and apply a pin table
///
/// Validation runs to completion before the first `configure` call, so
/// a rejected table performs zero hardware writes. On success every
/// entry is configured exactly once, in table order, with interrupts
/// masked for the duration.
pub fn apply<M, I>(mux: &mut M, irq: &mut I, table: &[PinAssignment]) -> Result<(), ConfigError>
where
    M: PinMux,
    I: IrqControl,
{
    let mut seen = [0u64; 2];
    for entry in table {
        if entry.pin >= MAX_PIN {
            return Err(ConfigError::PinOutOfRange { pin: entry.pin });
        }
        let word = (entry.pin / 64) as usize;
        let bit = 1u64 << (entry.pin % 64);
        if seen[word] & bit != 0 {
            return Err(ConfigError::DuplicatePin { pin: entry.pin });
        }
        seen[word] |= bit;
    }

    let _masked = IrqGuard::enter(irq);
    for entry in table {
        mux.configure(entry.pin, entry.function, entry.wake);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct RecordingMux {
        calls: Vec<(u8, PinFunction, WakePolicy), 64>,
    }

    impl PinMux for RecordingMux {
        fn configure(&mut self, pin: u8, function: PinFunction, wake: WakePolicy) {
            self.calls.push((pin, function, wake)).unwrap();
        }
    }

    #[derive(Default)]
    struct MockIrq {
        masked: bool,
        saves: u32,
        restores: u32,
    }

    impl IrqControl for MockIrq {
        type Token = bool;

        fn save_and_disable(&mut self) -> bool {
            self.saves += 1;
            let was_masked = self.masked;
            self.masked = true;
            was_masked
        }

        fn restore(&mut self, token: bool) {
            self.restores += 1;
            self.masked = token;
        }
    }

    #[test]
    fn test_duplicate_pin_writes_nothing() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq::default();
        let table = [
            PinAssignment::alt(28, 1),
            PinAssignment::gpio_in(1),
            PinAssignment::alt(28, 2),
        ];

        let result = apply(&mut mux, &mut irq, &table);

        assert_eq!(result, Err(ConfigError::DuplicatePin { pin: 28 }));
        assert!(mux.calls.is_empty());
        assert_eq!(irq.saves, 0);
    }

    #[test]
    fn test_pin_out_of_range_writes_nothing() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq::default();
        let table = [PinAssignment::gpio_in(200)];

        let result = apply(&mut mux, &mut irq, &table);

        assert_eq!(result, Err(ConfigError::PinOutOfRange { pin: 200 }));
        assert!(mux.calls.is_empty());
    }

    #[test]
    fn test_applies_in_table_order() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq::default();
        let table = [
            PinAssignment::alt(117, 1),
            PinAssignment::alt(118, 1),
            PinAssignment::gpio_in(1).with_wake(WakePolicy::EdgeBoth),
        ];

        apply(&mut mux, &mut irq, &table).unwrap();

        assert_eq!(mux.calls.len(), 3);
        assert_eq!(mux.calls[0].0, 117);
        assert_eq!(mux.calls[1].0, 118);
        assert_eq!(mux.calls[2], (1, PinFunction::Input, WakePolicy::EdgeBoth));
    }

    #[test]
    fn test_apply_masks_interrupts_once() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq::default();
        let table = [PinAssignment::alt(32, 2)];

        apply(&mut mux, &mut irq, &table).unwrap();

        assert_eq!(irq.saves, 1);
        assert_eq!(irq.restores, 1);
        assert!(!irq.masked);
    }

    #[test]
    fn test_single_output_entry_configures_one_pin_high() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq::default();
        let table = [PinAssignment::gpio_out(89, Level::High)];

        apply(&mut mux, &mut irq, &table).unwrap();

        assert_eq!(
            mux.calls.as_slice(),
            &[(89, PinFunction::Output(Level::High), WakePolicy::None)]
        );
    }

    #[test]
    fn test_pins_in_both_bitmap_words() {
        // One pin below 64 and one above exercises both occupancy words
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq::default();
        let table = [
            PinAssignment::alt(63, 1),
            PinAssignment::alt(64, 1),
            PinAssignment::alt(64, 1),
        ];

        let result = apply(&mut mux, &mut irq, &table);

        assert_eq!(result, Err(ConfigError::DuplicatePin { pin: 64 }));
        assert!(mux.calls.is_empty());
    }
}
