//! Bring-up assembly
//!
//! The fixed order in which GSM6323 subsystems come up, as bring-up
//! steps over the core sequencer. The order is decided here, at build
//! time, and encodes the board's hardware dependencies: the power IC
//! needs the I²C bus, the frame buffer needs the power IC (its
//! backlight is a power-IC sub-device), and everything needs its pins
//! routed first.

use core::cell::RefCell;

use egersis_core::bringup::{self, BringupError, InitStep, StepError};
use egersis_core::config::{
    AudioGraph, ConfigError, I2cConfig, MatrixKeypad, StorageConfig, UsbGadgetConfig,
};
use egersis_core::panel::PanelSequencer;
use egersis_core::pinmux::{self, PinAssignment};
use egersis_core::registry::SubdeviceRegistry;
use egersis_core::ssb::{BusId, SsbBus};
use egersis_hal::{DelayUs, FbRegisters, IrqControl, OutputPin, PinMux, SsbRegisters};

use crate::{audio, display, keys, pins, power, usb};

/// Power I²C runs at standard rate; the DA9030 does not do fast mode
pub const I2C: I2cConfig = I2cConfig { fast_mode: false };

/// MMC slot: 3.2-3.4 V window, detect edge needs 200 ms to settle
pub const STORAGE: StorageConfig = StorageConfig {
    detect_pin: pins::MMC_DETECT,
    detect_delay_ms: 200,
    ocr_mask: 0x0030_0000,
};

/// Devices attached so far; the platform glue consumes this after
/// bring-up to know what probed
pub struct DeviceSet {
    // Capacity sits above the board's total device count
    attached: heapless::Vec<&'static str, 16>,
}

impl DeviceSet {
    pub const fn new() -> Self {
        Self {
            attached: heapless::Vec::new(),
        }
    }

    fn attach(&mut self, name: &'static str) {
        let _ = self.attached.push(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attached.iter().any(|n| *n == name)
    }

    /// Attached device names, in attach order
    pub fn names(&self) -> &[&'static str] {
        &self.attached
    }
}

impl Default for DeviceSet {
    fn default() -> Self {
        Self::new()
    }
}

struct PinMuxStep<'a, M, I> {
    mux: &'a mut M,
    irq: &'a mut I,
    table: &'static [PinAssignment],
}

impl<M: PinMux, I: IrqControl> InitStep for PinMuxStep<'_, M, I> {
    fn name(&self) -> &'static str {
        "pin-mux"
    }

    fn run(&mut self) -> Result<(), StepError> {
        pinmux::apply(self.mux, self.irq, self.table)?;
        Ok(())
    }
}

struct SerialPortsStep<'a> {
    devices: &'a RefCell<DeviceSet>,
}

impl InitStep for SerialPortsStep<'_> {
    fn name(&self) -> &'static str {
        "serial-ports"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        // Console, Bluetooth and GSM UARTs need nothing beyond their
        // pin routing; attaching marks them present for the glue
        let mut devices = self.devices.borrow_mut();
        devices.attach("ffuart");
        devices.attach("btuart");
        devices.attach("stuart");
        Ok(())
    }
}

struct I2cStep<'a> {
    devices: &'a RefCell<DeviceSet>,
}

impl InitStep for I2cStep<'_> {
    fn name(&self) -> &'static str {
        "i2c"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        let mut devices = self.devices.borrow_mut();
        devices.attach("i2c-pwr");
        devices.attach("i2c");
        Ok(())
    }
}

struct PowerIcStep<'a> {
    registry: &'a RefCell<SubdeviceRegistry>,
    devices: &'a RefCell<DeviceSet>,
}

impl InitStep for PowerIcStep<'_> {
    fn name(&self) -> &'static str {
        "power-ic"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["i2c"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        self.registry.borrow_mut().register(power::SUBDEVICES)?;
        self.devices.borrow_mut().attach("da9030");
        Ok(())
    }
}

struct FrameBufferStep<'a> {
    registry: &'a RefCell<SubdeviceRegistry>,
    devices: &'a RefCell<DeviceSet>,
}

impl InitStep for FrameBufferStep<'_> {
    fn name(&self) -> &'static str {
        "frame-buffer"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux", "power-ic"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        // The panel backlight is a power-IC sub-device; failing to
        // resolve it means the bring-up order is wrong
        self.registry.borrow().lookup("backlight")?;
        self.devices.borrow_mut().attach("fb");
        Ok(())
    }
}

struct KeypadStep<'a> {
    devices: &'a RefCell<DeviceSet>,
    keypad: MatrixKeypad,
}

impl InitStep for KeypadStep<'_> {
    fn name(&self) -> &'static str {
        "keypad"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        self.keypad.validate()?;
        self.devices.borrow_mut().attach("keypad");
        Ok(())
    }
}

struct StorageStep<'a> {
    devices: &'a RefCell<DeviceSet>,
}

impl InitStep for StorageStep<'_> {
    fn name(&self) -> &'static str {
        "storage"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        self.devices.borrow_mut().attach("mmc");
        Ok(())
    }
}

struct UsbStep<'a> {
    devices: &'a RefCell<DeviceSet>,
    gadget: UsbGadgetConfig,
}

impl InitStep for UsbStep<'_> {
    fn name(&self) -> &'static str {
        "usb"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        self.gadget.validate()?;
        self.devices.borrow_mut().attach("udc");
        Ok(())
    }
}

struct AudioStep<'a> {
    devices: &'a RefCell<DeviceSet>,
    graph: AudioGraph,
}

impl InitStep for AudioStep<'_> {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["pin-mux"]
    }

    fn run(&mut self) -> Result<(), StepError> {
        self.graph.validate()?;
        self.devices.borrow_mut().attach("ac97");
        Ok(())
    }
}

/// Route the whole board pin table
pub fn apply_pin_mux<M, I>(mux: &mut M, irq: &mut I) -> Result<(), ConfigError>
where
    M: PinMux,
    I: IrqControl,
{
    pinmux::apply(mux, irq, pins::TABLE)
}

/// Build the panel driver for this board
pub fn lcd_panel<P, D, F, I, R>(
    enable_pin: P,
    delay: D,
    fb: F,
    irq: I,
    port: R,
) -> PanelSequencer<P, D, F, I, R>
where
    P: OutputPin,
    D: DelayUs,
    F: FbRegisters,
    I: IrqControl,
    R: SsbRegisters,
{
    PanelSequencer::new(
        enable_pin,
        delay,
        fb,
        irq,
        SsbBus::new(BusId(pins::LCD_BUS), port),
        display::PANEL_PROFILE,
    )
}

/// Run the board's bring-up list, strictly in order
///
/// The first failing step aborts the rest; the registry and device set
/// keep whatever was attached up to that point.
pub fn run_bringup<M, I>(
    mux: &mut M,
    irq: &mut I,
    registry: &RefCell<SubdeviceRegistry>,
    devices: &RefCell<DeviceSet>,
) -> Result<(), BringupError>
where
    M: PinMux,
    I: IrqControl,
{
    let mut pin_mux = PinMuxStep {
        mux,
        irq,
        table: pins::TABLE,
    };
    let mut serial = SerialPortsStep { devices };
    let mut i2c = I2cStep { devices };
    let mut power_ic = PowerIcStep { registry, devices };
    let mut frame_buffer = FrameBufferStep { registry, devices };
    let mut keypad = KeypadStep {
        devices,
        keypad: keys::MATRIX,
    };
    let mut storage = StorageStep { devices };
    let mut usb_gadget = UsbStep {
        devices,
        gadget: usb::GADGET,
    };
    let mut codec = AudioStep {
        devices,
        graph: audio::GRAPH,
    };

    let mut steps: [&mut dyn InitStep; 9] = [
        &mut pin_mux,
        &mut serial,
        &mut i2c,
        &mut power_ic,
        &mut frame_buffer,
        &mut keypad,
        &mut storage,
        &mut usb_gadget,
        &mut codec,
    ];
    bringup::run_steps(&mut steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egersis_core::panel::{PanelDriver, PanelState};
    use egersis_core::registry::RegistryError;
    use egersis_hal::{Level, PinFunction, WakePolicy};
    use heapless::Vec;

    #[derive(Default)]
    struct RecordingMux {
        calls: Vec<(u8, PinFunction, WakePolicy), 128>,
    }

    impl PinMux for RecordingMux {
        fn configure(&mut self, pin: u8, function: PinFunction, wake: WakePolicy) {
            self.calls.push((pin, function, wake)).unwrap();
        }
    }

    #[derive(Default)]
    struct MockIrq;

    impl IrqControl for MockIrq {
        type Token = ();

        fn save_and_disable(&mut self) {}

        fn restore(&mut self, _token: ()) {}
    }

    #[test]
    fn test_pin_table_applies_cleanly() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq;

        apply_pin_mux(&mut mux, &mut irq).unwrap();

        assert_eq!(mux.calls.len(), pins::TABLE.len());
        for (call, entry) in mux.calls.iter().zip(pins::TABLE) {
            assert_eq!(call, &(entry.pin, entry.function, entry.wake));
        }
    }

    #[test]
    fn test_panel_enable_pin_muxed_output_high() {
        let entry = pins::TABLE
            .iter()
            .find(|e| e.pin == pins::LCD_ENABLE)
            .unwrap();
        assert_eq!(entry.function, PinFunction::Output(Level::High));
    }

    #[test]
    fn test_bringup_attaches_everything_in_order() {
        let mut mux = RecordingMux::default();
        let mut irq = MockIrq;
        let registry = RefCell::new(SubdeviceRegistry::new());
        let devices = RefCell::new(DeviceSet::new());

        run_bringup(&mut mux, &mut irq, &registry, &devices).unwrap();

        assert!(registry.borrow().is_registered());
        assert_eq!(
            devices.borrow().names(),
            &[
                "ffuart", "btuart", "stuart", "i2c-pwr", "i2c", "da9030", "fb", "keypad", "mmc",
                "udc", "ac97",
            ]
        );
    }

    #[test]
    fn test_frame_buffer_step_requires_registered_power_ic() {
        let registry = RefCell::new(SubdeviceRegistry::new());
        let devices = RefCell::new(DeviceSet::new());
        let mut step = FrameBufferStep {
            registry: &registry,
            devices: &devices,
        };

        assert_eq!(
            step.run(),
            Err(StepError::Registry(RegistryError::NotFound))
        );
        assert!(!devices.borrow().contains("fb"));
    }

    struct NullPin;

    impl OutputPin for NullPin {
        fn set_high(&mut self) {}

        fn set_low(&mut self) {}
    }

    struct NullDelay;

    impl DelayUs for NullDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    struct NullFb {
        control: u32,
    }

    impl FbRegisters for NullFb {
        const CONTROL_ENABLE: u32 = crate::reg::lcd::LCCR0_ENB;

        fn read_control(&self) -> u32 {
            self.control
        }

        fn write_control(&mut self, value: u32) {
            self.control = value;
        }

        fn write_status0(&mut self, _value: u32) {}

        fn write_status1(&mut self, _value: u32) {}
    }

    struct RecordingPort {
        control0: u32,
        data: Vec<u32, 8>,
    }

    impl SsbRegisters for RecordingPort {
        const CONTROL0_ENABLE: u32 = crate::reg::ssp3::SSCR0_SSE;
        const STATUS_BUSY: u32 = crate::reg::ssp3::SSSR_BSY;

        fn read_control0(&self) -> u32 {
            self.control0
        }

        fn write_control0(&mut self, value: u32) {
            self.control0 = value;
        }

        fn write_control1(&mut self, _value: u32) {}

        fn read_status(&self) -> u32 {
            0
        }

        fn write_data(&mut self, value: u32) {
            self.data.push(value).unwrap();
        }
    }

    #[test]
    fn test_lcd_panel_sends_wakeup_pair_twice_each() {
        let mut panel = lcd_panel(
            NullPin,
            NullDelay,
            NullFb { control: 0 },
            MockIrq,
            RecordingPort {
                control0: 0,
                data: Vec::new(),
            },
        );

        panel.power_on().unwrap();

        assert_eq!(panel.state(), PanelState::On);
        assert_eq!(panel.bus().owner(), None);

        let port = panel.bus().regs();
        // Wake-up pair, each frame transmitted twice
        assert_eq!(port.data.as_slice(), &[0x0250, 0x0250, 0x0201, 0x0201]);
        // Port handed back disabled, clock image intact
        assert_eq!(port.control0, 0x00C0_000F);
    }
}
