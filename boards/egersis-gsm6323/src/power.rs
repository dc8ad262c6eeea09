//! DA9030 power-IC tables
//!
//! Regulator constraints, LED/vibra descriptors, battery monitor
//! thresholds, and the sub-device table the bring-up registers. Only
//! the rails the stock firmware is known to program are wired onto the
//! sub-device bus; the remaining constraints are kept for reference.

use egersis_core::registry::{
    BatteryMonitorSpec, LedSpec, RegulatorSpec, SubdeviceKind, SubdeviceSpec,
};

/// DA9030 LED/vibra mode bits, passed through to the chip driver
pub mod flags {
    /// Hardware blink enabled; rate field sits at bits 5-7
    pub const LED_RATE_ON: u16 = 1 << 4;
    /// 2.1 s blink period
    pub const LED_RATE_2S1: u16 = 3 << 5;
    /// Vibra drive at 2.7 V
    pub const VIBRA_MODE_2P7V: u16 = 1 << 1;
    /// Vibra pulse frequency 8 Hz
    pub const VIBRA_FREQ_8HZ: u16 = 2 << 2;
}

/// LDO constraint table; voltages fixed by the board design
pub const REGULATORS: &[RegulatorSpec] = &[
    RegulatorSpec::fixed("vcc_gps", 1_500_000),
    RegulatorSpec::fixed("vcc_kbd", 2_400_000),
    RegulatorSpec::fixed("vcc_unk1", 1_800_000),
    RegulatorSpec::fixed("vcc_unk2", 2_400_000),
    RegulatorSpec::fixed("vcc_cam", 1_800_000),
    RegulatorSpec::fixed("vcc_bt", 1_800_000),
    RegulatorSpec::fixed("vcc_unk3", 2_400_000),
    RegulatorSpec::fixed("vcc_camgps", 3_200_000),
];

/// Battery monitor parameters (1400 mAh Li-ion pack)
pub const BATTERY: BatteryMonitorSpec = BatteryMonitorSpec {
    charge_ma: 500,
    charge_mv: 4200,
    vbat_low: 3600,
    vbat_crit: 3400,
    vbat_charge_start: 4100,
    vbat_charge_stop: 4200,
    vbat_charge_restart: 4000,
    vcharge_min: 3200,
    vcharge_max: 5500,
    tbat_low: 197,
    tbat_high: 78,
    tbat_restart: 100,
    monitor_interval_ms: 0,
};

const RED: LedSpec = LedSpec {
    label: "gsm6323:red",
    default_trigger: Some("battery-charging"),
    flags: 0,
};

const GREEN: LedSpec = LedSpec {
    label: "gsm6323:green",
    default_trigger: Some("battery-full"),
    flags: 0,
};

const BLUE: LedSpec = LedSpec {
    label: "gsm6323:blue",
    default_trigger: None,
    flags: flags::LED_RATE_ON | flags::LED_RATE_2S1,
};

const VIBRA: LedSpec = LedSpec {
    label: "gsm6323:vibra",
    default_trigger: None,
    flags: flags::VIBRA_MODE_2P7V | flags::VIBRA_FREQ_8HZ,
};

const BACKLIGHT: LedSpec = LedSpec {
    label: "gsm6323:backlight",
    default_trigger: None,
    flags: 0,
};

/// Sub-device bus slots, chip numbering
mod slot {
    pub const LDO5: u8 = 5;
    pub const LDO6: u8 = 6;
    pub const LDO9: u8 = 9;
    pub const LDO10: u8 = 10;
    pub const LED_1: u8 = 1;
    pub const LED_2: u8 = 2;
    pub const LED_3: u8 = 3;
    pub const VIBRA: u8 = 4;
    pub const WLED: u8 = 8;
    pub const BAT: u8 = 0;
}

/// The sub-device table registered at bring-up
///
/// The frame-buffer step resolves "backlight" from here; boot order
/// guarantees it is registered first.
pub static SUBDEVICES: &[SubdeviceSpec] = &[
    SubdeviceSpec {
        name: "ldo5",
        id: slot::LDO5,
        kind: SubdeviceKind::Regulator(REGULATORS[2]),
    },
    SubdeviceSpec {
        name: "ldo6",
        id: slot::LDO6,
        kind: SubdeviceKind::Regulator(REGULATORS[3]),
    },
    SubdeviceSpec {
        name: "ldo9",
        id: slot::LDO9,
        kind: SubdeviceKind::Regulator(REGULATORS[5]),
    },
    SubdeviceSpec {
        name: "ldo10",
        id: slot::LDO10,
        kind: SubdeviceKind::Regulator(REGULATORS[6]),
    },
    SubdeviceSpec {
        name: "led-red",
        id: slot::LED_1,
        kind: SubdeviceKind::Led(RED),
    },
    SubdeviceSpec {
        name: "led-green",
        id: slot::LED_2,
        kind: SubdeviceKind::Led(GREEN),
    },
    SubdeviceSpec {
        name: "led-blue",
        id: slot::LED_3,
        kind: SubdeviceKind::Led(BLUE),
    },
    SubdeviceSpec {
        name: "vibra",
        id: slot::VIBRA,
        kind: SubdeviceKind::Led(VIBRA),
    },
    SubdeviceSpec {
        name: "backlight",
        id: slot::WLED,
        kind: SubdeviceKind::Backlight(BACKLIGHT),
    },
    SubdeviceSpec {
        name: "battery",
        id: slot::BAT,
        kind: SubdeviceKind::Battery(BATTERY),
    },
];
