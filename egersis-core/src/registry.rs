//! Power-IC sub-device registry
//!
//! The power-management chip exposes regulators, LEDs, a backlight
//! driver and a battery monitor as sub-devices on its internal bus.
//! The bring-up sequencer registers the board's sub-device table once,
//! early; later steps resolve sub-devices by logical name. A failed
//! lookup means the bring-up order was violated - a defect, not a
//! runtime condition to recover from.

use heapless::Vec;

/// Registry capacity; generous against the largest table in use
pub const MAX_SUBDEVICES: usize = 16;

/// Registry failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// No sub-device under that name; registration missing or not yet run
    NotFound,
    /// The table was already registered; it is immutable afterwards
    AlreadyRegistered,
    /// Table larger than [`MAX_SUBDEVICES`]
    TableOverflow,
}

/// Voltage regulator constraints
///
/// Immutable after registration; consumers name the loads wired to the
/// rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegulatorSpec {
    pub name: &'static str,
    pub min_uv: u32,
    pub max_uv: u32,
    pub always_on: bool,
    pub consumers: &'static [&'static str],
}

impl RegulatorSpec {
    /// Fixed-voltage always-on rail with no named consumers
    pub const fn fixed(name: &'static str, uv: u32) -> Self {
        Self {
            name,
            min_uv: uv,
            max_uv: uv,
            always_on: true,
            consumers: &[],
        }
    }
}

/// LED or vibra sub-device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedSpec {
    pub label: &'static str,
    /// Event source that drives the LED automatically, if any
    pub default_trigger: Option<&'static str>,
    /// Chip-specific mode bits (blink rate, vibra drive), passed through
    pub flags: u16,
}

/// Battery monitor thresholds, millivolts/milliamps unless noted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryMonitorSpec {
    pub charge_ma: u16,
    pub charge_mv: u16,
    pub vbat_low: u16,
    pub vbat_crit: u16,
    pub vbat_charge_start: u16,
    pub vbat_charge_stop: u16,
    pub vbat_charge_restart: u16,
    pub vcharge_min: u16,
    pub vcharge_max: u16,
    /// Temperature sense readings, raw ADC units
    pub tbat_low: u16,
    pub tbat_high: u16,
    pub tbat_restart: u16,
    /// 0 = monitor on demand only
    pub monitor_interval_ms: u16,
}

/// What kind of sub-device an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubdeviceKind {
    Regulator(RegulatorSpec),
    Led(LedSpec),
    Backlight(LedSpec),
    Battery(BatteryMonitorSpec),
}

/// One entry of a board's power-IC sub-device table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubdeviceSpec {
    /// Logical name later bring-up steps resolve
    pub name: &'static str,
    /// Slot on the chip's sub-device bus
    pub id: u8,
    pub kind: SubdeviceKind,
}

/// Owns the registered sub-device table for the life of the process
#[derive(Default)]
pub struct SubdeviceRegistry {
    registered: bool,
    subdevs: Vec<SubdeviceSpec, MAX_SUBDEVICES>,
}

impl SubdeviceRegistry {
    pub const fn new() -> Self {
        Self {
            registered: false,
            subdevs: Vec::new(),
        }
    }

    /// Register the board table; callable exactly once
    pub fn register(&mut self, table: &[SubdeviceSpec]) -> Result<(), RegistryError> {
        if self.registered {
            return Err(RegistryError::AlreadyRegistered);
        }
        self.subdevs
            .extend_from_slice(table)
            .map_err(|()| RegistryError::TableOverflow)?;
        self.registered = true;
        Ok(())
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Resolve a sub-device by logical name
    pub fn lookup(&self, name: &str) -> Result<&SubdeviceSpec, RegistryError> {
        self.subdevs
            .iter()
            .find(|s| s.name == name)
            .ok_or(RegistryError::NotFound)
    }

    /// All registered sub-devices, in table order
    pub fn iter(&self) -> impl Iterator<Item = &SubdeviceSpec> {
        self.subdevs.iter()
    }
}
