//! Subsystem bring-up sequencer
//!
//! Boot-time initialization runs a fixed list of steps whose order is
//! decided at build time and encodes real hardware dependencies (the
//! power IC's sub-devices must exist before the frame buffer probes,
//! because the backlight hangs off the power IC). The sequencer never
//! re-orders, never retries, never rolls back: a failed boot is
//! reported upward, not repaired.

use crate::config::ConfigError;
use crate::panel::PanelError;
use crate::registry::RegistryError;
use crate::ssb::BusError;

/// Why one bring-up step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepError {
    Config(ConfigError),
    Bus(BusError),
    Panel(PanelError),
    Registry(RegistryError),
}

impl From<ConfigError> for StepError {
    fn from(e: ConfigError) -> Self {
        StepError::Config(e)
    }
}

impl From<BusError> for StepError {
    fn from(e: BusError) -> Self {
        StepError::Bus(e)
    }
}

impl From<PanelError> for StepError {
    fn from(e: PanelError) -> Self {
        StepError::Panel(e)
    }
}

impl From<RegistryError> for StepError {
    fn from(e: RegistryError) -> Self {
        StepError::Registry(e)
    }
}

/// Bring-up abort report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringupError {
    /// A step failed; later steps never ran. `index` is the step's
    /// position in the list.
    StepFailed {
        index: usize,
        name: &'static str,
        cause: StepError,
    },
    /// A step declares a prerequisite that does not run before it.
    /// Reported before any step executes.
    OrderViolation {
        index: usize,
        name: &'static str,
        missing: &'static str,
    },
}

/// One bring-up step
///
/// `run` must be idempotent-on-failure: resources a failing step
/// partially registered stay in a well-defined, inert state. There is
/// no teardown hook; bring-up is one-shot.
pub trait InitStep {
    /// Step name, also the identifier prerequisite lists refer to
    fn name(&self) -> &'static str;

    /// Names of steps that must have run before this one
    fn depends_on(&self) -> &'static [&'static str] {
        &[]
    }

    /// Perform the initialization
    fn run(&mut self) -> Result<(), StepError>;
}

/// Execute a bring-up list strictly in order
///
/// Declared prerequisites are checked against the list before anything
/// runs; the list is never re-sorted to satisfy them. Execution stops
/// at the first failing step.
pub fn run_steps(steps: &mut [&mut dyn InitStep]) -> Result<(), BringupError> {
    for (index, step) in steps.iter().enumerate() {
        for &missing in step.depends_on() {
            let satisfied = steps[..index].iter().any(|prior| prior.name() == missing);
            if !satisfied {
                return Err(BringupError::OrderViolation {
                    index,
                    name: step.name(),
                    missing,
                });
            }
        }
    }

    for (index, step) in steps.iter_mut().enumerate() {
        if let Err(cause) = step.run() {
            return Err(BringupError::StepFailed {
                index,
                name: step.name(),
                cause,
            });
        }
    }
    Ok(())
}
