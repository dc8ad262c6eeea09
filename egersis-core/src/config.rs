//! Opaque board-table types
//!
//! Keymaps, USB gadget product lists, audio routes, display timing and
//! storage parameters are declarative data: the core checks their
//! structure and hands them on, it never interprets them. Boards define
//! them as `const` tables.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors found while structurally validating a static board table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two table entries target the same physical pin
    DuplicatePin { pin: u8 },
    /// Pin number outside the SoC's pin range
    PinOutOfRange { pin: u8 },
    /// Matrix key placed outside the declared row/column dimensions
    KeyOutOfRange { row: u8, col: u8 },
    /// Two gadget configurations reuse one product id
    DuplicateProductId { id: u16 },
    /// An audio route ends in a sink no widget declares
    UnknownAudioSink { sink: &'static str },
}

/// Input event code a key produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyCode {
    Power,
    Camera,
    Media,
    VolumeDown,
    VolumeUp,
    Call,
    Home,
    Enter,
    Back,
    Menu,
    Left,
    Right,
    Up,
    Down,
}

/// One directly wired GPIO key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioKey {
    pub code: KeyCode,
    pub gpio: u8,
    pub label: &'static str,
    /// Key events wake the chip from low-power states
    pub wakeup: bool,
    /// Contact debounce window, 0 for clean switches
    pub debounce_ms: u16,
}

impl GpioKey {
    pub const fn new(code: KeyCode, gpio: u8, label: &'static str) -> Self {
        Self {
            code,
            gpio,
            label,
            wakeup: true,
            debounce_ms: 0,
        }
    }

    pub const fn debounced(self, debounce_ms: u16) -> Self {
        Self {
            code: self.code,
            gpio: self.gpio,
            label: self.label,
            wakeup: self.wakeup,
            debounce_ms,
        }
    }
}

/// One key position in a matrix keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixKey {
    pub row: u8,
    pub col: u8,
    pub code: KeyCode,
}

impl MatrixKey {
    pub const fn new(row: u8, col: u8, code: KeyCode) -> Self {
        Self { row, col, code }
    }
}

/// Matrix keypad geometry plus its sparse key map
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixKeypad {
    pub rows: u8,
    pub cols: u8,
    pub keys: &'static [MatrixKey],
}

impl MatrixKeypad {
    /// Check every key sits inside the declared matrix
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in self.keys {
            if key.row >= self.rows || key.col >= self.cols {
                return Err(ConfigError::KeyOutOfRange {
                    row: key.row,
                    col: key.col,
                });
            }
        }
        Ok(())
    }
}

/// Fixed panel timing, as the frame-buffer controller consumes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayMode {
    /// Pixel clock period in picoseconds
    pub pixclock_ps: u32,
    pub bpp: u8,
    pub xres: u16,
    pub yres: u16,
    pub hsync_len: u8,
    pub vsync_len: u8,
    pub left_margin: u8,
    pub right_margin: u8,
    pub upper_margin: u8,
    pub lower_margin: u8,
}

/// I²C controller parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cConfig {
    /// 400 kHz operation instead of 100 kHz
    pub fast_mode: bool,
}

/// Storage (MMC/SD) controller parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StorageConfig {
    /// Card-detect GPIO
    pub detect_pin: u8,
    /// Settle time after a detect edge before probing the card
    pub detect_delay_ms: u16,
    /// Supported supply-voltage window (OCR bit mask)
    pub ocr_mask: u32,
}

/// Function a USB gadget configuration can compose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UsbFunction {
    MassStorage,
    DebugBridge,
    EthernetBridge,
    SerialPort,
}

/// One gadget product configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UsbProduct {
    pub product_id: u16,
    pub functions: &'static [UsbFunction],
}

/// Complete gadget description for one board
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UsbGadgetConfig {
    pub vendor_id: u16,
    pub default_product_id: u16,
    pub manufacturer: &'static str,
    pub product_name: &'static str,
    pub serial_number: &'static str,
    pub products: &'static [UsbProduct],
    /// GPIO driving the D+ pull-up
    pub pullup_pin: u8,
    /// GPIO sensing VBUS
    pub vbus_pin: u8,
    pub vbus_inverted: bool,
}

impl UsbGadgetConfig {
    /// Check product ids are unique across the table
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, product) in self.products.iter().enumerate() {
            for other in &self.products[..i] {
                if other.product_id == product.product_id {
                    return Err(ConfigError::DuplicateProductId {
                        id: product.product_id,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Board-level audio endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioWidget {
    pub name: &'static str,
    pub kind: AudioWidgetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioWidgetKind {
    Speaker,
    LineIn,
}

/// One wiring edge: board widget fed from a codec pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioRoute {
    pub sink: &'static str,
    pub source: &'static str,
}

/// One codec stream link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioLink {
    pub name: &'static str,
    pub stream: &'static str,
}

/// Static audio graph for one board
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioGraph {
    pub widgets: &'static [AudioWidget],
    pub routes: &'static [AudioRoute],
    pub links: &'static [AudioLink],
}

impl AudioGraph {
    /// Check every route sink names a declared widget
    ///
    /// Sources are codec-internal pins and are not checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for route in self.routes {
            let declared = self.widgets.iter().any(|w| w.name == route.sink);
            if !declared {
                return Err(ConfigError::UnknownAudioSink { sink: route.sink });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_keys_inside_bounds() {
        static KEYS: [MatrixKey; 2] = [
            MatrixKey::new(1, 0, KeyCode::Call),
            MatrixKey::new(3, 3, KeyCode::Menu),
        ];
        let pad = MatrixKeypad {
            rows: 4,
            cols: 4,
            keys: &KEYS,
        };
        assert_eq!(pad.validate(), Ok(()));
    }

    #[test]
    fn test_matrix_key_out_of_bounds() {
        static KEYS: [MatrixKey; 1] = [MatrixKey::new(4, 0, KeyCode::Call)];
        let pad = MatrixKeypad {
            rows: 4,
            cols: 4,
            keys: &KEYS,
        };
        assert_eq!(
            pad.validate(),
            Err(ConfigError::KeyOutOfRange { row: 4, col: 0 })
        );
    }

    #[test]
    fn test_gadget_duplicate_product_id() {
        static STORAGE: [UsbFunction; 1] = [UsbFunction::MassStorage];
        static NET: [UsbFunction; 1] = [UsbFunction::EthernetBridge];
        static PRODUCTS: [UsbProduct; 2] = [
            UsbProduct {
                product_id: 0x9025,
                functions: &STORAGE,
            },
            UsbProduct {
                product_id: 0x9025,
                functions: &NET,
            },
        ];
        let gadget = UsbGadgetConfig {
            vendor_id: 0x0bb4,
            default_product_id: 0x9025,
            manufacturer: "test",
            product_name: "test",
            serial_number: "0",
            products: &PRODUCTS,
            pullup_pin: 19,
            vbus_pin: 41,
            vbus_inverted: true,
        };
        assert_eq!(
            gadget.validate(),
            Err(ConfigError::DuplicateProductId { id: 0x9025 })
        );
    }

    #[test]
    fn test_audio_route_must_end_in_widget() {
        static WIDGETS: [AudioWidget; 1] = [AudioWidget {
            name: "Front Speaker",
            kind: AudioWidgetKind::Speaker,
        }];
        static ROUTES: [AudioRoute; 1] = [AudioRoute {
            sink: "Rear Speaker",
            source: "SPKR",
        }];
        let graph = AudioGraph {
            widgets: &WIDGETS,
            routes: &ROUTES,
            links: &[],
        };
        assert_eq!(
            graph.validate(),
            Err(ConfigError::UnknownAudioSink {
                sink: "Rear Speaker"
            })
        );
    }
}
