//! Button and keypad tables
//!
//! Five buttons hang off plain GPIOs; the rest sit in a 4x4 matrix
//! scanned by the keypad controller (three rows and three columns of
//! which are actually wired).

use egersis_core::config::{GpioKey, KeyCode, MatrixKey, MatrixKeypad};

pub static GPIO_KEYS: &[GpioKey] = &[
    GpioKey::new(KeyCode::Power, 1, "Power button"),
    GpioKey::new(KeyCode::Camera, 14, "Camera button"),
    GpioKey::new(KeyCode::Media, 39, "Wheel press"),
    GpioKey::new(KeyCode::VolumeDown, 93, "Wheel down").debounced(30),
    GpioKey::new(KeyCode::VolumeUp, 94, "Wheel up").debounced(30),
];

pub const MATRIX_KEYS: &[MatrixKey] = &[
    MatrixKey::new(1, 0, KeyCode::Call),
    MatrixKey::new(1, 2, KeyCode::Left),
    MatrixKey::new(1, 3, KeyCode::Up),
    MatrixKey::new(2, 0, KeyCode::Home),
    MatrixKey::new(2, 2, KeyCode::Right),
    MatrixKey::new(2, 3, KeyCode::Down),
    MatrixKey::new(3, 0, KeyCode::Enter),
    MatrixKey::new(3, 2, KeyCode::Back),
    MatrixKey::new(3, 3, KeyCode::Menu),
];

pub const MATRIX: MatrixKeypad = MatrixKeypad {
    rows: 4,
    cols: 4,
    keys: MATRIX_KEYS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_table_is_structurally_valid() {
        MATRIX.validate().unwrap();
    }

    #[test]
    fn test_wheel_keys_are_debounced() {
        for key in GPIO_KEYS {
            let is_wheel_edge = matches!(key.code, KeyCode::VolumeUp | KeyCode::VolumeDown);
            assert_eq!(key.debounce_ms > 0, is_wheel_edge);
        }
    }
}
