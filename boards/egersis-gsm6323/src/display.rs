//! Panel timing and power profile - Tianma TM240320
//!
//! The timing block goes to the frame-buffer controller; the power
//! profile drives the panel power sequencer. Every value is a datasheet
//! constant.

use egersis_core::config::DisplayMode;
use egersis_core::panel::PanelProfile;
use egersis_core::ssb::{ClockConfig, FrameConfig};

/// 240x320 16 bpp, ~5.2 MHz pixel clock
pub const MODE: DisplayMode = DisplayMode {
    pixclock_ps: 192_308,
    bpp: 16,
    xres: 240,
    yres: 320,
    hsync_len: 10,
    vsync_len: 2,
    left_margin: 19,
    right_margin: 10,
    upper_margin: 2,
    lower_margin: 2,
};

/// Power-on protocol constants for this panel
///
/// The serial images select a 16-bit frame at the divisor the
/// controller expects; the two commands are the panel's wake-up pair.
pub const PANEL_PROFILE: PanelProfile = PanelProfile {
    status0_clear: 0x1FFF,
    status1_clear: 0x3E3F_3F3F,
    clock: ClockConfig::from_raw(0x00C0_000F),
    frame: FrameConfig::from_raw(0x5000_0018),
    commands: [0x0250, 0x0201],
    deassert_hold_us: 10,
    assert_hold_us: 20,
};
