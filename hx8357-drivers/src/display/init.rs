//! HX8357B power-up sequence
//!
//! Register values for the 3.2" 320×480 module this driver targets. The
//! memory access control written here is overridden by the orientation
//! setup that follows.

use super::hx8357b::reg;

/// One entry of an init table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    /// Register followed by its parameter bytes
    Command(u8, &'static [u8]),
    /// Wait after everything before it has reached the panel
    DelayMs(u32),
}

use InitStep::{Command, DelayMs};

pub static HX8357B_INIT: &[InitStep] = &[
    Command(reg::SLEEP_OUT, &[]),
    DelayMs(120),
    Command(reg::SET_EQ, &[0x02, 0x01, 0x02, 0x01]),
    Command(
        reg::SET_DIR_TIMING,
        &[
            0x00, 0x00, 0x9A, 0x9A, 0x9B, 0x9B, 0x00, 0x00, 0x00, 0x00, 0xAE, 0xAE, 0x01, 0xA2,
            0x00,
        ],
    ),
    Command(reg::SET_DISPLAY_MODE, &[0x00]),
    Command(reg::SET_PANEL_DRIVING, &[0x10, 0x3B, 0x00, 0x02, 0x11]),
    Command(reg::SET_DISPLAY_TIMING, &[0x10]),
    Command(
        reg::SET_GAMMA,
        &[0x00, 0x46, 0x12, 0x20, 0x0C, 0x00, 0x56, 0x12, 0x67, 0x02, 0x00, 0x0C],
    ),
    Command(reg::SET_POWER, &[0x44, 0x42, 0x06]),
    Command(reg::SET_VCOM, &[0x43, 0x16]),
    Command(reg::SET_POWER_NORMAL, &[0x04, 0x22]),
    Command(reg::SET_POWER_PARTIAL, &[0x04, 0x12]),
    Command(reg::SET_POWER_IDLE, &[0x07, 0x12]),
    Command(reg::SET_PANEL_RELATED, &[0x00]),
    Command(reg::SET_FRAME_RATE, &[0x08]),
    Command(reg::MEMORY_ACCESS_CONTROL, &[0x0A]),
    Command(reg::PIXEL_FORMAT, &[0x55]),
    DelayMs(120),
    Command(reg::INVERSION_ON, &[]),
    Command(reg::DISPLAY_ON, &[]),
    DelayMs(50),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_with_sleep_out() {
        assert_eq!(HX8357B_INIT[0], Command(reg::SLEEP_OUT, &[]));
        assert_eq!(HX8357B_INIT[1], DelayMs(120));
    }

    #[test]
    fn test_sequence_ends_with_display_on() {
        let n = HX8357B_INIT.len();
        assert_eq!(HX8357B_INIT[n - 2], Command(reg::DISPLAY_ON, &[]));
        assert_eq!(HX8357B_INIT[n - 1], DelayMs(50));
    }

    #[test]
    fn test_pixel_format_is_16_bit() {
        assert!(HX8357B_INIT.contains(&Command(reg::PIXEL_FORMAT, &[0x55])));
    }

    #[test]
    fn test_total_delay() {
        let total: u32 = HX8357B_INIT
            .iter()
            .map(|s| match s {
                DelayMs(ms) => *ms,
                Command(..) => 0,
            })
            .sum();
        assert_eq!(total, 290);
    }
}
