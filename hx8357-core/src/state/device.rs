//! Panel geometry per orientation

use crate::geometry::{Point, Window};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column address set (CASET)
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
/// Page (row) address set (PASET)
pub const PAGE_ADDRESS_SET: u8 = 0x2B;
/// Memory write (RAMWR)
pub const MEMORY_WRITE: u8 = 0x2C;

/// Native panel size, portrait
const NATIVE_WIDTH: u16 = 320;
const NATIVE_HEIGHT: u16 = 480;

/// Panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// 480 × 320, rows and columns exchanged by MADCTL
    #[default]
    Landscape,
    /// 320 × 480, native scan
    Portrait,
}

/// Drawing constants for the active orientation
///
/// The column register always takes the x range and the page register the
/// y range; the orientation only decides which of the two is written first
/// (`set_x_cmd`, then `set_y_cmd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    pub width: u16,
    pub height: u16,
    pub orientation: Orientation,
    /// Memory-write command
    pub ram_write_cmd: u8,
    /// Address register written first
    pub set_x_cmd: u8,
    /// Address register written second
    pub set_y_cmd: u8,
    /// MADCTL value
    pub memory_access: u8,
}

impl DeviceState {
    pub const fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => Self {
                width: NATIVE_HEIGHT,
                height: NATIVE_WIDTH,
                orientation,
                ram_write_cmd: MEMORY_WRITE,
                set_x_cmd: PAGE_ADDRESS_SET,
                set_y_cmd: COLUMN_ADDRESS_SET,
                memory_access: 0x3B,
            },
            Orientation::Portrait => Self {
                width: NATIVE_WIDTH,
                height: NATIVE_HEIGHT,
                orientation,
                ram_write_cmd: MEMORY_WRITE,
                set_x_cmd: COLUMN_ADDRESS_SET,
                set_y_cmd: PAGE_ADDRESS_SET,
                memory_access: 0x0A,
            },
        }
    }

    pub const fn full_window(&self) -> Window {
        Window::full_screen(self.width, self.height)
    }

    /// Window range carried by an address register
    pub const fn range_for(&self, cmd: u8, window: &Window) -> (u16, u16) {
        if cmd == COLUMN_ADDRESS_SET {
            (window.x0, window.x1)
        } else {
            (window.y0, window.y1)
        }
    }

    /// True when the point lies on the panel
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width as i32 && p.y < self.height as i32
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::for_orientation(Orientation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_constants() {
        let dev = DeviceState::for_orientation(Orientation::Landscape);
        assert_eq!((dev.width, dev.height), (480, 320));
        assert_eq!(dev.set_x_cmd, 0x2B);
        assert_eq!(dev.set_y_cmd, 0x2A);
        assert_eq!(dev.memory_access, 0x3B);
        assert_eq!(dev.ram_write_cmd, 0x2C);
    }

    #[test]
    fn test_portrait_constants() {
        let dev = DeviceState::for_orientation(Orientation::Portrait);
        assert_eq!((dev.width, dev.height), (320, 480));
        assert_eq!(dev.set_x_cmd, 0x2A);
        assert_eq!(dev.set_y_cmd, 0x2B);
        assert_eq!(dev.memory_access, 0x0A);
    }

    #[test]
    fn test_range_for_register() {
        let w = Window::new(1, 2, 300, 200);
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let dev = DeviceState::for_orientation(orientation);
            assert_eq!(dev.range_for(COLUMN_ADDRESS_SET, &w), (1, 300));
            assert_eq!(dev.range_for(PAGE_ADDRESS_SET, &w), (2, 200));
        }
    }

    #[test]
    fn test_contains() {
        let dev = DeviceState::default();
        assert!(dev.contains(Point::new(0, 0)));
        assert!(dev.contains(Point::new(479, 319)));
        assert!(!dev.contains(Point::new(480, 0)));
        assert!(!dev.contains(Point::new(-1, 5)));
    }
}
