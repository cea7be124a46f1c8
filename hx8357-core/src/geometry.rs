//! Points and address windows

/// Signed pixel coordinate
///
/// Signed so that shapes may extend past the panel edge; such points are
/// clipped when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Rectangular GRAM region, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Window spanning two corners in any order
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self { x0, y0, x1, y1 }
    }

    /// Single pixel
    pub const fn point(x: u16, y: u16) -> Self {
        Self { x0: x, y0: y, x1: x, y1: y }
    }

    /// `w × h` block with its top-left corner at (x, y)
    ///
    /// `w` and `h` must be non-zero.
    pub const fn from_origin(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x.saturating_add(w.saturating_sub(1)),
            y1: y.saturating_add(h.saturating_sub(1)),
        }
    }

    /// Whole panel of the given size
    pub const fn full_screen(width: u16, height: u16) -> Self {
        Self::from_origin(0, 0, width, height)
    }

    pub const fn width(&self) -> u32 {
        (self.x1 - self.x0) as u32 + 1
    }

    pub const fn height(&self) -> u32 {
        (self.y1 - self.y0) as u32 + 1
    }

    /// Pixels streamed to fill the window
    pub const fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Overlap with another window
    pub fn intersect(&self, other: &Window) -> Option<Window> {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        if x0 <= x1 && y0 <= y1 {
            Some(Window { x0, y0, x1, y1 })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_inclusive() {
        let w = Window::new(10, 20, 19, 21);
        assert_eq!(w.width(), 10);
        assert_eq!(w.height(), 2);
        assert_eq!(w.pixel_count(), 20);
    }

    #[test]
    fn test_window_normalizes_corners() {
        assert_eq!(Window::new(5, 9, 1, 2), Window::new(1, 2, 5, 9));
    }

    #[test]
    fn test_full_screen() {
        let w = Window::full_screen(480, 320);
        assert_eq!(w, Window::new(0, 0, 479, 319));
        assert_eq!(w.pixel_count(), 480 * 320);
    }

    #[test]
    fn test_intersect() {
        let panel = Window::full_screen(480, 320);
        let clipped = Window::new(400, 300, 600, 400).intersect(&panel);
        assert_eq!(clipped, Some(Window::new(400, 300, 479, 319)));
        assert_eq!(Window::new(0, 0, 1, 1).intersect(&Window::point(5, 5)), None);
    }
}
