//! Test doubles

use std::collections::HashSet;

use crate::color::Rgb565;
use crate::geometry::Window;
use crate::traits::Gram;

/// Framebuffer with controller-like window semantics
///
/// Pixels fill the current window row-major and wrap back to its origin.
/// Every window set and every pixel position written is recorded.
pub struct FrameBuffer {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<Rgb565>,
    pub windows: Vec<Window>,
    pub writes: Vec<(u16, u16)>,
    window: Option<Window>,
    cursor: (u16, u16),
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width as usize * height as usize],
            windows: Vec::new(),
            writes: Vec::new(),
            window: None,
            cursor: (0, 0),
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Rgb565 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Positions currently holding `color`
    pub fn lit(&self, color: Rgb565) -> HashSet<(u16, u16)> {
        let mut out = HashSet::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) == color {
                    out.insert((x, y));
                }
            }
        }
        out
    }
}

impl Gram for FrameBuffer {
    type Error = ();

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_window(&mut self, window: Window) -> Result<(), ()> {
        self.windows.push(window);
        self.window = Some(window);
        self.cursor = (window.x0, window.y0);
        Ok(())
    }

    fn write_pixel(&mut self, color: Rgb565) -> Result<(), ()> {
        let window = self.window.ok_or(())?;
        let (x, y) = self.cursor;

        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
        self.writes.push((x, y));

        self.cursor = if x < window.x1 {
            (x + 1, y)
        } else if y < window.y1 {
            (window.x0, y + 1)
        } else {
            (window.x0, window.y0)
        };
        Ok(())
    }
}
