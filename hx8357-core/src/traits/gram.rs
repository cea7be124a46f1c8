//! Graphics RAM trait and the rasterizer built on it

use crate::color::Rgb565;
use crate::geometry::{Point, Window};
use crate::raster::{octants, CircleSteps, Line};

/// Windowed pixel sink
///
/// Implementors program an address window and stream pixels into it in
/// row-major order. Setting a window also arms the memory write, so pixels
/// may follow immediately.
pub trait Gram {
    type Error;

    /// Panel size in the current orientation, (width, height)
    fn size(&self) -> (u16, u16);

    /// Program the window and arm the memory write
    fn set_window(&mut self, window: Window) -> Result<(), Self::Error>;

    /// Write the next pixel of the current window
    fn write_pixel(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    /// Write the same color `count` times
    fn write_repeated(&mut self, color: Rgb565, count: u32) -> Result<(), Self::Error> {
        for _ in 0..count {
            self.write_pixel(color)?;
        }
        Ok(())
    }
}

/// Drawing primitives for every [`Gram`]
pub trait GramExt: Gram {
    /// The whole panel
    fn full_window(&self) -> Window {
        let (w, h) = self.size();
        Window::full_screen(w, h)
    }

    /// Re-address the whole panel after a partial write
    fn restore_full_window(&mut self) -> Result<(), Self::Error> {
        let full = self.full_window();
        self.set_window(full)
    }

    /// True when the point lies on the panel
    fn on_panel(&self, p: Point) -> bool {
        let (w, h) = self.size();
        p.x >= 0 && p.y >= 0 && p.x < w as i32 && p.y < h as i32
    }

    /// Address a single pixel
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), Self::Error> {
        self.set_window(Window::point(x, y))
    }

    /// Plot one pixel; off-panel points are skipped
    fn draw_point(&mut self, p: Point, color: Rgb565) -> Result<(), Self::Error> {
        if !self.on_panel(p) {
            return Ok(());
        }
        self.set_cursor(p.x as u16, p.y as u16)?;
        self.write_pixel(color)
    }

    /// Fill a rectangle, clipped to the panel
    fn fill(&mut self, window: Window, color: Rgb565) -> Result<(), Self::Error> {
        let Some(area) = window.intersect(&self.full_window()) else {
            return Ok(());
        };
        self.set_window(area)?;
        self.write_repeated(color, area.pixel_count())?;
        self.restore_full_window()
    }

    /// Fill the whole panel
    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        let full = self.full_window();
        self.fill(full, color)
    }

    fn draw_line(&mut self, start: Point, end: Point, color: Rgb565) -> Result<(), Self::Error> {
        for p in Line::new(start, end) {
            self.draw_point(p, color)?;
        }
        Ok(())
    }

    /// Outline between two corners
    fn draw_rectangle(&mut self, a: Point, b: Point, color: Rgb565) -> Result<(), Self::Error> {
        self.draw_line(Point::new(a.x, a.y), Point::new(b.x, a.y), color)?;
        self.draw_line(Point::new(a.x, a.y), Point::new(a.x, b.y), color)?;
        self.draw_line(Point::new(a.x, b.y), Point::new(b.x, b.y), color)?;
        self.draw_line(Point::new(b.x, a.y), Point::new(b.x, b.y), color)
    }

    /// Solid rectangle between two corners
    fn fill_rectangle(&mut self, a: Point, b: Point, color: Rgb565) -> Result<(), Self::Error> {
        let (w, h) = self.size();
        if w == 0 || h == 0 {
            return Ok(());
        }
        let clamp = |v: i32, max: u16| v.clamp(0, max as i32 - 1) as u16;

        // Entirely off one side
        if a.x.max(b.x) < 0 || a.y.max(b.y) < 0 || a.x.min(b.x) >= w as i32 || a.y.min(b.y) >= h as i32 {
            return Ok(());
        }

        let window = Window::new(clamp(a.x, w), clamp(a.y, h), clamp(b.x, w), clamp(b.y, h));
        self.fill(window, color)
    }

    /// Midpoint circle; `filled` also plots every interior span
    fn draw_circle(
        &mut self,
        center: Point,
        radius: u16,
        color: Rgb565,
        filled: bool,
    ) -> Result<(), Self::Error> {
        for step in CircleSteps::new(radius as i32) {
            if filled {
                for yi in step.x..=step.y {
                    for p in octants(center, step.x, yi) {
                        self.draw_point(p, color)?;
                    }
                }
            } else {
                for p in octants(center, step.x, step.y) {
                    self.draw_point(p, color)?;
                }
            }
        }
        Ok(())
    }

    /// Blit a `w × h` image of little-endian RGB565 pairs
    ///
    /// Stops early if `pixels` runs out; a trailing odd byte is ignored.
    fn draw_image(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        pixels: &[u8],
    ) -> Result<(), Self::Error> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let window = Window::from_origin(x, y, w, h);
        self.set_window(window)?;
        for pair in pixels.chunks_exact(2).take(window.pixel_count() as usize) {
            self.write_pixel(Rgb565::from_le_bytes([pair[0], pair[1]]))?;
        }
        self.restore_full_window()
    }
}

// Blanket implementation for all Gram types
impl<T: Gram + ?Sized> GramExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBuffer;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_draw_point_sets_one_pixel_window() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_point(Point::new(10, 20), Rgb565::RED).unwrap();

        assert_eq!(fb.windows, vec![Window::point(10, 20)]);
        assert_eq!(fb.pixel(10, 20), Rgb565::RED);
        assert_eq!(fb.writes, vec![(10, 20)]);
    }

    #[test]
    fn test_draw_point_off_panel_is_skipped() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_point(Point::new(-1, 0), Rgb565::RED).unwrap();
        fb.draw_point(Point::new(480, 0), Rgb565::RED).unwrap();
        assert!(fb.windows.is_empty());
        assert!(fb.writes.is_empty());
    }

    #[test]
    fn test_fill_streams_inclusive_rect_then_restores() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.fill(Window::new(10, 10, 19, 14), Rgb565::BLUE).unwrap();

        assert_eq!(fb.writes.len(), 50);
        assert_eq!(
            fb.windows,
            vec![Window::new(10, 10, 19, 14), Window::full_screen(480, 320)]
        );
        assert_eq!(fb.pixel(10, 10), Rgb565::BLUE);
        assert_eq!(fb.pixel(19, 14), Rgb565::BLUE);
        assert_eq!(fb.pixel(20, 14), Rgb565::BLACK);
    }

    #[test]
    fn test_fill_is_clipped() {
        let mut fb = FrameBuffer::new(100, 50);
        fb.fill(Window::new(90, 40, 200, 200), Rgb565::GREEN).unwrap();
        assert_eq!(fb.writes.len(), 10 * 10);
        assert_eq!(fb.windows[0], Window::new(90, 40, 99, 49));
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new(32, 16);
        fb.clear(Rgb565::WHITE).unwrap();
        assert_eq!(fb.writes.len(), 32 * 16);
        assert!(fb.pixels.iter().all(|&c| c == Rgb565::WHITE));
    }

    #[test]
    fn test_horizontal_line_pixels() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_line(Point::new(0, 0), Point::new(10, 0), Rgb565::RED).unwrap();

        let expected: Vec<(u16, u16)> = (0..=10).map(|x| (x, 0)).collect();
        assert_eq!(fb.writes, expected);
    }

    #[test]
    fn test_diagonal_line_pixels() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_line(Point::new(0, 0), Point::new(5, 5), Rgb565::RED).unwrap();

        let expected: Vec<(u16, u16)> = (0..=5).map(|i| (i, i)).collect();
        assert_eq!(fb.writes, expected);
    }

    #[test]
    fn test_rectangle_outline() {
        let mut fb = FrameBuffer::new(64, 64);
        fb.draw_rectangle(Point::new(2, 3), Point::new(7, 9), Rgb565::RED)
            .unwrap();

        let lit = fb.lit(Rgb565::RED);
        // Perimeter of a 6 × 7 box
        assert_eq!(lit.len(), 2 * 6 + 2 * 7 - 4);
        assert!(lit.contains(&(2, 3)));
        assert!(lit.contains(&(7, 9)));
        assert!(!lit.contains(&(4, 5)));
    }

    #[test]
    fn test_fill_rectangle_clamps_negative_corner() {
        let mut fb = FrameBuffer::new(64, 64);
        fb.fill_rectangle(Point::new(-5, -5), Point::new(3, 3), Rgb565::RED)
            .unwrap();
        assert_eq!(fb.writes.len(), 16);

        fb.writes.clear();
        fb.fill_rectangle(Point::new(-10, 0), Point::new(-1, 5), Rgb565::RED)
            .unwrap();
        assert!(fb.writes.is_empty());
    }

    #[test]
    fn test_fill_rectangle_on_empty_panel_is_noop() {
        let mut fb = FrameBuffer::new(0, 0);
        fb.fill_rectangle(Point::new(-5, -5), Point::new(3, 3), Rgb565::RED)
            .unwrap();
        assert!(fb.windows.is_empty());
        assert!(fb.writes.is_empty());
    }

    #[test]
    fn test_circle_symmetry() {
        let mut fb = FrameBuffer::new(480, 320);
        let c = Point::new(50, 50);
        fb.draw_circle(c, 10, Rgb565::RED, false).unwrap();

        let lit: HashSet<(i32, i32)> = fb
            .lit(Rgb565::RED)
            .into_iter()
            .map(|(x, y)| (x as i32 - 50, y as i32 - 50))
            .collect();

        assert!(lit.contains(&(0, 10)));
        assert!(lit.contains(&(-10, 0)));
        for &(x, y) in &lit {
            for reflected in [(-x, y), (x, -y), (y, x), (-y, -x)] {
                assert!(lit.contains(&reflected));
            }
        }
    }

    #[test]
    fn test_filled_circle_covers_center() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_circle(Point::new(100, 100), 8, Rgb565::GREEN, true)
            .unwrap();
        assert_eq!(fb.pixel(100, 100), Rgb565::GREEN);
        assert_eq!(fb.pixel(104, 104), Rgb565::GREEN);
        assert_eq!(fb.pixel(100, 108), Rgb565::GREEN);
        assert_eq!(fb.pixel(100, 109), Rgb565::BLACK);
    }

    #[test]
    fn test_circle_clips_at_edge() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_circle(Point::new(2, 2), 10, Rgb565::RED, false).unwrap();
        assert!(fb.writes.iter().all(|&(x, y)| x < 480 && y < 320));
        // Nothing wrapped around to the far side
        assert!(fb.writes.iter().all(|&(x, y)| x <= 12 && y <= 12));
    }

    #[test]
    fn test_draw_image_little_endian_pairs() {
        let mut fb = FrameBuffer::new(64, 64);
        let image = [0x1F, 0x00, 0x00, 0xF8, 0xE0, 0x07, 0xFF, 0xFF];
        fb.draw_image(4, 4, 2, 2, &image).unwrap();

        assert_eq!(fb.pixel(4, 4), Rgb565::BLUE);
        assert_eq!(fb.pixel(5, 4), Rgb565::RED);
        assert_eq!(fb.pixel(4, 5), Rgb565::GREEN);
        assert_eq!(fb.pixel(5, 5), Rgb565::WHITE);
        assert_eq!(*fb.windows.last().unwrap(), Window::full_screen(64, 64));
    }

    #[test]
    fn test_draw_image_short_data_stops() {
        let mut fb = FrameBuffer::new(64, 64);
        fb.draw_image(0, 0, 40, 40, &[0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(fb.writes.len(), 1);
    }

    proptest! {
        #[test]
        fn test_fill_writes_every_pixel_once(
            x0 in 0u16..64, y0 in 0u16..64, x1 in 0u16..64, y1 in 0u16..64,
        ) {
            let mut fb = FrameBuffer::new(64, 64);
            let window = Window::new(x0, y0, x1, y1);
            fb.fill(window, Rgb565::RED).unwrap();

            prop_assert_eq!(fb.writes.len() as u32, window.pixel_count());
            let unique: HashSet<(u16, u16)> = fb.writes.iter().copied().collect();
            prop_assert_eq!(unique.len(), fb.writes.len());
            prop_assert!(fb.writes.iter().all(|&(x, y)| window.contains(x, y)));
        }
    }
}
