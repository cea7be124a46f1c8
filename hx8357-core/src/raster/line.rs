//! Bresenham line
//!
//! Symmetric error form: both error terms grow by their axis delta every
//! step and the coordinate moves when its term exceeds the major distance.
//! The recurrence is run `distance + 2` times; its first two samples are
//! always the start point, so that duplicate is dropped and the line covers
//! exactly `distance + 1` pixels including both endpoints.

use crate::geometry::Point;

/// Iterator over the pixels of a line segment
#[derive(Debug, Clone)]
pub struct Line {
    current: Point,
    incx: i32,
    incy: i32,
    dx: i32,
    dy: i32,
    xerr: i32,
    yerr: i32,
    distance: i32,
    remaining: u32,
    last: Option<Point>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let distance = dx.abs().max(dy.abs());

        Self {
            current: start,
            incx: dx.signum(),
            incy: dy.signum(),
            dx: dx.abs(),
            dy: dy.abs(),
            xerr: 0,
            yerr: 0,
            distance,
            remaining: distance as u32 + 2,
            last: None,
        }
    }

    fn step(&mut self) {
        self.xerr += self.dx;
        self.yerr += self.dy;
        if self.xerr > self.distance {
            self.xerr -= self.distance;
            self.current.x += self.incx;
        }
        if self.yerr > self.distance {
            self.yerr -= self.distance;
            self.current.y += self.incy;
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.remaining > 0 {
            let p = self.current;
            self.remaining -= 1;
            self.step();

            if self.last != Some(p) {
                self.last = Some(p);
                return Some(p);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1)).collect()
    }

    #[test]
    fn test_horizontal_line() {
        let points = collect(0, 0, 10, 0);
        assert_eq!(points.len(), 11);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(*p, Point::new(i as i32, 0));
        }
    }

    #[test]
    fn test_diagonal_line() {
        let points = collect(0, 0, 5, 5);
        assert_eq!(points.len(), 6);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(*p, Point::new(i as i32, i as i32));
        }
    }

    #[test]
    fn test_reverse_vertical_line() {
        let points = collect(3, 7, 3, 2);
        let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![7, 6, 5, 4, 3, 2]);
        assert!(points.iter().all(|p| p.x == 3));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(collect(4, 4, 4, 4), vec![Point::new(4, 4)]);
    }

    #[test]
    fn test_shallow_slope() {
        // Minor axis steps once per two major steps
        let points = collect(0, 0, 4, 2);
        assert_eq!(points.first(), Some(&Point::new(0, 0)));
        assert_eq!(points.last(), Some(&Point::new(4, 2)));
        assert_eq!(points.len(), 5);
    }

    proptest! {
        #[test]
        fn test_line_connects_endpoints(
            x0 in -50i32..50, y0 in -50i32..50,
            x1 in -50i32..50, y1 in -50i32..50,
        ) {
            let points = collect(x0, y0, x1, y1);
            let distance = (x1 - x0).abs().max((y1 - y0).abs());

            prop_assert_eq!(points.len() as i32, distance + 1);
            prop_assert_eq!(points[0], Point::new(x0, y0));
            prop_assert_eq!(*points.last().unwrap(), Point::new(x1, y1));

            // 8-connected, no repeats
            for pair in points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1);
                prop_assert_ne!(a, b);
            }
        }
    }
}
