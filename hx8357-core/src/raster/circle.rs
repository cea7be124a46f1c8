//! Midpoint circle
//!
//! Walks one octant from (0, r) with the integer decision variable
//! `d = 3 - 2r`; the other seven octants are reflections.

use crate::geometry::Point;

/// One octant sample and the decision value it was taken with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleStep {
    pub x: i32,
    pub y: i32,
    pub d: i32,
}

/// Iterator over the first-octant samples of a circle of radius `r`
///
/// Yields while `x <= y`.
#[derive(Debug, Clone)]
pub struct CircleSteps {
    x: i32,
    y: i32,
    d: i32,
}

impl CircleSteps {
    pub fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            d: 3 - 2 * radius,
        }
    }
}

impl Iterator for CircleSteps {
    type Item = CircleStep;

    fn next(&mut self) -> Option<CircleStep> {
        if self.x > self.y {
            return None;
        }

        let step = CircleStep {
            x: self.x,
            y: self.y,
            d: self.d,
        };

        if self.d < 0 {
            self.d += 4 * self.x + 6;
        } else {
            self.d += 4 * (self.x - self.y) + 10;
            self.y -= 1;
        }
        self.x += 1;

        Some(step)
    }
}

/// The eight reflections of (x, y) around `center`
pub fn octants(center: Point, x: i32, y: i32) -> [Point; 8] {
    let (xc, yc) = (center.x, center.y);
    [
        Point::new(xc + x, yc + y),
        Point::new(xc - x, yc + y),
        Point::new(xc + x, yc - y),
        Point::new(xc - x, yc - y),
        Point::new(xc + y, yc + x),
        Point::new(xc - y, yc + x),
        Point::new(xc + y, yc - x),
        Point::new(xc - y, yc - x),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_radius_zero() {
        let steps: Vec<CircleStep> = CircleSteps::new(0).collect();
        assert_eq!(steps, vec![CircleStep { x: 0, y: 0, d: 3 }]);
    }

    #[test]
    fn test_radius_ten_first_steps() {
        let steps: Vec<CircleStep> = CircleSteps::new(10).collect();
        assert_eq!(steps[0], CircleStep { x: 0, y: 10, d: -17 });
        assert_eq!(steps[1], CircleStep { x: 1, y: 10, d: -11 });
        assert_eq!(steps[2], CircleStep { x: 2, y: 10, d: -1 });
        assert_eq!(steps[3], CircleStep { x: 3, y: 10, d: 13 });
        assert_eq!(steps[4], CircleStep { x: 4, y: 9, d: -5 });

        let last = steps.last().unwrap();
        assert!(last.x <= last.y);
    }

    #[test]
    fn test_octants_cover_axes() {
        let pts = octants(Point::new(50, 50), 0, 10);
        assert!(pts.contains(&Point::new(50, 60)));
        assert!(pts.contains(&Point::new(50, 40)));
        assert!(pts.contains(&Point::new(60, 50)));
        assert!(pts.contains(&Point::new(40, 50)));
    }

    proptest! {
        #[test]
        fn test_decision_follows_recurrence(r in 0i32..200) {
            let steps: Vec<CircleStep> = CircleSteps::new(r).collect();
            prop_assert_eq!(steps[0], CircleStep { x: 0, y: r, d: 3 - 2 * r });

            for pair in steps.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert_eq!(b.x, a.x + 1);
                if a.d < 0 {
                    prop_assert_eq!(b.d, a.d + 4 * a.x + 6);
                    prop_assert_eq!(b.y, a.y);
                } else {
                    prop_assert_eq!(b.d, a.d + 4 * (a.x - a.y) + 10);
                    prop_assert_eq!(b.y, a.y - 1);
                }
            }
        }

        #[test]
        fn test_samples_stay_near_radius(r in 1i32..200) {
            for s in CircleSteps::new(r) {
                let dist2 = s.x * s.x + s.y * s.y;
                prop_assert!((dist2 - r * r).abs() <= 2 * r + 1);
            }
        }
    }
}
