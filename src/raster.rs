//! Midpoint rasterization primitives
//!
//! Pure integer routines that turn lines, circles and rectangles into pixel
//! coordinates. Nothing here touches a framebuffer; callers plot the points
//! wherever they like (see `render::Canvas`).
//!
//! Error terms are carried in `i64` so that any pair of `i32` inputs is valid.

use std::iter::FusedIterator;

/// An integer pixel coordinate
pub type Point = (i32, i32);

/// Iterator over the pixels of a straight line, both endpoints included
#[derive(Debug, Clone)]
pub struct Line {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Line {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    /// Number of points still to be produced
    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            ((self.x1 - self.x).abs().max((self.y1 - self.y).abs()) + 1) as usize
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        // Every visited coordinate lies between the two i32 endpoints.
        let point = (self.x as i32, self.y as i32);

        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }

        let e2 = self.err * 2;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line {}
impl FusedIterator for Line {}

/// Pixels of the line from `(x0, y0)` to `(x1, y1)`
///
/// Produces exactly `max(|dx|, |dy|) + 1` points, each 8-connected to the
/// previous one. A zero-length line yields its single point.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Line {
    Line::new(x0, y0, x1, y1)
}

/// Iterator over the outline of a circle
///
/// Walks the second octant with the midpoint decision variable and mirrors
/// every step into the other seven, so pixels where octants meet may repeat.
#[derive(Debug, Clone)]
pub struct Circle {
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    d: i64,
    octants: [Point; 8],
    pending: usize,
    finished: bool,
}

impl Circle {
    pub fn new(cx: i32, cy: i32, radius: i32) -> Self {
        let mut circle = Self {
            cx: cx as i64,
            cy: cy as i64,
            x: 0,
            y: radius as i64,
            d: 1 - radius as i64,
            octants: [(0, 0); 8],
            pending: 0,
            finished: radius < 0,
        };

        if radius == 0 {
            circle.octants[0] = (cx, cy);
            circle.pending = 1;
            circle.finished = true;
        } else if radius > 0 {
            circle.load_octants();
        }

        circle
    }

    fn load_octants(&mut self) {
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        let pts = [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ];

        // Points are handed out from the back of the buffer. Points that
        // fall outside the i32 plane are dropped.
        self.pending = 0;
        for (px, py) in pts.into_iter().rev() {
            if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
                self.octants[self.pending] = (px, py);
                self.pending += 1;
            }
        }
    }

    fn step(&mut self) {
        if self.d < 0 {
            self.d += 2 * self.x + 3;
        } else {
            self.d += 2 * (self.x - self.y) + 5;
            self.y -= 1;
        }
        self.x += 1;
    }
}

impl Iterator for Circle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if self.pending > 0 {
                self.pending -= 1;
                return Some(self.octants[self.pending]);
            }
            if self.finished || self.x >= self.y {
                self.finished = true;
                return None;
            }
            self.step();
            self.load_octants();
        }
    }
}

impl FusedIterator for Circle {}

/// Outline of the circle of `radius` centred on `(cx, cy)`
///
/// A zero radius yields the centre; a negative radius yields nothing.
pub fn circle(cx: i32, cy: i32, radius: i32) -> Circle {
    Circle::new(cx, cy, radius)
}

/// Closed boundary of the axis-aligned rectangle with opposite corners
/// `(x0, y0)` and `(x1, y1)`
///
/// Traced as four lines: bottom, right, top, left. Each corner appears at the
/// end of one edge and the start of the next.
pub fn rectangle(x0: i32, y0: i32, x1: i32, y1: i32) -> impl Iterator<Item = Point> + Clone {
    line(x0, y0, x1, y0)
        .chain(line(x1, y0, x1, y1))
        .chain(line(x1, y1, x0, y1))
        .chain(line(x0, y1, x0, y0))
}

/// Closed boundary of the square with corner `(x0, y0)` and side `side`
pub fn square(x0: i32, y0: i32, side: i32) -> impl Iterator<Item = Point> + Clone {
    rectangle(x0, y0, x0.saturating_add(side), y0.saturating_add(side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_walks_every_column() {
        let pts: Vec<_> = line(0, 3, 4, 3).collect();
        assert_eq!(pts, vec![(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn reversed_line_runs_backwards() {
        let pts: Vec<_> = line(2, 2, -1, -1).collect();
        assert_eq!(pts, vec![(2, 2), (1, 1), (0, 0), (-1, -1)]);
    }

    #[test]
    fn shallow_line_matches_bresenham() {
        let pts: Vec<_> = line(0, 0, 6, 2).collect();
        assert_eq!(
            pts,
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 2), (6, 2)]
        );
    }

    #[test]
    fn size_hint_is_exact() {
        let mut it = line(0, 0, 10, -3);
        assert_eq!(it.len(), 11);
        it.next();
        assert_eq!(it.len(), 10);
        assert_eq!(it.count(), 10);
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let it = line(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(it.len(), u32::MAX as usize + 1);
        let mut it = line(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
        assert_eq!(it.next(), Some((i32::MAX, i32::MAX)));
    }

    #[test]
    fn small_circle_outline() {
        let mut pts: Vec<_> = circle(0, 0, 1).collect();
        pts.sort();
        pts.dedup();
        assert_eq!(pts, vec![(-1, 0), (0, -1), (0, 1), (1, 0)]);
    }

    #[test]
    fn zero_and_negative_radius() {
        assert_eq!(circle(5, -2, 0).collect::<Vec<_>>(), vec![(5, -2)]);
        assert_eq!(circle(5, -2, -3).count(), 0);
    }

    #[test]
    fn circle_points_stay_near_radius() {
        let r = 20;
        for (x, y) in circle(0, 0, r) {
            let dist2 = x * x + y * y;
            assert!((dist2 - r * r).abs() <= 2 * r, "({x}, {y}) is off the ring");
        }
    }

    #[test]
    fn square_is_rectangle_with_equal_sides() {
        let a: Vec<_> = square(3, 4, 5).collect();
        let b: Vec<_> = rectangle(3, 4, 8, 9).collect();
        assert_eq!(a, b);
    }
}
