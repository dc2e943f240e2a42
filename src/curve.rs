// SPDX: CC0-1.0

//! Column-by-column sampling of `y = f(x)` into a polyline.
//!
//! One secant segment per pixel column gives exactly `width - 1` segments
//! and O(width) evaluator calls, with visual continuity proportional to
//! pixel density. Near an asymptote the secant simply spans the jump as a
//! near-vertical line; that is accepted behavior, not something to smooth
//! over with adaptive sampling.

use crate::eval;
use crate::map::Mapper;
use crate::{Color, Point, Segment};

/// Lazy, finite, restartable sequence of curve segments. Construct one per
/// redraw; the expression is re-parsed on every evaluation by design.
#[derive(Clone, Copy, Debug)]
pub struct CurveSampler<'expr> {
    expr: &'expr str,
    map: Mapper,
    px: i32,
}

impl<'expr> CurveSampler<'expr> {
    pub const fn new(expr: &'expr str, map: Mapper) -> Self {
        Self { expr, map, px: 0 }
    }
}

impl Iterator for CurveSampler<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let px = self.px;
        if px >= self.map.width() - 1 {
            return None;
        }
        self.px += 1;

        let y1 = eval::evaluate(self.expr, self.map.to_world_x(px));
        let y2 = eval::evaluate(self.expr, self.map.to_world_x(px + 1));

        Some(Segment::new(
            Point {
                x: px,
                y: self.map.to_screen_y(y1),
            },
            Point {
                x: px + 1,
                y: self.map.to_screen_y(y2),
            },
            Color::Curve,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.map.width() - 1 - self.px).max(0) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CurveSampler<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;

    fn mapper(width: i32, height: i32) -> Mapper {
        Mapper::new(Viewport { width, height })
    }

    #[test]
    fn yields_exactly_width_minus_one_segments() {
        assert_eq!(CurveSampler::new("x", mapper(1000, 750)).count(), 999);
        assert_eq!(CurveSampler::new("x", mapper(2, 2)).count(), 1);
        assert_eq!(CurveSampler::new("x", mapper(1, 1)).count(), 0);
        assert_eq!(CurveSampler::new("x", mapper(0, 0)).count(), 0);
    }

    #[test]
    fn segment_count_is_independent_of_expression_content() {
        // NaN everywhere
        assert_eq!(CurveSampler::new("0/0", mapper(100, 100)).count(), 99);
        // not even an expression
        assert_eq!(CurveSampler::new("?!", mapper(100, 100)).count(), 99);
    }

    #[test]
    fn columns_are_consecutive() {
        let segments: Vec<_> = CurveSampler::new("x*x", mapper(10, 10)).collect();
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.from.x, i as i32);
            assert_eq!(seg.to.x, i as i32 + 1);
            assert_eq!(seg.color, Color::Curve);
        }
    }

    #[test]
    fn straight_line_lands_on_the_axis_diagonal() {
        // f(x) = x: screen y mirrors screen x around the center
        let map = mapper(200, 200);
        for seg in CurveSampler::new("x", map) {
            let expected = map.to_screen_y(map.to_world_x(seg.from.x));
            assert_eq!(seg.from.y, expected);
        }
    }
}
