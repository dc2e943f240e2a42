// SPDX: CC0-1.0

//! Affine conversions between world units and screen pixels.
//!
//! World space is centered on the viewport with Y pointing up; screen space
//! is integer pixels with Y pointing down. Screen coordinates truncate
//! toward zero after scaling (not round), which rendering tests rely on.

use crate::{Number, Point, Viewport};

/// Pixels per world unit. One constant shared by every conversion, so
/// scales cannot get mixed within a redraw.
pub const SCALE: i32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mapper {
    width: i32,
    height: i32,
}

impl Mapper {
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    // The `as i32` casts truncate toward zero and are total: NaN becomes 0
    // and out-of-range values clamp. The integer half is saturating for the
    // same reason; the mapper never fails, a degenerate viewport just maps
    // degenerately.

    pub fn to_screen_x(&self, x: Number) -> i32 {
        (self.width / 2).saturating_add((x * Number::from(SCALE)) as i32)
    }

    pub fn to_screen_y(&self, y: Number) -> i32 {
        (self.height / 2).saturating_sub((y * Number::from(SCALE)) as i32)
    }

    pub fn to_screen(&self, p: Point<Number>) -> Point<i32> {
        Point {
            x: self.to_screen_x(p.x),
            y: self.to_screen_y(p.y),
        }
    }

    pub fn to_world_x(&self, px: i32) -> Number {
        Number::from(px - self.width / 2) / Number::from(SCALE)
    }

    pub fn to_world_y(&self, py: i32) -> Number {
        Number::from(self.height / 2 - py) / Number::from(SCALE)
    }
}
