// SPDX: CC0-1.0

pub mod curve;
pub mod eval;
pub mod map;
pub mod shell;
pub mod vector;

use crate::curve::CurveSampler;
use crate::map::Mapper;
use crate::vector::{Arrow, ParseErr, VectorSpec};
use core::fmt;

pub type Number = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Role of a segment in the display list. Renderers pick concrete styling
/// from this, the core never deals in toolkit color types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Axis,
    Curve,
    Vector,
}

impl Color {
    pub const fn rgb(&self) -> &'static str {
        match self {
            Self::Axis => "#d3d3d3",
            Self::Curve => "#00ffff",
            Self::Vector => "#ff0000",
        }
    }
}

/// A drawable straight line between two screen points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: Point<i32>,
    pub to: Point<i32>,
    pub color: Color,
}

impl Segment {
    pub const fn new(from: Point<i32>, to: Point<i32>, color: Color) -> Self {
        Self { from, to, color }
    }
}

/// The state behind one graph: the current expression and the current
/// vector. Rendering is a pure function of this state and a viewport, so a
/// caller may redraw as often as it likes.
#[derive(Clone, Debug)]
pub struct Graph {
    expr: String,
    vector: VectorSpec,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            expr: String::from("x*x"),
            vector: VectorSpec::new(Point { x: 3.0, y: 2.0 }, Point { x: 0.0, y: 0.0 }),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expr
    }

    pub const fn vector(&self) -> &VectorSpec {
        &self.vector
    }

    /// Stores the expression as-is. Whatever the user typed is acceptable
    /// here: evaluation degrades gracefully on malformed input.
    pub fn set_expression(&mut self, text: impl Into<String>) {
        self.expr = text.into();
    }

    /// Parses and stores a vector spec (`"dx,dy"` or `"dx,dy;x0,y0"`).
    /// On error the previously stored vector is kept.
    pub fn set_vector(&mut self, text: &str) -> Result<(), ParseErr> {
        self.vector = VectorSpec::parse(text)?;
        Ok(())
    }

    /// Produces the full display list for one redraw: axes, then the
    /// sampled curve, then the vector arrow.
    pub fn render(&self, viewport: Viewport) -> Vec<Segment> {
        let map = Mapper::new(viewport);
        let mut out = Vec::new();

        // axes through the world origin
        let y0 = map.to_screen_y(0.0);
        let x0 = map.to_screen_x(0.0);
        out.push(Segment::new(
            Point { x: 0, y: y0 },
            Point {
                x: viewport.width,
                y: y0,
            },
            Color::Axis,
        ));
        out.push(Segment::new(
            Point { x: x0, y: 0 },
            Point {
                x: x0,
                y: viewport.height,
            },
            Color::Axis,
        ));

        out.extend(CurveSampler::new(&self.expr, map));

        let arrow = Arrow::build(&self.vector, &map);
        out.push(arrow.shaft);
        out.extend(arrow.barbs);

        out
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_counts_axes_curve_and_arrow() {
        let graph = Graph::new();
        let viewport = Viewport {
            width: 100,
            height: 80,
        };
        let segments = graph.render(viewport);
        // 2 axes + (width - 1) curve segments + shaft + 2 barbs
        assert_eq!(segments.len(), 2 + 99 + 3);
        assert_eq!(segments.iter().filter(|s| s.color == Color::Axis).count(), 2);
        assert_eq!(
            segments.iter().filter(|s| s.color == Color::Vector).count(),
            3
        );
    }

    #[test]
    fn set_vector_rejects_bad_input_and_keeps_old() {
        let mut graph = Graph::new();
        graph.set_vector("1,1;2,2").unwrap();
        let before = *graph.vector();
        assert!(graph.set_vector("abc,2").is_err());
        assert_eq!(*graph.vector(), before);
    }

    #[test]
    fn render_never_fails_on_garbage_expression() {
        let mut graph = Graph::new();
        graph.set_expression(")(*&^%$");
        let viewport = Viewport {
            width: 50,
            height: 50,
        };
        assert_eq!(graph.render(viewport).len(), 2 + 49 + 3);
    }
}
