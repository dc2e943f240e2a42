// SPDX: CC0-1.0

//! Vector-spec parsing and arrow geometry.
//!
//! Unlike expression evaluation, parsing a vector spec is allowed to fail:
//! it happens on an explicit commit action, where a clear error beats
//! silently drawing a wrong arrow. The caller keeps the prior vector on
//! error.

use crate::map::Mapper;
use crate::{Color, Number, Point, Segment};
use core::{fmt, num::ParseFloatError};

/// Barb length in pixels.
const BARB: Number = 10.0;

/// Angle between the shaft and each barb, in radians.
fn barb_angle() -> Number {
    25f64.to_radians()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrTyp {
    MissingComponent,
    InvalidNumber(ParseFloatError),
}

impl fmt::Display for ParseErrTyp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComponent => write!(f, "expected two comma-separated components"),
            Self::InvalidNumber(err) => write!(f, "invalid number: {err}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErr {
    pub typ: ParseErrTyp,
    /// The component text that failed to parse.
    pub text: String,
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in '{}'", self.typ, self.text)
    }
}

impl std::error::Error for ParseErr {}

/// A direction and an origin, both in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorSpec {
    pub dir: Point<Number>,
    pub origin: Point<Number>,
}

impl VectorSpec {
    pub const fn new(dir: Point<Number>, origin: Point<Number>) -> Self {
        Self { dir, origin }
    }

    /// Parses `"dx,dy"` or `"dx,dy;x0,y0"`. The semicolon separates the
    /// direction from the optional origin.
    pub fn parse(input: &str) -> Result<Self, ParseErr> {
        let mut parts = input.splitn(2, ';');
        let dir = parts.next().unwrap_or("");
        let pos = parts.next();
        Self::from_parts(dir, pos)
    }

    /// Two-string form: a direction spec and an optional position spec.
    /// An absent or empty position means the origin `(0,0)`.
    pub fn from_parts(dir: &str, pos: Option<&str>) -> Result<Self, ParseErr> {
        let dir = parse_pair(dir)?;
        let origin = match pos.map(str::trim) {
            Some(pos) if !pos.is_empty() => parse_pair(pos)?,
            _ => Point { x: 0.0, y: 0.0 },
        };
        Ok(Self::new(dir, origin))
    }
}

/// Splits on `,` and parses the first two components; anything after a
/// second comma is ignored.
fn parse_pair(text: &str) -> Result<Point<Number>, ParseErr> {
    let mut parts = text.split(',');
    let x = parse_component(&mut parts, text)?;
    let y = parse_component(&mut parts, text)?;
    Ok(Point { x, y })
}

fn parse_component<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    whole: &str,
) -> Result<Number, ParseErr> {
    let part = parts.next().ok_or_else(|| ParseErr {
        typ: ParseErrTyp::MissingComponent,
        text: whole.trim().to_string(),
    })?;
    let part = part.trim();
    part.parse().map_err(|err| ParseErr {
        typ: ParseErrTyp::InvalidNumber(err),
        text: part.to_string(),
    })
}

/// Screen-space arrow geometry: the shaft plus two barbs off the tip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrow {
    pub shaft: Segment,
    pub barbs: [Segment; 2],
}

impl Arrow {
    /// Endpoint is origin + direction in world units; the barbs are fixed
    /// 10-pixel segments computed in screen space after Y-inversion, so the
    /// arrowhead looks right regardless of vector magnitude or quadrant.
    pub fn build(spec: &VectorSpec, map: &Mapper) -> Self {
        let from = map.to_screen(spec.origin);
        let tip = map.to_screen(Point {
            x: spec.origin.x + spec.dir.x,
            y: spec.origin.y + spec.dir.y,
        });

        let theta = Number::atan2(
            Number::from(tip.y) - Number::from(from.y),
            Number::from(tip.x) - Number::from(from.x),
        );
        let phi = barb_angle();
        let barbs = [theta + phi, theta - phi].map(|rho| {
            let end = Point {
                x: (Number::from(tip.x) - BARB * rho.cos()) as i32,
                y: (Number::from(tip.y) - BARB * rho.sin()) as i32,
            };
            Segment::new(tip, end, Color::Vector)
        });

        Self {
            shaft: Segment::new(from, tip, Color::Vector),
            barbs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;

    fn mapper() -> Mapper {
        Mapper::new(Viewport {
            width: 1000,
            height: 750,
        })
    }

    #[test]
    fn direction_only_starts_at_the_origin() {
        let spec = VectorSpec::parse("3,2").unwrap();
        let arrow = Arrow::build(&spec, &mapper());
        assert_eq!(arrow.shaft.from, Point { x: 500, y: 375 });
        assert_eq!(arrow.shaft.to, Point { x: 620, y: 295 });
    }

    #[test]
    fn explicit_origin_offsets_the_shaft() {
        let spec = VectorSpec::parse("1,1;2,2").unwrap();
        let arrow = Arrow::build(&spec, &mapper());
        assert_eq!(arrow.shaft.from, Point { x: 580, y: 295 });
        assert_eq!(arrow.shaft.to, Point { x: 620, y: 255 });
    }

    #[test]
    fn whitespace_and_signs_are_tolerated() {
        let spec = VectorSpec::parse(" -3 , 2.5 ; 0 , -1 ").unwrap();
        assert_eq!(spec.dir, Point { x: -3.0, y: 2.5 });
        assert_eq!(spec.origin, Point { x: 0.0, y: -1.0 });
    }

    #[test]
    fn empty_position_part_defaults_to_origin() {
        let spec = VectorSpec::parse("3,2;").unwrap();
        assert_eq!(spec.origin, Point { x: 0.0, y: 0.0 });
        assert_eq!(spec, VectorSpec::from_parts("3,2", None).unwrap());
    }

    #[test]
    fn malformed_numbers_are_errors() {
        let err = VectorSpec::parse("abc,2").unwrap_err();
        assert!(matches!(err.typ, ParseErrTyp::InvalidNumber(_)));
        assert_eq!(err.text, "abc");

        let err = VectorSpec::parse("3").unwrap_err();
        assert_eq!(err.typ, ParseErrTyp::MissingComponent);

        assert!(VectorSpec::parse("1,2;x,4").is_err());
        assert!(VectorSpec::parse("").is_err());
    }

    #[test]
    fn barbs_hang_off_the_tip_at_fixed_length() {
        let spec = VectorSpec::parse("3,2").unwrap();
        let arrow = Arrow::build(&spec, &mapper());
        for barb in arrow.barbs {
            assert_eq!(barb.from, arrow.shaft.to);
            let dx = Number::from(barb.to.x - barb.from.x);
            let dy = Number::from(barb.to.y - barb.from.y);
            let len = dx.hypot(dy);
            // within truncation error of the 10px target
            assert!((len - BARB).abs() < 1.5, "barb length {len}");
        }
        assert_ne!(arrow.barbs[0].to, arrow.barbs[1].to);
    }

    #[test]
    fn arrow_size_is_independent_of_magnitude() {
        let small = Arrow::build(&VectorSpec::parse("0.5,0").unwrap(), &mapper());
        let large = Arrow::build(&VectorSpec::parse("8,0").unwrap(), &mapper());
        for (s, l) in small.barbs.iter().zip(large.barbs.iter()) {
            assert_eq!(s.to.x - s.from.x, l.to.x - l.from.x);
            assert_eq!(s.to.y - s.from.y, l.to.y - l.from.y);
        }
    }
}
