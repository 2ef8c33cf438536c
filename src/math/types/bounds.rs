// src/math/types/bounds.rs

use crate::math::error::*;
use crate::math::types::Point;
use std::fmt;

/// The coordinate value marking a viewport as "no clipping requested".
const DISABLED_COORD: f64 = -1.0;

/// 2D Bounding Box (Axis-Aligned Bounding Box), used as the render viewport.
///
/// A box either satisfies `min.x <= max.x && min.y <= max.y`, or it is the
/// distinguished disabled value (all four components −1). Callers building a
/// box from upstream data are responsible for the invariant; the clipping
/// algorithms execute on a violating box without panicking, but their result
/// is unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point,
    pub max: Point,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point, max: Point) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            min: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// The disabled viewport: no clipping requested.
    pub fn disabled() -> Self {
        Self {
            min: Point::new(DISABLED_COORD, DISABLED_COORD),
            max: Point::new(DISABLED_COORD, DISABLED_COORD),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.min.x == DISABLED_COORD
            && self.min.y == DISABLED_COORD
            && self.max.x == DISABLED_COORD
            && self.max.y == DISABLED_COORD
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.is_finite()
            && self.max.is_finite()
    }

    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Erweitert die Bounding Box um einen Margin
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Erweitert die Bounding Box um verschiedene Margins pro Achse
    pub fn expand_xy(&self, margin_x: f64, margin_y: f64) -> Self {
        Self {
            min: Point::new(self.min.x - margin_x, self.min.y - margin_y),
            max: Point::new(self.max.x + margin_x, self.max.y + margin_y),
        }
    }

    pub fn bottom_left(&self) -> Point {
        self.min
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }

    pub fn top_right(&self) -> Point {
        self.max
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box
    pub fn corners(&self) -> [Point; 4] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_disabled() {
            write!(f, "Bounds2D(disabled)")
        } else {
            write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(Bounds2D::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0)).is_err());
        assert!(Bounds2D::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_disabled_sentinel() {
        let disabled = Bounds2D::disabled();
        assert!(disabled.is_disabled());

        let real = Bounds2D::from_points(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(!real.is_disabled());
    }

    #[test]
    fn test_contains_point_includes_boundary() {
        let bounds = Bounds2D::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(bounds.contains_point(Point::new(0.0, 5.0)));
        assert!(bounds.contains_point(Point::new(10.0, 10.0)));
        assert!(!bounds.contains_point(Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_expand() {
        let bounds = Bounds2D::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let padded = bounds.expand(5.0);
        assert_eq!(padded.min, Point::new(-5.0, -5.0));
        assert_eq!(padded.max, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point::new(3.0, 4.0));

        assert!(Bounds2D::from_points_iter(std::iter::empty()).is_none());
    }
}
