// src/math/types/region.rs

use crate::math::types::{Bounds2D, Point};
use std::cmp::Ordering;

/// Position of a point relative to a viewport box: inside, in one of the four
/// side strips, or in one of the four corner quadrants.
///
/// Points on the box boundary classify as `Inside`. The partition is total
/// for any finite coordinates, including the extreme values substituted for
/// infinities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Inside,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
}

impl Region {
    /// Classifies `p` against `bounds`.
    pub fn classify(p: Point, bounds: &Bounds2D) -> Region {
        let horizontal = if p.x < bounds.min.x {
            Ordering::Less
        } else if p.x > bounds.max.x {
            Ordering::Greater
        } else {
            Ordering::Equal
        };
        let vertical = if p.y < bounds.min.y {
            Ordering::Less
        } else if p.y > bounds.max.y {
            Ordering::Greater
        } else {
            Ordering::Equal
        };

        match (horizontal, vertical) {
            (Ordering::Equal, Ordering::Equal) => Region::Inside,
            (Ordering::Less, Ordering::Equal) => Region::West,
            (Ordering::Less, Ordering::Less) => Region::SouthWest,
            (Ordering::Equal, Ordering::Less) => Region::South,
            (Ordering::Greater, Ordering::Less) => Region::SouthEast,
            (Ordering::Greater, Ordering::Equal) => Region::East,
            (Ordering::Greater, Ordering::Greater) => Region::NorthEast,
            (Ordering::Equal, Ordering::Greater) => Region::North,
            (Ordering::Less, Ordering::Greater) => Region::NorthWest,
        }
    }

    pub fn is_inside(self) -> bool {
        self == Region::Inside
    }

    /// The box side(s) an edge leaving through this region is projected onto:
    /// a primary side, and for the corner quadrants a secondary side that is
    /// only tried when the primary yields no segment intersection. Sides are
    /// ordered corner pairs; the order matters for downstream intersection
    /// parameters. Returns `None` for `Inside`.
    pub fn candidate_sides(self, bounds: &Bounds2D) -> Option<([Point; 2], Option<[Point; 2]>)> {
        let left = [bounds.bottom_left(), bounds.top_left()];
        let bottom = [bounds.bottom_left(), bounds.bottom_right()];
        let right = [bounds.bottom_right(), bounds.top_right()];
        let top = [bounds.top_right(), bounds.top_left()];

        match self {
            Region::Inside => None,
            Region::West => Some((left, None)),
            Region::SouthWest => Some((left, Some(bottom))),
            Region::South => Some((bottom, None)),
            Region::SouthEast => Some((bottom, Some(right))),
            Region::East => Some((right, None)),
            Region::NorthEast => Some((right, Some(top))),
            Region::North => Some((top, None)),
            Region::NorthWest => Some((top, Some(left))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds2D {
        Bounds2D::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn test_probe_points_hit_all_eight_outside_regions() {
        let bounds = unit_box();
        let cases = [
            (Point::new(-5.0, 5.0), Region::West),
            (Point::new(-5.0, -5.0), Region::SouthWest),
            (Point::new(5.0, -5.0), Region::South),
            (Point::new(15.0, -5.0), Region::SouthEast),
            (Point::new(15.0, 5.0), Region::East),
            (Point::new(15.0, 15.0), Region::NorthEast),
            (Point::new(5.0, 15.0), Region::North),
            (Point::new(-5.0, 15.0), Region::NorthWest),
        ];
        for (probe, expected) in cases {
            assert_eq!(Region::classify(probe, &bounds), expected, "{probe:?}");
        }
    }

    #[test]
    fn test_interior_and_boundary_points_are_inside() {
        let bounds = unit_box();
        let probes = [
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        for probe in probes {
            assert_eq!(Region::classify(probe, &bounds), Region::Inside, "{probe:?}");
        }
    }

    #[test]
    fn test_extreme_coordinates_classify() {
        let bounds = unit_box();
        assert_eq!(
            Region::classify(Point::new(f64::MIN, 5.0), &bounds),
            Region::West
        );
        assert_eq!(
            Region::classify(Point::new(f64::MAX, f64::MAX), &bounds),
            Region::NorthEast
        );
    }

    #[test]
    fn test_candidate_sides_table() {
        let bounds = unit_box();
        let left = [Point::new(0.0, 0.0), Point::new(0.0, 10.0)];
        let bottom = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let right = [Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        let top = [Point::new(10.0, 10.0), Point::new(0.0, 10.0)];

        assert_eq!(Region::West.candidate_sides(&bounds), Some((left, None)));
        assert_eq!(
            Region::SouthWest.candidate_sides(&bounds),
            Some((left, Some(bottom)))
        );
        assert_eq!(Region::South.candidate_sides(&bounds), Some((bottom, None)));
        assert_eq!(
            Region::SouthEast.candidate_sides(&bounds),
            Some((bottom, Some(right)))
        );
        assert_eq!(Region::East.candidate_sides(&bounds), Some((right, None)));
        assert_eq!(
            Region::NorthEast.candidate_sides(&bounds),
            Some((right, Some(top)))
        );
        assert_eq!(Region::North.candidate_sides(&bounds), Some((top, None)));
        assert_eq!(
            Region::NorthWest.candidate_sides(&bounds),
            Some((top, Some(left)))
        );
        assert_eq!(Region::Inside.candidate_sides(&bounds), None);
    }
}
