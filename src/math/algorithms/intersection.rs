// src/math/algorithms/intersection.rs

//! Segment/segment intersection.
//!
//! Solves the 2×2 parametric system for the lines p1→p2 and p3→p4 with the
//! standard determinant formula. Total: the parallel/degenerate case is
//! reported through the result value, never as an error.

use crate::math::types::Point;

/// Coordinates above this magnitude are uniformly rescaled before solving.
/// The determinant multiplies two coordinate differences; inputs carrying the
/// finite extremes substituted for infinities would overflow it otherwise.
/// Scaling all eight coordinates by one factor leaves t1 and t2 unchanged.
const RESCALE_LIMIT: f64 = 1e150;

/// Result of intersecting segment p1→p2 with segment p3→p4.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentIntersection {
    /// The infinite carrier lines intersect in a single point.
    pub lines_intersect: bool,
    /// The intersection lies within both segments (t1 and t2 in [0, 1]).
    pub segments_intersect: bool,
    /// Intersection of the carrier lines; (NaN, NaN) when parallel.
    pub point: Point,
    /// Point on p1→p2 closest to the line intersection (t1 clamped to [0, 1]).
    pub closest_on_first: Point,
    /// Point on p3→p4 closest to the line intersection (t2 clamped to [0, 1]).
    pub closest_on_second: Point,
}

impl SegmentIntersection {
    /// The sentinel result for parallel or coincident lines.
    fn parallel() -> Self {
        Self {
            lines_intersect: false,
            segments_intersect: false,
            point: Point::nan(),
            closest_on_first: Point::nan(),
            closest_on_second: Point::nan(),
        }
    }
}

/// Intersects segment p1→p2 with segment p3→p4.
///
/// A non-finite t1 (parallel or coincident carrier lines) produces the NaN
/// sentinel result; no fallback is attempted.
pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> SegmentIntersection {
    let magnitude = [p1, p2, p3, p4]
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs()])
        .fold(0.0_f64, f64::max);

    if magnitude > RESCALE_LIMIT {
        let scale = RESCALE_LIMIT / magnitude;
        let shrink = |p: Point| Point::new(p.x * scale, p.y * scale);
        let grow = |p: Point| Point::new(p.x / scale, p.y / scale);

        let mut result = solve(shrink(p1), shrink(p2), shrink(p3), shrink(p4));
        result.point = grow(result.point);
        result.closest_on_first = grow(result.closest_on_first);
        result.closest_on_second = grow(result.closest_on_second);
        return result;
    }

    solve(p1, p2, p3, p4)
}

fn solve(p1: Point, p2: Point, p3: Point, p4: Point) -> SegmentIntersection {
    let dx12 = p2.x - p1.x;
    let dy12 = p2.y - p1.y;
    let dx34 = p4.x - p3.x;
    let dy34 = p4.y - p3.y;

    let denominator = dy12 * dx34 - dx12 * dy34;

    let t1 = ((p1.x - p3.x) * dy34 + (p3.y - p1.y) * dx34) / denominator;
    if denominator == 0.0 || !t1.is_finite() {
        return SegmentIntersection::parallel();
    }

    let t2 = ((p3.x - p1.x) * dy12 + (p1.y - p3.y) * dx12) / -denominator;

    let point = Point::new(p1.x + dx12 * t1, p1.y + dy12 * t1);

    let segments_intersect = (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2);

    let t1_clamped = t1.clamp(0.0, 1.0);
    let t2_clamped = t2.clamp(0.0, 1.0);

    SegmentIntersection {
        lines_intersect: true,
        segments_intersect,
        point,
        closest_on_first: Point::new(p1.x + dx12 * t1_clamped, p1.y + dy12 * t1_clamped),
        closest_on_second: Point::new(p3.x + dx34 * t2_clamped, p3.y + dy34 * t2_clamped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crossing_segments() {
        let result = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert!(result.lines_intersect);
        assert!(result.segments_intersect);
        assert_relative_eq!(result.point.x, 5.0);
        assert_relative_eq!(result.point.y, 5.0);
    }

    #[test]
    fn test_parallel_segments_yield_nan_sentinel() {
        let result = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        );
        assert!(!result.lines_intersect);
        assert!(!result.segments_intersect);
        assert!(result.point.x.is_nan() && result.point.y.is_nan());
        assert!(result.closest_on_first.x.is_nan());
        assert!(result.closest_on_second.y.is_nan());
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // Carrier lines meet at (5, 5), but the second segment ends before it.
        let result = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(4.0, 6.0),
        );
        assert!(result.lines_intersect);
        assert!(!result.segments_intersect);
        assert_relative_eq!(result.point.x, 5.0);
        assert_relative_eq!(result.point.y, 5.0);
        // Closest point on the second segment clamps to its end.
        assert_relative_eq!(result.closest_on_second.x, 4.0);
        assert_relative_eq!(result.closest_on_second.y, 6.0);
    }

    #[test]
    fn test_closest_points_clamp_independently() {
        // First segment stops well before the crossing of the carrier lines.
        let result = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert!(result.lines_intersect);
        assert!(!result.segments_intersect);
        assert_relative_eq!(result.closest_on_first.x, 1.0);
        assert_relative_eq!(result.closest_on_first.y, 1.0);
        assert_relative_eq!(result.closest_on_second.x, 5.0);
        assert_relative_eq!(result.closest_on_second.y, 5.0);
    }

    #[test]
    fn test_touching_at_endpoint_counts_as_segment_intersection() {
        let result = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        );
        assert!(result.segments_intersect);
        assert_relative_eq!(result.point.x, 5.0);
        assert_relative_eq!(result.point.y, 5.0);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        // A horizontal segment reaching in from the substituted west extreme
        // still intersects the x = 0 side exactly at (0, 5).
        let result = segment_intersection(
            Point::new(f64::MIN, 5.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
        );
        assert!(result.lines_intersect);
        assert!(result.segments_intersect);
        assert_relative_eq!(result.point.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.point.y, 5.0, epsilon = 1e-9);
    }
}
