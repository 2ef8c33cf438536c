// src/math/algorithms/pipeline.rs

//! The per-render clipping pass.
//!
//! Stateless transform over an ordered edge sequence: every input edge gets a
//! stable sequential index (a display tag for tooltips and statistics, no
//! semantic meaning), is projected onto the viewport, and survives only if
//! both projected endpoints classify inside the box. Evaluation is lazy and
//! the output preserves input order.

use crate::math::algorithms::projection::project_edge;
use crate::math::types::{Bounds2D, Edge, Region};

/// Yields `(index, projected_edge)` for every input edge whose projected
/// endpoints both lie inside `bounds`. Everything else is silently dropped
/// from the render set.
pub fn render_set<I>(edges: I, bounds: Bounds2D) -> impl Iterator<Item = (usize, Edge)>
where
    I: IntoIterator<Item = Edge>,
{
    edges.into_iter().enumerate().filter_map(move |(index, edge)| {
        let projected = project_edge(edge, &bounds);
        let inside_a = Region::classify(projected.a, &bounds).is_inside();
        let inside_b = Region::classify(projected.b, &bounds).is_inside();
        (inside_a && inside_b).then_some((index, projected))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point;
    use approx::assert_relative_eq;

    fn unit_box() -> Bounds2D {
        Bounds2D::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn test_unbounded_edge_is_clipped_and_kept() {
        let edges = vec![Edge::new(
            Point::new(f64::NEG_INFINITY, 5.0),
            Point::new(5.0, 5.0),
        )];
        let result: Vec<_> = render_set(edges, unit_box()).collect();
        assert_eq!(result.len(), 1);
        let (index, edge) = result[0];
        assert_eq!(index, 0);
        assert_relative_eq!(edge.a.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(edge.a.y, 5.0, epsilon = 1e-9);
        assert_eq!(edge.b, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_edge_fully_outside_one_region_is_dropped() {
        // Both endpoints west of the box: no projection rule fires, so the
        // edge never becomes doubly inside and is dropped.
        let edges = vec![Edge::new(Point::new(-5.0, 2.0), Point::new(-5.0, 8.0))];
        assert_eq!(render_set(edges, unit_box()).count(), 0);
    }

    #[test]
    fn test_crossing_edge_with_both_endpoints_outside_is_dropped() {
        // Passes straight through the viewport, but neither endpoint is
        // inside; reproduced upstream behavior drops it.
        let edges = vec![Edge::new(Point::new(-5.0, 5.0), Point::new(15.0, 5.0))];
        assert_eq!(render_set(edges, unit_box()).count(), 0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(render_set(Vec::new(), unit_box()).count(), 0);
    }

    #[test]
    fn test_indices_follow_input_order() {
        let inside = |y: f64| Edge::new(Point::new(1.0, y), Point::new(9.0, y));
        let outside = Edge::new(Point::new(-5.0, 2.0), Point::new(-5.0, 8.0));

        let edges = vec![inside(1.0), outside, inside(2.0), inside(3.0)];
        let result: Vec<_> = render_set(edges, unit_box()).collect();
        let indices: Vec<_> = result.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_order_is_stable_under_input_permutation() {
        let rows: Vec<Edge> = (0..6)
            .map(|i| Edge::new(Point::new(1.0, i as f64), Point::new(9.0, i as f64)))
            .collect();

        let forward: Vec<_> = render_set(rows.clone(), unit_box()).collect();
        let mut reversed_input = rows.clone();
        reversed_input.reverse();
        let backward: Vec<_> = render_set(reversed_input, unit_box()).collect();

        // Indices always count the input sequence; the edge at output
        // position k is the k-th surviving input edge in both runs.
        assert_eq!(
            forward.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            (0..6).collect::<Vec<_>>()
        );
        assert_eq!(
            backward.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            (0..6).collect::<Vec<_>>()
        );
        for (k, (_, edge)) in backward.iter().enumerate() {
            assert_eq!(*edge, rows[rows.len() - 1 - k]);
        }
    }

    #[test]
    fn test_restartable() {
        let edges = vec![Edge::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0))];
        let bounds = unit_box();
        let first: Vec<_> = render_set(edges.clone(), bounds).collect();
        let second: Vec<_> = render_set(edges, bounds).collect();
        assert_eq!(first, second);
    }
}
