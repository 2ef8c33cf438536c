// src/render/scene.rs

//! Drawable scene assembly.
//!
//! A scene is one render pass over a snapshot of the graph: the node markers,
//! the viewport-clipped edge segments (tagged with their input index), and
//! the statistics line. The statistics count the ingested nodes and edges,
//! not the post-clip survivors.

use crate::graph::node::Node;
use crate::math::algorithms::pipeline::render_set;
use crate::math::types::{Bounds2D, Edge};
use log::debug;

/// Radius of a node marker in graph coordinates.
pub const DEFAULT_NODE_RADIUS: f64 = 0.05;

/// Everything one render pass needs to draw.
#[derive(Clone, Debug)]
pub struct GraphScene {
    nodes: Vec<Node>,
    drawable_edges: Vec<(usize, Edge)>,
    statistics: String,
    bounds: Bounds2D,
    pen_size: f64,
    node_count: usize,
    edge_count: usize,
}

impl GraphScene {
    /// Builds the scene for one pass: clips `edges` against `bounds` and
    /// assembles the statistics line for `file_name`.
    pub fn new(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        file_name: &str,
        bounds: Bounds2D,
        pen_size: f64,
    ) -> Self {
        let node_count = nodes.len();
        let edge_count = edges.len();
        let drawable_edges: Vec<(usize, Edge)> = render_set(edges, bounds).collect();

        debug!(
            "scene for {file_name}: {}/{edge_count} edges survive clipping",
            drawable_edges.len()
        );

        Self {
            nodes,
            drawable_edges,
            statistics: format!("{file_name}, {node_count} nodes, {edge_count} edges"),
            bounds,
            pen_size,
            node_count,
            edge_count,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The clipped edges that survived the render pass, with their input
    /// indices.
    pub fn drawable_edges(&self) -> &[(usize, Edge)] {
        &self.drawable_edges
    }

    pub fn statistics(&self) -> &str {
        &self.statistics
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    pub fn pen_size(&self) -> f64 {
        self.pen_size
    }

    /// Ingested node count (pre-filter).
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Ingested edge count (pre-filter).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point;

    fn unit_box() -> Bounds2D {
        Bounds2D::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn test_statistics_count_input_not_survivors() {
        let nodes = vec![Node::new(1.0, 1.0), Node::new(2.0, 2.0)];
        let edges = vec![
            Edge::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0)),
            // Dropped by clipping, still counted.
            Edge::new(Point::new(-5.0, 2.0), Point::new(-5.0, 8.0)),
        ];
        let scene = GraphScene::new(nodes, edges, "cloud.csv", unit_box(), 0.0);

        assert_eq!(scene.statistics(), "cloud.csv, 2 nodes, 2 edges");
        assert_eq!(scene.node_count(), 2);
        assert_eq!(scene.edge_count(), 2);
        assert_eq!(scene.drawable_edges().len(), 1);
        assert_eq!(scene.drawable_edges()[0].0, 0);
    }

    #[test]
    fn test_empty_inputs_make_an_empty_scene() {
        let scene = GraphScene::new(Vec::new(), Vec::new(), "empty.csv", unit_box(), 0.0);
        assert_eq!(scene.statistics(), "empty.csv, 0 nodes, 0 edges");
        assert!(scene.drawable_edges().is_empty());
    }
}
