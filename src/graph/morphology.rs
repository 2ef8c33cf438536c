// src/graph/morphology.rs

//! Morphological transforms over a Voronoi graph and its node set.
//!
//! Each transform takes the original graph (as computed from the ingested
//! pattern), the current graph (the result of previous steps) and the current
//! node set, and returns a new graph advanced by exactly one step. Repeated
//! application walks the pattern through progressive contraction/expansion:
//!
//! - erosion removes the longest generator-distance edge class from the
//!   current graph; nodes left without any incident edge leave the node set,
//! - dilation restores the shortest absent edge class from the original
//!   graph, re-introducing nodes as needed,
//! - opening is erosion followed by dilation,
//! - closing is dilation followed by erosion.
//!
//! Edges keep their identity across generations through the quantized
//! generator-pair key, so an erosion step followed by a dilation step
//! restores the graph it started from.

use crate::graph::node::Node;
use crate::graph::voronoi::{VoronoiGraph, quantize};
use crate::math::utils::comparison;
use std::collections::HashSet;

/// Removes the longest edge class from `current` and prunes nodes that lost
/// their last incident edge.
pub fn erosion(
    _original: &VoronoiGraph,
    current: &VoronoiGraph,
    nodes: &mut Vec<Node>,
) -> VoronoiGraph {
    let Some(longest) = max_generator_distance(current) else {
        return current.clone();
    };

    let surviving: Vec<_> = current
        .edges
        .iter()
        .filter(|e| !comparison::nearly_equal(e.generator_distance(), longest))
        .copied()
        .collect();

    let result = VoronoiGraph { edges: surviving };
    prune_isolated_nodes(&result, nodes);
    result
}

/// Restores the shortest absent edge class of `original` into `current`,
/// re-introducing generators that dropped out of the node set.
pub fn dilation(
    original: &VoronoiGraph,
    current: &VoronoiGraph,
    nodes: &mut Vec<Node>,
) -> VoronoiGraph {
    let present: HashSet<_> = current.edges.iter().map(|e| e.generator_key()).collect();
    let absent: Vec<_> = original
        .edges
        .iter()
        .filter(|e| !present.contains(&e.generator_key()))
        .copied()
        .collect();

    let Some(shortest) = absent
        .iter()
        .map(|e| e.generator_distance())
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    else {
        return current.clone();
    };

    let mut edges = current.edges.clone();
    let mut positions: HashSet<_> = nodes.iter().map(|n| quantize(n.position())).collect();

    for edge in absent {
        if !comparison::nearly_equal(edge.generator_distance(), shortest) {
            continue;
        }
        for generator in [edge.generator_a, edge.generator_b] {
            if positions.insert(quantize(generator)) {
                // Labels and orientation of pruned nodes are not recoverable
                // from the graph; restored generators come back anonymous.
                nodes.push(Node::new(generator.x, generator.y));
            }
        }
        edges.push(edge);
    }

    VoronoiGraph { edges }
}

/// One erosion step followed by one dilation step.
pub fn opening(
    original: &VoronoiGraph,
    current: &VoronoiGraph,
    nodes: &mut Vec<Node>,
) -> VoronoiGraph {
    let eroded = erosion(original, current, nodes);
    dilation(original, &eroded, nodes)
}

/// One dilation step followed by one erosion step.
pub fn closing(
    original: &VoronoiGraph,
    current: &VoronoiGraph,
    nodes: &mut Vec<Node>,
) -> VoronoiGraph {
    let dilated = dilation(original, current, nodes);
    erosion(original, &dilated, nodes)
}

fn max_generator_distance(graph: &VoronoiGraph) -> Option<f64> {
    graph
        .edges
        .iter()
        .map(|e| e.generator_distance())
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

fn prune_isolated_nodes(graph: &VoronoiGraph, nodes: &mut Vec<Node>) {
    let connected: HashSet<_> = graph
        .edges
        .iter()
        .flat_map(|e| [quantize(e.generator_a), quantize(e.generator_b)])
        .collect();
    nodes.retain(|n| connected.contains(&quantize(n.position())));
}
