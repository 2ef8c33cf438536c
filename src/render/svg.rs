// src/render/svg.rs

//! SVG output for a [`GraphScene`].
//!
//! Styling follows the interactive renderer this replaces: blue node circles
//! (filled when the node is marked), red edge segments, a maroon viewport
//! rectangle, and the statistics line under the drawing. All stroke widths
//! live in graph coordinates and widen with the scene's pen size.

use crate::graph::node::Node;
use crate::math::types::{Bounds2D, Point};
use crate::render::scene::{DEFAULT_NODE_RADIUS, GraphScene};
use log::info;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Line, Rectangle, Text};

const NODE_OUTLINE_WIDTH: f64 = 0.02;
const EDGE_WIDTH: f64 = 0.05;
const BOX_WIDTH: f64 = 0.2;

/// Builds the SVG document for `scene`.
pub fn scene_document(scene: &GraphScene) -> Document {
    let viewbox = viewbox_for(scene);
    let pen = scene.pen_size();

    let mut document = Document::new().set(
        "viewBox",
        (
            viewbox.min.x,
            viewbox.min.y,
            viewbox.width(),
            viewbox.height(),
        ),
    );

    let bounds = scene.bounds();
    if !bounds.is_disabled() {
        document = document.add(
            Rectangle::new()
                .set("id", "BBox_0")
                .set("x", bounds.min.x)
                .set("y", bounds.min.y)
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", "none")
                .set("stroke", "maroon")
                .set("stroke-width", BOX_WIDTH + pen),
        );
    }

    for (index, node) in scene.nodes().iter().enumerate() {
        document = document.add(node_marker(node, index, pen));
    }

    for (index, edge) in scene.drawable_edges() {
        document = document.add(
            Line::new()
                .set("id", format!("Edge_{index}"))
                .set("x1", edge.a.x)
                .set("y1", edge.a.y)
                .set("x2", edge.b.x)
                .set("y2", edge.b.y)
                .set("stroke", "red")
                .set("stroke-width", EDGE_WIDTH + pen),
        );
    }

    let font_size = viewbox.height() * 0.025;
    document.add(
        Text::new(scene.statistics())
            .set("x", viewbox.min.x + font_size)
            .set("y", viewbox.max.y - font_size)
            .set("font-family", "monospace")
            .set("font-size", font_size),
    )
}

fn node_marker(node: &Node, index: usize, pen: f64) -> Circle {
    let fill = if node.is_marked() { "blue" } else { "none" };
    Circle::new()
        .set("id", format!("Node_{index}"))
        .set("cx", node.x)
        .set("cy", node.y)
        .set("r", DEFAULT_NODE_RADIUS)
        .set("fill", fill)
        .set("stroke", "blue")
        .set("stroke-width", NODE_OUTLINE_WIDTH + pen)
}

/// The drawing area: the viewport with a little breathing room, or the node
/// extent when no viewport was requested.
fn viewbox_for(scene: &GraphScene) -> Bounds2D {
    let bounds = scene.bounds();
    if !bounds.is_disabled() && bounds.is_valid() {
        return bounds.expand(1.0);
    }
    Bounds2D::from_points_iter(scene.nodes().iter().map(Node::position))
        .map(|b| b.expand(1.0))
        .unwrap_or_else(|| Bounds2D::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0)))
}

/// Writes `scene` to an SVG file.
pub fn write_scene(scene: &GraphScene, path: &Path) -> std::io::Result<()> {
    let document = scene_document(scene);
    svg::save(path, &document)?;
    info!("wrote {}", path.display());
    Ok(())
}
