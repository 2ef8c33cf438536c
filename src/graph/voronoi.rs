// src/graph/voronoi.rs

//! Voronoi graph extraction.
//!
//! The triangulation itself is delegated to `spade`; this module only walks
//! the Delaunay structure and reads off the Voronoi diagram as its dual:
//! every inner Delaunay edge contributes one Voronoi edge between the
//! circumcenters of its two adjacent faces. Edges adjacent to the outer face
//! are unbounded rays; their open end is encoded with infinite coordinates
//! (per coordinate, following the ray direction), which is exactly the shape
//! the viewport projection layer substitutes away before drawing.

use crate::math::{
    error::{MathError, MathResult},
    types::{Edge, Point, SpadePoint},
    utils::comparison,
};
use spade::{DelaunayTriangulation, Triangulation};

/// Quantization factor for generator coordinate keys.
const KEY_SCALE: f64 = 1e6;

/// One edge of a Voronoi diagram: the cell-boundary vertex pair plus the two
/// generator points whose cells it separates. `vertex_b` carries infinite
/// coordinates for unbounded rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoronoiEdge {
    pub vertex_a: Point,
    pub vertex_b: Point,
    pub generator_a: Point,
    pub generator_b: Point,
}

impl VoronoiEdge {
    /// The drawable cell-boundary segment.
    pub fn cell_edge(&self) -> Edge {
        Edge::new(self.vertex_a, self.vertex_b)
    }

    /// The dual (Delaunay) segment between the two generators.
    pub fn delaunay_edge(&self) -> Edge {
        Edge::new(self.generator_a, self.generator_b)
    }

    pub fn generator_distance(&self) -> f64 {
        self.generator_a.distance_to(self.generator_b)
    }

    /// Order-independent identity of this edge across graph generations,
    /// derived from the quantized generator pair.
    pub(crate) fn generator_key(&self) -> ((i64, i64), (i64, i64)) {
        let key_a = quantize(self.generator_a);
        let key_b = quantize(self.generator_b);
        if key_a < key_b { (key_a, key_b) } else { (key_b, key_a) }
    }
}

pub(crate) fn quantize(p: Point) -> (i64, i64) {
    ((p.x * KEY_SCALE) as i64, (p.y * KEY_SCALE) as i64)
}

/// The extracted Voronoi diagram of a generator point set.
#[derive(Clone, Debug, Default)]
pub struct VoronoiGraph {
    pub edges: Vec<VoronoiEdge>,
}

impl VoronoiGraph {
    /// Computes the Voronoi graph of `generators` via Delaunay triangulation.
    ///
    /// Duplicate generators are merged by the triangulation; fewer than three
    /// distinct points cannot form a diagram.
    pub fn compute(generators: &[Point]) -> MathResult<Self> {
        if generators.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: generators.len(),
            });
        }

        let spade_points: Vec<SpadePoint> =
            generators.iter().map(|&p| SpadePoint::from(p)).collect();

        let triangulation = DelaunayTriangulation::<SpadePoint>::bulk_load_stable(spade_points)
            .map_err(|e| MathError::TriangulationFailed {
                reason: format!(
                    "bulk load of {} generator points failed: {:?}",
                    generators.len(),
                    e
                ),
            })?;

        if triangulation.num_vertices() < 3 {
            return Err(MathError::TriangulationFailed {
                reason: format!(
                    "only {} distinct generators remain after deduplication, expected at least 3",
                    triangulation.num_vertices()
                ),
            });
        }

        let mut edges = Vec::new();

        for delaunay_edge in triangulation.undirected_edges() {
            let [v1, v2] = delaunay_edge.vertices();
            let generator_a = Point::from(v1.position());
            let generator_b = Point::from(v2.position());

            let directed = delaunay_edge.as_directed();
            let face_1 = directed.face();
            let face_2 = directed.rev().face();

            let cc_1 = face_1.as_inner().map(|f| Point::from(f.circumcenter()));
            let cc_2 = face_2.as_inner().map(|f| Point::from(f.circumcenter()));

            match (cc_1, cc_2) {
                (Some(vertex_a), Some(vertex_b)) => {
                    edges.push(VoronoiEdge {
                        vertex_a,
                        vertex_b,
                        generator_a,
                        generator_b,
                    });
                }
                (Some(circumcenter), None) | (None, Some(circumcenter)) => {
                    // Unbounded ray: the inner face supplies the finite end;
                    // the ray leaves perpendicular to the Delaunay edge, away
                    // from the face's third vertex.
                    let inner = face_1.as_inner().or_else(|| face_2.as_inner());
                    let opposite = inner.and_then(|face| {
                        face.vertices()
                            .into_iter()
                            .find(|v| v.fix() != v1.fix() && v.fix() != v2.fix())
                            .map(|v| Point::from(v.position()))
                    });

                    if let Some(opposite) = opposite {
                        let direction = ray_direction(generator_a, generator_b, opposite);
                        edges.push(VoronoiEdge {
                            vertex_a: circumcenter,
                            vertex_b: ray_endpoint(circumcenter, direction),
                            generator_a,
                            generator_b,
                        });
                    }
                }
                // Fully degenerate (collinear input): no Voronoi vertex on
                // either side, nothing to emit for this edge.
                (None, None) => {}
            }
        }

        Ok(Self { edges })
    }

    /// The drawable cell-boundary segments, in extraction order.
    pub fn cell_edges(&self) -> Vec<Edge> {
        self.edges.iter().map(VoronoiEdge::cell_edge).collect()
    }

    /// The dual view: one generator-to-generator segment per edge.
    pub fn delaunay_edges(&self) -> Vec<Edge> {
        self.edges.iter().map(VoronoiEdge::delaunay_edge).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Unit direction of the unbounded Voronoi ray dual to the Delaunay edge
/// a→b, pointing away from the opposite triangle vertex.
fn ray_direction(a: Point, b: Point, opposite: Point) -> Point {
    let midpoint = Point::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
    let perp = Point::new(-(b.y - a.y), b.x - a.x);

    let away = (midpoint.x - opposite.x) * perp.x + (midpoint.y - opposite.y) * perp.y;
    let oriented = if away >= 0.0 {
        perp
    } else {
        Point::new(-perp.x, -perp.y)
    };

    let length = (oriented.x * oriented.x + oriented.y * oriented.y).sqrt();
    Point::new(oriented.x / length, oriented.y / length)
}

/// Encodes "from `start`, infinitely far along `direction`" per coordinate: a
/// vanishing direction component keeps the finite coordinate, everything else
/// becomes the signed infinity.
fn ray_endpoint(start: Point, direction: Point) -> Point {
    let stretch = |origin: f64, component: f64| {
        if comparison::nearly_zero(component) {
            origin
        } else if component > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    };
    Point::new(stretch(start.x, direction.x), stretch(start.y, direction.y))
}
