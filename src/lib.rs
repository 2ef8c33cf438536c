// src/lib.rs

//! # Pattern Analyser
//!
//! Renders planar point-pattern graphs (Voronoi diagrams and their Delaunay
//! duals) restricted to a finite viewport. Voronoi edges routinely run to
//! infinity or far outside the region of interest; the `math` module carries
//! the clipping engine that projects such edges back onto the viewport
//! boundary so they can be drawn safely.
//!
//! The surrounding modules supply what a batch render needs around that
//! engine: point-cloud ingestion from delimited text and raster images
//! (`ingest`), the Voronoi/Delaunay graph and its morphological transforms
//! (`graph`), and an SVG scene writer (`render`).

pub mod graph;
pub mod ingest;
pub mod math;
pub mod render;

// Re-exports für einfache Verwendung
pub use math::error::{MathError, MathResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        graph::{
            morphology,
            node::Node,
            voronoi::{VoronoiEdge, VoronoiGraph},
        },
        ingest::{
            csv::{CsvConfig, DecimalFormat},
            error::{IngestError, IngestResult},
            image::ImageConfig,
        },
        math::{
            algorithms::{
                intersection::{SegmentIntersection, segment_intersection},
                pipeline::render_set,
                projection::project_edge,
            },
            error::{MathError, MathResult},
            types::{Bounds2D, Edge, Point, Region},
        },
        render::scene::GraphScene,
    };
}
