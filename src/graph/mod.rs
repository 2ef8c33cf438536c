// src/graph/mod.rs
pub mod morphology;
pub mod node;
pub mod voronoi;

pub use node::Node;
pub use voronoi::{VoronoiEdge, VoronoiGraph};
