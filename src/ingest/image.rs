// src/ingest/image.rs

//! Point-set extraction from raster images.
//!
//! The image is walked on a fixed pixel stride in both axes; every sampled
//! pixel gets a luminance value, and the two dark bands become nodes: the
//! darker band marked, the mid band unmarked. Bright pixels contribute
//! nothing. The derived viewport wraps the pixel grid with fixed margins.

use crate::graph::node::Node;
use crate::ingest::error::IngestResult;
use crate::math::types::{Bounds2D, Point};
use image::{DynamicImage, GenericImageView};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Luminance weights for the red, green and blue channels.
const LUMA_WEIGHTS: [f64; 3] = [0.21, 0.71, 0.071];

/// Horizontal viewport margin around the pixel grid.
const VIEW_MARGIN_X: f64 = 50.0;
/// Vertical viewport margin around the pixel grid.
const VIEW_MARGIN_Y: f64 = 20.0;

/// Sampling parameters for raster ingestion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Sample every n-th pixel in both axes.
    pub stride: u32,
    /// Luminance at or below this value yields a marked node.
    pub marked_threshold: f64,
    /// Luminance strictly below this (and above the marked threshold) yields
    /// an unmarked node; anything brighter is skipped.
    pub unmarked_ceiling: f64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            stride: 12,
            marked_threshold: 175.0,
            unmarked_ceiling: 220.0,
        }
    }
}

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marked_threshold(mut self, threshold: f64) -> Self {
        self.marked_threshold = threshold;
        self
    }
}

/// Luminance of one RGB pixel.
fn luminance(pixel: [u8; 4]) -> f64 {
    LUMA_WEIGHTS[0] * pixel[0] as f64
        + LUMA_WEIGHTS[1] * pixel[1] as f64
        + LUMA_WEIGHTS[2] * pixel[2] as f64
}

/// Sub-samples `image` into a node set; the viewport spans the pixel grid
/// plus fixed margins.
pub fn sample_image(image: &DynamicImage, config: &ImageConfig) -> (Vec<Node>, Bounds2D) {
    let (width, height) = image.dimensions();
    let rgba = image.to_rgba8();
    let stride = config.stride.max(1);

    let mut nodes = Vec::new();
    for x in (0..width).step_by(stride as usize) {
        for y in (0..height).step_by(stride as usize) {
            let luma = luminance(rgba.get_pixel(x, y).0);
            if luma <= config.marked_threshold {
                nodes.push(Node::labeled("", x as f64, y as f64, 1.0));
            } else if luma < config.unmarked_ceiling {
                nodes.push(Node::labeled("", x as f64, y as f64, 0.0));
            }
        }
    }

    let bounds = Bounds2D::from_points(
        Point::new(-VIEW_MARGIN_X, -VIEW_MARGIN_Y),
        Point::new(width as f64 + VIEW_MARGIN_X, height as f64 + VIEW_MARGIN_Y),
    );

    debug!(
        "sampled {} nodes from a {}x{} image (stride {})",
        nodes.len(),
        width,
        height,
        stride
    );
    (nodes, bounds)
}

/// Decodes an image file and samples it into a node set.
pub fn load_image(path: &Path, config: &ImageConfig) -> IngestResult<(Vec<Node>, Bounds2D)> {
    let image = image::open(path)?;
    Ok(sample_image(&image, config))
}
