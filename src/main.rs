// src/main.rs

//! Batch driver: ingest a point cloud (delimited text or raster image),
//! compute its Voronoi graph, optionally walk it through morphological
//! steps, clip against the derived viewport and write the scene as SVG.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use pattern_analyser::graph::{morphology, node::Node, voronoi::VoronoiGraph};
use pattern_analyser::ingest::{
    csv::{self, CsvConfig, DecimalFormat},
    image::{self, ImageConfig},
};
use pattern_analyser::math::types::{Bounds2D, Edge, Point};
use pattern_analyser::render::{scene::GraphScene, svg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DiagramMode {
    /// Cell boundaries of the Voronoi diagram.
    Voronoi,
    /// The Delaunay dual (generator-to-generator edges).
    Delaunay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DecimalArg {
    Comma,
    Dot,
}

impl From<DecimalArg> for DecimalFormat {
    fn from(arg: DecimalArg) -> Self {
        match arg {
            DecimalArg::Comma => DecimalFormat::Comma,
            DecimalArg::Dot => DecimalFormat::Dot,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Voronoi/Delaunay pattern renderer with viewport clipping")]
struct Args {
    /// Point cloud source: .csv/.txt, or a raster image.
    input: PathBuf,

    /// Output SVG path.
    #[arg(short, long, default_value = "graph.svg")]
    output: PathBuf,

    /// Which diagram to draw.
    #[arg(long, value_enum, default_value = "voronoi")]
    mode: DiagramMode,

    /// Extra stroke width added to every pen.
    #[arg(long, default_value_t = 0.0)]
    pen_size: f64,

    /// Field separator for delimited text input.
    #[arg(long, default_value_t = ',')]
    separator: char,

    /// Numeric format of delimited text input.
    #[arg(long, value_enum, default_value = "comma")]
    decimal: DecimalArg,

    /// Luminance threshold for marked nodes in image input.
    #[arg(long)]
    grayscale_threshold: Option<f64>,

    /// Erosion steps to apply before rendering.
    #[arg(long, default_value_t = 0)]
    erode: u32,

    /// Dilation steps to apply before rendering.
    #[arg(long, default_value_t = 0)]
    dilate: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut nodes, bounds) = ingest(&args)?;
    info!("ingested {} nodes from {}", nodes.len(), args.input.display());

    let start = Instant::now();
    let generators: Vec<Point> = nodes.iter().map(Node::position).collect();
    let original = VoronoiGraph::compute(&generators)
        .with_context(|| format!("voronoi computation for {}", args.input.display()))?;
    info!(
        "voronoi graph with {} edges computed in {} ms",
        original.edge_count(),
        start.elapsed().as_millis()
    );

    let mut graph = original.clone();
    for _ in 0..args.erode {
        graph = morphology::erosion(&original, &graph, &mut nodes);
    }
    for _ in 0..args.dilate {
        graph = morphology::dilation(&original, &graph, &mut nodes);
    }

    let edges: Vec<Edge> = match args.mode {
        DiagramMode::Voronoi => graph.cell_edges(),
        DiagramMode::Delaunay => graph.delaunay_edges(),
    };

    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let scene = GraphScene::new(nodes, edges, &file_name, bounds, args.pen_size);
    info!("{}", scene.statistics());

    svg::write_scene(&scene, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

fn ingest(args: &Args) -> Result<(Vec<Node>, Bounds2D)> {
    let extension = args
        .input
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" | "txt" => {
            let config = CsvConfig::new()
                .with_separator(args.separator)
                .with_decimal_format(args.decimal.into());
            Ok(csv::load_point_cloud(&args.input, &config)?)
        }
        "tif" | "tiff" | "jfif" | "jpg" | "jpeg" | "png" | "bmp" => {
            let mut config = ImageConfig::new();
            if let Some(threshold) = args.grayscale_threshold {
                config = config.with_marked_threshold(threshold);
            }
            Ok(image::load_image(&args.input, &config)?)
        }
        other => bail!("unsupported input format: {other:?}"),
    }
}
