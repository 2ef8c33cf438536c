// src/ingest/csv.rs

//! Point-cloud ingestion from delimited text.
//!
//! The file is first read into an ordered list of header→value records, then
//! mapped onto nodes through configurable column labels. Coordinates are
//! divided by a display scale, and the viewport is derived from the node
//! extent with a fixed margin on every side.

use crate::graph::node::Node;
use crate::ingest::error::{IngestError, IngestResult};
use crate::math::types::Bounds2D;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Margin added around the point extent when deriving the viewport.
const BOUNDS_MARGIN: f64 = 5.0;

/// How numeric fields are written in the source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimalFormat {
    /// Comma is the decimal separator; a dot is a thousands-style separator
    /// and is removed before parsing. The format the source data ships in.
    #[default]
    Comma,
    /// Plain dot-decimal numbers.
    Dot,
}

impl DecimalFormat {
    /// Parses one numeric field under this format. `None` when the rewritten
    /// text is not a number.
    pub fn parse(self, raw: &str) -> Option<f64> {
        match self {
            DecimalFormat::Comma => raw.replace('.', "").replace(',', ".").parse().ok(),
            DecimalFormat::Dot => raw.parse().ok(),
        }
    }
}

/// Column labels, separator and scaling for a point-cloud file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CsvConfig {
    pub separator: char,
    pub decimal_format: DecimalFormat,
    pub id_label: String,
    pub x_label: String,
    pub y_label: String,
    pub orientation_label: String,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            decimal_format: DecimalFormat::default(),
            id_label: "UniqID_NUCL".to_string(),
            x_label: "N_COM_X".to_string(),
            y_label: "N_COM_Y".to_string(),
            orientation_label: "N_Orient".to_string(),
            scale_x: 10.0,
            scale_y: 10.0,
        }
    }
}

impl CsvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_decimal_format(mut self, format: DecimalFormat) -> Self {
        self.decimal_format = format;
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }
}

/// One data line, keyed by the header labels.
pub type Record = HashMap<String, String>;

/// Reads all records from a delimited text source. The first non-empty line
/// is the header; data lines whose fields are all empty are skipped.
pub fn read_records<R: BufRead>(reader: R, separator: char) -> IngestResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if !line.contains(separator) {
            return Err(IngestError::WrongSeparator {
                separator,
                line: line_number + 1,
            });
        }

        let fields: Vec<&str> = line.split(separator).map(str::trim).collect();
        if headers.is_empty() {
            headers = fields.into_iter().map(str::to_string).collect();
            continue;
        }

        let mut record = Record::new();
        let mut filled = 0;
        for (header, field) in headers.iter().zip(fields) {
            if !field.is_empty() {
                filled += 1;
            }
            record.insert(header.clone(), field.to_string());
        }
        if filled > 0 {
            records.push(record);
        }
    }

    debug!("read {} records ({} columns)", records.len(), headers.len());
    Ok(records)
}

/// Maps records onto nodes and derives the viewport from their extent.
pub fn records_to_nodes(
    records: &[Record],
    config: &CsvConfig,
) -> IngestResult<(Vec<Node>, Bounds2D)> {
    let first = records.first().ok_or(IngestError::EmptyPointCloud)?;
    for label in [&config.x_label, &config.y_label] {
        if !first.contains_key(label) {
            return Err(IngestError::MissingColumn {
                label: label.clone(),
            });
        }
    }

    let parse = |record: &Record, label: &str| {
        record
            .get(label)
            .and_then(|raw| config.decimal_format.parse(raw))
            .unwrap_or(0.0)
    };

    let nodes: Vec<Node> = records
        .iter()
        .map(|record| {
            let id = record.get(&config.id_label).cloned().unwrap_or_default();
            Node::labeled(
                id,
                parse(record, &config.x_label) / config.scale_x,
                parse(record, &config.y_label) / config.scale_y,
                parse(record, &config.orientation_label),
            )
        })
        .collect();

    let bounds = Bounds2D::from_points_iter(nodes.iter().map(Node::position))
        .ok_or(IngestError::EmptyPointCloud)?
        .expand(BOUNDS_MARGIN);

    Ok((nodes, bounds))
}

/// Loads a point cloud from a delimited text file.
pub fn load_point_cloud(path: &Path, config: &CsvConfig) -> IngestResult<(Vec<Node>, Bounds2D)> {
    let reader = BufReader::new(File::open(path)?);
    let records = read_records(reader, config.separator)?;
    records_to_nodes(&records, config)
}
