// src/ingest/mod.rs
pub mod csv;
pub mod error;
pub mod image;

pub use csv::{CsvConfig, DecimalFormat};
pub use error::{IngestError, IngestResult};
pub use image::ImageConfig;
