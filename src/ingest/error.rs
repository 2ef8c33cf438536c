// src/ingest/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "wrong separator ({separator:?}) for line {line}: open the file in an editor and check which separator it uses"
    )]
    WrongSeparator { separator: char, line: usize },

    #[error("column {label:?} is missing from the header")]
    MissingColumn { label: String },

    #[error("image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("the input contains no usable points")]
    EmptyPointCloud,
}

pub type IngestResult<T> = Result<T, IngestError>;
