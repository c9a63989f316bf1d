//! Error types for ggbgen operations.

use thiserror::Error;

/// Errors that can occur while building or writing a GeoGebra file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid scene file: {0}")]
    Scene(String),

    #[error("Construction failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type Result<T> = std::result::Result<T, Error>;
