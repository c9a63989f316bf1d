//! Export module for writing documents to disk formats.
//!
//! Provides the `Exporter` trait and the `.ggb` implementation.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write + Seek` destination
//!
//! # Example
//!
//! ```no_run
//! use ggbgen::Document;
//! use ggbgen::export::{Exporter, GgbConfig, GgbExporter};
//! use std::fs::File;
//!
//! let mut doc = Document::new("suite", "graphing");
//! doc.add_point("A", 1.0, 2.0);
//!
//! let mut file = File::create("output.ggb")?;
//! GgbExporter::new()
//!     .with_config(GgbConfig::default().with_indent(true))
//!     .export(&doc, &mut file)?;
//! # Ok::<(), ggbgen::Error>(())
//! ```

use std::io::{Seek, Write};

use crate::error::Result;
use crate::model::Document;

mod ggb;

pub use ggb::{GGB_ENTRY_NAME, GGB_EXTENSION, GgbConfig, GgbExporter, ensure_ggb_extension};

/// Trait for exporting documents to specific formats.
///
/// Exporters hold their configuration in the struct, and the `export`
/// method writes to any `Write + Seek` destination.
pub trait Exporter {
    /// Export the document to the provided writer.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `std::io::Cursor<Vec<u8>>` for in-memory output
    /// - Any other type implementing `Write + Seek`
    fn export<W: Write + Seek>(&self, doc: &Document, writer: &mut W) -> Result<()>;
}
