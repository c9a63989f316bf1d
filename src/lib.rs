//! # ggbgen
//!
//! A small library for generating GeoGebra construction files (`.ggb`).
//!
//! ## Features
//!
//! - Builds the document skeleton GeoGebra requires (GUI layout, graphics
//!   view, kernel settings) from fixed defaults
//! - Appends free points, lines by coefficients, segments and orthogonal
//!   lines in declaration order
//! - Writes the XML into a ZIP archive under `geogebra.xml`
//! - Optional strict validation of labels and references
//! - Declarative scene files (feature `scene`)
//!
//! ## Quick Start
//!
//! ```no_run
//! use ggbgen::{Color, Document};
//!
//! let mut doc = Document::new("suite", "graphing");
//!
//! // Line f: y = 2, a point on each side, and the perpendicular through A
//! doc.add_line_by_coeffs("f", 0.0, 1.0, -2.0);
//! doc.add_point("A", -3.0, 4.0);
//! doc.add_orthogonal_line("g", "A", "f").set_color(Color::BLACK);
//!
//! let path = doc.save("perpendicular")?;
//! assert_eq!(path.to_str(), Some("perpendicular.ggb"));
//! # Ok::<(), ggbgen::Error>(())
//! ```
//!
//! Builder operations do not check that referenced labels exist. Call
//! [`Document::validate`] or export with [`GgbConfig::with_strict`] to catch
//! ordering mistakes before GeoGebra does.

pub mod error;
pub mod export;
pub mod model;

#[cfg(feature = "scene")]
pub mod scene;

pub use error::{Error, Result};
pub use export::{Exporter, GgbConfig, GgbExporter};
pub use model::{Color, Construction, ConstructionEntry, Document, Element, ElementKind};

#[cfg(feature = "scene")]
pub use scene::Scene;
