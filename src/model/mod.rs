//! In-memory GeoGebra document tree.
//!
//! This module contains:
//! - The root [`Document`] and its builder operations
//! - Static GUI, graphics view and kernel settings
//! - Construction entries (elements, commands, expressions)

mod construction;
mod document;
mod element;
mod settings;

pub use construction::{Command, Construction, ConstructionEntry, Expression};
pub use document::{
    APP_VERSION, Document, FORMAT_VERSION, PLATFORM_WEB, SCHEMA_LOCATION, XSI_NAMESPACE,
    line_expression,
};
pub use element::{
    Color, DEFAULT_POINT_SIZE, DEFAULT_THICKNESS, Element, ElementKind, ElementStyle, Geometry,
    LabelMode,
};
pub use settings::{
    AngleUnit, CoordSystem, GuiSettings, KernelSettings, Pane, Perspective, ViewPanel,
    ViewSettings, WindowSize,
};
