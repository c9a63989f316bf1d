//! GeoGebra `.ggb` exporter.
//!
//! A `.ggb` file is a ZIP archive holding the construction as a single
//! `geogebra.xml` entry.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::model::{
    Command, ConstructionEntry, Document, Element, Expression, Geometry, GuiSettings,
    KernelSettings, SCHEMA_LOCATION, ViewSettings, XSI_NAMESPACE,
};

use super::Exporter;

/// Name of the XML entry inside the archive.
pub const GGB_ENTRY_NAME: &str = "geogebra.xml";
/// File extension appended to output paths that lack it.
pub const GGB_EXTENSION: &str = "ggb";

/// Configuration for `.ggb` export.
#[derive(Debug, Clone, Default)]
pub struct GgbConfig {
    /// Compression level for deflate (0-9, default 6).
    pub compression_level: Option<i64>,
    /// Pretty-print the XML with two-space indentation.
    pub indent: bool,
    /// Run [`Document::validate`] and refuse to write on failure.
    pub strict: bool,
}

impl GgbConfig {
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = Some(level);
        self
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// `.ggb` format exporter.
pub struct GgbExporter {
    config: GgbConfig,
}

impl GgbExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: GgbConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: GgbConfig) -> Self {
        self.config = config;
        self
    }

    /// Write `doc` to `path`, appending the `.ggb` extension if missing.
    ///
    /// Overwrites any existing file and returns the path actually written.
    pub fn save(&self, doc: &Document, path: impl AsRef<Path>) -> Result<PathBuf> {
        if self.config.strict {
            doc.validate()?;
        }
        let path = ensure_ggb_extension(path);
        let mut file = File::create(&path)?;
        self.write_archive(doc, &mut file)?;

        info!(
            path = %path.display(),
            entries = doc.construction().len(),
            "wrote GeoGebra file"
        );
        Ok(path)
    }

    fn write_archive<W: Write + Seek>(&self, doc: &Document, writer: &mut W) -> Result<()> {
        let xml = to_xml(doc, self.config.indent)?;

        let mut zip = ZipWriter::new(writer);
        let compression_level = self.config.compression_level.unwrap_or(6);
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(compression_level));

        zip.start_file(GGB_ENTRY_NAME, deflated)?;
        zip.write_all(&xml)?;
        zip.finish()?;
        Ok(())
    }
}

impl Default for GgbExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for GgbExporter {
    fn export<W: Write + Seek>(&self, doc: &Document, writer: &mut W) -> Result<()> {
        if self.config.strict {
            doc.validate()?;
        }
        self.write_archive(doc, writer)
    }
}

/// Append `.ggb` unless the path already ends with it.
pub fn ensure_ggb_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let suffix = format!(".{GGB_EXTENSION}");
    if path.as_os_str().to_string_lossy().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Serialize the whole document tree, XML declaration included.
pub(crate) fn to_xml(doc: &Document, indent: bool) -> Result<Vec<u8>> {
    let mut w = if indent {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    if !indent {
        w.get_mut().push(b'\n');
    }

    start(
        &mut w,
        "geogebra",
        &[
            ("format", doc.format()),
            ("version", doc.version()),
            ("app", doc.app()),
            ("subApp", doc.sub_app()),
            ("platform", doc.platform()),
            ("id", doc.id()),
            ("xsi:noNamespaceSchemaLocation", SCHEMA_LOCATION),
            ("xmlns", ""),
            ("xmlns:xsi", XSI_NAMESPACE),
        ],
    )?;
    write_gui(&mut w, doc.gui())?;
    write_view(&mut w, doc.view())?;
    write_kernel(&mut w, doc.kernel())?;

    start(&mut w, "construction", &[])?;
    for entry in doc.construction().entries() {
        match entry {
            ConstructionEntry::Expression(exp) => write_expression(&mut w, exp)?,
            ConstructionEntry::Command(cmd) => write_command(&mut w, cmd)?,
            ConstructionEntry::Element(element) => write_element(&mut w, element)?,
        }
    }
    end(&mut w, "construction")?;
    end(&mut w, "geogebra")?;

    Ok(w.into_inner())
}

fn write_gui<W: Write>(w: &mut Writer<W>, gui: &GuiSettings) -> Result<()> {
    start(w, "gui", &[])?;
    empty(
        w,
        "window",
        &[
            ("width", &gui.window.width.to_string()),
            ("height", &gui.window.height.to_string()),
        ],
    )?;

    let perspective = &gui.perspective;
    start(w, "perspectives", &[])?;
    start(w, "perspective", &[("id", &perspective.id)])?;
    start(w, "panes", &[])?;
    for pane in &perspective.panes {
        empty(
            w,
            "pane",
            &[
                ("location", &pane.location),
                ("divider", &pane.divider.to_string()),
                ("orientation", &pane.orientation.to_string()),
            ],
        )?;
    }
    end(w, "panes")?;
    start(w, "views", &[])?;
    for view in &perspective.views {
        let id = view.id.to_string();
        let location = view.location.to_string();
        let size = view.size.to_string();
        let window = view.window.map(|v| v.to_string()).join(",");
        let mut attrs = vec![
            ("id", id.as_str()),
            ("visible", bool_str(view.visible)),
            ("inframe", bool_str(view.in_frame)),
            ("stylebar", bool_str(view.stylebar)),
            ("location", location.as_str()),
            ("size", size.as_str()),
        ];
        if let Some(tab) = &view.tab {
            attrs.push(("tab", tab.as_str()));
        }
        attrs.push(("window", window.as_str()));
        empty(w, "view", &attrs)?;
    }
    end(w, "views")?;
    end(w, "perspective")?;
    end(w, "perspectives")?;

    empty(w, "labelingStyle", &[("val", &gui.labeling_style.to_string())])?;
    empty(w, "font", &[("size", &gui.font_size.to_string())])?;
    end(w, "gui")
}

fn write_view<W: Write>(w: &mut Writer<W>, view: &ViewSettings) -> Result<()> {
    start(w, "euclidianView", &[])?;
    empty(w, "viewNumber", &[("viewNo", &view.view_number.to_string())])?;
    empty(
        w,
        "size",
        &[
            ("width", &view.width.to_string()),
            ("height", &view.height.to_string()),
        ],
    )?;
    let cs = &view.coord_system;
    empty(
        w,
        "coordSystem",
        &[
            ("xZero", &cs.x_zero.to_string()),
            ("yZero", &cs.y_zero.to_string()),
            ("scale", &cs.scale.to_string()),
            ("yscale", &cs.y_scale.to_string()),
        ],
    )?;
    empty(
        w,
        "evSettings",
        &[
            ("axes", bool_str(view.show_axes)),
            ("grid", bool_str(view.show_grid)),
            ("gridIsBold", bool_str(view.grid_is_bold)),
            ("pointCapturing", &view.point_capturing.to_string()),
            ("rightAngleStyle", &view.right_angle_style.to_string()),
            ("checkboxSize", &view.checkbox_size.to_string()),
            ("gridType", &view.grid_type.to_string()),
        ],
    )?;
    for (tag, color) in [
        ("bgColor", view.background),
        ("axesColor", view.axes_color),
        ("gridColor", view.grid_color),
    ] {
        empty(
            w,
            tag,
            &[
                ("r", &color.r.to_string()),
                ("g", &color.g.to_string()),
                ("b", &color.b.to_string()),
            ],
        )?;
    }
    end(w, "euclidianView")
}

fn write_kernel<W: Write>(w: &mut Writer<W>, kernel: &KernelSettings) -> Result<()> {
    start(w, "kernel", &[])?;
    empty(w, "continuous", &[("val", bool_str(kernel.continuous))])?;
    empty(
        w,
        "usePathAndRegionParameters",
        &[("val", bool_str(kernel.use_path_and_region_parameters))],
    )?;
    empty(w, "decimals", &[("val", &kernel.decimals.to_string())])?;
    empty(w, "angleUnit", &[("val", kernel.angle_unit.as_str())])?;
    empty(w, "algebraStyle", &[("val", &kernel.algebra_style.to_string())])?;
    empty(w, "coordStyle", &[("val", &kernel.coord_style.to_string())])?;
    end(w, "kernel")
}

fn write_expression<W: Write>(w: &mut Writer<W>, exp: &Expression) -> Result<()> {
    empty(
        w,
        "expression",
        &[
            ("label", &exp.label),
            ("exp", &exp.exp),
            ("type", exp.kind.as_str()),
        ],
    )
}

fn write_command<W: Write>(w: &mut Writer<W>, cmd: &Command) -> Result<()> {
    start(w, "command", &[("name", &cmd.name)])?;
    write_args(w, "input", &cmd.inputs)?;
    write_args(w, "output", &cmd.outputs)?;
    end(w, "command")
}

/// Labels become positional attributes `a0`, `a1`, ...
fn write_args<W: Write>(w: &mut Writer<W>, tag: &str, labels: &[String]) -> Result<()> {
    let keys: Vec<String> = (0..labels.len()).map(|i| format!("a{i}")).collect();
    let attrs: Vec<(&str, &str)> = keys
        .iter()
        .zip(labels)
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    empty(w, tag, &attrs)
}

fn write_element<W: Write>(w: &mut Writer<W>, element: &Element) -> Result<()> {
    let style = &element.style;
    start(
        w,
        "element",
        &[("type", element.kind.as_str()), ("label", &element.label)],
    )?;
    empty(
        w,
        "show",
        &[
            ("object", bool_str(style.visible)),
            ("label", bool_str(style.label_visible)),
        ],
    )?;
    empty(
        w,
        "objColor",
        &[
            ("r", &style.color.r.to_string()),
            ("g", &style.color.g.to_string()),
            ("b", &style.color.b.to_string()),
            ("alpha", &style.alpha.to_string()),
        ],
    )?;
    empty(w, "layer", &[("val", &style.layer.to_string())])?;
    empty(w, "labelMode", &[("val", &style.label_mode.code().to_string())])?;

    match &element.geometry {
        Geometry::FreePoint {
            x,
            y,
            size,
            style: point_style,
        } => {
            empty(w, "pointSize", &[("val", &size.to_string())])?;
            empty(w, "pointStyle", &[("val", &point_style.to_string())])?;
            empty(
                w,
                "coords",
                &[("x", &x.to_string()), ("y", &y.to_string()), ("z", "1.0")],
            )?;
        }
        Geometry::CoefficientLine {
            a,
            b,
            c,
            thickness,
            line_type,
            fixed,
        } => {
            empty(w, "fixed", &[("val", bool_str(*fixed))])?;
            empty(
                w,
                "lineStyle",
                &[
                    ("thickness", &thickness.to_string()),
                    ("type", &line_type.to_string()),
                ],
            )?;
            empty(
                w,
                "coords",
                &[("x", &a.to_string()), ("y", &b.to_string()), ("z", &c.to_string())],
            )?;
        }
        Geometry::Dependent { thickness } => {
            empty(w, "lineStyle", &[("thickness", &thickness.to_string())])?;
        }
    }
    end(w, "element")
}

fn start<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
    w.write_event(Event::Start(elem))?;
    Ok(())
}

fn empty<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
    w.write_event(Event::Empty(elem))?;
    Ok(())
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
