//! The root `<geogebra>` document and its builder operations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

use super::{
    Color, Command, Construction, ConstructionEntry, Element, ElementKind, Expression,
    GuiSettings, KernelSettings, ViewSettings,
};
use crate::error::{Error, Result};
use crate::export::GgbExporter;

/// File format version written on the root element.
pub const FORMAT_VERSION: &str = "5.0";
/// GeoGebra release the skeleton was taken from.
pub const APP_VERSION: &str = "5.2.892.0";
/// Platform tag for the web app.
pub const PLATFORM_WEB: &str = "w";
pub const SCHEMA_LOCATION: &str = "http://www.geogebra.org/apps/xsd/ggb.xsd";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// A GeoGebra construction file under construction.
///
/// The configuration sections are filled from fixed templates when the
/// document is created. After that only the construction list changes, and
/// only by appending.
///
/// Builder operations never look at earlier entries: duplicate labels or
/// references to labels that do not exist yet are written out as given and
/// surface when GeoGebra opens the file. Use [`Document::validate`] to catch
/// them beforehand.
///
/// # Example
///
/// ```no_run
/// use ggbgen::{Color, Document};
///
/// let mut doc = Document::new("suite", "graphing");
/// doc.add_point("P", 5.0, 5.0);
/// doc.add_point("Q", 8.0, 1.0);
/// doc.add_segment("s", "P", "Q").set_color(Color::rgb(255, 87, 34));
/// doc.save("segment")?; // writes segment.ggb
/// # Ok::<(), ggbgen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    app: String,
    sub_app: String,
    gui: GuiSettings,
    view: ViewSettings,
    kernel: KernelSettings,
    construction: Construction,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("suite", "graphing")
    }
}

impl Document {
    /// Create an empty document for the given app (`suite`, `classic`, ...)
    /// and sub-app (`graphing`, `geometry`, ...). Each call gets a fresh id.
    pub fn new(app: impl Into<String>, sub_app: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            app: app.into(),
            sub_app: sub_app.into(),
            gui: GuiSettings::default(),
            view: ViewSettings::default(),
            kernel: KernelSettings::default(),
            construction: Construction::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn sub_app(&self) -> &str {
        &self.sub_app
    }

    pub fn format(&self) -> &str {
        FORMAT_VERSION
    }

    pub fn version(&self) -> &str {
        APP_VERSION
    }

    pub fn platform(&self) -> &str {
        PLATFORM_WEB
    }

    pub fn gui(&self) -> &GuiSettings {
        &self.gui
    }

    pub fn view(&self) -> &ViewSettings {
        &self.view
    }

    pub fn kernel(&self) -> &KernelSettings {
        &self.kernel
    }

    pub fn construction(&self) -> &Construction {
        &self.construction
    }

    /// Add a free point at `(x, y)`.
    pub fn add_point(&mut self, label: impl Into<String>, x: f64, y: f64) -> &mut Element {
        self.construction
            .push_element(Element::free_point(label, x, y))
    }

    /// Add the line `a*x + b*y + c = 0`, preceded by its display expression.
    pub fn add_line_by_coeffs(
        &mut self,
        label: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
    ) -> &mut Element {
        let label = label.into();
        self.construction
            .push(ConstructionEntry::Expression(Expression {
                label: label.clone(),
                exp: line_expression(a, b, c),
                kind: ElementKind::Line,
            }));
        self.construction
            .push_element(Element::coefficient_line(label, a, b, c))
    }

    /// Add the segment between two previously declared points.
    pub fn add_segment(
        &mut self,
        label: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Element {
        self.add_dependent(
            "Segment",
            [from.into(), to.into()],
            label.into(),
            ElementKind::Segment,
            Color::SEGMENT,
        )
    }

    /// Add the line through `point` perpendicular to `line`.
    pub fn add_orthogonal_line(
        &mut self,
        label: impl Into<String>,
        point: impl Into<String>,
        line: impl Into<String>,
    ) -> &mut Element {
        self.add_dependent(
            "OrthogonalLine",
            [point.into(), line.into()],
            label.into(),
            ElementKind::Line,
            Color::BLACK,
        )
    }

    /// The command must come first; the element after it carries no `<input>`.
    fn add_dependent(
        &mut self,
        command: &str,
        inputs: [String; 2],
        label: String,
        kind: ElementKind,
        color: Color,
    ) -> &mut Element {
        self.construction
            .push(ConstructionEntry::Command(Command::new(
                command,
                inputs,
                [label.as_str()],
            )));
        self.construction
            .push_element(Element::dependent(kind, label, color))
    }

    /// Check label uniqueness and declaration order.
    ///
    /// Reports every element label declared twice and every command input
    /// that is not an element or command output declared before it.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        let mut declared: HashSet<&str> = HashSet::new();
        let mut element_labels: HashSet<&str> = HashSet::new();

        for entry in self.construction.entries() {
            match entry {
                ConstructionEntry::Expression(_) => {}
                ConstructionEntry::Command(command) => {
                    for input in &command.inputs {
                        if !declared.contains(input.as_str()) {
                            problems.push(format!(
                                "{} input '{}' is not declared before use",
                                command.name, input
                            ));
                        }
                    }
                    declared.extend(command.outputs.iter().map(String::as_str));
                }
                ConstructionEntry::Element(element) => {
                    if !element_labels.insert(element.label.as_str()) {
                        problems.push(format!("label '{}' is declared twice", element.label));
                    }
                    declared.insert(element.label.as_str());
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            for problem in &problems {
                warn!(%problem, "construction problem");
            }
            Err(Error::Validation(problems))
        }
    }

    /// Write the document as a `.ggb` archive and return the path written.
    ///
    /// The `.ggb` extension is appended when `path` does not already end with
    /// it. An existing file is overwritten.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        GgbExporter::new().save(self, path)
    }
}

/// Display string for `a*x + b*y + c = 0` with the values substituted as-is.
pub fn line_expression(a: f64, b: f64, c: f64) -> String {
    format!("{a}x + {b}y + {c} = 0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Geometry;

    fn tags(doc: &Document) -> Vec<&'static str> {
        doc.construction()
            .entries()
            .iter()
            .map(ConstructionEntry::tag)
            .collect()
    }

    #[test]
    fn test_new_document_is_empty_with_defaults() {
        let doc = Document::new("suite", "graphing");
        assert_eq!(doc.app(), "suite");
        assert_eq!(doc.sub_app(), "graphing");
        assert!(doc.construction().is_empty());
        assert_eq!(doc.gui(), &GuiSettings::default());
        assert_eq!(doc.kernel().decimals, 2);
        assert!(Uuid::parse_str(doc.id()).is_ok());
    }

    #[test]
    fn test_documents_get_distinct_ids() {
        let a = Document::default();
        let b = Document::default();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_line_by_coeffs_adds_expression_then_element() {
        let mut doc = Document::default();
        doc.add_line_by_coeffs("f", 0.0, 1.0, -2.0);

        assert_eq!(tags(&doc), vec!["expression", "element"]);
        match &doc.construction().entries()[0] {
            ConstructionEntry::Expression(exp) => {
                assert_eq!(exp.label, "f");
                assert_eq!(exp.exp, "0x + 1y + -2 = 0");
                assert_eq!(exp.kind, ElementKind::Line);
            }
            other => panic!("Expected expression, got {:?}", other),
        }
    }

    #[test]
    fn test_segment_command_precedes_element() {
        let mut doc = Document::default();
        doc.add_point("P", 5.0, 5.0);
        doc.add_point("Q", 8.0, 1.0);
        doc.add_segment("seg1", "P", "Q").set_color([255, 87, 34]);

        assert_eq!(tags(&doc), vec!["element", "element", "command", "element"]);
        match &doc.construction().entries()[2] {
            ConstructionEntry::Command(cmd) => {
                assert_eq!(cmd.name, "Segment");
                assert_eq!(cmd.inputs, vec!["P", "Q"]);
                assert_eq!(cmd.outputs, vec!["seg1"]);
            }
            other => panic!("Expected command, got {:?}", other),
        }
        let seg = doc.construction().element("seg1").expect("segment element");
        assert_eq!(seg.kind, ElementKind::Segment);
        assert_eq!(seg.style.color, Color::rgb(255, 87, 34));
        assert_eq!(seg.geometry, Geometry::Dependent { thickness: 5 });
    }

    #[test]
    fn test_orthogonal_line_defaults() {
        let mut doc = Document::default();
        doc.add_orthogonal_line("g", "A", "f");

        let ConstructionEntry::Command(cmd) = &doc.construction().entries()[0] else {
            panic!("Expected command first");
        };
        assert_eq!(cmd.name, "OrthogonalLine");
        assert_eq!(cmd.inputs, vec!["A", "f"]);
        let g = doc.construction().element("g").expect("line element");
        assert_eq!(g.kind, ElementKind::Line);
        assert_eq!(g.style.color, Color::BLACK);
    }

    #[test]
    fn test_builders_do_not_validate() {
        let mut doc = Document::default();
        doc.add_segment("s", "missing", "also_missing");
        doc.add_point("A", 0.0, 0.0);
        doc.add_point("A", 1.0, 1.0);
        assert_eq!(doc.construction().len(), 4);
    }

    #[test]
    fn test_validate_accepts_ordered_construction() {
        let mut doc = Document::default();
        doc.add_line_by_coeffs("f", 0.0, 1.0, -2.0);
        doc.add_point("A", -3.0, 4.0);
        doc.add_orthogonal_line("g", "A", "f");
        doc.add_point("B", 1.0, 1.0);
        doc.add_segment("s", "B", "A");
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_dangling_and_duplicate_labels() {
        let mut doc = Document::default();
        doc.add_segment("s", "P", "Q");
        doc.add_point("P", 0.0, 0.0);
        doc.add_point("P", 1.0, 0.0);

        match doc.validate() {
            Err(Error::Validation(problems)) => {
                assert_eq!(problems.len(), 3);
                assert!(problems[0].contains("'P'"));
                assert!(problems[1].contains("'Q'"));
                assert!(problems[2].contains("declared twice"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_self_reference() {
        let mut doc = Document::default();
        doc.add_point("A", 0.0, 0.0);
        doc.add_segment("s", "A", "s");
        assert!(matches!(doc.validate(), Err(Error::Validation(p)) if p.len() == 1));
    }

    #[test]
    fn test_line_expression_uses_literal_values() {
        assert_eq!(line_expression(2.0, -3.5, 0.0), "2x + -3.5y + 0 = 0");
    }
}
