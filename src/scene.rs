//! Declarative scene files.
//!
//! A scene is a TOML file listing construction objects in the order they
//! should be declared:
//!
//! ```toml
//! app = "suite"
//! sub_app = "graphing"
//!
//! [[objects]]
//! kind = "point"
//! label = "P"
//! x = 5
//! y = 5
//!
//! [[objects]]
//! kind = "segment"
//! label = "s"
//! from = "P"
//! to = "Q"
//! color = [255, 87, 34]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Color, Document, Element};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default = "Scene::default_app")]
    pub app: String,
    #[serde(default = "Scene::default_sub_app")]
    pub sub_app: String,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

/// One builder call. Colors are optional `[r, g, b]` overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneObject {
    Point {
        label: String,
        x: f64,
        y: f64,
        size: Option<u32>,
        color: Option<[u8; 3]>,
    },
    Line {
        label: String,
        a: f64,
        b: f64,
        c: f64,
        color: Option<[u8; 3]>,
    },
    Segment {
        label: String,
        from: String,
        to: String,
        color: Option<[u8; 3]>,
    },
    OrthogonalLine {
        label: String,
        point: String,
        line: String,
        color: Option<[u8; 3]>,
    },
}

impl Scene {
    fn default_app() -> String {
        "suite".to_string()
    }

    fn default_sub_app() -> String {
        "graphing".to_string()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            Error::Scene(msg) => Error::Scene(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Scene(e.to_string()))
    }

    /// Replay the objects, in file order, into a fresh document.
    pub fn build(&self) -> Document {
        let mut doc = Document::new(self.app.as_str(), self.sub_app.as_str());
        for object in &self.objects {
            object.apply(&mut doc);
        }
        debug!(
            objects = self.objects.len(),
            entries = doc.construction().len(),
            "built scene"
        );
        doc
    }
}

impl SceneObject {
    fn apply(&self, doc: &mut Document) {
        match self {
            SceneObject::Point {
                label,
                x,
                y,
                size,
                color,
            } => {
                let point = doc.add_point(label.as_str(), *x, *y);
                if let Some(size) = size {
                    point.set_point_size(*size);
                }
                override_color(point, *color);
            }
            SceneObject::Line {
                label,
                a,
                b,
                c,
                color,
            } => {
                let line = doc.add_line_by_coeffs(label.as_str(), *a, *b, *c);
                override_color(line, *color);
            }
            SceneObject::Segment {
                label,
                from,
                to,
                color,
            } => {
                let segment = doc.add_segment(label.as_str(), from.as_str(), to.as_str());
                override_color(segment, *color);
            }
            SceneObject::OrthogonalLine {
                label,
                point,
                line,
                color,
            } => {
                let orthogonal =
                    doc.add_orthogonal_line(label.as_str(), point.as_str(), line.as_str());
                override_color(orthogonal, *color);
            }
        }
    }
}

fn override_color(element: &mut Element, color: Option<[u8; 3]>) {
    if let Some(rgb) = color {
        element.set_color(Color::from(rgb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstructionEntry, Geometry};

    const SCENE: &str = r#"
[[objects]]
kind = "line"
label = "f"
a = 0
b = 1
c = -2

[[objects]]
kind = "point"
label = "A"
x = -3
y = 4.5
size = 7

[[objects]]
kind = "orthogonal_line"
label = "g"
point = "A"
line = "f"
color = [10, 20, 30]
"#;

    #[test]
    fn test_parse_defaults_app() {
        let scene = Scene::parse(SCENE).expect("valid scene");
        assert_eq!(scene.app, "suite");
        assert_eq!(scene.sub_app, "graphing");
        assert_eq!(scene.objects.len(), 3);
        assert_eq!(
            scene.objects[1],
            SceneObject::Point {
                label: "A".into(),
                x: -3.0,
                y: 4.5,
                size: Some(7),
                color: None,
            }
        );
    }

    #[test]
    fn test_build_replays_in_order() {
        let doc = Scene::parse(SCENE).expect("valid scene").build();
        let tags: Vec<_> = doc
            .construction()
            .entries()
            .iter()
            .map(ConstructionEntry::tag)
            .collect();
        assert_eq!(tags, vec!["expression", "element", "element", "command", "element"]);

        let a = doc.construction().element("A").expect("point A");
        assert!(matches!(a.geometry, Geometry::FreePoint { size: 7, .. }));
        let g = doc.construction().element("g").expect("line g");
        assert_eq!(g.style.color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_unknown_kind_is_scene_error() {
        let err = Scene::parse("[[objects]]\nkind = \"circle\"\nlabel = \"c\"\n").unwrap_err();
        assert!(matches!(err, Error::Scene(_)));
    }

    #[test]
    fn test_custom_app() {
        let scene = Scene::parse("app = \"classic\"\nsub_app = \"geometry\"\n").expect("valid");
        let doc = scene.build();
        assert_eq!(doc.app(), "classic");
        assert_eq!(doc.sub_app(), "geometry");
        assert!(doc.construction().is_empty());
    }
}
