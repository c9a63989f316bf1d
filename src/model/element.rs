//! Geometric object records (`<element>`).

/// An RGB color as written in `r`/`g`/`b` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Default for free points.
    pub const POINT: Color = Color::rgb(21, 101, 192);
    /// Default for lines given by coefficients.
    pub const LINE: Color = Color::rgb(0, 103, 88);
    /// Default for segments.
    pub const SEGMENT: Color = Color::rgb(200, 0, 200);
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Object type, written as the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Point,
    Line,
    Segment,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Point => "point",
            ElementKind::Line => "line",
            ElementKind::Segment => "segment",
        }
    }
}

/// What the label of an object shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    #[default]
    Name,
    NameValue,
    Value,
    Caption,
    CaptionValue,
}

impl LabelMode {
    /// Numeric code used by `<labelMode val="..."/>`.
    pub fn code(self) -> u8 {
        match self {
            LabelMode::Name => 0,
            LabelMode::NameValue => 1,
            LabelMode::Value => 2,
            LabelMode::Caption => 3,
            LabelMode::CaptionValue => 9,
        }
    }
}

/// Rendering attributes shared by every element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    pub visible: bool,
    pub label_visible: bool,
    pub color: Color,
    /// Fill transparency, 0 is none.
    pub alpha: f64,
    pub layer: u32,
    pub label_mode: LabelMode,
}

impl ElementStyle {
    pub fn new(color: Color) -> Self {
        Self {
            visible: true,
            label_visible: true,
            color,
            alpha: 0.0,
            layer: 0,
            label_mode: LabelMode::Name,
        }
    }
}

/// Kind-specific data of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A free point at `(x, y)` in homogeneous form `(x, y, 1.0)`.
    FreePoint { x: f64, y: f64, size: u32, style: u32 },
    /// A line `a*x + b*y + c = 0`; the coefficients are the coordinate triple.
    CoefficientLine {
        a: f64,
        b: f64,
        c: f64,
        thickness: u32,
        line_type: u32,
        fixed: bool,
    },
    /// An object whose position comes from a preceding command.
    Dependent { thickness: u32 },
}

pub const DEFAULT_POINT_SIZE: u32 = 5;
pub const DEFAULT_THICKNESS: u32 = 5;

/// A single geometric object in the construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub label: String,
    pub style: ElementStyle,
    pub geometry: Geometry,
}

impl Element {
    pub fn free_point(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind: ElementKind::Point,
            label: label.into(),
            style: ElementStyle::new(Color::POINT),
            geometry: Geometry::FreePoint {
                x,
                y,
                size: DEFAULT_POINT_SIZE,
                style: 0,
            },
        }
    }

    pub fn coefficient_line(label: impl Into<String>, a: f64, b: f64, c: f64) -> Self {
        Self {
            kind: ElementKind::Line,
            label: label.into(),
            style: ElementStyle::new(Color::LINE),
            geometry: Geometry::CoefficientLine {
                a,
                b,
                c,
                thickness: DEFAULT_THICKNESS,
                line_type: 0,
                fixed: false,
            },
        }
    }

    pub fn dependent(kind: ElementKind, label: impl Into<String>, color: Color) -> Self {
        Self {
            kind,
            label: label.into(),
            style: ElementStyle::new(color),
            geometry: Geometry::Dependent {
                thickness: DEFAULT_THICKNESS,
            },
        }
    }

    /// Coordinate triple written in `<coords>`, if the element carries one.
    pub fn coords(&self) -> Option<(f64, f64, f64)> {
        match self.geometry {
            Geometry::FreePoint { x, y, .. } => Some((x, y, 1.0)),
            Geometry::CoefficientLine { a, b, c, .. } => Some((a, b, c)),
            Geometry::Dependent { .. } => None,
        }
    }

    pub fn set_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.style.color = color.into();
        self
    }

    pub fn set_layer(&mut self, layer: u32) -> &mut Self {
        self.style.layer = layer;
        self
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.style.visible = visible;
        self
    }

    pub fn set_label_visible(&mut self, visible: bool) -> &mut Self {
        self.style.label_visible = visible;
        self
    }

    pub fn set_label_mode(&mut self, mode: LabelMode) -> &mut Self {
        self.style.label_mode = mode;
        self
    }

    /// Point radius in pixels. Ignored for non-point elements.
    pub fn set_point_size(&mut self, new_size: u32) -> &mut Self {
        if let Geometry::FreePoint { size, .. } = &mut self.geometry {
            *size = new_size;
        }
        self
    }

    /// Stroke width. Ignored for points.
    pub fn set_thickness(&mut self, new_thickness: u32) -> &mut Self {
        match &mut self.geometry {
            Geometry::CoefficientLine { thickness, .. } | Geometry::Dependent { thickness } => {
                *thickness = new_thickness;
            }
            Geometry::FreePoint { .. } => {}
        }
        self
    }
}
