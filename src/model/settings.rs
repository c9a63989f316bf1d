//! Static configuration sections of a GeoGebra document.
//!
//! GeoGebra refuses files that lack a `<gui>`, `<euclidianView>` or `<kernel>`
//! block, even when the construction itself is complete. These types hold the
//! values written into those blocks. Every [`Default`] impl is the template a
//! fresh [`Document`](super::Document) starts from; nothing mutates them after
//! the document is created.

use super::Color;

/// Application window and panel layout (`<gui>`).
#[derive(Debug, Clone, PartialEq)]
pub struct GuiSettings {
    pub window: WindowSize,
    pub perspective: Perspective,
    /// Which objects get labels on creation (`<labelingStyle>`).
    pub labeling_style: u32,
    pub font_size: u32,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window: WindowSize {
                width: 1280,
                height: 800,
            },
            perspective: Perspective::default(),
            labeling_style: 1,
            font_size: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// A named panel arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct Perspective {
    pub id: String,
    pub panes: Vec<Pane>,
    pub views: Vec<ViewPanel>,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            id: "graphing".to_string(),
            panes: vec![Pane {
                location: String::new(),
                divider: 0.25,
                orientation: 1,
            }],
            views: vec![
                ViewPanel {
                    id: 1,
                    visible: true,
                    in_frame: false,
                    stylebar: false,
                    location: 1,
                    size: 950,
                    tab: None,
                    window: [100, 100, 600, 400],
                },
                ViewPanel {
                    id: 2,
                    visible: true,
                    in_frame: false,
                    stylebar: false,
                    location: 3,
                    size: 300,
                    tab: Some("ALGEBRA".to_string()),
                    window: [100, 100, 600, 400],
                },
            ],
        }
    }
}

/// Split between two panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub location: String,
    pub divider: f64,
    pub orientation: u32,
}

/// One docked view (1 = graphics, 2 = algebra).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPanel {
    pub id: u32,
    pub visible: bool,
    pub in_frame: bool,
    pub stylebar: bool,
    pub location: u32,
    pub size: u32,
    pub tab: Option<String>,
    /// Undocked window bounds as `x, y, width, height`.
    pub window: [u32; 4],
}

/// Graphics view canvas (`<euclidianView>`).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub view_number: u32,
    pub width: u32,
    pub height: u32,
    pub coord_system: CoordSystem,
    pub show_axes: bool,
    pub show_grid: bool,
    pub grid_is_bold: bool,
    pub point_capturing: u32,
    pub right_angle_style: u32,
    pub checkbox_size: u32,
    pub grid_type: u32,
    pub background: Color,
    pub axes_color: Color,
    pub grid_color: Color,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            view_number: 1,
            width: 880,
            height: 606,
            coord_system: CoordSystem::default(),
            show_axes: true,
            show_grid: true,
            grid_is_bold: false,
            point_capturing: 3,
            right_angle_style: 1,
            checkbox_size: 26,
            grid_type: 3,
            background: Color::rgb(255, 255, 255),
            axes_color: Color::rgb(0, 0, 0),
            grid_color: Color::rgb(192, 192, 192),
        }
    }
}

/// Screen position of the origin and pixels per unit on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordSystem {
    pub x_zero: f64,
    pub y_zero: f64,
    pub scale: f64,
    pub y_scale: f64,
}

impl Default for CoordSystem {
    fn default() -> Self {
        Self {
            x_zero: 440.0,
            y_zero: 303.0,
            scale: 50.0,
            y_scale: 50.0,
        }
    }
}

/// Numeric and display behavior of the kernel (`<kernel>`).
#[derive(Debug, Clone, PartialEq)]
pub struct KernelSettings {
    pub continuous: bool,
    pub use_path_and_region_parameters: bool,
    pub decimals: u32,
    pub angle_unit: AngleUnit,
    pub algebra_style: u32,
    pub coord_style: u32,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            continuous: false,
            use_path_and_region_parameters: true,
            decimals: 2,
            angle_unit: AngleUnit::Degree,
            algebra_style: 3,
            coord_style: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degree,
    Radian,
}

impl AngleUnit {
    /// Attribute value GeoGebra expects. Radians are spelled `radiant` in the schema.
    pub fn as_str(self) -> &'static str {
        match self {
            AngleUnit::Degree => "degree",
            AngleUnit::Radian => "radiant",
        }
    }
}
