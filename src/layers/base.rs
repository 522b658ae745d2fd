use crate::core::geo::LatLngBounds;
#[cfg(feature = "egui")]
use crate::core::viewport::Viewport;
#[cfg(feature = "egui")]
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Tile,
    Marker,
    Vector,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Tile => write!(f, "tile"),
            LayerKind::Marker => write!(f, "marker"),
            LayerKind::Vector => write!(f, "vector"),
        }
    }
}

/// Whether the layer is an exclusive base map or a togglable overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    Base,
    Overlay,
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    pub role: LayerRole,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            role: LayerRole::Overlay,
            z_index: 0,
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn with_role(mut self, role: LayerRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// Object-safe layer interface shared by tile, marker, and vector layers
pub trait Layer: Send + Sync {
    fn properties(&self) -> &LayerProperties;

    fn properties_mut(&mut self) -> &mut LayerProperties;

    fn id(&self) -> &str {
        &self.properties().id
    }

    fn name(&self) -> &str {
        &self.properties().name
    }

    fn kind(&self) -> LayerKind {
        self.properties().kind
    }

    fn role(&self) -> LayerRole {
        self.properties().role
    }

    fn z_index(&self) -> i32 {
        self.properties().z_index
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.properties_mut().z_index = z_index;
    }

    fn opacity(&self) -> f32 {
        self.properties().opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.properties_mut().opacity = opacity.clamp(0.0, 1.0);
    }

    fn is_visible(&self) -> bool {
        self.properties().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.properties_mut().visible = visible;
    }

    /// Geographic extent of the layer's data; `None` for unbounded layers
    /// such as tile layers
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Paints the layer into the widget rect
    #[cfg(feature = "egui")]
    fn render(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        viewport: &Viewport,
    ) -> Result<()>;

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
