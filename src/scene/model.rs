use crate::{
    animation::motion::Motion,
    foundation::core::{BezPath, Color, Point, Rect, Viewport},
};

/// Paint layers in painter's order (back to front).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Layer {
    /// Full-viewport sky gradient.
    Background,
    /// Pulsing sun disc.
    Sun,
    /// Drifting cloud clusters.
    Clouds,
    /// Ocean panel.
    Ocean,
    /// Translating wave paths.
    Waves,
    /// Sand shape.
    Beach,
    /// Seagull glyphs, drawn above everything else.
    Seagulls,
}

impl Layer {
    /// Stable lowercase name used for SVG ids and classes.
    pub fn name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Sun => "sun",
            Layer::Clouds => "cloud",
            Layer::Ocean => "ocean",
            Layer::Waves => "wave",
            Layer::Beach => "beach",
            Layer::Seagulls => "seagull",
        }
    }
}

/// Named gradients referenced by [`Paint::Gradient`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GradientId {
    /// Sky: orange to red to pink, top to bottom.
    Sky,
    /// Sun disc: gold center fading to tomato.
    Sunset,
    /// Ocean: steel blue to navy, top to bottom.
    Ocean,
    /// Sand: sandy brown, burlywood, sandy brown, left to right.
    Sand,
}

impl GradientId {
    /// Identifier used in SVG `url(#...)` references.
    pub fn svg_id(self) -> &'static str {
        match self {
            GradientId::Sky => "skyGradient",
            GradientId::Sunset => "sunsetGradient",
            GradientId::Ocean => "oceanGradient",
            GradientId::Sand => "sandGradient",
        }
    }
}

/// Gradient geometry in object bounding-box fractions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum GradientKind {
    /// Linear gradient from `(x1, y1)` to `(x2, y2)`.
    Linear {
        /// Start x.
        x1: f64,
        /// Start y.
        y1: f64,
        /// End x.
        x2: f64,
        /// End y.
        y2: f64,
    },
    /// Radial gradient centered on `(cx, cy)`.
    Radial {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
    },
}

/// One color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Offset in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

/// Gradient definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    /// Name.
    pub id: GradientId,
    /// Geometry.
    pub kind: GradientKind,
    /// Ordered stops.
    pub stops: Vec<GradientStop>,
}

/// Fill of a shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Reference to a scene gradient.
    Gradient(GradientId),
}

/// Pulsing sun.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Sun {
    /// Disc center.
    pub center: Point,
    /// Disc radius.
    pub radius: f64,
    /// Uniform scale about `center`.
    pub pulse: Motion,
}

/// A cloud cluster of three overlapping ellipses.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Cloud {
    /// Index within the scene.
    pub id: usize,
    /// Center of the main puff.
    pub center: Point,
    /// Overall cluster size in pixels.
    pub size: f64,
    /// Horizontal translation.
    pub drift: Motion,
}

/// One ellipse of a cloud cluster.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Puff {
    /// Ellipse center.
    pub center: Point,
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius.
    pub ry: f64,
}

impl Cloud {
    /// Cloud puff fill: white at 80% opacity.
    pub const FILL: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        alpha: 0.8,
    };

    /// The three ellipses making up the cluster, main puff first.
    pub fn puffs(&self) -> [Puff; 3] {
        let Point { x, y } = self.center;
        let s = self.size;
        [
            Puff {
                center: Point::new(x, y),
                rx: s * 0.6,
                ry: s * 0.4,
            },
            Puff {
                center: Point::new(x - s * 0.3, y + s * 0.1),
                rx: s * 0.4,
                ry: s * 0.3,
            },
            Puff {
                center: Point::new(x + s * 0.3, y + s * 0.1),
                rx: s * 0.4,
                ry: s * 0.3,
            },
        ]
    }
}

/// Ocean panel.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Ocean {
    /// Panel bounds.
    pub rect: Rect,
}

/// One wave layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    /// Layer index; higher waves sit further up and are more opaque.
    pub id: usize,
    /// Cubic wave outline.
    pub path: BezPath,
    /// Fill color.
    pub color: Color,
    /// Horizontal translation.
    pub drift: Motion,
}

/// Sand shape.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Beach {
    /// Closed outline.
    pub path: BezPath,
    /// Vertical entrance translation.
    pub rise: Motion,
}

/// A seagull crossing the sky.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Seagull {
    /// 1-based index.
    pub id: usize,
    /// Vertical position of the glyph's top edge.
    pub start_y: f64,
    /// Horizontal translation.
    pub flight: Motion,
}

impl Seagull {
    /// Glyph fill.
    pub const FILL: Color = Color::rgb(255, 255, 255);
    /// Gull outline in glyph-local coordinates, 36px wide.
    pub fn glyph() -> BezPath {
        let mut p = BezPath::new();
        p.move_to((0.0, 14.0));
        p.quad_to((9.0, 4.0), (18.0, 14.0));
        p.quad_to((27.0, 4.0), (36.0, 14.0));
        p.quad_to((27.0, 8.0), (18.0, 18.0));
        p.quad_to((9.0, 8.0), (0.0, 14.0));
        p.close_path();
        p
    }
}

/// Per-layer shape counts of a scene or frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LayerCounts {
    /// Sun discs.
    pub suns: usize,
    /// Cloud clusters.
    pub clouds: usize,
    /// Wave paths.
    pub waves: usize,
    /// Seagull glyphs.
    pub seagulls: usize,
}

/// A fully generated scene for one viewport.
///
/// Scenes are ephemeral: every render pass builds a new one with fresh random draws, so
/// nothing here has identity beyond its index.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Viewport the geometry was generated for.
    pub viewport: Viewport,
    /// Gradient definitions referenced by shapes.
    pub gradients: Vec<Gradient>,
    /// Sun.
    pub sun: Sun,
    /// Cloud clusters.
    pub clouds: Vec<Cloud>,
    /// Ocean panel.
    pub ocean: Ocean,
    /// Wave layers, back to front.
    pub waves: Vec<Wave>,
    /// Beach.
    pub beach: Beach,
    /// Seagulls.
    pub seagulls: Vec<Seagull>,
}

impl Scene {
    /// How many shapes each animated layer holds.
    pub fn layer_counts(&self) -> LayerCounts {
        LayerCounts {
            suns: 1,
            clouds: self.clouds.len(),
            waves: self.waves.len(),
            seagulls: self.seagulls.len(),
        }
    }
}
