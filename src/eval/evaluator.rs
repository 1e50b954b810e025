use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Vec2, Viewport},
    foundation::error::{SunsetError, SunsetResult},
    scene::model::{Cloud, Gradient, GradientId, Layer, Paint, Puff, Scene, Seagull},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Untransformed geometry of a node.
pub enum Primitive {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse(Puff),
    /// Arbitrary outline.
    Path(BezPath),
}

#[derive(Clone, Debug, serde::Serialize)]
/// One shape of the frame with its animation resolved to a transform.
pub struct ShapeNode {
    /// Stable identifier, e.g. `wave-3`.
    pub id: String,
    /// Layer the node belongs to.
    pub layer: Layer,
    /// Resolved animation transform.
    pub transform: Affine,
    /// Geometry, all filled with `paint`.
    pub primitives: Vec<Primitive>,
    /// Fill.
    pub paint: Paint,
}

#[derive(Clone, Debug, serde::Serialize)]
/// A scene frozen at one instant, ready for rendering.
pub struct FrameGraph {
    /// Scene time in seconds.
    pub time_secs: f64,
    /// Viewport of the source scene.
    pub viewport: Viewport,
    /// Gradients referenced by node paints.
    pub gradients: Vec<Gradient>,
    /// Nodes in painter's order.
    pub nodes: Vec<ShapeNode>,
}

impl FrameGraph {
    /// Number of nodes on `layer`.
    pub fn count(&self, layer: Layer) -> usize {
        self.nodes.iter().filter(|n| n.layer == layer).count()
    }
}

/// Stateless sampler from scene + time to frame graph.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(scene), fields(viewport = ?scene.viewport))]
    /// Resolve every motion in `scene` at `t_secs`.
    pub fn eval_at(scene: &Scene, t_secs: f64) -> SunsetResult<FrameGraph> {
        if !t_secs.is_finite() || t_secs < 0.0 {
            return Err(SunsetError::evaluation(format!(
                "scene time must be finite and >= 0, got {t_secs}"
            )));
        }

        let vp = scene.viewport;
        let mut nodes = Vec::with_capacity(
            4 + scene.clouds.len() + scene.waves.len() + scene.seagulls.len(),
        );

        nodes.push(ShapeNode {
            id: Layer::Background.name().to_string(),
            layer: Layer::Background,
            transform: Affine::IDENTITY,
            primitives: vec![Primitive::Rect(vp.rect())],
            paint: Paint::Gradient(GradientId::Sky),
        });

        let sun = &scene.sun;
        let scale = sun.pulse.sample(t_secs)?;
        let pivot = sun.center.to_vec2();
        nodes.push(ShapeNode {
            id: Layer::Sun.name().to_string(),
            layer: Layer::Sun,
            transform: Affine::translate(pivot) * Affine::scale(scale) * Affine::translate(-pivot),
            primitives: vec![Primitive::Circle {
                center: sun.center,
                radius: sun.radius,
            }],
            paint: Paint::Gradient(GradientId::Sunset),
        });

        for cloud in &scene.clouds {
            let dx = cloud.drift.sample(t_secs)?;
            nodes.push(ShapeNode {
                id: format!("{}-{}", Layer::Clouds.name(), cloud.id),
                layer: Layer::Clouds,
                transform: Affine::translate(Vec2::new(dx, 0.0)),
                primitives: cloud.puffs().into_iter().map(Primitive::Ellipse).collect(),
                paint: Paint::Solid(Cloud::FILL),
            });
        }

        nodes.push(ShapeNode {
            id: Layer::Ocean.name().to_string(),
            layer: Layer::Ocean,
            transform: Affine::IDENTITY,
            primitives: vec![Primitive::Rect(scene.ocean.rect)],
            paint: Paint::Gradient(GradientId::Ocean),
        });

        for wave in &scene.waves {
            let dx = wave.drift.sample(t_secs)?;
            nodes.push(ShapeNode {
                id: format!("{}-{}", Layer::Waves.name(), wave.id),
                layer: Layer::Waves,
                transform: Affine::translate(Vec2::new(dx, 0.0)),
                primitives: vec![Primitive::Path(wave.path.clone())],
                paint: Paint::Solid(wave.color),
            });
        }

        let dy = scene.beach.rise.sample(t_secs)?;
        nodes.push(ShapeNode {
            id: Layer::Beach.name().to_string(),
            layer: Layer::Beach,
            transform: Affine::translate(Vec2::new(0.0, dy)),
            primitives: vec![Primitive::Path(scene.beach.path.clone())],
            paint: Paint::Gradient(GradientId::Sand),
        });

        let glyph = Seagull::glyph();
        for gull in &scene.seagulls {
            let dx = gull.flight.sample(t_secs)?;
            nodes.push(ShapeNode {
                id: format!("{}-{}", Layer::Seagulls.name(), gull.id),
                layer: Layer::Seagulls,
                transform: Affine::translate(Vec2::new(dx, gull.start_y)),
                primitives: vec![Primitive::Path(glyph.clone())],
                paint: Paint::Solid(Seagull::FILL),
            });
        }

        Ok(FrameGraph {
            time_secs: t_secs,
            viewport: vp,
            gradients: scene.gradients.clone(),
            nodes,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
