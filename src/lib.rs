//! Sunset generates an animated beach-sunset scene as layered vector graphics.
//!
//! A scene is a sky gradient, a pulsing sun, drifting clouds, an ocean panel, translating
//! wave layers, a sand beach with an entrance transition, and seagulls crossing the sky.
//! Geometry is randomized per render pass and sized to the host viewport; motion is described
//! declaratively and interpolated later.
//!
//! # Pipeline overview
//!
//! 1. **Host**: [`SceneHost`] measures the viewport, tracks resizes, and renders nothing until
//!    a measurement exists.
//! 2. **Generate**: `Viewport + SceneConfig -> Scene` (fresh random draws each pass)
//! 3. **Animate**: either hand the whole scene to SMIL with [`render_animated_svg`], or
//!    freeze it at an instant with [`Evaluator::eval_at`] (`Scene + t -> FrameGraph`)
//! 4. **Render**: `FrameGraph -> SVG -> FrameRGBA` via `usvg`/`resvg`, optionally across a
//!    rayon pool with [`render_frames`]
//!
//! Everything is deterministic for a fixed [`SceneConfig::seed`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod host;
mod render;
mod scene;

pub use animation::ease::Ease;
pub use animation::motion::{Lerp, Motion, Repeat};
pub use eval::evaluator::{Evaluator, FrameGraph, Primitive, ShapeNode};
pub use foundation::core::{
    Affine, BezPath, Color, Fps, FrameIndex, FrameRange, Point, Rect, Vec2, Viewport,
};
pub use foundation::error::{SunsetError, SunsetResult};
pub use foundation::rng::Rng64;
pub use host::viewport::{FixedViewport, SceneHost, ViewportSource};
pub use render::pipeline::{
    MAX_FRAMES, RenderThreading, ensure_parent_dir, range_for_secs, render_frame, render_frames,
    write_png, write_png_sequence,
};
pub use render::raster::{FrameRGBA, rasterize_svg};
pub use render::svg::{path_data, render_animated_svg, render_frame_svg};
pub use scene::config::{SceneConfig, Span};
pub use scene::generate::{
    WAVE_SPACING_PX, WAVE_SWELL_PX, build_scene, generate_clouds, generate_seagulls,
    generate_waves, gradients,
};
pub use scene::model::{
    Beach, Cloud, Gradient, GradientId, GradientKind, GradientStop, Layer, LayerCounts, Ocean,
    Paint, Puff, Scene, Seagull, Sun, Wave,
};
