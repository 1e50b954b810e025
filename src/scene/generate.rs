use crate::{
    animation::{ease::Ease, motion::Motion},
    foundation::core::{BezPath, Color, Point, Rect, Viewport},
    foundation::error::SunsetResult,
    foundation::rng::Rng64,
    scene::config::SceneConfig,
    scene::model::{
        Beach, Cloud, Gradient, GradientId, GradientKind, GradientStop, Ocean, Scene, Seagull,
        Sun, Wave,
    },
};

/// Vertical distance between consecutive wave layers.
pub const WAVE_SPACING_PX: f64 = 15.0;
/// Height of the wave swell above and below its baseline.
pub const WAVE_SWELL_PX: f64 = 20.0;

const WAVE_RGB: (u8, u8, u8) = (0, 153, 255);
const SEAGULL_OFFSCREEN_PX: f64 = 50.0;

/// Generate `count` wave layers for `viewport`.
///
/// Wave `i` rests on baseline `h - 15i`, swells up at the quarter point and down at the
/// midpoint, gets more opaque with `i`, and slides in from `-w/2` over `10 + 2i` seconds.
pub fn generate_waves(viewport: Viewport, count: usize) -> Vec<Wave> {
    let (w, h) = (viewport.w(), viewport.h());
    (0..count)
        .map(|i| {
            let fi = i as f64;
            let base = h - fi * WAVE_SPACING_PX;

            let mut path = BezPath::new();
            path.move_to((0.0, base));
            path.curve_to(
                (w / 4.0, base - WAVE_SWELL_PX),
                (w / 2.0, base + WAVE_SWELL_PX),
                (w, base),
            );

            let (r, g, b) = WAVE_RGB;
            Wave {
                id: i,
                path,
                color: Color::rgb(r, g, b).with_alpha(0.05 + fi * 0.03),
                drift: Motion::tween(-w / 2.0, 0.0, 10.0 + fi * 2.0),
            }
        })
        .collect()
}

/// Scatter cloud clusters over the upper half of the viewport.
pub fn generate_clouds(viewport: Viewport, config: &SceneConfig, rng: &mut Rng64) -> Vec<Cloud> {
    let (w, h) = (viewport.w(), viewport.h());
    (0..config.cloud_count)
        .map(|i| {
            let x = rng.range(0.0, w);
            let y = rng.range(0.0, h / 2.0);
            let size = rng.range(config.cloud_size_px.min, config.cloud_size_px.max);
            let drift_secs = rng.range(config.cloud_drift_secs.min, config.cloud_drift_secs.max);
            Cloud {
                id: i,
                center: Point::new(x, y),
                size,
                drift: Motion::tween(-size, w + size, drift_secs),
            }
        })
        .collect()
}

/// Place seagulls in the top third, staggering their departures.
pub fn generate_seagulls(
    viewport: Viewport,
    config: &SceneConfig,
    rng: &mut Rng64,
) -> Vec<Seagull> {
    let (w, h) = (viewport.w(), viewport.h());
    (1..=config.seagull_count)
        .map(|id| {
            let fi = id as f64;
            Seagull {
                id,
                start_y: rng.range(0.0, h / 3.0),
                flight: Motion::tween(-SEAGULL_OFFSCREEN_PX, w + SEAGULL_OFFSCREEN_PX, 20.0 + fi * 5.0)
                    .with_delay(fi * 2.0),
            }
        })
        .collect()
}

fn sun(viewport: Viewport, config: &SceneConfig) -> Sun {
    Sun {
        center: Point::new(viewport.w() / 2.0, viewport.h() * 0.7),
        radius: config.sun_radius_px,
        pulse: Motion::keyframes(vec![1.0, 1.05, 1.0], config.sun_pulse_secs)
            .with_ease(Ease::InOutQuad),
    }
}

fn ocean(viewport: Viewport) -> Ocean {
    let (w, h) = (viewport.w(), viewport.h());
    Ocean {
        rect: Rect::new(0.0, h * 0.65, w, h),
    }
}

fn beach(viewport: Viewport, config: &SceneConfig) -> Beach {
    let (w, h) = (viewport.w(), viewport.h());
    let mut path = BezPath::new();
    path.move_to((0.0, h));
    path.line_to((w, h));
    path.line_to((w, h * 0.85));
    path.quad_to((w * 0.75, h * 0.83), (w * 0.5, h * 0.84));
    path.quad_to((w * 0.25, h * 0.85), (0.0, h * 0.87));
    path.close_path();
    Beach {
        path,
        rise: Motion::tween(config.beach_rise_px, 0.0, config.beach_rise_secs)
            .with_ease(Ease::OutCubic)
            .once(),
    }
}

fn stop(offset: f64, hex: u32) -> GradientStop {
    GradientStop {
        offset,
        color: Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8),
    }
}

/// The fixed sunset palette.
pub fn gradients() -> Vec<Gradient> {
    let vertical = GradientKind::Linear {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 1.0,
    };
    vec![
        Gradient {
            id: GradientId::Sky,
            kind: vertical,
            stops: vec![stop(0.0, 0xFDBA74), stop(0.5, 0xF87171), stop(1.0, 0xEC4899)],
        },
        Gradient {
            id: GradientId::Sunset,
            kind: GradientKind::Radial {
                cx: 0.5,
                cy: 0.5,
                r: 0.5,
            },
            stops: vec![stop(0.0, 0xFFD700), stop(1.0, 0xFF6347)],
        },
        Gradient {
            id: GradientId::Ocean,
            kind: vertical,
            stops: vec![stop(0.0, 0x4682B4), stop(1.0, 0x000080)],
        },
        Gradient {
            id: GradientId::Sand,
            kind: GradientKind::Linear {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 0.0,
            },
            stops: vec![stop(0.0, 0xF4A460), stop(0.5, 0xDEB887), stop(1.0, 0xF4A460)],
        },
    ]
}

/// Build a complete scene for `viewport`, drawing fresh random geometry from `rng`.
#[tracing::instrument(skip(config, rng))]
pub fn build_scene(
    viewport: Viewport,
    config: &SceneConfig,
    rng: &mut Rng64,
) -> SunsetResult<Scene> {
    viewport.validate()?;
    config.validate()?;

    let scene = Scene {
        viewport,
        gradients: gradients(),
        sun: sun(viewport, config),
        clouds: generate_clouds(viewport, config, rng),
        ocean: ocean(viewport),
        waves: generate_waves(viewport, config.wave_count),
        beach: beach(viewport, config),
        seagulls: generate_seagulls(viewport, config, rng),
    };
    tracing::debug!(counts = ?scene.layer_counts(), "scene generated");
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/generate.rs"]
mod tests;
