//! SVG emitters.
//!
//! Two flavors share the same defs and element vocabulary:
//!
//! - [`render_animated_svg`] writes the scene once and hands continuous motion to SMIL
//!   (`<animateTransform>`), so any SVG user agent animates it with no further code.
//! - [`render_frame_svg`] writes a static snapshot of a [`FrameGraph`] with every motion
//!   already resolved; this is what the rasterizer consumes.

use std::fmt::Write as _;

use crate::{
    animation::motion::{Motion, Repeat},
    eval::evaluator::{FrameGraph, Primitive},
    foundation::core::{Affine, BezPath, Color, Viewport, fmt_num},
    foundation::error::{SunsetError, SunsetResult},
    scene::model::{Cloud, Gradient, GradientId, GradientKind, Layer, Paint, Puff, Scene, Seagull},
};

const DIGITS: usize = 2;

fn n(v: f64) -> String {
    fmt_num(v, DIGITS)
}

/// Serialize a path as a compact SVG `d` attribute.
pub fn path_data(path: &BezPath) -> String {
    use kurbo::PathEl;

    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        match *el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{},{}", n(p.x), n(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{},{}", n(p.x), n(p.y));
            }
            PathEl::QuadTo(c, p) => {
                let _ = write!(d, "Q{},{} {},{}", n(c.x), n(c.y), n(p.x), n(p.y));
            }
            PathEl::CurveTo(c1, c2, p) => {
                let _ = write!(
                    d,
                    "C{},{} {},{} {},{}",
                    n(c1.x),
                    n(c1.y),
                    n(c2.x),
                    n(c2.y),
                    n(p.x),
                    n(p.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn fill_attrs(paint: Paint) -> String {
    match paint {
        Paint::Solid(c) => solid_fill(c),
        Paint::Gradient(id) => format!(r#"fill="url(#{})""#, id.svg_id()),
    }
}

fn solid_fill(c: Color) -> String {
    if c.alpha >= 1.0 {
        format!(r#"fill="{}""#, c.to_hex())
    } else {
        format!(
            r#"fill="{}" fill-opacity="{}""#,
            c.to_hex(),
            fmt_num(c.alpha, 3)
        )
    }
}

fn write_open(out: &mut String, vp: Viewport) {
    let (w, h) = (vp.width, vp.height);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="none">"#
    );
}

fn write_defs(out: &mut String, gradients: &[Gradient]) {
    out.push_str("<defs>\n");
    for g in gradients {
        let (tag, geom) = match g.kind {
            GradientKind::Linear { x1, y1, x2, y2 } => (
                "linearGradient",
                format!(
                    r#"x1="{}" y1="{}" x2="{}" y2="{}""#,
                    n(x1),
                    n(y1),
                    n(x2),
                    n(y2)
                ),
            ),
            GradientKind::Radial { cx, cy, r } => (
                "radialGradient",
                format!(
                    r#"cx="{}" cy="{}" r="{}" fx="{}" fy="{}""#,
                    n(cx),
                    n(cy),
                    n(r),
                    n(cx),
                    n(cy)
                ),
            ),
        };
        let _ = writeln!(out, r#"<{tag} id="{}" {geom}>"#, g.id.svg_id());
        for s in &g.stops {
            let _ = write!(
                out,
                r#"<stop offset="{}" stop-color="{}""#,
                n(s.offset),
                s.color.to_hex()
            );
            if s.color.alpha < 1.0 {
                let _ = write!(out, r#" stop-opacity="{}""#, fmt_num(s.color.alpha, 3));
            }
            out.push_str("/>\n");
        }
        let _ = writeln!(out, "</{tag}>");
    }
    out.push_str("</defs>\n");
}

fn primitive_element(p: &Primitive, fill: &str) -> String {
    match p {
        Primitive::Rect(r) => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {fill}/>"#,
            n(r.x0),
            n(r.y0),
            n(r.width()),
            n(r.height())
        ),
        Primitive::Circle { center, radius } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {fill}/>"#,
            n(center.x),
            n(center.y),
            n(*radius)
        ),
        Primitive::Ellipse(Puff { center, rx, ry }) => format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {fill}/>"#,
            n(center.x),
            n(center.y),
            n(*rx),
            n(*ry)
        ),
        Primitive::Path(path) => format!(r#"<path d="{}" {fill}/>"#, path_data(path)),
    }
}

fn matrix(t: Affine) -> String {
    let [a, b, c, d, e, f] = t.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(a, 5),
        fmt_num(b, 5),
        fmt_num(c, 5),
        fmt_num(d, 5),
        n(e),
        n(f)
    )
}

/// Static SVG snapshot of an evaluated frame.
pub fn render_frame_svg(graph: &FrameGraph) -> String {
    let mut out = String::new();
    write_open(&mut out, graph.viewport);
    write_defs(&mut out, &graph.gradients);
    for node in &graph.nodes {
        let fill = fill_attrs(node.paint);
        let _ = write!(
            out,
            r#"<g id="{}" class="{}""#,
            node.id,
            node.layer.name()
        );
        if node.transform != Affine::IDENTITY {
            let _ = write!(out, r#" transform="{}""#, matrix(node.transform));
        }
        out.push('>');
        for p in &node.primitives {
            out.push_str(&primitive_element(p, &fill));
        }
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

/// SMIL attributes (`values`, timing, easing, looping) for a motion.
fn smil_timing(m: &Motion, value: impl Fn(f64) -> String) -> String {
    let values = m
        .keys
        .iter()
        .map(|&k| value(k))
        .collect::<Vec<_>>()
        .join(";");
    let mut s = format!(r#"values="{values}" dur="{}s""#, n(m.duration_secs));
    if m.delay_secs > 0.0 {
        let _ = write!(s, r#" begin="{}s""#, n(m.delay_secs));
    }
    match m.repeat {
        Repeat::Forever => s.push_str(r#" repeatCount="indefinite""#),
        Repeat::Once => s.push_str(r#" fill="freeze""#),
    }
    let segments = m.keys.len().saturating_sub(1);
    if segments > 0 {
        let times = (0..=segments)
            .map(|i| fmt_num(i as f64 / segments as f64, 4))
            .collect::<Vec<_>>()
            .join(";");
        let _ = write!(s, r#" keyTimes="{times}""#);
        match m.ease.key_spline() {
            Some(spline) => {
                let splines = vec![spline; segments].join(";");
                let _ = write!(s, r#" calcMode="spline" keySplines="{splines}""#);
            }
            None => s.push_str(r#" calcMode="linear""#),
        }
    }
    s
}

fn translate_x(m: &Motion) -> String {
    smil_timing(m, |k| format!("{} 0", n(k)))
}

/// First key of a validated motion; the SVG's static transform before SMIL takes over.
fn start_key(m: &Motion) -> SunsetResult<f64> {
    m.validate()?;
    m.keys
        .first()
        .copied()
        .ok_or_else(|| SunsetError::animation("motion must have at least one key"))
}

fn animate_transform(kind: &str, timing: String) -> String {
    format!(r#"<animateTransform attributeName="transform" type="{kind}" {timing}/>"#)
}

/// Full animated SVG document for a scene.
///
/// Fails with [`SunsetError::Animation`] when any motion in `scene` is malformed.
#[tracing::instrument(skip(scene), fields(viewport = ?scene.viewport))]
pub fn render_animated_svg(scene: &Scene) -> SunsetResult<String> {
    let vp = scene.viewport;
    let mut out = String::new();
    write_open(&mut out, vp);
    write_defs(&mut out, &scene.gradients);

    let sky = fill_attrs(Paint::Gradient(GradientId::Sky));
    let _ = writeln!(
        out,
        r#"<g id="background" class="background">{}</g>"#,
        primitive_element(&Primitive::Rect(vp.rect()), &sky)
    );

    // Sun: scale about the center by drawing at the origin inside a translated group.
    let sun = &scene.sun;
    sun.pulse.validate()?;
    let _ = writeln!(
        out,
        r#"<g id="sun" class="sun" transform="translate({} {})"><circle cx="0" cy="0" r="{}" {}>{}</circle></g>"#,
        n(sun.center.x),
        n(sun.center.y),
        n(sun.radius),
        fill_attrs(Paint::Gradient(GradientId::Sunset)),
        animate_transform("scale", smil_timing(&sun.pulse, n))
    );

    let cloud_fill = solid_fill(Cloud::FILL);
    for cloud in &scene.clouds {
        let _ = write!(
            out,
            r#"<g id="{}-{}" class="{}" transform="translate({} 0)">"#,
            Layer::Clouds.name(),
            cloud.id,
            Layer::Clouds.name(),
            n(start_key(&cloud.drift)?)
        );
        for puff in cloud.puffs() {
            out.push_str(&primitive_element(&Primitive::Ellipse(puff), &cloud_fill));
        }
        let _ = writeln!(
            out,
            "{}</g>",
            animate_transform("translate", translate_x(&cloud.drift))
        );
    }

    let ocean = fill_attrs(Paint::Gradient(GradientId::Ocean));
    let _ = writeln!(
        out,
        r#"<g id="ocean" class="ocean">{}</g>"#,
        primitive_element(&Primitive::Rect(scene.ocean.rect), &ocean)
    );

    for wave in &scene.waves {
        let _ = writeln!(
            out,
            r#"<path id="{}-{}" class="{}" d="{}" {} transform="translate({} 0)">{}</path>"#,
            Layer::Waves.name(),
            wave.id,
            Layer::Waves.name(),
            path_data(&wave.path),
            solid_fill(wave.color),
            n(start_key(&wave.drift)?),
            animate_transform("translate", translate_x(&wave.drift))
        );
    }

    let beach = &scene.beach;
    let _ = writeln!(
        out,
        r#"<path id="beach" class="beach" d="{}" {} transform="translate(0 {})">{}</path>"#,
        path_data(&beach.path),
        fill_attrs(Paint::Gradient(GradientId::Sand)),
        n(start_key(&beach.rise)?),
        animate_transform(
            "translate",
            smil_timing(&beach.rise, |k| format!("0 {}", n(k)))
        )
    );

    let glyph = path_data(&Seagull::glyph());
    let gull_fill = solid_fill(Seagull::FILL);
    for gull in &scene.seagulls {
        let _ = writeln!(
            out,
            r#"<g class="{cls}-row" transform="translate(0 {})"><g id="{cls}-{}" class="{cls}" transform="translate({} 0)"><path d="{glyph}" {gull_fill}/>{}</g></g>"#,
            n(gull.start_y),
            gull.id,
            n(start_key(&gull.flight)?),
            animate_transform("translate", translate_x(&gull.flight)),
            cls = Layer::Seagulls.name(),
        );
    }

    out.push_str("</svg>\n");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
