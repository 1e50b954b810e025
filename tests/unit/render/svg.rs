use super::*;
use crate::{
    eval::evaluator::Evaluator, foundation::rng::Rng64, scene::config::SceneConfig,
    scene::generate::build_scene,
};

fn scene() -> Scene {
    build_scene(
        Viewport::new(640, 480).unwrap(),
        &SceneConfig::default(),
        &mut Rng64::new(7),
    )
    .unwrap()
}

fn count(doc: &str, needle: &str) -> usize {
    doc.matches(needle).count()
}

#[test]
fn path_data_is_compact() {
    let mut p = BezPath::new();
    p.move_to((0.0, 480.0));
    p.curve_to((160.0, 460.0), (320.0, 500.0), (640.0, 480.0));
    p.quad_to((1.005, 2.0), (3.5, 4.25));
    p.close_path();
    assert_eq!(
        path_data(&p),
        "M0,480 C160,460 320,500 640,480 Q1,2 3.5,4.25 Z"
    );
}

#[test]
fn animated_svg_holds_every_layer() {
    let doc = render_animated_svg(&scene()).unwrap();
    assert!(doc.starts_with("<svg "));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert_eq!(count(&doc, r#"class="wave""#), 8);
    assert_eq!(count(&doc, r#"class="cloud""#), 6);
    assert_eq!(count(&doc, r#"class="seagull""#), 3);
    assert_eq!(count(&doc, r#"class="sun""#), 1);
    assert_eq!(count(&doc, r#"class="beach""#), 1);
    assert_eq!(count(&doc, "<ellipse "), 18);
    for id in ["skyGradient", "sunsetGradient", "oceanGradient", "sandGradient"] {
        assert!(doc.contains(&format!(r#"id="{id}""#)), "{id}");
    }
}

#[test]
fn animated_svg_loops_everything_but_the_beach() {
    let doc = render_animated_svg(&scene()).unwrap();
    // sun + clouds + waves + seagulls
    assert_eq!(count(&doc, r#"repeatCount="indefinite""#), 1 + 6 + 8 + 3);
    assert_eq!(count(&doc, r#"fill="freeze""#), 1);
    assert!(doc.contains(r#"values="1;1.05;1" dur="8s" repeatCount="indefinite""#));
    assert!(doc.contains(r#"values="-320 0;0 0" dur="10s""#));
    assert!(doc.contains(r#"begin="6s""#));
}

#[test]
fn wave_colors_use_fill_opacity() {
    let doc = render_animated_svg(&scene()).unwrap();
    assert!(doc.contains(r##"fill="#0099ff" fill-opacity="0.05""##));
    assert!(doc.contains(r##"fill="#0099ff" fill-opacity="0.26""##));
}

#[test]
fn frame_svg_resolves_transforms() {
    let s = scene();
    let g = Evaluator::eval_at(&s, 0.0).unwrap();
    let doc = render_frame_svg(&g);
    assert_eq!(count(&doc, r#"class="wave""#), 8);
    assert_eq!(count(&doc, r#"class="cloud""#), 6);
    assert_eq!(count(&doc, r#"class="seagull""#), 3);
    assert!(!doc.contains("animateTransform"));
    assert!(doc.contains(r#"<g id="wave-0" class="wave" transform="matrix(1 0 0 1 -320 0)">"#));
    assert!(doc.contains(r#"<g id="background" class="background">"#));
}

#[test]
fn both_documents_parse() {
    let s = scene();
    let opts = usvg::Options::default();
    let animated = render_animated_svg(&s).unwrap();
    let tree = usvg::Tree::from_str(&animated, &opts).unwrap();
    assert_eq!(tree.size().width(), 640.0);

    let frame = render_frame_svg(&Evaluator::eval_at(&s, 12.5).unwrap());
    let tree = usvg::Tree::from_str(&frame, &opts).unwrap();
    assert_eq!(tree.size().height(), 480.0);
}

#[test]
fn animated_svg_rejects_motion_without_keys() {
    let json = serde_json::to_string(&scene()).unwrap();
    let mut broken: Scene = serde_json::from_str(&json).unwrap();
    broken.waves[0].drift.keys.clear();

    let err = render_animated_svg(&broken).unwrap_err();
    assert!(matches!(err, SunsetError::Animation(_)));
    assert!(matches!(
        Evaluator::eval_at(&broken, 1.0).unwrap_err(),
        SunsetError::Animation(_)
    ));
}

#[test]
fn animated_svg_rejects_bad_sun_pulse() {
    let mut broken = scene();
    broken.sun.pulse.duration_secs = 0.0;
    assert!(matches!(
        render_animated_svg(&broken).unwrap_err(),
        SunsetError::Animation(_)
    ));
}
