use super::*;
use crate::{foundation::rng::Rng64, scene::config::SceneConfig, scene::generate::build_scene};

fn scene() -> Scene {
    build_scene(
        Viewport::new(1000, 600).unwrap(),
        &SceneConfig::default(),
        &mut Rng64::new(42),
    )
    .unwrap()
}

fn node<'a>(g: &'a FrameGraph, id: &str) -> &'a ShapeNode {
    g.nodes.iter().find(|n| n.id == id).unwrap()
}

#[test]
fn frame_contains_configured_counts() {
    let g = Evaluator::eval_at(&scene(), 3.0).unwrap();
    assert_eq!(g.count(Layer::Waves), 8);
    assert_eq!(g.count(Layer::Clouds), 6);
    assert_eq!(g.count(Layer::Seagulls), 3);
    assert_eq!(g.count(Layer::Sun), 1);
    assert_eq!(g.count(Layer::Background), 1);
    assert_eq!(g.nodes.len(), 4 + 8 + 6 + 3);
}

#[test]
fn nodes_are_in_painters_order() {
    let g = Evaluator::eval_at(&scene(), 0.0).unwrap();
    assert!(g.nodes.windows(2).all(|w| w[0].layer <= w[1].layer));
    assert_eq!(g.nodes.first().unwrap().layer, Layer::Background);
    assert_eq!(g.nodes.last().unwrap().layer, Layer::Seagulls);
}

#[test]
fn waves_start_half_a_viewport_left() {
    let s = scene();
    let g = Evaluator::eval_at(&s, 0.0).unwrap();
    let t = node(&g, "wave-0").transform.translation();
    assert_eq!(t, Vec2::new(-500.0, 0.0));

    // Wave 0 loops every 10s and is halfway home at 5s.
    let g = Evaluator::eval_at(&s, 5.0).unwrap();
    let t = node(&g, "wave-0").transform.translation();
    assert!((t.x + 250.0).abs() < 1e-9);
}

#[test]
fn sun_scales_about_its_center() {
    let s = scene();
    let g = Evaluator::eval_at(&s, 4.0).unwrap();
    let sun = node(&g, "sun");
    let moved = sun.transform * s.sun.center;
    assert!((moved - s.sun.center).hypot() < 1e-9);
    let edge = sun.transform * (s.sun.center + Vec2::new(100.0, 0.0));
    assert!((edge.x - s.sun.center.x - 105.0).abs() < 1e-9);
}

#[test]
fn beach_settles_after_entrance() {
    let s = scene();
    let at0 = Evaluator::eval_at(&s, 0.0).unwrap();
    assert_eq!(node(&at0, "beach").transform.translation().y, 100.0);
    let later = Evaluator::eval_at(&s, 30.0).unwrap();
    assert_eq!(node(&later, "beach").transform.translation().y, 0.0);
}

#[test]
fn seagulls_wait_offscreen_during_delay() {
    let s = scene();
    let g = Evaluator::eval_at(&s, 1.0).unwrap();
    for gull in &s.seagulls {
        let t = node(&g, &format!("seagull-{}", gull.id)).transform.translation();
        assert_eq!(t.x, -50.0);
        assert_eq!(t.y, gull.start_y);
    }
}

#[test]
fn clouds_carry_three_puffs() {
    let g = Evaluator::eval_at(&scene(), 0.0).unwrap();
    for n in g.nodes.iter().filter(|n| n.layer == Layer::Clouds) {
        assert_eq!(n.primitives.len(), 3);
        assert_eq!(n.paint, Paint::Solid(Cloud::FILL));
    }
}

#[test]
fn invalid_time_is_rejected() {
    let s = scene();
    assert!(Evaluator::eval_at(&s, -1.0).is_err());
    assert!(Evaluator::eval_at(&s, f64::NAN).is_err());
    assert!(Evaluator::eval_at(&s, f64::INFINITY).is_err());
}
