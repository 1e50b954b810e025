use super::*;
use std::cell::Cell;

struct Window {
    size: Cell<Option<Viewport>>,
}

impl ViewportSource for Window {
    fn measure(&self) -> Option<Viewport> {
        self.size.get()
    }
}

fn seeded() -> SceneHost {
    SceneHost::new(SceneConfig {
        seed: Some(5),
        ..SceneConfig::default()
    })
}

#[test]
fn renders_nothing_before_measurement() {
    let mut host = seeded();
    assert!(host.render().is_none());

    let window = Window {
        size: Cell::new(None),
    };
    host.mount(&window);
    assert!(host.is_mounted());
    assert!(host.render().is_none());
}

#[test]
fn renders_configured_counts_after_mount() {
    let mut host = seeded();
    host.mount(&FixedViewport(Viewport::new(800, 600).unwrap()));
    let scene = host.render().unwrap();
    assert_eq!(scene.waves.len(), 8);
    assert_eq!(scene.clouds.len(), 6);
    assert_eq!(scene.seagulls.len(), 3);
    assert_eq!(scene.viewport, Viewport::new(800, 600).unwrap());
}

#[test]
fn resize_updates_subsequent_geometry() {
    let mut host = seeded();
    host.mount(&FixedViewport(Viewport::new(800, 600).unwrap()));

    assert!(host.on_resize(Viewport::new(1920, 1080).unwrap()));
    assert_eq!(host.viewport(), Some(Viewport::new(1920, 1080).unwrap()));
    assert!(!host.on_resize(Viewport::new(1920, 1080).unwrap()));

    let scene = host.render().unwrap();
    assert_eq!(scene.viewport.width, 1920);
    assert_eq!(scene.ocean.rect.x1, 1920.0);
    assert_eq!(scene.waves[0].drift.keys[0], -960.0);
}

#[test]
fn resize_after_unmount_is_ignored() {
    let mut host = seeded();
    host.mount(&FixedViewport(Viewport::new(800, 600).unwrap()));
    host.unmount();
    assert!(!host.is_mounted());
    assert!(!host.on_resize(Viewport::new(100, 100).unwrap()));
    assert_eq!(host.viewport(), Some(Viewport::new(800, 600).unwrap()));
}

#[test]
fn resize_before_mount_is_ignored() {
    let mut host = seeded();
    assert!(!host.on_resize(Viewport::new(100, 100).unwrap()));
    assert!(host.render().is_none());
}

#[test]
fn empty_measurement_counts_as_unmeasured() {
    let mut host = seeded();
    let window = Window {
        size: Cell::new(Some(Viewport {
            width: 0,
            height: 0,
        })),
    };
    host.mount(&window);
    assert!(host.viewport().is_none());
    assert!(host.render().is_none());
    assert!(!host.on_resize(Viewport {
        width: 0,
        height: 10
    }));
}

#[test]
fn each_render_pass_draws_fresh_clouds() {
    let mut host = seeded();
    host.mount(&FixedViewport(Viewport::new(800, 600).unwrap()));
    let a = host.render().unwrap();
    let b = host.render().unwrap();
    assert_ne!(a.clouds[0].center, b.clouds[0].center);
    assert_eq!(a.waves[2].path, b.waves[2].path);
}
