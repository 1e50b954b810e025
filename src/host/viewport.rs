use crate::{
    foundation::core::Viewport,
    foundation::rng::Rng64,
    scene::config::SceneConfig,
    scene::generate::build_scene,
    scene::model::Scene,
};

/// Something that can report the current host viewport (a window, a canvas, a terminal...).
pub trait ViewportSource {
    /// Current inner size, or `None` while the host has no layout yet.
    fn measure(&self) -> Option<Viewport>;
}

/// A source that always reports the same size; used for headless rendering.
#[derive(Clone, Copy, Debug)]
pub struct FixedViewport(pub Viewport);

impl ViewportSource for FixedViewport {
    fn measure(&self) -> Option<Viewport> {
        Some(self.0)
    }
}

/// Mounts the scene into a host and keeps its viewport measurement current.
///
/// The host renders nothing until a measurement exists. Once mounted, resize notifications
/// replace the measurement; after [`SceneHost::unmount`] they are ignored. Each call to
/// [`SceneHost::render`] generates a brand-new scene from the latest measurement.
#[derive(Debug)]
pub struct SceneHost {
    config: SceneConfig,
    rng: Rng64,
    viewport: Option<Viewport>,
    listening: bool,
}

impl SceneHost {
    /// A host that has not been mounted yet.
    pub fn new(config: SceneConfig) -> Self {
        let rng = Rng64::from_seed_or_clock(config.seed);
        Self {
            config,
            rng,
            viewport: None,
            listening: false,
        }
    }

    /// Attach the resize listener and take the initial measurement.
    pub fn mount(&mut self, source: &dyn ViewportSource) {
        self.listening = true;
        self.viewport = source.measure().filter(|vp| vp.validate().is_ok());
        tracing::debug!(viewport = ?self.viewport, "scene host mounted");
    }

    /// Resize notification. Returns whether the stored measurement changed.
    pub fn on_resize(&mut self, viewport: Viewport) -> bool {
        if !self.listening {
            tracing::debug!(?viewport, "resize ignored: host not mounted");
            return false;
        }
        if viewport.validate().is_err() {
            tracing::warn!(?viewport, "resize ignored: empty viewport");
            return false;
        }
        if self.viewport == Some(viewport) {
            return false;
        }
        tracing::debug!(from = ?self.viewport, to = ?viewport, "viewport resized");
        self.viewport = Some(viewport);
        true
    }

    /// Detach the resize listener. The last measurement is kept.
    pub fn unmount(&mut self) {
        self.listening = false;
        tracing::debug!("scene host unmounted");
    }

    /// Whether the resize listener is attached.
    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    /// Latest measurement, if any.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Render pass: `None` before the first measurement, else a freshly generated scene.
    pub fn render(&mut self) -> Option<Scene> {
        let viewport = self.viewport?;
        match build_scene(viewport, &self.config, &mut self.rng) {
            Ok(scene) => Some(scene),
            Err(e) => {
                tracing::warn!(error = %e, "scene generation failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/viewport.rs"]
mod tests;
