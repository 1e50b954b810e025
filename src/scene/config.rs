use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{SunsetError, SunsetResult};

/// Closed-open numeric range `[min, max)` used for random draws.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (exclusive).
    pub max: f64,
}

impl Span {
    /// Build a span.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(self, what: &str) -> SunsetResult<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(SunsetError::validation(format!("{what} must be finite")));
        }
        if self.min < 0.0 || self.min > self.max {
            return Err(SunsetError::validation(format!(
                "{what} must satisfy 0 <= min <= max, got [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Tunables for scene generation.
///
/// Every field has a default, so a config file only needs to name what it changes:
///
/// ```json
/// { "cloud_count": 10, "seed": 42 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Number of wave layers.
    pub wave_count: usize,
    /// Number of cloud clusters.
    pub cloud_count: usize,
    /// Number of seagulls.
    pub seagull_count: usize,
    /// Cloud size range in pixels.
    pub cloud_size_px: Span,
    /// Time for one cloud to cross the viewport, in seconds.
    pub cloud_drift_secs: Span,
    /// Sun radius in pixels.
    pub sun_radius_px: f64,
    /// Length of one sun pulse, in seconds.
    pub sun_pulse_secs: f64,
    /// Vertical offset the beach rises from on entrance.
    pub beach_rise_px: f64,
    /// Duration of the beach entrance, in seconds.
    pub beach_rise_secs: f64,
    /// Fixed seed for reproducible scenes; wall-clock seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wave_count: 8,
            cloud_count: 6,
            seagull_count: 3,
            cloud_size_px: Span::new(50.0, 150.0),
            cloud_drift_secs: Span::new(100.0, 200.0),
            sun_radius_px: 100.0,
            sun_pulse_secs: 8.0,
            beach_rise_px: 100.0,
            beach_rise_secs: 1.0,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Load a JSON config file and validate it.
    pub fn from_path(path: &Path) -> SunsetResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(text: &str) -> SunsetResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges and durations.
    pub fn validate(&self) -> SunsetResult<()> {
        self.cloud_size_px.validate("cloud_size_px")?;
        self.cloud_drift_secs.validate("cloud_drift_secs")?;
        if self.cloud_drift_secs.min <= 0.0 {
            return Err(SunsetError::validation("cloud_drift_secs.min must be > 0"));
        }
        for (name, v) in [
            ("sun_radius_px", self.sun_radius_px),
            ("sun_pulse_secs", self.sun_pulse_secs),
            ("beach_rise_secs", self.beach_rise_secs),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(SunsetError::validation(format!("{name} must be > 0")));
            }
        }
        if !self.beach_rise_px.is_finite() {
            return Err(SunsetError::validation("beach_rise_px must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
