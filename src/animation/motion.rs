use crate::{
    animation::ease::Ease,
    foundation::error::{SunsetError, SunsetResult},
};

/// Interpolation contract for animated values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// How a motion behaves once its duration has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play once and hold the last key.
    Once,
    /// Wrap back to the first key forever.
    #[default]
    Forever,
}

/// Declarative tween over evenly spaced keyframes.
///
/// A motion is the scene's unit of animation: the generator describes *what* each shape
/// does (keys, duration, easing, looping) and the evaluator or the SVG renderer decides *how*
/// to interpolate it. Keys are spread evenly over `duration_secs`; `ease` applies per segment.
/// The delay only applies before the first iteration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Motion {
    /// Keyframe values, evenly spaced in time.
    pub keys: Vec<f64>,
    /// Length of one iteration in seconds (`> 0`).
    pub duration_secs: f64,
    /// Hold time before the first iteration starts.
    #[serde(default)]
    pub delay_secs: f64,
    /// Per-segment easing.
    #[serde(default)]
    pub ease: Ease,
    /// Looping behavior.
    #[serde(default)]
    pub repeat: Repeat,
}

impl Motion {
    /// Linear, endlessly repeating tween from `from` to `to`.
    pub fn tween(from: f64, to: f64, duration_secs: f64) -> Self {
        Self::keyframes(vec![from, to], duration_secs)
    }

    /// Linear, endlessly repeating motion through `keys`.
    pub fn keyframes(keys: Vec<f64>, duration_secs: f64) -> Self {
        Self {
            keys,
            duration_secs,
            delay_secs: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Forever,
        }
    }

    /// Replace the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Hold the first key for `secs` before starting.
    pub fn with_delay(mut self, secs: f64) -> Self {
        self.delay_secs = secs;
        self
    }

    /// Play a single iteration, then hold the last key.
    pub fn once(mut self) -> Self {
        self.repeat = Repeat::Once;
        self
    }

    /// Length of one iteration in seconds.
    pub fn period_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Check static invariants.
    pub fn validate(&self) -> SunsetResult<()> {
        if self.keys.is_empty() {
            return Err(SunsetError::animation("motion must have at least one key"));
        }
        if self.keys.iter().any(|k| !k.is_finite()) {
            return Err(SunsetError::animation("motion keys must be finite"));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(SunsetError::animation("motion duration must be > 0"));
        }
        if !(self.delay_secs.is_finite() && self.delay_secs >= 0.0) {
            return Err(SunsetError::animation("motion delay must be >= 0"));
        }
        Ok(())
    }

    /// Normalized iteration progress in `[0, 1]` at scene time `t_secs`.
    pub fn progress(&self, t_secs: f64) -> f64 {
        let local = t_secs - self.delay_secs;
        if local <= 0.0 {
            return 0.0;
        }
        let p = local / self.duration_secs;
        match self.repeat {
            Repeat::Once => p.min(1.0),
            Repeat::Forever => p.fract(),
        }
    }

    /// Sample the animated value at scene time `t_secs`.
    pub fn sample(&self, t_secs: f64) -> SunsetResult<f64> {
        self.validate()?;
        if !t_secs.is_finite() {
            return Err(SunsetError::animation("sample time must be finite"));
        }

        let n = self.keys.len();
        if n == 1 {
            return Ok(self.keys[0]);
        }

        let segments = (n - 1) as f64;
        let pos = self.progress(t_secs) * segments;
        let idx = (pos.floor() as usize).min(n - 2);
        let local = pos - idx as f64;
        let te = self.ease.apply(local);
        Ok(f64::lerp(&self.keys[idx], &self.keys[idx + 1], te))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
