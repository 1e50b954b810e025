/// Result alias used throughout the crate.
pub type SunsetResult<T> = Result<T, SunsetError>;

#[derive(thiserror::Error, Debug)]
/// Error taxonomy for scene generation, evaluation and rendering.
pub enum SunsetError {
    /// Invalid input (viewport, config, frame range, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed motion descriptor.
    #[error("animation error: {0}")]
    Animation(String),

    /// Failure while evaluating a scene at a point in time.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// SVG parsing or rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Config or scene (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SunsetError {
    /// Build a [`SunsetError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SunsetError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SunsetError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`SunsetError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SunsetError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SunsetError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
