/// Convenience result type used across the layout compiler.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by engine and compiler APIs.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Malformed or inconsistent scene spec data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Degenerate geometry that cannot be fitted (zero or non-finite sizes).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Font family lookups that must resolve to a registered font.
    #[error("font error: {0}")]
    Font(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`SceneError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
