/// Convenience result type used across piglens.
pub type PiglensResult<T> = Result<T, PiglensError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Per-frame rendering never produces these: a pass that cannot run for a
/// given frame (missing landmarks, degenerate geometry, off-screen overlay)
/// skips itself and leaves the frame unchanged. Errors surface only from
/// validated construction and from asset initialization, which is fatal by
/// contract.
#[derive(thiserror::Error, Debug)]
pub enum PiglensError {
    /// Invalid user-provided data (frame buffers, levels, control points).
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or malformed sticker/mask assets or correspondence tables.
    #[error("asset error: {0}")]
    Asset(String),

    /// Degenerate geometric input detected during setup (colinear control
    /// points, zero-area triangulation).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PiglensError {
    /// Build a [`PiglensError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PiglensError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`PiglensError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}
