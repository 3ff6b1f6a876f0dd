use thiserror::Error;

use crate::answers::Dimension;

/// Errors surfaced by the engine and its host bindings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FusionError {
    /// An answer name that is not part of its dimension's enumeration.
    #[error("unknown {dimension} answer: {value:?}")]
    UnknownAnswer { dimension: Dimension, value: String },

    /// The host could not provide a drawing target.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The host refused to schedule an animation frame.
    #[error("frame scheduling failed: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_names_the_cause() {
        let err = FusionError::SurfaceUnavailable("2d context not supported".into());
        assert_eq!(
            err.to_string(),
            "drawing surface unavailable: 2d context not supported"
        );
    }

    #[test]
    fn test_unknown_answer_message() {
        let err = FusionError::UnknownAnswer {
            dimension: Dimension::Rhythm,
            value: "chaos".into(),
        };
        assert_eq!(err.to_string(), "unknown rhythm answer: \"chaos\"");
    }
}
