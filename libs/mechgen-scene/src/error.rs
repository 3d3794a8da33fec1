//! # Scene Errors
//!
//! Failures raised by the host collaborators and the UI surface.
//!
//! ## Error Policy
//!
//! - Host failures propagate to the caller unchanged, nothing is retried
//! - A regeneration that fails halfway leaves whatever it already created
//! - Missing tracked gear on update is not an error

use mechgen_mesh::{MeshError, ParameterError};
use thiserror::Error;

use crate::host::{ModifierRef, ObjectHandle};

/// Errors that can occur while driving the host scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The handle does not name a live object.
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectHandle),

    /// The reference does not name an attached modifier.
    #[error("Unknown modifier: {0}")]
    UnknownModifier(ModifierRef),

    /// The primitive constructor refused its inputs.
    #[error("Primitive construction failed: {0}")]
    Primitive(#[from] MeshError),

    /// A parameter edit was rejected.
    #[error("Invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    /// No widget is declared under this key.
    #[error("Unknown parameter '{key}'")]
    UnknownParameter { key: String },

    /// The value does not match the widget kind.
    #[error("Parameter '{key}' expects {expected}, got {found}")]
    ParameterKind {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Edits and actions need a registered tool.
    #[error("Tool '{0}' is not registered")]
    ToolNotRegistered(&'static str),
}

impl SceneError {
    /// Creates an unknown parameter error.
    pub fn unknown_parameter(key: impl Into<String>) -> Self {
        Self::UnknownParameter { key: key.into() }
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SceneError::UnknownObject(ObjectHandle::new(7));
        assert_eq!(err.to_string(), "Unknown object: object #7");

        let err = SceneError::ParameterKind {
            key: "teeth".into(),
            expected: "int",
            found: "bool",
        };
        assert_eq!(err.to_string(), "Parameter 'teeth' expects int, got bool");
    }

    #[test]
    fn test_parameter_error_converts() {
        let err: SceneError = ParameterError::NonPositive {
            name: "rim_radius",
            value: 0.0,
        }
        .into();
        assert!(matches!(err, SceneError::Parameter(_)));
    }
}
