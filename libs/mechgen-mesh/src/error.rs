//! # Mesh Errors
//!
//! Error types for parameter validation and mesh generation.
//!
//! Builders are pure numeric functions, so the taxonomy is narrow: parameters
//! are rejected once at construction, and primitives only refuse inputs that
//! cannot form a polygon at all.

use thiserror::Error;

/// Errors raised while validating a parameter set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A numeric parameter was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// A length that must be strictly positive was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// The tooth height would collapse or invert the root ring.
    #[error("tooth height {tooth_height} must be smaller than radius {radius}")]
    ToothHeightExceedsRadius { tooth_height: f64, radius: f64 },
}

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Parameter set rejected
    #[error("Invalid parameter: {0}")]
    Parameter(#[from] ParameterError),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
