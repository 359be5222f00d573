//! Error types for world construction, grid access and world definition loading

use std::fmt;
use std::path::PathBuf;

use crate::spatial::blocks::BlockId;
use crate::spatial::grid::BoundingBox;

/// Main error type for all world operations
#[derive(Debug)]
pub enum WorldError {
    /// Configured block id is not part of the catalog
    ///
    /// Raised by world initialization before any generation happens.
    UnknownBlock {
        /// The id that could not be resolved
        id: BlockId,
    },

    /// Direct grid access outside the materialized bounds
    OutOfBounds {
        /// World coordinates that were accessed
        position: [i32; 2],
        /// Bounds of the grid at the time of access
        bounds: BoundingBox,
    },

    /// Rectangle with `min > max` on at least one axis
    InvalidRegion {
        /// Requested minimum corner
        min: [i32; 2],
        /// Requested maximum corner
        max: [i32; 2],
    },

    /// Block catalog cannot be built from the given definitions
    InvalidCatalog {
        /// Description of what's wrong with the definitions
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// World definition file is not valid JSON for the expected layout
    DefinitionParse {
        /// Path of the definition file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save an exported map image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBlock { id } => {
                write!(f, "Block '{id}' is not defined in the block catalog")
            }
            Self::OutOfBounds { position, bounds } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the materialized bounds {bounds}",
                    position[0], position[1]
                )
            }
            Self::InvalidRegion { min, max } => {
                write!(
                    f,
                    "Invalid region ({}, {})..({}, {}): minimum exceeds maximum",
                    min[0], min[1], max[0], max[1]
                )
            }
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid block catalog: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DefinitionParse { path, source } => {
                write!(
                    f,
                    "Failed to parse world definition '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DefinitionParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for world results
pub type Result<T> = std::result::Result<T, WorldError>;

impl From<std::io::Error> for WorldError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WorldError {
    WorldError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> WorldError {
    WorldError::InvalidCatalog {
        reason: reason.to_string(),
    }
}
