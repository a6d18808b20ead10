//! Knowledge graph error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the knowledge graph.
///
/// Resolution failures are ordinary values on the query surface, never
/// panics; "no path within the depth bound" is not an error at all and is
/// reported through [`PathResult`](crate::graph::PathResult) instead.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A concept could not be resolved by any matching step.
    #[error("Concept \"{0}\" not found")]
    ConceptNotFound(String),

    /// Path finding was given a source ID that is not a concept.
    #[error("Source concept \"{0}\" not found")]
    SourceNotFound(String),

    /// Path finding was given a target ID that is not a concept.
    #[error("Target concept \"{0}\" not found")]
    TargetNotFound(String),

    /// No concept with category `problem_class` matched the query.
    #[error("Problem class \"{0}\" not found")]
    ProblemClassNotFound(String),

    /// The guidance table has no entry for the algorithm.
    #[error("No guidance found for \"{0}\"")]
    GuidanceNotFound(String),

    /// A data file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The graph index failed to parse.
    #[error("Failed to parse graph index {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The guidance table failed to parse.
    #[error("Failed to parse guidance table {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl GraphError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}
