//! Typed relationships between concepts.

use serde::{Deserialize, Serialize};

/// The closed set of relationship types in the graph.
///
/// Types not in this set deserialize to [`RelationType::Other`]; such edges
/// are carried through the indices but never matched by type-filtered
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// A requires B to be understood.
    Requires,
    /// A (an algorithm) solves B (a problem class).
    Solves,
    /// A contains B as a sub-concept.
    Contains,
    /// A generalizes B.
    Generalizes,
    /// A and B are interchangeable approaches. Stored as two directed edges;
    /// the loader guarantees the reverse edge exists.
    AlternativeTo,
    /// A is implemented by the referenced source file.
    ImplementedIn,
    /// Unrecognized type in the data, tolerated but never matched.
    #[serde(other)]
    Other,
}

/// Annotation carried by some edges, currently a one-line summary of the
/// implementing source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
}

/// A relationship target as it appears inside a concept record: either a
/// bare ID string or an annotated `{id, meta}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Annotated {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<TargetMeta>,
    },
    Plain(String),
}

impl Target {
    /// The target identifier, regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            Target::Annotated { id, .. } => id,
            Target::Plain(id) => id,
        }
    }

    /// The `brief` annotation, when present.
    pub fn brief(&self) -> Option<&str> {
        match self {
            Target::Annotated {
                meta: Some(meta), ..
            } => meta.brief.as_deref(),
            _ => None,
        }
    }
}

/// A directed, typed edge in the flat relationship list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Source concept ID.
    pub from: String,
    /// Target concept ID, or a file reference.
    pub to: String,
    /// Relationship type.
    #[serde(rename = "type")]
    pub kind: RelationType,
    /// Optional edge annotation (used by `implemented_in` edges).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<TargetMeta>,
}

impl Relationship {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: RelationType) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            meta: None,
        }
    }

    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.meta = Some(TargetMeta {
            brief: Some(brief.into()),
        });
        self
    }

    /// Whether the edge points at a source file rather than a concept.
    pub fn is_file_reference(&self) -> bool {
        is_file_reference(&self.to)
    }

    /// The target rendered as a [`Target`] for per-concept relationship views.
    pub fn target(&self) -> Target {
        match &self.meta {
            Some(meta) => Target::Annotated {
                id: self.to.clone(),
                meta: Some(meta.clone()),
            },
            None => Target::Plain(self.to.clone()),
        }
    }
}

/// A target containing a path separator names a source file, not a concept.
pub fn is_file_reference(target: &str) -> bool {
    target.contains('/')
}
