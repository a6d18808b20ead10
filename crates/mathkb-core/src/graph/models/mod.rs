//! Data models for the knowledge graph.

mod concept;
mod guidance;
mod relationship;

pub use concept::{Category, Concept};
pub use guidance::{AlgorithmGuidance, CharacteristicRule, GuidanceTable};
pub use relationship::{is_file_reference, RelationType, Relationship, Target, TargetMeta};
