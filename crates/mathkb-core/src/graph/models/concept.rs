//! Concept records: the nodes of the knowledge graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::relationship::{RelationType, Target};

/// The closed set of concept categories.
///
/// A missing or unrecognized category in the data deserializes to
/// [`Category::Unknown`]; the engine tolerates it but does not repair it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProblemClass,
    Algorithm,
    Optimality,
    Structure,
    Technique,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A node in the knowledge graph: a mathematical or algorithmic idea.
///
/// Concepts are loaded once and never mutated afterwards. The embedded
/// `relationships` map is only consumed by the loader; every query reads the
/// authoritative edge list via the relationship index instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier, the graph key.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Concept category.
    #[serde(default)]
    pub category: Category,
    /// Alternate names accepted by fuzzy resolution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Free-text definition.
    #[serde(default)]
    pub definition: String,
    /// Free-text intuition.
    #[serde(default)]
    pub intuition: String,
    /// Key equations in display form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_equations: Vec<String>,
    /// Embedded relationship map, per relation type, as produced by the
    /// graph build step.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<RelationType, Vec<Target>>,
}

impl Concept {
    /// Create a minimal concept, mainly for tests and in-memory construction.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            aliases: Vec::new(),
            definition: String::new(),
            intuition: String::new(),
            key_equations: Vec::new(),
            relationships: BTreeMap::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_intuition(mut self, intuition: impl Into<String>) -> Self {
        self.intuition = intuition.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_known_values() {
        let cat: Category = serde_json::from_str(r#""problem_class""#).unwrap();
        assert_eq!(cat, Category::ProblemClass);
        let cat: Category = serde_json::from_str(r#""algorithm""#).unwrap();
        assert_eq!(cat, Category::Algorithm);
    }

    #[test]
    fn invalid_category_is_tolerated_as_unknown() {
        let cat: Category = serde_json::from_str(r#""folklore""#).unwrap();
        assert_eq!(cat, Category::Unknown);
    }

    #[test]
    fn missing_optional_fields_default() {
        let concept: Concept = serde_json::from_str(
            r#"{"id": "duality", "name": "Duality"}"#,
        )
        .unwrap();
        assert_eq!(concept.category, Category::Unknown);
        assert!(concept.aliases.is_empty());
        assert!(concept.definition.is_empty());
        assert!(concept.relationships.is_empty());
    }
}
