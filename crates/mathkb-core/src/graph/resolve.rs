//! Fuzzy resolution of user-supplied strings to concepts.
//!
//! One resolver serves every query entry point so that the same input always
//! resolves to the same concept. Callers pick a [`MatchPolicy`] instead of
//! duplicating partial copies of the matching logic.

use tracing::debug;

use super::error::GraphError;
use super::models::{Category, Concept};
use super::KnowledgeGraph;

/// Which matching steps a resolution attempt may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Exact ID, then case-insensitive ID substring, then case-insensitive
    /// alias equality.
    Full,
    /// Exact ID, then case-insensitive ID substring. Aliases are not
    /// consulted.
    IdSubstring,
}

impl KnowledgeGraph {
    /// Resolve a query string to a concept.
    ///
    /// Matching steps run in priority order and the first match wins:
    /// 1. Exact equality against a concept ID.
    /// 2. Case-insensitive substring match against concept IDs, in load
    ///    order. The result is the first match and is not guaranteed unique.
    /// 3. (Under [`MatchPolicy::Full`]) case-insensitive exact match against
    ///    any alias.
    pub fn resolve(&self, query: &str, policy: MatchPolicy) -> Result<&Concept, GraphError> {
        if let Some(concept) = self.concepts().get(query) {
            return Ok(concept);
        }

        let needle = query.to_lowercase();
        for concept in self.concepts().iter() {
            if concept.id.to_lowercase().contains(&needle) {
                debug!(query, resolved = %concept.id, "resolved by ID substring");
                return Ok(concept);
            }
        }

        if policy == MatchPolicy::Full {
            for concept in self.concepts().iter() {
                if concept.aliases.iter().any(|a| a.to_lowercase() == needle) {
                    debug!(query, resolved = %concept.id, "resolved by alias");
                    return Ok(concept);
                }
            }
        }

        Err(GraphError::ConceptNotFound(query.to_string()))
    }

    /// Resolve a problem class name against concepts with category
    /// `problem_class` only, checking per concept: ID substring, name
    /// substring, then alias equality, breaking on the first match.
    pub(crate) fn resolve_problem_class(&self, query: &str) -> Option<&Concept> {
        let needle = query.trim().to_lowercase();
        for concept in self.concepts().iter() {
            if concept.category != Category::ProblemClass {
                continue;
            }
            if concept.id.to_lowercase().contains(&needle)
                || concept.name.to_lowercase().contains(&needle)
                || concept.aliases.iter().any(|a| a.to_lowercase() == needle)
            {
                return Some(concept);
            }
        }
        None
    }
}
