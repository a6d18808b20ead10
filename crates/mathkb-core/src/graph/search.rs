//! Concept lookup, keyword search, and relationship-layered queries.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use super::error::GraphError;
use super::models::{Category, RelationType, Target};
use super::resolve::MatchPolicy;
use super::KnowledgeGraph;

/// A `{id, name}` reference to another concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptRef {
    pub id: String,
    pub name: String,
}

/// Full concept detail returned by [`KnowledgeGraph::explore`].
#[derive(Debug, Clone, Serialize)]
pub struct ConceptDetail {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub definition: String,
    pub intuition: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_equations: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<RelationType, Vec<Target>>,
    /// Concepts with an outgoing `requires` edge pointing here.
    pub used_by: Vec<ConceptRef>,
}

/// One keyword search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub score: u32,
    /// Definition excerpt, capped at the configured preview length.
    pub definition: String,
}

/// A concept listed by [`KnowledgeGraph::list_concepts`].
#[derive(Debug, Clone, Serialize)]
pub struct ConceptSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// Source files implementing a concept.
#[derive(Debug, Clone, Serialize)]
pub struct Implementations {
    pub concept: String,
    pub name: String,
    pub implementation_count: usize,
    pub implementations: Vec<Implementation>,
}

/// One implementing source file.
#[derive(Debug, Clone, Serialize)]
pub struct Implementation {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
}

/// Algorithms solving one problem class.
#[derive(Debug, Clone, Serialize)]
pub struct Solvers {
    pub problem_class: String,
    pub problem_name: String,
    pub solvers: Vec<SolverEntry>,
}

/// One solver, enriched with its interchangeable alternatives.
#[derive(Debug, Clone, Serialize)]
pub struct SolverEntry {
    pub id: String,
    pub name: String,
    pub intuition: String,
    pub alternatives: Vec<String>,
}

/// Identity half of a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSummary {
    pub id: String,
    pub name: String,
    pub intuition: String,
}

/// Side-by-side comparison of two algorithms.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub algorithm_1: AlgorithmSummary,
    pub algorithm_2: AlgorithmSummary,
    pub both_solve: Vec<String>,
    pub only_1_solves: Vec<String>,
    pub only_2_solves: Vec<String>,
    pub shared_requirements: Vec<String>,
    pub unique_to_1: Vec<String>,
    pub unique_to_2: Vec<String>,
    pub are_alternatives: bool,
}

impl KnowledgeGraph {
    /// Concept details plus a synthesized `used_by` list: every concept with
    /// an outgoing `requires` edge pointing at this one. Accepts fuzzy input
    /// under the full resolution policy.
    pub fn explore(&self, concept_id: &str) -> Result<ConceptDetail, GraphError> {
        let concept = self.resolve(concept_id, MatchPolicy::Full)?;

        let used_by = self
            .relationships()
            .sources_of(&concept.id, RelationType::Requires)
            .map(|edge| ConceptRef {
                id: edge.from.clone(),
                name: self.concepts().display_name(&edge.from),
            })
            .collect();

        Ok(ConceptDetail {
            id: concept.id.clone(),
            name: concept.name.clone(),
            category: concept.category,
            aliases: concept.aliases.clone(),
            definition: concept.definition.clone(),
            intuition: concept.intuition.clone(),
            key_equations: concept.key_equations.clone(),
            relationships: self.relationship_view(&concept.id),
            used_by,
        })
    }

    /// Keyword search over concept fields with fixed additive weights:
    /// ID match +3, name +3, each matching alias +2, definition +1,
    /// intuition +1. Zero-score concepts are excluded and results are
    /// sorted by descending score, load order breaking ties.
    pub fn search_concepts(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        let preview = self.limits().definition_preview;
        let mut hits = Vec::new();

        for concept in self.concepts().iter() {
            let mut score = 0u32;

            if concept.id.to_lowercase().contains(&needle) {
                score += 3;
            }
            if concept.name.to_lowercase().contains(&needle) {
                score += 3;
            }
            for alias in &concept.aliases {
                if alias.to_lowercase().contains(&needle) {
                    score += 2;
                }
            }
            if concept.definition.to_lowercase().contains(&needle) {
                score += 1;
            }
            if concept.intuition.to_lowercase().contains(&needle) {
                score += 1;
            }

            if score > 0 {
                hits.push(SearchHit {
                    id: concept.id.clone(),
                    name: concept.name.clone(),
                    category: concept.category,
                    score,
                    definition: concept.definition.chars().take(preview).collect(),
                });
            }
        }

        // Stable sort keeps load order as the secondary key.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(query, hits = hits.len(), "concept search");
        hits
    }

    /// All concepts, optionally filtered by category, sorted by display name.
    pub fn list_concepts(&self, category: Option<Category>) -> Vec<ConceptSummary> {
        let mut results: Vec<ConceptSummary> = self
            .concepts()
            .iter()
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .map(|c| ConceptSummary {
                id: c.id.clone(),
                name: c.name.clone(),
                category: c.category,
                aliases: c.aliases.clone(),
            })
            .collect();
        results.sort_by(|a, b| a.name.cmp(&b.name));
        results
    }

    /// Source files implementing a concept, from its `implemented_in` edges.
    /// Resolution uses ID matching only; aliases are not consulted here.
    pub fn implementations_of(&self, concept_id: &str) -> Result<Implementations, GraphError> {
        let concept = self.resolve(concept_id, MatchPolicy::IdSubstring)?;

        let implementations: Vec<Implementation> = self
            .relationships()
            .targets_of(&concept.id, RelationType::ImplementedIn)
            .map(|edge| Implementation {
                reference: edge.to.clone(),
                brief: edge.meta.as_ref().and_then(|m| m.brief.clone()),
            })
            .collect();

        Ok(Implementations {
            concept: concept.id.clone(),
            name: concept.name.clone(),
            implementation_count: implementations.len(),
            implementations,
        })
    }

    /// All algorithms with a `solves` edge into the given problem class.
    ///
    /// The problem class is resolved against `problem_class` concepts only;
    /// each solver entry carries the solver's own `alternative_to` targets.
    pub fn solvers_for(&self, problem_class: &str) -> Result<Solvers, GraphError> {
        let problem = self
            .resolve_problem_class(problem_class)
            .ok_or_else(|| GraphError::ProblemClassNotFound(problem_class.to_string()))?;

        let mut solvers = Vec::new();
        for edge in self.relationships().edges() {
            if edge.kind != RelationType::Solves || edge.to != problem.id {
                continue;
            }
            let Some(solver) = self.concepts().get(&edge.from) else {
                continue;
            };
            solvers.push(SolverEntry {
                id: solver.id.clone(),
                name: solver.name.clone(),
                intuition: solver.intuition.clone(),
                alternatives: self
                    .relationships()
                    .targets_of(&solver.id, RelationType::AlternativeTo)
                    .map(|alt| alt.to.clone())
                    .collect(),
            });
        }

        Ok(Solvers {
            problem_class: problem.id.clone(),
            problem_name: problem.name.clone(),
            solvers,
        })
    }

    /// Compare what two algorithms solve and require, and whether the first
    /// declares the second as an alternative. Resolution uses ID matching
    /// only.
    pub fn compare_algorithms(&self, id1: &str, id2: &str) -> Result<Comparison, GraphError> {
        let first = self.resolve(id1, MatchPolicy::IdSubstring)?;
        let second = self.resolve(id2, MatchPolicy::IdSubstring)?;

        let solves_1 = self.target_set(&first.id, RelationType::Solves);
        let solves_2 = self.target_set(&second.id, RelationType::Solves);
        let requires_1 = self.target_set(&first.id, RelationType::Requires);
        let requires_2 = self.target_set(&second.id, RelationType::Requires);

        // Directional check against the first algorithm's own edges.
        let are_alternatives = self
            .relationships()
            .targets_of(&first.id, RelationType::AlternativeTo)
            .any(|edge| edge.to == second.id);

        Ok(Comparison {
            algorithm_1: AlgorithmSummary {
                id: first.id.clone(),
                name: first.name.clone(),
                intuition: first.intuition.clone(),
            },
            algorithm_2: AlgorithmSummary {
                id: second.id.clone(),
                name: second.name.clone(),
                intuition: second.intuition.clone(),
            },
            both_solve: solves_1.intersection(&solves_2).cloned().collect(),
            only_1_solves: solves_1.difference(&solves_2).cloned().collect(),
            only_2_solves: solves_2.difference(&solves_1).cloned().collect(),
            shared_requirements: requires_1.intersection(&requires_2).cloned().collect(),
            unique_to_1: requires_1.difference(&requires_2).cloned().collect(),
            unique_to_2: requires_2.difference(&requires_1).cloned().collect(),
            are_alternatives,
        })
    }

    fn target_set(&self, id: &str, kind: RelationType) -> BTreeSet<String> {
        self.relationships()
            .targets_of(id, kind)
            .map(|edge| edge.to.clone())
            .collect()
    }
}
