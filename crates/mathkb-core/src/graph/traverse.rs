//! Graph traversal: shortest-path discovery and prerequisite trees.

use std::collections::{HashSet, VecDeque};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::error::GraphError;
use super::models::{Category, RelationType};
use super::KnowledgeGraph;

/// One hop in a discovered path, annotated with display names on both ends.
#[derive(Debug, Clone, Serialize)]
pub struct PathEdge {
    pub from: String,
    pub from_name: String,
    pub relationship: RelationType,
    pub to: String,
    pub to_name: String,
}

/// Outcome of path finding. Not finding a path within the depth bound is an
/// ordinary result, distinct from unknown endpoints (which are errors).
#[derive(Debug, Clone)]
pub enum PathResult {
    Found { path: Vec<PathEdge>, length: usize },
    NotFound { message: String },
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }
}

// Serialized as `{found: true, path, length}` or `{found: false, message}`,
// the shape presentation layers pass through verbatim.
impl Serialize for PathResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathResult::Found { path, length } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("found", &true)?;
                map.serialize_entry("path", path)?;
                map.serialize_entry("length", length)?;
                map.end()
            }
            PathResult::NotFound { message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("found", &false)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}

/// A recursive prerequisite tree rooted at one concept.
#[derive(Debug, Clone, Serialize)]
pub struct PrerequisiteTree {
    pub concept: String,
    pub name: String,
    pub depth: usize,
    /// Omitted entirely when the concept has no qualifying prerequisites;
    /// the same convention applies at every level of the tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<PrerequisiteEntry>>,
}

/// One node inside a prerequisite tree.
#[derive(Debug, Clone, Serialize)]
pub struct PrerequisiteEntry {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<PrerequisiteEntry>>,
}

impl KnowledgeGraph {
    /// Find the shortest relationship chain from `from_id` to `to_id`.
    ///
    /// Breadth-first search over the outgoing index, so the returned path is
    /// shortest in edge count. Both endpoints must be exact concept IDs; no
    /// fuzzy resolution is applied. File-reference targets are skipped, and
    /// a node is only expanded while its path is shorter than `max_depth`.
    ///
    /// Among equal-length paths the one reached first in edge insertion
    /// order wins; that tie-break is implementation-defined, not a canonical
    /// choice.
    pub fn find_path(
        &self,
        from_id: &str,
        to_id: &str,
        max_depth: usize,
    ) -> Result<PathResult, GraphError> {
        if !self.concepts().contains(from_id) {
            return Err(GraphError::SourceNotFound(from_id.to_string()));
        }
        if !self.concepts().contains(to_id) {
            return Err(GraphError::TargetNotFound(to_id.to_string()));
        }

        let mut queue: VecDeque<(String, Vec<PathEdge>)> = VecDeque::new();
        queue.push_back((from_id.to_string(), Vec::new()));
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(from_id.to_string());

        while let Some((current, path)) = queue.pop_front() {
            if path.len() >= max_depth {
                continue;
            }

            for edge in self.relationships().outgoing(&current) {
                // Pathfinding only moves between concepts.
                if edge.is_file_reference() {
                    continue;
                }

                let mut new_path = path.clone();
                new_path.push(PathEdge {
                    from: current.clone(),
                    from_name: self.concepts().display_name(&current),
                    relationship: edge.kind,
                    to: edge.to.clone(),
                    to_name: self.concepts().display_name(&edge.to),
                });

                if edge.to == to_id {
                    let length = new_path.len();
                    debug!(from = from_id, to = to_id, length, "path found");
                    return Ok(PathResult::Found {
                        path: new_path,
                        length,
                    });
                }

                if !visited.contains(&edge.to) && self.concepts().contains(&edge.to) {
                    visited.insert(edge.to.clone());
                    queue.push_back((edge.to.clone(), new_path));
                }
            }
        }

        Ok(PathResult::NotFound {
            message: format!(
                "No path found from {from_id} to {to_id} within {max_depth} hops"
            ),
        })
    }

    /// Recursively gather the `requires` tree for a concept.
    ///
    /// Depth-first along the derived `requires` view. Each branch carries its
    /// own copy of the visited set, so a concept may appear in sibling
    /// branches but never twice on one root-to-leaf path. Expansion stops
    /// when the recursion depth exceeds `depth`.
    pub fn prerequisites_for(
        &self,
        concept_id: &str,
        depth: usize,
    ) -> Result<PrerequisiteTree, GraphError> {
        let concept = self
            .concepts()
            .get(concept_id)
            .ok_or_else(|| GraphError::ConceptNotFound(concept_id.to_string()))?;

        Ok(PrerequisiteTree {
            concept: concept.id.clone(),
            name: concept.name.clone(),
            depth,
            requires: self.gather_prerequisites(concept_id, 0, depth, &HashSet::new()),
        })
    }

    fn gather_prerequisites(
        &self,
        concept_id: &str,
        current_depth: usize,
        max_depth: usize,
        visited: &HashSet<String>,
    ) -> Option<Vec<PrerequisiteEntry>> {
        if current_depth > max_depth {
            return None;
        }

        let mut visited = visited.clone();
        visited.insert(concept_id.to_string());

        let mut entries = Vec::new();
        for edge in self
            .relationships()
            .targets_of(concept_id, RelationType::Requires)
        {
            if edge.is_file_reference() {
                continue;
            }
            // Cycle guard: a concept appears at most once on any
            // root-to-leaf branch.
            if visited.contains(&edge.to) {
                continue;
            }

            let (name, category) = match self.concepts().get(&edge.to) {
                Some(target) => (target.name.clone(), target.category),
                None => (edge.to.clone(), Category::Unknown),
            };

            entries.push(PrerequisiteEntry {
                id: edge.to.clone(),
                name,
                category,
                requires: self.gather_prerequisites(
                    &edge.to,
                    current_depth + 1,
                    max_depth,
                    &visited,
                ),
            });
        }

        if entries.is_empty() {
            None
        } else {
            Some(entries)
        }
    }
}
