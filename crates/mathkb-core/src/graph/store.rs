//! Concept store and relationship indices.
//!
//! Both structures are built once at load time and never mutated afterwards,
//! so a [`KnowledgeGraph`](crate::graph::KnowledgeGraph) can be shared freely
//! across concurrent readers.

use std::collections::HashMap;

use super::models::{Concept, RelationType, Relationship};

/// The immutable set of concepts, preserving load order.
///
/// Load order matters: substring resolution returns the first match in the
/// order the concepts were loaded.
#[derive(Debug, Default)]
pub struct ConceptStore {
    concepts: Vec<Concept>,
    by_id: HashMap<String, usize>,
}

impl ConceptStore {
    /// Build the store from concepts in load order. On a duplicate ID the
    /// first occurrence wins.
    pub fn from_concepts(concepts: Vec<Concept>) -> Self {
        let mut by_id = HashMap::with_capacity(concepts.len());
        for (idx, concept) in concepts.iter().enumerate() {
            by_id.entry(concept.id.clone()).or_insert(idx);
        }
        Self { concepts, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Concept> {
        self.by_id.get(id).map(|&idx| &self.concepts[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterate concepts in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Display name for an ID, falling back to the ID itself for targets that
    /// are not concepts (unknown IDs, file references).
    pub fn display_name(&self, id: &str) -> String {
        self.get(id).map_or_else(|| id.to_string(), |c| c.name.clone())
    }
}

/// Outgoing and incoming views over the authoritative edge list.
///
/// Every edge appears in exactly one outgoing bucket and one incoming bucket;
/// bucket order is edge insertion order.
#[derive(Debug, Default)]
pub struct RelationshipIndex {
    edges: Vec<Relationship>,
    outgoing: HashMap<String, Vec<usize>>,
    incoming: HashMap<String, Vec<usize>>,
}

impl RelationshipIndex {
    pub fn build(edges: Vec<Relationship>) -> Self {
        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.from.clone()).or_default().push(idx);
            incoming.entry(edge.to.clone()).or_default().push(idx);
        }

        Self {
            edges,
            outgoing,
            incoming,
        }
    }

    /// The full edge list, in insertion order.
    pub fn edges(&self) -> &[Relationship] {
        &self.edges
    }

    /// All edges leaving `id`, in insertion order.
    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &Relationship> {
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.edges[idx])
    }

    /// All edges arriving at `id`, in insertion order.
    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &Relationship> {
        self.incoming
            .get(id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.edges[idx])
    }

    /// Edges of one type leaving `id`. This is the derived per-concept
    /// relationship view used by every query.
    pub fn targets_of(&self, id: &str, kind: RelationType) -> impl Iterator<Item = &Relationship> {
        self.outgoing(id).filter(move |edge| edge.kind == kind)
    }

    /// Edges of one type arriving at `id`.
    pub fn sources_of(&self, id: &str, kind: RelationType) -> impl Iterator<Item = &Relationship> {
        self.incoming(id).filter(move |edge| edge.kind == kind)
    }
}
