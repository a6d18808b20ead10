//! Knowledge graph of optimization concepts and the queries over it.
//!
//! The graph holds concepts (algorithms, problem classes, optimality
//! conditions, structures, techniques) connected by typed relationships, and
//! answers structured queries against it:
//!
//! - [`KnowledgeGraph::explore`] - concept details plus what depends on it
//! - [`KnowledgeGraph::find_path`] - shortest relationship chain (BFS)
//! - [`KnowledgeGraph::prerequisites_for`] - recursive requirement tree
//! - [`KnowledgeGraph::implementations_of`] - source files for a concept
//! - [`KnowledgeGraph::search_concepts`] - weighted keyword search
//! - [`KnowledgeGraph::solvers_for`] - algorithms solving a problem class
//! - [`KnowledgeGraph::compare_algorithms`] - side-by-side set comparison
//! - [`KnowledgeGraph::suggest_approach`] - rule-based algorithm selection
//!
//! All data is loaded once at construction and never mutated; every query
//! method takes `&self` and is a pure function of the store and its
//! arguments, so a graph can be shared across concurrent readers without
//! locking.
//!
//! # Example
//!
//! ```no_run
//! use mathkb_core::{Config, KnowledgeGraph};
//!
//! let config = Config::load()?;
//! let graph = KnowledgeGraph::load(&config)?;
//!
//! let hits = graph.search_concepts("duality");
//! let path = graph.find_path("simplex_method", "KKT_conditions", 5)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod loader;
pub mod models;
mod resolve;
mod search;
mod store;
mod traverse;

pub mod guidance;

pub use error::GraphError;
pub use guidance::{Approach, GuidanceEntry, Suggestion};
pub use models::{
    is_file_reference, AlgorithmGuidance, Category, CharacteristicRule, Concept, GuidanceTable,
    RelationType, Relationship, Target, TargetMeta,
};
pub use resolve::MatchPolicy;
pub use search::{
    AlgorithmSummary, Comparison, ConceptDetail, ConceptRef, ConceptSummary, Implementation,
    Implementations, SearchHit, SolverEntry, Solvers,
};
pub use store::{ConceptStore, RelationshipIndex};
pub use traverse::{PathEdge, PathResult, PrerequisiteEntry, PrerequisiteTree};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{Config, QueryConfig};

/// The immutable knowledge graph: concept store, relationship indices, and
/// guidance table.
#[derive(Debug)]
pub struct KnowledgeGraph {
    concepts: ConceptStore,
    index: RelationshipIndex,
    guidance: GuidanceTable,
    limits: QueryConfig,
}

/// Concept and relationship counts, recomputed from what was actually loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub concept_count: usize,
    pub relationship_count: usize,
}

impl KnowledgeGraph {
    /// Load the graph index and guidance table from the configured locations.
    ///
    /// Missing data files degrade to an empty graph/table; present but
    /// malformed files are errors.
    pub fn load(config: &Config) -> Result<Self, GraphError> {
        let (concepts, edges) = match config.data.graph_index_path() {
            Some(path) => loader::load_graph(&path)?,
            None => (Vec::new(), Vec::new()),
        };
        let guidance = match config.data.guidance_path() {
            Some(path) => loader::load_guidance(&path)?,
            None => GuidanceTable::default(),
        };

        Ok(Self::assemble(concepts, edges, guidance, config.query.clone()))
    }

    /// Build a graph from already-parsed parts, mainly for in-memory use and
    /// tests. Applies the same normalization as [`KnowledgeGraph::load`].
    pub fn from_parts(
        concepts: Vec<Concept>,
        mut relationships: Vec<Relationship>,
        guidance: GuidanceTable,
    ) -> Self {
        loader::ensure_alternative_symmetry(&mut relationships);
        Self::assemble(concepts, relationships, guidance, QueryConfig::default())
    }

    fn assemble(
        concepts: Vec<Concept>,
        edges: Vec<Relationship>,
        guidance: GuidanceTable,
        limits: QueryConfig,
    ) -> Self {
        Self {
            concepts: ConceptStore::from_concepts(concepts),
            index: RelationshipIndex::build(edges),
            guidance,
            limits,
        }
    }

    pub fn concepts(&self) -> &ConceptStore {
        &self.concepts
    }

    pub fn relationships(&self) -> &RelationshipIndex {
        &self.index
    }

    pub fn guidance_table(&self) -> &GuidanceTable {
        &self.guidance
    }

    pub(crate) fn limits(&self) -> &QueryConfig {
        &self.limits
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            concept_count: self.concepts.len(),
            relationship_count: self.index.edges().len(),
        }
    }

    /// The derived relationship view for one concept: its outgoing edges
    /// grouped by type, in edge order. This replaces the embedded map on the
    /// concept record, which is never consulted after loading.
    pub(crate) fn relationship_view(&self, id: &str) -> BTreeMap<RelationType, Vec<Target>> {
        let mut view: BTreeMap<RelationType, Vec<Target>> = BTreeMap::new();
        for edge in self.index.outgoing(id) {
            view.entry(edge.kind).or_default().push(edge.target());
        }
        view
    }
}
