//! Loading and normalizing the graph index and guidance table.
//!
//! The graph index is a JSON artifact produced by an external build step:
//! a map of concept records plus a flat relationship list. The flat list is
//! authoritative; when it is absent the loader expands each concept's
//! embedded relationship map instead. Either way the loader guarantees that
//! every `alternative_to` edge has its reverse edge before the indices are
//! built.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use super::error::GraphError;
use super::models::{Concept, GuidanceTable, RelationType, Relationship};

/// The on-disk shape of the graph index artifact.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GraphDocument {
    #[serde(deserialize_with = "concept_map")]
    concepts: Vec<Concept>,
    relationships: Vec<Relationship>,
}

/// Deserialize the `concepts` object preserving document order, which
/// substring resolution depends on. The map key wins as the ID when the
/// record itself omits one.
fn concept_map<'de, D>(deserializer: D) -> Result<Vec<Concept>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ConceptMapVisitor;

    impl<'de> Visitor<'de> for ConceptMapVisitor {
        type Value = Vec<Concept>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of concept ID to concept record")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut concepts = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, mut concept)) = map.next_entry::<String, Concept>()? {
                if concept.id.is_empty() {
                    concept.id = id;
                }
                concepts.push(concept);
            }
            Ok(concepts)
        }
    }

    deserializer.deserialize_map(ConceptMapVisitor)
}

/// Load the graph index from a JSON file.
///
/// A missing file degrades to an empty graph so the engine stays queryable;
/// a present but malformed file is an error.
pub fn load_graph(path: &Path) -> Result<(Vec<Concept>, Vec<Relationship>), GraphError> {
    if !path.exists() {
        info!(path = %path.display(), "graph index not found, starting empty");
        return Ok((Vec::new(), Vec::new()));
    }

    let content = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
    let doc: GraphDocument = serde_json::from_str(&content).map_err(|e| GraphError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut edges = if doc.relationships.is_empty() {
        expand_embedded(&doc.concepts)
    } else {
        doc.relationships
    };
    ensure_alternative_symmetry(&mut edges);

    info!(
        concepts = doc.concepts.len(),
        relationships = edges.len(),
        "loaded knowledge graph"
    );
    Ok((doc.concepts, edges))
}

/// Load the guidance table from a YAML file.
///
/// A missing file degrades to the empty table.
pub fn load_guidance(path: &Path) -> Result<GuidanceTable, GraphError> {
    if !path.exists() {
        debug!(path = %path.display(), "guidance table not found, using empty table");
        return Ok(GuidanceTable::default());
    }

    let content = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
    let table: GuidanceTable = serde_yaml::from_str(&content).map_err(|e| GraphError::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        algorithms = table.algorithms.len(),
        rules = table.problem_characteristics.len(),
        "loaded algorithm guidance"
    );
    Ok(table)
}

/// Expand embedded per-concept relationship maps into a flat edge list, used
/// when the artifact carries no top-level relationship list.
fn expand_embedded(concepts: &[Concept]) -> Vec<Relationship> {
    let mut edges = Vec::new();
    for concept in concepts {
        for (&kind, targets) in &concept.relationships {
            for target in targets {
                let mut edge = Relationship::new(&concept.id, target.id(), kind);
                if let Some(brief) = target.brief() {
                    edge = edge.with_brief(brief);
                }
                edges.push(edge);
            }
        }
    }
    edges
}

/// Add the missing reverse edge for every `alternative_to` edge. The
/// relationship is symmetric but stored directed, and queries rely on both
/// directions being present.
pub(crate) fn ensure_alternative_symmetry(edges: &mut Vec<Relationship>) {
    let mut missing = Vec::new();
    for edge in edges.iter() {
        if edge.kind != RelationType::AlternativeTo {
            continue;
        }
        let has_reverse = edges
            .iter()
            .any(|e| e.kind == RelationType::AlternativeTo && e.from == edge.to && e.to == edge.from);
        if !has_reverse {
            missing.push(Relationship::new(
                edge.to.clone(),
                edge.from.clone(),
                RelationType::AlternativeTo,
            ));
        }
    }
    edges.extend(missing);
}
