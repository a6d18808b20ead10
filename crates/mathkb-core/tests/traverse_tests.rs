mod common;

use common::sample_graph;
use mathkb_core::graph::PathResult;
use mathkb_core::{
    Category, Concept, GraphError, GuidanceTable, KnowledgeGraph, RelationType, Relationship,
};

fn chain_graph() -> KnowledgeGraph {
    // A --requires--> B --requires--> C
    KnowledgeGraph::from_parts(
        vec![
            Concept::new("A", "A", Category::Technique),
            Concept::new("B", "B", Category::Technique),
            Concept::new("C", "C", Category::Technique),
        ],
        vec![
            Relationship::new("A", "B", RelationType::Requires),
            Relationship::new("B", "C", RelationType::Requires),
        ],
        GuidanceTable::default(),
    )
}

#[test]
fn bfs_finds_two_hop_chain() {
    let graph = chain_graph();
    match graph.find_path("A", "C", 5).unwrap() {
        PathResult::Found { path, length } => {
            assert_eq!(length, 2);
            assert_eq!(path.len(), 2);
            assert_eq!(path[0].from, "A");
            assert_eq!(path[0].to, "B");
            assert_eq!(path[0].relationship, RelationType::Requires);
            assert_eq!(path[1].from, "B");
            assert_eq!(path[1].to, "C");
        }
        PathResult::NotFound { message } => panic!("expected a path, got: {message}"),
    }
}

#[test]
fn bfs_returns_shortest_path() {
    // Both a direct edge and a detour exist; BFS must return the direct one.
    let graph = KnowledgeGraph::from_parts(
        vec![
            Concept::new("A", "A", Category::Technique),
            Concept::new("B", "B", Category::Technique),
            Concept::new("C", "C", Category::Technique),
        ],
        vec![
            Relationship::new("A", "B", RelationType::Requires),
            Relationship::new("B", "C", RelationType::Requires),
            Relationship::new("A", "C", RelationType::Generalizes),
        ],
        GuidanceTable::default(),
    );
    match graph.find_path("A", "C", 5).unwrap() {
        PathResult::Found { length, path } => {
            assert_eq!(length, 1);
            assert_eq!(path[0].relationship, RelationType::Generalizes);
        }
        PathResult::NotFound { .. } => panic!("expected a path"),
    }
}

#[test]
fn missing_endpoints_are_errors_naming_the_side() {
    let graph = chain_graph();
    assert!(matches!(
        graph.find_path("nope", "C", 5).unwrap_err(),
        GraphError::SourceNotFound(id) if id == "nope"
    ));
    assert!(matches!(
        graph.find_path("A", "nope", 5).unwrap_err(),
        GraphError::TargetNotFound(id) if id == "nope"
    ));
}

#[test]
fn depth_bound_prunes_expansion() {
    let graph = chain_graph();
    match graph.find_path("A", "C", 1).unwrap() {
        PathResult::NotFound { message } => {
            assert!(message.contains("A"));
            assert!(message.contains("C"));
            assert!(message.contains("1 hops"));
        }
        PathResult::Found { .. } => panic!("path exceeds the depth bound"),
    }
}

#[test]
fn self_path_is_not_trivially_found() {
    let graph = chain_graph();
    // No zero-length path: without a self-edge, A to A is not found.
    assert!(!graph.find_path("A", "A", 5).unwrap().is_found());
}

#[test]
fn self_edge_gives_length_one() {
    let graph = KnowledgeGraph::from_parts(
        vec![Concept::new("A", "A", Category::Technique)],
        vec![Relationship::new("A", "A", RelationType::Contains)],
        GuidanceTable::default(),
    );
    match graph.find_path("A", "A", 5).unwrap() {
        PathResult::Found { length, .. } => assert_eq!(length, 1),
        PathResult::NotFound { .. } => panic!("self-edge should be found"),
    }
}

#[test]
fn file_references_are_never_traversed() {
    let graph = sample_graph();
    // simplex_method has implemented_in edges to file paths; no returned
    // path may contain one.
    for target in ["LP", "convexity", "kkt_conditions"] {
        if let PathResult::Found { path, .. } =
            graph.find_path("simplex_method", target, 5).unwrap()
        {
            for edge in &path {
                assert!(!edge.to.contains('/'), "file reference in path: {}", edge.to);
            }
        }
    }
}

#[test]
fn path_edges_carry_display_names() {
    let graph = sample_graph();
    match graph.find_path("simplex_method", "convexity", 5).unwrap() {
        PathResult::Found { path, .. } => {
            assert_eq!(path[0].from_name, "Simplex Method");
            assert_eq!(path.last().unwrap().to_name, "Convexity");
        }
        PathResult::NotFound { .. } => panic!("expected a path"),
    }
}

#[test]
fn path_result_serialization_shape() {
    let graph = chain_graph();
    let found = serde_json::to_value(graph.find_path("A", "C", 5).unwrap()).unwrap();
    assert_eq!(found["found"], true);
    assert_eq!(found["length"], 2);
    assert_eq!(found["path"][0]["relationship"], "requires");

    let missed = serde_json::to_value(graph.find_path("C", "A", 5).unwrap()).unwrap();
    assert_eq!(missed["found"], false);
    assert!(missed["message"].as_str().unwrap().contains("No path found"));
}

#[test]
fn prerequisite_tree_follows_requires_edges() {
    let graph = sample_graph();
    let tree = graph.prerequisites_for("simplex_method", 3).unwrap();
    assert_eq!(tree.concept, "simplex_method");
    assert_eq!(tree.name, "Simplex Method");
    assert_eq!(tree.depth, 3);

    let requires = tree.requires.expect("simplex has prerequisites");
    let ids: Vec<&str> = requires.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["basis", "duality"]);

    // duality's own prerequisite is nested one level down.
    let duality = &requires[1];
    let nested = duality.requires.as_ref().expect("duality requires convexity");
    assert_eq!(nested[0].id, "convexity");
    assert_eq!(nested[0].category, Category::Structure);
}

#[test]
fn leaf_concepts_omit_the_requires_key() {
    let graph = sample_graph();
    let tree = graph.prerequisites_for("convexity", 3).unwrap();
    assert!(tree.requires.is_none());

    let json = serde_json::to_value(&tree).unwrap();
    assert!(json.get("requires").is_none());
}

#[test]
fn depth_parameter_caps_recursion() {
    let graph = sample_graph();
    // depth 0 allows only the root's direct prerequisites.
    let tree = graph.prerequisites_for("simplex_method", 0).unwrap();
    let requires = tree.requires.expect("direct prerequisites still listed");
    assert!(requires.iter().all(|e| e.requires.is_none()));
}

#[test]
fn cycles_never_repeat_within_a_branch() {
    // A requires B, B requires A: the guard must cut the loop.
    let graph = KnowledgeGraph::from_parts(
        vec![
            Concept::new("A", "A", Category::Technique),
            Concept::new("B", "B", Category::Technique),
        ],
        vec![
            Relationship::new("A", "B", RelationType::Requires),
            Relationship::new("B", "A", RelationType::Requires),
        ],
        GuidanceTable::default(),
    );

    for depth in [1, 3, 10] {
        let tree = graph.prerequisites_for("A", depth).unwrap();
        let requires = tree.requires.expect("A requires B");
        assert_eq!(requires.len(), 1);
        assert_eq!(requires[0].id, "B");
        // B's expansion must not re-enter A.
        assert!(requires[0].requires.is_none());
    }
}

#[test]
fn shared_prerequisite_appears_in_sibling_branches() {
    // The root requires two concepts that both require the same leaf; the
    // leaf is allowed once per branch.
    let graph = KnowledgeGraph::from_parts(
        vec![
            Concept::new("root", "Root", Category::Algorithm),
            Concept::new("left", "Left", Category::Structure),
            Concept::new("right", "Right", Category::Structure),
            Concept::new("leaf", "Leaf", Category::Structure),
        ],
        vec![
            Relationship::new("root", "left", RelationType::Requires),
            Relationship::new("root", "right", RelationType::Requires),
            Relationship::new("left", "leaf", RelationType::Requires),
            Relationship::new("right", "leaf", RelationType::Requires),
        ],
        GuidanceTable::default(),
    );

    let tree = graph.prerequisites_for("root", 3).unwrap();
    let branches = tree.requires.unwrap();
    assert_eq!(branches.len(), 2);
    for branch in &branches {
        let nested = branch.requires.as_ref().expect("both branches reach leaf");
        assert_eq!(nested[0].id, "leaf");
    }
}

#[test]
fn file_references_skipped_in_prerequisites() {
    let graph = KnowledgeGraph::from_parts(
        vec![Concept::new("A", "A", Category::Algorithm)],
        vec![
            Relationship::new("A", "Lib/src/File.hpp", RelationType::Requires),
        ],
        GuidanceTable::default(),
    );
    let tree = graph.prerequisites_for("A", 3).unwrap();
    assert!(tree.requires.is_none());
}

#[test]
fn unknown_prerequisite_targets_are_tolerated() {
    let graph = KnowledgeGraph::from_parts(
        vec![Concept::new("A", "A", Category::Algorithm)],
        vec![Relationship::new("A", "ghost", RelationType::Requires)],
        GuidanceTable::default(),
    );
    let tree = graph.prerequisites_for("A", 3).unwrap();
    let requires = tree.requires.unwrap();
    assert_eq!(requires[0].id, "ghost");
    assert_eq!(requires[0].name, "ghost");
    assert_eq!(requires[0].category, Category::Unknown);
}

#[test]
fn prerequisites_for_unknown_root_is_an_error() {
    let graph = sample_graph();
    assert!(matches!(
        graph.prerequisites_for("nope", 3).unwrap_err(),
        GraphError::ConceptNotFound(_)
    ));
}
