#![allow(dead_code)]

use mathkb_core::graph::models::{AlgorithmGuidance, CharacteristicRule};
use mathkb_core::{
    Category, Concept, GuidanceTable, KnowledgeGraph, RelationType, Relationship,
};

/// A small but realistic optimization knowledge graph shared by the query
/// tests: two problem classes, three algorithms, and supporting theory.
pub fn sample_graph() -> KnowledgeGraph {
    KnowledgeGraph::from_parts(sample_concepts(), sample_relationships(), sample_guidance())
}

pub fn sample_concepts() -> Vec<Concept> {
    vec![
        Concept::new("LP", "Linear Programming", Category::ProblemClass)
            .with_aliases(&["linear program", "linear programming"])
            .with_definition("Optimization of a linear objective over a polyhedron."),
        Concept::new("QP", "Quadratic Programming", Category::ProblemClass)
            .with_definition("Optimization of a quadratic objective subject to linear constraints."),
        Concept::new("simplex_method", "Simplex Method", Category::Algorithm)
            .with_aliases(&["simplex"])
            .with_definition("The simplex method walks vertices of the feasible polyhedron.")
            .with_intuition("Pivot from vertex to vertex, improving the objective each step."),
        Concept::new(
            "interior_point_method",
            "Interior Point Method",
            Category::Algorithm,
        )
        .with_aliases(&["barrier method"])
        .with_definition("Follows the central path through the interior of the feasible region.")
        .with_intuition("Stay inside and take Newton steps toward optimality."),
        Concept::new("active_set_method", "Active Set Method", Category::Algorithm)
            .with_definition("Iterates on a working set of active constraints."),
        Concept::new("duality", "Duality", Category::Structure)
            .with_definition("Every linear program has an associated dual program."),
        Concept::new("kkt_conditions", "KKT Conditions", Category::Optimality)
            .with_aliases(&["KKT"])
            .with_definition("First-order necessary conditions for constrained optimality."),
        Concept::new("convexity", "Convexity", Category::Structure)
            .with_definition("A set or function closed under line segments."),
        Concept::new("basis", "Basis", Category::Structure)
            .with_definition("A maximal set of linearly independent columns."),
    ]
}

pub fn sample_relationships() -> Vec<Relationship> {
    vec![
        Relationship::new("simplex_method", "LP", RelationType::Solves),
        Relationship::new("interior_point_method", "LP", RelationType::Solves),
        Relationship::new("interior_point_method", "QP", RelationType::Solves),
        Relationship::new("active_set_method", "QP", RelationType::Solves),
        Relationship::new("simplex_method", "basis", RelationType::Requires),
        Relationship::new("simplex_method", "duality", RelationType::Requires),
        Relationship::new("duality", "convexity", RelationType::Requires),
        Relationship::new("interior_point_method", "kkt_conditions", RelationType::Requires),
        Relationship::new("kkt_conditions", "convexity", RelationType::Requires),
        // Reverse direction is added by load-time normalization.
        Relationship::new(
            "simplex_method",
            "interior_point_method",
            RelationType::AlternativeTo,
        ),
        Relationship::new("simplex_method", "Clp/src/ClpSimplex.hpp", RelationType::ImplementedIn)
            .with_brief("Primal and dual simplex driver"),
        Relationship::new(
            "simplex_method",
            "Clp/src/ClpSimplexPrimal.hpp",
            RelationType::ImplementedIn,
        ),
    ]
}

pub fn sample_guidance() -> GuidanceTable {
    let mut table = GuidanceTable::default();

    table.algorithms.insert(
        "simplex_method".to_string(),
        AlgorithmGuidance {
            complexity: serde_json::json!({
                "average": "polynomial in practice",
                "worst": "exponential"
            }),
            when_to_use: vec![
                "small to medium LPs".to_string(),
                "reoptimization after small changes".to_string(),
            ],
            strengths: vec![
                "excellent warm starts".to_string(),
                "exact vertex solutions".to_string(),
                "mature implementations".to_string(),
                "handles degeneracy".to_string(),
            ],
            weaknesses: vec!["exponential worst case".to_string()],
        },
    );
    table.algorithms.insert(
        "interior_point_method".to_string(),
        AlgorithmGuidance {
            complexity: serde_json::json!("O(sqrt(n) L) iterations"),
            when_to_use: vec!["large sparse LPs and QPs".to_string()],
            strengths: vec![
                "polynomial complexity".to_string(),
                "scales to millions of variables".to_string(),
            ],
            weaknesses: vec!["poor warm starts".to_string()],
        },
    );
    table.algorithms.insert(
        "branch_and_bound".to_string(),
        AlgorithmGuidance {
            complexity: serde_json::json!("exponential worst case"),
            when_to_use: vec!["integer and mixed-integer problems".to_string()],
            strengths: vec!["proves optimality".to_string()],
            weaknesses: vec!["tree growth on hard instances".to_string()],
        },
    );

    table.problem_characteristics.insert(
        "large_sparse".to_string(),
        CharacteristicRule {
            indicators: vec!["large".to_string(), "sparse".to_string()],
            recommendation: "interior_point_method".to_string(),
            rationale: "Interior point methods scale well on large sparse problems".to_string(),
        },
    );
    table.problem_characteristics.insert(
        "reoptimization".to_string(),
        CharacteristicRule {
            indicators: vec!["warm start".to_string(), "reoptimization".to_string()],
            recommendation: "simplex_method".to_string(),
            rationale: "Simplex restarts cheaply from a previous basis".to_string(),
        },
    );
    table.problem_characteristics.insert(
        "integrality".to_string(),
        CharacteristicRule {
            indicators: vec![
                "integer variables".to_string(),
                "discrete decisions".to_string(),
            ],
            recommendation: "branch_and_bound".to_string(),
            rationale: "Integrality requires enumeration with bounding".to_string(),
        },
    );

    table
}
