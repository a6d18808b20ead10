//! Algorithm guidance: practical advice joined against the graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The external guidance table.
///
/// Loaded once from YAML; a missing table degrades to the empty default so
/// the engine stays queryable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuidanceTable {
    /// Practical guidance keyed by algorithm concept ID.
    pub algorithms: BTreeMap<String, AlgorithmGuidance>,
    /// Named recommendation rules keyed by rule name.
    pub problem_characteristics: BTreeMap<String, CharacteristicRule>,
}

impl GuidanceTable {
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty() && self.problem_characteristics.is_empty()
    }
}

/// Practical guidance for one algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AlgorithmGuidance {
    /// Complexity description, opaque to the engine (scalar or map in the
    /// source data) and copied into results untouched.
    pub complexity: serde_json::Value,
    pub when_to_use: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// A problem-characteristic rule used by approach suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicRule {
    /// Phrases matched against the caller's problem characteristics.
    #[serde(default)]
    pub indicators: Vec<String>,
    /// Algorithm concept ID this rule recommends.
    pub recommendation: String,
    /// Why the rule recommends it.
    #[serde(default)]
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guidance_table_parses_from_yaml() {
        let yaml = r#"
algorithms:
  simplex_method:
    complexity:
      average: polynomial
      worst: exponential
    when_to_use:
      - small to medium LPs
    strengths:
      - warm starts well
    weaknesses:
      - exponential worst case
problem_characteristics:
  large_sparse:
    indicators: ["large", "sparse"]
    recommendation: interior_point_method
    rationale: Interior point methods scale well on large sparse problems
"#;
        let table: GuidanceTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.algorithms.len(), 1);
        let simplex = &table.algorithms["simplex_method"];
        assert_eq!(simplex.when_to_use, vec!["small to medium LPs"]);
        assert_eq!(simplex.complexity["worst"], "exponential");
        assert_eq!(
            table.problem_characteristics["large_sparse"].recommendation,
            "interior_point_method"
        );
    }

    #[test]
    fn empty_table_is_default() {
        let table: GuidanceTable = serde_yaml::from_str("{}").unwrap();
        assert!(table.is_empty());
    }
}
