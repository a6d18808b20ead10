//! Guidance synthesis: joining problem-characteristic rules against the
//! guidance table to recommend algorithms.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::error::GraphError;
use super::KnowledgeGraph;

/// A guidance table entry together with the algorithm ID it resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceEntry {
    pub algorithm: String,
    pub complexity: serde_json::Value,
    pub when_to_use: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// One recommended algorithm with supporting detail.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub algorithm: String,
    pub rationale: String,
    pub when_to_use: Vec<String>,
    /// At most three.
    pub strengths: Vec<String>,
    pub complexity: serde_json::Value,
}

/// The full answer of [`KnowledgeGraph::suggest_approach`].
#[derive(Debug, Clone, Serialize)]
pub struct Approach {
    pub problem_type: String,
    pub characteristics: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    /// How many rules matched with a nonzero score, before truncation.
    pub rules_matched: usize,
}

/// A rule that matched, scored. Internal to suggestion ranking.
struct RuleMatch<'a> {
    algorithm: &'a str,
    rationale: &'a str,
    score: u32,
}

impl KnowledgeGraph {
    /// Direct guidance lookup: exact algorithm ID first, then
    /// case-insensitive ID substring.
    pub fn algorithm_guidance(&self, algorithm_id: &str) -> Result<GuidanceEntry, GraphError> {
        let table = &self.guidance_table().algorithms;

        if let Some(entry) = table.get(algorithm_id) {
            return Ok(GuidanceEntry {
                algorithm: algorithm_id.to_string(),
                complexity: entry.complexity.clone(),
                when_to_use: entry.when_to_use.clone(),
                strengths: entry.strengths.clone(),
                weaknesses: entry.weaknesses.clone(),
            });
        }

        let needle = algorithm_id.to_lowercase();
        for (id, entry) in table {
            if id.to_lowercase().contains(&needle) {
                return Ok(GuidanceEntry {
                    algorithm: id.clone(),
                    complexity: entry.complexity.clone(),
                    when_to_use: entry.when_to_use.clone(),
                    strengths: entry.strengths.clone(),
                    weaknesses: entry.weaknesses.clone(),
                });
            }
        }

        Err(GraphError::GuidanceNotFound(algorithm_id.to_string()))
    }

    /// Suggest algorithms for a problem type and its characteristics.
    ///
    /// Every rule is scored: +1 for each indicator that contains, or is
    /// contained by, any supplied characteristic (the first matching
    /// characteristic wins per indicator), plus +2 per indicator containing
    /// the lowercase problem type. Zero-score rules are dropped, the rest
    /// sorted by descending score, and the top three distinct recommended
    /// algorithms are expanded through the guidance table.
    ///
    /// When no rule matches, a static table maps normalized problem types
    /// (`lp`, `qp`, `nlp`, `mip`, `milp`, `minlp`) to default algorithms.
    pub fn suggest_approach(&self, problem_type: &str, characteristics: &[String]) -> Approach {
        let chars_lower: Vec<String> = characteristics.iter().map(|c| c.to_lowercase()).collect();
        let problem_lower = problem_type.to_lowercase();

        let mut matches: Vec<RuleMatch> = Vec::new();
        for rule in self.guidance_table().problem_characteristics.values() {
            let mut score = 0u32;

            for indicator in &rule.indicators {
                let indicator = indicator.to_lowercase();

                for characteristic in &chars_lower {
                    if indicator.contains(characteristic.as_str())
                        || characteristic.contains(indicator.as_str())
                    {
                        score += 1;
                        break;
                    }
                }

                if indicator.contains(&problem_lower) {
                    score += 2;
                }
            }

            if score > 0 {
                matches.push(RuleMatch {
                    algorithm: &rule.recommendation,
                    rationale: &rule.rationale,
                    score,
                });
            }
        }

        // Stable sort keeps rule order as the secondary key.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        let rules_matched = matches.len();

        let mut suggestions = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for matched in &matches {
            if suggestions.len() == 3 {
                break;
            }
            if !seen.insert(matched.algorithm) {
                continue;
            }
            if let Ok(entry) = self.algorithm_guidance(matched.algorithm) {
                suggestions.push(Suggestion {
                    algorithm: matched.algorithm.to_string(),
                    rationale: matched.rationale.to_string(),
                    when_to_use: entry.when_to_use,
                    strengths: entry.strengths.into_iter().take(3).collect(),
                    complexity: entry.complexity,
                });
            }
        }

        if suggestions.is_empty() {
            for algorithm in fallback_algorithms(&problem_lower) {
                if let Ok(entry) = self.algorithm_guidance(algorithm) {
                    suggestions.push(Suggestion {
                        algorithm: algorithm.to_string(),
                        rationale: format!("Standard approach for {problem_type}"),
                        when_to_use: entry.when_to_use,
                        strengths: entry.strengths.into_iter().take(3).collect(),
                        complexity: entry.complexity,
                    });
                }
            }
        }

        debug!(
            problem_type,
            rules_matched,
            suggestions = suggestions.len(),
            "approach suggested"
        );

        Approach {
            problem_type: problem_type.to_string(),
            characteristics: characteristics.to_vec(),
            suggestions,
            rules_matched,
        }
    }
}

/// Static defaults applied when no characteristic rule matches.
fn fallback_algorithms(problem_type: &str) -> &'static [&'static str] {
    match problem_type {
        "lp" => &["simplex_method", "interior_point_method"],
        "qp" => &["active_set_method", "interior_point_method"],
        "nlp" => &["interior_point_method"],
        "mip" | "milp" => &["branch_and_bound"],
        "minlp" => &["outer_approximation", "spatial_branch_and_bound"],
        _ => &[],
    }
}
