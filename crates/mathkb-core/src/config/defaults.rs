//! Default values for Mathkb configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Data Defaults
// ============================================================================

/// Locations searched for the knowledge graph index, in order, when no
/// explicit path is configured.
pub const DEFAULT_GRAPH_INDEX_CANDIDATES: &[&str] = &[
    "site/static/api/knowledge-graph/index.json",
    "knowledge-graph/index.json",
];

/// Locations searched for the algorithm guidance table, in order.
pub const DEFAULT_GUIDANCE_CANDIDATES: &[&str] = &["data/algorithm-guidance.yaml"];

/// Project-local configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "mathkb.toml";

/// Directory name under the user config directory.
pub const DEFAULT_CONFIG_DIR: &str = "mathkb";

// ============================================================================
// Query Defaults
// ============================================================================

/// Maximum number of hops explored by path finding.
pub const DEFAULT_MAX_PATH_DEPTH: usize = 5;

/// Maximum recursion depth for prerequisite trees.
pub const DEFAULT_PREREQUISITE_DEPTH: usize = 3;

/// Number of characters of a concept definition included in search results.
pub const DEFAULT_DEFINITION_PREVIEW: usize = 200;
