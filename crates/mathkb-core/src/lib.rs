pub mod config;
pub mod graph;

pub use config::{Config, ConfigError, DataConfig, QueryConfig};
pub use graph::{
    Category, Concept, GraphError, GuidanceTable, KnowledgeGraph, MatchPolicy, RelationType,
    Relationship, Target,
};
