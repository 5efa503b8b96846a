use crate::dependency_graph::domain::PackageGraph;
use crate::dependency_graph::services::DependencyChain;
use indexmap::IndexMap;

/// Generation metadata attached to every rendered graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphMetadata {
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

impl GraphMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Metadata for the current run of this binary
    pub fn current() -> Self {
        Self::new(
            chrono::Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }
}

/// GraphResponse - Internal response DTO from the graph building use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub graph: PackageGraph,
    /// `targets` key the graph was built from
    pub target_framework: String,
    /// Chains per requested package key, in request order
    ///
    /// Empty when no keys were requested.
    pub chains: IndexMap<String, Vec<DependencyChain>>,
    pub metadata: GraphMetadata,
}

impl GraphResponse {
    pub fn new(
        graph: PackageGraph,
        target_framework: String,
        chains: IndexMap<String, Vec<DependencyChain>>,
        metadata: GraphMetadata,
    ) -> Self {
        Self {
            graph,
            target_framework,
            chains,
            metadata,
        }
    }
}
