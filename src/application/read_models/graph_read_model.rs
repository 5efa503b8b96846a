//! Graph read model for query operations

use crate::dependency_graph::services::DependencyChain;

/// Main read model for a built dependency graph
#[derive(Debug, Clone)]
pub struct GraphReadModel {
    pub metadata: GraphMetadataView,
    /// Every node except the root, in graph insertion order
    pub packages: Vec<PackageView>,
    /// Root dependencies with the version they resolved to
    pub direct_dependencies: Vec<DirectDependencyView>,
    /// Present only when chains were requested
    pub chains: Option<Vec<ChainsView>>,
}

/// View representation of run metadata
#[derive(Debug, Clone)]
pub struct GraphMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub target_framework: String,
    pub root: RootView,
}

#[derive(Debug, Clone)]
pub struct RootView {
    pub id: String,
    pub name: String,
    pub version: String,
}

/// View representation of one package node
#[derive(Debug, Clone)]
pub struct PackageView {
    /// Canonical (lower-cased) id
    pub id: String,
    /// Display name in original casing
    pub name: String,
    /// Resolved version, or the unresolved label
    pub version: String,
    pub resolved: bool,
    pub dependencies: Vec<ReferenceView>,
    pub references: Vec<ReferenceView>,
}

/// An edge endpoint together with the normalized range on that edge
#[derive(Debug, Clone)]
pub struct ReferenceView {
    pub id: String,
    pub version_range: String,
}

#[derive(Debug, Clone)]
pub struct DirectDependencyView {
    pub id: String,
    pub name: String,
    pub declared_range: String,
    pub resolved_version: String,
    /// `None` when unresolved or when the range or version cannot be compared
    pub satisfied: Option<bool>,
}

/// Chains traced for one requested package key
#[derive(Debug, Clone)]
pub struct ChainsView {
    pub package_key: String,
    pub chains: Vec<DependencyChain>,
}
