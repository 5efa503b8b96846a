//! Builder for constructing GraphReadModel from the use case response

use super::graph_read_model::{
    ChainsView, DirectDependencyView, GraphMetadataView, GraphReadModel, PackageView,
    ReferenceView, RootView,
};
use crate::application::dto::GraphResponse;
use crate::dependency_graph::domain::{
    PackageGraph, PackageNode, PackageReference, PackageVersion, VersionRange, PLACEHOLDER_VERSION,
};

/// Builder for constructing GraphReadModel from a [`GraphResponse`]
pub struct GraphReadModelBuilder;

impl GraphReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Output of the graph building use case
    /// * `unresolved_label` - Version shown for nodes that were referenced
    ///   but never resolved
    pub fn build(response: &GraphResponse, unresolved_label: &str) -> GraphReadModel {
        let graph = &response.graph;

        GraphReadModel {
            metadata: Self::build_metadata(response),
            packages: Self::build_packages(graph, unresolved_label),
            direct_dependencies: Self::build_direct_dependencies(graph, unresolved_label),
            chains: (!response.chains.is_empty()).then(|| {
                response
                    .chains
                    .iter()
                    .map(|(key, chains)| ChainsView {
                        package_key: key.clone(),
                        chains: chains.clone(),
                    })
                    .collect()
            }),
        }
    }

    fn build_metadata(response: &GraphResponse) -> GraphMetadataView {
        let graph = &response.graph;
        let root = graph.root();

        GraphMetadataView {
            timestamp: response.metadata.timestamp.clone(),
            tool_name: response.metadata.tool_name.clone(),
            tool_version: response.metadata.tool_version.clone(),
            target_framework: response.target_framework.clone(),
            root: RootView {
                id: graph.root_id().as_str().to_string(),
                name: root
                    .map(|node| node.name().to_string())
                    .unwrap_or_else(|| graph.root_id().display_name().to_string()),
                version: root
                    .map(|node| node.version().to_string())
                    .unwrap_or_else(|| PLACEHOLDER_VERSION.to_string()),
            },
        }
    }

    fn build_packages(graph: &PackageGraph, unresolved_label: &str) -> Vec<PackageView> {
        graph
            .iter()
            .filter(|(id, _)| !graph.is_root(id.as_str()))
            .map(|(id, node)| PackageView {
                id: id.as_str().to_string(),
                name: node.name().to_string(),
                version: Self::display_version(node, unresolved_label),
                resolved: node.is_resolved(),
                dependencies: Self::reference_views(node.dependencies()),
                references: Self::reference_views(node.references()),
            })
            .collect()
    }

    fn build_direct_dependencies(
        graph: &PackageGraph,
        unresolved_label: &str,
    ) -> Vec<DirectDependencyView> {
        let Some(root) = graph.root() else {
            return Vec::new();
        };

        root.dependencies()
            .iter()
            .filter_map(|reference| {
                let node = graph.get(reference.id.as_str())?;
                Some(DirectDependencyView {
                    id: reference.id.as_str().to_string(),
                    name: node.name().to_string(),
                    declared_range: reference.version_range.clone(),
                    resolved_version: Self::display_version(node, unresolved_label),
                    satisfied: Self::satisfies(node, &reference.version_range),
                })
            })
            .collect()
    }

    /// Evaluates a normalized range against the node's resolved version
    fn satisfies(node: &PackageNode, version_range: &str) -> Option<bool> {
        if !node.is_resolved() {
            return None;
        }
        let range = VersionRange::parse_canonical(version_range)?;
        let version = PackageVersion::parse(node.version()).ok()?;
        range.allows(&version)
    }

    fn display_version(node: &PackageNode, unresolved_label: &str) -> String {
        if node.is_resolved() {
            node.version().to_string()
        } else {
            unresolved_label.to_string()
        }
    }

    fn reference_views(references: &[PackageReference]) -> Vec<ReferenceView> {
        references
            .iter()
            .map(|reference| ReferenceView {
                id: reference.id.as_str().to_string(),
                version_range: reference.version_range.clone(),
            })
            .collect()
    }
}
