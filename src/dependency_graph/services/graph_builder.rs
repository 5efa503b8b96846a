use super::framework_selector::{FrameworkSelection, FrameworkSelector};
use crate::dependency_graph::domain::{
    normalize_version_range, split_package_key, PackageGraph, PackageId, PackageKind,
    PackageReference, ProjectAssets, PLACEHOLDER_VERSION, ROOT_PACKAGE_ID,
};
use crate::shared::Result;

/// GraphBuilder service reconstructing the dependency graph of a snapshot
///
/// Pure: no I/O, no shared state. The graph is built in a single pass over
/// the project's declared dependencies followed by the resolved entries of
/// the selected target framework.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph for one target framework
    ///
    /// # Arguments
    /// * `root_id` - Sentinel id of the synthetic project node
    /// * `root_name` - Display name of the project node
    /// * `assets` - Parsed snapshot
    /// * `target_framework` - Framework to build for; `None` picks the first
    ///
    /// # Errors
    /// Returns an error if the snapshot lacks its project, frameworks or
    /// targets sections, or if the requested framework is not present.
    pub fn build(
        root_id: &str,
        root_name: &str,
        assets: &ProjectAssets,
        target_framework: Option<&str>,
    ) -> Result<PackageGraph> {
        let selection = FrameworkSelector::select(assets, target_framework)?;
        Ok(Self::build_for_selection(root_id, root_name, assets, &selection))
    }

    /// Builds the graph for a framework already picked by [`FrameworkSelector`]
    pub fn build_for_selection(
        root_id: &str,
        root_name: &str,
        assets: &ProjectAssets,
        selection: &FrameworkSelection<'_>,
    ) -> PackageGraph {
        let root = PackageId::new(root_id);
        let mut graph = PackageGraph::new(root.clone());
        let root_handle = graph.get_or_insert_root(root_name);
        graph
            .node_mut(root_handle)
            .set_resolved_version(assets.project_version().unwrap_or(PLACEHOLDER_VERSION));

        for (name, declared) in &selection.framework.dependencies {
            let range = normalize_version_range(declared.version.as_deref().unwrap_or_default());
            graph.get_or_insert(name);
            graph
                .node_mut(root_handle)
                .push_dependency(PackageReference::new(PackageId::new(name), range));
        }

        // The dependency groups spell ranges as "<Name> >= 1.0.0"; they only
        // fill in what the framework block did not declare.
        for entry in selection.dependency_group.unwrap_or_default() {
            let mut tokens = entry.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let id = PackageId::new(name);
            if graph.node(root_handle).depends_on(id.as_str()).is_some() {
                continue;
            }
            let range = tokens.collect::<Vec<_>>().join(" ");
            graph.get_or_insert(name);
            graph
                .node_mut(root_handle)
                .push_dependency(PackageReference::new(id, range));
        }

        for (key, package) in selection.target {
            let (name, version) = split_package_key(key);
            let version = version.unwrap_or_default();
            let id = PackageId::new(name);

            let handle = graph.get_or_insert(name);
            graph.node_mut(handle).set_resolved_version(version);

            // Project references are direct dependencies even when the
            // framework block does not list them.
            if package.kind == PackageKind::Project
                && graph.node(root_handle).depends_on(id.as_str()).is_none()
            {
                let range = normalize_version_range(&format!("[{}]", version));
                graph
                    .node_mut(root_handle)
                    .push_dependency(PackageReference::new(id.clone(), range));
            }

            let declared_by_root = graph
                .node(root_handle)
                .depends_on(id.as_str())
                .map(|reference| reference.version_range.clone());
            if let Some(range) = declared_by_root {
                graph
                    .node_mut(handle)
                    .push_reference(PackageReference::new(root.clone(), range));
            }

            for (dependency_name, raw_range) in &package.dependencies {
                let range = normalize_version_range(raw_range);
                let dependency_handle = graph.get_or_insert(dependency_name);
                graph
                    .node_mut(dependency_handle)
                    .push_reference(PackageReference::new(id.clone(), range.clone()));
                graph
                    .node_mut(handle)
                    .push_dependency(PackageReference::new(PackageId::new(dependency_name), range));
            }
        }

        graph
    }

    /// Builds the graph rooted at [`ROOT_PACKAGE_ID`], named after the
    /// restore section's project name
    pub fn build_for_project(
        assets: &ProjectAssets,
        target_framework: Option<&str>,
    ) -> Result<PackageGraph> {
        let root_name = assets.project_name().unwrap_or("project");
        Self::build(ROOT_PACKAGE_ID, root_name, assets, target_framework)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::GraphError;

    fn build(json: &str) -> PackageGraph {
        let assets: ProjectAssets = serde_json::from_str(json).unwrap();
        GraphBuilder::build(ROOT_PACKAGE_ID, "App", &assets, None).unwrap()
    }

    fn refs(graph: &PackageGraph, name: &str, outgoing: bool) -> Vec<(String, String)> {
        let node = graph.get(name).unwrap();
        let edges = if outgoing {
            node.dependencies()
        } else {
            node.references()
        };
        edges
            .iter()
            .map(|r| (r.id.as_str().to_string(), r.version_range.clone()))
            .collect()
    }

    fn pair(id: &str, range: &str) -> (String, String) {
        (id.to_string(), range.to_string())
    }

    #[test]
    fn test_build_end_to_end_scenario() {
        let graph = build(
            r#"{
                "targets": {
                    "net8.0": {
                        "A/1.5": { "type": "package", "dependencies": { "B": "[1.0]" } },
                        "B/1.0": { "type": "package" }
                    }
                },
                "project": {
                    "frameworks": { "net8.0": { "dependencies": { "A": { "version": "[1.0,2.0)" } } } }
                }
            }"#,
        );

        assert_eq!(refs(&graph, ".root", true), vec![pair("a", ">= 1.0, < 2.0")]);
        assert!(graph.root().unwrap().references().is_empty());

        assert_eq!(graph.get("a").unwrap().version(), "1.5");
        assert_eq!(refs(&graph, "a", false), vec![pair(".root", ">= 1.0, < 2.0")]);
        assert_eq!(refs(&graph, "a", true), vec![pair("b", "= 1.0")]);

        assert_eq!(graph.get("b").unwrap().version(), "1.0");
        assert_eq!(refs(&graph, "b", false), vec![pair("a", "= 1.0")]);
        assert!(refs(&graph, "b", true).is_empty());
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_resolved_version_overrides_placeholder() {
        // C is referenced before (and after) its own entry.
        let graph = build(
            r#"{
                "targets": {
                    "net8.0": {
                        "A/1.0.0": { "dependencies": { "C": "3.0.0" } },
                        "C/3.1.0": {},
                        "B/1.0.0": { "dependencies": { "c": "[3.0.0, 4.0.0)" } }
                    }
                },
                "project": { "frameworks": { "net8.0": {} } }
            }"#,
        );

        let c = graph.get("C").unwrap();
        assert_eq!(c.version(), "3.1.0");
        assert!(c.is_resolved());
        assert_eq!(
            refs(&graph, "c", false),
            vec![pair("a", ">= 3.0.0"), pair("b", ">= 3.0.0, < 4.0.0")]
        );
    }

    #[test]
    fn test_every_dependency_has_matching_reference() {
        let graph = build(
            r#"{
                "targets": {
                    "net8.0": {
                        "A/1.0.0": { "dependencies": { "B": "1.0.0", "C": "[2.0.0]" } },
                        "B/1.0.0": { "dependencies": { "C": "(1.0.0, 3.0.0]" } },
                        "C/2.0.0": {}
                    }
                },
                "project": {
                    "frameworks": { "net8.0": { "dependencies": { "A": { "version": "[1.0.0, )" } } } }
                }
            }"#,
        );

        for (id, node) in graph.iter() {
            for dependency in node.dependencies() {
                let target = graph.get(dependency.id.as_str()).unwrap();
                assert!(
                    target
                        .references()
                        .iter()
                        .any(|r| &r.id == id && r.version_range == dependency.version_range),
                    "missing reverse edge {} -> {}",
                    dependency.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_project_entry_promoted_to_root_dependency() {
        let graph = build(
            r#"{
                "targets": {
                    "net8.0": {
                        "Shared.Core/2.1.0": { "type": "project" },
                        "Polly/7.2.4": { "type": "package" }
                    }
                },
                "project": { "frameworks": { "net8.0": { "dependencies": {} } } }
            }"#,
        );

        assert_eq!(refs(&graph, ".root", true), vec![pair("shared.core", "= 2.1.0")]);
        assert_eq!(refs(&graph, "shared.core", false), vec![pair(".root", "= 2.1.0")]);
        assert!(refs(&graph, "polly", false).is_empty());
    }

    #[test]
    fn test_declared_project_reference_keeps_declared_range() {
        let graph = build(
            r#"{
                "targets": { "net8.0": { "Shared/1.0.0": { "type": "project" } } },
                "project": {
                    "frameworks": { "net8.0": { "dependencies": { "Shared": { "version": "[1.0.0, )" } } } }
                }
            }"#,
        );

        assert_eq!(refs(&graph, ".root", true), vec![pair("shared", ">= 1.0.0")]);
        assert_eq!(refs(&graph, "shared", false), vec![pair(".root", ">= 1.0.0")]);
    }

    #[test]
    fn test_dependency_group_fills_missing_root_dependencies() {
        let graph = build(
            r#"{
                "targets": {
                    "net8.0": { "A/1.0.0": {}, "B/2.0.0": {} }
                },
                "projectFileDependencyGroups": {
                    "net8.0": ["A >= 1.0.0", "B >= 2.0.0", "  "]
                },
                "project": {
                    "frameworks": { "net8.0": { "dependencies": { "A": { "version": "[1.0.0, )" } } } }
                }
            }"#,
        );

        assert_eq!(
            refs(&graph, ".root", true),
            vec![pair("a", ">= 1.0.0"), pair("b", ">= 2.0.0")]
        );
        assert_eq!(refs(&graph, "b", false), vec![pair(".root", ">= 2.0.0")]);
    }

    #[test]
    fn test_unresolved_dependency_keeps_placeholder() {
        let graph = build(
            r#"{
                "targets": { "net8.0": { "A/1.0.0": { "dependencies": { "Ghost": "1.0.0" } } } },
                "project": { "frameworks": { "net8.0": {} } }
            }"#,
        );

        let ghost = graph.get("ghost").unwrap();
        assert_eq!(ghost.version(), PLACEHOLDER_VERSION);
        assert!(!ghost.is_resolved());
        assert_eq!(graph.unresolved_packages().count(), 1);
    }

    #[test]
    fn test_declared_only_dependency_gets_placeholder_node() {
        let graph = build(
            r#"{
                "targets": { "net8.0": {} },
                "project": { "frameworks": { "net8.0": {
                    "dependencies": { "Never.Restored": { "version": "[2.0.0, )" } }
                } } }
            }"#,
        );

        let node = graph.get("never.restored").unwrap();
        assert_eq!(node.name(), "Never.Restored");
        assert!(!node.is_resolved());
        assert!(node.references().is_empty());
        assert_eq!(refs(&graph, ".root", true), vec![pair("never.restored", ">= 2.0.0")]);
    }

    #[test]
    fn test_old_style_target_uses_matching_framework_dependencies() {
        let assets: ProjectAssets = serde_json::from_str(
            r#"{
                "targets": {
                    ".NETCoreApp,Version=v3.1": { "A/1.0.0": { "type": "package" } },
                    ".NETStandard,Version=v2.0": { "B/1.0.0": { "type": "package" } }
                },
                "project": { "frameworks": {
                    "netcoreapp3.1": { "dependencies": { "A": { "version": "[1.0.0, )" } } },
                    "netstandard2.0": { "dependencies": { "B": { "version": "[1.0.0, )" } } }
                } }
            }"#,
        )
        .unwrap();

        for requested in ["netstandard2.0", ".NETStandard,Version=v2.0"] {
            let graph =
                GraphBuilder::build(ROOT_PACKAGE_ID, "App", &assets, Some(requested)).unwrap();
            assert_eq!(refs(&graph, ".root", true), vec![pair("b", ">= 1.0.0")]);
            assert_eq!(refs(&graph, "b", false), vec![pair(".root", ">= 1.0.0")]);
            assert!(graph.get("a").is_none());
        }
    }

    #[test]
    fn test_root_node_identity() {
        let assets: ProjectAssets = serde_json::from_str(
            r#"{
                "targets": { "net8.0": {} },
                "project": {
                    "version": "2.3.0",
                    "restore": { "projectName": "Contoso.Web" },
                    "frameworks": { "net8.0": {} }
                }
            }"#,
        )
        .unwrap();

        let graph = GraphBuilder::build_for_project(&assets, None).unwrap();
        let root = graph.root().unwrap();
        assert_eq!(graph.root_id().as_str(), ROOT_PACKAGE_ID);
        assert_eq!(root.name(), "Contoso.Web");
        assert_eq!(root.version(), "2.3.0");
        assert!(root.dependencies().is_empty());
    }

    #[test]
    fn test_custom_root_id() {
        let assets: ProjectAssets = serde_json::from_str(
            r#"{
                "targets": { "net8.0": { "A/1.0.0": {} } },
                "project": { "frameworks": { "net8.0": { "dependencies": { "A": { "version": "1.0.0" } } } } }
            }"#,
        )
        .unwrap();

        let graph = GraphBuilder::build("$App", "App", &assets, None).unwrap();
        assert!(graph.get("$app").is_some());
        assert_eq!(refs(&graph, "a", false), vec![pair("$app", ">= 1.0.0")]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let json = r#"{
            "targets": {
                "net8.0": {
                    "A/1.0.0": { "dependencies": { "B": "1.0.0", "C": "1.0.0" } },
                    "B/1.0.0": { "dependencies": { "C": "1.0.0" } },
                    "C/1.0.0": {}
                }
            },
            "project": { "frameworks": { "net8.0": { "dependencies": { "A": { "version": "1.0.0" } } } } }
        }"#;

        let first = build(json);
        let second = build(json);
        let ids = |g: &PackageGraph| g.iter().map(|(id, _)| id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        for (id, node) in first.iter() {
            assert_eq!(Some(node), second.get(id.as_str()));
        }
    }

    #[test]
    fn test_build_fails_without_project_section() {
        let assets: ProjectAssets =
            serde_json::from_str(r#"{ "targets": { "net8.0": {} } }"#).unwrap();
        let err = GraphBuilder::build(ROOT_PACKAGE_ID, "App", &assets, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::MissingStructure { .. })
        ));
    }
}
