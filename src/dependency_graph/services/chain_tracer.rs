use crate::dependency_graph::domain::{split_package_key, PackageGraph, PackageId};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// Path of node keys from a queried package up to a node nothing references
/// (normally the root). The queried package itself is not included.
pub type DependencyChain = Vec<String>;

/// ChainTracer service answering "why is this package in my project?"
///
/// Expands `references` edges depth-first with an explicit work-list, so the
/// traversal depth is not limited by the call stack.
pub struct ChainTracer;

struct Frame {
    id: PackageId,
    chain: DependencyChain,
    path: Vec<PackageId>,
}

impl ChainTracer {
    /// Computes every reference chain leading from `package_key` upwards
    ///
    /// `package_key` is `"<name>/<version>"` or a bare `"<name>"`; names are
    /// matched case-insensitively. Chains come back in the order the
    /// references were recorded.
    ///
    /// # Errors
    /// Returns `PackageNotFound` for an unknown name or a version other than
    /// the resolved one, and `DependencyCycle` when a reference path revisits
    /// a package.
    pub fn trace(graph: &PackageGraph, package_key: &str) -> Result<Vec<DependencyChain>> {
        let (name, version) = split_package_key(package_key.trim());
        let start = PackageId::new(name);

        let found = graph.get(name).is_some_and(|node| {
            version.map_or(true, |v| v.eq_ignore_ascii_case(node.version()))
        });
        if !found {
            return Err(GraphError::PackageNotFound {
                key: package_key.to_string(),
            }
            .into());
        }

        let mut chains = Vec::new();
        let mut stack = vec![Frame {
            id: start.clone(),
            chain: Vec::new(),
            path: vec![start],
        }];

        while let Some(frame) = stack.pop() {
            let references = graph
                .get(frame.id.as_str())
                .map(|node| node.references())
                .unwrap_or_default();

            if references.is_empty() {
                chains.push(frame.chain);
                continue;
            }

            // Reversed so the first reference is expanded first.
            for reference in references.iter().rev() {
                if frame.path.contains(&reference.id) {
                    let mut cycle: Vec<String> =
                        frame.path.iter().map(|id| graph.node_key(id)).collect();
                    cycle.push(graph.node_key(&reference.id));
                    return Err(GraphError::DependencyCycle { path: cycle }.into());
                }

                let mut chain = frame.chain.clone();
                chain.push(graph.node_key(&reference.id));
                let mut path = frame.path.clone();
                path.push(reference.id.clone());
                stack.push(Frame {
                    id: reference.id.clone(),
                    chain,
                    path,
                });
            }
        }

        Ok(chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{ProjectAssets, ROOT_PACKAGE_ID};
    use crate::dependency_graph::services::GraphBuilder;

    fn graph(json: &str) -> PackageGraph {
        let assets: ProjectAssets = serde_json::from_str(json).unwrap();
        GraphBuilder::build(ROOT_PACKAGE_ID, "App", &assets, None).unwrap()
    }

    fn chain(keys: &[&str]) -> DependencyChain {
        keys.iter().map(|k| k.to_string()).collect()
    }

    const FAN_IN: &str = r#"{
        "targets": {
            "net8.0": {
                "X/1.0": {},
                "Y/2.0": {},
                "Z/1.0": { "dependencies": { "Y": "2.0" } }
            }
        },
        "project": {
            "frameworks": {
                "net8.0": {
                    "dependencies": {
                        "X": { "version": "1.0" },
                        "Y": { "version": "2.0" },
                        "Z": { "version": "1.0" }
                    }
                }
            }
        }
    }"#;

    #[test]
    fn test_trace_package_referenced_only_by_root() {
        let graph = graph(FAN_IN);
        let chains = ChainTracer::trace(&graph, "x/1.0").unwrap();
        assert_eq!(chains, vec![chain(&[".root"])]);
    }

    #[test]
    fn test_trace_fans_out_in_reference_order() {
        let graph = graph(FAN_IN);
        let chains = ChainTracer::trace(&graph, "y/2.0").unwrap();
        assert_eq!(chains, vec![chain(&[".root"]), chain(&["z/1.0", ".root"])]);
    }

    #[test]
    fn test_trace_deep_chain() {
        let graph = graph(
            r#"{
                "targets": {
                    "net8.0": {
                        "A/1.0.0": { "dependencies": { "B": "1.0.0" } },
                        "B/1.0.0": { "dependencies": { "C": "1.0.0" } },
                        "C/1.0.0": {}
                    }
                },
                "project": { "frameworks": { "net8.0": { "dependencies": { "A": { "version": "1.0.0" } } } } }
            }"#,
        );

        let chains = ChainTracer::trace(&graph, "C/1.0.0").unwrap();
        assert_eq!(chains, vec![chain(&["b/1.0.0", "a/1.0.0", ".root"])]);
    }

    #[test]
    fn test_trace_bare_name_and_case_insensitive() {
        let graph = graph(FAN_IN);
        assert_eq!(
            ChainTracer::trace(&graph, "X").unwrap(),
            ChainTracer::trace(&graph, "x/1.0").unwrap()
        );
    }

    #[test]
    fn test_trace_root_yields_single_empty_chain() {
        let graph = graph(FAN_IN);
        let chains = ChainTracer::trace(&graph, ROOT_PACKAGE_ID).unwrap();
        assert_eq!(chains, vec![DependencyChain::new()]);
    }

    #[test]
    fn test_trace_unknown_package() {
        let graph = graph(FAN_IN);
        let err = ChainTracer::trace(&graph, "nope/1.0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::PackageNotFound { .. })
        ));
    }

    #[test]
    fn test_trace_wrong_version() {
        let graph = graph(FAN_IN);
        let err = ChainTracer::trace(&graph, "x/9.9").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::PackageNotFound { key }) if key == "x/9.9"
        ));
    }

    #[test]
    fn test_trace_detects_cycle() {
        let graph = graph(
            r#"{
                "targets": {
                    "net8.0": {
                        "A/1.0.0": { "dependencies": { "B": "1.0.0" } },
                        "B/1.0.0": { "dependencies": { "A": "1.0.0" } }
                    }
                },
                "project": { "frameworks": { "net8.0": {} } }
            }"#,
        );

        let err = ChainTracer::trace(&graph, "a/1.0.0").unwrap_err();
        match err.downcast_ref::<GraphError>() {
            Some(GraphError::DependencyCycle { path }) => {
                assert_eq!(path, &chain(&["a/1.0.0", "b/1.0.0", "a/1.0.0"]));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
