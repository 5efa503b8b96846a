use crate::application::read_models::{
    ChainsView, DirectDependencyView, GraphReadModel, PackageView, ReferenceView,
};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

const DIRECT_TABLE_HEADER: &str = "| Package | Declared Range | Resolved Version | Satisfied |\n";
const DIRECT_TABLE_SEPARATOR: &str = "|---------|----------------|------------------|-----------|\n";

const PACKAGE_TABLE_HEADER: &str = "| Package | Version | Dependencies | Referenced By |\n";
const PACKAGE_TABLE_SEPARATOR: &str = "|---------|---------|--------------|---------------|\n";

/// MarkdownFormatter adapter rendering the graph as a Markdown report
///
/// Sections: direct dependencies with a range check, the package inventory
/// with both edge directions, and the traced chains when present.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_range(range: &str) -> String {
        if range.is_empty() {
            "*any*".to_string()
        } else {
            format!("`{}`", Self::escape_markdown_table_cell(range))
        }
    }

    fn format_satisfied(satisfied: Option<bool>) -> &'static str {
        match satisfied {
            Some(true) => "✅",
            Some(false) => "❌",
            None => "-",
        }
    }

    fn format_edges(edges: &[ReferenceView]) -> String {
        if edges.is_empty() {
            return "-".to_string();
        }
        edges
            .iter()
            .map(|edge| {
                let id = Self::escape_markdown_table_cell(&edge.id);
                if edge.version_range.is_empty() {
                    id
                } else {
                    format!("{} ({})", id, Self::format_range(&edge.version_range))
                }
            })
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &GraphReadModel) {
        let metadata = &model.metadata;
        output.push_str(&format!("# Dependency Graph: {}\n\n", metadata.root.name));
        output.push_str(&format!(
            "Generated by {} {} on {} for target framework `{}`.\n\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp, metadata.target_framework
        ));
    }

    fn render_direct_dependencies(
        &self,
        output: &mut String,
        model: &GraphReadModel,
        direct: &[DirectDependencyView],
    ) {
        output.push_str("## Direct Dependencies\n\n");
        output.push_str(&format!(
            "Packages declared by {} {}.\n\n",
            model.metadata.root.name, model.metadata.root.version
        ));

        if direct.is_empty() {
            output.push_str("*No direct dependencies*\n\n");
            return;
        }

        output.push_str(DIRECT_TABLE_HEADER);
        output.push_str(DIRECT_TABLE_SEPARATOR);
        for dependency in direct {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&dependency.name),
                Self::format_range(&dependency.declared_range),
                Self::escape_markdown_table_cell(&dependency.resolved_version),
                Self::format_satisfied(dependency.satisfied)
            ));
        }
        output.push('\n');
    }

    fn render_packages(&self, output: &mut String, packages: &[PackageView]) {
        output.push_str("## Package Inventory\n\n");

        if packages.is_empty() {
            output.push_str("*No packages*\n\n");
            return;
        }

        output.push_str(PACKAGE_TABLE_HEADER);
        output.push_str(PACKAGE_TABLE_SEPARATOR);
        for package in packages {
            let version = if package.resolved {
                Self::escape_markdown_table_cell(&package.version)
            } else {
                format!("{} ⚠️", Self::escape_markdown_table_cell(&package.version))
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&package.name),
                version,
                Self::format_edges(&package.dependencies),
                Self::format_edges(&package.references)
            ));
        }
        output.push('\n');
    }

    fn render_chains(&self, output: &mut String, chains: &[ChainsView]) {
        output.push_str("## Dependency Chains\n\n");
        output.push_str("Reference paths from each requested package up to the project.\n\n");

        for entry in chains {
            output.push_str(&format!("### `{}`\n\n", entry.package_key));
            if entry.chains.is_empty() {
                output.push_str("*No chains*\n\n");
                continue;
            }
            for (index, chain) in entry.chains.iter().enumerate() {
                let links: Vec<String> = std::iter::once(entry.package_key.as_str())
                    .chain(chain.iter().map(String::as_str))
                    .map(|key| format!("`{}`", key))
                    .collect();
                output.push_str(&format!("{}. {}\n", index + 1, links.join(" ← ")));
            }
            output.push('\n');
        }
    }
}

impl GraphFormatter for MarkdownFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_direct_dependencies(&mut output, model, &model.direct_dependencies);
        self.render_packages(&mut output, &model.packages);
        if let Some(chains) = &model.chains {
            self.render_chains(&mut output, chains);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{GraphMetadataView, RootView};

    fn reference(id: &str, range: &str) -> ReferenceView {
        ReferenceView {
            id: id.to_string(),
            version_range: range.to_string(),
        }
    }

    fn create_test_model() -> GraphReadModel {
        GraphReadModel {
            metadata: GraphMetadataView {
                timestamp: "2024-01-15T10:30:00+00:00".to_string(),
                tool_name: "nuget-graph".to_string(),
                tool_version: "0.1.0".to_string(),
                target_framework: "net8.0".to_string(),
                root: RootView {
                    id: ".root".to_string(),
                    name: "App".to_string(),
                    version: "1.0.0".to_string(),
                },
            },
            packages: vec![
                PackageView {
                    id: "serilog".to_string(),
                    name: "Serilog".to_string(),
                    version: "3.1.1".to_string(),
                    resolved: true,
                    dependencies: vec![reference("ghost|pkg", ">= 1.0")],
                    references: vec![reference(".root", ">= 4.0.0")],
                },
                PackageView {
                    id: "ghost|pkg".to_string(),
                    name: "Ghost|Pkg".to_string(),
                    version: "<unknown>".to_string(),
                    resolved: false,
                    dependencies: vec![],
                    references: vec![reference("serilog", ">= 1.0")],
                },
            ],
            direct_dependencies: vec![DirectDependencyView {
                id: "serilog".to_string(),
                name: "Serilog".to_string(),
                declared_range: ">= 4.0.0".to_string(),
                resolved_version: "3.1.1".to_string(),
                satisfied: Some(false),
            }],
            chains: None,
        }
    }

    #[test]
    fn test_format_header() {
        let output = MarkdownFormatter::new().format(&create_test_model()).unwrap();

        assert!(output.starts_with("# Dependency Graph: App\n\n"));
        assert!(output.contains("for target framework `net8.0`"));
        assert!(output.contains("Generated by nuget-graph 0.1.0"));
    }

    #[test]
    fn test_format_direct_dependency_table() {
        let output = MarkdownFormatter::new().format(&create_test_model()).unwrap();

        assert!(output.contains(DIRECT_TABLE_HEADER));
        assert!(output.contains("| Serilog | `>= 4.0.0` | 3.1.1 | ❌ |"));
    }

    #[test]
    fn test_format_package_table_escapes_and_marks_unresolved() {
        let output = MarkdownFormatter::new().format(&create_test_model()).unwrap();

        assert!(output.contains("| Ghost\\|Pkg | <unknown> ⚠️ | - | serilog (`>= 1.0`) |"));
        assert!(output.contains("| Serilog | 3.1.1 | ghost\\|pkg (`>= 1.0`) | .root (`>= 4.0.0`) |"));
    }

    #[test]
    fn test_format_without_chains_omits_section() {
        let output = MarkdownFormatter::new().format(&create_test_model()).unwrap();
        assert!(!output.contains("## Dependency Chains"));
    }

    #[test]
    fn test_format_chains() {
        let mut model = create_test_model();
        model.chains = Some(vec![
            ChainsView {
                package_key: "ghost".to_string(),
                chains: vec![vec!["serilog/3.1.1".to_string(), ".root".to_string()]],
            },
            ChainsView {
                package_key: "nothing".to_string(),
                chains: vec![],
            },
        ]);

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("### `ghost`"));
        assert!(output.contains("1. `ghost` ← `serilog/3.1.1` ← `.root`"));
        assert!(output.contains("### `nothing`\n\n*No chains*"));
    }

    #[test]
    fn test_format_empty_graph() {
        let mut model = create_test_model();
        model.packages.clear();
        model.direct_dependencies.clear();

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("*No direct dependencies*"));
        assert!(output.contains("*No packages*"));
    }

    #[test]
    fn test_format_range_any() {
        assert_eq!(MarkdownFormatter::format_range(""), "*any*");
        assert_eq!(MarkdownFormatter::format_satisfied(None), "-");
    }
}
