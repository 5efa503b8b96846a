use crate::application::read_models::{GraphReadModel, PackageView, ReferenceView};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// JsonFormatter adapter rendering the graph as a pretty-printed JSON document
///
/// Packages are keyed by canonical id and chains by the requested package
/// key; both maps keep graph and request order.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    metadata: JsonMetadata<'a>,
    packages: IndexMap<&'a str, JsonPackage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chains: Option<IndexMap<&'a str, &'a [Vec<String>]>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMetadata<'a> {
    timestamp: &'a str,
    tool: JsonTool<'a>,
    target_framework: &'a str,
    root: JsonRoot<'a>,
}

#[derive(Serialize)]
struct JsonTool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct JsonRoot<'a> {
    id: &'a str,
    name: &'a str,
    version: &'a str,
    dependencies: Vec<JsonReference<'a>>,
}

#[derive(Serialize)]
struct JsonPackage<'a> {
    name: &'a str,
    version: &'a str,
    resolved: bool,
    dependencies: Vec<JsonReference<'a>>,
    references: Vec<JsonReference<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReference<'a> {
    id: &'a str,
    version_range: &'a str,
}

impl<'a> From<&'a ReferenceView> for JsonReference<'a> {
    fn from(reference: &'a ReferenceView) -> Self {
        Self {
            id: &reference.id,
            version_range: &reference.version_range,
        }
    }
}

impl<'a> From<&'a PackageView> for JsonPackage<'a> {
    fn from(package: &'a PackageView) -> Self {
        Self {
            name: &package.name,
            version: &package.version,
            resolved: package.resolved,
            dependencies: package.dependencies.iter().map(JsonReference::from).collect(),
            references: package.references.iter().map(JsonReference::from).collect(),
        }
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let metadata = &model.metadata;
        let document = JsonDocument {
            metadata: JsonMetadata {
                timestamp: &metadata.timestamp,
                tool: JsonTool {
                    name: &metadata.tool_name,
                    version: &metadata.tool_version,
                },
                target_framework: &metadata.target_framework,
                root: JsonRoot {
                    id: &metadata.root.id,
                    name: &metadata.root.name,
                    version: &metadata.root.version,
                    dependencies: model
                        .direct_dependencies
                        .iter()
                        .map(|dependency| JsonReference {
                            id: &dependency.id,
                            version_range: &dependency.declared_range,
                        })
                        .collect(),
                },
            },
            packages: model
                .packages
                .iter()
                .map(|package| (package.id.as_str(), JsonPackage::from(package)))
                .collect(),
            chains: model.chains.as_ref().map(|chains| {
                chains
                    .iter()
                    .map(|entry| (entry.package_key.as_str(), entry.chains.as_slice()))
                    .collect()
            }),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize graph to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
