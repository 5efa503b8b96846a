use crate::dependency_graph::domain::ROOT_PACKAGE_ID;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::PathBuf;

/// GraphRequest - Internal request DTO for the graph building use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Path to `project.assets.json` or to the project directory holding it
    pub project_path: PathBuf,
    /// Requested target framework; `None` selects the first RID-less target
    pub target_framework: Option<String>,
    /// Identifier of the synthetic root node
    pub root_id: String,
    /// Package keys (`name` or `name/version`) to trace back to the root
    pub why: Vec<String>,
}

impl GraphRequest {
    pub fn builder() -> GraphRequestBuilder {
        GraphRequestBuilder::default()
    }

    pub fn includes_chains(&self) -> bool {
        !self.why.is_empty()
    }
}

/// Builder for [`GraphRequest`]
///
/// `build` validates the values that would otherwise surface as confusing
/// lookup failures deep inside the use case.
#[derive(Debug, Default)]
pub struct GraphRequestBuilder {
    project_path: Option<PathBuf>,
    target_framework: Option<String>,
    root_id: Option<String>,
    why: Vec<String>,
}

impl GraphRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn target_framework(mut self, framework: Option<String>) -> Self {
        self.target_framework = framework;
        self
    }

    pub fn root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }

    pub fn why(mut self, keys: Vec<String>) -> Self {
        self.why = keys;
        self
    }

    pub fn build(self) -> Result<GraphRequest> {
        let root_id = self.root_id.unwrap_or_else(|| ROOT_PACKAGE_ID.to_string());
        if root_id.trim().is_empty() {
            return Err(GraphError::Validation {
                message: "root id must not be empty".to_string(),
            }
            .into());
        }
        if self.why.iter().any(|key| key.trim().is_empty()) {
            return Err(GraphError::Validation {
                message: "package keys to trace must not be empty".to_string(),
            }
            .into());
        }

        Ok(GraphRequest {
            project_path: self.project_path.unwrap_or_else(|| PathBuf::from(".")),
            target_framework: self
                .target_framework
                .filter(|framework| !framework.trim().is_empty()),
            root_id,
            why: self.why.into_iter().map(|key| key.trim().to_string()).collect(),
        })
    }
}
