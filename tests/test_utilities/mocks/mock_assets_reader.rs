use nuget_graph::prelude::*;
use std::path::Path;

/// Mock AssetsReader serving fixed content, or failing like a missing file
pub struct MockAssetsReader {
    content: Option<String>,
}

impl MockAssetsReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl AssetsReader for MockAssetsReader {
    fn read_assets(&self, path: &Path) -> Result<String> {
        self.content.clone().ok_or_else(|| {
            GraphError::AssetsNotFound {
                path: path.join("obj").join("project.assets.json"),
                suggestion: "Run dotnet restore".to_string(),
            }
            .into()
        })
    }
}
