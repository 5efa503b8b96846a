use crate::dependency_graph::domain::ProjectAssets;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::Path;

/// AssetsReader port for loading the resolved snapshot
///
/// This port abstracts where `project.assets.json` comes from, so the
/// application core only ever sees parsed [`ProjectAssets`].
pub trait AssetsReader {
    /// Reads the raw assets file
    ///
    /// # Arguments
    /// * `path` - Project directory or path to the assets file itself
    ///
    /// # Errors
    /// Returns an error if:
    /// - No assets file exists at or below the path
    /// - The file cannot be read due to permissions or I/O errors
    fn read_assets(&self, path: &Path) -> Result<String>;

    /// Reads and deserializes the assets file
    ///
    /// # Errors
    /// Returns an error if reading fails or the content is not valid assets JSON
    fn read_and_parse_assets(&self, path: &Path) -> Result<ProjectAssets> {
        let content = self.read_assets(path)?;
        serde_json::from_str(&content).map_err(|e| {
            GraphError::AssetsParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
