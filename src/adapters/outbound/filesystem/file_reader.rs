use crate::ports::outbound::AssetsReader;
use crate::shared::error::GraphError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the restore snapshot written by NuGet
pub const ASSETS_FILE_NAME: &str = "project.assets.json";

/// FileSystemReader adapter for reading the restore snapshot from disk
///
/// Accepts either the assets file itself or a project directory. For a
/// directory, `obj/project.assets.json` is tried before
/// `project.assets.json`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the assets file for a file or project directory path
    ///
    /// # Errors
    /// Returns `AssetsNotFound` when no candidate exists
    pub fn locate_assets(&self, path: &Path) -> Result<PathBuf> {
        if !path.is_dir() {
            if fs::symlink_metadata(path).is_ok() {
                return Ok(path.to_path_buf());
            }
            return Err(GraphError::AssetsNotFound {
                path: path.to_path_buf(),
                suggestion: "Please check the path, or run `dotnet restore` to produce the file"
                    .to_string(),
            }
            .into());
        }

        let candidates = [path.join("obj").join(ASSETS_FILE_NAME), path.join(ASSETS_FILE_NAME)];
        candidates
            .iter()
            .find(|candidate| fs::symlink_metadata(candidate).is_ok())
            .cloned()
            .ok_or_else(|| {
                GraphError::AssetsNotFound {
                    path: candidates[0].clone(),
                    suggestion: format!(
                        "No {} in \"{}\" or its obj/ directory.\n   \
                         Please run `dotnet restore` first, or pass the file path directly.",
                        ASSETS_FILE_NAME,
                        path.display()
                    ),
                }
                .into()
            })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetsReader for FileSystemReader {
    fn read_assets(&self, path: &Path) -> Result<String> {
        let assets_path = self.locate_assets(path)?;

        validate_regular_file(&assets_path, ASSETS_FILE_NAME)?;

        fs::read_to_string(&assets_path).map_err(|e| {
            GraphError::AssetsParseError {
                path: assets_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
